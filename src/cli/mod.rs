//! CLI command handlers

pub mod commands;

pub use commands::{build, load_config, preview};
