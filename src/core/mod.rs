//! Batch selection, field derivation and sheet naming

pub mod derive;
pub mod naming;
pub mod pipeline;
pub mod projector;
pub mod selector;

pub use projector::{Layout, RecordProjector};
pub use selector::RowSelector;
