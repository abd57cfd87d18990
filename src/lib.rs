//! NH Roster - new-hire onboarding sheets from the FTE Hire tracker
//!
//! This library reads candidate rows from the hiring tracker, selects a batch
//! (by start date or by row range), derives the onboarding fields and writes
//! the batch as a named sheet into the onboarding workbook.
//!
//! # Features
//!
//! - Date-match or row-range batch selection
//! - SPOC (`janed@better.com`) and Neo (`j_doe@neopoweredbybetter.com`) aliases
//! - Usernames, start times and long-form start dates
//! - Replace-by-name sheet upsert with atomic save
//! - House styling and opening the result in the default viewer
//!
//! # Example
//!
//! ```no_run
//! use nh_roster::config::Settings;
//! use nh_roster::core::pipeline;
//! use nh_roster::excel::RosterStyle;
//! use nh_roster::launcher::NoLaunch;
//! use std::path::PathBuf;
//!
//! let config = Settings {
//!     input_file: Some(PathBuf::from("tracker.xlsx")),
//!     output_file: Some(PathBuf::from("onboarding.xlsx")),
//!     start_date: Some("03/03/2025".to_string()),
//!     ..Default::default()
//! }
//! .resolve()?;
//!
//! let result = pipeline::run(&config, &RosterStyle::default(), &NoLaunch)?;
//! println!("Wrote {} hires to {}", result.rows_written, result.sheet_name);
//! # Ok::<(), nh_roster::error::RosterError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod launcher;
pub mod types;

// Re-export commonly used types
pub use config::{RunConfig, RunMode, Settings};
pub use error::{RosterError, RosterResult};
pub use types::{OutputColumn, OutputRecord, RawValue, SourceRow};
