//! Excel reading and writing
//!
//! - Import: FTE Hire tracker (.xlsx/.xls/.ods) → source rows
//! - Upsert: onboarding sheet → output workbook (.xlsx), replace by name
//! - Formatting: house style for the written sheet

pub mod formatter;
pub mod importer;
pub mod upsert;

pub use formatter::{NoFormatting, RosterStyle, SheetFormatter};
pub use importer::SourceReader;
pub use upsert::{upsert, WorkbookWriteResult};
