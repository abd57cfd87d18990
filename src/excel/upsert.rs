//! Workbook upsert - write one onboarding sheet into the output workbook
//!
//! The output workbook accumulates one sheet per start date across runs.
//! Writing a sheet whose name already exists replaces it; every other sheet
//! is kept with its styling.

use crate::error::{RosterError, RosterResult};
use crate::excel::formatter::SheetFormatter;
use crate::types::{OutputColumn, OutputRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, info};
use umya_spreadsheet::{reader, writer, Spreadsheet};

/// Outcome of a successful upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookWriteResult {
    pub path: PathBuf,
    pub sheet_name: String,
    /// Data rows written, header excluded
    pub rows_written: usize,
    /// A sheet with the same name existed and was replaced
    pub replaced_existing: bool,
    /// Sheet names of the saved workbook, in tab order
    pub sheet_names: Vec<String>,
}

/// Insert (or replace) `sheet_name` in the workbook at `path` and save it.
///
/// The sheet is fully populated and formatted in memory, then the workbook is
/// written to a temporary file beside `path` and moved over it, so a failed
/// save leaves the previous file untouched.
pub fn upsert(
    path: &Path,
    sheet_name: &str,
    columns: &[OutputColumn],
    records: &[OutputRecord],
    formatter: &dyn SheetFormatter,
) -> RosterResult<WorkbookWriteResult> {
    let mut book = load_or_create(path)?;

    let replaced_existing = book.get_sheet_by_name(sheet_name).is_some();
    if replaced_existing {
        book.remove_sheet_by_name(sheet_name)
            .map_err(|e| write_error(path, format!("Failed to remove sheet '{}': {}", sheet_name, e)))?;
        debug!(sheet = sheet_name, "removed existing sheet");
    }

    let sheet = book
        .new_sheet(sheet_name)
        .map_err(|e| write_error(path, format!("Failed to add sheet '{}': {}", sheet_name, e)))?;

    for (col_idx, column) in columns.iter().enumerate() {
        sheet
            .get_cell_mut((col_idx as u32 + 1, 1))
            .set_value_string(column.header());
    }
    for (row_idx, record) in records.iter().enumerate() {
        let excel_row = row_idx as u32 + 2; // row 1 is the header
        for (col_idx, value) in record.row(columns).iter().enumerate() {
            if !value.is_empty() {
                sheet
                    .get_cell_mut((col_idx as u32 + 1, excel_row))
                    .set_value_string(value);
            }
        }
    }

    formatter.format(sheet);

    save_atomic(&book, path)?;

    let sheet_names = book
        .get_sheet_collection()
        .iter()
        .map(|s| s.get_name().to_string())
        .collect();

    info!(
        path = %path.display(),
        sheet = sheet_name,
        rows = records.len(),
        replaced = replaced_existing,
        "saved output workbook"
    );

    Ok(WorkbookWriteResult {
        path: path.to_path_buf(),
        sheet_name: sheet_name.to_string(),
        rows_written: records.len(),
        replaced_existing,
        sheet_names,
    })
}

/// Open the workbook at `path`, or start an empty one if there is no file.
fn load_or_create(path: &Path) -> RosterResult<Spreadsheet> {
    if !path.exists() {
        debug!(path = %path.display(), "output workbook not found, creating");
        return Ok(umya_spreadsheet::new_file_empty_worksheet());
    }
    reader::xlsx::read(path).map_err(|e| RosterError::WorkbookRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn save_atomic(book: &Spreadsheet, path: &Path) -> RosterResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The replacement keeps the mode of the file it replaces; a new file gets
    // the usual 0666 minus umask instead of the 0600 temp-file default.
    let existing = fs::metadata(path).ok().map(|m| m.permissions());
    let mut builder = Builder::new();
    builder.prefix(".nh-roster-").suffix(".xlsx");
    #[cfg(unix)]
    if existing.is_none() {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| write_error(path, format!("Failed to create temporary file: {}", e)))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| write_error(path, format!("Failed to copy permissions: {}", e)))?;
    }
    writer::xlsx::write_writer(book, tmp.as_file_mut())
        .map_err(|e| write_error(path, e.to_string()))?;
    tmp.persist(path)
        .map_err(|e| write_error(path, e.error.to_string()))?;
    Ok(())
}

fn write_error(path: &Path, message: String) -> RosterError {
    RosterError::WorkbookWrite {
        path: path.to_path_buf(),
        message,
    }
}
