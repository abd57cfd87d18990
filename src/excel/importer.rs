//! Source reader - FTE Hire tracker (.xlsx/.xls/.ods) → source rows

use crate::core::derive::parse_date_text;
use crate::error::{RosterError, RosterResult};
use crate::types::{RawValue, SourceRow};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sheet holding the hiring tracker.
pub const SOURCE_SHEET: &str = "FTE Hire";

pub const COL_CANDIDATE: &str = "Candidate";
pub const COL_PERSONAL_EMAIL: &str = "Personal Email";
pub const COL_BETTER_EMAIL: &str = "Better Email";
pub const COL_JOB: &str = "Job";
pub const COL_DEPARTMENT: &str = "Department";
pub const COL_OFFICE: &str = "Office";
pub const COL_START_DATE: &str = "Start Date";
pub const COL_OFFICE_LOCATION: &str = "Office Location (for OL)";
pub const COL_TIME_ZONE: &str = "TimeZone";

/// Headers the tracker must carry (after trimming).
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_CANDIDATE,
    COL_PERSONAL_EMAIL,
    COL_BETTER_EMAIL,
    COL_JOB,
    COL_DEPARTMENT,
    COL_OFFICE,
    COL_START_DATE,
    COL_OFFICE_LOCATION,
    COL_TIME_ZONE,
];

/// Reads candidate rows from the tracker workbook.
pub struct SourceReader {
    path: PathBuf,
}

impl SourceReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> RosterResult<Vec<SourceRow>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| RosterError::SourceRead {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if !workbook.sheet_names().iter().any(|name| name == SOURCE_SHEET) {
            return Err(RosterError::SheetNotFound {
                sheet: SOURCE_SHEET.to_string(),
                path: self.path.clone(),
            });
        }

        let range = workbook
            .worksheet_range(SOURCE_SHEET)
            .map_err(|e| RosterError::SourceRead {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let rows = rows_from_range(&range)?;
        debug!(path = %self.path.display(), rows = rows.len(), "read source sheet");
        Ok(rows)
    }
}

/// Convert a sheet range (header row first) into source rows.
pub fn rows_from_range(range: &Range<Data>) -> RosterResult<Vec<SourceRow>> {
    let mut rows_iter = range.rows();
    let header = match rows_iter.next() {
        Some(header) => header,
        None => {
            return Err(RosterError::MissingColumns {
                sheet: SOURCE_SHEET.to_string(),
                columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            })
        }
    };

    let index = header_index(header)?;
    let column = |name: &str| index[name];

    let mut rows: Vec<SourceRow> = rows_iter
        .enumerate()
        .map(|(i, cells)| {
            let cell = |name: &str| {
                cells
                    .get(column(name))
                    .map(raw_value)
                    .unwrap_or_default()
            };
            SourceRow {
                position: i + 1,
                candidate: cell(COL_CANDIDATE),
                personal_email: cell(COL_PERSONAL_EMAIL),
                better_email: cell(COL_BETTER_EMAIL),
                job: cell(COL_JOB),
                department: cell(COL_DEPARTMENT),
                office: cell(COL_OFFICE),
                start_date: cell(COL_START_DATE),
                office_location: cell(COL_OFFICE_LOCATION),
                time_zone: cell(COL_TIME_ZONE),
            }
        })
        .collect();

    // Formatted-but-empty rows at the bottom of the tracker are not hires
    while rows.last().is_some_and(SourceRow::is_blank) {
        rows.pop();
    }

    Ok(rows)
}

/// Map each required header to its column, first occurrence wins.
fn header_index(header: &[Data]) -> RosterResult<HashMap<&'static str, usize>> {
    let trimmed: Vec<String> = header.iter().map(|c| c.to_string().trim().to_string()).collect();

    let mut index = HashMap::new();
    let mut missing = Vec::new();
    for name in REQUIRED_COLUMNS {
        match trimmed.iter().position(|h| h == name) {
            Some(col) => {
                index.insert(name, col);
            }
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(index)
    } else {
        Err(RosterError::MissingColumns {
            sheet: SOURCE_SHEET.to_string(),
            columns: missing,
        })
    }
}

/// Coerce a calamine cell. Error cells count as empty.
pub fn raw_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty | Data::Error(_) => RawValue::Empty,
        Data::String(s) => RawValue::Text(s.clone()),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(RawValue::DateTime)
            .unwrap_or(RawValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_date_text(s)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(RawValue::DateTime)
            .unwrap_or_else(|| RawValue::Text(s.clone())),
        Data::DurationIso(s) => RawValue::Text(s.clone()),
    }
}
