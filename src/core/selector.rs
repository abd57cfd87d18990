//! Row selection strategies

use crate::core::derive::parse_date;
use crate::types::SourceRow;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Chooses which tracker rows go into a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSelector {
    /// Rows whose Start Date falls on this day. Unparseable dates never match.
    DateMatch(NaiveDate),
    /// Rows at 1-based inclusive positions `start..=end` in sheet order.
    Range { start: usize, end: usize },
}

impl RowSelector {
    /// Select rows, keeping source order.
    pub fn select<'a>(&self, rows: &'a [SourceRow]) -> Vec<&'a SourceRow> {
        match *self {
            RowSelector::DateMatch(target) => {
                let batch: Vec<&SourceRow> = rows
                    .iter()
                    .filter(|row| parse_date(&row.start_date) == Some(target))
                    .collect();
                debug!(target_date = %target, matched = batch.len(), "date-match selection");
                batch
            }
            RowSelector::Range { start, end } => select_range(rows, start, end),
        }
    }
}

fn select_range(rows: &[SourceRow], start: usize, end: usize) -> Vec<&SourceRow> {
    if start == 0 || start > end {
        warn!(start, end, "empty row range");
        return Vec::new();
    }
    if start > rows.len() {
        warn!(start, available = rows.len(), "row range starts past the last row");
        return Vec::new();
    }
    let clamped_end = end.min(rows.len());
    if clamped_end < end {
        warn!(end, clamped_end, "row range clamped to the last row");
    }
    let batch = rows[start - 1..clamped_end].iter().collect::<Vec<_>>();
    debug!(start, end = clamped_end, selected = batch.len(), "range selection");
    batch
}
