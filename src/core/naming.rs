//! Output sheet naming

use crate::core::derive::parse_date;
use crate::core::selector::RowSelector;
use crate::types::SourceRow;
use chrono::NaiveDate;

/// Used when a batch has no usable start date.
pub const NO_START_DATE_SHEET: &str = "Sheet_NoStartDate";

/// `NH_March_03_2025`, or the no-start-date sentinel.
pub fn sheet_name(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("NH_{}", date.format("%B_%d_%Y")),
        None => NO_START_DATE_SHEET.to_string(),
    }
}

/// The date a batch is named after.
///
/// Date-match batches use the target date; range batches use the first
/// selected row's start date even if later rows start on other days.
/// Empty batches have no representative date.
pub fn representative_date(selector: &RowSelector, batch: &[&SourceRow]) -> Option<NaiveDate> {
    let first = batch.first()?;
    match selector {
        RowSelector::DateMatch(target) => Some(*target),
        RowSelector::Range { .. } => parse_date(&first.start_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawValue;

    fn dated(text: &str) -> SourceRow {
        SourceRow {
            start_date: RawValue::from(text),
            ..Default::default()
        }
    }

    #[test]
    fn test_sheet_name_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3);
        assert_eq!(sheet_name(date), "NH_March_03_2025");
        assert_eq!(
            sheet_name(NaiveDate::from_ymd_opt(2024, 12, 25)),
            "NH_December_25_2024"
        );
        assert_eq!(sheet_name(None), "Sheet_NoStartDate");
    }

    #[test]
    fn test_sheet_name_is_sheet_safe() {
        let name = sheet_name(NaiveDate::from_ymd_opt(2025, 9, 30));
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        assert!(name.len() <= 31);
    }

    #[test]
    fn test_range_batch_uses_first_row_date() {
        let rows = [dated("3/10/2025"), dated("3/17/2025")];
        let batch: Vec<&SourceRow> = rows.iter().collect();
        let selector = RowSelector::Range { start: 1, end: 2 };
        assert_eq!(
            representative_date(&selector, &batch),
            NaiveDate::from_ymd_opt(2025, 3, 10)
        );
    }

    #[test]
    fn test_range_batch_with_bad_first_date_has_none() {
        let rows = [dated("pending"), dated("3/17/2025")];
        let batch: Vec<&SourceRow> = rows.iter().collect();
        let selector = RowSelector::Range { start: 1, end: 2 };
        assert_eq!(representative_date(&selector, &batch), None);
    }

    #[test]
    fn test_date_match_uses_target() {
        let rows = [dated("03/03/2025")];
        let batch: Vec<&SourceRow> = rows.iter().collect();
        let target = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(
            representative_date(&RowSelector::DateMatch(target), &batch),
            Some(target)
        );
        assert_eq!(representative_date(&RowSelector::DateMatch(target), &[]), None);
    }
}
