//! End-to-end run: read → select → project → name → upsert → launch

use crate::config::RunConfig;
use crate::core::naming;
use crate::core::projector::Layout;
use crate::error::RosterResult;
use crate::excel::formatter::SheetFormatter;
use crate::excel::importer::SourceReader;
use crate::excel::upsert::{upsert, WorkbookWriteResult};
use crate::launcher::Launcher;
use crate::types::{OutputRecord, SourceRow};
use tracing::{info, warn};

/// Everything decided before the output workbook is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub sheet_name: String,
    pub layout: Layout,
    pub records: Vec<OutputRecord>,
}

/// Build the sheet plan from already-read tracker rows.
pub fn plan_from_rows(config: &RunConfig, rows: &[SourceRow]) -> SheetPlan {
    let selector = config.mode.selector();
    let batch = selector.select(rows);
    let records = config.mode.projector().project_batch(&batch);
    let sheet_name = naming::sheet_name(naming::representative_date(&selector, &batch));

    info!(
        mode = %config.mode.describe(),
        selected = batch.len(),
        sheet = %sheet_name,
        "planned onboarding sheet"
    );

    SheetPlan {
        sheet_name,
        layout: config.mode.layout(),
        records,
    }
}

/// Read the tracker named in `config` and plan the sheet.
pub fn plan(config: &RunConfig) -> RosterResult<SheetPlan> {
    let rows = SourceReader::new(&config.input_file).read()?;
    Ok(plan_from_rows(config, &rows))
}

/// Plan, write and open. A viewer that fails to open is logged, not returned.
pub fn run(
    config: &RunConfig,
    formatter: &dyn SheetFormatter,
    launcher: &dyn Launcher,
) -> RosterResult<WorkbookWriteResult> {
    let plan = plan(config)?;
    let result = upsert(
        &config.output_file,
        &plan.sheet_name,
        plan.layout.columns(),
        &plan.records,
        formatter,
    )?;

    if let Err(e) = launcher.launch(&result.path) {
        warn!(error = %e, "could not open output workbook");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use crate::types::RawValue;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn hire(position: usize, name: &str, department: &str, start: &str) -> SourceRow {
        SourceRow {
            position,
            candidate: RawValue::from(name),
            better_email: RawValue::from(
                format!("{}@better.com", name.to_lowercase().replace(' ', ".")).as_str(),
            ),
            department: RawValue::from(department),
            start_date: RawValue::from(start),
            time_zone: RawValue::from("PST"),
            ..Default::default()
        }
    }

    fn config(mode: RunMode) -> RunConfig {
        RunConfig {
            input_file: PathBuf::from("tracker.xlsx"),
            output_file: PathBuf::from("onboarding.xlsx"),
            mode,
        }
    }

    #[test]
    fn test_plan_by_date() {
        let rows = vec![
            hire(1, "Jane Doe", "SPOC", "3/3/2025"),
            hire(2, "Sam Lee", "Neo", "3/4/2025"),
            hire(3, "Ana Ruiz", "Neo", "3/3/2025"),
        ];
        let mode = RunMode::ByDate {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        };
        let plan = plan_from_rows(&config(mode), &rows);

        assert_eq!(plan.sheet_name, "NH_March_03_2025");
        assert_eq!(plan.layout, Layout::Tracking);
        assert_eq!(plan.records.len(), 2);
        assert_eq!(plan.records[1].email_alias, "a_ruiz@neopoweredbybetter.com");
        assert_eq!(plan.records[1].start_time, "12:30 AM PST");
    }

    #[test]
    fn test_plan_by_date_without_matches() {
        let rows = vec![hire(1, "Jane Doe", "SPOC", "3/3/2025")];
        let mode = RunMode::ByDate {
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        };
        let plan = plan_from_rows(&config(mode), &rows);
        assert!(plan.records.is_empty());
        assert_eq!(plan.sheet_name, "Sheet_NoStartDate");
    }

    #[test]
    fn test_plan_by_range_names_after_first_row() {
        let rows = vec![
            hire(1, "Jane Doe", "SPOC", "3/3/2025"),
            hire(2, "Sam Lee", "Neo", "3/10/2025"),
            hire(3, "Ana Ruiz", "SPOC", "3/17/2025"),
        ];
        let plan = plan_from_rows(&config(RunMode::by_range(2, 3).unwrap()), &rows);

        assert_eq!(plan.sheet_name, "NH_March_10_2025");
        assert_eq!(plan.layout, Layout::Welcome);
        assert_eq!(plan.records.len(), 2);
        // Neo has no alias in range mode
        assert_eq!(plan.records[0].email_alias, "N/A");
        assert_eq!(plan.records[1].email_alias, "anar@better.com");
    }
}
