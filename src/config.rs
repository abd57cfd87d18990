//! Run configuration
//!
//! Settings come from an optional YAML file, then environment variables and
//! command-line flags (later sources win). The merged settings resolve into a
//! [`RunConfig`] that is passed explicitly through the pipeline.

use crate::core::derive::AliasScheme;
use crate::core::projector::{Layout, RecordProjector};
use crate::core::selector::RowSelector;
use crate::error::{RosterError, RosterResult};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Format of configured start dates (MM/DD/YYYY).
pub const START_DATE_FORMAT: &str = "%m/%d/%Y";

/// Unresolved settings from one source. Every field is optional so sources
/// can be layered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, alias = "inputFile")]
    pub input_file: Option<PathBuf>,
    #[serde(default, alias = "outputFile")]
    pub output_file: Option<PathBuf>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "startRow")]
    pub start_row: Option<usize>,
    #[serde(default, alias = "endRow")]
    pub end_row: Option<usize>,
}

impl Settings {
    pub fn from_yaml_str(content: &str) -> RosterResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> RosterResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RosterError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Overlay `other` on top of `self`.
    ///
    /// A selector given in `other` replaces both selectors of `self`, so a
    /// `--start-date` flag can override a range from the config file.
    pub fn merge(self, other: Settings) -> Settings {
        let other_selects = other.start_date.is_some()
            || other.start_row.is_some()
            || other.end_row.is_some();
        let (start_date, start_row, end_row) = if other_selects {
            (other.start_date, other.start_row, other.end_row)
        } else {
            (self.start_date, self.start_row, self.end_row)
        };
        Settings {
            input_file: other.input_file.or(self.input_file),
            output_file: other.output_file.or(self.output_file),
            start_date,
            start_row,
            end_row,
        }
    }

    pub fn resolve(self) -> RosterResult<RunConfig> {
        let input_file = self
            .input_file
            .ok_or_else(|| RosterError::Config("No input file given".to_string()))?;
        let output_file = self
            .output_file
            .ok_or_else(|| RosterError::Config("No output file given".to_string()))?;

        let mode = match (self.start_date, self.start_row, self.end_row) {
            (Some(date), None, None) => RunMode::ByDate {
                start_date: parse_start_date(&date)?,
            },
            (None, Some(start_row), Some(end_row)) => RunMode::by_range(start_row, end_row)?,
            (None, None, None) => {
                return Err(RosterError::Config(
                    "Give either a start date or a start/end row range".to_string(),
                ))
            }
            (Some(_), _, _) => {
                return Err(RosterError::Config(
                    "Start date and row range are mutually exclusive".to_string(),
                ))
            }
            (None, _, _) => {
                return Err(RosterError::Config(
                    "Row range needs both a start row and an end row".to_string(),
                ))
            }
        };

        Ok(RunConfig {
            input_file,
            output_file,
            mode,
        })
    }
}

/// Parse a configured MM/DD/YYYY date.
pub fn parse_start_date(text: &str) -> RosterResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), START_DATE_FORMAT).map_err(|_| {
        RosterError::Config(format!(
            "Invalid start date '{}': expected MM/DD/YYYY",
            text
        ))
    })
}

/// Operating mode. Each mode fixes the row selector, the active alias
/// schemes and the output layout together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Hires starting on one day; SPOC and Neo aliases; tracking layout.
    ByDate { start_date: NaiveDate },
    /// Hires at tracker rows `start_row..=end_row`; SPOC aliases; welcome layout.
    ByRange { start_row: usize, end_row: usize },
}

const DATE_MODE_SCHEMES: &[AliasScheme] = &[AliasScheme::Spoc, AliasScheme::Neo];
const RANGE_MODE_SCHEMES: &[AliasScheme] = &[AliasScheme::Spoc];

impl RunMode {
    pub fn by_range(start_row: usize, end_row: usize) -> RosterResult<Self> {
        if start_row == 0 {
            return Err(RosterError::Config(
                "Start row is 1-based and must be at least 1".to_string(),
            ));
        }
        if start_row > end_row {
            return Err(RosterError::Config(format!(
                "Start row {} is after end row {}",
                start_row, end_row
            )));
        }
        Ok(RunMode::ByRange { start_row, end_row })
    }

    pub fn selector(&self) -> RowSelector {
        match *self {
            RunMode::ByDate { start_date } => RowSelector::DateMatch(start_date),
            RunMode::ByRange { start_row, end_row } => RowSelector::Range {
                start: start_row,
                end: end_row,
            },
        }
    }

    pub fn alias_schemes(&self) -> &'static [AliasScheme] {
        match self {
            RunMode::ByDate { .. } => DATE_MODE_SCHEMES,
            RunMode::ByRange { .. } => RANGE_MODE_SCHEMES,
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            RunMode::ByDate { .. } => Layout::Tracking,
            RunMode::ByRange { .. } => Layout::Welcome,
        }
    }

    pub fn projector(&self) -> RecordProjector {
        RecordProjector::new(self.alias_schemes(), self.layout())
    }

    pub fn describe(&self) -> String {
        match self {
            RunMode::ByDate { start_date } => {
                format!("start date {}", start_date.format(START_DATE_FORMAT))
            }
            RunMode::ByRange { start_row, end_row } => {
                format!("rows {}-{}", start_row, end_row)
            }
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub mode: RunMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Settings {
        Settings {
            input_file: Some(PathBuf::from("tracker.xlsx")),
            output_file: Some(PathBuf::from("onboarding.xlsx")),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_date_mode() {
        let config = Settings {
            start_date: Some("03/03/2025".to_string()),
            ..paths()
        }
        .resolve()
        .unwrap();
        assert_eq!(
            config.mode,
            RunMode::ByDate {
                start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
            }
        );
        assert_eq!(config.mode.layout(), Layout::Tracking);
        assert_eq!(config.mode.alias_schemes().len(), 2);
    }

    #[test]
    fn test_resolve_range_mode() {
        let config = Settings {
            start_row: Some(3),
            end_row: Some(5),
            ..paths()
        }
        .resolve()
        .unwrap();
        assert_eq!(config.mode.selector(), RowSelector::Range { start: 3, end: 5 });
        assert_eq!(config.mode.layout(), Layout::Welcome);
        assert_eq!(config.mode.alias_schemes(), &[AliasScheme::Spoc]);
    }

    #[test]
    fn test_resolve_rejects_bad_settings() {
        let cases = vec![
            Settings {
                start_date: Some("2025-03-03".to_string()),
                ..paths()
            },
            Settings {
                start_date: Some("13/40/2025".to_string()),
                ..paths()
            },
            Settings {
                start_date: Some("03/03/2025".to_string()),
                start_row: Some(1),
                end_row: Some(2),
                ..paths()
            },
            Settings {
                start_row: Some(1),
                ..paths()
            },
            Settings {
                start_row: Some(5),
                end_row: Some(3),
                ..paths()
            },
            Settings {
                start_row: Some(0),
                end_row: Some(3),
                ..paths()
            },
            paths(),
            Settings {
                start_date: Some("03/03/2025".to_string()),
                ..Default::default()
            },
        ];
        for settings in cases {
            let err = settings.clone().resolve().unwrap_err();
            assert!(err.is_configuration(), "{:?} gave {}", settings, err);
        }
    }

    #[test]
    fn test_yaml_accepts_camel_case_keys() {
        let settings = Settings::from_yaml_str(
            "inputFile: tracker.xlsx\noutputFile: out.xlsx\nstartDate: 03/03/2025\n",
        )
        .unwrap();
        assert_eq!(settings.start_date.as_deref(), Some("03/03/2025"));
        assert_eq!(settings.input_file, Some(PathBuf::from("tracker.xlsx")));
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        let err = Settings::from_yaml_str("input: tracker.xlsx\n").unwrap_err();
        assert!(matches!(err, RosterError::Yaml(_)));
    }

    #[test]
    fn test_flag_selector_replaces_file_selector() {
        let file = Settings {
            start_row: Some(1),
            end_row: Some(4),
            ..paths()
        };
        let flags = Settings {
            start_date: Some("03/10/2025".to_string()),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.start_row, None);
        assert_eq!(merged.input_file, Some(PathBuf::from("tracker.xlsx")));
        assert!(matches!(merged.resolve().unwrap().mode, RunMode::ByDate { .. }));
    }

    #[test]
    fn test_describe() {
        let mode = RunMode::by_range(2, 9).unwrap();
        assert_eq!(mode.describe(), "rows 2-9");
        let mode = RunMode::ByDate {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        };
        assert_eq!(mode.describe(), "start date 03/03/2025");
    }
}
