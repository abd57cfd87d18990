use std::path::PathBuf;
use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sheet '{sheet}' is missing required columns: {}", columns.join(", "))]
    MissingColumns { sheet: String, columns: Vec<String> },

    #[error("Sheet '{sheet}' not found in '{}'", path.display())]
    SheetNotFound { sheet: String, path: PathBuf },

    #[error("Failed to read source workbook '{}': {message}", path.display())]
    SourceRead { path: PathBuf, message: String },

    #[error("Failed to open output workbook '{}': {message}", path.display())]
    WorkbookRead { path: PathBuf, message: String },

    #[error("Failed to save output workbook '{}': {message}", path.display())]
    WorkbookWrite { path: PathBuf, message: String },

    #[error("Failed to open '{}' in the default viewer: {message}", path.display())]
    Launch { path: PathBuf, message: String },
}

impl RosterError {
    /// True for errors caused by bad settings or a source sheet of the wrong shape.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RosterError::Config(_)
                | RosterError::Yaml(_)
                | RosterError::MissingColumns { .. }
                | RosterError::SheetNotFound { .. }
        )
    }
}
