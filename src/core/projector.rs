//! Record projection: source row + derived fields → output record

use crate::core::derive::{self, AliasScheme};
use crate::types::{OutputColumn, OutputRecord, SourceRow};

/// Column set of an output sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// First Name plus the shipment tracking columns.
    Tracking,
    /// Email Alias Paragraph and Zoom columns for the welcome email, no First Name.
    Welcome,
}

const TRACKING_COLUMNS: &[OutputColumn] = &[
    OutputColumn::FullName,
    OutputColumn::FirstName,
    OutputColumn::PersonalEmail,
    OutputColumn::Username,
    OutputColumn::BetterEmail,
    OutputColumn::TemporaryPassword,
    OutputColumn::Title,
    OutputColumn::Department,
    OutputColumn::FrontSetupNeeded,
    OutputColumn::EmailAlias,
    OutputColumn::Location,
    OutputColumn::StartDate,
    OutputColumn::StartTime,
    OutputColumn::MonitorTracking,
    OutputColumn::WfhBundleTracking,
    OutputColumn::LaptopTracking,
    OutputColumn::TrackingStatus,
];

const WELCOME_COLUMNS: &[OutputColumn] = &[
    OutputColumn::FullName,
    OutputColumn::PersonalEmail,
    OutputColumn::Username,
    OutputColumn::BetterEmail,
    OutputColumn::TemporaryPassword,
    OutputColumn::Title,
    OutputColumn::Department,
    OutputColumn::FrontSetupNeeded,
    OutputColumn::EmailAliasParagraph,
    OutputColumn::EmailAlias,
    OutputColumn::Location,
    OutputColumn::StartDate,
    OutputColumn::StartTime,
    OutputColumn::ZoomLink,
    OutputColumn::ZoomIdPass,
    OutputColumn::MonitorTracking,
    OutputColumn::WfhBundleTracking,
    OutputColumn::LaptopTracking,
    OutputColumn::TrackingStatus,
];

impl Layout {
    pub fn columns(&self) -> &'static [OutputColumn] {
        match self {
            Layout::Tracking => TRACKING_COLUMNS,
            Layout::Welcome => WELCOME_COLUMNS,
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.header()).collect()
    }

    fn has(&self, column: OutputColumn) -> bool {
        self.columns().contains(&column)
    }
}

/// Projects batch rows under one alias-scheme set and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordProjector {
    pub schemes: &'static [AliasScheme],
    pub layout: Layout,
}

impl RecordProjector {
    pub fn new(schemes: &'static [AliasScheme], layout: Layout) -> Self {
        Self { schemes, layout }
    }

    pub fn project(&self, row: &SourceRow) -> OutputRecord {
        // Read once so front setup and alias agree on the department
        let department = row.department_text();
        let full_name = row.candidate.to_string();

        let front_setup_needed = derive::front_setup_needed(&department).as_str().to_string();
        let email_alias = derive::derive_email_alias(&full_name, &department, self.schemes);

        OutputRecord {
            first_name: self
                .layout
                .has(OutputColumn::FirstName)
                .then(|| derive::first_name(&row.candidate)),
            personal_email: row.personal_email.to_string(),
            username: derive::extract_username(&row.better_email),
            better_email: row.better_email.to_string(),
            title: row.job.to_string(),
            email_alias_paragraph: self
                .layout
                .has(OutputColumn::EmailAliasParagraph)
                .then(|| derive::email_alias_paragraph(&department)),
            front_setup_needed,
            email_alias,
            location: row.office_location.to_string(),
            start_date: derive::format_start_date(&row.start_date),
            start_time: derive::format_start_time(&row.time_zone),
            full_name,
            department,
        }
    }

    pub fn project_batch(&self, batch: &[&SourceRow]) -> Vec<OutputRecord> {
        batch.iter().map(|row| self.project(row)).collect()
    }
}
