use chrono::NaiveDateTime;
use std::fmt;

//==============================================================================
// Source rows (FTE Hire sheet)
//==============================================================================

/// A single cell value from the source tracker, before any coercion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl RawValue {
    /// The string payload, only for text cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Empty => Ok(()),
            RawValue::Text(s) => f.write_str(s),
            // Whole numbers print without a trailing ".0" (office codes, phone numbers)
            RawValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            RawValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// One candidate from the FTE Hire sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    /// 1-based position among the sheet's data rows (header excluded)
    pub position: usize,
    pub candidate: RawValue,
    pub personal_email: RawValue,
    pub better_email: RawValue,
    pub job: RawValue,
    pub department: RawValue,
    pub office: RawValue,
    pub start_date: RawValue,
    pub office_location: RawValue,
    pub time_zone: RawValue,
}

impl SourceRow {
    /// Department as written in the tracker; matching against it is exact.
    pub fn department_text(&self) -> String {
        self.department.to_string()
    }

    /// True when every tracked field is blank.
    pub fn is_blank(&self) -> bool {
        [
            &self.candidate,
            &self.personal_email,
            &self.better_email,
            &self.job,
            &self.department,
            &self.office,
            &self.start_date,
            &self.office_location,
            &self.time_zone,
        ]
        .iter()
        .all(|v| v.is_empty())
    }
}

//==============================================================================
// Output records (NH_* sheets)
//==============================================================================

/// Whether the front desk needs to prepare a setup for the hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontSetup {
    Yes,
    NotApplicable,
}

impl FrontSetup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrontSetup::Yes => "Yes",
            FrontSetup::NotApplicable => "N/A",
        }
    }
}

/// Every column an output sheet can carry. Which ones appear, and in what
/// order, is decided by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputColumn {
    FullName,
    FirstName,
    PersonalEmail,
    Username,
    BetterEmail,
    TemporaryPassword,
    Title,
    Department,
    FrontSetupNeeded,
    EmailAliasParagraph,
    EmailAlias,
    Location,
    StartDate,
    StartTime,
    ZoomLink,
    ZoomIdPass,
    MonitorTracking,
    WfhBundleTracking,
    LaptopTracking,
    TrackingStatus,
}

impl OutputColumn {
    pub fn header(&self) -> &'static str {
        match self {
            OutputColumn::FullName => "Full Name",
            OutputColumn::FirstName => "First Name",
            OutputColumn::PersonalEmail => "Personal Email",
            OutputColumn::Username => "Username",
            OutputColumn::BetterEmail => "Better Email",
            OutputColumn::TemporaryPassword => "Temporary Password",
            OutputColumn::Title => "Title",
            OutputColumn::Department => "Department",
            OutputColumn::FrontSetupNeeded => "Front Setup Needed",
            OutputColumn::EmailAliasParagraph => "Email Alias Paragraph",
            OutputColumn::EmailAlias => "Email Alias",
            OutputColumn::Location => "Location",
            OutputColumn::StartDate => "Start Date",
            OutputColumn::StartTime => "Start Time",
            OutputColumn::ZoomLink => "Zoom Link",
            OutputColumn::ZoomIdPass => "Zoom ID/Pass",
            OutputColumn::MonitorTracking => "Monitor FedEx Tracking",
            OutputColumn::WfhBundleTracking => "WFH Bundle FedEx Tracking",
            OutputColumn::LaptopTracking => "Laptop FedEx Tracking",
            OutputColumn::TrackingStatus => "Tracking Status",
        }
    }
}

/// A projected new-hire row, ready to be written under a layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputRecord {
    pub full_name: String,
    pub first_name: Option<String>,
    pub personal_email: String,
    pub username: String,
    pub better_email: String,
    pub title: String,
    pub department: String,
    pub front_setup_needed: String,
    pub email_alias_paragraph: Option<String>,
    pub email_alias: String,
    pub location: String,
    pub start_date: String,
    pub start_time: String,
}

impl OutputRecord {
    /// Cell text for one column. Manual-entry columns are always blank.
    pub fn value(&self, column: OutputColumn) -> &str {
        match column {
            OutputColumn::FullName => &self.full_name,
            OutputColumn::FirstName => self.first_name.as_deref().unwrap_or(""),
            OutputColumn::PersonalEmail => &self.personal_email,
            OutputColumn::Username => &self.username,
            OutputColumn::BetterEmail => &self.better_email,
            OutputColumn::Title => &self.title,
            OutputColumn::Department => &self.department,
            OutputColumn::FrontSetupNeeded => &self.front_setup_needed,
            OutputColumn::EmailAliasParagraph => {
                self.email_alias_paragraph.as_deref().unwrap_or("")
            }
            OutputColumn::EmailAlias => &self.email_alias,
            OutputColumn::Location => &self.location,
            OutputColumn::StartDate => &self.start_date,
            OutputColumn::StartTime => &self.start_time,
            OutputColumn::TemporaryPassword
            | OutputColumn::ZoomLink
            | OutputColumn::ZoomIdPass
            | OutputColumn::MonitorTracking
            | OutputColumn::WfhBundleTracking
            | OutputColumn::LaptopTracking
            | OutputColumn::TrackingStatus => "",
        }
    }

    pub fn row(&self, columns: &[OutputColumn]) -> Vec<String> {
        columns.iter().map(|c| self.value(*c).to_string()).collect()
    }
}
