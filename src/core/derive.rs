//! Field derivers
//!
//! Pure functions turning raw tracker cells into the computed columns of an
//! onboarding sheet. A value that cannot be derived becomes an empty string
//! (or the "N/A" sentinel for aliases) instead of an error.

use crate::types::{FrontSetup, RawValue};
use chrono::{NaiveDate, NaiveDateTime};

/// Department value that gets a better.com alias and a front-desk setup.
pub const SPOC_DEPARTMENT: &str = "SPOC";
/// Department value that gets a neopoweredbybetter.com alias.
pub const NEO_DEPARTMENT: &str = "Neo";
/// Written into the alias column when no scheme applies.
pub const NOT_APPLICABLE: &str = "N/A";

pub const EST_START_TIME: &str = "10:30 AM EST";
pub const PST_START_TIME: &str = "12:30 AM PST";

pub const EMAIL_ALIAS_PARAGRAPH: &str = "This is your External Email Alias, please do not refer to this Alias email address until we meet in the IT Onboarding Session:";

/// Text date layouts accepted for tracker dates, tried in order. The two-digit
/// year goes first: `%Y` would read "25" as year 25.
const DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// An email alias naming scheme, keyed by department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasScheme {
    /// `janed@better.com`
    Spoc,
    /// `j_doe@neopoweredbybetter.com`
    Neo,
}

impl AliasScheme {
    pub fn department(&self) -> &'static str {
        match self {
            AliasScheme::Spoc => SPOC_DEPARTMENT,
            AliasScheme::Neo => NEO_DEPARTMENT,
        }
    }

    /// Alias for a full name, or an empty string for single-word names.
    pub fn alias_for(&self, full_name: &str) -> String {
        match self {
            AliasScheme::Spoc => spoc_alias(full_name),
            AliasScheme::Neo => neo_alias(full_name),
        }
    }
}

/// First and last whitespace-separated tokens, if there are at least two.
fn name_ends(full_name: &str) -> Option<(&str, &str)> {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next()?;
    let last = tokens.last()?;
    Some((first, last))
}

fn initial(token: &str) -> String {
    token
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

/// `lowercase(first) + lowercase(last initial) + "@better.com"`
pub fn spoc_alias(full_name: &str) -> String {
    match name_ends(full_name) {
        Some((first, last)) => format!("{}{}@better.com", first.to_lowercase(), initial(last)),
        None => String::new(),
    }
}

/// `lowercase(first initial) + "_" + lowercase(last) + "@neopoweredbybetter.com"`
pub fn neo_alias(full_name: &str) -> String {
    match name_ends(full_name) {
        Some((first, last)) => format!(
            "{}_{}@neopoweredbybetter.com",
            initial(first),
            last.to_lowercase()
        ),
        None => String::new(),
    }
}

/// Pick the alias scheme matching `department` among the active ones.
///
/// Departments with no active scheme get the "N/A" sentinel; a matching
/// department with a one-word name gets an empty string.
pub fn derive_email_alias(full_name: &str, department: &str, schemes: &[AliasScheme]) -> String {
    schemes
        .iter()
        .find(|scheme| scheme.department() == department)
        .map(|scheme| scheme.alias_for(full_name))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Local part of a work address. Non-text cells yield an empty string.
pub fn extract_username(work_email: &RawValue) -> String {
    match work_email.as_text() {
        Some(email) => email.split('@').next().unwrap_or_default().to_string(),
        None => String::new(),
    }
}

/// Fixed start-time label for the hire's time zone (case-sensitive match).
pub fn format_start_time(time_zone: &RawValue) -> String {
    let text = time_zone.to_string();
    if text.contains("EST") {
        EST_START_TIME.to_string()
    } else if text.contains("PST") {
        PST_START_TIME.to_string()
    } else {
        String::new()
    }
}

/// Best-effort calendar date of a tracker cell.
pub fn parse_date(value: &RawValue) -> Option<NaiveDate> {
    match value {
        RawValue::DateTime(dt) => Some(dt.date()),
        RawValue::Text(s) => parse_date_text(s),
        _ => None,
    }
}

pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// "March 03, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Human start date, or an empty string when the cell isn't a date.
pub fn format_start_date(value: &RawValue) -> String {
    parse_date(value).map(long_date).unwrap_or_default()
}

pub fn front_setup_needed(department: &str) -> FrontSetup {
    if department == SPOC_DEPARTMENT {
        FrontSetup::Yes
    } else {
        FrontSetup::NotApplicable
    }
}

/// Boilerplate shown above the alias in welcome emails, SPOC hires only.
pub fn email_alias_paragraph(department: &str) -> String {
    if department == SPOC_DEPARTMENT {
        EMAIL_ALIAS_PARAGRAPH.to_string()
    } else {
        String::new()
    }
}

pub fn first_name(candidate: &RawValue) -> String {
    candidate
        .to_string()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
