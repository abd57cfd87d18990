//! Shared fixtures: tracker workbooks written with rust_xlsxwriter, output
//! sheets read back with calamine.

#![allow(dead_code)]

use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::Path;

/// How the Start Date cell of a fixture row is stored.
#[derive(Clone, Copy)]
pub enum Start {
    /// Real Excel date cell (m/d/yyyy)
    Date(u16, u8, u8),
    /// Text as typed into the tracker
    Text(&'static str),
    Blank,
}

#[derive(Clone, Copy)]
pub struct Hire {
    pub name: &'static str,
    pub personal_email: &'static str,
    pub better_email: &'static str,
    pub job: &'static str,
    pub department: &'static str,
    pub start: Start,
    pub time_zone: &'static str,
}

impl Hire {
    pub fn new(name: &'static str, better_email: &'static str, department: &'static str) -> Self {
        Self {
            name,
            personal_email: "someone@gmail.com",
            better_email,
            job: "Loan Officer",
            department,
            start: Start::Date(2025, 3, 3),
            time_zone: "EST",
        }
    }

    pub fn starting(mut self, start: Start) -> Self {
        self.start = start;
        self
    }

    pub fn in_zone(mut self, time_zone: &'static str) -> Self {
        self.time_zone = time_zone;
        self
    }
}

/// Header row as it appears in the live tracker: padded names and extra columns.
const HEADERS: [&str; 11] = [
    "Req ID",
    " Candidate",
    "Personal Email ",
    "Better Email",
    "Job",
    "Department",
    "Office",
    "Start Date",
    "Office Location (for OL)",
    "TimeZone",
    "Recruiter",
];

pub fn write_tracker(path: &Path, hires: &[Hire]) {
    write_tracker_with(path, "FTE Hire", &HEADERS, hires);
}

pub fn write_tracker_with(path: &Path, sheet_name: &str, headers: &[&str], hires: &[Hire]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("m/d/yyyy");

    // A sheet before the tracker so it is not the first one
    workbook.add_worksheet().set_name("Summary").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).unwrap();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    for (i, hire) in hires.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, format!("R-{}", row)).unwrap();
        sheet.write_string(row, 1, hire.name).unwrap();
        sheet.write_string(row, 2, hire.personal_email).unwrap();
        sheet.write_string(row, 3, hire.better_email).unwrap();
        sheet.write_string(row, 4, hire.job).unwrap();
        sheet.write_string(row, 5, hire.department).unwrap();
        sheet.write_string(row, 6, "HQ").unwrap();
        match hire.start {
            Start::Date(y, m, d) => {
                let date = ExcelDateTime::from_ymd(y, m, d).unwrap();
                sheet
                    .write_datetime_with_format(row, 7, &date, &date_format)
                    .unwrap();
            }
            Start::Text(text) => {
                sheet.write_string(row, 7, text).unwrap();
            }
            Start::Blank => {}
        }
        sheet.write_string(row, 8, "New York").unwrap();
        sheet.write_string(row, 9, hire.time_zone).unwrap();
        sheet.write_string(row, 10, "Pat").unwrap();
    }

    workbook.save(path).unwrap();
}

pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.sheet_names().to_vec()
}

/// Every row of a sheet as text, header first.
pub fn read_sheet(path: &Path, sheet_name: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(sheet_name).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Value of `column` (by header) in data row `index` (0-based).
pub fn cell(rows: &[Vec<String>], index: usize, column: &str) -> String {
    let col = rows[0]
        .iter()
        .position(|h| h == column)
        .unwrap_or_else(|| panic!("no column '{}' in {:?}", column, rows[0]));
    rows[index + 1].get(col).cloned().unwrap_or_default()
}
