//! Sheet styling applied to a freshly written onboarding sheet

use umya_spreadsheet::{Border, HorizontalAlignmentValues, VerticalAlignmentValues, Worksheet};

/// Cosmetic post-processing of a fully populated sheet.
pub trait SheetFormatter {
    fn format(&self, sheet: &mut Worksheet);
}

/// Leaves the sheet as written.
pub struct NoFormatting;

impl SheetFormatter for NoFormatting {
    fn format(&self, _sheet: &mut Worksheet) {}
}

/// The onboarding team's house style: bordered, centred, wrapped 14pt text,
/// light blue bold header, generous row height, empty rows/columns hidden.
pub struct RosterStyle {
    pub header_fill: &'static str,
    pub font_size: f64,
    pub row_height: f64,
    /// Added to the longest value in a column to get its width.
    pub width_padding: f64,
}

impl Default for RosterStyle {
    fn default() -> Self {
        Self {
            header_fill: "FFADD8E6",
            font_size: 14.0,
            row_height: 60.0,
            width_padding: 5.0,
        }
    }
}

impl SheetFormatter for RosterStyle {
    fn format(&self, sheet: &mut Worksheet) {
        let (max_col, max_row) = sheet.get_highest_column_and_row();
        if max_col == 0 || max_row == 0 {
            return;
        }

        for row in 1..=max_row {
            for col in 1..=max_col {
                let style = sheet.get_style_mut((col, row));
                {
                    let borders = style.get_borders_mut();
                    borders.get_left_mut().set_border_style(Border::BORDER_THIN);
                    borders.get_right_mut().set_border_style(Border::BORDER_THIN);
                    borders.get_top_mut().set_border_style(Border::BORDER_THIN);
                    borders.get_bottom_mut().set_border_style(Border::BORDER_THIN);
                }
                {
                    let alignment = style.get_alignment_mut();
                    alignment.set_horizontal(HorizontalAlignmentValues::Center);
                    alignment.set_vertical(VerticalAlignmentValues::Center);
                    alignment.set_wrap_text(true);
                }
                style
                    .get_font_mut()
                    .set_size(self.font_size)
                    .set_bold(row == 1);
                if row == 1 {
                    style.set_background_color(self.header_fill);
                }
            }
        }

        for col in 1..=max_col {
            let values = column_values(sheet, col, max_row);
            let longest = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);
            let dimension = sheet.get_column_dimension_by_number_mut(&col);
            dimension.set_width(longest as f64 + self.width_padding);
            if values.iter().all(|v| v.is_empty()) {
                dimension.set_hidden(true);
            }
        }

        for row in 1..=max_row {
            let empty = (1..=max_col).all(|col| cell_text(sheet, col, row).is_empty());
            let dimension = sheet.get_row_dimension_mut(&row);
            dimension.set_height(self.row_height);
            if empty {
                dimension.set_hidden(true);
            }
        }
    }
}

fn cell_text(sheet: &Worksheet, col: u32, row: u32) -> String {
    sheet
        .get_cell((col, row))
        .map(|cell| cell.get_value().to_string())
        .unwrap_or_default()
}

fn column_values(sheet: &Worksheet, col: u32, max_row: u32) -> Vec<String> {
    (1..=max_row).map(|row| cell_text(sheet, col, row)).collect()
}
