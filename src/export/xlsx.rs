// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::plan::SheetPlan;

/// Renders a planned sheet into XLSX bytes.
#[cfg(feature = "xlsx")]
pub(crate) fn render_xlsx(plan: &SheetPlan) -> AppResult<Vec<u8>> {
    use crate::export::plan::CellStyle;
    use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(&plan.sheet_name)
        .map_err(AppError::export)?;

    // ---------------------------
    // Formats
    // ---------------------------
    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let header_format = centered
        .clone()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x343A40))
        .set_pattern(FormatPattern::Solid);

    let body_format = centered.clone().set_text_wrap();
    let day_format = body_format.clone().set_bold();

    let break_format = centered
        .clone()
        .set_rotation(90)
        .set_background_color(Color::RGB(0xF0F0F0))
        .set_pattern(FormatPattern::Solid);

    let event_format = |fill: &Option<String>| match fill
        .as_deref()
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
    {
        Some(rgb) => body_format
            .clone()
            .set_background_color(Color::RGB(rgb))
            .set_pattern(FormatPattern::Solid),
        None => body_format.clone(),
    };

    // ---------------------------
    // Cells
    // ---------------------------
    for cell in &plan.cells {
        let format = match &cell.style {
            CellStyle::Header => header_format.clone(),
            CellStyle::Day => day_format.clone(),
            CellStyle::Break => break_format.clone(),
            CellStyle::Event { fill } => event_format(fill),
        };

        match plan.merge_at(cell.row, cell.col) {
            Some(m) => {
                worksheet
                    .merge_range(m.row, m.first_col, m.row, m.last_col, &cell.text, &format)
                    .map_err(AppError::export)?;
            }
            None => {
                worksheet
                    .write_string_with_format(cell.row, cell.col, &cell.text, &format)
                    .map_err(AppError::export)?;
            }
        }
    }

    // bordered blanks for the rest of the used range
    for row in 0..=plan.last_row {
        for col in 0..=plan.last_col {
            if plan.cell(row, col).is_none() && plan.merge_at(row, col).is_none() {
                worksheet
                    .write_blank(row, col, &body_format)
                    .map_err(AppError::export)?;
            }
        }
    }

    for (col, width) in &plan.column_widths {
        worksheet
            .set_column_width(*col, *width)
            .map_err(AppError::export)?;
    }

    workbook.save_to_buffer().map_err(AppError::export)
}

#[cfg(not(feature = "xlsx"))]
pub(crate) fn render_xlsx(_plan: &SheetPlan) -> AppResult<Vec<u8>> {
    Err(AppError::CapabilityMissing("XLSX export"))
}
