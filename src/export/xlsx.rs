// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{
    allocation_headers, allocation_rows, allocation_to_row, summary_headers, summary_rows,
    summary_to_row,
};
use crate::export::notify_export_success;
use crate::models::allocation::BatchReport;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const OVERLOAD_FILL: u32 = 0xF8CBAD;
const UNDER_FILL: u32 = 0xFFE699;

/// Export XLSX: "Summary" (one row per line) + "Allocation" (one row per activity).
pub(crate) fn export_xlsx(report: &BatchReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    // ---------------------------
    // Summary
    // ---------------------------
    let summary = summary_rows(report);
    let rows: Vec<Vec<String>> = summary.iter().map(summary_to_row).collect();
    let highlights: Vec<Option<u32>> = summary
        .iter()
        .map(|r| (r.result != "OK").then_some(OVERLOAD_FILL))
        .collect();

    let sheet = workbook.add_worksheet().set_name("Summary").map_err(to_app_error)?;
    write_sheet(sheet, &summary_headers(), &rows, &highlights)?;

    // ---------------------------
    // Allocation
    // ---------------------------
    let allocation = allocation_rows(report);
    let rows: Vec<Vec<String>> = allocation.iter().map(allocation_to_row).collect();
    let highlights: Vec<Option<u32>> = allocation
        .iter()
        .map(|r| match r.operator_status.as_str() {
            "OVERLOAD" => Some(OVERLOAD_FILL),
            "UNDERUTILIZED" => Some(UNDER_FILL),
            _ => None,
        })
        .collect();

    let sheet = workbook.add_worksheet().set_name("Allocation").map_err(to_app_error)?;
    write_sheet(sheet, &allocation_headers(), &rows, &highlights)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Header styling, banded rows, frozen header and auto column widths.
fn write_sheet(
    worksheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<String>],
    highlights: &[Option<u32>],
) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    if rows.is_empty() {
        worksheet
            .write(1, 0, "No data available")
            .map_err(to_app_error)?;
    }

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = match highlights.get(row_index).copied().flatten() {
            Some(rgb) => Color::RGB(rgb),
            None if row_index % 2 == 0 => band1,
            None => band2,
        };

        for (col, value) in values.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, bg)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

/// Numbers are written as numbers, everything else as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = s.parse::<f64>()
        && num.is_finite()
    {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
