use crate::core::report::DOCUMENT_HEADERS;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::DailyEntry;
use crate::ui::messages::info;
use crate::utils::colors::{Rgb, WHITE};
use crate::utils::formatting::is_decimal_numeral;
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Width the date column needs once Excel renders it as `dd-mm-yyyy`.
const DATE_WIDTH: usize = 10;

enum Cell<'a> {
    Date(f64),
    Number(f64),
    Text(&'a str),
}

/// Workbook with one sheet: accent-coloured header, banded rows, dates as
/// real Excel dates, numeric scores as numbers, columns sized to content.
pub(crate) fn export_xlsx(entries: &[DailyEntry], path: &Path, accent: Rgb, tint: Rgb) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(WHITE.packed()))
        .set_background_color(Color::RGB(accent.packed()))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in DOCUMENT_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    let mut col_widths: Vec<usize> = DOCUMENT_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (i, e) in entries.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = if i % 2 == 0 { tint } else { WHITE };

        let cells = [
            date_cell(&e.entry_date),
            Cell::Text(&e.worker_id),
            Cell::Text(&e.name),
            Cell::Text(&e.role),
            Cell::Text(&e.work),
            Cell::Text(&e.category),
            score_cell(&e.target),
            score_cell(&e.achieved),
        ];

        for (col, cell) in cells.iter().enumerate() {
            let width = write_cell(worksheet, row, col as u16, cell, band)?;
            col_widths[col] = col_widths[col].max(width);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_error)?;
    }

    workbook.save(path).map_err(xlsx_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn date_cell(iso: &str) -> Cell<'_> {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(d) => Cell::Date(excel_serial(d)),
        Err(_) => Cell::Text(iso),
    }
}

fn score_cell(s: &str) -> Cell<'_> {
    if is_decimal_numeral(s)
        && let Ok(n) = s.parse::<f64>()
    {
        return Cell::Number(n);
    }
    Cell::Text(s)
}

/// Days since the 1900 date system epoch (1899-12-30 once the leap-year bug
/// is accounted for).
fn excel_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    (d - epoch).num_days() as f64
}

/// Write one cell and return the display width it needs.
fn write_cell(ws: &mut Worksheet, row: u32, col: u16, cell: &Cell<'_>, band: Rgb) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(Color::RGB(band.packed()))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Date(serial) => {
            let fmt = base.set_num_format("dd-mm-yyyy");
            ws.write_with_format(row, col, *serial, &fmt).map_err(xlsx_error)?;
            Ok(DATE_WIDTH)
        }
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            ws.write_with_format(row, col, *n, &fmt).map_err(xlsx_error)?;
            Ok(n.to_string().len())
        }
        Cell::Text(s) => {
            ws.write_with_format(row, col, *s, &base).map_err(xlsx_error)?;
            Ok(UnicodeWidthStr::width(*s))
        }
    }
}

fn xlsx_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excel_serials() {
        let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert_eq!(excel_serial(d("1900-03-01")), 61.0);
        assert_eq!(excel_serial(d("2024-03-05")), 45356.0);
    }

    #[test]
    fn scores_become_numbers_only_when_numeric() {
        assert!(matches!(score_cell("7.5"), Cell::Number(n) if n == 7.5));
        assert!(matches!(score_cell("absent"), Cell::Text("absent")));
        assert!(matches!(score_cell(""), Cell::Text("")));
        assert!(matches!(date_cell("yesterday"), Cell::Text("yesterday")));
    }

    #[test]
    fn workbook_is_written() {
        let path = std::env::temp_dir().join("effchart_unit_export.xlsx");
        let entries = vec![DailyEntry {
            worker_id: "101".into(),
            name: "Ravi".into(),
            role: "Tailor".into(),
            work: "Collar".into(),
            category: "A".into(),
            target: String::new(),
            achieved: "7".into(),
            entry_date: "2024-03-05".into(),
        }];
        export_xlsx(&entries, &path, Rgb(0xff, 0xa1, 0x4f), Rgb(0xfc, 0xe2, 0xca)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
        std::fs::remove_file(&path).ok();
    }
}
