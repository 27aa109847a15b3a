use crate::core::report::{DOCUMENT_HEADERS, Report, document_row, section_title};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::{Align, Font, PdfManager, TableStyle};
use crate::utils::colors::{BLACK, Rgb, WHITE};
use std::io;
use std::path::Path;

pub const MARGIN: f32 = 20.0;

/// Date, ID, Name, Role, Work, Category, Target, Achieved; sums to the A4
/// printable width with 20pt margins.
pub const COLUMN_WIDTHS: [f32; 8] = [62.0, 45.0, 80.0, 60.0, 105.0, 105.0, 48.0, 50.0];

const TITLE_SIZE: f32 = 14.0;
const SUBTITLE_SIZE: f32 = 14.0;
const SECTION_SIZE: f32 = 11.0;

/// Everything the document needs besides the data.
#[derive(Debug, Clone)]
pub struct ReportLook {
    pub title: String,
    pub accent: Rgb,
    pub tint: Rgb,
}

impl ReportLook {
    fn table_style(&self) -> TableStyle {
        TableStyle {
            header_bg: self.accent,
            header_fg: WHITE,
            body_bg: self.tint,
            body_fg: BLACK,
            border: self.accent,
            font_size: 9.0,
            padding: 3.0,
            grid_width: 0.5,
            box_width: 1.0,
        }
    }
}

/// Lay the report out as an A4 document: title block, then one section per
/// worker. A report without sections yields the title block alone.
pub fn render_report_pdf(report: &Report, look: &ReportLook) -> Vec<u8> {
    let mut pdf = PdfManager::a4(MARGIN);
    let style = look.table_style();
    let report_day = report.date.format("%d-%m-%Y");

    pdf.spacer(10.0);
    pdf.paragraph(&look.title, Font::Regular, TITLE_SIZE, Align::Center, BLACK);
    pdf.spacer(22.0);
    pdf.paragraph(
        &format!("Daily Report - {}", report.date.format("%Y-%m-%d")),
        Font::Bold,
        SUBTITLE_SIZE,
        Align::Left,
        BLACK,
    );
    pdf.spacer(12.0);

    for section in &report.sections {
        let rows: Vec<Vec<String>> = section.entries.iter().map(document_row).collect();
        if rows.is_empty() {
            continue;
        }

        // keep the heading together with the table header and a first row
        pdf.ensure_space(SECTION_SIZE * 1.2 + 4.0 + 50.0);
        pdf.paragraph(
            &format!("{} | Report date: {report_day}", section_title(section)),
            Font::Bold,
            SECTION_SIZE,
            Align::Left,
            look.accent,
        );
        pdf.spacer(4.0);
        pdf.table(&DOCUMENT_HEADERS, &COLUMN_WIDTHS, &rows, &style);
        pdf.spacer(12.0);
    }

    pdf.finish()
}

pub(crate) fn export_report_pdf(report: &Report, look: &ReportLook, path: &Path) -> AppResult<()> {
    let bytes = render_report_pdf(report, look);
    std::fs::write(path, bytes).map_err(|e| {
        AppError::from(io::Error::other(format!(
            "PDF export error ({}): {e}",
            path.display()
        )))
    })?;

    notify_export_success("PDF", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::WorkerSection;
    use crate::export::pdf::placed_text;
    use crate::models::{DailyEntry, WorkerRef};
    use chrono::NaiveDate;

    fn look() -> ReportLook {
        ReportLook {
            title: "TEST FACTORY - EFFICIENCY".into(),
            accent: Rgb(0xff, 0xa1, 0x4f),
            tint: Rgb(0xfc, 0xe2, 0xca),
        }
    }

    fn contains(hay: &[u8], needle: &str) -> bool {
        hay.windows(needle.len()).any(|w| w == needle.as_bytes())
    }

    #[test]
    fn widths_fill_the_printable_area() {
        let total: f32 = COLUMN_WIDTHS.iter().sum();
        assert_eq!(total, 595.0 - 2.0 * MARGIN);
        assert_eq!(COLUMN_WIDTHS.len(), DOCUMENT_HEADERS.len());
    }

    #[test]
    fn sections_carry_worker_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let report = Report {
            date,
            sections: vec![WorkerSection {
                worker: WorkerRef::new("101", "Ravi"),
                entries: vec![DailyEntry {
                    worker_id: "101".into(),
                    name: "Ravi".into(),
                    role: "Tailor".into(),
                    work: "Collar".into(),
                    category: "A".into(),
                    target: String::new(),
                    achieved: "7.0".into(),
                    entry_date: "2024-03-05".into(),
                }],
            }],
        };

        let bytes = render_report_pdf(&report, &look());
        assert!(bytes.starts_with(b"%PDF"));
        assert!(contains(&bytes, "(TEST FACTORY - EFFICIENCY) Tj"));
        assert!(contains(&bytes, "(Daily Report - 2024-03-05) Tj"));
        assert!(contains(&bytes, "(101 - Ravi | Report date: 05-03-2024) Tj"));
        assert!(contains(&bytes, "(Target) Tj"));
        assert!(contains(&bytes, "(05-03-2024) Tj"));
        assert!(contains(&bytes, "(7) Tj"));
        assert!(!contains(&bytes, "(7.0) Tj"));
    }

    #[test]
    fn oversized_work_text_stays_on_the_pages() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let report = Report {
            date,
            sections: vec![WorkerSection {
                worker: WorkerRef::new("101", "Ravi"),
                entries: vec![DailyEntry {
                    worker_id: "101".into(),
                    name: "Ravi".into(),
                    role: "Tailor".into(),
                    work: "stitch ".repeat(3000),
                    category: "A".into(),
                    target: String::new(),
                    achieved: "7".into(),
                    entry_date: "2024-03-05".into(),
                }],
            }],
        };

        let bytes = render_report_pdf(&report, &look());
        let placed = placed_text(&bytes);
        for (y, text) in &placed {
            if !text.starts_with("Page ") {
                assert!(*y >= MARGIN, "{text:?} placed at {y}, below the bottom margin");
            }
        }

        let words: usize = placed.iter().map(|(_, t)| t.matches("stitch").count()).sum();
        assert_eq!(words, 3000);
    }

    #[test]
    fn empty_report_is_title_only() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let report = Report {
            date,
            sections: Vec::new(),
        };
        let bytes = render_report_pdf(&report, &look());
        assert!(bytes.starts_with(b"%PDF"));
        assert!(contains(&bytes, "(TEST FACTORY - EFFICIENCY) Tj"));
        assert!(!contains(&bytes, "(Achieved) Tj"));
    }
}
