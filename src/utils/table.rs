//! Table rendering for terminal output.

use crate::utils::colors::{Rgb, WHITE};
use crate::utils::formatting::pad_right;
use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Header background; `None` renders a plain header (no ANSI codes).
    pub accent: Option<Rgb>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            accent: None,
        }
    }

    pub fn with_accent(mut self, accent: Rgb) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_right(h, *w))
            .collect::<Vec<_>>()
            .join(" | ");

        match self.accent {
            Some(bg) => {
                let style = Style::new().bold().fg(WHITE.ansi()).on(bg.ansi());
                out.push_str(&style.paint(format!(" {header_line} ")).to_string());
            }
            None => out.push_str(&format!(" {header_line} ")),
        }
        out.push('\n');

        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect::<Vec<_>>()
                .join(" | ");
            out.push_str(&format!(" {line} \n"));
        }

        out
    }
}
