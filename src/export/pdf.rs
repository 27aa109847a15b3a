//! Minimal flowing-layout PDF writer on top of `pdf-writer`: paragraphs,
//! spacers and styled tables that continue across pages.

use crate::utils::colors::{BLACK, Rgb};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;

/// A4 portrait, in points.
pub const A4: (f32, f32) = (595.0, 842.0);

const FOOTER_SIZE: f32 = 7.0;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> Name<'static> {
        match self {
            Font::Regular => Name(b"F1"),
            Font::Bold => Name(b"F2"),
        }
    }

    /// Glyph advance in 1/1000 em.
    fn advance(self, c: char) -> u16 {
        let table = match self {
            Font::Regular => &HELVETICA,
            Font::Bold => &HELVETICA_BOLD,
        };
        match c as u32 {
            n @ 32..=126 => table[(n - 32) as usize],
            _ => 556,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    text.chars().map(|c| font.advance(c) as f32).sum::<f32>() * size / 1000.0
}

/// Encode text for the standard fonts (WinAnsiEncoding). Characters the
/// encoding lacks become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    width: f64,
    space: f64,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.width
    }
    fn whitespace_width(&self) -> f64 {
        self.space
    }
    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Split a word that is wider than `max` into pieces that fit.
fn split_to_width(word: &str, font: Font, size: f32, max: f32) -> Vec<&str> {
    if text_width(word, font, size) <= max {
        return vec![word];
    }

    let mut out = Vec::new();
    let mut start = 0;
    let mut acc = 0.0;
    for (i, c) in word.char_indices() {
        let cw = font.advance(c) as f32 * size / 1000.0;
        if acc + cw > max && i > start {
            out.push(&word[start..i]);
            start = i;
            acc = 0.0;
        }
        acc += cw;
    }
    out.push(&word[start..]);
    out
}

/// Break `text` into lines no wider than `max_width` points.
/// Always returns at least one (possibly empty) line.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let space = text_width(" ", font, size) as f64;

    let words: Vec<Word> = text
        .split_whitespace()
        .flat_map(|w| split_to_width(w, font, size, max_width))
        .map(|piece| Word {
            text: piece,
            width: text_width(piece, font, size) as f64,
            space,
        })
        .collect();

    if words.is_empty() {
        return vec![String::new()];
    }

    wrap_first_fit(&words, &[max_width as f64])
        .iter()
        .map(|line| {
            line.iter()
                .map(|w| w.text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// First `n` wrapped lines of every cell, and what is left of each.
fn split_lines(cells: Vec<Vec<String>>, n: usize) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
    cells
        .into_iter()
        .map(|mut lines| {
            let tail = lines.split_off(n.min(lines.len()));
            (lines, tail)
        })
        .unzip()
}

fn row_height(cells: &[Vec<String>], line_h: f32, pad: f32) -> f32 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
    lines as f32 * line_h + 2.0 * pad
}

#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub header_bg: Rgb,
    pub header_fg: Rgb,
    pub body_bg: Rgb,
    pub body_fg: Rgb,
    pub border: Rgb,
    pub font_size: f32,
    pub padding: f32,
    pub grid_width: f32,
    pub box_width: f32,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    /// Top of the free space on the current page.
    cursor_y: f32,

    next_id: i32,
    font_id: Ref,
    bold_id: Ref,
}

impl PdfManager {
    pub fn new(page_w: f32, page_h: f32, margin: f32) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_id = Ref::new(4);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,

            page_w,
            page_h,
            margin,
            cursor_y: page_h - margin,

            next_id: 5,
            font_id,
            bold_id,
        }
    }

    pub fn a4(margin: f32) -> Self {
        Self::new(A4.0, A4.1, margin)
    }

    pub fn printable_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Close the current page (if any) and open a new one.
    fn start_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Font::Regular.resource(), self.font_id);
            fonts.pair(Font::Bold.resource(), self.bold_id);
        }

        self.current_content_id = Some(content_id);
        self.content = Some(Content::new());
        self.cursor_y = self.page_h - self.margin;

        let label = format!("Page {}", self.page_refs.len());
        let x = self.page_w - self.margin - text_width(&label, Font::Regular, FOOTER_SIZE);
        let y = (self.margin - FOOTER_SIZE) / 2.0;
        self.put_text(x, y, Font::Regular, FOOTER_SIZE, BLACK, &label);
    }

    /// Write the stream of the current page.
    fn finalize_page(&mut self) {
        if let (Some(id), Some(content)) = (self.current_content_id.take(), self.content.take()) {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn canvas(&mut self) -> &mut Content {
        if self.content.is_none() {
            self.start_page();
        }
        self.content.get_or_insert_with(Content::new)
    }

    fn page_is_fresh(&self) -> bool {
        self.cursor_y >= self.page_h - self.margin
    }

    /// Move to a new page unless `height` points still fit on this one.
    pub fn ensure_space(&mut self, height: f32) {
        if self.content.is_none() {
            self.start_page();
        } else if self.cursor_y - height < self.margin && !self.page_is_fresh() {
            self.start_page();
        }
    }

    pub fn spacer(&mut self, height: f32) {
        self.ensure_space(0.0);
        self.cursor_y -= height;
    }

    fn put_text(&mut self, x: f32, y: f32, font: Font, size: f32, color: Rgb, text: &str) {
        let bytes = encode_win_ansi(text);
        let (r, g, b) = color.unit();

        let c = self.canvas();
        c.save_state();
        c.set_fill_rgb(r, g, b);
        c.begin_text();
        c.set_font(font.resource(), size);
        c.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        c.show(Str(&bytes));
        c.end_text();
        c.restore_state();
    }

    /// Text wrapped to the printable width, `size * 1.2` leading.
    pub fn paragraph(&mut self, text: &str, font: Font, size: f32, align: Align, color: Rgb) {
        let width = self.printable_width();
        let leading = size * 1.2;

        for line in wrap_text(text, font, size, width) {
            self.ensure_space(leading);

            let x = match align {
                Align::Left => self.margin,
                Align::Center => self.margin + (width - text_width(&line, font, size)) / 2.0,
            };
            let baseline = self.cursor_y - size;
            self.put_text(x, baseline, font, size, color, &line);
            self.cursor_y -= leading;
        }
    }

    /// Draw a table with fixed column widths. Rows that do not fit go to the
    /// next page, where the header row is repeated. A row taller than a whole
    /// page is split line-wise and continues below the repeated header.
    pub fn table(
        &mut self,
        headers: &[&str],
        widths: &[f32],
        rows: &[Vec<String>],
        style: &TableStyle,
    ) {
        let size = style.font_size;
        let line_h = size * 1.2;
        let pad = style.padding;

        let wrap_row = |cells: &[&str], font: Font| -> (Vec<Vec<String>>, f32) {
            let wrapped: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    wrap_text(
                        cells.get(i).copied().unwrap_or(""),
                        font,
                        size,
                        (w - 2.0 * pad).max(1.0),
                    )
                })
                .collect();
            let h = row_height(&wrapped, line_h, pad);
            (wrapped, h)
        };

        let (header_cells, header_h) = wrap_row(headers, Font::Bold);
        let body: Vec<(Vec<Vec<String>>, f32)> = rows
            .iter()
            .map(|r| {
                let cells: Vec<&str> = r.iter().map(String::as_str).collect();
                wrap_row(&cells, Font::Regular)
            })
            .collect();

        let first_h = header_h + body.first().map(|(_, h)| *h).unwrap_or(0.0);
        self.ensure_space(first_h);

        let mut chunk_top = self.cursor_y;
        self.draw_row(&header_cells, widths, header_h, style, true);

        // body height a page offers once the repeated header is drawn
        let page_room = self.page_h - 2.0 * self.margin - header_h;

        for (cells, h) in body {
            let mut rest = cells;
            let mut h = h;
            let mut fresh = false;

            while self.cursor_y - h < self.margin {
                let fit = ((self.cursor_y - self.margin - 2.0 * pad) / line_h).floor();
                let whole_on_next = h <= page_room;

                if fresh && fit < 1.0 {
                    // page too short for a single line
                    break;
                }

                if whole_on_next || fit < 1.0 {
                    self.draw_box(chunk_top, widths, style);
                    self.start_page();
                    chunk_top = self.cursor_y;
                    self.draw_row(&header_cells, widths, header_h, style, true);
                    fresh = true;
                    continue;
                }

                // taller than a page: fill this one, carry the remaining lines over
                let (head, tail) = split_lines(rest, fit as usize);
                let head_h = row_height(&head, line_h, pad);
                self.draw_row(&head, widths, head_h, style, false);
                rest = tail;
                h = row_height(&rest, line_h, pad);
                fresh = false;
            }

            self.draw_row(&rest, widths, h, style, false);
        }

        self.draw_box(chunk_top, widths, style);
    }

    fn draw_row(
        &mut self,
        cells: &[Vec<String>],
        widths: &[f32],
        height: f32,
        style: &TableStyle,
        header: bool,
    ) {
        let (bg, fg, font) = if header {
            (style.header_bg, style.header_fg, Font::Bold)
        } else {
            (style.body_bg, style.body_fg, Font::Regular)
        };
        let size = style.font_size;
        let line_h = size * 1.2;
        let x0 = self.margin;
        let y = self.cursor_y - height;
        let total: f32 = widths.iter().sum();

        let (r, g, b) = bg.unit();
        let (sr, sg, sb) = style.border.unit();
        let c = self.canvas();

        c.save_state();
        c.set_fill_rgb(r, g, b);
        c.rect(x0, y, total, height);
        c.fill_nonzero();
        c.restore_state();

        c.save_state();
        c.set_stroke_rgb(sr, sg, sb);
        c.set_line_width(style.grid_width);
        let mut x = x0;
        for w in widths {
            c.rect(x, y, *w, height);
            x += w;
        }
        c.stroke();
        c.restore_state();

        // text block centered in the cell both ways
        let mut x = x0;
        for (lines, w) in cells.iter().zip(widths) {
            let block = lines.len() as f32 * line_h;
            let top = y + (height + block) / 2.0;
            for (i, line) in lines.iter().enumerate() {
                let slot_bottom = top - (i as f32 + 1.0) * line_h;
                let baseline = slot_bottom + (line_h - 0.7 * size) / 2.0;
                let tx = x + (w - text_width(line, font, size)) / 2.0;
                self.put_text(tx, baseline, font, size, fg, line);
            }
            x += w;
        }

        self.cursor_y = y;
    }

    fn draw_box(&mut self, top: f32, widths: &[f32], style: &TableStyle) {
        let total: f32 = widths.iter().sum();
        let x = self.margin;
        let y = self.cursor_y;
        let (r, g, b) = style.border.unit();

        let c = self.canvas();
        c.save_state();
        c.set_stroke_rgb(r, g, b);
        c.set_line_width(style.box_width);
        c.rect(x, y, total, top - y);
        c.stroke();
        c.restore_state();
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Serialize the document. An empty document still gets one page.
    pub fn finish(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.start_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        self.pdf.finish()
    }
}

/// Text placed by the document as `(baseline y, shown string)` pairs.
#[cfg(test)]
pub(crate) fn placed_text(bytes: &[u8]) -> Vec<(f32, String)> {
    let text = String::from_utf8_lossy(bytes);
    let mut out = Vec::new();
    let mut y = None;

    for line in text.lines() {
        if let Some(m) = line.strip_suffix(" Tm") {
            y = m.split_whitespace().nth(5).and_then(|v| v.parse::<f32>().ok());
        } else if let (Some(shown), Some(at)) = (line.strip_suffix(" Tj"), y) {
            out.push((at, shown.trim_matches(['(', ')']).to_string()));
        }
    }
    out
}
