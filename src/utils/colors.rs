//! Colour helpers: the report palette is configured as `#rrggbb` strings and
//! used both for terminal output and for the PDF document.

use crate::errors::{AppError, AppResult};
use ansi_term::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

impl Rgb {
    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> AppResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::Config(format!("invalid colour '{s}', expected #rrggbb")));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| AppError::Config(format!("invalid colour '{s}'")))
        };

        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Components scaled to 0.0..=1.0 for PDF colour operators.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }

    pub fn ansi(self) -> Colour {
        Colour::RGB(self.0, self.1, self.2)
    }

    /// `0xRRGGBB`, the form rust_xlsxwriter expects.
    pub fn packed(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_palette() {
        assert_eq!(Rgb::from_hex("#ffa14f").unwrap(), Rgb(0xff, 0xa1, 0x4f));
        assert_eq!(Rgb::from_hex("fce2ca").unwrap(), Rgb(0xfc, 0xe2, 0xca));
        assert_eq!(Rgb::from_hex("#ffa14f").unwrap().packed(), 0xffa14f);
    }

    #[test]
    fn rejects_bad_colours() {
        for s in ["", "#fff", "#gggggg", "orange", "#ffa14f00"] {
            assert!(Rgb::from_hex(s).is_err(), "{s} should be rejected");
        }
    }

    #[test]
    fn unit_components() {
        let (r, g, b) = WHITE.unit();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));
        assert_eq!(BLACK.unit(), (0.0, 0.0, 0.0));
    }
}
