//! Formatting utilities shared by the terminal report and the PDF document.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DECIMAL_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("valid regex"));

/// True when `s` is made only of ASCII digits with at most one `.`
/// and at least one digit (`"7"`, `"7.0"`, `"7."`, `".5"`).
///
/// Signs, exponents and surrounding whitespace are not numerals here.
pub fn is_decimal_numeral(s: &str) -> bool {
    DECIMAL_NUMERAL.is_match(s)
}

/// Truncate a decimal numeral to its integer part, without a decimal point.
/// Anything that is not a decimal numeral comes back unchanged.
///
/// `"7.0"` → `"7"`, `"12.9"` → `"12"`, `".5"` → `"0"`, `"abc"` → `"abc"`.
pub fn normalize_numeral(s: &str) -> String {
    if !is_decimal_numeral(s) {
        return s.to_string();
    }

    let int_part = s.split('.').next().unwrap_or("");
    let trimmed = int_part.trim_start_matches('0');

    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render an ISO `YYYY-MM-DD` date as `DD-MM-YYYY`.
/// Values that are not ISO dates are returned as they are.
pub fn format_entry_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%d-%m-%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Strip the `.0` a spreadsheet appends when an integer id is pasted as a number.
pub fn strip_float_suffix(id: &str) -> &str {
    id.strip_suffix(".0").unwrap_or(id)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numerals_are_detected() {
        for s in ["7", "7.0", "7.", ".5", "0012.30"] {
            assert!(is_decimal_numeral(s), "{s} should be a numeral");
        }
        for s in ["abc", "", ".", "-3", "1.2.3", " 7", "7 ", "1e3", "+4"] {
            assert!(!is_decimal_numeral(s), "{s:?} should not be a numeral");
        }
    }

    #[test]
    fn numerals_are_truncated() {
        assert_eq!(normalize_numeral("7.0"), "7");
        assert_eq!(normalize_numeral("12.9"), "12");
        assert_eq!(normalize_numeral(".5"), "0");
        assert_eq!(normalize_numeral("007"), "7");
        assert_eq!(normalize_numeral("0"), "0");
        assert_eq!(normalize_numeral("85"), "85");
    }

    #[test]
    fn non_numerals_pass_through() {
        assert_eq!(normalize_numeral("abc"), "abc");
        assert_eq!(normalize_numeral("-3.0"), "-3.0");
        assert_eq!(normalize_numeral(""), "");
        assert_eq!(normalize_numeral("W-12"), "W-12");
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_entry_date("2024-03-05"), "05-03-2024");
        assert_eq!(format_entry_date("2025-12-31"), "31-12-2025");
        assert_eq!(format_entry_date("yesterday"), "yesterday");
        assert_eq!(format_entry_date(""), "");
    }

    #[test]
    fn float_suffix_is_stripped_only_at_the_end() {
        assert_eq!(strip_float_suffix("101.0"), "101");
        assert_eq!(strip_float_suffix("101"), "101");
        assert_eq!(strip_float_suffix("10.05"), "10.05");
    }
}
