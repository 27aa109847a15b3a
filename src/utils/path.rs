//! Path utilities: expand ~, build default artifact names.

use chrono::NaiveDate;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `Daily_Report_<YYYY-MM-DD>.pdf`
pub fn report_file_name(date: &NaiveDate) -> String {
    format!("Daily_Report_{}.pdf", date.format("%Y-%m-%d"))
}

/// Resolve where the report document goes: an explicit `--out` wins
/// (a directory gets the default file name appended), otherwise the
/// configured report directory.
pub fn resolve_report_path(out: Option<&str>, report_dir: &str, date: &NaiveDate) -> PathBuf {
    match out {
        Some(raw) => {
            let p = expand_tilde(raw);
            if p.is_dir() || raw.ends_with(['/', '\\']) {
                p.join(report_file_name(date))
            } else {
                p
            }
        }
        None => expand_tilde(report_dir).join(report_file_name(date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_named_by_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(report_file_name(&d), "Daily_Report_2024-03-05.pdf");
    }

    #[test]
    fn directory_out_gets_default_name() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let dir = std::env::temp_dir();
        let p = resolve_report_path(Some(&dir.to_string_lossy()), "/unused", &d);
        assert_eq!(p, dir.join("Daily_Report_2024-03-05.pdf"));

        let p = resolve_report_path(None, "/srv/reports", &d);
        assert_eq!(p, PathBuf::from("/srv/reports/Daily_Report_2024-03-05.pdf"));
    }
}
