use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse an export `--range` into inclusive bounds.
///
/// Accepted: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or two of the same shape
/// joined by `:`.
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (first, last) = match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidRange(format!(
                    "{r}: start and end must have the same format"
                )));
            }
            (period(start)?.0, period(end)?.1)
        }
        None => period(r)?,
    };

    if first > last {
        return Err(AppError::InvalidRange(format!("{r}: start is after end")));
    }
    Ok((first, last))
}

/// First and last day of a year, month or single day.
fn period(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidRange(s.to_string());

    match s.len() {
        4 => {
            let y: i32 = s.parse().map_err(|_| bad())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(bad)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(bad)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").map_err(|_| bad())?;
            Ok((first, month_end(first).ok_or_else(bad)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| bad())?;
            Ok((d, d))
        }
        _ => Err(bad()),
    }
}

fn month_end(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
