//! Turn text pasted from a spreadsheet into `daily` rows.
//!
//! Expected columns, tab separated, no header:
//! `S.NO  worker_id  name  role  work  category  achieved  [ignored...]`

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::append;
use crate::errors::{AppError, AppResult};
use crate::models::DailyEntry;
use crate::utils::date::iso;
use crate::utils::formatting::strip_float_suffix;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};

/// Columns a pasted row must have (the serial number included).
pub const PASTE_COLUMNS: usize = 7;

/// Parse the whole paste. The batch is rejected as soon as one row is
/// short of columns, so callers never see a partial result.
pub fn parse_paste(text: &str, entry_date: &NaiveDate) -> AppResult<Vec<DailyEntry>> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let date = iso(entry_date);
    let mut out = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;

        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        if record.len() < PASTE_COLUMNS {
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 1);
            return Err(AppError::MalformedInput {
                line,
                found: record.len(),
            });
        }

        out.push(DailyEntry {
            worker_id: strip_float_suffix(&record[1]).to_string(),
            name: record[2].to_string(),
            role: record[3].to_string(),
            work: record[4].to_string(),
            category: record[5].to_string(),
            target: String::new(),
            achieved: record[6].to_string(),
            entry_date: date.clone(),
        });
    }

    if out.is_empty() {
        return Err(AppError::EmptyInput);
    }

    Ok(out)
}

/// High-level logic for the `entry` command.
pub struct IngestLogic;

impl IngestLogic {
    /// Validate the date, parse the paste and append it as one batch.
    /// Returns the number of rows stored.
    pub fn apply(
        pool: &mut DbPool,
        text: &str,
        entry_date: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<usize> {
        if entry_date > today {
            return Err(AppError::FutureDate(iso(&entry_date)));
        }

        let batch = parse_paste(text, &entry_date)?;
        let n = append(pool, &batch)?;

        ttlog_quiet(
            &pool.conn,
            "entry",
            &iso(&entry_date),
            &format!("Saved {n} rows"),
        );

        Ok(n)
    }
}
