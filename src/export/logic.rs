use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// Raw data export of the `daily` table.
pub struct ExportLogic;

impl ExportLogic {
    /// Export stored entries to `file` (absolute path).
    ///
    /// `range` is `None`, `"all"`, or one of `YYYY`, `YYYY-MM`,
    /// `YYYY-MM-DD`, optionally as `start:end`. Returns the number of
    /// entries written; an empty selection writes nothing.
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.trim().eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = load_entries(pool, bounds)?;
        if entries.is_empty() {
            warning("No entries found for the selected range, nothing exported.");
            return Ok(0);
        }

        ensure_parent(path)?;
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
            ExportFormat::Xlsx => export_xlsx(&entries, path, cfg.accent()?, cfg.tint()?)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            file,
            &format!("{} entries exported as {}", entries.len(), format.as_str()),
        );

        Ok(entries.len())
    }
}
