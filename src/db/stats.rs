use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;
use rusqlite::OptionalExtension;
use std::fs;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DbStats {
    pub entries: i64,
    pub workers: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect(pool: &DbPool) -> AppResult<DbStats> {
    let workers: i64 =
        pool.conn
            .query_row("SELECT COUNT(DISTINCT worker_id) FROM daily", [], |row| {
                row.get(0)
            })?;

    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(entry_date), MAX(entry_date) FROM daily",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    Ok(DbStats {
        entries: count_entries(pool)?,
        workers,
        first_date,
        last_date,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let stats = collect(pool)?;

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = file_size as f64 / 1024.0;
    let label = |s: &str| Cyan.paint(format!("• {s}:")).to_string();
    let dash = || Style::new().dimmed().paint("--").to_string();

    println!();
    println!("{} {}", label("File"), Yellow.paint(db_path));
    println!("{} {:.1} KB", label("Size"), file_kb);
    println!("{} {}", label("Entries"), Green.paint(stats.entries.to_string()));
    println!("{} {}", label("Workers"), Green.paint(stats.workers.to_string()));
    println!("{}", label("Date range"));
    println!("    from: {}", stats.first_date.unwrap_or_else(dash));
    println!("    to:   {}", stats.last_date.unwrap_or_else(dash));
    println!();

    Ok(())
}
