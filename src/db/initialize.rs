use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `daily` and `log` tables if they are missing.
///
/// `daily` keeps the column layout of the original spreadsheet workflow:
/// eight TEXT columns, no key, no constraints.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily (
            worker_id  TEXT,
            name       TEXT,
            role       TEXT,
            work       TEXT,
            category   TEXT,
            target     TEXT,
            achieved   TEXT,
            entry_date TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_daily_worker_date ON daily(worker_id, entry_date);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
