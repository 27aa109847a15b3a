use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{DailyEntry, WorkerRef};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str =
    "worker_id, name, role, work, category, target, achieved, entry_date";

/// Read a cell as text whatever its storage class: NULL becomes "",
/// numbers written by other tools keep their textual form.
fn text_at(row: &Row, idx: usize) -> Result<String> {
    Ok(match row.get::<_, Value>(idx)? {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                format!("{f:.1}")
            } else {
                f.to_string()
            }
        }
        Value::Text(s) => s,
        Value::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
    })
}

pub fn map_row(row: &Row) -> Result<DailyEntry> {
    Ok(DailyEntry {
        worker_id: text_at(row, 0)?,
        name: text_at(row, 1)?,
        role: text_at(row, 2)?,
        work: text_at(row, 3)?,
        category: text_at(row, 4)?,
        target: text_at(row, 5)?,
        achieved: text_at(row, 6)?,
        entry_date: text_at(row, 7)?,
    })
}

fn map_worker(row: &Row) -> Result<WorkerRef> {
    Ok(WorkerRef {
        worker_id: text_at(row, 0)?,
        name: text_at(row, 1)?,
    })
}

/// Insert a batch of entries in one transaction: all rows or none.
pub fn append(pool: &mut DbPool, entries: &[DailyEntry]) -> AppResult<usize> {
    pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(&format!(
                "INSERT INTO daily ({ENTRY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
            ))?;

            for e in entries {
                stmt.execute(params![
                    e.worker_id,
                    e.name,
                    e.role,
                    e.work,
                    e.category,
                    e.target,
                    e.achieved,
                    e.entry_date,
                ])?;
            }
        }
        tx.commit()?;
        Ok(entries.len())
    })
}

/// The `limit` most recent entries of a worker on or before `as_of`,
/// newest first. Entries sharing a date keep reverse insertion order.
pub fn query_recent(
    pool: &DbPool,
    worker_id: &str,
    as_of: &NaiveDate,
    limit: usize,
) -> AppResult<Vec<DailyEntry>> {
    let mut stmt = pool.conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM daily
         WHERE worker_id = ?1 AND entry_date <= ?2
         ORDER BY entry_date DESC, rowid DESC
         LIMIT ?3"
    ))?;

    let rows = stmt.query_map(
        params![worker_id, as_of.format("%Y-%m-%d").to_string(), limit as i64],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Distinct `(worker_id, name)` pairs with at least one entry on or before
/// `as_of`, ordered by worker id. `filter` restricts the result to one id.
pub fn list_workers(
    pool: &DbPool,
    as_of: &NaiveDate,
    filter: Option<&str>,
) -> AppResult<Vec<WorkerRef>> {
    let as_of = as_of.format("%Y-%m-%d").to_string();

    let mut out = Vec::new();
    match filter {
        Some(id) => {
            let mut stmt = pool.conn.prepare(
                "SELECT DISTINCT worker_id, name FROM daily
                 WHERE entry_date <= ?1 AND worker_id = ?2
                 ORDER BY worker_id, name",
            )?;
            for r in stmt.query_map(params![as_of, id], map_worker)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT DISTINCT worker_id, name FROM daily
                 WHERE entry_date <= ?1
                 ORDER BY worker_id, name",
            )?;
            for r in stmt.query_map(params![as_of], map_worker)? {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// Current `(worker_id, name)` of a worker, from the most recent entry.
pub fn find_worker(pool: &DbPool, worker_id: &str) -> AppResult<Option<WorkerRef>> {
    let found = pool
        .conn
        .query_row(
            "SELECT worker_id, name FROM daily
             WHERE worker_id = ?1
             ORDER BY entry_date DESC, rowid DESC
             LIMIT 1",
            params![worker_id],
            map_worker,
        )
        .optional()?;
    Ok(found)
}

/// Relabel every row of `old_id` with the new id and name.
/// Returns the number of rows updated.
pub fn rename_worker(
    pool: &DbPool,
    old_id: &str,
    new_id: &str,
    new_name: &str,
) -> AppResult<usize> {
    let n = pool.conn.execute(
        "UPDATE daily SET worker_id = ?1, name = ?2 WHERE worker_id = ?3",
        params![new_id, new_name, old_id],
    )?;
    Ok(n)
}

pub fn count_entries(pool: &DbPool) -> AppResult<i64> {
    let n = pool
        .conn
        .query_row("SELECT COUNT(*) FROM daily", [], |row| row.get(0))?;
    Ok(n)
}

/// All entries, optionally within inclusive date bounds,
/// ordered by date then worker id.
pub fn load_entries(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DailyEntry>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = pool.conn.prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM daily
                 ORDER BY entry_date ASC, worker_id ASC, rowid ASC"
            ))?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let mut stmt = pool.conn.prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM daily
                 WHERE entry_date BETWEEN ?1 AND ?2
                 ORDER BY entry_date ASC, worker_id ASC, rowid ASC"
            ))?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}
