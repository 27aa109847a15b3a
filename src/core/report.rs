//! Per-worker rolling history as of a cutoff date.
//!
//! Both the terminal view and the PDF document are built from the same
//! [`Report`]; they only differ in the columns they show.

use crate::db::pool::DbPool;
use crate::db::queries::{list_workers, query_recent};
use crate::errors::AppResult;
use crate::models::{DailyEntry, WorkerRef};
use crate::utils::colors::Rgb;
use crate::utils::formatting::{format_entry_date, normalize_numeral};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub const SCREEN_HEADERS: [&str; 7] = [
    "Date", "ID", "Name", "Role", "Work", "Category", "Achieved",
];

pub const DOCUMENT_HEADERS: [&str; 8] = [
    "Date", "ID", "Name", "Role", "Work", "Category", "Target", "Achieved",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSection {
    pub worker: WorkerRef,
    /// Newest first, never empty.
    pub entries: Vec<DailyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub date: NaiveDate,
    pub sections: Vec<WorkerSection>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Collect the history of every worker with entries on or before `date`
/// (or only `filter`, when given), at most `limit` entries each.
pub fn build_report(
    pool: &DbPool,
    date: &NaiveDate,
    filter: Option<&str>,
    limit: usize,
) -> AppResult<Report> {
    let filter = filter.map(str::trim).filter(|f| !f.is_empty());

    let mut workers = list_workers(pool, date, filter)?;
    // a worker whose name changed over time appears once per name
    workers.dedup_by(|a, b| a.worker_id == b.worker_id);

    let mut sections = Vec::with_capacity(workers.len());
    for w in workers {
        let entries = query_recent(pool, &w.worker_id, date, limit)?;
        let Some(latest) = entries.first() else {
            continue;
        };

        sections.push(WorkerSection {
            worker: WorkerRef::new(w.worker_id.clone(), latest.name.clone()),
            entries,
        });
    }

    Ok(Report {
        date: *date,
        sections,
    })
}

/// Row for the terminal view (no Target column).
pub fn screen_row(e: &DailyEntry) -> Vec<String> {
    vec![
        format_entry_date(&e.entry_date),
        normalize_numeral(&e.worker_id),
        e.name.clone(),
        e.role.clone(),
        e.work.clone(),
        e.category.clone(),
        normalize_numeral(&e.achieved),
    ]
}

/// Row for the PDF document.
pub fn document_row(e: &DailyEntry) -> Vec<String> {
    vec![
        format_entry_date(&e.entry_date),
        normalize_numeral(&e.worker_id),
        e.name.clone(),
        e.role.clone(),
        e.work.clone(),
        e.category.clone(),
        e.target.clone(),
        normalize_numeral(&e.achieved),
    ]
}

pub fn section_title(section: &WorkerSection) -> String {
    format!(
        "{} - {}",
        normalize_numeral(&section.worker.worker_id),
        section.worker.name
    )
}

/// Terminal rendering: one table per worker separated by a rule.
pub fn render_screen(report: &Report, accent: Option<Rgb>) -> String {
    let mut out = String::new();

    for section in &report.sections {
        out.push_str(&section_title(section));
        out.push('\n');

        let mut table = Table::new(&SCREEN_HEADERS);
        if let Some(a) = accent {
            table = table.with_accent(a);
        }
        for e in &section.entries {
            table.add_row(screen_row(e));
        }

        out.push_str(&table.render());
        out.push_str("---\n");
    }

    out
}
