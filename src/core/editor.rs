//! Worker identity correction.
//!
//! The editor is a two-state machine owned by the caller:
//! `Idle` → (search hit) → `WorkerLocated` → (confirmed update) → `Idle`.
//! A search miss changes nothing, and an unconfirmed update keeps the
//! located worker so the caller can retry.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{find_worker, rename_worker};
use crate::errors::{AppError, AppResult};
use crate::models::WorkerRef;

/// Identity captured by a successful search, waiting to be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub current: WorkerRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Editor {
    #[default]
    Idle,
    WorkerLocated(PendingEdit),
}

impl Editor {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn pending(&self) -> Option<&PendingEdit> {
        match self {
            Editor::Idle => None,
            Editor::WorkerLocated(p) => Some(p),
        }
    }

    /// Look a worker up by id. A hit replaces any previous pending edit;
    /// a miss leaves the editor as it was.
    pub fn search(&mut self, pool: &DbPool, worker_id: &str) -> AppResult<&PendingEdit> {
        let id = worker_id.trim();

        let current =
            find_worker(pool, id)?.ok_or_else(|| AppError::WorkerNotFound(id.to_string()))?;
        *self = Editor::WorkerLocated(PendingEdit { current });
        self.pending().ok_or(AppError::NoWorkerSelected)
    }

    /// Rewrite the located worker's id and name across its whole history.
    ///
    /// Returns the number of rows relabeled. Without confirmation nothing is
    /// written and the pending edit is kept.
    pub fn update(
        &mut self,
        pool: &DbPool,
        new_id: &str,
        new_name: &str,
        confirmed: bool,
    ) -> AppResult<usize> {
        let pending = self.pending().ok_or(AppError::NoWorkerSelected)?;
        let old_id = pending.current.worker_id.clone();

        if !confirmed {
            return Err(AppError::UnconfirmedEdit(old_id));
        }

        let new_id = new_id.trim();
        let new_name = new_name.trim();
        if new_id.is_empty() {
            return Err(AppError::InvalidWorkerId(new_id.to_string()));
        }

        let n = rename_worker(pool, &old_id, new_id, new_name)?;
        *self = Editor::Idle;

        ttlog_quiet(
            &pool.conn,
            "edit",
            &old_id,
            &format!("Worker relabeled as {new_id} ({new_name}) on {n} rows"),
        );

        Ok(n)
    }
}
