use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::Editor;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;

/// Handle the `edit` command: locate the worker, confirm, relabel.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        worker_id,
        new_id,
        new_name,
        confirm,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut editor = Editor::new();

        let current = editor.search(&pool, worker_id)?.current.clone();
        info(format!(
            "Worker found: {} - {}",
            current.worker_id, current.name
        ));

        let new_id = new_id.as_deref().unwrap_or(&current.worker_id);
        let new_name = new_name.as_deref().unwrap_or(&current.name);

        let confirmed = *confirm
            || ask_confirmation(&format!(
                "Relabel every entry of {} - {} as {} - {}?",
                current.worker_id,
                current.name,
                new_id.trim(),
                new_name.trim()
            ))?;

        match editor.update(&pool, new_id, new_name, confirmed) {
            Ok(n) => success(format!("Updated {n} rows")),
            Err(e @ AppError::UnconfirmedEdit(_)) => warning(e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
