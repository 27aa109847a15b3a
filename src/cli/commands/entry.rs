use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::IngestLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{date_or_today, iso, today};
use std::io::{self, IsTerminal, Read};

/// Handle the `entry` command: read a paste and store it for one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry { date, file } = cmd {
        let entry_date = date_or_today(date.as_deref())?;

        let text = match file {
            Some(path) => std::fs::read_to_string(path)?,
            None => read_stdin()?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        match IngestLogic::apply(&mut pool, &text, entry_date, today()) {
            Ok(n) => success(format!("Saved {n} rows for {}", iso(&entry_date))),
            Err(AppError::EmptyInput) => warning(AppError::EmptyInput),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn read_stdin() -> AppResult<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        info("Paste the rows (tab separated), then press Ctrl-D:");
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text)?;
    Ok(text)
}
