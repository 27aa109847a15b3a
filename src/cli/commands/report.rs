use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{build_report, render_screen};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ReportLook, ensure_parent, ensure_writable, export_report_pdf};
use crate::ui::messages::{info, warning};
use crate::utils::date::{date_or_today, iso};
use crate::utils::path::resolve_report_path;
use std::io::{self, IsTerminal};

/// Handle the `report` command: tables on screen, or a PDF with `--pdf`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        date,
        worker_id,
        pdf,
        out,
        force,
    } = cmd
    {
        let date = date_or_today(date.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let report = build_report(&pool, &date, worker_id.as_deref(), cfg.history_limit)?;

        if !*pdf {
            if report.is_empty() {
                info("No records found");
            } else {
                // colour the header only on a terminal, redirected output stays plain
                let accent = if io::stdout().is_terminal() {
                    Some(cfg.accent()?)
                } else {
                    None
                };
                print!("{}", render_screen(&report, accent));
            }
            return Ok(());
        }

        if report.is_empty() {
            warning("No records found, the document will only carry the title.");
        }

        let path = resolve_report_path(out.as_deref(), &cfg.report_dir, &date);
        ensure_parent(&path)?;
        ensure_writable(&path, *force)?;

        let look = ReportLook {
            title: cfg.report_title.clone(),
            accent: cfg.accent()?,
            tint: cfg.tint()?,
        };
        export_report_pdf(&report, &look, &path)?;

        ttlog_quiet(
            &pool.conn,
            "report",
            &path.to_string_lossy(),
            &format!(
                "PDF report for {} with {} workers",
                iso(&date),
                report.sections.len()
            ),
        );
    }

    Ok(())
}
