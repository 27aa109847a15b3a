mod fs_utils;
mod json_csv;
pub mod logic;
pub mod pdf;
mod range;
pub mod report_pdf;
mod xlsx;

pub use logic::ExportLogic;
pub use report_pdf::{ReportLook, render_report_pdf};

pub(crate) use fs_utils::{ensure_parent, ensure_writable};
pub(crate) use report_pdf::export_report_pdf;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
