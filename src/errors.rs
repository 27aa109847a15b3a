//! Unified application error type.
//! Every module (db, core, export, cli) returns AppError so the command
//! boundary can print one consistent message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Entry date {0} is in the future")]
    FutureDate(String),

    #[error("Nothing to save: paste the spreadsheet rows first")]
    EmptyInput,

    #[error("Malformed input at line {line}: expected at least 7 columns, found {found}")]
    MalformedInput { line: usize, found: usize },

    #[error("CSV error: {0}")]
    Paste(#[from] csv::Error),

    // ---------------------------
    // Editor errors
    // ---------------------------
    #[error("Worker ID not found: {0}")]
    WorkerNotFound(String),

    #[error("Please confirm before updating worker {0}")]
    UnconfirmedEdit(String),

    #[error("No worker selected: search for a worker before updating")]
    NoWorkerSelected,

    #[error("Invalid worker ID: {0:?}")]
    InvalidWorkerId(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / report errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

pub type AppResult<T> = Result<T, AppError>;
