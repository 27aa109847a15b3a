use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface for effchart:
/// record daily tailor output pasted from a spreadsheet and print
/// per-worker efficiency charts.
#[derive(Parser)]
#[command(
    name = "effchart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily tailor productivity and print per-worker efficiency charts",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Save a batch of pasted spreadsheet rows for one day
    Entry {
        /// Entry date (YYYY-MM-DD, default: today; future dates are refused)
        #[arg(long)]
        date: Option<String>,

        /// Read the tab-separated rows from a file instead of stdin
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Show recent history per worker, on screen or as a PDF document
    Report {
        /// Cutoff date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Only this worker ID
        #[arg(long = "id", value_name = "WORKER_ID")]
        worker_id: Option<String>,

        /// Write a PDF document instead of printing tables
        #[arg(long)]
        pdf: bool,

        /// PDF destination (file or directory, default: report_dir)
        #[arg(long, value_name = "PATH", requires = "pdf")]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Correct a worker's ID and name across all stored entries
    Edit {
        /// Current worker ID
        worker_id: String,

        #[arg(long = "new-id", value_name = "ID", help = "New worker ID (default: unchanged)")]
        new_id: Option<String>,

        #[arg(long = "new-name", value_name = "NAME", help = "New name (default: unchanged)")]
        new_name: Option<String>,

        #[arg(long, help = "Apply without asking for confirmation")]
        confirm: bool,
    },

    /// Export stored entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (e.g. 2024-01:2024-03)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },
}
