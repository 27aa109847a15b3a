use crate::errors::{AppError, AppResult};
use crate::utils::colors::Rgb;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "GOODWILL FABRICS PVT. LTD - TAILOR EFFICIENCY CHART - DP UNIT 2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_report_title")]
    pub report_title: String,
    /// How many recent entries each worker shows in a report.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_tint_color")]
    pub tint_color: String,
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_report_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_history_limit() -> usize {
    6
}
fn default_accent_color() -> String {
    "#ffa14f".to_string()
}
fn default_tint_color() -> String {
    "#fce2ca".to_string()
}
fn default_report_dir() -> String {
    Config::config_dir().join("reports").to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            report_title: default_report_title(),
            history_limit: default_history_limit(),
            accent_color: default_accent_color(),
            tint_color: default_tint_color(),
            report_dir: default_report_dir(),
        }
    }
}

impl Config {
    /// `~/.effchart` (or `./.effchart` when no home directory is known)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".effchart")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("effchart.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("effchart.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.history_limit == 0 {
            return Err(AppError::Config("history_limit must be at least 1".into()));
        }
        self.accent()?;
        self.tint()?;
        Ok(())
    }

    pub fn accent(&self) -> AppResult<Rgb> {
        Rgb::from_hex(&self.accent_color)
    }

    pub fn tint(&self) -> AppResult<Rgb> {
        Rgb::from_hex(&self.tint_color)
    }

    /// A `--db` value: absolute paths are kept, bare names live in the
    /// config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the config directory, the configuration file (unless `is_test`)
    /// and an empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            // an unreadable file is replaced, keeping only the new database path
            let mut cfg = Self::load().unwrap_or_default();
            cfg.database = db_path.to_string_lossy().to_string();
            cfg.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
