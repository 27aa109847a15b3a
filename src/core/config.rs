use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML (file values merged with defaults).
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Editor preference: `--editor`, then `$EDITOR`, then `$VISUAL`,
    /// then the platform default.
    pub fn pick_editor(requested: Option<&str>) -> String {
        requested
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(default_editor)
    }

    /// Open `path` in the chosen editor, falling back to the platform
    /// default once. The file is written with defaults first if missing.
    pub fn edit(cfg: &Config, path: &Path, requested: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            cfg.save_to(path)?;
        }

        let editor = Self::pick_editor(requested);
        if run_editor(&editor, path) {
            success(format!("Configuration edited with '{editor}'"));
            return Ok(());
        }

        let fallback = default_editor();
        warning(format!(
            "Editor '{editor}' not available, falling back to '{fallback}'"
        ));
        if fallback != editor && run_editor(&fallback, path) {
            success(format!("Configuration edited with '{fallback}'"));
            return Ok(());
        }

        Err(AppError::Config(format!(
            "could not open {} with '{editor}' or '{fallback}'",
            path.display()
        )))
    }
}

fn default_editor() -> String {
    if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "nano".to_string()
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
