use crate::error::{NotesError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_KEY: &str = "minimal-notes";
pub const DEFAULT_STATUS_MS: i64 = 1000;
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub notes_dir: PathBuf,
    pub key: String,
    pub status_timeout_ms: i64,
    pub use_color: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let key = env::var("MINIMAL_NOTES_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEFAULT_KEY.to_string());
        let status_timeout_ms = env::var("MINIMAL_NOTES_STATUS_MS")
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|ms| *ms >= 0)
            .unwrap_or(DEFAULT_STATUS_MS);
        Ok(Self {
            notes_dir: notes_dir()?,
            key,
            status_timeout_ms,
            use_color: env::var("NO_COLOR").is_err(),
        })
    }
}

pub fn notes_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("MINIMAL_NOTES_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = env::var("HOME").map_err(|_| NotesError::HomeNotSet)?;
    Ok(PathBuf::from(home).join(".minimal_notes"))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
