//! Runtime settings read from the environment (and `.env`, if present).

use std::path::PathBuf;

pub const STORE_ENV: &str = "GRADE_CALC_STORE";
pub const LOG_FILE_ENV: &str = "LOG_FILE_PATH";

const DEFAULT_STORE_PATH: &str = "grade_calc.json";
const DEFAULT_LOG_FILE: &str = "logs/grade_calc.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON file holding the saved subject list.
    pub store_path: PathBuf,
    /// Rolling JSON log file; the date is appended to the file name daily.
    pub log_file: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            store_path: PathBuf::from(get(STORE_ENV, DEFAULT_STORE_PATH)),
            log_file: PathBuf::from(get(LOG_FILE_ENV, DEFAULT_LOG_FILE)),
        }
    }
}
