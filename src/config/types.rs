use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::trivia::InsertionMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Question source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint URL without query string.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Size of the question pool requested per fetch (1..=50).
    #[serde(default = "default_amount")]
    pub amount: u32,
    /// Category id (18 = Science: Computers).
    #[serde(default = "default_category")]
    pub category: u32,
    /// Connect and total request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Quiz behavior settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Distribution of the correct answer's position.
    #[serde(default)]
    pub insertion: InsertionMode,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache dir>/quizterm/quizterm.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://opentdb.com/api.php".to_string()
}

fn default_amount() -> u32 {
    30
}

fn default_category() -> u32 {
    18
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            amount: default_amount(),
            category: default_category(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quizterm")
                .join("quizterm.log"),
        }
    }
}
