//! Configuration loading and defaults.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, MAX_AMOUNT};
pub use types::{ApiConfig, Config, LoggingConfig, QuizConfig};
