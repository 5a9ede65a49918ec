use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::trivia::InsertionMode;

/// Terminal trivia quiz backed by the Open Trivia Database.
#[derive(Debug, Parser)]
#[command(name = "quizterm", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/quizterm/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the question category id
    #[arg(long, value_name = "ID")]
    pub category: Option<u32>,

    /// Override the question pool size requested per fetch
    #[arg(long, value_name = "N")]
    pub amount: Option<u32>,

    /// Override how the correct answer's position is drawn
    #[arg(long, value_enum)]
    pub insertion: Option<InsertionMode>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(category) = self.category {
            config.api.category = category;
        }
        if let Some(amount) = self.amount {
            config.api.amount = amount;
        }
        if let Some(insertion) = self.insertion {
            config.quiz.insertion = insertion;
        }
    }
}
