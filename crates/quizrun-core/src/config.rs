//! Run configuration and loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::loader::LoaderOptions;
use crate::runner::{QuizSettings, TimerMode};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "quizrun.toml";

/// Top-level quizrun configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Question file to load.
    #[serde(default = "default_questions")]
    pub questions: PathBuf,
    /// Time limit in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
    /// Shuffle question order before the run.
    #[serde(default)]
    pub shuffle: bool,
    /// Whether the limit spans the whole run or restarts per question.
    #[serde(default)]
    pub timer: TimerMode,
    /// Field separator of the question file.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_questions() -> PathBuf {
    PathBuf::from("quiz-problem.csv")
}
fn default_time_limit() -> u64 {
    30
}
fn default_delimiter() -> char {
    '\t'
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            time_limit_secs: default_time_limit(),
            shuffle: false,
            timer: TimerMode::default(),
            delimiter: default_delimiter(),
        }
    }
}

impl QuizrunConfig {
    /// Check values that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.time_limit_secs >= 1,
            "time limit must be at least 1 second"
        );
        anyhow::ensure!(
            self.delimiter.is_ascii(),
            "delimiter must be a single ASCII character, got {:?}",
            self.delimiter
        );
        Ok(())
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            delimiter: self.delimiter as u8,
        }
    }

    pub fn quiz_settings(&self) -> QuizSettings {
        QuizSettings {
            time_limit: Duration::from_secs(self.time_limit_secs),
            timer: self.timer,
        }
    }
}

/// Load config from an explicit path, or from `quizrun.toml` in the current
/// directory when present, falling back to defaults.
///
/// Environment variable overrides: `QUIZRUN_TIME_LIMIT`, `QUIZRUN_SHUFFLE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizrunConfig::default(),
    };

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config_str(content: &str) -> Result<QuizrunConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(
    mut config: QuizrunConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<QuizrunConfig> {
    if let Some(limit) = lookup("QUIZRUN_TIME_LIMIT") {
        config.time_limit_secs = limit
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZRUN_TIME_LIMIT: {limit}"))?;
    }

    if let Some(shuffle) = lookup("QUIZRUN_SHUFFLE") {
        config.shuffle = match shuffle.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            other => anyhow::bail!("invalid QUIZRUN_SHUFFLE: {other}"),
        };
    }

    Ok(config)
}
