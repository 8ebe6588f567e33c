//! The `quizrun run` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizrun_core::config::{load_config_from, QuizrunConfig};
use quizrun_core::listener::InputListener;
use quizrun_core::runner::{run_quiz, TimerMode};
use quizrun_core::{loader, order};

pub async fn execute(
    file: Option<PathBuf>,
    limit: Option<u64>,
    shuffle: bool,
    per_question: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    apply_flags(&mut config, file, limit, shuffle, per_question);
    config.validate()?;

    let mut questions = loader::load_questions(&config.questions, &config.loader_options())?;
    order::order(&mut questions, config.shuffle);
    tracing::info!(
        "starting quiz: {} question(s), {}s limit ({:?} timer)",
        questions.len(),
        config.time_limit_secs,
        config.timer
    );

    let mut out = std::io::stdout();
    let result = {
        let mut listener = InputListener::stdin();
        run_quiz(&questions, &config.quiz_settings(), &mut listener, &mut out)
            .await
            .map_err(|e| {
                if e.is_input_failure() {
                    anyhow::Error::new(e).context("quiz aborted, answers can no longer be read")
                } else {
                    e.into()
                }
            })?
    };

    // A timed-out prompt leaves the cursor mid-line
    if result.timed_out() {
        writeln!(out)?;
    }
    writeln!(out, "{result}")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

/// Command-line flags take precedence over config and environment.
fn apply_flags(
    config: &mut QuizrunConfig,
    file: Option<PathBuf>,
    limit: Option<u64>,
    shuffle: bool,
    per_question: bool,
) {
    if let Some(file) = file {
        config.questions = file;
    }
    if let Some(limit) = limit {
        config.time_limit_secs = limit;
    }
    if shuffle {
        config.shuffle = true;
    }
    if per_question {
        config.timer = TimerMode::PerQuestion;
    }
}
