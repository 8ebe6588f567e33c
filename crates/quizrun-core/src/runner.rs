//! The timed quiz loop.
//!
//! Each question races a deadline against the next line published by the
//! [`InputListener`]. A wrong answer scores zero and the loop moves on; a
//! fired deadline ends the whole run with the score accumulated so far.

use std::io::Write;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Instant};

use crate::error::QuizError;
use crate::listener::InputListener;
use crate::model::{QuestionEntry, QuestionOutcome, RunOutcome, RunResult};

/// How the time limit applies across questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    /// One deadline, started before the first prompt, bounds the whole run.
    #[default]
    Shared,
    /// The deadline restarts before every prompt.
    PerQuestion,
}

/// Settings for a single quiz run.
#[derive(Debug, Clone)]
pub struct QuizSettings {
    pub time_limit: Duration,
    pub timer: TimerMode,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(30),
            timer: TimerMode::Shared,
        }
    }
}

/// Compare an answer ignoring case and surrounding whitespace.
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Run the quiz over `questions`, writing prompts to `out`.
///
/// Returns the tally on completion or timeout. Input stream failures and
/// prompt write failures end the run with an error and no tally.
pub async fn run_quiz<W: Write>(
    questions: &[QuestionEntry],
    settings: &QuizSettings,
    listener: &mut InputListener,
    out: &mut W,
) -> Result<RunResult, QuizError> {
    let total_loaded = questions.len();
    let mut score = 0;
    let mut total_asked = 0;

    let deadline = sleep(settings.time_limit);
    tokio::pin!(deadline);

    for (index, entry) in questions.iter().enumerate() {
        if settings.timer == TimerMode::PerQuestion && index > 0 {
            deadline.as_mut().reset(Instant::now() + settings.time_limit);
        }

        write!(out, "{}: ", entry.prompt).map_err(QuizError::Output)?;
        out.flush().map_err(QuizError::Output)?;

        let outcome = tokio::select! {
            () = &mut deadline => QuestionOutcome::TimedOut,
            line = listener.next_line() => {
                let line = line?;
                if answers_match(&line, &entry.answer) {
                    QuestionOutcome::Correct
                } else {
                    QuestionOutcome::Wrong
                }
            }
        };

        tracing::debug!(question = index + 1, ?outcome, "question finished");

        if outcome == QuestionOutcome::TimedOut {
            tracing::info!("time limit reached after {total_asked} of {total_loaded} question(s)");
            return Ok(RunResult {
                score,
                total_asked,
                total_loaded,
                outcome: RunOutcome::TimedOut,
            });
        }

        score += outcome.points();
        total_asked += 1;
    }

    tracing::info!("quiz completed: {score}/{total_loaded}");
    Ok(RunResult {
        score,
        total_asked,
        total_loaded,
        outcome: RunOutcome::Completed,
    })
}
