//! Core data model types for quizrun.

use std::fmt;

/// A single question and the answer it expects.
///
/// Entries are immutable after load and have no identity beyond their
/// position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionEntry {
    /// Text shown to the user.
    pub prompt: String,
    /// Expected answer, stored exactly as read.
    pub answer: String,
}

impl QuestionEntry {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered questions for one quiz run.
pub type QuestionSequence = Vec<QuestionEntry>;

/// How a single question ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    Correct,
    Wrong,
    TimedOut,
}

impl QuestionOutcome {
    /// Points awarded for this outcome.
    pub fn points(self) -> usize {
        match self {
            QuestionOutcome::Correct => 1,
            QuestionOutcome::Wrong | QuestionOutcome::TimedOut => 0,
        }
    }
}

/// How a whole run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every question was answered.
    Completed,
    /// The deadline fired while a question was waiting.
    TimedOut,
}

/// Final tally of a quiz run.
///
/// Invariant: `score <= total_asked <= total_loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Correct answers.
    pub score: usize,
    /// Questions answered before the run ended. The question that timed out
    /// is not counted.
    pub total_asked: usize,
    /// Questions in the loaded sequence.
    pub total_loaded: usize,
    pub outcome: RunOutcome,
}

impl RunResult {
    pub fn timed_out(&self) -> bool {
        self.outcome == RunOutcome::TimedOut
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your Score {}/{}", self.score, self.total_loaded)
    }
}
