//! Error types for loading question files and running a quiz.
//!
//! Timeouts and wrong answers are not errors: they are recovered inside the
//! quiz loop and reported through [`crate::model::QuestionOutcome`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a load before any question is asked.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The question file could not be opened.
    #[error("failed to open question file {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row has fewer than two fields.
    #[error("invalid format on line {line}: expected a question and an answer, found {fields} field(s)")]
    Format { line: u64, fields: usize },

    /// The delimited reader could not decode a record.
    #[error("malformed question file: {0}")]
    Malformed(#[from] csv::Error),

    /// The source yielded zero rows.
    #[error("no questions in source")]
    EmptySource,
}

/// Errors that end a quiz run without a score.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Reading the answer stream failed.
    #[error("failed to read answer: {0}")]
    InputStream(#[source] io::Error),

    /// The answer stream ended while a question was waiting.
    #[error("answer stream closed")]
    InputClosed,

    /// Writing a prompt failed.
    #[error("failed to write prompt: {0}")]
    Output(#[source] io::Error),
}

impl QuizError {
    /// Returns `true` if the failure came from the input side.
    pub fn is_input_failure(&self) -> bool {
        matches!(self, QuizError::InputStream(_) | QuizError::InputClosed)
    }
}
