//! quizrun-core — Question loading, ordering and the timed quiz loop.
//!
//! The pipeline is linear: a tab-separated source is parsed into a
//! [`model::QuestionSequence`], optionally shuffled, then consumed once by
//! [`runner::run_quiz`] which races a deadline against lines published by an
//! [`listener::InputListener`].

pub mod config;
pub mod error;
pub mod listener;
pub mod loader;
pub mod model;
pub mod order;
pub mod runner;
