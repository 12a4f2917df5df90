//! Core error types.
//!
//! These cover dataset loading, sampling, and session state transitions.
//! Defined as a typed enum so front ends can match on the failure kind
//! instead of string matching (the console loop turns `EmptyCategory` into
//! a friendly message rather than an error exit).

use thiserror::Error;

/// Errors produced by the question store and session controller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The category filter matched zero questions.
    #[error("no questions found for category '{0}'")]
    EmptyCategory(String),

    /// More questions were requested than the (filtered) dataset holds.
    #[error("requested {requested} questions but only {available} available")]
    InsufficientQuestions { requested: usize, available: usize },

    /// A question count of zero was requested.
    #[error("question count must be at least 1")]
    InvalidCount,

    /// An answer was recorded while no session was in progress.
    #[error("no session in progress")]
    NotStarted,

    /// An answer was recorded after the last question.
    #[error("session is already complete")]
    SessionComplete,

    /// The dataset file could not be read or parsed.
    #[error("dataset error: {0}")]
    Dataset(String),
}

impl CoreError {
    /// Returns `true` if this error stems from user input (category/count)
    /// rather than a broken dataset or misused controller.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyCategory(_)
                | CoreError::InsufficientQuestions { .. }
                | CoreError::InvalidCount
        )
    }
}
