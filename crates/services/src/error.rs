//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use quiz_core::model::QuestionError;

/// Non-zero `response_code` returned by the trivia provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCode(pub u8);

impl ProviderCode {
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self.0 {
            1 => "not enough questions for the query",
            2 => "invalid parameter",
            3 => "session token not found",
            4 => "session token exhausted",
            5 => "rate limited",
            _ => "unknown error",
        }
    }
}

impl fmt::Display for ProviderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.reason(), self.0)
    }
}

/// Errors emitted while fetching a question batch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("question amount must be positive")]
    InvalidAmount,
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed trivia response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("trivia response has no results")]
    MissingResults,
    #[error("trivia provider returned no questions")]
    EmptyBatch,
    #[error("trivia provider rejected the request: {0}")]
    Provider(ProviderCode),
    #[error(transparent)]
    InvalidQuestion(#[from] QuestionError),
}
