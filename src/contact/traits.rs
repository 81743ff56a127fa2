//! Trait abstraction for contact submission to enable mocking in tests

use crate::state::ContactRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Generic failure text shown for any submission error
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Ocorreu um erro ao enviar a mensagem. Por favor, tente novamente.";

/// Failure while delivering a contact request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The transport reported a failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The submission task ended without reporting a result
    #[error("submission interrupted")]
    Interrupted,
}

impl SubmissionError {
    /// Text shown to the user, whatever the cause
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }
}

/// Delivers validated contact requests to the practice.
///
/// The form controller only depends on this trait, so a real network client
/// can replace the simulated one without touching it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Deliver a contact request
    async fn submit(&self, request: &ContactRequest) -> Result<(), SubmissionError>;
}
