//! Submission lifecycle for the contact form
//!
//! `idle -> submitting -> (succeeded | failed) -> idle`. The request runs on
//! a spawned task; the event loop polls for its result so the rest of the
//! interface stays live while it is in flight.

use super::form_state::{ContactForm, ValidationError};
use crate::contact::{ContactSubmitter, SubmissionError};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use uuid::Uuid;

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What a submit attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request handed to the submitter
    Started(Uuid),
    /// Whole-form validation failed; nothing was sent
    Rejected(ValidationError),
    /// A submission is already in flight
    Ignored,
}

/// How an in-flight submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Succeeded,
    Failed(SubmissionError),
}

/// Owns the submission state and the pending result of an in-flight request
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    in_flight: Option<Uuid>,
    pending: Option<oneshot::Receiver<Result<(), SubmissionError>>>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Id of the request currently in flight
    #[allow(dead_code)]
    pub fn in_flight(&self) -> Option<Uuid> {
        self.in_flight
    }

    /// Validate the form and, if it passes, send it on a background task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(
        &mut self,
        form: &ContactForm,
        submitter: Arc<dyn ContactSubmitter>,
    ) -> SubmitOutcome {
        if self.state != SubmissionState::Idle {
            tracing::debug!("submit ignored, request already in flight");
            return SubmitOutcome::Ignored;
        }

        let request = match form.prepare_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(?err, "contact form rejected");
                return SubmitOutcome::Rejected(err);
            }
        };

        let id = request.id;
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = submitter.submit(&request).await;
            // Receiver gone means the app shut down; nothing left to notify
            let _ = tx.send(result);
        });

        tracing::info!(request_id = %id, "contact request submitted");
        self.state = SubmissionState::Submitting;
        self.in_flight = Some(id);
        self.pending = Some(rx);
        SubmitOutcome::Started(id)
    }

    /// Check whether the in-flight request has settled.
    ///
    /// On settlement the state moves to `Succeeded`/`Failed`; the caller runs
    /// its side effects and then calls [`finish`](Self::finish).
    pub fn poll(&mut self) -> Option<Settlement> {
        let rx = self.pending.as_mut()?;
        let settlement = match rx.try_recv() {
            Ok(Ok(())) => Settlement::Succeeded,
            Ok(Err(err)) => Settlement::Failed(err),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Settlement::Failed(SubmissionError::Interrupted),
        };

        self.pending = None;
        self.state = match settlement {
            Settlement::Succeeded => SubmissionState::Succeeded,
            Settlement::Failed(_) => SubmissionState::Failed,
        };
        Some(settlement)
    }

    /// Leave a settled state and accept new submissions
    pub fn finish(&mut self) {
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.state = SubmissionState::Idle;
            self.in_flight = None;
        }
    }
}
