//! Simulated contact client
//!
//! There is no backend yet: requests are acknowledged after a fixed delay.

use super::traits::{ContactSubmitter, SubmissionError};
use crate::state::ContactRequest;
use async_trait::async_trait;
use std::time::Duration;

/// Fixed latency of the simulated call
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(7000);

/// Env var that makes every simulated submission fail
const FAILURE_ENV: &str = "CLINICA_TUI_SIMULATE_FAILURE";

/// Client that waits a fixed delay and then acknowledges the request
#[derive(Debug, Clone)]
pub struct SimulatedContactClient {
    latency: Duration,
    fail: bool,
}

impl SimulatedContactClient {
    /// Create a client that always succeeds after [`SIMULATED_LATENCY`]
    pub fn new() -> Self {
        Self {
            latency: SIMULATED_LATENCY,
            fail: false,
        }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Self {
        let fail = std::env::var(FAILURE_ENV)
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        if fail {
            tracing::info!("{FAILURE_ENV} set, submissions will fail");
        }
        Self { fail, ..Self::new() }
    }

    /// Make every submission fail after the delay
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for SimulatedContactClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedContactClient {
    async fn submit(&self, request: &ContactRequest) -> Result<(), SubmissionError> {
        tracing::info!(request_id = %request.id, "sending contact request");
        tokio::time::sleep(self.latency).await;

        if self.fail {
            return Err(SubmissionError::Transport(
                "simulated transport failure".to_string(),
            ));
        }

        tracing::info!(request_id = %request.id, "contact request acknowledged");
        Ok(())
    }
}
