//! Contact request submission boundary

mod client;
mod traits;

pub use client::{SimulatedContactClient, SIMULATED_LATENCY};
pub use traits::{ContactSubmitter, SubmissionError};

#[cfg(test)]
pub use traits::MockContactSubmitter;
