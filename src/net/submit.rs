//! Contact submission seam.
//!
//! The production system supplies an endpoint that accepts a
//! [`ContactSubmission`] and answers success or failure; this crate ships a
//! stand-in that logs the payload and resolves after a fixed delay, so the
//! form lifecycle (disable, wait, notice, reset) is exercised end to end
//! without any network I/O. A real submitter must also handle timeouts,
//! non-2xx responses, and retries.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::Serialize;

/// How long the stand-in pretends the round trip takes.
pub const SUBMIT_SIMULATION_MS: u64 = 2_000;

/// The contact form payload, in its future wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Submission failure surfaced through the form's info channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitError(pub String);

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "submission failed: {}", self.0)
    }
}

/// Deliver a submission. The stand-in always succeeds after
/// [`SUBMIT_SIMULATION_MS`]; server-side and native builds resolve
/// immediately.
#[allow(clippy::unused_async)]
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        match serde_json::to_string(submission) {
            Ok(payload) => log::info!("simulated contact submission: {payload}"),
            Err(e) => return Err(SubmitError(e.to_string())),
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(SUBMIT_SIMULATION_MS)).await;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Ok(())
    }
}
