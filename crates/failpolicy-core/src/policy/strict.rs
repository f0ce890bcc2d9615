//! Strict policy: every failure becomes an [`OutcomeError`].

use crate::config::PolicyConfig;
use crate::error::OutcomeError;
use crate::policy::{failure_message, Outcome, OutcomePolicy};
use crate::response::{RequestInfo, ResponseBody, ResponseDescriptor};

/// Errors on a missing status or any non-success status; otherwise returns the
/// body unchanged.
#[derive(Debug, Clone, Default)]
pub struct StrictPolicy {
    debug: bool,
}

impl StrictPolicy {
    /// Construct for a request. The request is not kept; the debug flag is
    /// read from the environment.
    pub fn new(_request: &RequestInfo) -> Self {
        Self::with_config(&PolicyConfig::from_env())
    }

    pub fn with_config(config: &PolicyConfig) -> Self {
        Self { debug: config.debug }
    }
}

impl OutcomePolicy for StrictPolicy {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn classify(
        &self,
        response: &ResponseDescriptor,
        body: ResponseBody,
    ) -> Result<Outcome, OutcomeError> {
        let Some(status) = response.status() else {
            tracing::warn!(policy = self.name(), "response has no status code");
            return Err(OutcomeError::new(
                "No status code in response",
                None,
                self.debug,
            ));
        };
        if self.is_failure(response) {
            tracing::debug!(policy = self.name(), status, "failed response");
            return Err(OutcomeError::new(
                failure_message(status, response),
                Some(body),
                self.debug,
            ));
        }
        tracing::trace!(policy = self.name(), status, "response accepted");
        Ok(Outcome::Body(body))
    }
}
