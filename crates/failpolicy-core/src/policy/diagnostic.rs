//! Diagnostic policy: failures come back as a [`FailureReport`] value.

use crate::config::PolicyConfig;
use crate::error::OutcomeError;
use crate::policy::{FailureReport, Outcome, OutcomePolicy};
use crate::response::{RequestInfo, ResponseBody, ResponseDescriptor};

/// Returns `{response, body}` for a failed response and the body otherwise.
/// Never errors; callers must check for [`Outcome::Diagnostic`] themselves.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticPolicy;

impl DiagnosticPolicy {
    pub fn new(_request: &RequestInfo) -> Self {
        Self
    }

    pub fn with_config(_config: &PolicyConfig) -> Self {
        Self
    }
}

impl OutcomePolicy for DiagnosticPolicy {
    fn name(&self) -> &'static str {
        "diagnostic"
    }

    fn classify(
        &self,
        response: &ResponseDescriptor,
        body: ResponseBody,
    ) -> Result<Outcome, OutcomeError> {
        if self.is_failure(response) {
            tracing::debug!(
                policy = self.name(),
                status = response.status(),
                "failed response wrapped"
            );
            return Ok(Outcome::Diagnostic(FailureReport {
                response: response.clone(),
                body,
            }));
        }
        Ok(Outcome::Body(body))
    }
}
