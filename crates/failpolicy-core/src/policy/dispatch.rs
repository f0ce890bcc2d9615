//! Dispatch policy: failures become an [`OutcomeError`] tagged by status.
//!
//! | Status | Kind                  |
//! |--------|-----------------------|
//! | 400    | `BadRequest`          |
//! | 401    | `Unauthorized`        |
//! | 404    | `NotFound`            |
//! | 500    | `InternalServerError` |
//! | other  | `Generic`             |

use crate::config::PolicyConfig;
use crate::error::{OutcomeError, OutcomeErrorKind};
use crate::policy::{failure_message, Outcome, OutcomePolicy};
use crate::response::{RequestInfo, ResponseBody, ResponseDescriptor};

#[derive(Debug, Clone, Default)]
pub struct DispatchPolicy {
    debug: bool,
}

impl DispatchPolicy {
    pub fn new(_request: &RequestInfo) -> Self {
        Self::with_config(&PolicyConfig::from_env())
    }

    pub fn with_config(config: &PolicyConfig) -> Self {
        Self { debug: config.debug }
    }

    /// The error kind raised for a failing status.
    pub fn error_kind_for(&self, status: &str) -> OutcomeErrorKind {
        OutcomeErrorKind::from_status(status)
    }
}

impl OutcomePolicy for DispatchPolicy {
    fn name(&self) -> &'static str {
        "dispatch"
    }

    fn classify(
        &self,
        response: &ResponseDescriptor,
        body: ResponseBody,
    ) -> Result<Outcome, OutcomeError> {
        match response.status() {
            Some(status) if self.is_failure(response) => {
                let kind = self.error_kind_for(status);
                tracing::debug!(policy = self.name(), status, %kind, "failed response");
                Err(OutcomeError::with_kind(
                    kind,
                    failure_message(status, response),
                    Some(body),
                    self.debug,
                ))
            }
            _ => Ok(Outcome::Body(body)),
        }
    }
}
