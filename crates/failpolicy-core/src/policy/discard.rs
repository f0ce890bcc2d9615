//! Discard policy: failures come back as [`Outcome::Discarded`].
//!
//! Only useful when the caller has no use for failure details.

use crate::config::PolicyConfig;
use crate::error::OutcomeError;
use crate::policy::{Outcome, OutcomePolicy};
use crate::response::{RequestInfo, ResponseBody, ResponseDescriptor};

/// Returns [`Outcome::Discarded`] for a failed response and the body
/// otherwise. Never errors.
#[derive(Debug, Clone, Default)]
pub struct DiscardPolicy;

impl DiscardPolicy {
    pub fn new(_request: &RequestInfo) -> Self {
        Self
    }

    pub fn with_config(_config: &PolicyConfig) -> Self {
        Self
    }
}

impl OutcomePolicy for DiscardPolicy {
    fn name(&self) -> &'static str {
        "discard"
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
                "failed response discarded"
            );
            return Ok(Outcome::Discarded);
        }
        Ok(Outcome::Body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_discarded() {
        let resp = ResponseDescriptor::new().with_status("500");
        let out = DiscardPolicy.classify(&resp, "boom".into()).unwrap();
        assert_eq!(out, Outcome::Discarded);
    }

    #[test]
    fn success_returns_same_bytes() {
        let body = ResponseBody::from(vec![0u8, 1, 2, 0xff]);
        let ptr = body.as_bytes().as_ptr();
        let resp = ResponseDescriptor::new().with_status("200");
        let out = DiscardPolicy.classify(&resp, body).unwrap();
        let returned = out.into_body().unwrap();
        // moved through, not copied
        assert_eq!(returned.as_bytes().as_ptr(), ptr);
        assert_eq!(returned.as_bytes(), &[0u8, 1, 2, 0xff]);
    }

    #[test]
    fn missing_status_passes_body_through() {
        let out = DiscardPolicy
            .classify(&ResponseDescriptor::new(), "x".into())
            .unwrap();
        assert_eq!(out, Outcome::Body("x".into()));
    }
}
