//! Outcome policies: decide how a failed HTTP call is surfaced.
//!
//! A client picks one policy per deployment and hands every response to it:
//! ```text
//! Response + Body → [OutcomePolicy::classify] → Ok(Outcome) | Err(OutcomeError)
//! ```
//!
//! | Policy               | On failure                         | Errors? |
//! |----------------------|------------------------------------|---------|
//! | [`StrictPolicy`]     | `OutcomeError` (generic)           | yes     |
//! | [`DiscardPolicy`]    | [`Outcome::Discarded`]             | never   |
//! | [`DiagnosticPolicy`] | [`Outcome::Diagnostic`]            | never   |
//! | [`DispatchPolicy`]   | `OutcomeError` tagged by status    | yes     |

pub mod diagnostic;
pub mod discard;
pub mod dispatch;
pub mod strict;

pub use diagnostic::DiagnosticPolicy;
pub use discard::DiscardPolicy;
pub use dispatch::DispatchPolicy;
pub use strict::StrictPolicy;

use serde::Serialize;

use crate::error::OutcomeError;
use crate::response::{ResponseBody, ResponseDescriptor};

/// Status codes no built-in policy treats as a failure.
pub const SUCCESS_STATUS_CODES: &[&str] = &["200", "201", "204", "304"];

/// Returns `true` if `response` has a status outside `success_codes`.
///
/// A missing status is not a failure here; policies that care check for it
/// themselves.
pub fn is_failure(response: &ResponseDescriptor, success_codes: &[&str]) -> bool {
    match response.status() {
        Some(status) => !success_codes.contains(&status),
        None => false,
    }
}

/// `"<status>: <descriptor>"`, the message of every status failure.
pub(crate) fn failure_message(status: &str, response: &ResponseDescriptor) -> String {
    format!("{status}: {response}")
}

// ─── Outcome ──────────────────────────────────────────────────────────────────

/// The non-error result of classifying a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The response succeeded; the body is handed back as received.
    Body(ResponseBody),
    /// The response failed and the failure was deliberately dropped.
    Discarded,
    /// The response failed; status, headers and body are kept for inspection.
    Diagnostic(FailureReport),
}

impl Outcome {
    /// The body of a successful outcome.
    pub fn into_body(self) -> Option<ResponseBody> {
        match self {
            Self::Body(body) => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the outcome stands for a failed response.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Body(_))
    }
}

/// A failed response returned as a plain value.
///
/// Serialises as `{"response": {...}, "body": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub response: ResponseDescriptor,
    pub body: ResponseBody,
}

// ─── OutcomePolicy ────────────────────────────────────────────────────────────

/// A strategy for turning a received response into a result.
///
/// Implementations hold no per-call state: `classify` is a pure function of
/// its inputs. Construct one instance per request attempt.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Box<dyn OutcomePolicy>`.
pub trait OutcomePolicy: Send + Sync {
    /// Short name of the policy (e.g. `"strict"`).
    fn name(&self) -> &'static str;

    /// Status codes this policy accepts as success.
    fn success_status_codes(&self) -> &[&'static str] {
        SUCCESS_STATUS_CODES
    }

    /// Returns `true` if the response status is present and not a success code.
    fn is_failure(&self, response: &ResponseDescriptor) -> bool {
        is_failure(response, self.success_status_codes())
    }

    /// Classify a response, returning the body, a substitute value, or an error.
    fn classify(
        &self,
        response: &ResponseDescriptor,
        body: ResponseBody,
    ) -> Result<Outcome, OutcomeError>;
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(status: &str) -> ResponseDescriptor {
        ResponseDescriptor::new().with_status(status)
    }

    #[test]
    fn success_codes_are_not_failures() {
        for code in SUCCESS_STATUS_CODES {
            assert!(!is_failure(&with_status(code), SUCCESS_STATUS_CODES), "{code}");
        }
    }

    #[test]
    fn other_codes_are_failures() {
        for code in ["100", "202", "301", "302", "400", "403", "418", "500", "503"] {
            assert!(is_failure(&with_status(code), SUCCESS_STATUS_CODES), "{code}");
        }
    }

    #[test]
    fn missing_status_is_not_a_failure() {
        assert!(!is_failure(&ResponseDescriptor::new(), SUCCESS_STATUS_CODES));
    }

    #[test]
    fn custom_success_set() {
        assert!(!is_failure(&with_status("202"), &["202"]));
        assert!(is_failure(&with_status("200"), &["202"]));
    }

    #[test]
    fn outcome_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Outcome::Discarded).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Outcome::Body("hi".into())).unwrap(),
            r#""hi""#
        );
        let report = Outcome::Diagnostic(FailureReport {
            response: with_status("400"),
            body: "bad".into(),
        });
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"response":{"status":"400"},"body":"bad"}"#
        );
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Discarded.is_failure());
        assert!(!Outcome::Body("x".into()).is_failure());
        assert_eq!(Outcome::Body("x".into()).into_body(), Some("x".into()));
        assert_eq!(Outcome::Discarded.into_body(), None);
    }
}
