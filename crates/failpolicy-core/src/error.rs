//! Error types: the classified HTTP failure and configuration errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::response::ResponseBody;

// ─── OutcomeErrorKind ─────────────────────────────────────────────────────────

/// Tag distinguishing status-specific failures from the generic one.
///
/// Every specific kind is a refinement of [`OutcomeErrorKind::Generic`]: the
/// error carries the same message and body regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeErrorKind {
    /// Any failure without a more specific kind.
    Generic,
    /// `400 Bad Request`.
    BadRequest,
    /// `401 Unauthorized`.
    Unauthorized,
    /// `404 Not Found`.
    NotFound,
    /// `500 Internal Server Error`.
    InternalServerError,
}

impl OutcomeErrorKind {
    /// The specific kind for a status code, or `Generic`.
    pub fn from_status(status: &str) -> Self {
        match status {
            "400" => Self::BadRequest,
            "401" => Self::Unauthorized,
            "404" => Self::NotFound,
            "500" => Self::InternalServerError,
            _ => Self::Generic,
        }
    }

    /// Returns `true` if this is a status-specific refinement.
    pub fn is_specific(&self) -> bool {
        !matches!(self, Self::Generic)
    }
}

impl fmt::Display for OutcomeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "OutcomeError"),
            Self::BadRequest => write!(f, "BadRequestError"),
            Self::Unauthorized => write!(f, "UnauthorizedError"),
            Self::NotFound => write!(f, "NotFoundError"),
            Self::InternalServerError => write!(f, "InternalServerErrorError"),
        }
    }
}

// ─── OutcomeError ─────────────────────────────────────────────────────────────

/// A failed HTTP call, as surfaced by a raising policy.
///
/// `Display` renders only the message unless `debug` was set when the error
/// was built, in which case the received body follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeError {
    kind: OutcomeErrorKind,
    message: String,
    body: Option<ResponseBody>,
    debug: bool,
}

impl OutcomeError {
    /// A generic error.
    pub fn new(message: impl Into<String>, body: Option<ResponseBody>, debug: bool) -> Self {
        Self::with_kind(OutcomeErrorKind::Generic, message, body, debug)
    }

    pub fn with_kind(
        kind: OutcomeErrorKind,
        message: impl Into<String>,
        body: Option<ResponseBody>,
        debug: bool,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            body,
            debug,
        }
    }

    pub fn kind(&self) -> OutcomeErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending body, when one was attached.
    pub fn body(&self) -> Option<&ResponseBody> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<ResponseBody> {
        self.body
    }

    /// Whether `Display` includes the body.
    pub fn is_verbose(&self) -> bool {
        self.debug
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.debug {
            return f.write_str(&self.message);
        }
        write!(f, "{}\nReceived body:\n", self.message)?;
        match &self.body {
            Some(body) => write!(f, "{body}"),
            None => f.write_str("None"),
        }
    }
}

impl std::error::Error for OutcomeError {}

// ─── ConfigError ──────────────────────────────────────────────────────────────

/// Errors raised while selecting or configuring a policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown policy: {name} (expected one of strict, discard, diagnostic, dispatch)")]
    UnknownPolicy { name: String },

    #[error("Invalid policy config: {0}")]
    Json(#[from] serde_json::Error),
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terse_rendering_is_message_only() {
        let e = OutcomeError::new("404: {}", Some("not here".into()), false);
        assert_eq!(e.to_string(), "404: {}");
    }

    #[test]
    fn verbose_rendering_includes_body() {
        let e = OutcomeError::new("404: {}", Some("not here".into()), true);
        let s = e.to_string();
        assert!(s.contains("404: {}"));
        assert!(s.contains("not here"));
        assert_eq!(s, "404: {}\nReceived body:\nnot here");
    }

    #[test]
    fn verbose_rendering_without_body() {
        let e = OutcomeError::new("No status code in response", None, true);
        assert_eq!(e.to_string(), "No status code in response\nReceived body:\nNone");
    }

    #[test]
    fn kind_from_status() {
        assert_eq!(OutcomeErrorKind::from_status("400"), OutcomeErrorKind::BadRequest);
        assert_eq!(OutcomeErrorKind::from_status("401"), OutcomeErrorKind::Unauthorized);
        assert_eq!(OutcomeErrorKind::from_status("404"), OutcomeErrorKind::NotFound);
        assert_eq!(
            OutcomeErrorKind::from_status("500"),
            OutcomeErrorKind::InternalServerError
        );
        assert_eq!(OutcomeErrorKind::from_status("503"), OutcomeErrorKind::Generic);
    }

    #[test]
    fn specific_kinds() {
        assert!(OutcomeErrorKind::NotFound.is_specific());
        assert!(!OutcomeErrorKind::Generic.is_specific());
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(OutcomeErrorKind::Unauthorized.to_string(), "UnauthorizedError");
        assert_eq!(
            OutcomeErrorKind::InternalServerError.to_string(),
            "InternalServerErrorError"
        );
    }

    #[test]
    fn unknown_policy_message() {
        let e = ConfigError::UnknownPolicy { name: "loud".into() };
        assert!(e.to_string().starts_with("Unknown policy: loud"));
    }
}
