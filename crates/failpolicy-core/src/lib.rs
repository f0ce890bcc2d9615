//! failpolicy-core: outcome policies for HTTP clients.
//!
//! # Overview
//!
//! An HTTP client hands each received response (status + headers) and body to
//! one configured [`OutcomePolicy`], which decides whether the call failed and
//! how the failure reaches the caller:
//!
//! - [`StrictPolicy`]: error on failure or a missing status
//! - [`DiscardPolicy`]: drop the failure, return [`Outcome::Discarded`]
//! - [`DiagnosticPolicy`]: return a [`FailureReport`] value
//! - [`DispatchPolicy`]: error tagged with an [`OutcomeErrorKind`] per status
//!
//! ```
//! use failpolicy_core::{OutcomePolicy, PolicyConfig, PolicyKind, ResponseDescriptor};
//!
//! let policy = PolicyConfig::new(PolicyKind::Dispatch).build();
//! let resp = ResponseDescriptor::new().with_status("404");
//! let err = policy.classify(&resp, "missing".into()).unwrap_err();
//! assert_eq!(err.kind().to_string(), "NotFoundError");
//! ```
//!
//! No I/O happens here: transport, retries and body parsing belong to the
//! client.

pub mod config;
pub mod error;
pub mod policy;
pub mod response;

pub use config::{PolicyConfig, PolicyKind, DEBUG_ENV_VAR};
pub use error::{ConfigError, OutcomeError, OutcomeErrorKind};
pub use policy::{
    DiagnosticPolicy, DiscardPolicy, DispatchPolicy, FailureReport, Outcome, OutcomePolicy,
    StrictPolicy, SUCCESS_STATUS_CODES,
};
pub use response::{RequestInfo, ResponseBody, ResponseDescriptor};
