//! Policy selection and the verbose-error toggle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::policy::{DiagnosticPolicy, DiscardPolicy, DispatchPolicy, OutcomePolicy, StrictPolicy};

/// Environment variable enabling verbose error rendering when set and non-empty.
pub const DEBUG_ENV_VAR: &str = "FAILPOLICY_DEBUG";

// ─── PolicyKind ───────────────────────────────────────────────────────────────

/// The built-in policy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Error on any failure or a missing status.
    #[default]
    Strict,
    /// Return nothing on failure.
    Discard,
    /// Return a failure report on failure.
    Diagnostic,
    /// Error tagged by status code on failure.
    Dispatch,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Strict,
        PolicyKind::Discard,
        PolicyKind::Diagnostic,
        PolicyKind::Dispatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Discard => "discard",
            Self::Diagnostic => "diagnostic",
            Self::Dispatch => "dispatch",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Strict => "error on any non-success status or a missing status",
            Self::Discard => "return null on failure, never error",
            Self::Diagnostic => "return {response, body} on failure, never error",
            Self::Dispatch => "error tagged by status (400, 401, 404, 500) on failure",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "exception" => Ok(Self::Strict),
            "discard" | "none" => Ok(Self::Discard),
            "diagnostic" | "dict" => Ok(Self::Diagnostic),
            "dispatch" | "multi" => Ok(Self::Dispatch),
            _ => Err(ConfigError::UnknownPolicy { name: s.to_string() }),
        }
    }
}

// ─── PolicyConfig ─────────────────────────────────────────────────────────────

/// Which policy a client uses and how its errors render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Policy variant (default: `strict`).
    #[serde(default)]
    pub policy: PolicyKind,
    /// Include the received body in error messages.
    #[serde(default)]
    pub debug: bool,
}

impl PolicyConfig {
    pub fn new(policy: PolicyKind) -> Self {
        Self { policy, debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Default policy with `debug` read from [`DEBUG_ENV_VAR`].
    pub fn from_env() -> Self {
        let value = std::env::var(DEBUG_ENV_VAR).ok();
        Self::default().with_debug(debug_flag(value.as_deref()))
    }

    /// Parse a JSON config such as `{"policy": "dispatch", "debug": true}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Instantiate the configured policy.
    pub fn build(&self) -> Box<dyn OutcomePolicy> {
        tracing::debug!(policy = %self.policy, debug = self.debug, "building outcome policy");
        match self.policy {
            PolicyKind::Strict => Box::new(StrictPolicy::with_config(self)),
            PolicyKind::Discard => Box::new(DiscardPolicy::with_config(self)),
            PolicyKind::Diagnostic => Box::new(DiagnosticPolicy::with_config(self)),
            PolicyKind::Dispatch => Box::new(DispatchPolicy::with_config(self)),
        }
    }
}

/// Interpret the raw value of [`DEBUG_ENV_VAR`]: any non-empty value enables it.
pub fn debug_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("strict".parse::<PolicyKind>().unwrap(), PolicyKind::Strict);
        assert_eq!("None".parse::<PolicyKind>().unwrap(), PolicyKind::Discard);
        assert_eq!("dict".parse::<PolicyKind>().unwrap(), PolicyKind::Diagnostic);
        assert_eq!(" multi ".parse::<PolicyKind>().unwrap(), PolicyKind::Dispatch);
        assert!("loud".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn debug_flag_values() {
        assert!(!debug_flag(None));
        assert!(!debug_flag(Some("")));
        assert!(debug_flag(Some("1")));
        assert!(debug_flag(Some("0")));
    }

    #[test]
    fn json_defaults() {
        let cfg = PolicyConfig::from_json("{}").unwrap();
        assert_eq!(cfg, PolicyConfig::default());
        assert_eq!(cfg.policy, PolicyKind::Strict);
        assert!(!cfg.debug);
    }

    #[test]
    fn json_full() {
        let cfg = PolicyConfig::from_json(r#"{"policy": "dispatch", "debug": true}"#).unwrap();
        assert_eq!(cfg.policy, PolicyKind::Dispatch);
        assert!(cfg.debug);
    }

    #[test]
    fn json_invalid() {
        assert!(matches!(
            PolicyConfig::from_json(r#"{"policy": "loud"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn build_picks_variant() {
        for kind in PolicyKind::ALL {
            assert_eq!(PolicyConfig::new(kind).build().name(), kind.as_str());
        }
    }
}
