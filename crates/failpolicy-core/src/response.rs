//! Response and request views handed to an outcome policy.
//!
//! The owning HTTP client builds these; policies only read them.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

// ─── ResponseDescriptor ───────────────────────────────────────────────────────

/// Key of the status code in the flat form; never used as a header name.
const STATUS_KEY: &str = "status";

/// Status line and headers of a completed HTTP response, without the body.
///
/// Header names are stored lower-cased. The status is kept as text and may be
/// absent. Serialises as one flat object with `status` next to the headers:
///
/// ```json
/// {"content-type": "application/json", "status": "404"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor")]
pub struct ResponseDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(flatten)]
    headers: BTreeMap<String, String>,
}

impl ResponseDescriptor {
    /// An empty descriptor: no status, no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status code (e.g. `"404"` or `404`).
    pub fn with_status(mut self, status: impl ToString) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Add a header. The name is lower-cased.
    ///
    /// A header named `status` is dropped: that key holds the status code in
    /// the flat form and must not shadow it.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        let name = name.to_ascii_lowercase();
        if name == STATUS_KEY {
            tracing::debug!("dropping header named `status`");
            return self;
        }
        self.headers.insert(name, value.into());
        self
    }

    /// The raw status code, if the response carried one.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The status code parsed as a number. `None` if absent or non-numeric.
    pub fn status_code(&self) -> Option<u16> {
        self.status.as_deref()?.trim().parse().ok()
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// All headers, keyed by lower-cased name.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

impl fmt::Display for ResponseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Wire shape accepted on deserialisation: status as text or number, header
/// names in any case.
#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    status: Option<RawStatus>,
    #[serde(flatten)]
    headers: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Text(String),
    Code(u16),
}

impl From<RawDescriptor> for ResponseDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        Self {
            status: raw.status.map(|s| match s {
                RawStatus::Text(t) => t,
                RawStatus::Code(c) => c.to_string(),
            }),
            headers: raw
                .headers
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .filter(|(k, _)| k != STATUS_KEY)
                .collect(),
        }
    }
}

#[cfg(feature = "reqwest")]
impl ResponseDescriptor {
    /// Build a descriptor from a `reqwest` status and header map.
    ///
    /// Header values that are not visible ASCII are skipped.
    pub fn from_http_parts(
        status: reqwest::StatusCode,
        headers: &reqwest::header::HeaderMap,
    ) -> Self {
        let mut descriptor = Self::new().with_status(status.as_u16());
        for (name, value) in headers {
            if let Ok(value) = value.to_str() {
                descriptor = descriptor.with_header(name.as_str(), value);
            }
        }
        descriptor
    }
}

#[cfg(feature = "reqwest")]
impl From<&reqwest::Response> for ResponseDescriptor {
    fn from(resp: &reqwest::Response) -> Self {
        Self::from_http_parts(resp.status(), resp.headers())
    }
}

// ─── ResponseBody ─────────────────────────────────────────────────────────────

/// Opaque response payload. Policies move it through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct ResponseBody(Vec<u8>);

impl ResponseBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The payload as text, replacing invalid UTF-8 sequences.
    pub fn to_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl From<Vec<u8>> for ResponseBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<String> for ResponseBody {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for ResponseBody {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for ResponseBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}

// ─── RequestInfo ──────────────────────────────────────────────────────────────

/// The request a policy is constructed for.
///
/// Policies accept it so every variant shares one constructor shape; none of
/// the built-in variants keep any of it.
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    pub url: String,
    pub method: String,
    pub body: Option<Vec<u8>>,
    pub headers: BTreeMap<String, String>,
}

impl RequestInfo {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            ..Default::default()
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
