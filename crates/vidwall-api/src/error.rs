use thiserror::Error;

/// Top-level error type for the `vidwall-api` crate.
///
/// Covers every failure mode across both wire surfaces: the JSON-RPC
/// request path (configuration, transport, device status codes) and the
/// XML configuration-tree path (document structure, element typing,
/// identifier parsing). The CLI maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// No device URL configured.
    #[error("No device URL configured")]
    MissingUrl,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── JSON-RPC ────────────────────────────────────────────────────
    /// The device answered with a non-zero status code.
    #[error("Device rejected {method}: status {code}")]
    Device { method: String, code: i64 },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── XML tree ────────────────────────────────────────────────────
    /// The document is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// A wire element's tag does not name the entity type its
    /// collection is bound to. Protocol-contract violation.
    #[error("Element <{found}> does not match expected entity <{expected}>")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// The `id` attribute is missing or does not parse as an integer.
    #[error("Element <{tag}> has malformed id attribute {value:?}")]
    MalformedIdentifier { tag: String, value: String },

    /// A child element's text does not parse as the field's type.
    #[error("Element <{tag}> field {field}: cannot parse {value:?}")]
    InvalidField {
        tag: String,
        field: &'static str,
        value: String,
    },

    // ── Lookup ──────────────────────────────────────────────────────
    /// The identifier is valid but absent from a populated collection.
    /// A normal negative result, not a protocol failure.
    #[error("Not found: {0}")]
    NotFound(i32),
}

impl Error {
    /// Returns `true` if this is a "not found" result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if this is a transient transport failure worth
    /// retrying. The client itself never retries; callers decide.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the wire violated the protocol contract
    /// (mis-tagged element, unparsable identifier or field).
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. }
                | Self::MalformedIdentifier { .. }
                | Self::InvalidField { .. }
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}
