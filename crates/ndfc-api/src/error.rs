use thiserror::Error;

/// Top-level error type for the `ndfc-api` crate.
///
/// Covers every failure mode of the client: authentication, transport,
/// non-success API responses, and payload/record validation. The CLI maps
/// these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login was rejected (wrong credentials, bad domain, locked account).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// The controller answered with a non-success status.
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with a body preview for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A record is missing a field the operation needs for addressing.
    #[error("Record is missing required field '{field}'")]
    MissingField { field: &'static str },
}

impl Error {
    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a transient transport failure.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
