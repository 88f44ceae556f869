use thiserror::Error;

/// Top-level error type for the `flyover-api` crate.
///
/// Every lookup in the pipeline fails with one of these. The orchestrator
/// hands back the failing step's error untouched, so callers can match on
/// the variant without unwrapping a chain.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// The request could not be completed (DNS, connection refused,
    /// transport-level timeout, truncated body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // ── Remote service ──────────────────────────────────────────────
    /// The service answered with a non-success HTTP status.
    #[error("Service error (HTTP {status}): {body}")]
    Service { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// A success response whose body was not the expected JSON shape.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Configuration ───────────────────────────────────────────────
    /// An endpoint URL that cannot be extended with a request path.
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The local HTTP client could not be constructed. No request was sent.
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),
}

impl Error {
    /// HTTP status of a service error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a usable response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns `true` if reqwest gave up waiting on the remote side.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}
