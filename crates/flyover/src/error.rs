//! CLI error types with miette diagnostics.
//!
//! Maps `flyover_api::Error` variants into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const SERVICE: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Network ──────────────────────────────────────────────────────
    #[error("Could not reach a lookup service")]
    #[diagnostic(
        code(flyover::connection_failed),
        help(
            "Check your network connection and the configured service URLs.\n\
             Run: flyover config show"
        )
    )]
    ConnectionFailed {
        #[source]
        source: flyover_api::Error,
    },

    #[error("A lookup service did not answer in time")]
    #[diagnostic(
        code(flyover::timeout),
        help("Increase the limit with --timeout, or pass --timeout 0 to wait indefinitely.")
    )]
    Timeout {
        #[source]
        source: flyover_api::Error,
    },

    #[error("Could not set up the HTTP client: {reason}")]
    #[diagnostic(code(flyover::client_setup))]
    ClientSetup { reason: String },

    // ── Remote service ───────────────────────────────────────────────
    #[error("Lookup service responded with HTTP {status}")]
    #[diagnostic(code(flyover::service_error), help("Response body: {body}"))]
    Service { status: u16, body: String },

    #[error("Lookup service sent an unexpected response: {message}")]
    #[diagnostic(code(flyover::unexpected_response), help("Response body: {body}"))]
    UnexpectedResponse { message: String, body: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid service URL '{url}': {reason}")]
    #[diagnostic(
        code(flyover::invalid_endpoint),
        help(
            "Service URLs come from --ip-echo-url, --geolocation-url, --iss-pass-url,\n\
             their FLYOVER_* environment variables, or the [endpoints] config table."
        )
    )]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(flyover::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(flyover::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render configuration: {0}")]
    #[diagnostic(code(flyover::toml))]
    Toml(#[from] toml::ser::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Service { .. } => exit_code::SERVICE,
            Self::InvalidEndpoint { .. } | Self::Validation { .. } => exit_code::USAGE,
            Self::Config(_) => exit_code::CONFIG,
            Self::ClientSetup { .. }
            | Self::UnexpectedResponse { .. }
            | Self::Io(_)
            | Self::Toml(_) => exit_code::GENERAL,
        }
    }
}

// ── flyover_api::Error → CliError mapping ────────────────────────────

impl From<flyover_api::Error> for CliError {
    fn from(err: flyover_api::Error) -> Self {
        match err {
            err @ flyover_api::Error::Network(_) => {
                if err.is_timeout() {
                    CliError::Timeout { source: err }
                } else {
                    CliError::ConnectionFailed { source: err }
                }
            }
            flyover_api::Error::Service { status, body } => CliError::Service { status, body },
            flyover_api::Error::Deserialization { message, body } => {
                CliError::UnexpectedResponse { message, body }
            }
            flyover_api::Error::InvalidEndpoint { url, reason } => {
                CliError::InvalidEndpoint { url, reason }
            }
            flyover_api::Error::ClientSetup(reason) => CliError::ClientSetup { reason },
        }
    }
}
