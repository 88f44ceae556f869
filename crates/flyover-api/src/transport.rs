// Shared transport configuration for building the reqwest::Client.
//
// No timeout by default: a hung remote stalls the chain until the caller
// gives up. Consumers that want a bound set one here.

use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("flyover/", env!("CARGO_PKG_VERSION"));

/// Transport settings shared by every lookup.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// Config with a per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Build a `reqwest::Client` from this config.
    ///
    /// A builder failure is local and reported as [`Error::ClientSetup`],
    /// never as a network error.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| Error::ClientSetup(format!("failed to build HTTP client: {e}")))
    }
}
