// Transport configuration for building reqwest::Client instances.
//
// The device speaks plain HTTP on its JSON-RPC port, so the only
// tunable is the per-request timeout.

use std::time::Duration;

use crate::error::Error;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("vidwall/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}
