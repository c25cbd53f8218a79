//! CLI error types with miette diagnostics.
//!
//! Maps `vidwall_api::Error` variants into user-facing errors with
//! actionable help text and distinct exit codes.

use miette::Diagnostic;
use thiserror::Error;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("No device URL given")]
    #[diagnostic(
        code(vidwall::no_url),
        help("Pass --url http://IP:9999/ or set VIDWALL_URL.")
    )]
    NoUrl,

    #[error("Invalid device URL {url:?}")]
    #[diagnostic(code(vidwall::bad_url))]
    BadUrl { url: String },

    #[error("Could not reach device: {0}")]
    #[diagnostic(
        code(vidwall::connection),
        help("Check that the device is powered on and its JSON-RPC port is reachable.")
    )]
    Connection(#[source] vidwall_api::Error),

    #[error(transparent)]
    #[diagnostic(code(vidwall::api))]
    Api(vidwall_api::Error),
}

impl From<vidwall_api::Error> for CliError {
    fn from(err: vidwall_api::Error) -> Self {
        if err.is_transient() || matches!(err, vidwall_api::Error::Transport(_)) {
            Self::Connection(err)
        } else {
            Self::Api(err)
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoUrl | Self::BadUrl { .. } => exit_code::USAGE,
            Self::Connection(vidwall_api::Error::Timeout { .. }) => exit_code::TIMEOUT,
            Self::Connection(_) => exit_code::CONNECTION,
            Self::Api(err) if err.is_not_found() => exit_code::NOT_FOUND,
            Self::Api(_) => exit_code::GENERAL,
        }
    }
}
