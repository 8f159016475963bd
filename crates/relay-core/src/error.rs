//! Error taxonomy for a relay invocation.
//!
//! Every variant is terminal: nothing is retried, and the binary reports the
//! error once and exits with status 1. The `Display` text names the offending
//! locator; the underlying cause is exposed through `source()` so that
//! `{:#}` on an `anyhow::Error` prints `<locator message>: <cause>`.

use thiserror::Error;

/// Failure of a single relay step.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Local source file could not be read (missing, permission denied, not UTF-8).
    #[error("Error reading {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Remote source could not be fetched.
    #[error("Error fetching {url}")]
    Fetch {
        url: String,
        #[source]
        source: TransferError,
    },

    /// Output file (or stdout) could not be written.
    #[error("Couldn't write {target}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why an HTTP GET did not produce a payload.
#[derive(Debug, Error)]
pub enum TransferError {
    /// libcurl reported an error (DNS, connection refused, timeout, ...).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// Final response status was not 2xx.
    #[error("HTTP {0}")]
    Status(u32),
    /// Response body is not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Body(#[source] std::string::FromUtf8Error),
    /// The blocking transfer task panicked or was cancelled.
    #[error("transfer task failed: {0}")]
    Worker(tokio::task::JoinError),
}
