//! Delivery of a payload to standard output or a file.

use crate::error::RelayError;
use crate::locator::SinkLocator;
use crate::payload::Payload;
use std::io::{self, Write};
use std::path::Path;

/// Delivers `payload` to `sink`.
///
/// Stdout gets the text followed by a newline, like a console print. A file
/// sink is created or truncated and receives the text as UTF-8, unchanged.
pub async fn deliver(payload: &Payload, sink: &SinkLocator) -> Result<(), RelayError> {
    match sink {
        SinkLocator::Stdout => {
            let mut out = io::stdout().lock();
            print_to(payload, &mut out)
        }
        SinkLocator::File(path) => write_file(payload, path).await,
    }
}

/// Writes `payload` plus a trailing newline to `out` and flushes.
pub fn print_to<W: Write>(payload: &Payload, out: &mut W) -> Result<(), RelayError> {
    writeln!(out, "{}", payload)
        .and_then(|()| out.flush())
        .map_err(|source| RelayError::Write {
            target: SinkLocator::Stdout.to_string(),
            source,
        })
}

/// Creates or overwrites `path` with the payload text.
pub async fn write_file(payload: &Payload, path: &Path) -> Result<(), RelayError> {
    tokio::fs::write(path, payload.as_str().as_bytes())
        .await
        .map_err(|source| RelayError::Write {
            target: path.display().to_string(),
            source,
        })?;
    tracing::debug!("wrote {} bytes to {}", payload.byte_len(), path.display());
    Ok(())
}
