//! Source resolution: read a local file or fetch a URL into a [`Payload`].

use crate::error::{RelayError, TransferError};
use crate::fetch::Fetcher;
use crate::locator::SourceLocator;
use crate::payload::Payload;
use std::path::Path;
use std::sync::Arc;

/// Resolves `locator` into its full text. Local paths never reach `fetcher`.
pub async fn resolve_source(
    locator: &SourceLocator,
    fetcher: &Arc<dyn Fetcher>,
) -> Result<Payload, RelayError> {
    match locator {
        SourceLocator::LocalPath(path) => read_local(path).await,
        SourceLocator::RemoteUrl(url) => fetch_remote(url, Arc::clone(fetcher)).await,
    }
}

/// Reads the whole file as UTF-8.
pub async fn read_local(path: &Path) -> Result<Payload, RelayError> {
    tracing::debug!("reading {}", path.display());
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RelayError::Read {
            path: path.display().to_string(),
            source,
        })?;
    tracing::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(Payload::new(text))
}

/// Performs one GET on the blocking pool.
pub async fn fetch_remote(url: &str, fetcher: Arc<dyn Fetcher>) -> Result<Payload, RelayError> {
    tracing::debug!("fetching {}", url);
    let owned = url.to_string();
    let result = tokio::task::spawn_blocking(move || fetcher.get(&owned))
        .await
        .map_err(TransferError::Worker)
        .and_then(|r| r);
    result.map_err(|source| RelayError::Fetch {
        url: url.to_string(),
        source,
    })
}
