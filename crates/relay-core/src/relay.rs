//! The relay flow: classify the source, resolve it, deliver the payload.
//!
//! Strictly sequential. Delivery starts only after the source resolved, so a
//! failed read or fetch never creates or touches the output file.

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::fetch::{CurlFetcher, Fetcher};
use crate::locator::{SinkLocator, SourceLocator};
use crate::payload::Payload;
use crate::{sink, source};
use std::sync::Arc;

/// Content relay bound to an HTTP fetcher.
#[derive(Clone)]
pub struct Relay {
    fetcher: Arc<dyn Fetcher>,
}

impl Relay {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Relay backed by libcurl with the given settings.
    pub fn from_config(cfg: &RelayConfig) -> Self {
        Self::new(Arc::new(CurlFetcher::new(cfg)))
    }

    pub async fn resolve_source(&self, locator: &SourceLocator) -> Result<Payload, RelayError> {
        source::resolve_source(locator, &self.fetcher).await
    }

    pub async fn deliver(&self, payload: &Payload, sink: &SinkLocator) -> Result<(), RelayError> {
        sink::deliver(payload, sink).await
    }

    /// Runs one invocation: `raw_source` is classified by its `http` prefix.
    pub async fn run(&self, raw_source: &str, sink: &SinkLocator) -> Result<(), RelayError> {
        let locator = SourceLocator::classify(raw_source);
        tracing::info!(
            "relay source={} remote={} sink={}",
            locator,
            locator.is_remote(),
            sink
        );

        let payload = self.resolve_source(&locator).await.inspect_err(|e| {
            tracing::debug!("{}: {}", e, error_cause(e));
        })?;
        tracing::debug!("resolved {} bytes from {}", payload.byte_len(), locator);

        self.deliver(&payload, sink).await.inspect_err(|e| {
            tracing::debug!("{}: {}", e, error_cause(e));
        })?;
        tracing::info!("delivered {} bytes to {}", payload.byte_len(), sink);
        Ok(())
    }
}

fn error_cause(e: &RelayError) -> String {
    std::error::Error::source(e)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
