//! HTTP GET of a remote source.
//!
//! Uses the curl crate (libcurl) for a single plain GET: no custom headers, no
//! retries, body buffered fully in memory. The final status must be 2xx and the
//! body must be UTF-8.

use crate::config::RelayConfig;
use crate::error::TransferError;
use crate::payload::Payload;
use std::time::Duration;

/// Issues one GET per call and returns the body as text.
///
/// Blocking; the relay calls it from tokio's blocking pool.
pub trait Fetcher: Send + Sync {
    fn get(&self, url: &str) -> Result<Payload, TransferError>;
}

/// libcurl-backed fetcher configured from [`RelayConfig`].
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Option<Duration>,
    follow_redirects: bool,
    max_redirects: u32,
}

impl CurlFetcher {
    pub fn new(cfg: &RelayConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            follow_redirects: cfg.follow_redirects,
            max_redirects: cfg.max_redirects,
        }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(&RelayConfig::default())
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<Payload, TransferError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(self.follow_redirects)?;
        if self.follow_redirects {
            easy.max_redirections(self.max_redirects)?;
        }
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransferError::Status(code));
        }

        tracing::debug!("GET {} returned HTTP {} ({} bytes)", url, code, body.len());
        Payload::from_utf8(body).map_err(TransferError::Body)
    }
}
