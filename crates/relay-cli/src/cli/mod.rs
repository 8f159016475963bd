//! CLI for the relay utility.

use anyhow::Result;
use clap::Parser;
use relay_core::config::{self, RelayConfig};
use relay_core::locator::{SinkLocator, SourceLocator};
use relay_core::relay::Relay;
use std::ffi::OsString;
use std::path::PathBuf;

/// Print a local file or a web page, or save it with `--out`.
#[derive(Debug, Parser)]
#[command(name = "relay")]
#[command(about = "relay: print a file or URL, or copy it to a file", long_about = None)]
pub struct Cli {
    /// Write the content to this file instead of standard output.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// File path, or URL (anything starting with "http").
    #[arg(value_name = "SOURCE", allow_hyphen_values = true)]
    pub source: String,
}

impl Cli {
    pub fn sink(&self) -> SinkLocator {
        SinkLocator::from_option(self.out.as_ref())
    }

    /// Parses `args` (program name first) and runs one relay.
    pub async fn run_from_args<I, T>(args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::parse_from(args);

        // Settings only shape remote fetches; local runs never read the file.
        let cfg = if SourceLocator::classify(&cli.source).is_remote() {
            config::load_or_default()
        } else {
            RelayConfig::default()
        };
        tracing::debug!("config: {:?}", cfg);

        let relay = Relay::from_config(&cfg);
        relay.run(&cli.source, &cli.sink()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
