use relay_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args(std::env::args_os()).await {
        tracing::error!("relay failed: {:#}", err);
        eprintln!("relay: {:#}", err);
        std::process::exit(1);
    }
}
