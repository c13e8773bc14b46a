use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sentilog::{config::Config, dataset::DatasetWriter, oracle::LexiconOracle, repl::Repl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        dataset = %config.dataset.path.display(),
        "Sentilog starting..."
    );

    let oracle = LexiconOracle::new();
    let writer = DatasetWriter::new(config.dataset.path.clone());
    let mut repl = Repl::new(oracle, writer);

    // Oracle failures propagate here and terminate the process;
    // dataset failures were already reported inside the loop.
    if let Err(e) = repl.run().await {
        error!(error = %e, "Session aborted");
        return Err(e.into());
    }

    info!("Session complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    // Logs go to stderr so operator-facing output on stdout stays clean.
    match config.logging.format {
        sentilog::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        sentilog::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
