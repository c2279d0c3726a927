//! Vendorsim CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vendorsim::adapters::http::{logistics, telephony};
use vendorsim::cli::{Cli, Commands};
use vendorsim::domain::models::LoggingConfig;
use vendorsim::infrastructure::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    init_tracing(&config.logging);

    match cli.command {
        Commands::Logistics { port } => {
            let mut service = config.logistics;
            if let Some(port) = port {
                service.port = port;
            }
            logistics::serve(service).await
        }
        Commands::Telephony { port } => {
            let mut service = config.telephony;
            if let Some(port) = port {
                service.port = port;
            }
            telephony::serve(service).await
        }
        Commands::All => {
            tokio::try_join!(
                logistics::serve(config.logistics),
                telephony::serve(config.telephony),
            )?;
            Ok(())
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
