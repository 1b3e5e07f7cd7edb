use clap::Parser;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use trx_tracker::cli::Cli;
use trx_tracker::infrastructure::config::settings::Config;
use trx_tracker::infrastructure::orchestration::runtime::{run_once, run_with_shutdown};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    let mut config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config {}: {e}", cli.config.display());
            std::process::exit(1);
        }
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    config.init_logging();
    info!("trx-tracker starting");

    if cli.once {
        if let Err(e) = run_once(config).await {
            error!(error = %e, "Fatal error");
            std::process::exit(1);
        }
        return;
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, finishing current sweep");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        }
    });

    if let Err(e) = run_with_shutdown(config, shutdown_rx).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("trx-tracker stopped");
}
