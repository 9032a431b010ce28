//! Handler for the `run` command.

use tokio::signal;
use tracing::{error, info};

use crate::app::App;
use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    // Load and merge configuration
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(interval_ms) = args.interval_ms {
        config.schedule.poll_interval_ms = interval_ms;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    // Initialize logging
    config.init_logging();

    if args.once {
        info!("Run-once mode: executing a single cycle");
        App::run(config, true).await?;
        return Ok(());
    }

    tokio::select! {
        result = App::run(config, false) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("tierpost stopped");
    Ok(())
}
