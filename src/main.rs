// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// CLI entry point: parse arguments, load config, wire up the coordinator,
// and install a shutdown handler. Exit code 0 on a clean shutdown, 1 on
// any startup failure.

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use clap::Parser;
use colored::Colorize;
use tracing::{error, info};

use clc_miner::{rewards, Coordinator, Config};

#[derive(Parser, Debug)]
#[command(name = "clc-miner", about = "secp256k1 proof-of-work miner for the CLC challenge pool")]
struct Cli {
    /// Path to the miner's config file.
    #[arg(short, long, default_value = "clcminer.conf")]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config);

    if let Err(err) = rewards::ensure_rewards_dir(&config) {
        error!("failed to create rewards directory: {}", err);
        std::process::exit(1);
    }

    println!("{}", "clc-miner starting".bold().blue());
    if config.telemetry_enabled() {
        info!(server = %config.report_server, "reporting to configured endpoint");
    }

    let coordinator = Coordinator::new(config);
    let shutdown = coordinator.shutdown_handle();

    if let Err(err) = ctrlc::set_handler(move || {
        info!("shutdown requested");
        shutdown.store(true, Ordering::Relaxed);
    }) {
        error!("failed to install shutdown handler: {}", err);
        std::process::exit(1);
    }

    match coordinator.run() {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("miner exited with error: {}", err);
            std::process::exit(1);
        }
    }
}
