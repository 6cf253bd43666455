//! CLI for Postbox
//!
//! Subcommands:
//! - `web`: run the HTTP front-end
//! - `relay`: run the relay server that persists submissions

use clap::Parser;
use postbox::config::load_config;
use postbox::relay::server::start_relay_server;
use postbox::store::SledStore;
use postbox::web::start_web_server;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "postbox")]
enum Command {
    /// Serve the static front-end and accept form submissions
    Web,
    /// Accept relayed submissions and persist them to the document store
    Relay,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    postbox::utils::logging::init("info");

    let cmd = Command::parse();

    match cmd {
        Command::Web => {
            if let Err(e) = run_web().await {
                error!("Web server failed: {}", e);
            }
        }
        Command::Relay => {
            if let Err(e) = run_relay().await {
                error!("Relay server failed: {}", e);
            }
        }
    }
}

async fn run_web() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    tokio::select! {
        res = start_web_server(&config) => {
            res?;
            error!("HTTP server exited unexpectedly.");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }

    Ok(())
}

async fn run_relay() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    // Opening the store is required for startup; failure here is fatal.
    let store = SledStore::open(&config.store.path)?;
    info!(
        "Document store opened at {} with {} stored messages",
        config.store.path,
        store.load_all()?.len()
    );

    tokio::select! {
        res = start_relay_server(config.relay_addr(), Box::new(store)) => {
            res?;
            error!("Relay server exited unexpectedly.");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }

    Ok(())
}
