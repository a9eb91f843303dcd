use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{DirectoryController, UserDataClient};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod config;
mod controller;
mod ui;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;

#[derive(Parser, Debug)]
#[command(about = "Page through a batch of synthetic users")]
struct Args {
    /// Settings file; defaults to ./directory.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the user data endpoint.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(io::stderr)
        .init();

    let client = UserDataClient::new(settings.client_config()?)
        .context("failed to build user data client")?;
    tracing::info!(endpoint = %client.config().endpoint, "starting user directory");
    let controller = DirectoryController::new(client);

    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(64);
    let (ui_tx, mut ui_rx) = mpsc::channel::<UiEvent>(64);
    ui::input::spawn_stdin_reader(cmd_tx, ui_tx.clone());
    let mut backend = tokio::spawn(backend_bridge::runtime::run(controller, cmd_rx, ui_tx));

    let mut stdout = io::stdout();
    loop {
        tokio::select! {
            Some(event) = ui_rx.recv() => ui::render::write_event(&mut stdout, &event)?,
            joined = &mut backend => {
                joined.context("directory loop panicked")?;
                break;
            }
        }
    }
    while let Ok(event) = ui_rx.try_recv() {
        ui::render::write_event(&mut stdout, &event)?;
    }

    Ok(())
}
