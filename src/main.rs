mod config;
mod dump;
mod structure;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::config::Config;
use crate::structure::{LoadState, StructureClient};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the scene.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "invalid configuration");
        return ExitCode::FAILURE;
    }

    let client = match StructureClient::new(&config.endpoint, config.timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "structure client init failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(endpoint = client.endpoint(), "awaiting structure");
    let state = client.load().await;
    if let LoadState::Failed(reason) = &state {
        tracing::warn!(%reason, "no structure; emitting an empty grid");
    }

    let scene = match dump::build(&config, state.entries()) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!(error = %e, "layout failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(cards = scene.cards.len(), scale = scene.viewport.scale, "scene built");

    let mut out = std::io::stdout().lock();
    let written = serde_json::to_writer_pretty(&mut out, &scene).map_err(std::io::Error::from).and_then(|()| writeln!(out));
    if let Err(e) = written {
        tracing::error!(error = %e, "writing scene failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
