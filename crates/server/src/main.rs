mod api;
mod config;
mod dto;
mod poller;
mod state;

use crate::{config::Config, state::AppState};
use clap::Parser;
use metrodash::prelude::Outcome;
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let port = config.port;
    info!("Starting server...");
    info!("Feed source: {:?}", config.location());

    let state = Arc::new(AppState::new(config));

    info!("Loading data...");
    let now = Instant::now();
    match poller::refresh(state.clone()).await {
        Outcome::Replaced | Outcome::Unchanged => info!("Loading data took {:?}", now.elapsed()),
        outcome => warn!("Initial load ended with {outcome:?}, retrying on the next poll"),
    }
    poller::spawn(state.clone());

    let app = api::router(state);
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
