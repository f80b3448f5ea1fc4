// ABOUTME: Server binary wiring configuration, logging, database, and the HTTP router
// ABOUTME: Starts the LiftLog REST API on the configured port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! # LiftLog Server Binary
//!
//! Starts the workout tracking REST API backed by a local SQLite database.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use liftlog_server::{
    config::environment::ServerConfig,
    database::Database,
    logging,
    routes::{router, AppState},
};

#[derive(Parser)]
#[command(name = "liftlog-server")]
#[command(about = "LiftLog - workout tracking REST API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting LiftLog server");
    info!("{}", config.summary());

    let connection_string = config.database.url.to_connection_string();
    let database = if config.database.auto_migrate {
        Database::new(&connection_string).await?
    } else {
        Database::connect(&connection_string).await?
    };
    info!("Database initialized: {connection_string}");

    let port = config.http_port;
    let state = Arc::new(AppState::new(database, config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on http://0.0.0.0:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
