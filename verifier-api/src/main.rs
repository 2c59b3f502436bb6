//! Headline Verifier
//!
//! Checks whether a news headline is reported by trusted outlets, either once
//! from the command line or through an HTTP API.

mod cli;
mod config;
mod presentation;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verifier_services::VerificationService;

use crate::cli::{CheckArgs, Cli, Command, ServeArgs};
use crate::config::AppConfig;
use crate::presentation::{render_report, VerifyResponse};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub verification_service: Arc<VerificationService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    let cli = Cli::parse();

    let default_filter = match cli.command {
        Command::Check(_) => "warn",
        Command::Serve(_) => "info,verifier_api=debug",
    };

    // Logs go to stderr so `check --json` output stays parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let mut config = AppConfig::from_env()?;

    match cli.command {
        Command::Check(args) => {
            if let Some(max_results) = args.max_results {
                config.verification.max_results = max_results.get();
            }
            run_check(&config, &args).await
        }
        Command::Serve(args) => run_serve(&config, &args).await,
    }
}

async fn run_check(config: &AppConfig, args: &CheckArgs) -> anyhow::Result<()> {
    let service = config.build_service()?;
    let report = service.verify(&args.headline()).await?;

    if args.json {
        let response = VerifyResponse::from(report);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

async fn run_serve(config: &AppConfig, args: &ServeArgs) -> anyhow::Result<()> {
    info!("Starting Headline Verifier API");

    let verification_service = Arc::new(config.build_service()?);
    let state = AppState {
        verification_service,
    };

    let app = routes::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
