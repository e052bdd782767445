//! nomad_exporter
//!
//! Polls one Nomad health endpoint on every Prometheus scrape and republishes
//! the payload as `nomad_*` gauges.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use nomad_exporter::{app_state::AppState, cli::Cli, router};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg = match cli.into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    let listen = match cfg.web.listen_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "bad listen address");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting nomad_exporter");
    tracing::info!(
        nomad = %cfg.nomad.address,
        region = cfg.nomad.region.as_deref().unwrap_or(""),
        "scrape target"
    );

    // The exporter holds a blocking HTTP client.
    let state = match tokio::task::spawn_blocking(move || AppState::new(cfg)).await {
        Ok(Ok(state)) => state,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "exporter init failed");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::error!(error = %e, "exporter init task failed");
            return ExitCode::FAILURE;
        }
    };
    let telemetry_path = state.cfg().web.telemetry_path.clone();
    let app = router::build_router(state);

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%listen, path = %telemetry_path, "listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
