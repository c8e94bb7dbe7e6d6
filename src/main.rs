use std::process::ExitCode;

use llens::config::AppConfig;
use llens::{routes, state};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    let addr = (config.bind_addr, config.port);

    let state = match state::AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "root layout init failed");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, ?addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(?addr, storage_key = %state.config.storage_key, "llens listening");
    if let Err(e) = axum::serve(listener, routes::app(state)).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
