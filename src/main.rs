use std::process::ExitCode;

use bubble_trace::config::ServerConfig;
use bubble_trace::server::{AppState, build_router};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();

    tracing_subscriber::registry()
        .with(config.log_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = build_router(AppState::from_config(&config));

    let listener = match tokio::net::TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.bind, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(max_numbers = config.max_numbers, "listening on {}", config.bind);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
