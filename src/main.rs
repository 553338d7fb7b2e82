#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "edubridge failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let conf = leptos::config::get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;

    let app = routes::app(&config, conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, api = %config.api_base_url, "edubridge listening");
    axum::serve(listener, app).await?;
    Ok(())
}
