#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is the normal production case.
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "folio failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let server_config = ServerConfig::from_env()?;
    let conf = leptos::config::get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = server_config.apply(conf.leptos_options);

    let app = routes::app(&leptos_options);
    let listener = tokio::net::TcpListener::bind(leptos_options.site_addr).await?;

    tracing::info!(addr = %leptos_options.site_addr, site_root = %leptos_options.site_root, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
