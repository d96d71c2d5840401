use anyhow::Context;
use log::{info, warn};
use std::sync::Arc;

mod api;
mod config;
mod error;
mod models;
mod services;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env file is fine, real environment variables still apply
    dotenv::dotenv().ok();
    utils::init_tracing();

    let config = config::Config::from_env().context("Failed to load configuration")?;
    if config.pagespeed_api_key.is_none() {
        warn!("PAGESPEED_API_KEY is not set, audit requests will fail until it is configured");
    }
    if config.serpapi_key.is_none() {
        info!("SERPAPI_KEY is not set, keyword and index scoring are disabled");
    }

    let shared_state = Arc::new(
        models::AppState::from_config(&config).context("Failed to build HTTP client")?,
    );
    let app = api::router(shared_state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("🚀 Server running on http://{}", address);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
