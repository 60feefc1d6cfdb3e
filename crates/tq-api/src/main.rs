//! TaskQuote API: request interpretation and pricing over HTTP.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use tq_api::config::ApiConfig;
use tq_api::routes;
use tq_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tq-api starting");

    let config = ApiConfig::load()?;
    config.validate()?;

    let state = AppState::from_config(&config);
    let app = routes::build_router_with_origins(state, &config.cors_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
