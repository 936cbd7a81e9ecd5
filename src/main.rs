use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trustcheck::{AppState, Config, GoogleSearchClient, ReputationEngine, router};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let engine = match config.require_credentials() {
        Ok((api_key, cx_id)) => {
            info!("search provider credentials configured");
            let client = GoogleSearchClient::new(api_key, cx_id)
                .context("failed to build search client")?;
            Some(Arc::new(ReputationEngine::new(client, &config)))
        }
        Err(err) => {
            // The server still comes up so deploys without credentials fail
            // loudly per request instead of crash-looping.
            warn!(error = %err, "starting without search provider credentials");
            None
        }
    };

    let app = router(AppState::new(engine));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "trustcheck listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
