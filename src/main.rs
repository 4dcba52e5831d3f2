use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chanscope::ai::{LlmClient, OpenAiClient};
use chanscope::api;
use chanscope::config::Config;
use chanscope::source::{ChannelSource, YouTubeClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chanscope=info")),
        )
        .init();

    let config = Config::from_env()?;
    info!("Loaded configuration");

    let source: Arc<dyn ChannelSource> = Arc::new(YouTubeClient::from_config(&config.youtube)?);
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::from_config(&config.llm)?);

    info!(
        max_results = config.youtube.max_results,
        text_model = %config.llm.text_model,
        vision_model = %config.llm.vision_model,
        "Initialized upstream clients"
    );
    if config.cors.allowed_origins.is_empty() {
        info!("CORS: accepting any origin");
    } else {
        info!("CORS: allowed origins {:?}", config.cors.allowed_origins);
    }

    let router = api::create_api_router(source, llm, &config.cors);

    let addr = format!("{}:{}", config.api_server.host, config.api_server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 API server listening on http://{}", addr);
    info!("   - API endpoints available at http://{}/api/...", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
