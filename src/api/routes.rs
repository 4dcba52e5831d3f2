use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::ai::LlmClient;
use crate::config::CorsConfig;
use crate::source::ChannelSource;

use super::handlers::{
    analyze_ai_handler, analyze_channel_handler, compare_channels_handler, health_check, AppState,
};

pub fn create_api_router(
    source: Arc<dyn ChannelSource>,
    llm: Arc<dyn LlmClient>,
    cors: &CorsConfig,
) -> Router {
    let state = Arc::new(AppState { source, llm });

    let api_routes = Router::new()
        .route("/youtube/channel", post(analyze_channel_handler))
        .route("/youtube/compare", post(compare_channels_handler))
        .route("/ai/analyze", post(analyze_ai_handler))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(cors_layer(cors))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(86400))
}
