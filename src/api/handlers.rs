use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::ai::{self, AiError, AnalyzeBody, LlmClient};
use crate::analysis::{analyze_channel, compare_all, ComparisonError};
use crate::models::{AnalysisResponse, ChannelAnalysis, ComparisonReport};
use crate::source::{ChannelSource, SourceError};

pub struct AppState {
    pub source: Arc<dyn ChannelSource>,
    pub llm: Arc<dyn LlmClient>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRequest {
    #[serde(default)]
    pub channel_input: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub channel_input: Option<String>,
    #[serde(default)]
    pub competitor_inputs: Vec<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        let status = match &err {
            SourceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SourceError::ChannelNotFound => StatusCode::NOT_FOUND,
            SourceError::MissingApiKey | SourceError::Upstream(_) | SourceError::Http(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            error!("Channel lookup failed: {}", err);
        } else {
            warn!("Channel lookup rejected: {}", err);
        }
        api_error(status, err.to_string())
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        let status = match &err {
            AiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AiError::MissingApiKey
            | AiError::Upstream(_)
            | AiError::Parse(_)
            | AiError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("AI analysis failed: {}", err);
        }
        api_error(status, err.to_string())
    }
}

impl From<ComparisonError> for ApiError {
    fn from(err: ComparisonError) -> Self {
        warn!("Comparison rejected: {}", err);
        api_error(StatusCode::BAD_REQUEST, err.to_string())
    }
}

async fn fetch_analysis(
    source: &dyn ChannelSource,
    raw_input: &str,
) -> Result<ChannelAnalysis, ApiError> {
    let snapshot = source.snapshot_for(raw_input).await?;
    Ok(analyze_channel(snapshot))
}

fn required_input(input: Option<String>) -> Result<String, ApiError> {
    input.filter(|v| !v.trim().is_empty()).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            "チャンネルIDまたはハンドル名が必要です",
        )
    })
}

/// Analyze one channel
pub async fn analyze_channel_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChannelRequest>,
) -> Result<Json<ChannelAnalysis>, ApiError> {
    let input = required_input(payload.channel_input)?;

    let analysis = fetch_analysis(state.source.as_ref(), &input).await?;
    info!(
        channel_id = %analysis.channel.id,
        health_score = analysis.health_score,
        "Analyzed channel"
    );
    Ok(Json(analysis))
}

/// Analyze a channel and compare it against competitors
pub async fn compare_channels_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<ComparisonReport>, ApiError> {
    let input = required_input(payload.channel_input)?;

    let main = fetch_analysis(state.source.as_ref(), &input).await?;

    let mut competitors = Vec::with_capacity(payload.competitor_inputs.len());
    for competitor in payload
        .competitor_inputs
        .iter()
        .filter(|v| !v.trim().is_empty())
    {
        competitors.push(fetch_analysis(state.source.as_ref(), competitor).await?);
    }

    let comparisons = compare_all(&main, &competitors)?;
    info!(
        channel_id = %main.channel.id,
        competitors = comparisons.len(),
        "Compared channels"
    );

    Ok(Json(ComparisonReport { main, comparisons }))
}

/// Relay an analysis request to the LLM
pub async fn analyze_ai_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeBody>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let data = ai::analyze(state.llm.as_ref(), payload).await?;
    Ok(Json(AnalysisResponse {
        success: true,
        data,
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<SuccessResponse> {
    Json(SuccessResponse {
        message: "OK".to_string(),
    })
}
