//! LLM analysis relay
//!
//! Validates an analysis request, renders its prompt, sends it through an
//! [`LlmClient`] and decodes the JSON embedded in the model's reply into
//! one of the typed [`AnalysisResult`] shapes.

pub mod openai;
pub mod prompts;
pub mod request;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::AnalysisResult;

pub use openai::OpenAiClient;
pub use prompts::{build_prompt, ModelKind, Prompt};
pub use request::{AnalysisKind, AnalysisRequest, AnalyzeBody};

#[derive(Debug, Error)]
pub enum AiError {
    #[error("サーバーにOpenAI APIキーが設定されていません")]
    MissingApiKey,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    Parse(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Whether credentials are present. Requests are refused up front when not.
    fn is_configured(&self) -> bool {
        true
    }

    /// Send one prompt and return the raw text of the first reply
    async fn complete(&self, prompt: &Prompt) -> Result<String, AiError>;
}

/// Validate a wire body and run the analysis it describes.
///
/// A missing key is reported before the body is looked at.
pub async fn analyze(
    client: &dyn LlmClient,
    body: AnalyzeBody,
) -> Result<AnalysisResult, AiError> {
    if !client.is_configured() {
        return Err(AiError::MissingApiKey);
    }
    let request = AnalysisRequest::try_from(body)?;
    run_analysis(client, &request).await
}

pub async fn run_analysis(
    client: &dyn LlmClient,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AiError> {
    let kind = request.kind();
    let prompt = build_prompt(request);
    debug!(kind = kind.as_str(), model = ?prompt.model, "Sending analysis prompt");

    let reply = client.complete(&prompt).await?;
    parse_reply(kind, &reply)
}

/// Decode a model reply into the shape expected for `kind`
pub fn parse_reply(kind: AnalysisKind, reply: &str) -> Result<AnalysisResult, AiError> {
    let result = match kind {
        AnalysisKind::Thumbnail => AnalysisResult::Thumbnail(decode_object(kind, reply)?),
        AnalysisKind::Title => AnalysisResult::Title(decode_object(kind, reply)?),
        AnalysisKind::Description => AnalysisResult::Description(decode_object(kind, reply)?),
        AnalysisKind::Swot => AnalysisResult::Swot(decode_object(kind, reply)?),
        AnalysisKind::Themes => {
            let span = extract_json_array(reply);
            AnalysisResult::Themes(decode(kind, span)?)
        }
    };
    Ok(result)
}

fn decode_object<T: DeserializeOwned>(kind: AnalysisKind, reply: &str) -> Result<T, AiError> {
    decode(kind, extract_json_object(reply))
}

fn decode<T: DeserializeOwned>(kind: AnalysisKind, span: Option<&str>) -> Result<T, AiError> {
    let Some(span) = span else {
        warn!(kind = kind.as_str(), "No JSON found in model reply");
        return Err(AiError::Parse(kind.parse_error()));
    };
    serde_json::from_str(span).map_err(|e| {
        warn!(kind = kind.as_str(), error = %e, "Model reply did not match the expected shape");
        AiError::Parse(kind.parse_error())
    })
}

/// Outermost `{...}` span: first `{` through last `}`
pub fn extract_json_object(text: &str) -> Option<&str> {
    outer_span(text, '{', '}')
}

/// Outermost `[...]` span: first `[` through last `]`
pub fn extract_json_array(text: &str) -> Option<&str> {
    outer_span(text, '[', ']')
}

fn outer_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}
