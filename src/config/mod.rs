use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_server: ServerConfig,
    pub youtube: YouTubeConfig,
    pub llm: LlmConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// Without a key every channel request answers with a configuration error
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    /// Size of the recent-upload window, 1..=50
    pub max_results: u32,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub api_url: String,
    pub text_model: String,
    pub vision_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Empty means any origin is accepted
    pub allowed_origins: Vec<String>,
}

impl YouTubeConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";
    pub const DEFAULT_MAX_RESULTS: u32 = 10;
    pub const MAX_RESULTS_LIMIT: u32 = 50;
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            max_results: Self::DEFAULT_MAX_RESULTS,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl LlmConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.openai.com/v1/chat/completions";
    pub const DEFAULT_TEXT_MODEL: &'static str = "gpt-4o-mini";
    pub const DEFAULT_VISION_MODEL: &'static str = "gpt-4o";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 2000;
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: Self::DEFAULT_API_URL.to_string(),
            text_model: Self::DEFAULT_TEXT_MODEL.to_string(),
            vision_model: Self::DEFAULT_VISION_MODEL.to_string(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Split a comma-separated origin list, trimming blanks and trailing slashes
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim().trim_end_matches('/'))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_host = std::env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = std::env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("API_PORT must be a valid port number")?;

        let timeout = Duration::from_secs(
            std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        );

        let youtube_api_key = non_empty_env("YOUTUBE_API_KEY");
        if youtube_api_key.is_none() {
            tracing::warn!("YOUTUBE_API_KEY is not set; channel analysis requests will fail");
        }

        let max_results = match std::env::var("YOUTUBE_MAX_RESULTS") {
            Ok(v) => v
                .parse::<u32>()
                .context("YOUTUBE_MAX_RESULTS must be a positive integer")?,
            Err(_) => YouTubeConfig::DEFAULT_MAX_RESULTS,
        }
        .clamp(1, YouTubeConfig::MAX_RESULTS_LIMIT);

        let llm_api_key = non_empty_env("OPENAI_API_KEY");
        if llm_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; AI analysis requests will fail");
        }

        let temperature = match std::env::var("OPENAI_TEMPERATURE") {
            Ok(v) => v
                .parse::<f32>()
                .context("OPENAI_TEMPERATURE must be a number")?,
            Err(_) => LlmConfig::DEFAULT_TEMPERATURE,
        };

        let max_tokens = match std::env::var("OPENAI_MAX_TOKENS") {
            Ok(v) => v
                .parse::<u32>()
                .context("OPENAI_MAX_TOKENS must be a positive integer")?,
            Err(_) => LlmConfig::DEFAULT_MAX_TOKENS,
        };

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|v| parse_allowed_origins(&v))
            .unwrap_or_default();

        Ok(Config {
            api_server: ServerConfig {
                host: api_host,
                port: api_port,
            },
            youtube: YouTubeConfig {
                api_key: youtube_api_key,
                base_url: std::env::var("YOUTUBE_API_BASE")
                    .unwrap_or_else(|_| YouTubeConfig::DEFAULT_BASE_URL.to_string()),
                max_results,
                timeout,
            },
            llm: LlmConfig {
                api_key: llm_api_key,
                api_url: std::env::var("OPENAI_API_URL")
                    .unwrap_or_else(|_| LlmConfig::DEFAULT_API_URL.to_string()),
                text_model: std::env::var("OPENAI_TEXT_MODEL")
                    .unwrap_or_else(|_| LlmConfig::DEFAULT_TEXT_MODEL.to_string()),
                vision_model: std::env::var("OPENAI_VISION_MODEL")
                    .unwrap_or_else(|_| LlmConfig::DEFAULT_VISION_MODEL.to_string()),
                temperature,
                max_tokens,
                timeout,
            },
            cors: CorsConfig { allowed_origins },
        })
    }
}
