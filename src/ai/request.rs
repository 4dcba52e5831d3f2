use serde::Deserialize;

use super::AiError;

pub const DEFAULT_NICHE: &str = "一般";

/// The five supported analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Thumbnail,
    Title,
    Description,
    Themes,
    Swot,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Thumbnail => "thumbnail",
            AnalysisKind::Title => "title",
            AnalysisKind::Description => "description",
            AnalysisKind::Themes => "themes",
            AnalysisKind::Swot => "swot",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "thumbnail" => Some(AnalysisKind::Thumbnail),
            "title" => Some(AnalysisKind::Title),
            "description" => Some(AnalysisKind::Description),
            "themes" => Some(AnalysisKind::Themes),
            "swot" => Some(AnalysisKind::Swot),
            _ => None,
        }
    }

    pub(crate) fn parse_error(&self) -> &'static str {
        match self {
            AnalysisKind::Thumbnail => "Failed to parse thumbnail analysis",
            AnalysisKind::Title => "Failed to parse title SEO analysis",
            AnalysisKind::Description => "Failed to parse description analysis",
            AnalysisKind::Themes => "Failed to parse video theme suggestions",
            AnalysisKind::Swot => "Failed to parse SWOT analysis",
        }
    }
}

/// Request body of `POST /api/ai/analyze`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBody {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub thumbnail_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_title: Option<String>,
    pub channel_description: Option<String>,
    pub channel_niche: Option<String>,
    pub recent_titles: Option<Vec<String>>,
    pub top_keywords: Option<Vec<String>>,
    pub avg_views: Option<f64>,
}

/// A validated analysis request
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Thumbnail {
        thumbnail_url: String,
    },
    Title {
        title: String,
        channel_niche: String,
    },
    Description {
        description: String,
        title: String,
    },
    Themes {
        channel_title: String,
        recent_titles: Vec<String>,
        top_keywords: Vec<String>,
        avg_views: f64,
    },
    Swot {
        channel_title: String,
        channel_description: String,
        recent_titles: Vec<String>,
    },
}

impl AnalysisRequest {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisRequest::Thumbnail { .. } => AnalysisKind::Thumbnail,
            AnalysisRequest::Title { .. } => AnalysisKind::Title,
            AnalysisRequest::Description { .. } => AnalysisKind::Description,
            AnalysisRequest::Themes { .. } => AnalysisKind::Themes,
            AnalysisRequest::Swot { .. } => AnalysisKind::Swot,
        }
    }
}

// Empty strings count as absent
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, message: &str) -> Result<String, AiError> {
    present(value).ok_or_else(|| AiError::InvalidRequest(message.to_string()))
}

impl TryFrom<AnalyzeBody> for AnalysisRequest {
    type Error = AiError;

    fn try_from(body: AnalyzeBody) -> Result<Self, Self::Error> {
        let kind = body
            .kind
            .as_deref()
            .and_then(AnalysisKind::parse)
            .ok_or_else(|| AiError::InvalidRequest("無効な分析タイプです".to_string()))?;

        let request = match kind {
            AnalysisKind::Thumbnail => AnalysisRequest::Thumbnail {
                thumbnail_url: required(body.thumbnail_url, "サムネイルURLが必要です")?,
            },
            AnalysisKind::Title => AnalysisRequest::Title {
                title: required(body.title, "タイトルが必要です")?,
                channel_niche: present(body.channel_niche)
                    .unwrap_or_else(|| DEFAULT_NICHE.to_string()),
            },
            AnalysisKind::Description => {
                const MESSAGE: &str = "説明文とタイトルが必要です";
                AnalysisRequest::Description {
                    description: required(body.description, MESSAGE)?,
                    title: required(body.title, MESSAGE)?,
                }
            }
            AnalysisKind::Themes => {
                const MESSAGE: &str = "チャンネル情報が必要です";
                let channel_title = required(body.channel_title, MESSAGE)?;
                let recent_titles = body
                    .recent_titles
                    .ok_or_else(|| AiError::InvalidRequest(MESSAGE.to_string()))?;
                AnalysisRequest::Themes {
                    channel_title,
                    recent_titles,
                    top_keywords: body.top_keywords.unwrap_or_default(),
                    avg_views: body.avg_views.unwrap_or(0.0),
                }
            }
            AnalysisKind::Swot => AnalysisRequest::Swot {
                channel_title: required(body.channel_title, "チャンネル情報が必要です")?,
                channel_description: body.channel_description.unwrap_or_default(),
                recent_titles: body.recent_titles.unwrap_or_default(),
            },
        };

        Ok(request)
    }
}
