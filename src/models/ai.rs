//! Response shapes returned by the LLM analysis relay

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredFeedback {
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub dominant_colors: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalImpact {
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub detected_emotions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailAnalysis {
    pub overall_score: f64,
    pub text_visibility: ScoredFeedback,
    pub composition: ScoredFeedback,
    pub color_scheme: ColorScheme,
    pub emotional_impact: EmotionalImpact,
    #[serde(default)]
    pub clickability_factors: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOptimization {
    pub score: f64,
    #[serde(default)]
    pub detected_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickTriggers {
    pub score: f64,
    #[serde(default)]
    pub detected: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthAnalysis {
    pub score: f64,
    pub current_length: u32,
    pub optimal_range: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalAppeal {
    pub score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSeoAnalysis {
    pub overall_score: f64,
    pub keyword_optimization: KeywordOptimization,
    pub click_triggers: ClickTriggers,
    pub length_analysis: LengthAnalysis,
    pub emotional_appeal: EmotionalAppeal,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoOptimization {
    pub score: f64,
    #[serde(default)]
    pub keywords_found: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaAnalysis {
    pub score: f64,
    #[serde(default, rename = "detectedCTAs")]
    pub detected_ctas: Vec<String>,
    #[serde(default)]
    pub missing_suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionStructure {
    pub score: f64,
    pub has_timestamps: bool,
    pub has_links: bool,
    pub has_hashtags: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionAnalysis {
    pub overall_score: f64,
    pub seo_optimization: SeoOptimization,
    pub cta_analysis: CtaAnalysis,
    pub structure: DescriptionStructure,
    pub improved_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedPerformance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoThemeSuggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub expected_performance: ExpectedPerformance,
    pub reasoning: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub suggested_tags: Vec<String>,
    pub trend_relevance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub threats: Vec<String>,
}

/// One of the five relayed result shapes, serialized without a tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Thumbnail(ThumbnailAnalysis),
    Title(TitleSeoAnalysis),
    Description(DescriptionAnalysis),
    Themes(Vec<VideoThemeSuggestion>),
    Swot(SwotAnalysis),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub data: AnalysisResult,
}
