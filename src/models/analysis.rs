//! Report types produced by the analysis pipeline

use serde::{Deserialize, Serialize};

use super::channel::{ChannelInfo, VideoInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Title,
    Thumbnail,
    Engagement,
    Frequency,
    Growth,
    Seo,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    Good,
    Warning,
    Critical,
}

/// Display order is declaration order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Relative standing of a keyword's average views against the window average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordPerformance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementTrend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightMetric {
    pub current: f64,
    pub benchmark: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInsight {
    pub id: String,
    pub category: InsightCategory,
    pub status: InsightStatus,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<InsightMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub priority: Priority,
    pub category: String,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
    pub expected_impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordItem {
    pub word: String,
    pub count: u32,
    pub avg_views: u64,
    pub performance: KeywordPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitlePattern {
    pub pattern: String,
    pub description: String,
    pub count: u32,
    /// 0-100, 50 means "performs like the rest of the window"
    pub effectiveness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagItem {
    pub tag: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub top_keywords: Vec<KeywordItem>,
    pub title_patterns: Vec<TitlePattern>,
    pub hashtag_usage: Vec<HashtagItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub views_per_video: u64,
    pub subscribers_per_video: u64,
    pub engagement_trend: EngagementTrend,
    pub top_performing_video: Option<VideoInfo>,
    pub average_views: u64,
    pub average_likes: u64,
    pub average_comments: u64,
    /// Percent, one decimal place, signed
    pub views_growth_rate: f64,
}

/// Full report for one channel snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAnalysis {
    pub channel: ChannelInfo,
    pub recent_videos: Vec<VideoInfo>,
    pub health_score: u8,
    pub average_engagement: String,
    pub upload_frequency: String,
    pub insights: Vec<AnalysisInsight>,
    pub performance_metrics: PerformanceMetrics,
    pub keyword_analysis: KeywordAnalysis,
    pub recommendations: Vec<Recommendation>,
}
