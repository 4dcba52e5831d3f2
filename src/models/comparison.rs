use serde::{Deserialize, Serialize};

use super::analysis::ChannelAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonTrend {
    Up,
    Down,
    Equal,
}

/// Relative difference of the main channel against a competitor, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparedValue {
    pub ratio: i64,
    pub trend: ComparisonTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetrics {
    pub subscriber_ratio: ComparedValue,
    pub view_ratio: ComparedValue,
    pub video_count_ratio: ComparedValue,
    pub engagement_ratio: ComparedValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_frequency_ratio: Option<ComparedValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelComparison {
    pub competitor_id: String,
    pub competitor_title: String,
    pub competitor_thumbnail_url: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub average_engagement: String,
    pub comparison_metrics: ComparisonMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub main: ChannelAnalysis,
    pub comparisons: Vec<ChannelComparison>,
}
