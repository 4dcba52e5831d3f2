pub mod ai;
pub mod analysis;
pub mod channel;
pub mod comparison;

pub use analysis::{
    AnalysisInsight, ChannelAnalysis, EngagementTrend, HashtagItem, InsightCategory,
    InsightMetric, InsightStatus, KeywordAnalysis, KeywordItem, KeywordPerformance,
    PerformanceMetrics, Priority, Recommendation, TitlePattern,
};
pub use channel::{ChannelInfo, ChannelSnapshot, NewVideo, VideoInfo};
pub use comparison::{
    ChannelComparison, ComparedValue, ComparisonMetrics, ComparisonReport, ComparisonTrend,
};
pub use ai::{
    AnalysisResponse, AnalysisResult, DescriptionAnalysis, SwotAnalysis, ThumbnailAnalysis,
    TitleSeoAnalysis, VideoThemeSuggestion,
};
