//! Channel analytics pipeline
//!
//! Every stage is a pure function of the snapshot it is given. The
//! assembler in this module runs them in dependency order:
//!
//! ```text
//! snapshot ─┬─ keywords ─────────────────┐
//!           └─ performance ── insights ──┼─ recommendations
//!                                  └─────┴─ health score
//! ```

pub mod benchmarks;
pub mod comparison;
pub mod health;
pub mod insights;
pub mod keywords;
pub mod performance;
pub mod recommendations;

use tracing::debug;

use crate::models::{ChannelAnalysis, ChannelSnapshot, VideoInfo};

pub use benchmarks::{ChannelTier, TierBenchmark};
pub use comparison::{compare_all, compare_channels, compare_value, ComparisonError};
pub use health::calculate_health_score;
pub use insights::generate_insights;
pub use keywords::analyze_keywords;
pub use performance::calculate_performance_metrics;
pub use recommendations::generate_recommendations;

/// Run the full pipeline over one snapshot.
///
/// `snapshot.videos` must be ordered most-recent-first.
pub fn analyze_channel(snapshot: ChannelSnapshot) -> ChannelAnalysis {
    let ChannelSnapshot { channel, videos } = snapshot;

    let performance_metrics = calculate_performance_metrics(&channel, &videos);
    let keyword_analysis = analyze_keywords(&videos);
    let insights = generate_insights(&channel, &videos, &performance_metrics);
    let recommendations = generate_recommendations(&insights, &keyword_analysis);
    let health_score = calculate_health_score(&channel, &videos, &insights, &performance_metrics);

    debug!(
        channel_id = %channel.id,
        videos = videos.len(),
        insights = insights.len(),
        recommendations = recommendations.len(),
        health_score,
        "Channel analysis assembled"
    );

    ChannelAnalysis {
        average_engagement: format_average_engagement(&videos),
        upload_frequency: format_upload_frequency(&videos),
        channel,
        recent_videos: videos,
        health_score,
        insights,
        performance_metrics,
        keyword_analysis,
        recommendations,
    }
}

/// `"4.25%"`, or `"N/A"` for an empty window
pub fn format_average_engagement(videos: &[VideoInfo]) -> String {
    if videos.is_empty() {
        return "N/A".to_string();
    }
    format!("{:.2}%", benchmarks::mean_engagement(videos))
}

/// Human-readable posting cadence, or `"N/A"` below two videos
pub fn format_upload_frequency(videos: &[VideoInfo]) -> String {
    let Some(days) = benchmarks::average_days_between(videos) else {
        return "N/A".to_string();
    };

    if days < 1.0 {
        "毎日以上".to_string()
    } else if days < 7.0 {
        format!("約{}日ごと", days.round())
    } else if days < 30.0 {
        format!("約{}週間ごと", (days / 7.0).round())
    } else {
        format!("約{}ヶ月ごと", (days / 30.0).round())
    }
}
