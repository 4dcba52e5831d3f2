//! Averages, engagement trend and growth rate over the upload window

use crate::models::{ChannelInfo, EngagementTrend, PerformanceMetrics, VideoInfo};

/// Minimum window before recent and older uploads are compared
const TREND_MIN_WINDOW: usize = 6;
const TREND_SAMPLE: usize = 3;
const TREND_UP_FACTOR: f64 = 1.1;
const TREND_DOWN_FACTOR: f64 = 0.9;

/// `videos` must be ordered most-recent-first.
pub fn calculate_performance_metrics(
    channel: &ChannelInfo,
    videos: &[VideoInfo],
) -> PerformanceMetrics {
    let average_views = mean(videos, |v| v.view_count);
    let average_likes = mean(videos, |v| v.like_count);
    let average_comments = mean(videos, |v| v.comment_count);

    let views_growth_rate = match videos.first() {
        Some(latest) if average_views > 0.0 => {
            let growth = (latest.view_count as f64 - average_views) / average_views * 100.0;
            (growth * 10.0).round() / 10.0
        }
        _ => 0.0,
    };

    PerformanceMetrics {
        views_per_video: per_video(channel.view_count, channel.video_count),
        subscribers_per_video: per_video(channel.subscriber_count, channel.video_count),
        engagement_trend: engagement_trend(videos),
        top_performing_video: top_performing_video(videos).cloned(),
        average_views: average_views.round() as u64,
        average_likes: average_likes.round() as u64,
        average_comments: average_comments.round() as u64,
        views_growth_rate,
    }
}

/// Compare the three newest uploads against the three oldest.
///
/// Windows shorter than six report `Stable`; that conflates "flat" with
/// "not enough data".
pub fn engagement_trend(videos: &[VideoInfo]) -> EngagementTrend {
    if videos.len() < TREND_MIN_WINDOW {
        return EngagementTrend::Stable;
    }

    let recent = sample_engagement(&videos[..TREND_SAMPLE]);
    let older = sample_engagement(&videos[videos.len() - TREND_SAMPLE..]);

    if recent > older * TREND_UP_FACTOR {
        EngagementTrend::Up
    } else if recent < older * TREND_DOWN_FACTOR {
        EngagementTrend::Down
    } else {
        EngagementTrend::Stable
    }
}

/// Highest view count in the window; the earliest entry wins ties.
pub fn top_performing_video(videos: &[VideoInfo]) -> Option<&VideoInfo> {
    videos.iter().fold(None, |top: Option<&VideoInfo>, v| match top {
        Some(t) if t.view_count >= v.view_count => Some(t),
        _ => Some(v),
    })
}

fn sample_engagement(sample: &[VideoInfo]) -> f64 {
    sample.iter().map(VideoInfo::engagement_percent).sum::<f64>() / sample.len() as f64
}

fn per_video(total: u64, video_count: u64) -> u64 {
    if video_count == 0 {
        return 0;
    }
    (total as f64 / video_count as f64).round() as u64
}

fn mean(videos: &[VideoInfo], field: impl Fn(&VideoInfo) -> u64) -> f64 {
    if videos.is_empty() {
        return 0.0;
    }
    videos.iter().map(|v| field(v) as f64).sum::<f64>() / videos.len() as f64
}
