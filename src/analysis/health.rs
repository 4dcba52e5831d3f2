//! Composite 0-100 channel health score

use crate::analysis::benchmarks::{average_days_between, mean_engagement, TierBenchmark};
use crate::models::{
    AnalysisInsight, ChannelInfo, EngagementTrend, InsightStatus, PerformanceMetrics, VideoInfo,
};

const BASE_SCORE: i32 = 50;

/// (minimum engagement ratio, points), checked top-down
const ENGAGEMENT_STEPS: [(f64, i32); 3] = [(1.3, 15), (1.0, 10), (0.7, 5)];
const ENGAGEMENT_FLOOR_POINTS: i32 = -5;

/// (maximum average days between uploads, points), checked top-down
const CADENCE_STEPS: [(f64, i32); 2] = [(3.0, 10), (7.0, 5)];
const CADENCE_SLOW_DAYS: f64 = 21.0;
const CADENCE_SLOW_POINTS: i32 = -5;

pub fn calculate_health_score(
    channel: &ChannelInfo,
    videos: &[VideoInfo],
    insights: &[AnalysisInsight],
    metrics: &PerformanceMetrics,
) -> u8 {
    let benchmark = TierBenchmark::for_subscribers(channel.subscriber_count);
    let ratio = mean_engagement(videos) / benchmark.avg_engagement;

    let score = BASE_SCORE
        + engagement_points(ratio)
        + trend_points(metrics.engagement_trend)
        + insight_points(insights)
        + average_days_between(videos).map_or(0, cadence_points);

    score.clamp(0, 100) as u8
}

fn engagement_points(ratio: f64) -> i32 {
    ENGAGEMENT_STEPS
        .iter()
        .find(|(min, _)| ratio >= *min)
        .map_or(ENGAGEMENT_FLOOR_POINTS, |(_, points)| *points)
}

fn trend_points(trend: EngagementTrend) -> i32 {
    match trend {
        EngagementTrend::Up => 10,
        EngagementTrend::Down => -5,
        EngagementTrend::Stable => 0,
    }
}

fn insight_points(insights: &[AnalysisInsight]) -> i32 {
    insights
        .iter()
        .map(|i| match i.status {
            InsightStatus::Good => 4,
            InsightStatus::Warning => 0,
            InsightStatus::Critical => -4,
        })
        .sum()
}

fn cadence_points(avg_days: f64) -> i32 {
    if let Some((_, points)) = CADENCE_STEPS.iter().find(|(max, _)| avg_days <= *max) {
        return *points;
    }
    if avg_days > CADENCE_SLOW_DAYS {
        CADENCE_SLOW_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::performance::calculate_performance_metrics;
    use crate::analysis::test_support::{channel, video};
    use crate::models::InsightCategory;

    fn stub(status: InsightStatus) -> AnalysisInsight {
        AnalysisInsight {
            id: "stub".to_string(),
            category: InsightCategory::Content,
            status,
            title: String::new(),
            description: String::new(),
            recommendation: None,
            metric: None,
        }
    }

    #[test]
    fn test_engagement_steps() {
        assert_eq!(engagement_points(1.3), 15);
        assert_eq!(engagement_points(1.25), 10);
        assert_eq!(engagement_points(1.0), 10);
        assert_eq!(engagement_points(0.7), 5);
        assert_eq!(engagement_points(0.69), -5);
        assert_eq!(engagement_points(0.0), -5);
    }

    #[test]
    fn test_cadence_steps() {
        assert_eq!(cadence_points(1.0), 10);
        assert_eq!(cadence_points(3.0), 10);
        assert_eq!(cadence_points(5.0), 5);
        assert_eq!(cadence_points(7.0), 5);
        assert_eq!(cadence_points(14.0), 0);
        assert_eq!(cadence_points(21.0), 0);
        assert_eq!(cadence_points(21.5), -5);
    }

    #[test]
    fn test_micro_channel_traceable_score() {
        // micro tier, 10% engagement (ratio 1.25), one video: no cadence bonus
        let ch = channel(5_000, 100_000, 50);
        let videos = vec![video("v", 1000, 100, 0, 0)];
        let metrics = calculate_performance_metrics(&ch, &videos);
        let insights = [stub(InsightStatus::Good)];

        // 50 + 10 (engagement) + 0 (stable) + 4 (one good insight)
        assert_eq!(calculate_health_score(&ch, &videos, &insights, &metrics), 64);
    }

    #[test]
    fn test_three_day_cadence_bonus() {
        let ch = channel(5_000, 100_000, 50);
        let videos: Vec<VideoInfo> = (0..5).map(|i| video("v", 1000, 100, 0, i * 3)).collect();
        let metrics = calculate_performance_metrics(&ch, &videos);

        // 50 + 10 (engagement) + 0 (stable) + 10 (cadence)
        assert_eq!(calculate_health_score(&ch, &videos, &[], &metrics), 70);
    }

    #[test]
    fn test_score_clamped_low() {
        let ch = channel(5_000, 100_000, 50);
        let videos: Vec<VideoInfo> = (0..3).map(|i| video("v", 1000, 0, 0, i * 40)).collect();
        let metrics = calculate_performance_metrics(&ch, &videos);
        let insights: Vec<AnalysisInsight> =
            (0..50).map(|_| stub(InsightStatus::Critical)).collect();

        assert_eq!(calculate_health_score(&ch, &videos, &insights, &metrics), 0);
    }

    #[test]
    fn test_score_clamped_high() {
        let ch = channel(5_000, 100_000, 50);
        let videos = vec![video("v", 100, 90, 0, 0)];
        let metrics = calculate_performance_metrics(&ch, &videos);
        let insights: Vec<AnalysisInsight> = (0..50).map(|_| stub(InsightStatus::Good)).collect();

        assert_eq!(calculate_health_score(&ch, &videos, &insights, &metrics), 100);
    }

    #[test]
    fn test_empty_window_score() {
        let ch = channel(5_000, 100_000, 50);
        let metrics = calculate_performance_metrics(&ch, &[]);

        // 50 - 5 (zero engagement)
        assert_eq!(calculate_health_score(&ch, &[], &[], &metrics), 45);
    }
}
