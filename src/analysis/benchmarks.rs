//! Size-tiered industry baselines shared by insights and health scoring

use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::VideoInfo;

/// Subscriber-count bracket a channel falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelTier {
    Micro,
    Small,
    Medium,
    Large,
    Mega,
}

/// Expected figures for one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBenchmark {
    pub tier: ChannelTier,
    /// Exclusive upper bound of the bracket
    pub max_subscribers: u64,
    /// Expected mean engagement rate, percent
    pub avg_engagement: f64,
    /// Expected days between uploads
    pub upload_interval_days: f64,
}

pub const TIER_BENCHMARKS: [TierBenchmark; 5] = [
    TierBenchmark {
        tier: ChannelTier::Micro,
        max_subscribers: 10_000,
        avg_engagement: 8.0,
        upload_interval_days: 14.0,
    },
    TierBenchmark {
        tier: ChannelTier::Small,
        max_subscribers: 100_000,
        avg_engagement: 4.5,
        upload_interval_days: 14.0,
    },
    TierBenchmark {
        tier: ChannelTier::Medium,
        max_subscribers: 1_000_000,
        avg_engagement: 3.0,
        upload_interval_days: 7.0,
    },
    TierBenchmark {
        tier: ChannelTier::Large,
        max_subscribers: 10_000_000,
        avg_engagement: 2.0,
        upload_interval_days: 7.0,
    },
    TierBenchmark {
        tier: ChannelTier::Mega,
        max_subscribers: u64::MAX,
        avg_engagement: 1.5,
        upload_interval_days: 7.0,
    },
];

impl ChannelTier {
    pub fn from_subscribers(subscriber_count: u64) -> Self {
        TierBenchmark::for_subscribers(subscriber_count).tier
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelTier::Micro => "micro",
            ChannelTier::Small => "small",
            ChannelTier::Medium => "medium",
            ChannelTier::Large => "large",
            ChannelTier::Mega => "mega",
        }
    }
}

impl fmt::Display for ChannelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TierBenchmark {
    pub fn for_subscribers(subscriber_count: u64) -> &'static TierBenchmark {
        TIER_BENCHMARKS
            .iter()
            .find(|b| subscriber_count < b.max_subscribers)
            .unwrap_or(&TIER_BENCHMARKS[TIER_BENCHMARKS.len() - 1])
    }
}

/// Mean of the formatted engagement rates, 0 for an empty window
pub fn mean_engagement(videos: &[VideoInfo]) -> f64 {
    if videos.is_empty() {
        return 0.0;
    }
    videos.iter().map(VideoInfo::engagement_percent).sum::<f64>() / videos.len() as f64
}

/// Average spacing between uploads across the window, in days.
///
/// `None` when fewer than two videos are available.
pub fn average_days_between(videos: &[VideoInfo]) -> Option<f64> {
    if videos.len() < 2 {
        return None;
    }

    let newest = videos.iter().map(|v| v.published_at).max()?;
    let oldest = videos.iter().map(|v| v.published_at).min()?;

    Some(days_between(oldest, newest) / (videos.len() - 1) as f64)
}

fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 86_400_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ChannelTier::from_subscribers(0), ChannelTier::Micro);
        assert_eq!(ChannelTier::from_subscribers(9_999), ChannelTier::Micro);
        assert_eq!(ChannelTier::from_subscribers(10_000), ChannelTier::Small);
        assert_eq!(ChannelTier::from_subscribers(99_999), ChannelTier::Small);
        assert_eq!(ChannelTier::from_subscribers(100_000), ChannelTier::Medium);
        assert_eq!(ChannelTier::from_subscribers(1_000_000), ChannelTier::Large);
        assert_eq!(ChannelTier::from_subscribers(10_000_000), ChannelTier::Mega);
        assert_eq!(ChannelTier::from_subscribers(u64::MAX), ChannelTier::Mega);
    }

    #[test]
    fn test_benchmark_table_values() {
        let micro = TierBenchmark::for_subscribers(5_000);
        assert_eq!(micro.avg_engagement, 8.0);
        assert_eq!(micro.upload_interval_days, 14.0);

        let small = TierBenchmark::for_subscribers(50_000);
        assert_eq!(small.avg_engagement, 4.5);
        assert_eq!(small.upload_interval_days, 14.0);

        let medium = TierBenchmark::for_subscribers(500_000);
        assert_eq!(medium.avg_engagement, 3.0);
        assert_eq!(medium.upload_interval_days, 7.0);

        let mega = TierBenchmark::for_subscribers(20_000_000);
        assert_eq!(mega.avg_engagement, 1.5);
        assert_eq!(mega.upload_interval_days, 7.0);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(ChannelTier::Large.to_string(), "large");
    }
}
