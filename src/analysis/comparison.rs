//! Side-by-side metrics for a channel and its competitors

use std::collections::HashSet;

use thiserror::Error;

use crate::analysis::benchmarks::average_days_between;
use crate::models::{
    ChannelAnalysis, ChannelComparison, ComparedValue, ComparisonMetrics, ComparisonTrend,
};

/// Differences within this many percent count as equal
const EQUAL_BAND_PERCENT: f64 = 5.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("competitor {0} is the channel being analysed")]
    SameChannel(String),
    #[error("competitor {0} was already added")]
    DuplicateCompetitor(String),
}

pub fn compare_value(main: f64, competitor: f64) -> ComparedValue {
    if competitor == 0.0 {
        return ComparedValue {
            ratio: 0,
            trend: ComparisonTrend::Equal,
        };
    }

    let ratio = (main - competitor) / competitor * 100.0;
    let trend = if ratio > EQUAL_BAND_PERCENT {
        ComparisonTrend::Up
    } else if ratio < -EQUAL_BAND_PERCENT {
        ComparisonTrend::Down
    } else {
        ComparisonTrend::Equal
    };

    ComparedValue {
        ratio: ratio.round() as i64,
        trend,
    }
}

/// Parse `"4.25%"`; `"N/A"` and anything unparsable count as 0.
fn engagement_value(formatted: &str) -> f64 {
    formatted
        .trim_end_matches('%')
        .trim()
        .parse()
        .unwrap_or(0.0)
}

pub fn compare_channels(main: &ChannelAnalysis, competitor: &ChannelAnalysis) -> ChannelComparison {
    let upload_frequency_ratio = match (
        average_days_between(&main.recent_videos),
        average_days_between(&competitor.recent_videos),
    ) {
        (Some(main_days), Some(competitor_days)) => Some(compare_value(main_days, competitor_days)),
        _ => None,
    };

    let ours = &main.channel;
    let theirs = &competitor.channel;

    ChannelComparison {
        competitor_id: theirs.id.clone(),
        competitor_title: theirs.title.clone(),
        competitor_thumbnail_url: theirs.thumbnail_url.clone(),
        subscriber_count: theirs.subscriber_count,
        view_count: theirs.view_count,
        video_count: theirs.video_count,
        average_engagement: competitor.average_engagement.clone(),
        comparison_metrics: ComparisonMetrics {
            subscriber_ratio: compare_value(
                ours.subscriber_count as f64,
                theirs.subscriber_count as f64,
            ),
            view_ratio: compare_value(ours.view_count as f64, theirs.view_count as f64),
            video_count_ratio: compare_value(ours.video_count as f64, theirs.video_count as f64),
            engagement_ratio: compare_value(
                engagement_value(&main.average_engagement),
                engagement_value(&competitor.average_engagement),
            ),
            upload_frequency_ratio,
        },
    }
}

/// Compare `main` against each competitor, rejecting self and duplicate entries.
pub fn compare_all(
    main: &ChannelAnalysis,
    competitors: &[ChannelAnalysis],
) -> Result<Vec<ChannelComparison>, ComparisonError> {
    let mut seen = HashSet::new();
    let mut comparisons = Vec::with_capacity(competitors.len());

    for competitor in competitors {
        let id = &competitor.channel.id;
        if *id == main.channel.id {
            return Err(ComparisonError::SameChannel(id.clone()));
        }
        if !seen.insert(id.as_str()) {
            return Err(ComparisonError::DuplicateCompetitor(id.clone()));
        }
        comparisons.push(compare_channels(main, competitor));
    }

    Ok(comparisons)
}
