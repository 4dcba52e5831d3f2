use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public statistics for one channel, as normalised by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub custom_url: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Metadata and counters for a single upload
///
/// Deserializing goes through [`NewVideo`], so a stored `engagementRate`
/// is ignored and recomputed from the counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "NewVideo")]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    /// ISO-8601 duration as reported upstream, e.g. `PT12M3S`
    pub duration: String,
    /// Formatted as `"6.00%"`
    pub engagement_rate: String,
    pub tags: Vec<String>,
}

/// Fields needed to build a [`VideoInfo`]; the engagement rate is derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<NewVideo> for VideoInfo {
    fn from(video: NewVideo) -> Self {
        VideoInfo::new(video)
    }
}

impl VideoInfo {
    pub fn new(video: NewVideo) -> Self {
        let engagement_rate =
            format_engagement_rate(video.view_count, video.like_count, video.comment_count);

        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            thumbnail_url: video.thumbnail_url,
            published_at: video.published_at,
            view_count: video.view_count,
            like_count: video.like_count,
            comment_count: video.comment_count,
            duration: video.duration,
            engagement_rate,
            tags: video.tags,
        }
    }

    /// Numeric value of the formatted engagement rate, in percent.
    ///
    /// Reads the two-decimal string so that every consumer averages the same
    /// rounded figures the caller sees. Falls back to the raw counters when the
    /// field was overwritten with something unparsable.
    pub fn engagement_percent(&self) -> f64 {
        self.engagement_rate
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .unwrap_or_else(|_| {
                engagement_rate(self.view_count, self.like_count, self.comment_count)
            })
    }
}

/// (likes + comments) / views * 100, or 0 when there are no views
pub fn engagement_rate(views: u64, likes: u64, comments: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    // summed as floats so counts near u64::MAX cannot overflow
    (likes as f64 + comments as f64) / views as f64 * 100.0
}

pub fn format_engagement_rate(views: u64, likes: u64, comments: u64) -> String {
    format!("{:.2}%", engagement_rate(views, likes, comments))
}

/// Channel plus its most-recent-first upload window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnapshot {
    pub channel: ChannelInfo,
    #[serde(default)]
    pub videos: Vec<VideoInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_rate_formatting() {
        assert_eq!(format_engagement_rate(1000, 50, 10), "6.00%");
        assert_eq!(format_engagement_rate(3, 1, 0), "33.33%");
    }

    #[test]
    fn test_zero_views_has_zero_engagement() {
        assert_eq!(format_engagement_rate(0, 12, 4), "0.00%");

        let video = VideoInfo::new(NewVideo {
            like_count: 5,
            ..Default::default()
        });
        assert_eq!(video.engagement_rate, "0.00%");
        assert_eq!(video.engagement_percent(), 0.0);
    }

    #[test]
    fn test_engagement_percent_falls_back_to_counters() {
        let mut video = VideoInfo::new(NewVideo {
            view_count: 200,
            like_count: 10,
            ..Default::default()
        });
        assert_eq!(video.engagement_percent(), 5.0);

        video.engagement_rate = "n/a".to_string();
        assert_eq!(video.engagement_percent(), 5.0);
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let video = VideoInfo::new(NewVideo {
            view_count: 10,
            like_count: u64::MAX,
            comment_count: 1,
            ..Default::default()
        });
        assert!(video.engagement_percent() > 1e19);
        assert!(video.engagement_rate.ends_with('%'));
    }

    #[test]
    fn test_stale_engagement_rate_is_recomputed() {
        let video: VideoInfo = serde_json::from_value(serde_json::json!({
            "id": "v1",
            "title": "t",
            "description": "",
            "thumbnailUrl": "",
            "publishedAt": "2025-05-20T12:00:00Z",
            "viewCount": 1000,
            "likeCount": 50,
            "commentCount": 10,
            "duration": "PT5M",
            "engagementRate": "99.00%"
        }))
        .unwrap();

        assert_eq!(video.engagement_rate, "6.00%");
        assert_eq!(video.engagement_percent(), 6.0);
        assert!(video.tags.is_empty());
    }
}
