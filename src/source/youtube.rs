//! YouTube Data API v3 client

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ChannelInput, ChannelSource, SourceError, SourceResult};
use crate::config::YouTubeConfig;
use crate::models::{ChannelInfo, ChannelSnapshot, NewVideo, VideoInfo};

pub struct YouTubeClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    max_results: u32,
}

impl YouTubeClient {
    pub fn from_config(config: &YouTubeConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("chanscope/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client for the YouTube Data API")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
        })
    }

    fn api_key(&self) -> SourceResult<&str> {
        self.api_key.as_deref().ok_or(SourceError::MissingApiKey)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> SourceResult<T> {
        let key = self.api_key()?;
        let mut url = Url::parse(&format!("{}/{}", self.base_url, resource))
            .map_err(|e| SourceError::Upstream(format!("invalid API base URL: {e}")))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().copied())
            .append_pair("key", key);

        debug!(resource, "Requesting YouTube Data API");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.to_string());
            warn!(resource, %status, "YouTube Data API request failed");
            return Err(SourceError::Upstream(message));
        }

        Ok(response.json().await?)
    }

    async fn search_channel_by_handle(&self, handle: &str) -> SourceResult<Option<String>> {
        let list: ListResponse<SearchItem> = self
            .get(
                "search",
                &[("part", "snippet"), ("type", "channel"), ("q", handle)],
            )
            .await?;

        Ok(list.items.into_iter().next().and_then(SearchItem::channel_id))
    }

    async fn fetch_channel(&self, channel_id: &str) -> SourceResult<Option<ChannelInfo>> {
        let list: ListResponse<ChannelItem> = self
            .get(
                "channels",
                &[
                    ("part", "snippet,statistics,brandingSettings"),
                    ("id", channel_id),
                ],
            )
            .await?;

        Ok(list.items.into_iter().next().map(ChannelItem::into_channel_info))
    }

    async fn fetch_recent_videos(&self, channel_id: &str) -> SourceResult<Vec<VideoInfo>> {
        let max_results = self.max_results.to_string();
        let search: ListResponse<SearchItem> = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", channel_id),
                    ("order", "date"),
                    ("type", "video"),
                    ("maxResults", &max_results),
                ],
            )
            .await?;

        let ids: Vec<String> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let list: ListResponse<VideoItem> = self
            .get(
                "videos",
                &[("part", "snippet,statistics,contentDetails"), ("id", &joined)],
            )
            .await?;

        let mut videos: Vec<VideoInfo> = list
            .items
            .into_iter()
            .map(VideoItem::into_video_info)
            .collect();
        videos.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(videos)
    }
}

#[async_trait]
impl ChannelSource for YouTubeClient {
    async fn resolve_channel_id(&self, input: &ChannelInput) -> SourceResult<String> {
        match input {
            ChannelInput::ChannelId(id) => Ok(id.clone()),
            ChannelInput::Handle(handle) => self
                .search_channel_by_handle(handle)
                .await?
                .ok_or(SourceError::ChannelNotFound),
        }
    }

    async fn fetch_snapshot(&self, channel_id: &str) -> SourceResult<ChannelSnapshot> {
        let channel = self
            .fetch_channel(channel_id)
            .await?
            .ok_or(SourceError::ChannelNotFound)?;
        let videos = self.fetch_recent_videos(channel_id).await?;

        debug!(channel_id, videos = videos.len(), "Fetched channel snapshot");
        Ok(ChannelSnapshot { channel, videos })
    }
}

fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

// ============================================================================
// YouTube Data API response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
    snippet: Option<SearchSnippet>,
}

impl SearchItem {
    fn channel_id(self) -> Option<String> {
        self.snippet
            .and_then(|s| s.channel_id)
            .or(self.id.channel_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: Option<String>,
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    channel_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    /// high, then medium, then default
    fn best(self) -> String {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|t| t.url)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    id: String,
    snippet: ChannelSnippet,
    #[serde(default)]
    statistics: ChannelStatistics,
    branding_settings: Option<BrandingSettings>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelSnippet {
    title: String,
    #[serde(default)]
    description: String,
    custom_url: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
    published_at: DateTime<Utc>,
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    subscriber_count: Option<String>,
    view_count: Option<String>,
    video_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BrandingSettings {
    image: Option<BrandingImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandingImage {
    banner_external_url: Option<String>,
}

impl ChannelItem {
    fn into_channel_info(self) -> ChannelInfo {
        let ChannelItem {
            id,
            snippet,
            statistics,
            branding_settings,
        } = self;

        ChannelInfo {
            id,
            title: snippet.title,
            description: snippet.description,
            custom_url: snippet.custom_url.unwrap_or_default(),
            thumbnail_url: snippet.thumbnails.best(),
            banner_url: branding_settings
                .and_then(|b| b.image)
                .and_then(|i| i.banner_external_url),
            subscriber_count: parse_count(statistics.subscriber_count.as_deref()),
            view_count: parse_count(statistics.view_count.as_deref()),
            video_count: parse_count(statistics.video_count.as_deref()),
            published_at: snippet.published_at,
            country: snippet.country,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    snippet: VideoSnippet,
    #[serde(default)]
    statistics: VideoStatistics,
    #[serde(default)]
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    published_at: DateTime<Utc>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

impl VideoItem {
    fn into_video_info(self) -> VideoInfo {
        VideoInfo::new(NewVideo {
            id: self.id,
            title: self.snippet.title,
            description: self.snippet.description,
            thumbnail_url: self.snippet.thumbnails.best(),
            published_at: self.snippet.published_at,
            view_count: parse_count(self.statistics.view_count.as_deref()),
            like_count: parse_count(self.statistics.like_count.as_deref()),
            comment_count: parse_count(self.statistics.comment_count.as_deref()),
            duration: self.content_details.duration,
            tags: self.snippet.tags.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_normalisation() {
        let item: ChannelItem = serde_json::from_value(json!({
            "id": "UC123",
            "snippet": {
                "title": "Rust 入門チャンネル",
                "description": "Rust を学ぶ",
                "thumbnails": {
                    "default": { "url": "https://img/default.jpg" },
                    "high": { "url": "https://img/high.jpg" }
                },
                "publishedAt": "2019-04-01T09:00:00Z",
                "country": "JP"
            },
            "statistics": {
                "subscriberCount": "15300",
                "viewCount": "1200000",
                "videoCount": "not-a-number"
            },
            "brandingSettings": {
                "image": { "bannerExternalUrl": "https://img/banner.jpg" }
            }
        }))
        .unwrap();

        let channel = item.into_channel_info();
        assert_eq!(channel.custom_url, "");
        assert_eq!(channel.thumbnail_url, "https://img/high.jpg");
        assert_eq!(channel.banner_url.as_deref(), Some("https://img/banner.jpg"));
        assert_eq!(channel.subscriber_count, 15_300);
        assert_eq!(channel.view_count, 1_200_000);
        assert_eq!(channel.video_count, 0);
        assert_eq!(channel.country.as_deref(), Some("JP"));
    }

    #[test]
    fn test_video_normalisation() {
        let item: VideoItem = serde_json::from_value(json!({
            "id": "vid1",
            "snippet": {
                "title": "10分で分かるRust",
                "description": "#rust",
                "thumbnails": { "medium": { "url": "https://img/medium.jpg" } },
                "publishedAt": "2025-05-20T12:00:00Z"
            },
            "statistics": { "viewCount": "1000", "likeCount": "50", "commentCount": "10" },
            "contentDetails": { "duration": "PT10M1S" }
        }))
        .unwrap();

        let video = item.into_video_info();
        assert_eq!(video.thumbnail_url, "https://img/medium.jpg");
        assert_eq!(video.engagement_rate, "6.00%");
        assert_eq!(video.duration, "PT10M1S");
        assert!(video.tags.is_empty());
    }

    #[test]
    fn test_hidden_like_count_is_zero() {
        let item: VideoItem = serde_json::from_value(json!({
            "id": "vid2",
            "snippet": { "title": "t", "publishedAt": "2025-05-20T12:00:00Z" },
            "statistics": { "viewCount": "0" }
        }))
        .unwrap();

        let video = item.into_video_info();
        assert_eq!(video.like_count, 0);
        assert_eq!(video.engagement_rate, "0.00%");
        assert_eq!(video.thumbnail_url, "");
    }

    #[test]
    fn test_search_item_channel_id() {
        let item: SearchItem = serde_json::from_value(json!({
            "id": { "kind": "youtube#channel", "channelId": "UCfromid" },
            "snippet": { "channelId": "UCfromsnippet" }
        }))
        .unwrap();
        assert_eq!(item.channel_id().as_deref(), Some("UCfromsnippet"));

        let item: SearchItem = serde_json::from_value(json!({
            "id": { "channelId": "UCfromid" }
        }))
        .unwrap();
        assert_eq!(item.channel_id().as_deref(), Some("UCfromid"));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = YouTubeClient::from_config(&YouTubeConfig {
            api_key: None,
            ..YouTubeConfig::default()
        })
        .unwrap();

        let err = client.fetch_snapshot("UC123").await.unwrap_err();
        assert!(matches!(err, SourceError::MissingApiKey));
    }
}
