//! Channel and video data source
//!
//! The analysis pipeline only ever sees a [`ChannelSnapshot`]; everything
//! about reaching the upstream API, resolving handles and normalising the
//! response lives behind [`ChannelSource`].

pub mod input;
pub mod youtube;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ChannelSnapshot;

pub use input::ChannelInput;
pub use youtube::YouTubeClient;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("サーバーにYouTube APIキーが設定されていません")]
    MissingApiKey,
    #[error("{0}")]
    InvalidInput(String),
    #[error("チャンネルが見つかりませんでした")]
    ChannelNotFound,
    #[error("YouTube API error: {0}")]
    Upstream(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Turn user input into a concrete channel id
    async fn resolve_channel_id(&self, input: &ChannelInput) -> SourceResult<String>;

    /// Fetch channel statistics and the most recent uploads, newest first
    async fn fetch_snapshot(&self, channel_id: &str) -> SourceResult<ChannelSnapshot>;

    /// Resolve and fetch in one step
    async fn snapshot_for(&self, raw_input: &str) -> SourceResult<ChannelSnapshot> {
        let input = ChannelInput::parse(raw_input)?;
        let channel_id = self.resolve_channel_id(&input).await?;
        self.fetch_snapshot(&channel_id).await
    }
}
