use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// YouTube Data API v3 base URL
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API client
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Create a client against a non-default base URL
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_base: api_base.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .client
            .get(format!("{}/{}", self.api_base, endpoint))
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        Ok(response.json().await?)
    }

    /// Look up a channel by a single filter (`id` or `forUsername`),
    /// requesting the contentDetails facet
    pub async fn channel_content_details(
        &self,
        filter: &str,
        value: &str,
    ) -> Result<ChannelListResponse> {
        self.get_json("channels", &[("part", "contentDetails"), (filter, value)])
            .await
    }

    /// Look up channel snippets for a comma-joined id list
    pub async fn channel_snippets(&self, ids: &str) -> Result<ChannelListResponse> {
        self.get_json("channels", &[("part", "snippet"), ("id", ids)])
            .await
    }

    /// Full-text search for channels, first page of 50 relevance-ordered hits
    pub async fn search_channels(&self, query: &str) -> Result<SearchListResponse> {
        self.get_json(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "channel"),
                ("order", "relevance"),
                ("maxResults", "50"),
            ],
        )
        .await
    }

    /// One page of a playlist, echoing the previous page's cursor when given
    pub async fn playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemListResponse> {
        let mut query = vec![
            ("part", "snippet,contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", "50"),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        self.get_json("playlistItems", &query).await
    }

    /// Batch video lookup for a comma-joined id list (at most 50 ids)
    pub async fn videos(&self, ids: &str) -> Result<VideoListResponse> {
        self.get_json(
            "videos",
            &[
                ("part", "id,snippet,contentDetails,localizations"),
                ("id", ids),
            ],
        )
        .await
    }
}

// --- Response models ---

#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    pub items: Option<Vec<ChannelResource>>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelResource {
    pub id: String,
    pub snippet: Option<ChannelSnippet>,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSnippet {
    #[serde(rename = "customUrl")]
    pub custom_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    pub items: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
pub struct SearchSnippet {
    #[serde(rename = "channelId")]
    pub channel_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemListResponse {
    pub items: Option<Vec<PlaylistItemResource>>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemResource {
    pub snippet: PlaylistItemSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemSnippet {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemContentDetails {
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(rename = "videoPublishedAt")]
    pub video_published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    pub items: Option<Vec<VideoResource>>,
}

#[derive(Debug, Deserialize)]
pub struct VideoResource {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<VideoContentDetails>,
    pub localizations: Option<HashMap<String, Localization>>,
}

#[derive(Debug, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Localization {
    pub title: String,
}
