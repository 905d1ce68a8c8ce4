use chrono::{DateTime, Utc};

use crate::api::YouTubeClient;
use crate::error::Result;

/// A single upload, as accumulated from the uploads playlist
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub upload_date: DateTime<Utc>,
    /// Formatted HH:MM:SS, absent until enrichment completes
    pub duration: Option<String>,
}

/// Fetch every item of an uploads playlist across cursor-paginated responses,
/// preserving the order the API returned them in.
///
/// Any failed page aborts the whole fetch; partial results are discarded.
pub async fn fetch_all_items(
    client: &YouTubeClient,
    playlist_id: &str,
) -> Result<Vec<VideoRecord>> {
    let mut records = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = client
            .playlist_items(playlist_id, page_token.as_deref())
            .await?;

        for item in page.items.unwrap_or_default() {
            records.push(VideoRecord {
                video_id: item.content_details.video_id,
                title: item.snippet.title,
                upload_date: item.content_details.video_published_at,
                duration: None,
            });
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(records)
}
