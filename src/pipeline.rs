use crate::api::YouTubeClient;
use crate::enricher;
use crate::error::Result;
use crate::playlist::{self, VideoRecord};
use crate::resolver;

/// Resolve a channel reference, collect every upload, and enrich the result.
///
/// The three phases run strictly in sequence; the first failure aborts the
/// run and is propagated unchanged.
pub async fn run(client: &YouTubeClient, channel_reference: &str) -> Result<Vec<VideoRecord>> {
    let uploads_id = resolver::resolve_uploads_collection(client, channel_reference).await?;
    let records = playlist::fetch_all_items(client, &uploads_id).await?;
    enricher::enrich(client, records).await
}
