use std::collections::HashMap;

use futures::stream::{self, StreamExt};

use crate::api::{VideoResource, YouTubeClient};
use crate::duration::format_duration;
use crate::error::Result;
use crate::playlist::VideoRecord;

/// Maximum number of ids the videos endpoint accepts per call
pub const ENRICH_BATCH_SIZE: usize = 50;

/// Cap on concurrent in-flight enrichment requests
const MAX_IN_FLIGHT: usize = 8;

/// Duration and canonical title for one video, keyed for the merge
#[derive(Debug)]
struct EnrichmentResult {
    video_id: String,
    duration: String,
    title: String,
}

/// Enrich records with durations and localized titles in concurrent batches
/// of at most [`ENRICH_BATCH_SIZE`] ids, then sort ascending by upload date.
///
/// Videos the API no longer reports a duration for (deleted or private
/// uploads) keep `duration: None` and stay in the output. Any batch failure
/// fails the whole enrichment.
pub async fn enrich(
    client: &YouTubeClient,
    records: Vec<VideoRecord>,
) -> Result<Vec<VideoRecord>> {
    let batches: Vec<Vec<String>> = records
        .chunks(ENRICH_BATCH_SIZE)
        .map(|chunk| chunk.iter().map(|r| r.video_id.clone()).collect())
        .collect();

    let batch_results: Vec<Result<Vec<EnrichmentResult>>> = stream::iter(batches)
        .map(|ids| enrich_batch(client, ids))
        .buffer_unordered(MAX_IN_FLIGHT)
        .collect()
        .await;

    let mut by_id = HashMap::new();
    for result in batch_results {
        for enrichment in result? {
            by_id.insert(enrichment.video_id.clone(), enrichment);
        }
    }

    Ok(merge_results(records, by_id))
}

async fn enrich_batch(
    client: &YouTubeClient,
    ids: Vec<String>,
) -> Result<Vec<EnrichmentResult>> {
    let response = client.videos(&ids.join(",")).await?;

    let mut results = Vec::new();
    for item in response.items.unwrap_or_default() {
        let Some(iso) = item
            .content_details
            .as_ref()
            .and_then(|details| details.duration.as_deref())
        else {
            continue;
        };

        let duration = format_duration(iso)?;
        let title = preferred_title(&item);
        results.push(EnrichmentResult {
            video_id: item.id,
            duration,
            title,
        });
    }

    Ok(results)
}

/// en-US localization first, then en, then the plain snippet title
fn preferred_title(video: &VideoResource) -> String {
    video
        .localizations
        .as_ref()
        .and_then(|locs| locs.get("en-US").or_else(|| locs.get("en")))
        .map(|loc| loc.title.clone())
        .unwrap_or_else(|| video.snippet.title.clone())
}

/// Merge enrichments into the records by video id and sort by upload date.
/// Equal dates tie-break on video id so runs are deterministic.
fn merge_results(
    records: Vec<VideoRecord>,
    mut by_id: HashMap<String, EnrichmentResult>,
) -> Vec<VideoRecord> {
    let mut merged: Vec<VideoRecord> = records
        .into_iter()
        .map(|mut record| {
            if let Some(enrichment) = by_id.remove(&record.video_id) {
                record.duration = Some(enrichment.duration);
                record.title = enrichment.title;
            }
            record
        })
        .collect();

    merged.sort_by(|a, b| {
        a.upload_date
            .cmp(&b.upload_date)
            .then_with(|| a.video_id.cmp(&b.video_id))
    });

    merged
}
