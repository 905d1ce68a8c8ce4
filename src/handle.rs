use crate::api::YouTubeClient;
use crate::error::Result;

/// Resolve a custom handle to its channel id.
///
/// The search endpoint has no exact handle lookup, so candidates come from a
/// free-text search and are disambiguated by an exact customUrl match. Only
/// the first 50 relevance-ordered hits are examined; a handle ranking past
/// that is never found.
pub async fn resolve_handle(client: &YouTubeClient, handle: &str) -> Result<Option<String>> {
    let normalized = normalize_handle(handle);

    let search = client.search_channels(&normalized).await?;

    let candidate_ids: Vec<String> = search
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|hit| hit.snippet.channel_id)
        .collect();

    if candidate_ids.is_empty() {
        return Ok(None);
    }

    let channels = client.channel_snippets(&candidate_ids.join(",")).await?;

    Ok(channels
        .items
        .unwrap_or_default()
        .into_iter()
        .find(|channel| {
            channel
                .snippet
                .as_ref()
                .and_then(|s| s.custom_url.as_deref())
                .is_some_and(|url| url.eq_ignore_ascii_case(&normalized))
        })
        .map(|channel| channel.id))
}

/// Lowercase and @-prefix a handle for search and customUrl comparison
pub(crate) fn normalize_handle(handle: &str) -> String {
    format!("@{}", handle.trim_start_matches('@').to_lowercase())
}
