use std::sync::OnceLock;

use regex::Regex;

use crate::api::YouTubeClient;
use crate::error::{Error, Result};
use crate::handle;

/// How a channel reference addresses its channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelAddressingMode {
    LegacyUsername(String),
    ChannelId(String),
    CustomHandle(String),
}

static USER_RE: OnceLock<Regex> = OnceLock::new();
static CHANNEL_RE: OnceLock<Regex> = OnceLock::new();
static CUSTOM_RE: OnceLock<Regex> = OnceLock::new();
static HANDLE_RE: OnceLock<Regex> = OnceLock::new();

fn capture(re: &Regex, reference: &str) -> Option<String> {
    re.captures(reference).map(|caps| caps[1].to_string())
}

/// Classify a channel reference URL into its addressing mode.
/// Checked in precedence order: legacy username, channel id, custom handle.
pub fn classify_reference(reference: &str) -> Result<ChannelAddressingMode> {
    let user_re = USER_RE.get_or_init(|| Regex::new(r"/user/([^/?#]+)").unwrap());
    let channel_re = CHANNEL_RE.get_or_init(|| Regex::new(r"/channel/([^/?#]+)").unwrap());
    let custom_re = CUSTOM_RE.get_or_init(|| Regex::new(r"/c/([^/?#]+)").unwrap());
    let handle_re = HANDLE_RE.get_or_init(|| Regex::new(r"/@([^/?#]+)").unwrap());

    if let Some(name) = capture(user_re, reference) {
        return Ok(ChannelAddressingMode::LegacyUsername(name));
    }
    if let Some(id) = capture(channel_re, reference) {
        return Ok(ChannelAddressingMode::ChannelId(id));
    }
    if let Some(h) = capture(custom_re, reference).or_else(|| capture(handle_re, reference)) {
        return Ok(ChannelAddressingMode::CustomHandle(h));
    }

    Err(Error::ChannelResolution(reference.to_string()))
}

/// Resolve a channel reference to the id of its uploads playlist.
///
/// Custom handles are resolved to a channel id first, so the channels lookup
/// always runs with an `id` or `forUsername` filter.
pub async fn resolve_uploads_collection(
    client: &YouTubeClient,
    reference: &str,
) -> Result<String> {
    let (filter, value) = match classify_reference(reference)? {
        ChannelAddressingMode::ChannelId(id) => ("id", id),
        ChannelAddressingMode::LegacyUsername(name) => ("forUsername", name),
        ChannelAddressingMode::CustomHandle(h) => {
            let channel_id = handle::resolve_handle(client, &h)
                .await?
                .ok_or_else(|| Error::ChannelNotFound(reference.to_string()))?;
            ("id", channel_id)
        }
    };

    let response = client.channel_content_details(filter, &value).await?;

    let channel = response
        .items
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| Error::ChannelNotFound(reference.to_string()))?;

    let details = channel
        .content_details
        .ok_or_else(|| Error::ChannelNotFound(reference.to_string()))?;

    Ok(details.related_playlists.uploads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_legacy_username() {
        let mode = classify_reference("https://www.youtube.com/user/somename/videos").unwrap();
        assert_eq!(
            mode,
            ChannelAddressingMode::LegacyUsername("somename".to_string())
        );
    }

    #[test]
    fn classify_channel_id() {
        let mode = classify_reference("https://www.youtube.com/channel/UC12345/").unwrap();
        assert_eq!(mode, ChannelAddressingMode::ChannelId("UC12345".to_string()));
    }

    #[test]
    fn classify_custom_path() {
        let mode = classify_reference("https://www.youtube.com/c/SomeChannel").unwrap();
        assert_eq!(
            mode,
            ChannelAddressingMode::CustomHandle("SomeChannel".to_string())
        );
    }

    #[test]
    fn classify_at_handle() {
        let mode = classify_reference("https://www.youtube.com/@SomeChannel").unwrap();
        assert_eq!(
            mode,
            ChannelAddressingMode::CustomHandle("SomeChannel".to_string())
        );
    }

    #[test]
    fn classify_strips_query_from_capture() {
        let mode = classify_reference("https://www.youtube.com/@SomeChannel?tab=videos").unwrap();
        assert_eq!(
            mode,
            ChannelAddressingMode::CustomHandle("SomeChannel".to_string())
        );
    }

    #[test]
    fn username_takes_precedence() {
        let mode = classify_reference("https://www.youtube.com/user/somename/@other").unwrap();
        assert_eq!(
            mode,
            ChannelAddressingMode::LegacyUsername("somename".to_string())
        );
    }

    #[test]
    fn bare_domain_fails() {
        let err = classify_reference("https://www.youtube.com/").unwrap_err();
        assert!(err.to_string().contains("Could not determine"));
        assert!(err.to_string().contains("https://www.youtube.com/"));
    }
}
