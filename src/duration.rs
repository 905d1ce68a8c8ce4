use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

fn duration_re() -> &'static Regex {
    DURATION_RE.get_or_init(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap())
}

/// Format an ISO 8601 video duration (e.g. "PT5M36S") as zero-padded HH:MM:SS.
///
/// Overflowing components carry into the next unit, and hours grow past two
/// digits rather than truncating.
pub fn format_duration(text: &str) -> Result<String> {
    let caps = duration_re()
        .captures(text)
        .ok_or_else(|| Error::DurationFormat(text.to_string()))?;

    // "PT" with no components is not a duration
    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return Err(Error::DurationFormat(text.to_string()));
    }

    let hours = component(&caps, 1, text)?;
    let minutes = component(&caps, 2, text)?;
    let seconds = component(&caps, 3, text)?;

    let total = hours * 3600 + minutes * 60 + seconds;

    Ok(format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    ))
}

fn component(caps: &regex::Captures<'_>, idx: usize, text: &str) -> Result<u64> {
    match caps.get(idx) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| Error::DurationFormat(text.to_string())),
        None => Ok(0),
    }
}
