use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key not set. Set YOUTUBE_API_KEY or pass --api-key.")]
    ApiKeyMissing,

    #[error("Invalid duration string: {0}")]
    DurationFormat(String),

    #[error("Could not determine channel identity from {0}")]
    ChannelResolution(String),

    #[error("No channel found for {0}")]
    ChannelNotFound(String),

    #[error("YouTube API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
