use crate::error::{Error, Result};

/// Load environment variables from a .env file in the current directory
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Get the YouTube Data API key
pub fn youtube_api_key() -> Option<String> {
    std::env::var("YOUTUBE_API_KEY").ok()
}

/// Resolve the API key from an explicit flag value or the environment
pub fn resolve_api_key(flag: Option<String>) -> Result<String> {
    flag.or_else(youtube_api_key).ok_or(Error::ApiKeyMissing)
}

/// Terminal width from the COLUMNS environment variable, defaulting to 80
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(80)
}
