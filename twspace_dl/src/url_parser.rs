//! URL parser for extracting usernames from profile URLs.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, TwspaceError};

/// Profile URL on x.com or twitter.com with exactly one path segment.
static PROFILE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:x\.com|twitter\.com)/([A-Za-z0-9_]+)$")
        .expect("Invalid profile URL regex")
});

/// Extract the username from a profile URL.
///
/// Supports the following URL formats, each with or without an
/// `http://`/`https://` scheme and with any number of trailing slashes:
/// - `x.com/<username>`
/// - `twitter.com/<username>`
///
/// Every rejected input yields [`TwspaceError::InvalidUserUrl`] carrying the
/// original string.
///
/// # Examples
///
/// ```
/// use twspace_dl::url_parser::extract_username;
///
/// let username = extract_username("https://x.com/protosphinx/").unwrap();
/// assert_eq!(username, "protosphinx");
///
/// assert!(extract_username("https://x.com/protosphinx/status/123").is_err());
/// ```
pub fn extract_username(url: &str) -> Result<String> {
    let stripped = url.trim_end_matches('/');

    match PROFILE_URL_REGEX
        .captures(stripped)
        .and_then(|captures| captures.get(1))
    {
        Some(username) => {
            tracing::debug!(url, username = username.as_str(), "extracted username");
            Ok(username.as_str().to_string())
        }
        None => {
            tracing::debug!(url, "rejected user URL");
            Err(TwspaceError::InvalidUserUrl(url.to_string()))
        }
    }
}
