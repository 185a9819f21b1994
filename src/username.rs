//! Username normalization module
//!
//! Turns the raw `username` query value into a canonical screen name.
//! Callers may send either a bare handle ("jack") or a full profile URL
//! ("https://twitter.com/jack"); URL inputs are strictly validated, bare
//! handles pass through untouched.

use thiserror::Error;
use url::Url;

/// Substring that marks the input as a profile URL rather than a handle
const DOMAIN_MARKER: &str = "twitter.com";

/// Screen names are at most 15 characters of `[A-Za-z0-9_]`
const MAX_SCREEN_NAME_LEN: usize = 15;

/// Site sections that occupy the first path segment but are never profiles
const RESERVED_PATHS: [&str; 18] = [
    "home",
    "explore",
    "notifications",
    "messages",
    "search",
    "settings",
    "compose",
    "login",
    "signup",
    "i",
    "hashtag",
    "logout",
    "tos",
    "privacy",
    "about",
    "intent",
    "share",
    "download",
];

/// Validation failures, each carrying the exact message surfaced to callers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username parameter is missing")]
    Missing,
    #[error("Invalid Twitter username in URL")]
    Invalid,
    #[error("No username found in Twitter URL")]
    NoUsernameInUrl,
    #[error("Invalid Twitter URL")]
    BadUrl,
}

/// Normalize raw caller input into a canonical screen name.
///
/// Inputs containing the platform domain are parsed as URLs: the first
/// non-empty path segment must look like a screen name and must not be a
/// reserved site section. Anything else is returned unchanged.
pub fn normalize(raw: &str) -> Result<String, UsernameError> {
    if raw.is_empty() {
        return Err(UsernameError::Missing);
    }

    if !raw.contains(DOMAIN_MARKER) {
        // Bare handles are passed through unvalidated
        return Ok(raw.to_string());
    }

    // Prefix a scheme when absent so the input parses as an absolute URL
    let absolute = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let parsed = Url::parse(&absolute).map_err(|_| UsernameError::BadUrl)?;

    let candidate = parsed
        .path()
        .split('/')
        .find(|segment| !segment.is_empty())
        .ok_or(UsernameError::NoUsernameInUrl)?;

    if !is_valid_screen_name(candidate) || is_reserved(candidate) {
        return Err(UsernameError::Invalid);
    }

    Ok(candidate.to_string())
}

/// Check the `^[A-Za-z0-9_]{1,15}$` shape without a regex engine
fn is_valid_screen_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= MAX_SCREEN_NAME_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_reserved(candidate: &str) -> bool {
    let lowered = candidate.to_ascii_lowercase();
    RESERVED_PATHS.iter().any(|reserved| *reserved == lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_handle_passes_through() {
        assert_eq!(normalize("jack"), Ok("jack".to_string()));
        // No domain marker means no validation at all
        assert_eq!(normalize("not a handle!"), Ok("not a handle!".to_string()));
    }

    #[test]
    fn test_empty_input_is_missing() {
        assert_eq!(normalize(""), Err(UsernameError::Missing));
    }

    #[test]
    fn test_full_url_extracts_first_segment() {
        assert_eq!(
            normalize("https://twitter.com/jack"),
            Ok("jack".to_string())
        );
        assert_eq!(
            normalize("https://twitter.com/jack/status/20"),
            Ok("jack".to_string())
        );
    }

    #[test]
    fn test_url_without_scheme_gets_one() {
        assert_eq!(normalize("twitter.com/jack"), Ok("jack".to_string()));
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(
            normalize("https://twitter.com/jack?lang=en"),
            Ok("jack".to_string())
        );
    }

    #[test]
    fn test_reserved_section_is_rejected() {
        assert_eq!(normalize("twitter.com/home"), Err(UsernameError::Invalid));
        // Reserved check is case-insensitive
        assert_eq!(
            normalize("https://twitter.com/Settings"),
            Err(UsernameError::Invalid)
        );
    }

    #[test]
    fn test_url_with_no_path_segments() {
        assert_eq!(
            normalize("https://twitter.com/"),
            Err(UsernameError::NoUsernameInUrl)
        );
        assert_eq!(
            normalize("twitter.com"),
            Err(UsernameError::NoUsernameInUrl)
        );
    }

    #[test]
    fn test_disallowed_characters_are_rejected() {
        assert_eq!(normalize("twitter.com/ab!c"), Err(UsernameError::Invalid));
    }

    #[test]
    fn test_over_long_candidate_is_rejected() {
        assert_eq!(
            normalize("twitter.com/abcdefghijklmnop"),
            Err(UsernameError::Invalid)
        );
        // 15 characters is still fine
        assert_eq!(
            normalize("twitter.com/abcdefghijklmno"),
            Ok("abcdefghijklmno".to_string())
        );
    }

    #[test]
    fn test_unparseable_url_is_bad_url() {
        assert_eq!(
            normalize("twitter.com:99999999/jack"),
            Err(UsernameError::BadUrl)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UsernameError::Missing.to_string(),
            "Username parameter is missing"
        );
        assert_eq!(
            UsernameError::Invalid.to_string(),
            "Invalid Twitter username in URL"
        );
        assert_eq!(
            UsernameError::NoUsernameInUrl.to_string(),
            "No username found in Twitter URL"
        );
        assert_eq!(UsernameError::BadUrl.to_string(), "Invalid Twitter URL");
    }
}
