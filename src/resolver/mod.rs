//! Resolver module
//!
//! Unauthenticated guest-session client for the upstream platform. Each
//! lookup activates a fresh guest session, queries the GraphQL user lookup
//! endpoint, and extracts the profile fields the gateway returns. Nothing is
//! cached or retried.

mod client;
mod wire;

pub use client::{GuestClient, GuestSession};

use thiserror::Error;

use crate::config::UpstreamConfig;

/// Profile fields extracted from a successful upstream lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub screen_name: String,
    /// The low-resolution avatar URL as the platform reports it
    pub profile_image_url: String,
}

/// Upstream failures, each terminal for the request
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Could not activate the guest client: {0}")]
    Activation(String),
    #[error("User '{0}' not found or profile is protected.")]
    NotFound(String),
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected upstream payload: {0}")]
    UnexpectedPayload(String),
}

/// Resolve a screen name to its profile fields.
///
/// Activates a fresh guest session per call; there is no session reuse
/// across requests.
pub async fn resolve(
    config: &UpstreamConfig,
    username: &str,
) -> Result<UserProfile, ResolveError> {
    let session = GuestClient::new(config)?.activate().await?;
    session.user_by_screen_name(username).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_error_message() {
        let err = ResolveError::Activation("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Could not activate the guest client: connection refused"
        );
    }

    #[test]
    fn test_not_found_error_message() {
        let err = ResolveError::NotFound("jack".to_string());
        assert_eq!(
            err.to_string(),
            "User 'jack' not found or profile is protected."
        );
    }
}
