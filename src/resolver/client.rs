//! Guest client module
//!
//! Reproduces the platform web client's unauthenticated flow: activate a
//! guest token with the public bearer token, then call the GraphQL user
//! lookup endpoint with both tokens attached.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::wire::{GuestTokenResponse, UserLookupResponse, LOOKUP_FEATURES};
use super::{ResolveError, UserProfile};
use crate::config::UpstreamConfig;

/// Unactivated guest client; holds the HTTP client and upstream endpoints
pub struct GuestClient {
    http: Client,
    config: UpstreamConfig,
}

/// Activated guest session carrying the guest token
pub struct GuestSession {
    http: Client,
    config: UpstreamConfig,
    guest_token: String,
}

impl GuestClient {
    /// Build the underlying HTTP client with the configured timeout and
    /// user agent. Construction failures count as activation failures.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ResolveError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ResolveError::Activation(e.to_string()))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Establish an unauthenticated session with the upstream platform.
    pub async fn activate(self) -> Result<GuestSession, ResolveError> {
        let response = self
            .http
            .post(&self.config.activate_url)
            .bearer_auth(&self.config.bearer_token)
            .send()
            .await
            .map_err(|e| ResolveError::Activation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Activation(format!(
                "activation endpoint returned {status}"
            )));
        }

        let token: GuestTokenResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::Activation(e.to_string()))?;

        Ok(GuestSession {
            http: self.http,
            config: self.config,
            guest_token: token.guest_token,
        })
    }
}

impl GuestSession {
    /// Look up a user by screen name and return their profile fields.
    ///
    /// Fails with `NotFound` when the upstream reports no usable user, which
    /// covers unknown, suspended, and access-restricted accounts.
    pub async fn user_by_screen_name(
        &self,
        screen_name: &str,
    ) -> Result<UserProfile, ResolveError> {
        let variables = serde_json::json!({
            "screen_name": screen_name,
            "withSafetyModeUserFields": false,
        })
        .to_string();

        let response = self
            .http
            .get(&self.config.user_lookup_url)
            .bearer_auth(&self.config.bearer_token)
            .header("x-guest-token", &self.guest_token)
            .query(&[
                ("variables", variables.as_str()),
                ("features", LOOKUP_FEATURES),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound(screen_name.to_string()));
        }
        if !status.is_success() {
            return Err(ResolveError::UnexpectedPayload(format!(
                "user lookup returned {status}"
            )));
        }

        let payload: UserLookupResponse = response.json().await?;
        payload
            .into_profile()
            .ok_or_else(|| ResolveError::NotFound(screen_name.to_string()))
    }
}
