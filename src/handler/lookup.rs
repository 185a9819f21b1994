//! Profile lookup endpoint module
//!
//! Reads the `username` query parameter, normalizes it, resolves the profile
//! through a fresh guest session, and shapes the JSON response. The returned
//! image URL is the high-resolution variant: the `_normal` marker the
//! platform puts in avatar URLs is stripped out.

use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::AppState;
use crate::http::{error_response, json_response};
use crate::logger;
use crate::resolver::{self, ResolveError, UserProfile};
use crate::username::{self, UsernameError};

/// Successful lookup response body
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProfileResponse {
    pub pfp_url: String,
    pub name: String,
    pub handle: String,
}

/// Handle `GET /?username=<handle or profile URL>`
pub async fn handle_lookup(
    query: Option<&str>,
    is_head: bool,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let Some(raw) = username_param(query) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            &UsernameError::Missing.to_string(),
            is_head,
        );
    };

    let username = match username::normalize(&raw) {
        Ok(username) => username,
        Err(err) => {
            logger::log_warning(&format!("Rejected username input '{raw}': {err}"));
            return error_response(StatusCode::BAD_REQUEST, &err.to_string(), is_head);
        }
    };

    logger::log_lookup(&username);
    match resolver::resolve(&state.config.upstream, &username).await {
        Ok(profile) => json_response(
            StatusCode::OK,
            &profile_response(&username, profile),
            is_head,
        ),
        Err(err) => {
            logger::log_lookup_failed(&username, &err.to_string());
            error_response(resolve_status(&err), &resolve_message(&err), is_head)
        }
    }
}

/// Extract the first non-blank `username` query value.
///
/// Blank values are treated the same as a missing parameter.
fn username_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == "username" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Shape the success body: strip the low-resolution marker and prefix the
/// handle. The screen name falls back to the requested username when the
/// upstream omits it.
fn profile_response(requested: &str, profile: UserProfile) -> ProfileResponse {
    let screen_name = if profile.screen_name.is_empty() {
        requested.to_string()
    } else {
        profile.screen_name
    };

    ProfileResponse {
        pfp_url: profile.profile_image_url.replace("_normal", ""),
        name: profile.name,
        handle: format!("@{screen_name}"),
    }
}

const fn resolve_status(err: &ResolveError) -> StatusCode {
    match err {
        ResolveError::NotFound(_) => StatusCode::NOT_FOUND,
        ResolveError::Activation(_)
        | ResolveError::Transport(_)
        | ResolveError::UnexpectedPayload(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn resolve_message(err: &ResolveError) -> String {
    match err {
        // These two are surfaced verbatim
        ResolveError::Activation(_) | ResolveError::NotFound(_) => err.to_string(),
        ResolveError::Transport(e) => format!("Internal server error: {e}"),
        ResolveError::UnexpectedPayload(detail) => format!("Internal server error: {detail}"),
    }
}
