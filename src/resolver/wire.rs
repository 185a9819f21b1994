//! Upstream wire format module
//!
//! Serde models for the guest activation response and the GraphQL user
//! lookup payload. Only the fields the gateway consumes are modeled; the
//! rest of the payload is ignored.

use serde::Deserialize;

use super::UserProfile;

/// Feature switches the GraphQL user lookup endpoint expects on every call
pub const LOOKUP_FEATURES: &str = r#"{"hidden_profile_likes_enabled":false,"highlights_tweets_tab_ui_enabled":true,"creator_subscriptions_tweet_preview_api_enabled":true,"responsive_web_graphql_exclude_directive_enabled":true,"verified_phone_label_enabled":false,"subscriptions_verification_info_is_identity_verified_enabled":false,"subscriptions_verification_info_verified_since_enabled":true,"responsive_web_graphql_skip_user_profile_image_extensions_enabled":false,"responsive_web_graphql_timeline_navigation_enabled":true}"#;

/// Response body of the guest token activation endpoint
#[derive(Debug, Deserialize)]
pub struct GuestTokenResponse {
    pub guest_token: String,
}

/// Top-level GraphQL user lookup response
#[derive(Debug, Deserialize)]
pub struct UserLookupResponse {
    #[serde(default)]
    data: Option<LookupData>,
}

#[derive(Debug, Deserialize)]
struct LookupData {
    #[serde(default)]
    user: Option<UserEnvelope>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    result: Option<UserResult>,
}

#[derive(Debug, Deserialize)]
struct UserResult {
    #[serde(rename = "__typename", default)]
    typename: Option<String>,
    #[serde(default)]
    legacy: Option<LegacyUser>,
}

/// The pre-GraphQL "legacy" user object carrying the profile fields
#[derive(Debug, Deserialize)]
struct LegacyUser {
    #[serde(default)]
    name: String,
    #[serde(default)]
    screen_name: String,
    #[serde(default)]
    profile_image_url_https: String,
}

impl UserLookupResponse {
    /// Extract the profile fields, or `None` when the payload carries no
    /// usable user (unknown name, suspended, or access-restricted account).
    pub fn into_profile(self) -> Option<UserProfile> {
        let result = self.data?.user?.result?;
        if result.typename.as_deref() == Some("UserUnavailable") {
            return None;
        }
        let legacy = result.legacy?;
        Some(UserProfile {
            name: legacy.name,
            screen_name: legacy.screen_name,
            profile_image_url: legacy.profile_image_url_https,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_user_payload() {
        let payload = r#"{
            "data": {
                "user": {
                    "result": {
                        "__typename": "User",
                        "rest_id": "12",
                        "legacy": {
                            "name": "jack",
                            "screen_name": "jack",
                            "profile_image_url_https": "https://pbs.twimg.com/profile_images/1/photo_normal.jpg",
                            "followers_count": 6000000
                        }
                    }
                }
            }
        }"#;
        let response: UserLookupResponse = serde_json::from_str(payload).expect("valid JSON");
        let profile = response.into_profile().expect("user present");
        assert_eq!(profile.name, "jack");
        assert_eq!(profile.screen_name, "jack");
        assert_eq!(
            profile.profile_image_url,
            "https://pbs.twimg.com/profile_images/1/photo_normal.jpg"
        );
    }

    #[test]
    fn test_missing_user_payload() {
        let response: UserLookupResponse =
            serde_json::from_str(r#"{"data":{}}"#).expect("valid JSON");
        assert_eq!(response.into_profile(), None);
    }

    #[test]
    fn test_empty_payload() {
        let response: UserLookupResponse = serde_json::from_str("{}").expect("valid JSON");
        assert_eq!(response.into_profile(), None);
    }

    #[test]
    fn test_unavailable_user_payload() {
        let payload = r#"{
            "data": {
                "user": {
                    "result": {
                        "__typename": "UserUnavailable",
                        "reason": "Suspended"
                    }
                }
            }
        }"#;
        let response: UserLookupResponse = serde_json::from_str(payload).expect("valid JSON");
        assert_eq!(response.into_profile(), None);
    }

    #[test]
    fn test_guest_token_payload() {
        let response: GuestTokenResponse =
            serde_json::from_str(r#"{"guest_token":"1700000000000"}"#).expect("valid JSON");
        assert_eq!(response.guest_token, "1700000000000");
    }

    #[test]
    fn test_lookup_features_are_valid_json() {
        let parsed: serde_json::Value =
            serde_json::from_str(LOOKUP_FEATURES).expect("features constant must be JSON");
        assert!(parsed.is_object());
    }
}
