//! HTTP response building module
//!
//! All gateway responses are JSON and every one of them, success or failure,
//! carries `Access-Control-Allow-Origin: *` so browser front-ends can call
//! the endpoint directly.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Build a JSON response with CORS headers.
///
/// HEAD requests get the full Content-Length but an empty body.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return fallback_error_response();
        }
    };

    let content_length = json.len();
    let bytes = if is_head { Bytes::new() } else { Bytes::from(json) };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(bytes))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            fallback_error_response()
        })
}

/// Build an error response body `{"error": <message>}`
pub fn error_response(status: StatusCode, message: &str, is_head: bool) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    json_response(status, &body, is_head)
}

/// Build a health check response
pub fn build_health_response(is_head: bool) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "status": "ok" });
    json_response(StatusCode::OK, &body, is_head)
}

/// Build OPTIONS response (CORS preflight)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build OPTIONS response: {e}"));
            fallback_error_response()
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut response = error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed",
        false,
    );
    if let Ok(allow) = "GET, HEAD, OPTIONS".parse() {
        response.headers_mut().insert("Allow", allow);
    }
    response
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    error_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        "Request body too large",
        false,
    )
}

/// Last-resort response when a builder itself fails
fn fallback_error_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(
        r#"{"error":"Internal server error"}"#,
    )));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn test_json_response_carries_cors_header() {
        let response = json_response(StatusCode::OK, &Sample { value: 7 }, false);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        assert_eq!(
            response
                .headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_head_keeps_content_length_with_empty_body() {
        let response = json_response(StatusCode::OK, &Sample { value: 7 }, true);
        let declared = response
            .headers()
            .get("Content-Length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or_default();
        assert!(declared > 0);
    }

    #[test]
    fn test_error_response_shape() {
        let response = error_response(StatusCode::BAD_REQUEST, "nope", false);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_options_preflight() {
        let response = build_options_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().contains_key("Access-Control-Allow-Methods"));
    }

    #[test]
    fn test_405_sets_allow_header() {
        let response = build_405_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get("Allow").and_then(|v| v.to_str().ok()),
            Some("GET, HEAD, OPTIONS")
        );
    }
}
