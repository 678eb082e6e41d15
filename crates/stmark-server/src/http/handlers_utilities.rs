// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use stmark_api::{map_error, parse_json_body, ApiEnvelope, ApiError, BodyError, JsonBody};
use tracing::{debug, warn};

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

pub(crate) fn api_error_response(err: &ApiError) -> Response {
    let status = StatusCode::from_u16(map_error(err).status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(code = err.code.as_str(), message = %err.message, "request failed");
    }
    (status, Json(err.envelope())).into_response()
}

pub(crate) fn body_error_response(
    err: BodyError,
    unexpected: impl FnOnce(&str) -> ApiError,
) -> Response {
    api_error_response(&err.into_api_error(unexpected))
}

/// Buffering failures, including the configured body limit, still answer
/// with an error envelope.
pub(crate) fn body_rejection_response(rejection: BytesRejection) -> Response {
    debug!(
        status = rejection.status().as_u16(),
        reason = %rejection.body_text(),
        "request body rejected"
    );
    let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large()
    } else {
        ApiError::invalid_json()
    };
    api_error_response(&err)
}

pub(crate) fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, Response> {
    body.map_err(body_rejection_response)
}

/// Buffered JSON object body, or the error response to send instead.
pub(crate) fn read_json_body(
    body: Result<Bytes, BytesRejection>,
    unexpected: impl FnOnce(&str) -> ApiError,
) -> Result<JsonBody, Response> {
    let bytes = read_body(body)?;
    parse_json_body(&bytes).map_err(|e| body_error_response(e, unexpected))
}

pub(crate) fn envelope_response<T: Serialize>(envelope: &ApiEnvelope<T>) -> Response {
    (StatusCode::OK, Json(envelope)).into_response()
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

pub(crate) fn put_cache_headers(headers: &mut HeaderMap, ttl: Duration, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl.as_secs())) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

/// Serializes a static envelope with a content etag; a matching
/// `if-none-match` short-circuits to 304.
pub(crate) fn cached_envelope_response<T: Serialize>(
    state: &AppState,
    headers: &HeaderMap,
    envelope: &ApiEnvelope<T>,
) -> Response {
    let body = match serde_json::to_vec(envelope) {
        Ok(body) => body,
        Err(e) => return api_error_response(&ApiError::internal(e.to_string())),
    };
    let etag = format!("\"{}\"", sha256_hex(&body));
    if if_none_match(headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), state.api.static_ttl, &etag);
        return resp;
    }
    let mut resp = (
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response();
    put_cache_headers(resp.headers_mut(), state.api.static_ttl, &etag);
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn error_status_follows_the_error_mapping() {
        let resp = api_error_response(&ApiError::invalid_json());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = api_error_response(&ApiError::timeout());
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
