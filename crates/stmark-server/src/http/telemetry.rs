// SPDX-License-Identifier: Apache-2.0

//! Interaction endpoints. Bodies are logged and echoed; nothing is stored.

use super::handlers_utilities::{api_error_response, envelope_response, read_json_body};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::response::Response;
use stmark_api::content::{
    CLICK_TRACKED_MESSAGE, HERO_NAVIGATION_MESSAGE, HIGHLIGHT_MESSAGE, NAVIGATE_MESSAGE,
};
use stmark_api::{
    navigation_target_url, ApiEnvelope, ApiError, BlogClickEcho,
    HeroNavigationEcho, HighlightInteractionEcho, QuickLinkClickEcho, WelcomeAction,
    WelcomeNavigateEcho,
};
use serde_json::Value;
use std::borrow::Cow;
use tracing::info;

pub(crate) const TELEMETRY_TARGET: &str = "stmark_telemetry";

/// Log rendering of an echoed value: strings bare, anything else as JSON.
fn shown(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

pub(crate) async fn hero_navigation_handler(body: Result<Bytes, BytesRejection>) -> Response {
    let body = match read_json_body(body, |d| ApiError::unexpected(d)) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let echo = HeroNavigationEcho {
        destination: body.text("destination"),
        timestamp: body.text("timestamp"),
    };
    info!(
        target: TELEMETRY_TARGET,
        kind = "hero_navigation",
        destination = %shown(&echo.destination),
        timestamp = %shown(&echo.timestamp),
        "hero navigation"
    );
    envelope_response(&ApiEnvelope::success(echo).with_message(HERO_NAVIGATION_MESSAGE))
}

pub(crate) async fn quick_links_click_handler(body: Result<Bytes, BytesRejection>) -> Response {
    let body = match read_json_body(body, |d| ApiError::unexpected(d)) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let echo = QuickLinkClickEcho {
        title: body.text("title"),
        url: body.text("url"),
        timestamp: body.text("timestamp"),
    };
    // userAgent and referrer are logged, never echoed.
    info!(
        target: TELEMETRY_TARGET,
        kind = "quick_link_click",
        title = %shown(&echo.title),
        url = %shown(&echo.url),
        timestamp = %shown(&echo.timestamp),
        user_agent = %shown(&body.text("userAgent")),
        referrer = %shown(&body.text("referrer")),
        "quick link click"
    );
    envelope_response(&ApiEnvelope::success(echo).with_message(CLICK_TRACKED_MESSAGE))
}

pub(crate) async fn welcome_action_handler(body: Result<Bytes, BytesRejection>) -> Response {
    let body = match read_json_body(body, |d| ApiError::unexpected(d)) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let action = match WelcomeAction::parse(body.str_or_empty("action")) {
        Ok(action) => action,
        Err(err) => return api_error_response(&err),
    };
    match action {
        WelcomeAction::Navigate => {
            let target = body.text("target");
            let url = navigation_target_url(target.as_str().unwrap_or(""));
            let echo = WelcomeNavigateEcho {
                target,
                url,
                timestamp: body.text("timestamp"),
            };
            info!(
                target: TELEMETRY_TARGET,
                kind = "welcome_navigate",
                destination = %shown(&echo.target),
                url,
                timestamp = %shown(&echo.timestamp),
                "welcome navigation"
            );
            envelope_response(&ApiEnvelope::success(echo).with_message(NAVIGATE_MESSAGE))
        }
        WelcomeAction::HighlightInteraction => {
            let echo = HighlightInteractionEcho {
                highlight_index: body.index("highlightIndex"),
                timestamp: body.text("timestamp"),
            };
            info!(
                target: TELEMETRY_TARGET,
                kind = "welcome_highlight",
                highlight_index = %shown(&echo.highlight_index),
                timestamp = %shown(&echo.timestamp),
                "welcome highlight interaction"
            );
            envelope_response(&ApiEnvelope::success(echo).with_message(HIGHLIGHT_MESSAGE))
        }
    }
}

pub(crate) async fn blog_click_handler(body: Result<Bytes, BytesRejection>) -> Response {
    let body = match read_json_body(body, |d| ApiError::internal(d)) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let echo = BlogClickEcho {
        post_url: body.text("post_url"),
        post_title: body.text("post_title"),
    };
    info!(
        target: TELEMETRY_TARGET,
        kind = "blog_click",
        post_url = %shown(&echo.post_url),
        post_title = %shown(&echo.post_title),
        "blog post click"
    );
    envelope_response(&ApiEnvelope::success(echo).with_message(CLICK_TRACKED_MESSAGE))
}
