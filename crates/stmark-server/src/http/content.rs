// SPDX-License-Identifier: Apache-2.0

//! Static content endpoints. Payloads are constants; only the query string of
//! social stats changes the shape.

use super::handlers_utilities::cached_envelope_response;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use stmark_api::content::{
    self, HERO_CONTENT_MESSAGE, SITE_INFO_MESSAGE, STATISTICS_MESSAGE, WELCOME_CONTENT_MESSAGE,
};
use stmark_api::{endpoint_catalog, ApiEnvelope, SocialStats, SocialStatsFormat};

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn navigation_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let links = content::navigation_links();
    let count = links.len();
    cached_envelope_response(&state, &headers, &ApiEnvelope::success(links).with_count(count))
}

pub(crate) async fn social_stats_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    match SocialStatsFormat::parse(params.get("format").map(String::as_str)) {
        SocialStatsFormat::Simple => cached_envelope_response(
            &state,
            &headers,
            &ApiEnvelope::success(content::social_stats_summary()),
        ),
        SocialStatsFormat::Full => cached_envelope_response(
            &state,
            &headers,
            &ApiEnvelope::success(content::social_stats()).with_count(SocialStats::PLATFORM_COUNT),
        ),
    }
}

pub(crate) async fn hero_content_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let envelope = ApiEnvelope::success(content::hero_content()).with_message(HERO_CONTENT_MESSAGE);
    cached_envelope_response(&state, &headers, &envelope)
}

pub(crate) async fn site_info_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let envelope = ApiEnvelope::success(content::site_info()).with_message(SITE_INFO_MESSAGE);
    cached_envelope_response(&state, &headers, &envelope)
}

pub(crate) async fn statistics_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let envelope =
        ApiEnvelope::success(content::site_statistics()).with_message(STATISTICS_MESSAGE);
    cached_envelope_response(&state, &headers, &envelope)
}

pub(crate) async fn welcome_content_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let envelope = ApiEnvelope::success(content::welcome_content(&state.registry))
        .with_message(WELCOME_CONTENT_MESSAGE);
    cached_envelope_response(&state, &headers, &envelope)
}

fn counted<T: serde::Serialize>(state: &AppState, headers: &HeaderMap, items: Vec<T>) -> Response {
    let count = items.len();
    cached_envelope_response(state, headers, &ApiEnvelope::success(items).with_count(count))
}

pub(crate) async fn news_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    counted(&state, &headers, content::news_items())
}

pub(crate) async fn events_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    counted(&state, &headers, content::events())
}

pub(crate) async fn gallery_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    counted(&state, &headers, content::gallery_images())
}

pub(crate) async fn testimonials_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    counted(&state, &headers, content::testimonials())
}

pub(crate) async fn endpoints_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    counted(&state, &headers, endpoint_catalog().to_vec())
}
