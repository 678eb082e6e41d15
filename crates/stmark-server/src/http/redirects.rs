// SPDX-License-Identifier: Apache-2.0

//! Blog redirect glue. The two redirect views differ on purpose: one looks
//! at every blog index, the other only at live ones.

use crate::AppState;
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use stmark_model::{first_page_of_kind, LiveFilter, PageKind};
use tracing::warn;

const FALLBACK_LOCATION: &str = "/";

fn found(location: &str) -> Response {
    let value = HeaderValue::from_str(location)
        .unwrap_or_else(|_| HeaderValue::from_static(FALLBACK_LOCATION));
    (StatusCode::FOUND, [(LOCATION, value)]).into_response()
}

/// URL of the first blog index under `filter`, or `/` when there is none or
/// the store cannot be read.
async fn blog_index_location(state: &AppState, filter: LiveFilter) -> String {
    match state.store.fetch_pages().await {
        Ok(pages) => first_page_of_kind(&pages, PageKind::BlogIndex, filter)
            .map_or_else(|| FALLBACK_LOCATION.to_string(), |page| page.url().to_string()),
        Err(e) => {
            warn!(backend = state.store.backend_tag(), error = %e, "blog index lookup failed");
            FALLBACK_LOCATION.to_string()
        }
    }
}

pub(crate) async fn redirect_to_news(State(state): State<AppState>) -> Response {
    found(&blog_index_location(&state, LiveFilter::Any).await)
}

pub(crate) async fn news_redirect_view(State(state): State<AppState>) -> Response {
    found(&blog_index_location(&state, LiveFilter::LiveOnly).await)
}

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="0; url=/blogs/">
<title>News | St. Mark University</title>
</head>
<body>
<p>Taking you to the latest news. <a href="/blogs/">Continue to news</a>.</p>
</body>
</html>
"#;

pub(crate) async fn news_landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
