// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

/// Where an endpoint's response comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// Hand-authored constants; identical on every call.
    Static,
    /// Computed from the page store at request time.
    PageStore,
    /// Echoes the client's JSON body after logging it.
    Echo,
    /// HTTP redirect resolved against the page store.
    Redirect,
    /// Block registry introspection.
    Schema,
    /// Liveness check, no envelope.
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointSpec {
    pub method: &'static str,
    pub path: &'static str,
    #[serde(rename = "content_source")]
    pub source: ContentSource,
    pub name: &'static str,
}

const fn ep(
    method: &'static str,
    path: &'static str,
    source: ContentSource,
    name: &'static str,
) -> EndpointSpec {
    EndpointSpec {
        method,
        path,
        source,
        name,
    }
}

pub const ENDPOINTS: &[EndpointSpec] = &[
    ep("GET", "/healthz", ContentSource::Health, "healthz"),
    ep("GET", "/api/navigation/", ContentSource::Static, "navigation_links"),
    ep("GET", "/api/social/stats/", ContentSource::Static, "social_stats"),
    ep("GET", "/api/hero-content/", ContentSource::Static, "hero_content"),
    ep("POST", "/api/hero-content/", ContentSource::Echo, "hero_navigation"),
    ep("GET", "/api/hero-navigation/", ContentSource::Static, "hero_content"),
    ep("POST", "/api/hero-navigation/", ContentSource::Echo, "hero_navigation"),
    ep("GET", "/api/site-info/", ContentSource::Static, "site_info"),
    ep("GET", "/api/statistics/", ContentSource::Static, "site_statistics"),
    ep("POST", "/api/quick-links-click/", ContentSource::Echo, "quick_links_click"),
    ep("GET", "/api/welcome-section/", ContentSource::Static, "welcome_content"),
    ep("POST", "/api/welcome-section/", ContentSource::Echo, "welcome_action"),
    ep("GET", "/api/news/", ContentSource::Static, "news"),
    ep("GET", "/api/events/", ContentSource::Static, "events"),
    ep("GET", "/api/gallery/", ContentSource::Static, "gallery"),
    ep("GET", "/api/testimonials/", ContentSource::Static, "testimonials"),
    ep("GET", "/api/blog/stats/", ContentSource::PageStore, "blog_stats"),
    ep("POST", "/api/blog/click/", ContentSource::Echo, "blog_click"),
    ep("GET", "/api/blocks/", ContentSource::Schema, "block_schemas"),
    ep("GET", "/api/blocks/{block_type}/", ContentSource::Schema, "block_schema"),
    ep(
        "POST",
        "/api/blocks/{block_type}/validate/",
        ContentSource::Schema,
        "block_validate",
    ),
    ep("GET", "/api/pages/{page_id}/", ContentSource::PageStore, "page_projection"),
    ep("GET", "/api/endpoints/", ContentSource::Static, "endpoint_catalog"),
    ep("GET", "/news/redirect/", ContentSource::Redirect, "redirect_to_news"),
    ep("GET", "/blogs/", ContentSource::Redirect, "news_redirect_view"),
    ep("GET", "/news/landing/", ContentSource::Redirect, "news_landing_page"),
];

#[must_use]
pub fn endpoint_catalog() -> &'static [EndpointSpec] {
    ENDPOINTS
}
