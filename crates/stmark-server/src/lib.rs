// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use stmark_model::{BlockRegistry, SchemaError};

mod config;
mod http;
mod middleware;
mod store;

pub use config::{validate_startup_config, ApiConfig, DEFAULT_BIND_ADDR};
pub use store::json_file::JsonFilePageStore;
pub use store::memory::InMemoryPageStore;
pub use store::{PageStoreBackend, StoreError};

pub const CRATE_NAME: &str = "stmark-server";

/// Per-request handle on the shared service state. Cloning is cheap; the
/// registry and store are shared, never copied.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<BlockRegistry>,
    pub store: Arc<dyn PageStoreBackend>,
    pub api: ApiConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Arc<BlockRegistry>, store: Arc<dyn PageStoreBackend>) -> Self {
        Self::with_config(registry, store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(
        registry: Arc<BlockRegistry>,
        store: Arc<dyn PageStoreBackend>,
        api: ApiConfig,
    ) -> Self {
        Self {
            registry,
            store,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Standard block registry over the built-in in-memory site.
    pub fn standard() -> Result<Self, SchemaError> {
        let registry = Arc::new(BlockRegistry::standard()?);
        let store = Arc::new(InMemoryPageStore::default_site(&registry));
        Ok(Self::new(registry, store))
    }
}

pub fn build_router(state: AppState) -> Router {
    use crate::http::{content, pages, redirects, schema, telemetry};
    use crate::middleware::request_tracing::request_tracing_middleware;
    use crate::middleware::timeout::request_timeout_middleware;

    Router::new()
        .route("/healthz", get(content::healthz_handler))
        .route("/api/navigation/", get(content::navigation_handler))
        .route("/api/social/stats/", get(content::social_stats_handler))
        .route(
            "/api/hero-content/",
            get(content::hero_content_handler).post(telemetry::hero_navigation_handler),
        )
        .route(
            "/api/hero-navigation/",
            get(content::hero_content_handler).post(telemetry::hero_navigation_handler),
        )
        .route("/api/site-info/", get(content::site_info_handler))
        .route("/api/statistics/", get(content::statistics_handler))
        .route(
            "/api/quick-links-click/",
            post(telemetry::quick_links_click_handler),
        )
        .route(
            "/api/welcome-section/",
            get(content::welcome_content_handler).post(telemetry::welcome_action_handler),
        )
        .route("/api/news/", get(content::news_handler))
        .route("/api/events/", get(content::events_handler))
        .route("/api/gallery/", get(content::gallery_handler))
        .route("/api/testimonials/", get(content::testimonials_handler))
        .route("/api/blog/stats/", get(pages::blog_stats_handler))
        .route("/api/blog/click/", post(telemetry::blog_click_handler))
        .route("/api/blocks/", get(schema::block_schemas_handler))
        .route("/api/blocks/:block_type/", get(schema::block_schema_handler))
        .route(
            "/api/blocks/:block_type/validate/",
            post(schema::block_validate_handler),
        )
        .route("/api/pages/:page_id/", get(pages::page_handler))
        .route("/api/endpoints/", get(content::endpoints_handler))
        .route("/news/redirect/", get(redirects::redirect_to_news))
        .route("/blogs/", get(redirects::news_redirect_view))
        .route("/news/landing/", get(redirects::news_landing_page))
        .layer(from_fn_with_state(state.clone(), request_timeout_middleware))
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
