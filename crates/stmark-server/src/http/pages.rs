// SPDX-License-Identifier: Apache-2.0

use super::handlers_utilities::{api_error_response, envelope_response};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use stmark_api::{ApiEnvelope, ApiError, BlogStats, PageProjection, ProjectedBlock};
use stmark_model::{count_pages, find_page, BlockRegistry, LiveFilter, Page, PageId, PageKind};

/// Number of figures in the blog stats payload.
const BLOG_STATS_FIELDS: usize = 2;

pub(crate) async fn blog_stats_handler(State(state): State<AppState>) -> Response {
    let pages = match state.store.fetch_pages().await {
        Ok(pages) => pages,
        Err(e) => return api_error_response(&ApiError::internal(e.to_string())),
    };
    let stats = BlogStats {
        total_posts: count_pages(&pages, PageKind::Blog, LiveFilter::LiveOnly),
        total_indexes: count_pages(&pages, PageKind::BlogIndex, LiveFilter::LiveOnly),
    };
    envelope_response(&ApiEnvelope::success(stats).with_count(BLOG_STATS_FIELDS))
}

pub(crate) fn project_page(page: &Page, registry: &BlockRegistry) -> PageProjection {
    let body = page
        .blocks()
        .map(|(block_type, block)| ProjectedBlock {
            block_type,
            value: registry
                .schema(block_type)
                .map(|schema| schema.with_defaults(block.value(), registry))
                .unwrap_or_else(|| block.value().clone()),
        })
        .collect();
    PageProjection {
        id: page.id,
        kind: page.kind,
        title: page.title.clone(),
        url: page.url().to_string(),
        subtitle: page.subtitle.clone(),
        live: page.live,
        body,
    }
}

pub(crate) async fn page_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(id) = raw_id.parse::<u64>() else {
        return api_error_response(&ApiError::page_not_found(&raw_id));
    };
    let pages = match state.store.fetch_pages().await {
        Ok(pages) => pages,
        Err(e) => return api_error_response(&ApiError::internal(e.to_string())),
    };
    match find_page(&pages, PageId(id)) {
        Some(page) => {
            let count = page.body.len();
            envelope_response(
                &ApiEnvelope::success(project_page(page, &state.registry)).with_count(count),
            )
        }
        None => api_error_response(&ApiError::page_not_found(&raw_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stmark_model::{BlockType, StreamBlock};

    #[test]
    fn projection_fills_defaults_and_keeps_block_order() {
        let registry = BlockRegistry::standard().expect("registry");
        let mut news = serde_json::Map::new();
        news.insert("items".to_string(), json!([]));
        let page = Page::new(3, PageKind::Home, "Home", "/")
            .with_block(StreamBlock::new(BlockType::NewsSection, news).expect("news"))
            .with_block(
                StreamBlock::new(BlockType::Gallery, serde_json::Map::new()).expect("gallery"),
            );
        let projected = project_page(&page, &registry);
        assert_eq!(projected.body.len(), 2);
        assert_eq!(projected.body[0].block_type, BlockType::NewsSection);
        assert_eq!(projected.body[0].value["heading"], "Latest News");
        assert_eq!(projected.body[1].value["heading"], "Campus Gallery");
    }
}
