// SPDX-License-Identifier: Apache-2.0

use super::{PageStoreBackend, StoreError};
use async_trait::async_trait;
use stmark_model::{BlockRegistry, BlockType, Page, PageKind, StreamBlock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// Page store held in process memory. Also the test double for the file
/// backend: reads can be delayed or made to fail.
#[derive(Default)]
pub struct InMemoryPageStore {
    pages: RwLock<Vec<Page>>,
    unavailable: AtomicBool,
    read_delay: Duration,
}

impl InMemoryPageStore {
    #[must_use]
    pub fn with_pages(pages: Vec<Page>) -> Self {
        Self {
            pages: RwLock::new(pages),
            ..Self::default()
        }
    }

    /// A live home page whose body is one welcome section built from the
    /// schema defaults.
    #[must_use]
    pub fn default_site(registry: &BlockRegistry) -> Self {
        let mut home = Page::new(1, PageKind::Home, "Home", "/");
        if let Some(schema) = registry.schema(BlockType::WelcomeSection) {
            if let Ok(block) = StreamBlock::new(BlockType::WelcomeSection, schema.default_value()) {
                home = home.with_block(block);
            }
        }
        Self::with_pages(vec![home])
    }

    #[must_use]
    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    pub async fn insert(&self, page: Page) {
        let mut pages = self.pages.write().await;
        pages.retain(|p| p.id != page.id);
        pages.push(page);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }
}

#[async_trait]
impl PageStoreBackend for InMemoryPageStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn fetch_pages(&self) -> Result<Vec<Page>, StoreError> {
        if !self.read_delay.is_zero() {
            tokio::time::sleep(self.read_delay).await;
        }
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError("page store unavailable".to_string()));
        }
        Ok(self.pages.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_replaces_pages_with_the_same_id() {
        let store = InMemoryPageStore::default();
        store
            .insert(Page::new(4, PageKind::Blog, "First", "/blog/first/"))
            .await;
        store
            .insert(Page::new(4, PageKind::Blog, "Renamed", "/blog/first/"))
            .await;
        let pages = store.fetch_pages().await.expect("pages");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "Renamed");
    }

    #[tokio::test]
    async fn default_site_is_a_valid_live_home_page() {
        let registry = BlockRegistry::standard().expect("registry");
        let store = InMemoryPageStore::default_site(&registry);
        let pages = store.fetch_pages().await.expect("pages");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].live);
        assert_eq!(pages[0].body.len(), 1);
        pages[0].validate(&registry).expect("valid home page");
    }

    #[tokio::test]
    async fn unavailable_store_reports_an_error() {
        let store = InMemoryPageStore::default();
        store.set_unavailable(true);
        let err = store.fetch_pages().await.expect_err("unavailable");
        assert!(err.to_string().contains("unavailable"));
    }
}
