// SPDX-License-Identifier: Apache-2.0

use super::{PageStoreBackend, StoreError};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use stmark_model::{BlockRegistry, Page};

/// Pages exported from the CMS as a JSON array. The file is re-read on every
/// fetch, so an export can be swapped without a restart.
pub struct JsonFilePageStore {
    path: PathBuf,
    registry: Arc<BlockRegistry>,
}

impl JsonFilePageStore {
    #[must_use]
    pub fn new(path: PathBuf, registry: Arc<BlockRegistry>) -> Self {
        Self { path, registry }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Page>, StoreError> {
        let pages: Vec<Page> = serde_json::from_slice(bytes).map_err(|e| {
            StoreError(format!("page export {} is not valid: {e}", self.path.display()))
        })?;
        let mut ids = BTreeSet::new();
        for page in &pages {
            if !ids.insert(page.id) {
                return Err(StoreError(format!("duplicate page id {}", page.id)));
            }
            page.validate(&self.registry)
                .map_err(|e| StoreError(format!("page {} failed validation: {e}", page.id)))?;
        }
        Ok(pages)
    }
}

#[async_trait]
impl PageStoreBackend for JsonFilePageStore {
    fn backend_tag(&self) -> &'static str {
        "json-file"
    }

    async fn fetch_pages(&self) -> Result<Vec<Page>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError(format!("page export read failed: {e}")))?;
        self.decode(&bytes)
    }
}
