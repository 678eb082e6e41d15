// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use stmark_model::Page;

pub(crate) mod json_file;
pub(crate) mod memory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(pub String);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Read side of the CMS page tree.
///
/// Every call returns a fresh snapshot; callers never hold pages across
/// requests.
#[async_trait]
pub trait PageStoreBackend: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    async fn fetch_pages(&self) -> Result<Vec<Page>, StoreError>;
}
