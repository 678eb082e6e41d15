// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Site content model SSOT.
//!
//! Block schemas describe the shape of every structured content unit the CMS
//! can store; the registry is built once at startup and shared by reference.
//! Pages hold an ordered stream of tagged blocks.
//!
//! ```compile_fail
//! use stmark_model::PageKind;
//!
//! fn exhaustive_match(k: PageKind) -> &'static str {
//!     match k {
//!         PageKind::Home => "h",
//!         PageKind::BlogIndex => "i",
//!     }
//! }
//! ```

mod block;
mod page;
mod registry;

pub use block::{
    BlockSchema, BlockType, BlockValidationError, FieldKind, FieldSpec, FieldViolation,
    StructValue, ValidationError,
};
pub use page::{
    count_pages, find_page, first_page_of_kind, LiveFilter, Page, PageId, PageKind, StreamBlock,
    SUBTITLE_MAX_LEN,
};
pub use registry::{BlockRegistry, SchemaError};

pub const CRATE_NAME: &str = "stmark-model";
