// SPDX-License-Identifier: Apache-2.0

use crate::block::{
    BlockType, BlockValidationError, FieldViolation, StructValue, ValidationError,
};
use crate::registry::BlockRegistry;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const SUBTITLE_MAX_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl Display for PageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum PageKind {
    Home,
    BlogIndex,
    Blog,
}

impl PageKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::BlogIndex => "blog_index",
            Self::Blog => "blog",
        }
    }

    /// Block types a page of this kind may hold in its body.
    #[must_use]
    pub const fn allowed_blocks(self) -> &'static [BlockType] {
        match self {
            Self::Home => &[
                BlockType::WelcomeSection,
                BlockType::Highlight,
                BlockType::NewsSection,
                BlockType::EventSection,
                BlockType::Gallery,
                BlockType::Testimonials,
            ],
            Self::BlogIndex => &[],
            Self::Blog => &[
                BlockType::BlogContent,
                BlockType::BlogImage,
                BlockType::BlogQuote,
            ],
        }
    }

    #[must_use]
    pub fn admits(self, block_type: BlockType) -> bool {
        self.allowed_blocks().contains(&block_type)
    }
}

/// One entry of a page body: the block tag travels with its value, so
/// consumers match on the variant instead of inspecting the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StreamBlock {
    WelcomeSection(StructValue),
    Highlight(StructValue),
    NewsSection(StructValue),
    EventSection(StructValue),
    Gallery(StructValue),
    Testimonials(StructValue),
    BlogContent(StructValue),
    BlogImage(StructValue),
    BlogQuote(StructValue),
}

impl StreamBlock {
    /// Wraps `value` in the variant for `block_type`. Item blocks that only
    /// appear nested inside sections are rejected.
    pub fn new(block_type: BlockType, value: StructValue) -> Result<Self, ValidationError> {
        Ok(match block_type {
            BlockType::WelcomeSection => Self::WelcomeSection(value),
            BlockType::Highlight => Self::Highlight(value),
            BlockType::NewsSection => Self::NewsSection(value),
            BlockType::EventSection => Self::EventSection(value),
            BlockType::Gallery => Self::Gallery(value),
            BlockType::Testimonials => Self::Testimonials(value),
            BlockType::BlogContent => Self::BlogContent(value),
            BlockType::BlogImage => Self::BlogImage(value),
            BlockType::BlogQuote => Self::BlogQuote(value),
            BlockType::NewsItem
            | BlockType::EventItem
            | BlockType::GalleryImage
            | BlockType::Testimonial => {
                return Err(ValidationError(format!(
                    "{block_type} is not a top-level stream block"
                )))
            }
        })
    }

    #[must_use]
    pub const fn block_type(&self) -> BlockType {
        match self {
            Self::WelcomeSection(_) => BlockType::WelcomeSection,
            Self::Highlight(_) => BlockType::Highlight,
            Self::NewsSection(_) => BlockType::NewsSection,
            Self::EventSection(_) => BlockType::EventSection,
            Self::Gallery(_) => BlockType::Gallery,
            Self::Testimonials(_) => BlockType::Testimonials,
            Self::BlogContent(_) => BlockType::BlogContent,
            Self::BlogImage(_) => BlockType::BlogImage,
            Self::BlogQuote(_) => BlockType::BlogQuote,
        }
    }

    #[must_use]
    pub const fn value(&self) -> &StructValue {
        match self {
            Self::WelcomeSection(v)
            | Self::Highlight(v)
            | Self::NewsSection(v)
            | Self::EventSection(v)
            | Self::Gallery(v)
            | Self::Testimonials(v)
            | Self::BlogContent(v)
            | Self::BlogImage(v)
            | Self::BlogQuote(v) => v,
        }
    }
}

fn default_live() -> bool {
    true
}

/// A CMS page as read by this service. Editing happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub kind: PageKind,
    pub title: String,
    pub url_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default = "default_live")]
    pub live: bool,
    /// Ordering among pages; lower comes first.
    #[serde(default)]
    pub tree_position: u32,
    #[serde(default)]
    pub body: Vec<StreamBlock>,
}

impl Page {
    #[must_use]
    pub fn new(id: u64, kind: PageKind, title: &str, url_path: &str) -> Self {
        Self {
            id: PageId(id),
            kind,
            title: title.to_string(),
            url_path: url_path.to_string(),
            subtitle: None,
            live: true,
            tree_position: 0,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    #[must_use]
    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    #[must_use]
    pub fn at_position(mut self, tree_position: u32) -> Self {
        self.tree_position = tree_position;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: StreamBlock) -> Self {
        self.body.push(block);
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url_path
    }

    /// Body entries in stored order, each with its tag.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockType, &StreamBlock)> + '_ {
        self.body.iter().map(|b| (b.block_type(), b))
    }

    pub fn validate(&self, registry: &BlockRegistry) -> Result<(), BlockValidationError> {
        let mut violations = Vec::new();
        if self.title.trim().is_empty() {
            violations.push(FieldViolation::required("title"));
        }
        if let Some(subtitle) = &self.subtitle {
            let len = subtitle.chars().count();
            if len > SUBTITLE_MAX_LEN {
                violations.push(FieldViolation::new(
                    "subtitle",
                    format!(
                        "ensure this value has at most {SUBTITLE_MAX_LEN} characters (it has {len})"
                    ),
                ));
            }
        }
        if !(self.url_path.starts_with('/') && self.url_path.ends_with('/')) {
            violations.push(FieldViolation::new(
                "url_path",
                "url path must start and end with '/'",
            ));
        }
        for (idx, (block_type, block)) in self.blocks().enumerate() {
            let prefix = format!("body[{idx}]");
            if !self.kind.admits(block_type) {
                violations.push(FieldViolation::new(
                    &prefix,
                    format!("{block_type} is not allowed on {} pages", self.kind.as_str()),
                ));
                continue;
            }
            let Some(schema) = registry.schema(block_type) else {
                violations.push(FieldViolation::new(
                    &prefix,
                    format!("unregistered block type: {block_type}"),
                ));
                continue;
            };
            schema.collect_struct_violations(block.value(), &prefix, registry, &mut violations);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(BlockValidationError(violations))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveFilter {
    Any,
    LiveOnly,
}

impl LiveFilter {
    fn admits(self, page: &Page) -> bool {
        match self {
            Self::Any => true,
            Self::LiveOnly => page.live,
        }
    }
}

/// Lowest-ordered page of `kind`, ties broken by id. `None` is the not-found
/// signal; callers pick their own fallback.
#[must_use]
pub fn first_page_of_kind(pages: &[Page], kind: PageKind, filter: LiveFilter) -> Option<&Page> {
    pages
        .iter()
        .filter(|p| p.kind == kind && filter.admits(p))
        .min_by_key(|p| (p.tree_position, p.id))
}

#[must_use]
pub fn count_pages(pages: &[Page], kind: PageKind, filter: LiveFilter) -> usize {
    pages
        .iter()
        .filter(|p| p.kind == kind && filter.admits(p))
        .count()
}

#[must_use]
pub fn find_page(pages: &[Page], id: PageId) -> Option<&Page> {
    pages.iter().find(|p| p.id == id)
}
