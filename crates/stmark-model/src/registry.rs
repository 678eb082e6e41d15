// SPDX-License-Identifier: Apache-2.0

use crate::block::{BlockSchema, BlockType, FieldKind, FieldSpec, FieldViolation};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    DuplicateBlockType(BlockType),
    DuplicateField {
        block_type: BlockType,
        field: &'static str,
    },
    UnregisteredReference {
        block_type: BlockType,
        field: &'static str,
        target: BlockType,
    },
    InvalidDefault {
        block_type: BlockType,
        violations: Vec<FieldViolation>,
    },
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateBlockType(t) => write!(f, "block type registered twice: {t}"),
            Self::DuplicateField { block_type, field } => {
                write!(f, "{block_type} declares field {field} twice")
            }
            Self::UnregisteredReference {
                block_type,
                field,
                target,
            } => write!(
                f,
                "{block_type}.{field} references unregistered block type {target}"
            ),
            Self::InvalidDefault {
                block_type,
                violations,
            } => {
                let joined = violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "{block_type} has defaults violating their own field: {joined}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Immutable mapping from block tag to schema.
///
/// Built once at process start and handed by reference to everything that
/// validates or projects block content.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    schemas: BTreeMap<BlockType, BlockSchema>,
}

impl BlockRegistry {
    /// Checks that tags and field names are unique, nested references resolve
    /// and every declared default satisfies its own field.
    pub fn new(schemas: Vec<BlockSchema>) -> Result<Self, SchemaError> {
        let mut map = BTreeMap::new();
        for schema in schemas {
            let mut names = BTreeSet::new();
            for field in &schema.fields {
                if !names.insert(field.name) {
                    return Err(SchemaError::DuplicateField {
                        block_type: schema.block_type,
                        field: field.name,
                    });
                }
            }
            let block_type = schema.block_type;
            if map.insert(block_type, schema).is_some() {
                return Err(SchemaError::DuplicateBlockType(block_type));
            }
        }
        let registry = Self { schemas: map };
        registry.check_references()?;
        registry.check_defaults()?;
        Ok(registry)
    }

    pub fn standard() -> Result<Self, SchemaError> {
        Self::new(standard_schemas())
    }

    #[must_use]
    pub fn schema(&self, block_type: BlockType) -> Option<&BlockSchema> {
        self.schemas.get(&block_type)
    }

    /// Schemas ordered by tag.
    pub fn schemas(&self) -> impl Iterator<Item = &BlockSchema> {
        self.schemas.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    fn check_references(&self) -> Result<(), SchemaError> {
        for schema in self.schemas.values() {
            for field in &schema.fields {
                let mut nested = Vec::new();
                field.kind.nested_block_types(&mut nested);
                if let Some(target) = nested.into_iter().find(|t| !self.schemas.contains_key(t)) {
                    return Err(SchemaError::UnregisteredReference {
                        block_type: schema.block_type,
                        field: field.name,
                        target,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_defaults(&self) -> Result<(), SchemaError> {
        for schema in self.schemas.values() {
            let mut violations = Vec::new();
            for field in &schema.fields {
                if let Some(default) = &field.default {
                    field.check(Some(default), field.name, self, &mut violations);
                }
            }
            if !violations.is_empty() {
                return Err(SchemaError::InvalidDefault {
                    block_type: schema.block_type,
                    violations,
                });
            }
        }
        Ok(())
    }
}

const WELCOME_DESCRIPTION: &str = "At St. Mark University, we are committed to providing world-class education that prepares students for success in an ever-changing global landscape. Our diverse community of scholars, researchers, and innovators work together to push the boundaries of knowledge and create positive impact in society.";

fn standard_schemas() -> Vec<BlockSchema> {
    vec![
        BlockSchema::new(BlockType::WelcomeSection, "Welcome Section", "placeholder")
            .field(
                FieldSpec::char("welcome_text", 100)
                    .required()
                    .help("Text for the welcome badge")
                    .with_default(json!("Welcome to St. Mark University")),
            )
            .field(
                FieldSpec::char("heading", 200)
                    .required()
                    .help("Main heading text")
                    .with_default(json!("Shaping Leaders, Advancing Knowledge")),
            )
            .field(
                FieldSpec::text("description", Some(1000))
                    .required()
                    .help("Description paragraph text")
                    .with_default(json!(WELCOME_DESCRIPTION)),
            )
            .field(
                FieldSpec::list("highlights", FieldKind::Char { max_length: 200 })
                    .help("List of highlight points")
                    .with_default(json!([
                        "Over 40 years of academic excellence",
                        "Distinguished faculty with industry expertise",
                        "State-of-the-art research facilities",
                        "Global partnerships and exchange programs",
                        "95% graduate employment rate"
                    ])),
            ),
        BlockSchema::new(BlockType::Highlight, "Highlight", "star")
            .field(FieldSpec::char("title", 100).required())
            .field(FieldSpec::text("description", None)),
        BlockSchema::new(BlockType::NewsItem, "News Item", "doc-full")
            .field(FieldSpec::char("title", 200).required().help("Headline"))
            .field(FieldSpec::char("date", 50).required().help("Publication date"))
            .field(FieldSpec::text("excerpt", Some(500)).required().help("Short summary"))
            .field(FieldSpec::image("image").help("Card image")),
        BlockSchema::new(BlockType::NewsSection, "News Section", "list-ul")
            .field(
                FieldSpec::char("heading", 100)
                    .help("Section heading")
                    .with_default(json!("Latest News")),
            )
            .field(FieldSpec::list(
                "items",
                FieldKind::Block {
                    block_type: BlockType::NewsItem,
                },
            )),
        BlockSchema::new(BlockType::EventItem, "Event", "date")
            .field(FieldSpec::char("title", 200).required())
            .field(FieldSpec::char("date", 50).required())
            .field(FieldSpec::char("time", 50))
            .field(FieldSpec::char("location", 200))
            .field(FieldSpec::text("description", Some(500))),
        BlockSchema::new(BlockType::EventSection, "Events Section", "date")
            .field(
                FieldSpec::char("heading", 100)
                    .help("Section heading")
                    .with_default(json!("Upcoming Events")),
            )
            .field(FieldSpec::list(
                "items",
                FieldKind::Block {
                    block_type: BlockType::EventItem,
                },
            )),
        BlockSchema::new(BlockType::GalleryImage, "Gallery Image", "image")
            .field(FieldSpec::image("image").required())
            .field(
                FieldSpec::char("alt", 250)
                    .required()
                    .help("Alternative text, also used as the caption"),
            ),
        BlockSchema::new(BlockType::Gallery, "Gallery", "image")
            .field(
                FieldSpec::char("heading", 100)
                    .help("Section heading")
                    .with_default(json!("Campus Gallery")),
            )
            .field(FieldSpec::list(
                "images",
                FieldKind::Block {
                    block_type: BlockType::GalleryImage,
                },
            )),
        BlockSchema::new(BlockType::Testimonial, "Testimonial", "openquote")
            .field(FieldSpec::text("quote", Some(600)).required())
            .field(FieldSpec::char("name", 100).required())
            .field(FieldSpec::char("role", 100)),
        BlockSchema::new(BlockType::Testimonials, "Testimonials", "group")
            .field(
                FieldSpec::char("heading", 100)
                    .help("Section heading")
                    .with_default(json!("What Our Community Says")),
            )
            .field(FieldSpec::list(
                "items",
                FieldKind::Block {
                    block_type: BlockType::Testimonial,
                },
            )),
        BlockSchema::new(BlockType::BlogContent, "Blog Content", "doc-full")
            .field(FieldSpec::char("title", 200).required().help("Section title"))
            .field(FieldSpec::rich_text("content").required().help("Main content")),
        BlockSchema::new(BlockType::BlogImage, "Blog Image", "image")
            .field(FieldSpec::image("image").required())
            .field(FieldSpec::char("caption", 250).help("Image caption")),
        BlockSchema::new(BlockType::BlogQuote, "Blog Quote", "openquote")
            .field(FieldSpec::text("quote", None).required())
            .field(FieldSpec::char("author", 100).help("Quote author")),
    ]
}
