// SPDX-License-Identifier: Apache-2.0

use crate::registry::BlockRegistry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

/// Raw value of a struct block, keyed by field name.
pub type StructValue = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    WelcomeSection,
    Highlight,
    NewsItem,
    NewsSection,
    EventItem,
    EventSection,
    GalleryImage,
    Gallery,
    Testimonial,
    Testimonials,
    BlogContent,
    BlogImage,
    BlogQuote,
}

impl BlockType {
    pub const ALL: [BlockType; 13] = [
        Self::WelcomeSection,
        Self::Highlight,
        Self::NewsItem,
        Self::NewsSection,
        Self::EventItem,
        Self::EventSection,
        Self::GalleryImage,
        Self::Gallery,
        Self::Testimonial,
        Self::Testimonials,
        Self::BlogContent,
        Self::BlogImage,
        Self::BlogQuote,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WelcomeSection => "welcome_section",
            Self::Highlight => "highlight",
            Self::NewsItem => "news_item",
            Self::NewsSection => "news_section",
            Self::EventItem => "event_item",
            Self::EventSection => "event_section",
            Self::GalleryImage => "gallery_image",
            Self::Gallery => "gallery",
            Self::Testimonial => "testimonial",
            Self::Testimonials => "testimonials",
            Self::BlogContent => "blog_content",
            Self::BlogImage => "blog_image",
            Self::BlogQuote => "blog_quote",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let tag = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| ValidationError(format!("unknown block type: {tag}")))
    }
}

impl Display for BlockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage shape of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text with a hard length bound.
    Char { max_length: usize },
    /// Multi-line plain text.
    Text { max_length: Option<usize> },
    /// HTML produced by the CMS rich text editor; stored verbatim.
    RichText,
    /// Reference to an image in the media library by numeric id.
    Image,
    /// Ordered sequence of child values. No count bounds.
    List { child: Box<FieldKind> },
    /// Nested struct block validated against its own schema.
    Block { block_type: BlockType },
}

impl FieldKind {
    #[must_use]
    pub fn list_of(child: FieldKind) -> Self {
        Self::List {
            child: Box::new(child),
        }
    }

    fn check(
        &self,
        value: &Value,
        path: &str,
        registry: &BlockRegistry,
        out: &mut Vec<FieldViolation>,
    ) {
        match self {
            Self::Char { max_length } => check_text(value, path, Some(*max_length), out),
            Self::Text { max_length } => check_text(value, path, *max_length, out),
            Self::RichText => check_text(value, path, None, out),
            Self::Image => {
                if !value.as_u64().is_some_and(|id| id > 0) {
                    out.push(FieldViolation::new(path, "expected image id"));
                }
            }
            Self::List { child } => {
                let Some(items) = value.as_array() else {
                    out.push(FieldViolation::new(path, "expected list"));
                    return;
                };
                for (idx, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{idx}]");
                    // Scalar list children are required; struct children report
                    // their own missing fields.
                    if !matches!(**child, Self::Block { .. }) && is_blank(item) {
                        out.push(FieldViolation::required(&item_path));
                        continue;
                    }
                    child.check(item, &item_path, registry, out);
                }
            }
            Self::Block { block_type } => match registry.schema(*block_type) {
                Some(schema) => schema.collect_violations(value, path, registry, out),
                None => out.push(FieldViolation::new(
                    path,
                    format!("unregistered block type: {block_type}"),
                )),
            },
        }
    }

    fn fill_defaults(&self, value: &Value, registry: &BlockRegistry) -> Value {
        match (self, value) {
            (Self::Block { block_type }, Value::Object(map)) => registry
                .schema(*block_type)
                .map_or_else(
                    || value.clone(),
                    |schema| Value::Object(schema.with_defaults(map, registry)),
                ),
            (Self::List { child }, Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .map(|item| child.fill_defaults(item, registry))
                    .collect(),
            ),
            _ => value.clone(),
        }
    }

    pub(crate) fn nested_block_types(&self, out: &mut Vec<BlockType>) {
        match self {
            Self::Block { block_type } => out.push(*block_type),
            Self::List { child } => child.nested_block_types(out),
            _ => {}
        }
    }
}

fn check_text(value: &Value, path: &str, max_length: Option<usize>, out: &mut Vec<FieldViolation>) {
    let Some(text) = value.as_str() else {
        out.push(FieldViolation::new(path, "expected string"));
        return;
    };
    if let Some(max) = max_length {
        let len = text.chars().count();
        if len > max {
            out.push(FieldViolation::new(
                path,
                format!("ensure this value has at most {max} characters (it has {len})"),
            ));
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub help_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldSpec {
    #[must_use]
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            help_text: "",
            default: None,
        }
    }

    #[must_use]
    pub fn char(name: &'static str, max_length: usize) -> Self {
        Self::new(name, FieldKind::Char { max_length })
    }

    #[must_use]
    pub fn text(name: &'static str, max_length: Option<usize>) -> Self {
        Self::new(name, FieldKind::Text { max_length })
    }

    #[must_use]
    pub fn rich_text(name: &'static str) -> Self {
        Self::new(name, FieldKind::RichText)
    }

    #[must_use]
    pub fn image(name: &'static str) -> Self {
        Self::new(name, FieldKind::Image)
    }

    #[must_use]
    pub fn list(name: &'static str, child: FieldKind) -> Self {
        Self::new(name, FieldKind::list_of(child))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn help(mut self, help_text: &'static str) -> Self {
        self.help_text = help_text;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub(crate) fn check(
        &self,
        value: Option<&Value>,
        path: &str,
        registry: &BlockRegistry,
        out: &mut Vec<FieldViolation>,
    ) {
        match value {
            None | Some(Value::Null) => {
                if self.required {
                    out.push(FieldViolation::required(path));
                }
            }
            Some(v) if self.required && is_blank(v) => out.push(FieldViolation::required(path)),
            Some(v) => self.kind.check(v, path, registry, out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockSchema {
    pub block_type: BlockType,
    pub label: &'static str,
    pub icon: &'static str,
    pub version: u32,
    pub fields: Vec<FieldSpec>,
}

impl BlockSchema {
    #[must_use]
    pub fn new(block_type: BlockType, label: &'static str, icon: &'static str) -> Self {
        Self {
            block_type,
            label,
            icon,
            version: 1,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Struct value containing only declared defaults.
    #[must_use]
    pub fn default_value(&self) -> StructValue {
        self.fields
            .iter()
            .filter_map(|f| f.default.clone().map(|d| (f.name.to_string(), d)))
            .collect()
    }

    /// Accepts `value` only if every field satisfies its constraints; all
    /// violations are reported, never a partial block.
    pub fn validate(
        &self,
        value: &Value,
        registry: &BlockRegistry,
    ) -> Result<(), BlockValidationError> {
        let mut violations = Vec::new();
        self.collect_violations(value, "", registry, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(BlockValidationError(violations))
        }
    }

    pub(crate) fn collect_violations(
        &self,
        value: &Value,
        prefix: &str,
        registry: &BlockRegistry,
        out: &mut Vec<FieldViolation>,
    ) {
        match value.as_object() {
            Some(map) => self.collect_struct_violations(map, prefix, registry, out),
            None => {
                let path = if prefix.is_empty() {
                    self.block_type.as_str()
                } else {
                    prefix
                };
                out.push(FieldViolation::new(path, "expected object"));
            }
        }
    }

    pub(crate) fn collect_struct_violations(
        &self,
        map: &StructValue,
        prefix: &str,
        registry: &BlockRegistry,
        out: &mut Vec<FieldViolation>,
    ) {
        for field in &self.fields {
            field.check(map.get(field.name), &join_path(prefix, field.name), registry, out);
        }
    }

    /// Copy of `value` with absent or null fields taken from their defaults,
    /// recursing into nested struct blocks.
    #[must_use]
    pub fn with_defaults(&self, value: &StructValue, registry: &BlockRegistry) -> StructValue {
        let mut out = value.clone();
        for field in &self.fields {
            match value.get(field.name) {
                None | Some(Value::Null) => {
                    if let Some(default) = &field.default {
                        out.insert(field.name.to_string(), default.clone());
                    }
                }
                Some(v) => {
                    out.insert(field.name.to_string(), field.kind.fill_defaults(v, registry));
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: String,
    pub reason: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(path: &str, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn required(path: &str) -> Self {
        Self::new(path, "this field is required")
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockValidationError(pub Vec<FieldViolation>);

impl BlockValidationError {
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.path.as_str()).collect()
    }
}

impl Display for BlockValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "validation failed: {joined}")
    }
}

impl std::error::Error for BlockValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_detection_trims_strings() {
        assert!(is_blank(&json!("   ")));
        assert!(is_blank(&json!([])));
        assert!(!is_blank(&json!(0)));
    }

    #[test]
    fn nested_paths_join_with_dots() {
        assert_eq!(join_path("", "title"), "title");
        assert_eq!(join_path("items[1]", "title"), "items[1].title");
    }

    #[test]
    fn block_type_parse_rejects_unknown_tags() {
        assert_eq!(
            BlockType::parse("news_item").expect("tag"),
            BlockType::NewsItem
        );
        assert!(BlockType::parse("carousel").is_err());
    }
}
