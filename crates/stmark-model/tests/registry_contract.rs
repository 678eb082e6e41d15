// SPDX-License-Identifier: Apache-2.0

use serde_json::json;
use stmark_model::{BlockRegistry, BlockSchema, BlockType, FieldKind, FieldSpec, SchemaError};

#[test]
fn standard_registry_covers_every_block_type() {
    let registry = BlockRegistry::standard().expect("standard registry");
    assert_eq!(registry.len(), BlockType::ALL.len());
    for block_type in BlockType::ALL {
        let schema = registry.schema(block_type).expect("registered");
        assert_eq!(schema.block_type, block_type);
        assert!(!schema.fields.is_empty(), "{block_type} has no fields");
    }
    let tags = registry
        .schemas()
        .map(|s| s.block_type)
        .collect::<Vec<_>>();
    let mut sorted = tags.clone();
    sorted.sort();
    assert_eq!(tags, sorted, "schemas iterate in tag order");
}

#[test]
fn welcome_section_fields_match_the_cms_definition() {
    let registry = BlockRegistry::standard().expect("standard registry");
    let schema = registry
        .schema(BlockType::WelcomeSection)
        .expect("welcome schema");
    let heading = schema.get_field("heading").expect("heading");
    assert!(heading.required);
    assert_eq!(heading.kind, FieldKind::Char { max_length: 200 });
    assert_eq!(
        heading.default,
        Some(json!("Shaping Leaders, Advancing Knowledge"))
    );
    let names = schema.fields.iter().map(|f| f.name).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["welcome_text", "heading", "description", "highlights"]
    );
}

#[test]
fn schema_serializes_field_constraints() {
    let registry = BlockRegistry::standard().expect("standard registry");
    let schema = registry.schema(BlockType::NewsSection).expect("schema");
    let value = serde_json::to_value(schema).expect("serialize");
    assert_eq!(value["block_type"], json!("news_section"));
    assert_eq!(value["fields"][0]["kind"], json!({"type": "char", "max_length": 100}));
    assert_eq!(
        value["fields"][1]["kind"],
        json!({"type": "list", "child": {"type": "block", "block_type": "news_item"}})
    );
    assert!(value["fields"][1].get("default").is_none());
}

#[test]
fn default_violating_its_own_field_is_rejected() {
    let schemas = vec![BlockSchema::new(BlockType::Highlight, "Highlight", "star")
        .field(FieldSpec::char("title", 5).required().with_default(json!("too long")))];
    match BlockRegistry::new(schemas) {
        Err(SchemaError::InvalidDefault {
            block_type,
            violations,
        }) => {
            assert_eq!(block_type, BlockType::Highlight);
            assert_eq!(violations[0].path, "title");
        }
        other => panic!("expected invalid default, got {other:?}"),
    }
}

#[test]
fn nested_reference_must_be_registered() {
    let schemas = vec![
        BlockSchema::new(BlockType::NewsSection, "News", "list-ul").field(FieldSpec::list(
            "items",
            FieldKind::Block {
                block_type: BlockType::NewsItem,
            },
        )),
    ];
    let err = BlockRegistry::new(schemas).expect_err("news_item missing");
    assert_eq!(
        err,
        SchemaError::UnregisteredReference {
            block_type: BlockType::NewsSection,
            field: "items",
            target: BlockType::NewsItem,
        }
    );
}

#[test]
fn duplicate_tags_and_fields_are_rejected() {
    let dup_tag = vec![
        BlockSchema::new(BlockType::BlogQuote, "Quote", "openquote"),
        BlockSchema::new(BlockType::BlogQuote, "Quote again", "openquote"),
    ];
    assert_eq!(
        BlockRegistry::new(dup_tag).expect_err("duplicate tag"),
        SchemaError::DuplicateBlockType(BlockType::BlogQuote)
    );

    let dup_field = vec![BlockSchema::new(BlockType::BlogQuote, "Quote", "openquote")
        .field(FieldSpec::text("quote", None))
        .field(FieldSpec::text("quote", None))];
    assert!(matches!(
        BlockRegistry::new(dup_field),
        Err(SchemaError::DuplicateField { field: "quote", .. })
    ));
}
