// SPDX-License-Identifier: Apache-2.0

use serde_json::json;
use stmark_api::{map_error, ApiEnvelope, ApiError, ApiErrorCode};
use stmark_model::{BlockRegistry, BlockType};

#[test]
fn client_errors_map_to_400() {
    for err in [
        ApiError::invalid_json(),
        ApiError::invalid_action("dance"),
        ApiError::new(ApiErrorCode::ValidationFailed, "bad"),
    ] {
        assert_eq!(map_error(&err).status_code, 400, "{err}");
    }
}

#[test]
fn lookup_and_transport_errors_keep_their_statuses() {
    assert_eq!(map_error(&ApiError::unknown_block_type("x")).status_code, 404);
    assert_eq!(map_error(&ApiError::page_not_found("9")).status_code, 404);
    assert_eq!(map_error(&ApiError::timeout()).status_code, 503);
    assert_eq!(map_error(&ApiError::payload_too_large()).status_code, 413);
    assert_eq!(map_error(&ApiError::internal("boom")).status_code, 500);
}

#[test]
fn interaction_failure_messages_keep_their_wording() {
    assert_eq!(ApiError::invalid_json().message, "Invalid JSON data");
    assert_eq!(ApiError::invalid_action("").message, "Invalid action");
    assert_eq!(
        ApiError::invalid_action("dance").message,
        "Invalid action: dance"
    );
    assert_eq!(
        ApiError::unexpected("disk full").message,
        "An error occurred: disk full"
    );
    assert_eq!(ApiError::internal("disk full").message, "disk full");
}

#[test]
fn error_envelope_serializes_without_data() {
    let env = ApiError::invalid_json().envelope();
    assert!(!env.is_success());
    assert_eq!(
        serde_json::to_value(&env).expect("json"),
        json!({"status": "error", "message": "Invalid JSON data"})
    );
}

#[test]
fn validation_failure_lists_every_path() {
    let registry = BlockRegistry::standard().expect("registry");
    let schema = registry.schema(BlockType::NewsItem).expect("schema");
    let err = schema
        .validate(&json!({"title": "", "excerpt": "x"}), &registry)
        .expect_err("invalid");
    let api = ApiError::validation_failed(&err);
    assert_eq!(api.code, ApiErrorCode::ValidationFailed);
    assert!(api.message.contains("title"), "{}", api.message);
    assert!(api.message.contains("date"), "{}", api.message);
}

#[test]
fn success_envelope_carries_message_and_count() {
    let env = ApiEnvelope::success(json!({"a": 1}))
        .with_message("ok")
        .with_count(1);
    assert_eq!(
        serde_json::to_value(&env).expect("json"),
        json!({"status": "success", "data": {"a": 1}, "message": "ok", "count": 1})
    );
}
