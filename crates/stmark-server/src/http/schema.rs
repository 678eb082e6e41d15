// SPDX-License-Identifier: Apache-2.0

use super::handlers_utilities::{
    api_error_response, cached_envelope_response, envelope_response, read_body,
};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use serde::Serialize;
use serde_json::Value;
use stmark_api::{ApiEnvelope, ApiError};
use stmark_model::{BlockSchema, BlockType};
use tracing::debug;

#[derive(Debug, Serialize)]
struct BlockValidationOutcome {
    block_type: BlockType,
    valid: bool,
}

fn lookup<'a>(state: &'a AppState, tag: &str) -> Result<&'a BlockSchema, ApiError> {
    BlockType::parse(tag)
        .ok()
        .and_then(|block_type| state.registry.schema(block_type))
        .ok_or_else(|| ApiError::unknown_block_type(tag))
}

pub(crate) async fn block_schemas_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let schemas: Vec<&BlockSchema> = state.registry.schemas().collect();
    let count = schemas.len();
    cached_envelope_response(&state, &headers, &ApiEnvelope::success(schemas).with_count(count))
}

pub(crate) async fn block_schema_handler(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    headers: HeaderMap,
) -> Response {
    match lookup(&state, &tag) {
        Ok(schema) => cached_envelope_response(&state, &headers, &ApiEnvelope::success(schema)),
        Err(err) => api_error_response(&err),
    }
}

/// Validates a candidate block value. Every violating path is reported.
pub(crate) async fn block_validate_handler(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let schema = match lookup(&state, &tag) {
        Ok(schema) => schema,
        Err(err) => return api_error_response(&err),
    };
    let body = match read_body(body) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return api_error_response(&ApiError::invalid_json()),
    };
    match schema.validate(&value, &state.registry) {
        Ok(()) => envelope_response(
            &ApiEnvelope::success(BlockValidationOutcome {
                block_type: schema.block_type,
                valid: true,
            })
            .with_message("Block is valid"),
        ),
        Err(err) => {
            debug!(block_type = %schema.block_type, violations = err.violations().len(), "block rejected");
            api_error_response(&ApiError::validation_failed(&err))
        }
    }
}
