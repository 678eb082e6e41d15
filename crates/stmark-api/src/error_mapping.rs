// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
}

#[must_use]
pub fn map_error(error: &ApiError) -> ApiErrorMapping {
    let status_code = match error.code {
        ApiErrorCode::InvalidJson
        | ApiErrorCode::InvalidAction
        | ApiErrorCode::ValidationFailed => 400,
        ApiErrorCode::UnknownBlockType | ApiErrorCode::PageNotFound => 404,
        ApiErrorCode::PayloadTooLarge => 413,
        ApiErrorCode::Timeout => 503,
        ApiErrorCode::Internal => 500,
    };
    ApiErrorMapping { status_code }
}
