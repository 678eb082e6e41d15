// SPDX-License-Identifier: Apache-2.0

use crate::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};
use stmark_model::BlockValidationError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidJson,
    InvalidAction,
    ValidationFailed,
    UnknownBlockType,
    PageNotFound,
    PayloadTooLarge,
    Timeout,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidJson => "InvalidJson",
            Self::InvalidAction => "InvalidAction",
            Self::ValidationFailed => "ValidationFailed",
            Self::UnknownBlockType => "UnknownBlockType",
            Self::PageNotFound => "PageNotFound",
            Self::PayloadTooLarge => "PayloadTooLarge",
            Self::Timeout => "Timeout",
            Self::Internal => "Internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_json() -> Self {
        Self::new(ApiErrorCode::InvalidJson, "Invalid JSON data")
    }

    #[must_use]
    pub fn invalid_action(action: &str) -> Self {
        let message = if action.is_empty() {
            "Invalid action".to_string()
        } else {
            format!("Invalid action: {action}")
        };
        Self::new(ApiErrorCode::InvalidAction, message)
    }

    #[must_use]
    pub fn validation_failed(err: &BlockValidationError) -> Self {
        Self::new(ApiErrorCode::ValidationFailed, err.to_string())
    }

    #[must_use]
    pub fn unknown_block_type(tag: &str) -> Self {
        Self::new(
            ApiErrorCode::UnknownBlockType,
            format!("unknown block type: {tag}"),
        )
    }

    #[must_use]
    pub fn page_not_found(id: &str) -> Self {
        Self::new(ApiErrorCode::PageNotFound, format!("page not found: {id}"))
    }

    #[must_use]
    pub fn payload_too_large() -> Self {
        Self::new(ApiErrorCode::PayloadTooLarge, "Request body too large")
    }

    #[must_use]
    pub fn timeout() -> Self {
        Self::new(ApiErrorCode::Timeout, "request timed out")
    }

    /// Failure whose message is the bare description.
    #[must_use]
    pub fn internal(description: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, description)
    }

    /// Failure whose message is prefixed the way the site's interaction
    /// endpoints report it.
    #[must_use]
    pub fn unexpected(description: impl Display) -> Self {
        Self::new(
            ApiErrorCode::Internal,
            format!("An error occurred: {description}"),
        )
    }

    #[must_use]
    pub fn envelope(&self) -> ApiEnvelope<()> {
        ApiEnvelope::error(self.message.clone())
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}
