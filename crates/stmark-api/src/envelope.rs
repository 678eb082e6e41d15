// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Uniform response wrapper for every JSON endpoint.
///
/// An error envelope never carries data and always has a message; a success
/// envelope always carries data. Absent members are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiEnvelope<T> {
    status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Empty messages never replace an error's diagnostic.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if self.status == EnvelopeStatus::Error && message.trim().is_empty() {
            return self;
        }
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn status(&self) -> EnvelopeStatus {
        self.status
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn count(&self) -> Option<usize> {
        self.count
    }
}

impl ApiEnvelope<()> {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "unknown error".to_string()
        } else {
            message
        };
        Self {
            status: EnvelopeStatus::Error,
            data: None,
            message: Some(message),
            count: None,
        }
    }
}
