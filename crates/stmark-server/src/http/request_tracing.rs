// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;
use std::sync::atomic::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTrace {
    pub request_id: String,
}

/// Propagates a caller-supplied `x-request-id`, otherwise mints one from the
/// process-wide counter.
#[must_use]
pub(crate) fn extract_request_trace(headers: &HeaderMap, state: &AppState) -> RequestTrace {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| {
            let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
            format!("req-{id:016x}")
        });
    RequestTrace { request_id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn propagates_or_generates_request_ids() {
        let state = crate::AppState::standard().expect("state");

        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static(" req-abc "));
        assert_eq!(extract_request_trace(&headers, &state).request_id, "req-abc");

        let first = extract_request_trace(&HeaderMap::new(), &state).request_id;
        let second = extract_request_trace(&HeaderMap::new(), &state).request_id;
        assert!(first.starts_with("req-") && first.len() == 20, "{first}");
        assert_ne!(first, second);
    }
}
