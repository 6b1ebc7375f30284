// ABOUTME: Request ID middleware for correlation and structured logging
// ABOUTME: Generates or propagates x-request-id and exposes it to handlers via Extension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderValue;
use std::fmt;
use uuid::Uuid;

/// Header used for request correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID that flows through the request lifecycle
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    /// Create a new request ID with a generated value
    #[must_use]
    pub fn new() -> Self {
        Self(format!("req_{}", Uuid::new_v4().simple()))
    }

    /// Get the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware that attaches a request ID to every request and response
///
/// Reuses the caller's `x-request-id` header when present, otherwise
/// generates one. The ID is available to handlers via
/// `Extension<RequestId>` and echoed back on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(RequestId::new, |value| RequestId(value.to_owned()));

    tracing::Span::current().record("request_id", request_id.as_str());
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let first = RequestId::new();
        let second = RequestId::new();
        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = RequestId::new();
        assert_eq!(id.to_string(), id.as_str());
        assert!(id.as_str().starts_with("req_"));
    }
}
