// ABOUTME: HTTP middleware for CORS and request ID correlation
// ABOUTME: Provides cross-origin configuration and per-request tracing context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

pub mod cors;
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Request ID generation and propagation
pub use request_id::{request_id_middleware, RequestId};
