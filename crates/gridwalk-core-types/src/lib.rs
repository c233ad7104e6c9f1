//! Core types shared across gridwalk facilities
//!
//! This crate provides foundational types used by the error handling and
//! logging facilities, the store and the HTTP service:
//!
//! - **Correlation types**: RequestId, TraceId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
