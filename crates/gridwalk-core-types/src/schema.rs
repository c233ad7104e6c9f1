//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the engine, the store
//! and the HTTP service.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Computation fields
pub const FIELD_MOVE_COUNT: &str = "move_count";
pub const FIELD_UNIQUE: &str = "unique";
pub const FIELD_STRATEGY: &str = "strategy";
pub const FIELD_EXECUTION_ID: &str = "execution_id";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
