//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the engine, the CLI
//! and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_OPERATION_ID: &str = "operation_id";

// Tree identifiers
pub const FIELD_NODE_ID: &str = "node_id";
pub const FIELD_PARENT_ID: &str = "parent_id";
pub const FIELD_FIELD: &str = "field";
pub const FIELD_HOOK: &str = "hook";

// Removal results
pub const FIELD_TERMINAL: &str = "terminal";
pub const FIELD_CASCADE_DEPTH: &str = "cascade_depth";
pub const FIELD_REMOVED_COUNT: &str = "removed_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_HOOK_MATCHED: &str = "hook_matched";
