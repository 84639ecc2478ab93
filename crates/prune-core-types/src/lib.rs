//! Core types shared across prune facilities
//!
//! This crate provides the small vocabulary used by both the removal engine
//! and its logging facility:
//!
//! - **Correlation types**: OperationId, tying a removal to its cascade steps
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::OperationId;
