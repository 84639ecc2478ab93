//! Prune Core - structure-preserving node removal for ESTree syntax trees
//!
//! Removing a node from a syntax tree can leave its parent invalid: an
//! `if` without a test, a binary expression with one operand, a `var` with
//! no declarators. This crate removes nodes and repairs what the removal
//! breaks, cascading towards the root where the parent itself has to go.
//!
//! - Arena tree with parent back-references ([`Tree`])
//! - Closed node-kind model with static schemas and a category oracle
//! - Ordered pre/post removal hook tables
//! - Removal orchestrator with cascade depth guard ([`Remover`])
//! - Structural validation, ancestry and dotted-path traversal
//! - ESTree JSON import/export
//! - Structured logging facility and stable error codes

pub mod config;
pub mod errors;
pub mod hooks;
pub mod json;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod removal;
pub mod rules;
pub mod traversal;

// Used by the logging macros
pub use prune_core_types;

// Re-export commonly used types
pub use config::EngineConfig;
pub use errors::{ExError, ExErrorKind, PruneError, Result};
pub use model::{Attachment, Category, Field, Node, NodeId, NodeKind, ParentLink, Shape, Slot};
pub use ops::Tree;
pub use removal::{remove, RemovalReport, Remover, Terminal};
pub use rules::validate_tree;
