use thiserror::Error;

use crate::model::{Field, NodeId};

/// Result type alias using PruneError
pub type Result<T> = std::result::Result<T, PruneError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, CLI exit reporting, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Arena / attachment
    NotFound,
    Detached,
    AlreadyAttached,
    IllegalAttachment,
    ShapeMismatch,
    ArenaFull,

    // Removal engine
    CascadeLimit,

    // Structural validation
    MissingRequiredField,
    BrokenBackReference,

    // Addressing / interchange
    InvalidPath,
    UnknownNodeKind,
    MalformedJson,

    // Configuration / IO
    InvalidConfig,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Detached => "ERR_DETACHED",
            ExErrorKind::AlreadyAttached => "ERR_ALREADY_ATTACHED",
            ExErrorKind::IllegalAttachment => "ERR_ILLEGAL_ATTACHMENT",
            ExErrorKind::ShapeMismatch => "ERR_SHAPE_MISMATCH",
            ExErrorKind::ArenaFull => "ERR_ARENA_FULL",
            ExErrorKind::CascadeLimit => "ERR_CASCADE_LIMIT",
            ExErrorKind::MissingRequiredField => "ERR_MISSING_REQUIRED_FIELD",
            ExErrorKind::BrokenBackReference => "ERR_BROKEN_BACK_REFERENCE",
            ExErrorKind::InvalidPath => "ERR_INVALID_PATH",
            ExErrorKind::UnknownNodeKind => "ERR_UNKNOWN_NODE_KIND",
            ExErrorKind::MalformedJson => "ERR_MALFORMED_JSON",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Flattened view of a [`PruneError`] used by the logging macros: a kind,
/// an optional node id and a human-readable message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_id: Option<NodeId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node context
    pub fn with_node_id(mut self, id: NodeId) -> Self {
        self.node_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the node context, if any
    pub fn node_id(&self) -> Option<NodeId> {
        self.node_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node_id) = self.node_id {
            write!(f, " (node_id: {})", node_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for tree editing and node removal
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PruneError {
    // ===== Arena Errors =====
    /// Node id does not belong to this tree
    #[error("Node not found: {node_id}")]
    NodeNotFound { node_id: NodeId },

    /// Node is not attached to the tree (and is not the root)
    #[error("Node is not attached to the tree: {node_id}")]
    NodeDetached { node_id: NodeId },

    /// Node already hangs off a parent
    #[error("Node {node_id} is already attached to parent {parent_id}")]
    AlreadyAttached { node_id: NodeId, parent_id: NodeId },

    /// The root cannot be attached below another node
    #[error("Root node {node_id} cannot be attached to a parent")]
    CannotAttachRoot { node_id: NodeId },

    /// Field is not part of the parent's schema
    #[error("Field '{field}' does not exist on {kind}")]
    UnknownField { kind: String, field: Field },

    /// A single-slot operation was used on a sequence (or vice versa)
    #[error("Field '{field}' on node {node_id} is not a {expected}")]
    ShapeMismatch {
        node_id: NodeId,
        field: Field,
        expected: &'static str,
    },

    /// No node id is left to hand out
    #[error("Tree cannot hold more than {capacity} nodes")]
    ArenaFull { capacity: usize },

    // ===== Removal Errors =====
    /// Cascade exceeded the configured depth guard
    #[error("Removal of node {node_id} cascaded more than {limit} levels")]
    CascadeLimitExceeded { node_id: NodeId, limit: usize },

    // ===== Validation Errors =====
    /// A required single field is empty
    #[error("Node {node_id} ({kind}) is missing required field '{field}'")]
    MissingRequiredField {
        node_id: NodeId,
        kind: String,
        field: Field,
    },

    /// A child's recorded parent does not hold it
    #[error("Node {node_id} records parent {parent_id}, which does not hold it")]
    BrokenBackReference { node_id: NodeId, parent_id: NodeId },

    // ===== Addressing / Interchange Errors =====
    /// Field path could not be resolved
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// JSON `type` tag is not a known node kind
    #[error("Unknown node kind: {kind}")]
    UnknownNodeKind { kind: String },

    /// JSON document does not have the expected shape
    #[error("Malformed JSON tree: {reason}")]
    MalformedJson { reason: String },

    // ===== Configuration / IO Errors =====
    /// Configuration could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Filesystem failure
    #[error("I/O error: {reason}")]
    Io { reason: String },
}

impl PruneError {
    /// Get the canonical error kind
    pub fn kind(&self) -> ExErrorKind {
        match self {
            PruneError::NodeNotFound { .. } => ExErrorKind::NotFound,
            PruneError::NodeDetached { .. } => ExErrorKind::Detached,
            PruneError::AlreadyAttached { .. } => ExErrorKind::AlreadyAttached,
            PruneError::CannotAttachRoot { .. } | PruneError::UnknownField { .. } => {
                ExErrorKind::IllegalAttachment
            }
            PruneError::ShapeMismatch { .. } => ExErrorKind::ShapeMismatch,
            PruneError::ArenaFull { .. } => ExErrorKind::ArenaFull,
            PruneError::CascadeLimitExceeded { .. } => ExErrorKind::CascadeLimit,
            PruneError::MissingRequiredField { .. } => ExErrorKind::MissingRequiredField,
            PruneError::BrokenBackReference { .. } => ExErrorKind::BrokenBackReference,
            PruneError::InvalidPath { .. } => ExErrorKind::InvalidPath,
            PruneError::UnknownNodeKind { .. } => ExErrorKind::UnknownNodeKind,
            PruneError::MalformedJson { .. } => ExErrorKind::MalformedJson,
            PruneError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
            PruneError::Io { .. } => ExErrorKind::Io,
        }
    }

    /// Get the node this error is about, if any
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            PruneError::NodeNotFound { node_id }
            | PruneError::NodeDetached { node_id }
            | PruneError::AlreadyAttached { node_id, .. }
            | PruneError::CannotAttachRoot { node_id }
            | PruneError::ShapeMismatch { node_id, .. }
            | PruneError::CascadeLimitExceeded { node_id, .. }
            | PruneError::MissingRequiredField { node_id, .. }
            | PruneError::BrokenBackReference { node_id, .. } => Some(*node_id),
            _ => None,
        }
    }
}

impl From<PruneError> for ExError {
    fn from(err: PruneError) -> Self {
        let mut ex = ExError::new(err.kind()).with_message(err.to_string());
        if let Some(node_id) = err.node_id() {
            ex = ex.with_node_id(node_id);
        }
        ex
    }
}

impl From<std::io::Error> for PruneError {
    fn from(err: std::io::Error) -> Self {
        PruneError::Io {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PruneError {
    fn from(err: serde_json::Error) -> Self {
        PruneError::MalformedJson {
            reason: err.to_string(),
        }
    }
}
