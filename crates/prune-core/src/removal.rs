//! Removal orchestrator
//!
//! Drives one removal through the hook tables:
//!
//! ```text
//! attachment_of ──► PRE_HOOKS ──handled──► Absorbed / Substituted
//!       ▲               │
//!       │          not handled
//!       │               ▼
//!       │          base removal ──► POST_HOOKS ──► RemovedLeaf / Collapsed
//!       │                               │
//!       └──────── parent ◄──── Cascade ─┘
//! ```
//!
//! Cascading always moves the subject to its parent, so the loop ends at
//! the root at the latest. The depth guard in [`EngineConfig`] bounds it
//! further. The loop runs on a working copy that replaces the caller's tree
//! only when the removal succeeds, so a failed removal changes nothing.

use std::time::Instant;

use prune_core_types::OperationId;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::errors::{PruneError, Result};
use crate::hooks::{post::POST_HOOKS, pre::PRE_HOOKS, run_hooks, RemovalSite, Resolution};
use crate::model::NodeId;
use crate::ops::{tree_ops, Tree};
use crate::{log_op_end, log_op_error, log_op_start};

/// Where a removal came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "terminal", rename_all = "snake_case")]
pub enum Terminal {
    /// A block kept its slot and lost its statements
    Absorbed,
    /// The node was replaced by an `undefined` placeholder
    Substituted { placeholder: NodeId },
    /// The node was detached and its parent needed no cleanup
    RemovedLeaf,
    /// The parent was replaced by its surviving child
    Collapsed { replacement: NodeId },
    /// Cascading reached the root, which has no slot to be removed from
    RootReached,
}

impl Terminal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Terminal::Absorbed => "absorbed",
            Terminal::Substituted { .. } => "substituted",
            Terminal::RemovedLeaf => "removed_leaf",
            Terminal::Collapsed { .. } => "collapsed",
            Terminal::RootReached => "root_reached",
        }
    }
}

/// What one call to [`remove`] did to the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    /// The node the caller asked to remove
    pub subject: NodeId,

    pub terminal: Terminal,

    /// Every node detached by this call, in detach order
    ///
    /// These are handed back to the caller; the engine does not look at
    /// them again.
    pub removed: Vec<NodeId>,

    /// Subjects evaluated, starting with `subject` and moving rootwards
    pub visited: Vec<NodeId>,

    /// Names of the hooks that matched, in order
    pub hooks: Vec<&'static str>,

    pub cascade_depth: usize,
}

impl RemovalReport {
    fn new(subject: NodeId) -> Self {
        Self {
            subject,
            terminal: Terminal::RemovedLeaf,
            removed: Vec::new(),
            visited: Vec::new(),
            hooks: Vec::new(),
            cascade_depth: 0,
        }
    }
}

/// Removal engine with its configuration
#[derive(Debug, Clone, Default)]
pub struct Remover {
    config: EngineConfig,
}

impl Remover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Remove `node`, keeping every visited ancestor structurally valid
    ///
    /// Removing the root is a no-op that reports [`Terminal::RootReached`].
    ///
    /// # Errors
    ///
    /// * `NodeNotFound` - `node` was not allocated by `tree`
    /// * `NodeDetached` - `node` is not attached
    /// * `CascadeLimitExceeded` - the cascade outgrew `max_cascade_depth`
    ///
    /// On any error `tree` is left exactly as it was.
    pub fn remove(&self, tree: &mut Tree, node: NodeId) -> Result<RemovalReport> {
        let operation_id = OperationId::new();
        let span = tracing::info_span!("remove", operation_id = %operation_id);
        let _guard = span.enter();

        let started = Instant::now();
        log_op_start!("remove", node_id = node.get());

        let mut working = tree.clone();
        let result = self.run(&mut working, node);
        if result.is_ok() {
            *tree = working;
        }
        let duration_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(report) => {
                log_op_end!(
                    "remove",
                    duration_ms = duration_ms,
                    node_id = node.get(),
                    terminal = report.terminal.as_str(),
                    cascade_depth = report.cascade_depth,
                    removed_count = report.removed.len()
                );
            }
            Err(err) => {
                log_op_error!("remove", err.clone(), duration_ms = duration_ms, node_id = node.get());
            }
        }

        result
    }

    fn run(&self, tree: &mut Tree, node: NodeId) -> Result<RemovalReport> {
        let mut report = RemovalReport::new(node);
        let mut subject = node;

        loop {
            report.visited.push(subject);

            let Some(attachment) = tree_ops::attachment_of(tree, subject)? else {
                if tree.is_root(subject) {
                    report.terminal = Terminal::RootReached;
                    return Ok(report);
                }
                return Err(PruneError::NodeDetached { node_id: subject });
            };

            let site = RemovalSite::new(tree, subject, attachment)?;

            if let Some((hook, resolution)) = run_hooks(PRE_HOOKS, tree, &site)? {
                report.hooks.push(hook);
                finish(&mut report, &site, resolution);
                return Ok(report);
            }

            tree_ops::detach(tree, subject, &attachment)?;
            report.removed.push(subject);

            match run_hooks(POST_HOOKS, tree, &site)? {
                None => {
                    report.terminal = Terminal::RemovedLeaf;
                    return Ok(report);
                }
                Some((hook, Resolution::Cascade)) => {
                    report.hooks.push(hook);
                    report.cascade_depth += 1;
                    if report.cascade_depth > self.config.max_cascade_depth {
                        return Err(PruneError::CascadeLimitExceeded {
                            node_id: node,
                            limit: self.config.max_cascade_depth,
                        });
                    }
                    subject = site.parent();
                }
                Some((hook, resolution)) => {
                    report.hooks.push(hook);
                    finish(&mut report, &site, resolution);
                    return Ok(report);
                }
            }
        }
    }
}

/// Record a terminal resolution
fn finish(report: &mut RemovalReport, site: &RemovalSite, resolution: Resolution) {
    match resolution {
        Resolution::Absorbed { cleared } => {
            report.removed.extend(cleared);
            report.terminal = Terminal::Absorbed;
        }
        Resolution::Substituted { placeholder } => {
            report.removed.push(site.node);
            report.terminal = Terminal::Substituted { placeholder };
        }
        Resolution::Collapsed { replacement } => {
            report.removed.push(site.parent());
            report.terminal = Terminal::Collapsed { replacement };
        }
        // Only reachable if a pre hook asks to cascade; the parent stays.
        Resolution::Cascade => {
            report.terminal = Terminal::RemovedLeaf;
        }
    }
}

/// Remove `node` with the default configuration
///
/// # Errors
///
/// See [`Remover::remove`].
pub fn remove(tree: &mut Tree, node: NodeId) -> Result<RemovalReport> {
    Remover::new().remove(tree, node)
}
