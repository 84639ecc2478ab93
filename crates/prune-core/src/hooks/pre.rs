//! Pre-removal hooks
//!
//! These either reject the detach outright, absorbing the removal into an
//! in-place edit, or delegate it to a replacement.

use super::{Hook, Outcome, RemovalSite, Resolution};
use crate::errors::Result;
use crate::model::{Category, Field};
use crate::ops::{tree_ops, Tree};

/// Pre hooks in evaluation order
pub const PRE_HOOKS: &[Hook] = &[
    Hook {
        name: "clear_block_body",
        apply: clear_block_body,
    },
    Hook {
        name: "substitute_undefined",
        apply: substitute_undefined,
    },
];

/// `function () NODE`, `class NODE`
///
/// A block that is someone's body keeps its slot; only its statements go.
fn clear_block_body(tree: &mut Tree, site: &RemovalSite) -> Result<Outcome> {
    // A block sitting inside a statement list is an ordinary statement.
    if site.key() != Field::Body
        || site.attachment.in_sequence()
        || !site
            .node_kind
            .is_any(&[Category::Block, Category::ClassBody])
    {
        return Ok(Outcome::NotHandled);
    }

    let cleared = tree_ops::clear_sequence(tree, site.node, Field::Body)?;
    Ok(Outcome::Handled(Resolution::Absorbed { cleared }))
}

/// `() => NODE`, `throw NODE`
fn substitute_undefined(tree: &mut Tree, site: &RemovalSite) -> Result<Outcome> {
    let arrow_body = site.key() == Field::Body && site.parent_kind.is(Category::ArrowFunction);
    let throw_argument = site.key() == Field::Argument && site.parent_kind.is(Category::Throw);

    if !(arrow_body || throw_argument) {
        return Ok(Outcome::NotHandled);
    }

    let placeholder = tree_ops::undefined_placeholder(tree)?;
    tree_ops::replace_with(tree, site.node, placeholder)?;
    Ok(Outcome::Handled(Resolution::Substituted { placeholder }))
}
