//! Post-removal hooks
//!
//! These run once the node is out of its slot and clean up the parent.

use super::{Hook, Outcome, RemovalSite, Resolution};
use crate::errors::Result;
use crate::model::{Category, Field};
use crate::ops::{tree_ops, Tree};

/// Post hooks in evaluation order
pub const POST_HOOKS: &[Hook] = &[
    Hook {
        name: "remove_dangling_parent",
        apply: remove_dangling_parent,
    },
    Hook {
        name: "collapse_sequence",
        apply: collapse_sequence,
    },
    Hook {
        name: "collapse_binary",
        apply: collapse_binary,
    },
];

/// Parents that are meaningless without the slot that was just emptied
///
/// Loops are removed rather than given a `true` test, which would turn a
/// conditional loop into an infinite one.
fn remove_dangling_parent(tree: &mut Tree, site: &RemovalSite) -> Result<Outcome> {
    let key = site.key();
    let parent = site.parent_kind;

    // while (NODE); / case NODE:
    let test_of_loop_or_case =
        key == Field::Test && parent.is_any(&[Category::While, Category::SwitchCase]);

    // export NODE;
    let export_declaration = key == Field::Declaration && parent.is(Category::ExportDeclaration);

    // label: NODE
    let labeled_body = key == Field::Body && parent.is(Category::LabeledStatement);

    // var NODE;
    let last_declarator = site.attachment.container_field() == Some(Field::Declarations)
        && parent.is(Category::VariableDeclaration)
        && tree.sequence_len(site.parent(), Field::Declarations)? == 0;

    // NODE;
    let statement_expression =
        key == Field::Expression && parent.is(Category::ExpressionStatement);

    // if (NODE);
    let if_test = key == Field::Test && parent.is(Category::IfStatement);

    if test_of_loop_or_case
        || export_declaration
        || labeled_body
        || last_declarator
        || statement_expression
        || if_test
    {
        return Ok(Outcome::Handled(Resolution::Cascade));
    }
    Ok(Outcome::NotHandled)
}

/// `(a, NODE)` becomes `a`
fn collapse_sequence(tree: &mut Tree, site: &RemovalSite) -> Result<Outcome> {
    if !site.parent_kind.is(Category::SequenceExpression) {
        return Ok(Outcome::NotHandled);
    }

    let replacement = match tree.children(site.parent(), Field::Expressions)? {
        [only] => *only,
        _ => return Ok(Outcome::NotHandled),
    };

    tree_ops::replace_with(tree, site.parent(), replacement)?;
    Ok(Outcome::Handled(Resolution::Collapsed { replacement }))
}

/// `left + NODE` becomes `left`, `NODE + right` becomes `right`
fn collapse_binary(tree: &mut Tree, site: &RemovalSite) -> Result<Outcome> {
    if !site.parent_kind.is(Category::Binary) {
        return Ok(Outcome::NotHandled);
    }

    let surviving = if site.key() == Field::Left {
        Field::Right
    } else {
        Field::Left
    };

    let Some(replacement) = tree.child(site.parent(), surviving)? else {
        return Ok(Outcome::NotHandled);
    };

    tree_ops::replace_with(tree, site.parent(), replacement)?;
    Ok(Outcome::Handled(Resolution::Collapsed { replacement }))
}
