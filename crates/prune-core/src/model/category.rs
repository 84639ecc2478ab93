//! Node category oracle
//!
//! Grammatical categories are a static, multi-valued property of a
//! [`NodeKind`]: a `WhileStatement` is a statement, a loop and while-shaped
//! at once. Removal hooks only ever ask "is this node of category C", never
//! match on kinds directly.

use serde::{Deserialize, Serialize};

use super::kind::NodeKind;

/// Grammatical category a node kind can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Program,
    Statement,
    Expression,
    Declaration,
    /// Brace-delimited statement list (`{ ... }`)
    Block,
    ClassBody,
    Function,
    ArrowFunction,
    Class,
    Throw,
    Loop,
    /// `while (test) body` and `do body while (test)`
    While,
    SwitchCase,
    /// Named, default and `export *` declarations
    ExportDeclaration,
    LabeledStatement,
    VariableDeclaration,
    ExpressionStatement,
    IfStatement,
    SequenceExpression,
    /// Two-operand operator expressions (arithmetic and logical)
    Binary,
    Literal,
    Identifier,
}

use Category as C;

impl NodeKind {
    /// All categories this kind belongs to
    pub fn categories(&self) -> &'static [Category] {
        match self {
            NodeKind::Program => &[C::Program],
            NodeKind::BlockStatement => &[C::Statement, C::Block],
            NodeKind::EmptyStatement
            | NodeKind::BreakStatement
            | NodeKind::ContinueStatement
            | NodeKind::ReturnStatement
            | NodeKind::SwitchStatement => &[C::Statement],
            NodeKind::ExpressionStatement => &[C::Statement, C::ExpressionStatement],
            NodeKind::IfStatement => &[C::Statement, C::IfStatement],
            NodeKind::LabeledStatement => &[C::Statement, C::LabeledStatement],
            NodeKind::ThrowStatement => &[C::Statement, C::Throw],
            NodeKind::WhileStatement | NodeKind::DoWhileStatement => {
                &[C::Statement, C::Loop, C::While]
            }
            NodeKind::ForStatement => &[C::Statement, C::Loop],
            NodeKind::SwitchCase => &[C::SwitchCase],
            NodeKind::VariableDeclaration => {
                &[C::Statement, C::Declaration, C::VariableDeclaration]
            }
            NodeKind::VariableDeclarator | NodeKind::ClassProperty => &[],
            NodeKind::FunctionDeclaration => &[C::Statement, C::Declaration, C::Function],
            NodeKind::ClassDeclaration => &[C::Statement, C::Declaration, C::Class],
            NodeKind::ClassBody => &[C::ClassBody],
            NodeKind::ExportNamedDeclaration
            | NodeKind::ExportDefaultDeclaration
            | NodeKind::ExportAllDeclaration => {
                &[C::Statement, C::Declaration, C::ExportDeclaration]
            }
            NodeKind::Identifier => &[C::Expression, C::Identifier],
            NodeKind::NumericLiteral
            | NodeKind::StringLiteral
            | NodeKind::BooleanLiteral
            | NodeKind::NullLiteral => &[C::Expression, C::Literal],
            NodeKind::FunctionExpression => &[C::Expression, C::Function],
            NodeKind::ArrowFunctionExpression => {
                &[C::Expression, C::Function, C::ArrowFunction]
            }
            NodeKind::ClassExpression => &[C::Expression, C::Class],
            NodeKind::SequenceExpression => &[C::Expression, C::SequenceExpression],
            NodeKind::BinaryExpression | NodeKind::LogicalExpression => {
                &[C::Expression, C::Binary]
            }
            NodeKind::ThisExpression
            | NodeKind::AssignmentExpression
            | NodeKind::UnaryExpression
            | NodeKind::UpdateExpression
            | NodeKind::ConditionalExpression
            | NodeKind::CallExpression
            | NodeKind::MemberExpression
            | NodeKind::ArrayExpression => &[C::Expression],
        }
    }

    /// Check membership in a single category
    pub fn is(&self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    /// Check membership in any of the given categories
    pub fn is_any(&self, categories: &[Category]) -> bool {
        categories.iter().any(|c| self.is(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_while_shapes() {
        assert!(NodeKind::WhileStatement.is(Category::While));
        assert!(NodeKind::DoWhileStatement.is(Category::While));
        assert!(!NodeKind::ForStatement.is(Category::While));
        assert!(NodeKind::ForStatement.is(Category::Loop));
    }

    #[test]
    fn test_binary_covers_logical_but_not_assignment() {
        assert!(NodeKind::BinaryExpression.is(Category::Binary));
        assert!(NodeKind::LogicalExpression.is(Category::Binary));
        assert!(!NodeKind::AssignmentExpression.is(Category::Binary));
    }

    #[test]
    fn test_export_declarations() {
        for kind in [
            NodeKind::ExportNamedDeclaration,
            NodeKind::ExportDefaultDeclaration,
            NodeKind::ExportAllDeclaration,
        ] {
            assert!(kind.is(Category::ExportDeclaration), "{}", kind);
        }
    }

    #[test]
    fn test_block_shaped() {
        assert!(NodeKind::BlockStatement.is_any(&[Category::Block, Category::ClassBody]));
        assert!(NodeKind::ClassBody.is_any(&[Category::Block, Category::ClassBody]));
        assert!(!NodeKind::Program.is_any(&[Category::Block, Category::ClassBody]));
    }

    #[test]
    fn test_helper_kinds_match_nothing() {
        assert!(NodeKind::VariableDeclarator.categories().is_empty());
        assert!(!NodeKind::VariableDeclarator.is(Category::Statement));
    }
}
