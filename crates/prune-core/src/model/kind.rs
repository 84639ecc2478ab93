use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::field::{Field, Shape};

/// Grammar shape of a node
///
/// Variant names are the ESTree/Babel `type` tags, so a kind serializes as
/// the tag it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    // Program / statements
    Program,
    BlockStatement,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ThrowStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    SwitchStatement,
    SwitchCase,

    // Declarations
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    ClassDeclaration,
    ClassBody,
    ClassProperty,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,

    // Expressions
    Identifier,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    ThisExpression,
    FunctionExpression,
    ArrowFunctionExpression,
    ClassExpression,
    SequenceExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    UnaryExpression,
    UpdateExpression,
    ConditionalExpression,
    CallExpression,
    MemberExpression,
    ArrayExpression,
}

use Field as F;
use Shape::{Optional as Opt, Required as Req, Sequence as Seq};

impl NodeKind {
    /// Every kind, in declaration order
    pub const ALL: [NodeKind; 43] = [
        NodeKind::Program,
        NodeKind::BlockStatement,
        NodeKind::EmptyStatement,
        NodeKind::ExpressionStatement,
        NodeKind::IfStatement,
        NodeKind::LabeledStatement,
        NodeKind::BreakStatement,
        NodeKind::ContinueStatement,
        NodeKind::ReturnStatement,
        NodeKind::ThrowStatement,
        NodeKind::WhileStatement,
        NodeKind::DoWhileStatement,
        NodeKind::ForStatement,
        NodeKind::SwitchStatement,
        NodeKind::SwitchCase,
        NodeKind::VariableDeclaration,
        NodeKind::VariableDeclarator,
        NodeKind::FunctionDeclaration,
        NodeKind::ClassDeclaration,
        NodeKind::ClassBody,
        NodeKind::ClassProperty,
        NodeKind::ExportNamedDeclaration,
        NodeKind::ExportDefaultDeclaration,
        NodeKind::ExportAllDeclaration,
        NodeKind::Identifier,
        NodeKind::NumericLiteral,
        NodeKind::StringLiteral,
        NodeKind::BooleanLiteral,
        NodeKind::NullLiteral,
        NodeKind::ThisExpression,
        NodeKind::FunctionExpression,
        NodeKind::ArrowFunctionExpression,
        NodeKind::ClassExpression,
        NodeKind::SequenceExpression,
        NodeKind::BinaryExpression,
        NodeKind::LogicalExpression,
        NodeKind::AssignmentExpression,
        NodeKind::UnaryExpression,
        NodeKind::UpdateExpression,
        NodeKind::ConditionalExpression,
        NodeKind::CallExpression,
        NodeKind::MemberExpression,
        NodeKind::ArrayExpression,
    ];

    /// Child fields of this kind, in source order
    pub fn schema(&self) -> &'static [(Field, Shape)] {
        match self {
            NodeKind::Program | NodeKind::BlockStatement | NodeKind::ClassBody => {
                &[(F::Body, Seq)]
            }
            NodeKind::ExpressionStatement => &[(F::Expression, Req)],
            NodeKind::IfStatement => &[(F::Test, Req), (F::Consequent, Req), (F::Alternate, Opt)],
            NodeKind::LabeledStatement => &[(F::Label, Req), (F::Body, Req)],
            NodeKind::BreakStatement | NodeKind::ContinueStatement => &[(F::Label, Opt)],
            NodeKind::ReturnStatement => &[(F::Argument, Opt)],
            NodeKind::ThrowStatement
            | NodeKind::UnaryExpression
            | NodeKind::UpdateExpression => &[(F::Argument, Req)],
            NodeKind::WhileStatement => &[(F::Test, Req), (F::Body, Req)],
            NodeKind::DoWhileStatement => &[(F::Body, Req), (F::Test, Req)],
            NodeKind::ForStatement => &[
                (F::Init, Opt),
                (F::Test, Opt),
                (F::Update, Opt),
                (F::Body, Req),
            ],
            NodeKind::SwitchStatement => &[(F::Discriminant, Req), (F::Cases, Seq)],
            // `test` is absent for the `default:` case
            NodeKind::SwitchCase => &[(F::Test, Opt), (F::Consequent, Seq)],
            NodeKind::VariableDeclaration => &[(F::Declarations, Seq)],
            NodeKind::VariableDeclarator => &[(F::Id, Req), (F::Init, Opt)],
            NodeKind::FunctionDeclaration | NodeKind::FunctionExpression => {
                &[(F::Id, Opt), (F::Params, Seq), (F::Body, Req)]
            }
            NodeKind::ArrowFunctionExpression => &[(F::Params, Seq), (F::Body, Req)],
            NodeKind::ClassDeclaration | NodeKind::ClassExpression => {
                &[(F::Id, Opt), (F::SuperClass, Opt), (F::Body, Req)]
            }
            NodeKind::ClassProperty => &[(F::Key, Req), (F::Value, Opt)],
            NodeKind::ExportNamedDeclaration => &[(F::Declaration, Opt)],
            NodeKind::ExportDefaultDeclaration => &[(F::Declaration, Req)],
            NodeKind::ExportAllDeclaration => &[(F::Source, Req)],
            NodeKind::SequenceExpression => &[(F::Expressions, Seq)],
            NodeKind::BinaryExpression
            | NodeKind::LogicalExpression
            | NodeKind::AssignmentExpression => &[(F::Left, Req), (F::Right, Req)],
            NodeKind::ConditionalExpression => {
                &[(F::Test, Req), (F::Consequent, Req), (F::Alternate, Req)]
            }
            NodeKind::CallExpression => &[(F::Callee, Req), (F::Arguments, Seq)],
            NodeKind::MemberExpression => &[(F::Object, Req), (F::Property, Req)],
            NodeKind::ArrayExpression => &[(F::Elements, Seq)],
            NodeKind::EmptyStatement
            | NodeKind::Identifier
            | NodeKind::NumericLiteral
            | NodeKind::StringLiteral
            | NodeKind::BooleanLiteral
            | NodeKind::NullLiteral
            | NodeKind::ThisExpression => &[],
        }
    }

    /// Shape of `field` on this kind, if the field exists
    pub fn shape_of(&self, field: Field) -> Option<Shape> {
        self.schema()
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, shape)| *shape)
    }

    /// JSON key holding this kind's scalar payload (name, literal value, operator)
    pub fn scalar_key(&self) -> Option<&'static str> {
        match self {
            NodeKind::Identifier => Some("name"),
            NodeKind::NumericLiteral | NodeKind::StringLiteral | NodeKind::BooleanLiteral => {
                Some("value")
            }
            NodeKind::BinaryExpression
            | NodeKind::LogicalExpression
            | NodeKind::AssignmentExpression
            | NodeKind::UnaryExpression
            | NodeKind::UpdateExpression => Some("operator"),
            NodeKind::VariableDeclaration => Some("kind"),
            _ => None,
        }
    }

    /// The ESTree `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::LabeledStatement => "LabeledStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::ThrowStatement => "ThrowStatement",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::DoWhileStatement => "DoWhileStatement",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::SwitchCase => "SwitchCase",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::ClassBody => "ClassBody",
            NodeKind::ClassProperty => "ClassProperty",
            NodeKind::ExportNamedDeclaration => "ExportNamedDeclaration",
            NodeKind::ExportDefaultDeclaration => "ExportDefaultDeclaration",
            NodeKind::ExportAllDeclaration => "ExportAllDeclaration",
            NodeKind::Identifier => "Identifier",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::FunctionExpression => "FunctionExpression",
            NodeKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            NodeKind::ClassExpression => "ClassExpression",
            NodeKind::SequenceExpression => "SequenceExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::LogicalExpression => "LogicalExpression",
            NodeKind::AssignmentExpression => "AssignmentExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::UpdateExpression => "UpdateExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::ArrayExpression => "ArrayExpression",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown node kind '{}'", s))
    }
}
