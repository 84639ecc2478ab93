use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Name of a child field on a node
///
/// The set is closed: every field any [`NodeKind`](super::NodeKind) schema
/// mentions appears here. Names serialize in ESTree spelling (`superClass`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Body,
    Test,
    Consequent,
    Alternate,
    Argument,
    Declaration,
    Declarations,
    Expression,
    Expressions,
    Left,
    Right,
    Label,
    Id,
    Init,
    Update,
    Params,
    Callee,
    Arguments,
    Object,
    Property,
    Cases,
    Discriminant,
    Key,
    Value,
    Elements,
    SuperClass,
    Source,
}

impl Field {
    /// Every field, in declaration order
    pub const ALL: [Field; 27] = [
        Field::Body,
        Field::Test,
        Field::Consequent,
        Field::Alternate,
        Field::Argument,
        Field::Declaration,
        Field::Declarations,
        Field::Expression,
        Field::Expressions,
        Field::Left,
        Field::Right,
        Field::Label,
        Field::Id,
        Field::Init,
        Field::Update,
        Field::Params,
        Field::Callee,
        Field::Arguments,
        Field::Object,
        Field::Property,
        Field::Cases,
        Field::Discriminant,
        Field::Key,
        Field::Value,
        Field::Elements,
        Field::SuperClass,
        Field::Source,
    ];

    /// ESTree spelling of the field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Body => "body",
            Field::Test => "test",
            Field::Consequent => "consequent",
            Field::Alternate => "alternate",
            Field::Argument => "argument",
            Field::Declaration => "declaration",
            Field::Declarations => "declarations",
            Field::Expression => "expression",
            Field::Expressions => "expressions",
            Field::Left => "left",
            Field::Right => "right",
            Field::Label => "label",
            Field::Id => "id",
            Field::Init => "init",
            Field::Update => "update",
            Field::Params => "params",
            Field::Callee => "callee",
            Field::Arguments => "arguments",
            Field::Object => "object",
            Field::Property => "property",
            Field::Cases => "cases",
            Field::Discriminant => "discriminant",
            Field::Key => "key",
            Field::Value => "value",
            Field::Elements => "elements",
            Field::SuperClass => "superClass",
            Field::Source => "source",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// How a field holds its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly one child; an empty slot leaves the parent invalid
    Required,
    /// Zero or one child
    Optional,
    /// Ordered list of children
    Sequence,
}

impl Shape {
    pub fn is_sequence(&self) -> bool {
        matches!(self, Shape::Sequence)
    }
}
