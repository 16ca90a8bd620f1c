/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      ast/mod.rs
 * Purpose:   The abstract syntax tree produced by the parsing engine.
 *
 * License:
 * This file is part of the Romula programming language project.
 *
 * Romula is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::Serialize;
use std::fmt;

/// The closed set of node tags appearing in a Romula syntax tree.
///
/// Keywords and punctuation never reach the tree; only semantically
/// meaningful terminals (identifiers, numerals, relational operators) and
/// grammar reductions produce nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// Root of every successful parse; wraps one `StatementList`.
    Program,

    /// A statement chain. Wraps a single statement, or a previously built
    /// list plus one more statement (the chain grows to the left).
    StatementList,

    /// A `while ( condition ) body done` loop; children are the condition
    /// and the body.
    WhileLoop,

    /// `expression relop expression`; exactly three children.
    Condition,

    /// `identifier := expression`; children are the target and the value.
    Assignment,

    /// Leaf naming the assignment target; value holds the identifier text.
    LValue,

    /// Leaf for a variable reference; value holds the identifier text.
    Identifier,

    /// Leaf for a Roman-numeral literal; value holds the numeral text.
    RomanNumeral,

    /// Leaf for a relational operator; value is `<`, `>`, or `=`.
    RelOp,

    /// Placeholder leaf for a shifted terminal.
    ///
    /// Lives only on the engine's value stack between a shift and the
    /// reduce that consumes it; builders either drop it (punctuation) or
    /// promote its value into a proper leaf. It never appears in a
    /// finished tree.
    Token,
}

impl NodeKind {
    /// The printable tag of this node kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::StatementList => "StatementList",
            NodeKind::WhileLoop => "WhileLoop",
            NodeKind::Condition => "Condition",
            NodeKind::Assignment => "Assignment",
            NodeKind::LValue => "LValue",
            NodeKind::Identifier => "Identifier",
            NodeKind::RomanNumeral => "RomanNumeral",
            NodeKind::RelOp => "RelOp",
            NodeKind::Token => "Token",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of the syntax tree.
///
/// Each node exclusively owns its children; the tree has no sharing and no
/// cycles, and a node's children are populated once at construction and
/// never mutated afterwards. On a successful parse the root's ownership
/// passes to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstNode {
    /// The node's tag.
    pub kind: NodeKind,

    /// Literal text for leaves (identifier name, numeral, operator).
    /// Interior nodes carry no value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Child nodes in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// A leaf node carrying literal text.
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// An interior node wrapping already-built children.
    pub fn branch(kind: NodeKind, children: Vec<AstNode>) -> Self {
        Self {
            kind,
            value: None,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_json_without_empty_fields() {
        let tree = AstNode::branch(
            NodeKind::Assignment,
            vec![
                AstNode::leaf(NodeKind::LValue, "y"),
                AstNode::leaf(NodeKind::RomanNumeral, "I"),
            ],
        );

        let json = serde_json::to_value(&tree).expect("serialization failed");
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "Assignment",
                "children": [
                    { "kind": "LValue", "value": "y" },
                    { "kind": "RomanNumeral", "value": "I" },
                ],
            })
        );
    }
}
