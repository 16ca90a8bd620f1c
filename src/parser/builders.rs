/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      builders.rs
 * Purpose:   Per-production AST construction invoked by the engine on
 *            every reduce.
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

use crate::ast::{AstNode, NodeKind};
use crate::parser::grammar::Rule;

/// Builds the node for one reduced production.
///
/// `children` holds the popped stack values in original left-to-right
/// order, one per right-hand symbol. Keyword and punctuation placeholders
/// are consumed here and dropped; only meaningful terminals and completed
/// subtrees make it into the result.
///
/// Returns `None` when the children do not match the production's shape,
/// which the engine reports as a table-consistency error.
pub(crate) fn build(rule: Rule, children: Vec<AstNode>) -> Option<AstNode> {
    let mut parts = children.into_iter();

    let node = match rule {
        // Pass-throughs: no wrapper node of their own.
        Rule::Start | Rule::Body => parts.next()?,

        Rule::Program => AstNode::branch(NodeKind::Program, vec![parts.next()?]),

        Rule::StatementFirst => {
            AstNode::branch(NodeKind::StatementList, vec![parts.next()?])
        }

        // The list-so-far stays nested as the first child; the chain
        // grows to the left rather than flattening.
        Rule::StatementAppend => {
            let list = parts.next()?;
            let _semicolon = parts.next()?;
            let statement = parts.next()?;
            AstNode::branch(NodeKind::StatementList, vec![list, statement])
        }

        Rule::WhileLoop => {
            let _kw_while = parts.next()?;
            let _lparen = parts.next()?;
            let condition = parts.next()?;
            let _rparen = parts.next()?;
            let body = parts.next()?;
            let _kw_done = parts.next()?;
            AstNode::branch(NodeKind::WhileLoop, vec![condition, body])
        }

        Rule::Condition => {
            let left = parts.next()?;
            let relop = parts.next()?;
            let right = parts.next()?;
            AstNode::branch(NodeKind::Condition, vec![left, relop, right])
        }

        Rule::Assignment => {
            let target = parts.next()?;
            let _assign = parts.next()?;
            let value = parts.next()?;
            let lvalue = AstNode::leaf(NodeKind::LValue, target.value.unwrap_or_default());
            AstNode::branch(NodeKind::Assignment, vec![lvalue, value])
        }

        Rule::ExprIdentifier => promote(parts.next()?, NodeKind::Identifier),
        Rule::ExprRoman => promote(parts.next()?, NodeKind::RomanNumeral),

        Rule::RelOpLess | Rule::RelOpGreater | Rule::RelOpEqual => {
            promote(parts.next()?, NodeKind::RelOp)
        }
    };

    // Leftover children mean the table's arity disagrees with the rule.
    match parts.next() {
        Some(_) => None,
        None => Some(node),
    }
}

/// Turns a shifted token placeholder into a proper leaf, keeping its text.
fn promote(token: AstNode, kind: NodeKind) -> AstNode {
    AstNode::leaf(kind, token.value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str) -> AstNode {
        AstNode::leaf(NodeKind::Token, text)
    }

    #[test]
    fn relop_promotes_the_operator_text() {
        let node = build(Rule::RelOpLess, vec![token("<")]).expect("build failed");
        assert_eq!(node, AstNode::leaf(NodeKind::RelOp, "<"));
    }

    #[test]
    fn assignment_synthesizes_the_lvalue_leaf() {
        let value = AstNode::leaf(NodeKind::RomanNumeral, "I");
        let node = build(
            Rule::Assignment,
            vec![token("y"), token(":="), value.clone()],
        )
        .expect("build failed");

        assert_eq!(
            node,
            AstNode::branch(
                NodeKind::Assignment,
                vec![AstNode::leaf(NodeKind::LValue, "y"), value],
            )
        );
    }

    #[test]
    fn while_loop_keeps_only_condition_and_body() {
        let condition = AstNode::branch(NodeKind::Condition, vec![]);
        let body = AstNode::branch(NodeKind::Assignment, vec![]);
        let node = build(
            Rule::WhileLoop,
            vec![
                token("while"),
                token("("),
                condition.clone(),
                token(")"),
                body.clone(),
                token("done"),
            ],
        )
        .expect("build failed");

        assert_eq!(
            node,
            AstNode::branch(NodeKind::WhileLoop, vec![condition, body])
        );
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        assert_eq!(build(Rule::Condition, vec![token("<")]), None);
        assert_eq!(
            build(Rule::ExprIdentifier, vec![token("a"), token("b")]),
            None
        );
    }
}
