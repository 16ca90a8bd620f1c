/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      engine.rs
 * Purpose:   The table-driven shift-reduce engine: a finite-state
 *            automaton over two synchronized stacks that turns the token
 *            stream into a syntax tree.
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
use crate::error::{InternalError, ParseError};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::builders;
use crate::parser::grammar::{Action, GrammarTable};

/// Parses a token stream into a syntax tree using the language table.
///
/// The stream must be non-empty and terminated by exactly one `End`
/// sentinel, as produced by [`crate::lexer::tokenize`]. The input is
/// never mutated; on success the caller owns the returned tree.
pub fn parse(tokens: &[Token]) -> Result<AstNode, ParseError> {
    Engine::new().parse(tokens)
}

/// The LR automaton bound to a grammar table.
///
/// Every parse call owns its own stacks and cursor, so one engine (and
/// the process-wide table behind it) can serve any number of calls,
/// concurrent ones included.
pub struct Engine<'g> {
    table: &'g GrammarTable,
}

impl Engine<'static> {
    /// An engine over the Romula language table.
    pub fn new() -> Self {
        Self {
            table: GrammarTable::language(),
        }
    }
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> Engine<'g> {
    /// An engine over a caller-supplied table. Lets tests run the loop
    /// against corrupted tables and observe the internal-error paths.
    pub fn with_table(table: &'g GrammarTable) -> Self {
        Self { table }
    }

    /// Runs the automaton to completion.
    ///
    /// # Algorithm
    /// One pass, no lookahead beyond the current token, no backtracking:
    /// - **Shift**: push the target state, push a placeholder leaf for
    ///   the token, advance the cursor.
    /// - **Reduce**: pop `arity` entries from both stacks, hand the
    ///   popped values (in original order) to the production's builder,
    ///   then push the goto state and the new node. The cursor stays.
    /// - **Accept**: exactly one value must remain; it is the program.
    /// - No table entry for (state, token) is a syntax error.
    ///
    /// Between steps the state stack is always exactly one deeper than
    /// the value stack (the bottom state has no value).
    ///
    /// # Errors
    /// [`ParseError::Syntax`] for bad input; [`ParseError::Internal`]
    /// when the table itself breaks an invariant (underflow on reduce,
    /// missing goto, wrong residue at accept).
    pub fn parse(&self, tokens: &[Token]) -> Result<AstNode, ParseError> {
        let mut state_stack: Vec<usize> = vec![0];
        let mut value_stack: Vec<AstNode> = Vec::new();
        let mut position: usize = 0;

        loop {
            debug_assert_eq!(state_stack.len(), value_stack.len() + 1);

            let state = state_stack.last().copied().unwrap_or(0);

            // Past the end counts as the sentinel; with a well-formed
            // stream the sentinel itself is never shifted, so this only
            // matters for inputs that violate the precondition.
            let current = tokens.get(position);
            let kind = current.map(|t| t.kind).unwrap_or(TokenKind::End);

            match self.table.action(state, kind) {
                None => {
                    let token = current.cloned().unwrap_or_else(|| {
                        Token::end(tokens.last().map(|t| t.span).unwrap_or_default())
                    });
                    return Err(ParseError::Syntax { token, state });
                }

                Some(Action::Shift(target)) => {
                    let lexeme = current.map(|t| t.lexeme.as_str()).unwrap_or("");
                    state_stack.push(target);
                    value_stack.push(AstNode::leaf(NodeKind::Token, lexeme));
                    position += 1;
                }

                Some(Action::Reduce(id)) => {
                    let production = match self.table.production(id) {
                        Some(p) => *p,
                        None => {
                            return Err(InternalError::BadProduction { production: id }.into())
                        }
                    };

                    // The bottom state must survive the pops; it is the
                    // goto base.
                    if value_stack.len() < production.arity
                        || state_stack.len() < production.arity + 1
                    {
                        return Err(InternalError::StackUnderflow { production: id }.into());
                    }

                    state_stack.truncate(state_stack.len() - production.arity);
                    // split_off keeps the children in left-to-right order.
                    let children = value_stack.split_off(value_stack.len() - production.arity);

                    let node = builders::build(production.rule, children).ok_or(
                        ParseError::Internal(InternalError::BadProduction { production: id }),
                    )?;

                    let uncovered = state_stack.last().copied().unwrap_or(0);
                    let target = self.table.goto(uncovered, production.left).ok_or(
                        ParseError::Internal(InternalError::MissingGoto {
                            state: uncovered,
                            nonterminal: production.left,
                        }),
                    )?;

                    state_stack.push(target);
                    value_stack.push(node);
                }

                Some(Action::Accept) => {
                    return if value_stack.len() == 1 {
                        value_stack.pop().ok_or(ParseError::Internal(
                            InternalError::MultipleRoots { values: 0 },
                        ))
                    } else {
                        Err(ParseError::Internal(InternalError::MultipleRoots {
                            values: value_stack.len(),
                        }))
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::grammar::Nonterminal;
    use pretty_assertions::assert_eq;

    fn leaf(kind: NodeKind, value: &str) -> AstNode {
        AstNode::leaf(kind, value)
    }

    fn branch(kind: NodeKind, children: Vec<AstNode>) -> AstNode {
        AstNode::branch(kind, children)
    }

    fn parse_source(source: &str) -> Result<AstNode, ParseError> {
        let tokens = tokenize(source).expect("tokenize failed");
        parse(&tokens)
    }

    #[test]
    fn parses_a_single_loop() {
        let tree = parse_source("while (x < V) y := I done").expect("parse failed");

        let expected = branch(
            NodeKind::Program,
            vec![branch(
                NodeKind::StatementList,
                vec![branch(
                    NodeKind::WhileLoop,
                    vec![
                        branch(
                            NodeKind::Condition,
                            vec![
                                leaf(NodeKind::Identifier, "x"),
                                leaf(NodeKind::RelOp, "<"),
                                leaf(NodeKind::RomanNumeral, "V"),
                            ],
                        ),
                        branch(
                            NodeKind::Assignment,
                            vec![
                                leaf(NodeKind::LValue, "y"),
                                leaf(NodeKind::RomanNumeral, "I"),
                            ],
                        ),
                    ],
                )],
            )],
        );

        assert_eq!(tree, expected);
    }

    #[test]
    fn statement_lists_grow_to_the_left() {
        let tree = parse_source("while (a = I) b := X done; while (n > III) m := a done")
            .expect("parse failed");

        assert_eq!(tree.kind, NodeKind::Program);
        let outer = &tree.children[0];
        assert_eq!(outer.kind, NodeKind::StatementList);
        assert_eq!(outer.children.len(), 2);

        // First child: the list-so-far, itself wrapping the first loop.
        let first = &outer.children[0];
        assert_eq!(first.kind, NodeKind::StatementList);
        assert_eq!(first.children.len(), 1);
        assert_eq!(first.children[0].kind, NodeKind::WhileLoop);

        // Second child: the new statement, attached directly.
        let second = &outer.children[1];
        assert_eq!(second.kind, NodeKind::WhileLoop);
    }

    #[test]
    fn parsing_is_deterministic() {
        let tokens = tokenize("while (a = I) b := X done").expect("tokenize failed");
        let first = parse(&tokens).expect("parse failed");
        let second = parse(&tokens).expect("parse failed");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_done_is_a_syntax_error_at_the_sentinel() {
        let err = parse_source("while (x < V) y := I").expect_err("expected a syntax error");

        match err {
            ParseError::Syntax { token, state } => {
                assert_eq!(token.kind, TokenKind::End);
                // The state that just scanned the assignment's value and
                // still needs 'done'.
                assert_eq!(state, 9);
            }
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn stray_token_reports_token_and_state() {
        let err = parse_source("while while").expect_err("expected a syntax error");

        match err {
            ParseError::Syntax { token, state } => {
                assert_eq!(token.kind, TokenKind::While);
                assert_eq!(state, 4);
            }
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn empty_stream_fails_in_the_start_state() {
        let err = parse(&[]).expect_err("expected a syntax error");

        match err {
            ParseError::Syntax { token, state } => {
                assert_eq!(token.kind, TokenKind::End);
                assert_eq!(state, 0);
            }
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn corrupted_reduce_underflows_distinctly_from_syntax_errors() {
        // Force an immediate reduce of the six-symbol while production
        // on an empty stack.
        let mut table = GrammarTable::language().clone();
        table
            .actions
            .insert((0, TokenKind::While), Action::Reduce(4));

        let tokens = tokenize("while (x < V) y := I done").expect("tokenize failed");
        let err = Engine::with_table(&table)
            .parse(&tokens)
            .expect_err("expected an internal error");

        assert_eq!(
            err,
            ParseError::Internal(InternalError::StackUnderflow { production: 4 })
        );
    }

    #[test]
    fn unknown_production_id_is_an_internal_error() {
        let mut table = GrammarTable::language().clone();
        table
            .actions
            .insert((0, TokenKind::While), Action::Reduce(99));

        let tokens = tokenize("while (x < V) y := I done").expect("tokenize failed");
        let err = Engine::with_table(&table)
            .parse(&tokens)
            .expect_err("expected an internal error");

        assert_eq!(
            err,
            ParseError::Internal(InternalError::BadProduction { production: 99 })
        );
    }

    #[test]
    fn missing_goto_is_an_internal_error() {
        let mut table = GrammarTable::language().clone();
        table.gotos.remove(&(0, Nonterminal::StatementList));

        let tokens = tokenize("while (x < V) y := I done").expect("tokenize failed");
        let err = Engine::with_table(&table)
            .parse(&tokens)
            .expect_err("expected an internal error");

        assert_eq!(
            err,
            ParseError::Internal(InternalError::MissingGoto {
                state: 0,
                nonterminal: Nonterminal::StatementList,
            })
        );
    }

    #[test]
    fn premature_accept_reports_the_residue() {
        // Accept in the middle of a statement, with the six entries of
        // the while production still on the value stack.
        let mut table = GrammarTable::language().clone();
        table
            .actions
            .insert((22, TokenKind::Semicolon), Action::Accept);

        let tokens = tokenize("while (a = I) b := X done; while (n > III) m := a done")
            .expect("tokenize failed");
        let err = Engine::with_table(&table)
            .parse(&tokens)
            .expect_err("expected an internal error");

        assert_eq!(
            err,
            ParseError::Internal(InternalError::MultipleRoots { values: 6 })
        );
    }
}
