/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Error types for the Romula front end: lexical errors, syntax
 *            errors, and internal table-consistency errors.
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

use crate::lexer::token::{Token, TokenKind};
use crate::parser::grammar::Nonterminal;
use crate::span::Span;
use std::fmt;

/// An invalid character in the source text.
///
/// Produced only by the lexer. The scan stops at the first bad character;
/// no token stream is handed to the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// The character that could not start any token.
    pub character: char,

    /// Where it was found.
    pub span: Span,
}

impl LexError {
    pub fn new(character: char, span: Span) -> Self {
        Self { character, span }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid character '{}'", self.character)
    }
}

impl std::error::Error for LexError {}

/// A failure inside the parsing engine.
///
/// The two variants are deliberately disjoint: `Syntax` describes the
/// input, `Internal` describes the grammar table. A harness can therefore
/// assert "the table is well-formed" independently of "the input is
/// syntactically valid".
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Unexpected terminal in a given automaton state. Recoverable; the
    /// caller receives no AST.
    Syntax {
        /// The offending token (the `End` sentinel when the input stopped
        /// too early).
        token: Token,

        /// The automaton state that had no action for the token.
        state: usize,
    },

    /// The grammar table violated an engine invariant. Never a property
    /// of the input; fatal to this parse call only.
    Internal(InternalError),
}

/// The ways a malformed grammar table can surface during a parse.
#[derive(Debug, Clone, PartialEq)]
pub enum InternalError {
    /// A reduce needed more entries than the stacks held.
    StackUnderflow { production: usize },

    /// No goto entry for the uncovered state after a successful reduce.
    MissingGoto {
        state: usize,
        nonterminal: Nonterminal,
    },

    /// The value stack did not hold exactly one root at accept.
    MultipleRoots { values: usize },

    /// A reduce referenced a production id with no table entry, or the
    /// production's children did not match its builder.
    BadProduction { production: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { token, state } => {
                if token.kind == TokenKind::End {
                    write!(f, "unexpected end of input in state {}", state)
                } else {
                    write!(f, "unexpected token '{}' in state {}", token, state)
                }
            }
            ParseError::Internal(inner) => write!(f, "{}", inner),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternalError::StackUnderflow { production } => {
                write!(f, "stack underflow while reducing production {}", production)
            }
            InternalError::MissingGoto { state, nonterminal } => {
                write!(f, "no goto for {:?} in state {}", nonterminal, state)
            }
            InternalError::MultipleRoots { values } => {
                write!(f, "{} values left on the stack at accept", values)
            }
            InternalError::BadProduction { production } => {
                write!(f, "no production with id {}", production)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<InternalError> for ParseError {
    fn from(inner: InternalError) -> Self {
        ParseError::Internal(inner)
    }
}

/// Any failure the Romula front end can report to a user.
#[derive(Debug, Clone, PartialEq)]
pub enum RomulaError {
    Lex(LexError),
    Parse(ParseError),
}

impl RomulaError {
    /// Stable error code (E_LEX, E_SYNTAX, E_INTERNAL).
    pub fn code(&self) -> &'static str {
        match self {
            RomulaError::Lex(_) => "E_LEX",
            RomulaError::Parse(ParseError::Syntax { .. }) => "E_SYNTAX",
            RomulaError::Parse(ParseError::Internal(_)) => "E_INTERNAL",
        }
    }

    /// Primary source location, when the error has one.
    ///
    /// Internal errors describe the grammar table rather than the input
    /// and carry no position.
    pub fn span(&self) -> Option<Span> {
        match self {
            RomulaError::Lex(err) => Some(err.span),
            RomulaError::Parse(ParseError::Syntax { token, .. }) => Some(token.span),
            RomulaError::Parse(ParseError::Internal(_)) => None,
        }
    }

    /// Optional follow-up hint shown under the diagnostic.
    pub fn help(&self) -> Option<String> {
        match self {
            RomulaError::Lex(_) => Some(
                "valid tokens are words, Roman numerals, and ; ( ) := < > =".to_string(),
            ),
            RomulaError::Parse(ParseError::Syntax { token, .. })
                if token.kind == TokenKind::End =>
            {
                Some("every while loop must be closed with 'done'".to_string())
            }
            RomulaError::Parse(ParseError::Syntax { .. }) => None,
            RomulaError::Parse(ParseError::Internal(_)) => Some(
                "this is a defect in the parser tables, not in the input".to_string(),
            ),
        }
    }
}

impl fmt::Display for RomulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomulaError::Lex(err) => write!(f, "{}", err),
            RomulaError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RomulaError {}

impl From<LexError> for RomulaError {
    fn from(err: LexError) -> Self {
        RomulaError::Lex(err)
    }
}

impl From<ParseError> for RomulaError {
    fn from(err: ParseError) -> Self {
        RomulaError::Parse(err)
    }
}
