/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Library root for the Romula front end. Wires the pipeline
 *           modules together and exposes the public entry points.
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

//! The Romula front end.
//!
//! Romula is a minimal imperative language: programs are `;`-separated
//! `while (condition) body done` loops, conditions compare identifiers and
//! Roman-numeral literals with `<`, `>`, or `=`, and a body is a single
//! `identifier := expression` assignment.
//!
//! ```text
//! Source Code → Lexer → Tokens → LR Engine → AST → Printer
//! ```
//!
//! The parser is a table-driven shift-reduce engine: a hand-built SLR(1)
//! action/goto table drives two synchronized stacks, and per-production
//! builders assemble the tree during reduces.
//!
//! # Example
//! ```
//! let tree = romula::compile("while (x < V) y := I done").unwrap();
//! print!("{}", romula::printer::render(&tree));
//! ```

/// Syntax tree node types.
pub mod ast;

/// Compiler-style error rendering (source line + caret).
pub mod diagnostics;

/// Error taxonomy: lexical, syntax, and internal table errors.
pub mod error;

/// Character-level scanner.
pub mod lexer;

/// The LR engine and its static grammar tables.
pub mod parser;

/// Indented tree output.
pub mod printer;

/// Source positions.
pub mod span;

pub use ast::{AstNode, NodeKind};
pub use error::{InternalError, LexError, ParseError, RomulaError};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, Engine, GrammarTable};
pub use span::Span;

/// Runs the whole front end over a source string.
///
/// Tokenizes, parses, and hands the caller the root of the tree. Lexical
/// failures pass through unchanged; they are not folded into syntax
/// errors.
pub fn compile(source: &str) -> Result<AstNode, RomulaError> {
    let tokens = lexer::tokenize(source)?;
    let tree = parser::parse(&tokens)?;
    Ok(tree)
}
