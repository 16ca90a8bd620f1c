/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Romula scanner.
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

/// Scanner core:
/// - Owns the `Lexer` struct and the cursor state
/// - Exposes the `tokenize(source)` entry point
/// - Roman-numeral classification helpers
pub mod lexer;

/// Reserved-word lookup (`while`, `done`).
pub mod keywords;

/// Token and token-kind definitions shared with the parser.
pub mod token;

/// Re-export the public entry point so callers can use:
/// `crate::lexer::tokenize(...)`
pub use lexer::{is_roman_char, is_roman_word, tokenize};
pub use token::{Token, TokenKind};
