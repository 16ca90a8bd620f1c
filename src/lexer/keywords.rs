/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines the reserved keywords of the Romula language.
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

use crate::lexer::token::TokenKind;

/// Maps a scanned word to its keyword token kind, if it is reserved.
///
/// Used exclusively by the lexer after scanning a whole word, so keywords
/// are matched at word granularity: `whiles` is an identifier, not the
/// `while` keyword followed by an `s`.
///
/// # Returns
/// - `Some(kind)` for a reserved word.
/// - `None` when the word should be classified further (Roman numeral or
///   identifier).
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "while" => Some(TokenKind::While),
        "done" => Some(TokenKind::Done),
        _ => None,
    }
}
