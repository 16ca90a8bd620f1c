/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Character-level scanner turning Romula source text into a
 *            token stream terminated by the End sentinel.
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

use crate::error::LexError;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Checks whether a character may appear in a Roman numeral.
pub fn is_roman_char(c: char) -> bool {
    matches!(c, 'I' | 'V' | 'X')
}

/// Checks whether a whole word is a Roman numeral.
///
/// Classification only: every character must be one of `I`, `V`, `X`
/// (case-sensitive). Well-formedness of the numeral is not checked here,
/// so `XIXIX` still classifies as a numeral while `IV2` and `x` do not.
pub fn is_roman_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_roman_char)
}

/// Performs complete lexical analysis over a source string.
///
/// Produces the token stream consumed by the parsing engine, terminated by
/// exactly one `End` sentinel. The first unrecognized character aborts the
/// scan with a [`LexError`]; no partial stream is returned.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}

/// The Romula scanner state.
///
/// Holds the character buffer, the cursor, and line/column bookkeeping.
/// Output tokens accumulate in `tokens`.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    line_start: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new scanner with the cursor at position 0, line 1.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Scans the entire input, then appends the `End` sentinel.
    ///
    /// # Errors
    /// Returns the first [`LexError`] encountered; in that case `tokens`
    /// holds no sentinel and must not be fed to the parser.
    pub fn scan_tokens(&mut self) -> Result<(), LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let span = self.position();
        self.tokens.push(Token::end(span));
        Ok(())
    }

    /// Scans a single token (or skips whitespace) from the stream.
    ///
    /// # Behavior
    /// - Single-character punctuation maps directly to its kind.
    /// - `:` is only valid as the start of `:=`.
    /// - Words (alphabetic start, alphanumeric continuation) are scanned
    ///   whole, then classified: keyword, Roman numeral, or identifier.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let span = self.position();
        let ch = self.advance();

        match ch {
            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
                self.line_start = self.current;
            }

            ';' => self.push(TokenKind::Semicolon, ";", span),
            '(' => self.push(TokenKind::LParen, "(", span),
            ')' => self.push(TokenKind::RParen, ")", span),

            ':' => {
                if self.match_char('=') {
                    self.push(TokenKind::Assign, ":=", span);
                } else {
                    return Err(LexError::new(ch, span));
                }
            }

            '<' => self.push(TokenKind::Less, "<", span),
            '>' => self.push(TokenKind::Greater, ">", span),
            '=' => self.push(TokenKind::Equal, "=", span),

            c if c.is_alphabetic() => self.word(span),

            _ => return Err(LexError::new(ch, span)),
        }

        Ok(())
    }

    /// Scans an identifier, keyword, or Roman numeral.
    ///
    /// The whole word is consumed first, then classified. Keywords win
    /// over numerals; a word with any character outside {I, V, X} falls
    /// through to identifier.
    fn word(&mut self, span: Span) {
        let start = self.current - 1;

        while self.peek().is_alphanumeric() {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();

        let kind = keyword_kind(&text).unwrap_or(if is_roman_word(&text) {
            TokenKind::RomanNumeral
        } else {
            TokenKind::Identifier
        });

        self.tokens.push(Token::new(kind, text, span));
    }

    fn push(&mut self, kind: TokenKind, lexeme: &str, span: Span) {
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    /// Consumes the next character if it matches `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Advances the cursor by one character and returns it.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character without consuming it, `'\0'` at end.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// Span of the character currently under the cursor.
    fn position(&self) -> Span {
        Span::new(self.line, self.current - self.line_start)
    }
}
