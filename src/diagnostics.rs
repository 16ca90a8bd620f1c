/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   Renders human-friendly, compiler-style diagnostics for
 *            Romula front-end errors.
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

use crate::error::RomulaError;
use crate::span::Span;

/// Formats front-end errors with file/line/column information, the
/// offending source line, and a caret pointing at the error position.
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color:
///
/// ```text
/// error[E_SYNTAX]: unexpected token ')' in state 11
///   --> demo.rom:1:12
///    |
///  1 | while (x < ) y := I done
///    |            ^
/// help: ...
/// ```
///
/// Internal errors carry no source position; for those only the header
/// and help line are produced.
pub struct DiagnosticPrinter {
    /// Full source code of the file being parsed, kept so the offending
    /// line can be extracted for display.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Builds the full diagnostic text for an error.
    pub fn render(&self, error: &RomulaError) -> String {
        let mut out = format!("error[{}]: {}\n", error.code(), error);

        if let Some(span) = error.span() {
            let Span { line, column } = span;

            let lines: Vec<&str> = self.source.lines().collect();
            // Lines are 1-indexed in diagnostics, vectors are 0-indexed.
            let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

            out.push_str(&format!(
                "  --> {}:{}:{}\n",
                self.file_name,
                line,
                column + 1
            ));
            out.push_str("   |\n");
            out.push_str(&format!("{:>3} | {}\n", line, src_line));

            let mut underline = String::new();
            for _ in 0..column {
                underline.push(' ');
            }
            underline.push('^');
            out.push_str(&format!("   | {}\n", underline));
        }

        if let Some(help) = error.help() {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &RomulaError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;
    use pretty_assertions::assert_eq;

    #[test]
    fn points_the_caret_at_the_bad_character() {
        let source = "while (a = I)\n  b :@ X\ndone";
        let printer = DiagnosticPrinter::new("demo.rom", source);
        let error = RomulaError::Lex(LexError::new('@', Span::new(2, 5)));

        let expected = "\
error[E_LEX]: invalid character '@'
  --> demo.rom:2:6
   |
  2 |   b :@ X
   |      ^
help: valid tokens are words, Roman numerals, and ; ( ) := < > =
";

        assert_eq!(printer.render(&error), expected);
    }
}
