/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      printer.rs
 * Purpose:   Renders a syntax tree as indented text, one node per line.
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

use crate::ast::AstNode;

/// Renders a tree depth-first, preorder: each node on its own line as
/// `Kind` or `Kind (value)`, indented two spaces per depth level,
/// children in order after their parent.
pub fn render(root: &AstNode) -> String {
    let mut out = String::new();
    render_into(root, 0, &mut out);
    out
}

/// Prints the rendered tree to stdout.
pub fn print(root: &AstNode) {
    print!("{}", render(root));
}

fn render_into(node: &AstNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }

    out.push_str(node.kind.as_str());
    if let Some(value) = &node.value {
        if !value.is_empty() {
            out.push_str(" (");
            out.push_str(value);
            out.push(')');
        }
    }
    out.push('\n');

    for child in &node.children {
        render_into(child, depth + 1, out);
    }
}
