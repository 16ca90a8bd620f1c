/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      tests/pipeline.rs
 * Purpose:   End-to-end tests driving the public API: source text in,
 *            printed tree (or classified error) out.
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

use pretty_assertions::assert_eq;
use romula::diagnostics::DiagnosticPrinter;
use romula::{compile, printer, NodeKind, ParseError, RomulaError, TokenKind};

#[test]
fn single_loop_prints_the_expected_tree() {
    let tree = compile("while (x < V) y := I done").expect("compile failed");

    let expected = "\
Program
  StatementList
    WhileLoop
      Condition
        Identifier (x)
        RelOp (<)
        RomanNumeral (V)
      Assignment
        LValue (y)
        RomanNumeral (I)
";

    assert_eq!(printer::render(&tree), expected);
}

#[test]
fn two_loops_print_a_nested_statement_chain() {
    let tree = compile("while (a = I) b := X done; while (n > III) m := a done")
        .expect("compile failed");

    let expected = "\
Program
  StatementList
    StatementList
      WhileLoop
        Condition
          Identifier (a)
          RelOp (=)
          RomanNumeral (I)
        Assignment
          LValue (b)
          RomanNumeral (X)
    WhileLoop
      Condition
        Identifier (n)
        RelOp (>)
        RomanNumeral (III)
      Assignment
        LValue (m)
        Identifier (a)
";

    assert_eq!(printer::render(&tree), expected);
}

#[test]
fn compiling_twice_yields_identical_trees() {
    let source = "while (x < V) y := I done";
    let first = compile(source).expect("compile failed");
    let second = compile(source).expect("compile failed");
    assert_eq!(first, second);
}

#[test]
fn whitespace_and_newlines_do_not_change_the_tree() {
    let compact = compile("while (x < V) y := I done").expect("compile failed");
    let spread = compile("while (x < V)\n  y := I\ndone").expect("compile failed");
    assert_eq!(compact, spread);
}

#[test]
fn lexical_errors_pass_through_unchanged() {
    let error = compile("while (x < 5) y := I done").expect_err("expected an error");

    match &error {
        RomulaError::Lex(lex) => assert_eq!(lex.character, '5'),
        other => panic!("expected a lexical error, got {:?}", other),
    }
    assert_eq!(error.code(), "E_LEX");
}

#[test]
fn missing_done_is_reported_as_a_syntax_error() {
    let error = compile("while (x < V) y := I").expect_err("expected an error");

    match &error {
        RomulaError::Parse(ParseError::Syntax { token, .. }) => {
            assert_eq!(token.kind, TokenKind::End);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
    assert_eq!(error.code(), "E_SYNTAX");
}

#[test]
fn syntax_diagnostics_name_the_offending_token() {
    let source = "while (x <
>) y := I done";
    let error = compile(source).expect_err("expected an error");

    let rendered = DiagnosticPrinter::new("demo.rom", source).render(&error);
    assert!(rendered.starts_with("error[E_SYNTAX]: unexpected token '>'"));
    assert!(rendered.contains("--> demo.rom:2:1"));
}

#[test]
fn trees_serialize_to_json() {
    let tree = compile("while (x < V) y := I done").expect("compile failed");
    let json = serde_json::to_value(&tree).expect("serialization failed");

    assert_eq!(json["kind"], "Program");
    assert_eq!(json["children"][0]["kind"], "StatementList");
    let while_loop = &json["children"][0]["children"][0];
    assert_eq!(while_loop["kind"], "WhileLoop");
    assert_eq!(while_loop["children"][0]["children"][1]["value"], "<");
}

#[test]
fn placeholder_tokens_never_reach_the_tree() {
    let tree = compile("while (a = I) b := X done; while (n > III) m := a done")
        .expect("compile failed");

    fn assert_no_placeholders(node: &romula::AstNode) {
        assert_ne!(node.kind, NodeKind::Token);
        for child in &node.children {
            assert_no_placeholders(child);
        }
    }

    assert_no_placeholders(&tree);
}
