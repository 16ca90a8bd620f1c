/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Command-line driver for the Romula front end: reads a source
 *            file (or runs the built-in demo programs), parses it, and
 *            prints the syntax tree.
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

use romula::diagnostics::DiagnosticPrinter;
use romula::{compile, printer};
use std::env;
use std::fs;
use std::process::ExitCode;

/// Programs shown when the driver is run without a file argument.
const DEMOS: &[&str] = &[
    "while (x < V) y := I done",
    "while (a = I) b := X done; while (n > III) m := a done",
];

fn main() -> ExitCode {
    let mut json = false;
    let mut path: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other if other.starts_with('-') => {
                eprintln!("unknown option '{}'", other);
                print_usage();
                return ExitCode::FAILURE;
            }
            other => {
                if path.is_some() {
                    eprintln!("expected at most one source file");
                    print_usage();
                    return ExitCode::FAILURE;
                }
                path = Some(other.to_string());
            }
        }
    }

    let ok = match path {
        Some(path) => run_file(&path, json),
        None => run_demos(json),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_usage() {
    eprintln!("usage: romula [--json] [file]");
    eprintln!("  with no file, the built-in demo programs are run");
}

fn run_file(path: &str, json: bool) -> bool {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("cannot read '{}': {}", path, err);
            return false;
        }
    };

    run_source(path, &source, json)
}

fn run_demos(json: bool) -> bool {
    let mut ok = true;

    for (index, source) in DEMOS.iter().enumerate() {
        println!("=== Demo {} ===", index + 1);
        println!("{}", source);
        println!();
        ok &= run_source("<demo>", source, json);
        println!();
    }

    ok
}

/// Runs the pipeline over one source text, printing either the tree or a
/// diagnostic. Returns whether the parse succeeded.
fn run_source(name: &str, source: &str, json: bool) -> bool {
    match compile(source) {
        Ok(tree) => {
            if json {
                match serde_json::to_string_pretty(&tree) {
                    Ok(text) => println!("{}", text),
                    Err(err) => {
                        eprintln!("cannot serialize tree: {}", err);
                        return false;
                    }
                }
            } else {
                printer::print(&tree);
            }
            true
        }
        Err(error) => {
            DiagnosticPrinter::new(name, source).print(&error);
            false
        }
    }
}
