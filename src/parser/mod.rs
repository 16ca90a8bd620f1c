/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the table-driven Romula parser.
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

/// The shift-reduce control loop:
/// - Owns the `Engine` struct and the per-parse stacks
/// - Exposes the main `parse(tokens)` entry point
pub mod engine;

/// Static grammar data:
/// - Production list
/// - Action table (shift / reduce / accept)
/// - Goto table
pub mod grammar;

/// Per-production node construction, dispatched on `Rule`.
pub(crate) mod builders;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use engine::{parse, Engine};
pub use grammar::{Action, GrammarTable, Nonterminal, Production, Rule};
