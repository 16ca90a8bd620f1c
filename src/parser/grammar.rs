/*
 * ==========================================================================
 * ROMULA - While Loops, Roman Style
 * ==========================================================================
 *
 * File:      grammar.rs
 * Purpose:   Static grammar data for the LR engine: the production list,
 *            the action table, and the goto table.
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
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The nonterminal symbols of the grammar, plus the augmenting start
/// symbol used to anchor the accept state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    Start,
    Program,
    StatementList,
    Statement,
    Condition,
    Body,
    Assignment,
    Expression,
    RelOp,
}

/// What the engine does for a given (state, terminal) pair.
///
/// Absence of an entry is meaningful: it marks a syntax error at that
/// point, so the table stores no explicit error action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Push the target state and consume the current token.
    Shift(usize),

    /// Collapse the top of the stacks according to a production.
    Reduce(usize),

    /// The parse is complete.
    Accept,
}

/// Identifies a production so node construction can dispatch on it.
///
/// Builders are plain functions matched over this enum rather than
/// closures stored in the table, which keeps the table pure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `Start -> Program` (augmenting production, anchors Accept)
    Start,
    /// `Program -> StatementList`
    Program,
    /// `StatementList -> Statement`
    StatementFirst,
    /// `StatementList -> StatementList ';' Statement`
    StatementAppend,
    /// `Statement -> 'while' '(' Condition ')' Body 'done'`
    WhileLoop,
    /// `Condition -> Expression RelOp Expression`
    Condition,
    /// `Body -> Assignment`
    Body,
    /// `Assignment -> IDENTIFIER ':=' Expression`
    Assignment,
    /// `Expression -> IDENTIFIER`
    ExprIdentifier,
    /// `Expression -> ROMAN_NUMERAL`
    ExprRoman,
    /// `RelOp -> '<'`
    RelOpLess,
    /// `RelOp -> '>'`
    RelOpGreater,
    /// `RelOp -> '='`
    RelOpEqual,
}

/// One grammar production: left-hand nonterminal, number of right-hand
/// symbols, and the rule tag its builder dispatches on.
#[derive(Debug, Clone, Copy)]
pub struct Production {
    pub left: Nonterminal,
    pub arity: usize,
    pub rule: Rule,
}

/// The complete table set driving the LR engine.
///
/// Immutable after construction. The canonical instance for the Romula
/// grammar is a process-wide static shared by every parse call; tests
/// build their own (including deliberately broken ones) through the
/// crate-private fields.
#[derive(Debug, Clone)]
pub struct GrammarTable {
    pub(crate) productions: Vec<Production>,
    pub(crate) actions: HashMap<(usize, TokenKind), Action>,
    pub(crate) gotos: HashMap<(usize, Nonterminal), usize>,
}

impl GrammarTable {
    /// The table for the Romula grammar, built once on first use.
    pub fn language() -> &'static GrammarTable {
        &LANGUAGE
    }

    /// The production with the given id, if the table defines it.
    pub fn production(&self, id: usize) -> Option<&Production> {
        self.productions.get(id)
    }

    /// The action for a terminal in a state. `None` means the token is a
    /// syntax error in that state.
    pub fn action(&self, state: usize, terminal: TokenKind) -> Option<Action> {
        self.actions.get(&(state, terminal)).copied()
    }

    /// The state entered after reducing to `nonterminal` with `state`
    /// uncovered on the stack. `None` after a valid reduce means the
    /// table itself is malformed.
    pub fn goto(&self, state: usize, nonterminal: Nonterminal) -> Option<usize> {
        self.gotos.get(&(state, nonterminal)).copied()
    }
}

/// Productions of the grammar, indexed by the ids used in `Reduce`
/// actions:
///
/// ```text
///  0  Start         -> Program
///  1  Program       -> StatementList
///  2  StatementList -> Statement
///  3  StatementList -> StatementList ';' Statement
///  4  Statement     -> 'while' '(' Condition ')' Body 'done'
///  5  Condition     -> Expression RelOp Expression
///  6  Body          -> Assignment
///  7  Assignment    -> IDENTIFIER ':=' Expression
///  8  Expression    -> IDENTIFIER
///  9  Expression    -> ROMAN_NUMERAL
/// 10  RelOp         -> '<'
/// 11  RelOp         -> '>'
/// 12  RelOp         -> '='
/// ```
///
/// Production 0 exists only to anchor the accept state and is never
/// reduced.
const PRODUCTIONS: &[Production] = &[
    Production { left: Nonterminal::Start, arity: 1, rule: Rule::Start },
    Production { left: Nonterminal::Program, arity: 1, rule: Rule::Program },
    Production { left: Nonterminal::StatementList, arity: 1, rule: Rule::StatementFirst },
    Production { left: Nonterminal::StatementList, arity: 3, rule: Rule::StatementAppend },
    Production { left: Nonterminal::Statement, arity: 6, rule: Rule::WhileLoop },
    Production { left: Nonterminal::Condition, arity: 3, rule: Rule::Condition },
    Production { left: Nonterminal::Body, arity: 1, rule: Rule::Body },
    Production { left: Nonterminal::Assignment, arity: 3, rule: Rule::Assignment },
    Production { left: Nonterminal::Expression, arity: 1, rule: Rule::ExprIdentifier },
    Production { left: Nonterminal::Expression, arity: 1, rule: Rule::ExprRoman },
    Production { left: Nonterminal::RelOp, arity: 1, rule: Rule::RelOpLess },
    Production { left: Nonterminal::RelOp, arity: 1, rule: Rule::RelOpGreater },
    Production { left: Nonterminal::RelOp, arity: 1, rule: Rule::RelOpEqual },
];

/// The SLR(1) action table for the grammar, 24 states (0..=23).
///
/// Hand-derived from the canonical LR(0) collection; reductions are keyed
/// on the follow set of the production's left-hand side. The automaton is
/// conflict-free, so each (state, terminal) pair holds at most one
/// action and no runtime conflict resolution exists.
const ACTIONS: &[(usize, TokenKind, Action)] = &[
    // 0: start of a program, expect the first statement
    (0, TokenKind::While, Action::Shift(4)),
    // 1: Start -> Program .
    (1, TokenKind::End, Action::Accept),
    // 2: Program -> StatementList .  |  StatementList -> StatementList . ';' Statement
    (2, TokenKind::Semicolon, Action::Shift(5)),
    (2, TokenKind::End, Action::Reduce(1)),
    // 3: StatementList -> Statement .
    (3, TokenKind::Semicolon, Action::Reduce(2)),
    (3, TokenKind::End, Action::Reduce(2)),
    // 4: Statement -> 'while' . '(' Condition ')' Body 'done'
    (4, TokenKind::LParen, Action::Shift(6)),
    // 5: StatementList -> StatementList ';' . Statement
    (5, TokenKind::While, Action::Shift(4)),
    // 6: condition opens, expect its left expression
    (6, TokenKind::Identifier, Action::Shift(8)),
    (6, TokenKind::RomanNumeral, Action::Shift(9)),
    // 7: StatementList -> StatementList ';' Statement .
    (7, TokenKind::Semicolon, Action::Reduce(3)),
    (7, TokenKind::End, Action::Reduce(3)),
    // 8: Expression -> IDENTIFIER .
    (8, TokenKind::Less, Action::Reduce(8)),
    (8, TokenKind::Greater, Action::Reduce(8)),
    (8, TokenKind::Equal, Action::Reduce(8)),
    (8, TokenKind::RParen, Action::Reduce(8)),
    (8, TokenKind::Done, Action::Reduce(8)),
    // 9: Expression -> ROMAN_NUMERAL .
    (9, TokenKind::Less, Action::Reduce(9)),
    (9, TokenKind::Greater, Action::Reduce(9)),
    (9, TokenKind::Equal, Action::Reduce(9)),
    (9, TokenKind::RParen, Action::Reduce(9)),
    (9, TokenKind::Done, Action::Reduce(9)),
    // 10: Statement -> 'while' '(' Condition . ')' Body 'done'
    (10, TokenKind::RParen, Action::Shift(12)),
    // 11: Condition -> Expression . RelOp Expression
    (11, TokenKind::Less, Action::Shift(13)),
    (11, TokenKind::Greater, Action::Shift(14)),
    (11, TokenKind::Equal, Action::Shift(15)),
    // 12: condition closed, expect the body's assignment target
    (12, TokenKind::Identifier, Action::Shift(17)),
    // 13: RelOp -> '<' .
    (13, TokenKind::Identifier, Action::Reduce(10)),
    (13, TokenKind::RomanNumeral, Action::Reduce(10)),
    // 14: RelOp -> '>' .
    (14, TokenKind::Identifier, Action::Reduce(11)),
    (14, TokenKind::RomanNumeral, Action::Reduce(11)),
    // 15: RelOp -> '=' .
    (15, TokenKind::Identifier, Action::Reduce(12)),
    (15, TokenKind::RomanNumeral, Action::Reduce(12)),
    // 16: Condition -> Expression RelOp . Expression
    (16, TokenKind::Identifier, Action::Shift(8)),
    (16, TokenKind::RomanNumeral, Action::Shift(9)),
    // 17: Assignment -> IDENTIFIER . ':=' Expression
    (17, TokenKind::Assign, Action::Shift(21)),
    // 18: Statement -> 'while' '(' Condition ')' Body . 'done'
    (18, TokenKind::Done, Action::Shift(22)),
    // 19: Body -> Assignment .
    (19, TokenKind::Done, Action::Reduce(6)),
    // 20: Condition -> Expression RelOp Expression .
    (20, TokenKind::RParen, Action::Reduce(5)),
    // 21: Assignment -> IDENTIFIER ':=' . Expression
    (21, TokenKind::Identifier, Action::Shift(8)),
    (21, TokenKind::RomanNumeral, Action::Shift(9)),
    // 22: Statement -> 'while' '(' Condition ')' Body 'done' .
    (22, TokenKind::Semicolon, Action::Reduce(4)),
    (22, TokenKind::End, Action::Reduce(4)),
    // 23: Assignment -> IDENTIFIER ':=' Expression .
    (23, TokenKind::Done, Action::Reduce(7)),
];

/// The goto table: state entered after a reduce uncovers `state` and
/// pushes the production's left-hand nonterminal.
const GOTOS: &[(usize, Nonterminal, usize)] = &[
    (0, Nonterminal::Program, 1),
    (0, Nonterminal::StatementList, 2),
    (0, Nonterminal::Statement, 3),
    (5, Nonterminal::Statement, 7),
    (6, Nonterminal::Condition, 10),
    (6, Nonterminal::Expression, 11),
    (11, Nonterminal::RelOp, 16),
    (12, Nonterminal::Body, 18),
    (12, Nonterminal::Assignment, 19),
    (16, Nonterminal::Expression, 20),
    (21, Nonterminal::Expression, 23),
];

static LANGUAGE: Lazy<GrammarTable> = Lazy::new(|| GrammarTable {
    productions: PRODUCTIONS.to_vec(),
    actions: ACTIONS
        .iter()
        .map(|&(state, terminal, action)| ((state, terminal), action))
        .collect(),
    gotos: GOTOS
        .iter()
        .map(|&(state, nonterminal, target)| ((state, nonterminal), target))
        .collect(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reduce_names_a_real_production() {
        let table = GrammarTable::language();
        for action in table.actions.values() {
            if let Action::Reduce(id) = action {
                assert!(
                    table.production(*id).is_some(),
                    "reduce references unknown production {}",
                    id
                );
            }
        }
    }

    #[test]
    fn shift_and_goto_targets_stay_inside_the_automaton() {
        let table = GrammarTable::language();
        let max_state = 23;
        for action in table.actions.values() {
            if let Action::Shift(target) = action {
                assert!(*target <= max_state);
            }
        }
        for target in table.gotos.values() {
            assert!(*target <= max_state);
        }
    }

    #[test]
    fn table_entries_did_not_collide() {
        // HashMap::collect keeps the last entry on key collision, so a
        // duplicated (state, terminal) pair in the source data would
        // silently shrink the table.
        let table = GrammarTable::language();
        assert_eq!(table.actions.len(), ACTIONS.len());
        assert_eq!(table.gotos.len(), GOTOS.len());
    }

    #[test]
    fn start_state_accepts_only_a_while_keyword() {
        let table = GrammarTable::language();
        assert_eq!(table.action(0, TokenKind::While), Some(Action::Shift(4)));
        assert_eq!(table.action(0, TokenKind::Identifier), None);
        assert_eq!(table.action(0, TokenKind::End), None);
    }

    #[test]
    fn accept_sits_on_the_augmented_start() {
        let table = GrammarTable::language();
        assert_eq!(table.action(1, TokenKind::End), Some(Action::Accept));
        assert_eq!(table.goto(0, Nonterminal::Program), Some(1));
    }
}
