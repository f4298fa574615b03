//! # loxide
//!
//! loxide is the front end of a tree-walking interpreter for the Lox
//! scripting language, written in Rust. It scans source text into tokens and
//! defines the expression tree that later stages operate on, together with a
//! visitor mechanism for writing new operations over that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Reporter,
    frontend::{scanner::Scanner, token::Token},
};

/// Defines the structure of expressions.
///
/// This module declares the `Expr` enum, the closed set of expression node
/// types, along with the visitor trait used to write operations over
/// expression trees and the printer that renders them.
///
/// # Responsibilities
/// - Defines the four expression variants and their literal values.
/// - Dispatches operations to the method matching each node's variant.
/// - Renders trees as parenthesized prefix text for debugging and tests.
pub mod ast;
/// Provides error types and diagnostic reporting.
///
/// This module defines the lexical errors raised while scanning and the
/// reporting interface through which they reach the user. Errors carry the
/// line they occurred on and never abort the scan that found them.
///
/// # Responsibilities
/// - Defines the lexical error kinds and their messages.
/// - Declares the `Reporter` interface and its stderr and in-memory
///   implementations.
/// - Formats diagnostics as `[line N] Error <where>: <message>`.
pub mod error;
/// Turns source text into tokens.
///
/// The front end reads raw source text and produces the ordered sequence of
/// tokens that a parser would consume: punctuation, operators, literals,
/// identifiers and keywords, each with its exact text and line number.
///
/// # Responsibilities
/// - Declares the token kinds and the token record.
/// - Scans a whole source string in one pass, skipping whitespace and
///   comments.
/// - Reports lexical errors and keeps scanning.
pub mod frontend;

/// The result of running a piece of source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Every token scanned, ending with the end of input token.
    pub tokens:    Vec<Token>,
    /// Whether any diagnostic was reported while running.
    pub had_error: bool,
}

/// Runs the front end over `source`.
///
/// Scans the whole source with a fresh scanner, passing any lexical errors to
/// `reporter`, and returns the tokens together with whether an error was
/// reported. Nothing is carried over between calls, so an interactive session
/// can call this once per line.
///
/// # Examples
/// ```
/// use loxide::{error::Diagnostics, run};
///
/// let mut diagnostics = Diagnostics::default();
/// let outcome = run("print 1 + 2;", &mut diagnostics);
/// assert!(!outcome.had_error);
/// assert_eq!(outcome.tokens.len(), 6);
///
/// // An unexpected character is reported, and scanning carries on.
/// let mut diagnostics = Diagnostics::default();
/// let outcome = run("print @ 1;", &mut diagnostics);
/// assert!(outcome.had_error);
/// assert_eq!(outcome.tokens.len(), 4);
/// ```
pub fn run(source: &str, reporter: &mut dyn Reporter) -> Outcome {
    let mut counter = CountingReporter { inner: reporter,
                                         count: 0 };
    let tokens = Scanner::new(source).scan_tokens(&mut counter);

    Outcome { tokens,
              had_error: counter.count > 0 }
}

/// Forwards diagnostics while counting them, so the outcome of one run does
/// not depend on what the caller's reporter has seen before.
struct CountingReporter<'a> {
    inner: &'a mut dyn Reporter,
    count: usize,
}

impl Reporter for CountingReporter<'_> {
    fn report(&mut self, line: usize, place: &str, message: &str) {
        self.count += 1;
        self.inner.report(line, place, message);
    }
}
