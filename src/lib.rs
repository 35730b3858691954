//! # calc
//!
//! calc is a tiny integer calculator written in Rust.
//! It tokenizes a line of text and evaluates the fixed grammar
//! `INTEGER '+' INTEGER`, returning the sum or a descriptive error.

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

/// Command-line arguments.
///
/// Declares the `clap` argument parser and maps its flags onto a driver
/// [`driver::Config`].
pub mod cli;
/// Feeds lines of text to the evaluator and reports the outcome.
///
/// This module is the outer loop around the interpreter: it skips empty
/// lines, evaluates or tokenizes every other line, and writes results and
/// errors out. It serves the interactive prompt, files, standard input and
/// single expressions.
pub mod driver;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines every error that can end an evaluation. Each error
/// carries enough information (offending character, expected and found token
/// kinds, byte positions) to produce a readable message.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, runtime).
/// - Wraps them in a single [`error::Error`] returned to callers.
pub mod error;
/// Turns text into a result.
///
/// This module ties together the lexer and the evaluator and exposes the entry
/// points used by the driver.
pub mod interpreter;

pub use error::Error;
pub use interpreter::evaluator::evaluate;
