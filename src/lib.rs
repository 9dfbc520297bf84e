//! # miniscript
//!
//! miniscript is an interpreter for MiniScript, a small language with typed
//! variable declarations, `display` statements and `start { ... }` blocks.
//! Source text is tokenized, parsed into a statement tree and executed
//! directly.
//!
//! ```text
//! start {
//!     int: width => 6
//!     float: area => width * 2.5
//!     display area
//! }
//! ```

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
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::execute, lexer::tokenize, output::OutputSink, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` tree produced by the parser, the
/// `DataType` names used in declarations, and the `BinaryOperator` set used by
/// the evaluator.
pub mod ast;
/// Provides the error type raised during evaluation.
///
/// All failures carry the source line of the offending statement and a
/// readable description.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the variable
/// environment, value representations and output delivery.
///
/// # Responsibilities
/// - Coordinates lexer, parser and evaluator.
/// - Provides entry points for each stage.
pub mod interpreter;

/// Runs a MiniScript program and returns its final environment.
///
/// The source is tokenized, parsed and executed in a fresh environment. Each
/// executed `display` statement sends one line to `sink`.
///
/// # Errors
/// Returns the first runtime error. Lines displayed before it have already
/// been sent to `sink`.
///
/// # Examples
/// ```
/// use miniscript::run;
///
/// let mut output: Vec<String> = Vec::new();
/// let source = "start {\n int: x => 5\n display x\n}";
/// let environment = run(source, &mut output).unwrap();
///
/// assert_eq!(output, ["5"]);
/// assert_eq!(environment.len(), 1);
///
/// // 'y' is never declared.
/// assert!(run("display y", &mut output).is_err());
/// ```
pub fn run(source: &str, sink: &mut dyn OutputSink) -> Result<Environment, RuntimeError> {
    let tokens = tokenize(source);
    let statements = parse(&tokens);
    debug!(tokens = tokens.len(), statements = statements.len(), "parsed program");

    let mut environment = Environment::new();
    execute(&statements, &mut environment, sink)?;

    Ok(environment)
}
