//! # numera
//!
//! numera is a small, sandboxed calculator language written in Rust.
//! It parses arithmetic expressions into an AST, evaluates them against a
//! whitelist of operators and mathematical functions, and runs line-oriented
//! scripts with variables, conditionals, and loops.

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

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent one
/// expression as a tree. The node set is deliberately closed: the parser can
/// only produce these nodes and the evaluator handles exactly these nodes,
/// which is what makes the whitelist enforceable.
///
/// # Responsibilities
/// - Defines literal, name, operator, and call node types.
/// - Defines the operator enums shared by parser and evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, plus the unified `Error` returned by the public entry
/// points. Errors are ordinary values; nothing panics on bad input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps assignment failures with the offending source line.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the variable environment, and the line-oriented script
/// processor.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Persists shell variables between interactive runs.
///
/// Saves user-created bindings to a JSON file and restores them on top of a
/// freshly seeded environment.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{environment::Environment, script::Record, value::core::Value},
};

/// Evaluates a single expression against an environment.
///
/// The expression is parsed and evaluated in one step; the environment is
/// read but never mutated, so assignments are rejected here.
///
/// # Errors
/// Returns an [`Error`] if the text does not match the grammar or the
/// evaluation fails.
///
/// # Examples
/// ```
/// use numera::{Environment, Value, evaluate_expression};
///
/// let env = Environment::new();
/// let result = evaluate_expression("3 + 5 * 2", &env).unwrap();
/// assert_eq!(result, Value::Integer(13));
///
/// // 'x' is not defined, so this is a runtime error.
/// assert!(evaluate_expression("x + 1", &env).is_err());
/// ```
pub fn evaluate_expression(source: &str, env: &Environment) -> Result<Value, Error> {
    let expr = interpreter::parser::core::parse(source)?;
    Ok(interpreter::evaluator::core::eval(&expr, env)?)
}

/// Processes a multi-line script against a mutable environment.
///
/// Assignments mutate the environment silently; expression lines produce
/// one [`Record`] each with their 1-based line number and value or error.
/// Errors never abort the run.
///
/// # Examples
/// ```
/// use numera::{Environment, Value, process_script};
///
/// let mut env = Environment::new();
/// let records = process_script(&["x = 5", "y = x * 2", "y"], &mut env);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].line, 3);
/// assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(10));
/// ```
pub fn process_script<S: AsRef<str>>(lines: &[S], env: &mut Environment) -> Vec<Record> {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    interpreter::script::process_lines(&lines, env)
}
