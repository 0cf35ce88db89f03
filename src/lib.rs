//! # tengri
//!
//! tengri is a tree-walking interpreter for a small experimental language
//! whose keywords, type annotations and operators are single glyphs (runes).
//!
//! Source text flows through three phases: the [lexer](interpreter::lexer)
//! turns it into tokens, the [parser](interpreter::parser) builds a
//! [`Program`](ast::Program), and the [evaluator](interpreter::evaluator)
//! executes it against an environment of bindings.
//!
//! ```text
//! — □ a : 10            // variable
//! Λ □ b : 5             // constant
//! Π add(□ x, □ y) → □ ( → x + y )
//! — □ c : add(a, b) * 2 // 30
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

use crate::{
    ast::Program,
    interpreter::{
        evaluator::core::{Interpreter, Options},
        lexer::tokenize,
        parser::core::parse_program,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code. The AST is built by
/// the parser and traversed by the evaluator.
pub mod ast;
/// Provides the error types of every phase.
///
/// Each phase has its own enum: `LexError`, `ParseError` and `RuntimeError`.
/// All of them carry source positions and implement `std::error::Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime value
/// representation.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Lexes and parses a source string.
///
/// # Errors
/// Returns the lexer or parser error that stopped the process.
///
/// # Examples
/// ```
/// use tengri::parse;
///
/// let program = parse("— □ a : 2 + 3 * 4").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(parse("— □ a 10").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Runs a complete program and returns its final value.
///
/// A fresh interpreter configured with `options` executes every statement.
/// The result is the value of the last statement that produced one.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use tengri::{interpreter::{evaluator::core::Options, value::Value}, run};
///
/// let result = run("— □ a : (2 + 3) * 4", Options::default()).unwrap();
/// assert_eq!(result, Some(Value::Integer(20)));
///
/// // 'b' is not defined
/// assert!(run("— □ a : b + 1", Options::default()).is_err());
/// ```
pub fn run(source: &str, options: Options) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let program = parse(source)?;
    let mut interpreter = Interpreter::with_options(options);
    Ok(interpreter.interpret(&program)?)
}
