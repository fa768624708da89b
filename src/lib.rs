//! # plc
//!
//! plc is a toolchain for a small imperative scripting language written in
//! Rust. Programs are scanned into tokens, parsed into a syntax tree,
//! statically type-checked and then run by a tree-walking interpreter.
//!
//! ```
//! let mut out = Vec::new();
//! let result = plc::run_with_output("LET x = 5; LET y = 2;
//!                                    FUN main(): Integer DO
//!                                        print(x / y);
//!                                        RETURN 0;
//!                                    END",
//!                                   &mut out).unwrap();
//!
//! assert_eq!(result, plc::interpreter::value::core::Value::from(0));
//! assert_eq!(out, b"2\n");
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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    analyzer::{Analysis, analyze},
    evaluator::Context,
    lexer::scan,
    parser::parse,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Source`, `Global`, `Function`, `Statement` and
/// `Expr` types that represent a program as a tree. The tree is built by the
/// parser, checked by the analyzer and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Records the token index of every node, which keys the analyzer's side
///   tables and positions error messages.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised during scanning,
/// parsing, analysis or evaluation. Each carries the position of the
/// offending construct.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Renders every error as a single `Error at ...` line.
pub mod error;
/// Orchestrates the four phases of the toolchain.
///
/// # Responsibilities
/// - Scanner, parser, analyzer and evaluator.
/// - The scope model and static types shared by the analyzer and evaluator.
/// - Runtime values.
pub mod interpreter;
/// General utilities for checked numeric conversion.
pub mod util;

/// Scans, parses and analyzes `source` without running it.
///
/// # Errors
/// Returns the error of the first phase that fails; later phases do not run.
///
/// # Examples
/// ```
/// assert!(plc::check("FUN main(): Integer DO RETURN 0; END").is_ok());
/// assert!(plc::check("FUN main() DO END").is_err());
/// ```
pub fn check(source: &str) -> Result<Analysis, Box<dyn std::error::Error>> {
    let tokens = scan(source)?;
    let tree = parse(&tokens)?;
    Ok(analyze(&tree)?)
}

/// Runs a program, printing to standard output.
///
/// The program is scanned, parsed, analyzed and executed in that order; a
/// phase only starts once the previous one succeeded.
///
/// # Returns
/// The value returned by `main`.
///
/// # Errors
/// Returns the error of the first phase that fails.
///
/// # Examples
/// ```
/// use plc::{interpreter::value::core::Value, run};
///
/// let result = run("FUN main(): Integer DO RETURN 2 ^ 10; END").unwrap();
/// assert_eq!(result, Value::from(1024));
///
/// // 'x' is not defined
/// assert!(run("FUN main(): Integer DO RETURN x; END").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    run_with_output(source, std::io::stdout())
}

/// Runs a program, sending `print` output to `output`.
///
/// # Errors
/// Returns the error of the first phase that fails.
pub fn run_with_output(source: &str,
                       output: impl Write)
                       -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = scan(source)?;
    let tree = parse(&tokens)?;
    analyze(&tree)?;

    let mut context = Context::with_output(output);
    Ok(context.execute(&tree)?)
}
