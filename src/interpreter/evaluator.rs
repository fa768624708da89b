/// Core evaluation logic and context management.
///
/// Contains the runtime context, program execution, expression evaluation,
/// statement execution and the `Flow` signal that carries a `RETURN` up to
/// the nearest call.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, exponentiation, comparisons and
/// logical operators over runtime values.
pub mod binary;

/// Function evaluation.
///
/// Handles calls to user-defined functions with call-time scoping and the
/// builtin `print`.
pub mod function;

/// Utility functions for evaluation.
///
/// Variable and list element access and assignment.
pub mod utils;

pub use core::{Context, execute};
