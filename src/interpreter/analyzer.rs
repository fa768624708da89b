/// Analyzer state and program-level rules.
///
/// Defines [`core::Analysis`], the side tables produced by a successful run,
/// and [`core::Analyzer`], which walks globals and functions, enforces the
/// `main/0` rule and manages the scope stack.
pub mod core;

/// Statement rules.
///
/// Declarations, assignments, `IF`, `SWITCH`, `WHILE` and `RETURN`, each
/// opening child scopes where the language requires them.
pub mod statement;

/// Expression typing.
///
/// Assigns a [`Type`](crate::interpreter::environment::types::Type) to every
/// expression node, resolves variable and function references and validates
/// literal ranges, operator operands and list elements.
pub mod expression;

pub use core::{Analysis, Analyzer, analyze};
