/// Entry points of the parser.
///
/// Holds the `ParseResult` alias, the whole-program entry point and the
/// expression entry point shared by every other parser module.
pub mod core;

/// Global and function declarations.
///
/// Parses the `LIST`, `VAL`, `VAR` and `LET` globals at the top of a program
/// and the `FUN` declarations that follow them.
pub mod global;

/// Statement parsing.
///
/// Dispatches on the leading keyword (`LET`, `IF`, `SWITCH`, `WHILE`,
/// `RETURN`) and falls back to expression and assignment statements.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence level, weakest first: logical, comparison,
/// additive and multiplicative. Every level folds to the left.
pub mod binary;

/// Primary expressions.
///
/// Literals, variables, list element accesses, function calls, groups and
/// list literals.
pub mod primary;

/// Block parsing.
///
/// Reads statements until a block terminator keyword without consuming it.
pub mod block;

/// Shared helpers: expected-token checks, identifiers, type annotations,
/// comma separated lists and literal unescaping.
pub mod utils;

pub use core::parse;
