/// Lexical errors.
///
/// Defines the errors the scanner raises while turning source text into
/// tokens: malformed character or string literals, bad escape sequences and
/// characters that cannot start any token. Each error carries the source
/// offset of the offending character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token sequence. Parse errors include unexpected or missing tokens,
/// malformed `SWITCH` statements and trailing input. Each error names the
/// index of the offending token.
pub mod parse_error;
/// Semantic errors.
///
/// Contains the errors raised by the static analyzer: type mismatches,
/// undefined names, a missing or malformed `main`, and structural violations
/// in `IF`, `SWITCH` and `RETURN` statements.
pub mod analysis_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, dynamic type
/// mismatches, list indices out of bounds or invalid exponents.
pub mod runtime_error;

pub use analysis_error::AnalysisError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
