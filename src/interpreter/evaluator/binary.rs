/// Operator dispatch.
pub mod core;

/// Arithmetic on integers and decimals, and string concatenation.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Ordering and equality.
pub mod comparison;

/// Short-circuit evaluation of `&&` and `||`.
pub mod logic;
