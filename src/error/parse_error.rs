#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the parser was looking for, and what it found.
        token: String,
        /// The index of the offending token.
        index: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// Found extra tokens after the last function declaration.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The index of the offending token.
        index: usize,
    },
    /// A `SWITCH` statement without a single `CASE` arm.
    MissingCase {
        /// The index of the token where a `CASE` was expected.
        index: usize,
    },
    /// A `SWITCH` statement without its trailing `DEFAULT` arm.
    MissingDefault {
        /// The index of the token where `DEFAULT` was expected.
        index: usize,
    },
    /// A `CASE` arm whose match value is not a literal.
    NonLiteralCase {
        /// The index of the first token of the case value.
        index: usize,
    },
    /// A numeric literal whose text could not be converted.
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The index of the offending token.
        index:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, index } => {
                write!(f, "Error at token {index}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::UnexpectedTrailingTokens { token, index } => write!(f,
                                                                      "Error at token {index}: Extra tokens after the last function: {token}"),

            Self::MissingCase { index } => {
                write!(f, "Error at token {index}: SWITCH requires at least one CASE arm.")
            },
            Self::MissingDefault { index } => {
                write!(f, "Error at token {index}: SWITCH requires a trailing DEFAULT arm.")
            },
            Self::NonLiteralCase { index } => {
                write!(f, "Error at token {index}: CASE value must be a literal.")
            },
            Self::InvalidNumber { literal, index } => {
                write!(f, "Error at token {index}: Invalid numeric literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
