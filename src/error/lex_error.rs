#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A character that cannot start any token.
    UnrecognizedCharacter {
        /// The character offset of the character.
        index: usize,
    },
    /// A character literal that does not hold exactly one character.
    InvalidCharacter {
        /// The character offset where the literal went wrong.
        index: usize,
    },
    /// A `\` followed by something other than `b n r t ' " \`.
    InvalidEscape {
        /// The character offset of the character after the backslash.
        index: usize,
    },
    /// A string literal containing a non-printable character.
    InvalidStringCharacter {
        /// The character offset of the character.
        index: usize,
    },
    /// A string literal that never sees its closing quote.
    UnterminatedString {
        /// The character offset where input or the line ran out.
        index: usize,
    },
}

impl LexError {
    /// Returns the same error pointing at `index`.
    #[must_use]
    pub const fn at(self, index: usize) -> Self {
        match self {
            Self::UnrecognizedCharacter { .. } => Self::UnrecognizedCharacter { index },
            Self::InvalidCharacter { .. } => Self::InvalidCharacter { index },
            Self::InvalidEscape { .. } => Self::InvalidEscape { index },
            Self::InvalidStringCharacter { .. } => Self::InvalidStringCharacter { index },
            Self::UnterminatedString { .. } => Self::UnterminatedString { index },
        }
    }


    /// Returns the character offset the error points at.
    ///
    /// ```
    /// use plc::error::LexError;
    ///
    /// let error = LexError::InvalidEscape { index: 3 };
    /// assert_eq!(error.index(), 3);
    /// ```
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { index }
            | Self::InvalidCharacter { index }
            | Self::InvalidEscape { index }
            | Self::InvalidStringCharacter { index }
            | Self::UnterminatedString { index } => *index,
        }
    }
}

// The error logos raises for input no pattern matches.
impl Default for LexError {
    fn default() -> Self {
        Self::UnrecognizedCharacter { index: 0 }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { index } => {
                write!(f, "Error at offset {index}: Unrecognized character.")
            },
            Self::InvalidCharacter { index } => {
                write!(f, "Error at offset {index}: Invalid character literal.")
            },
            Self::InvalidEscape { index } => {
                write!(f, "Error at offset {index}: Invalid escape sequence.")
            },
            Self::InvalidStringCharacter { index } => write!(f,
                                                             "Error at offset {index}: Invalid character in string literal."),
            Self::UnterminatedString { index } => {
                write!(f, "Error at offset {index}: Unterminated string literal.")
            },
        }
    }
}

impl std::error::Error for LexError {}
