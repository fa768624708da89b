#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name:  String,
        /// The index of the offending node.
        index: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        arity: usize,
        /// The index of the offending node.
        index: usize,
    },
    /// The program declares no zero-argument `main` function.
    MissingMain,
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The index of the offending node.
        index:   usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The index of the offending node.
        index: usize,
    },
    /// An integer value was expected, but not found.
    ExpectedInteger {
        /// The index of the offending node.
        index: usize,
    },
    /// A list value was expected, but not found.
    ExpectedList {
        /// The index of the offending node.
        index: usize,
    },
    /// Tried to access a list element outside the allowed bounds.
    IndexOutOfBounds {
        /// The length of the list.
        len:   usize,
        /// The index that was actually requested.
        found: String,
        /// The index of the offending node.
        index: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The index of the operator.
        index: usize,
    },
    /// An exponent that is negative or does not fit in 32 bits.
    InvalidExponent {
        /// The index of the operator.
        index: usize,
    },
    /// An assignment whose receiver is not a variable or list element.
    InvalidAssignmentTarget {
        /// The index of the receiver.
        index: usize,
    },
    /// Writing `print` output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, index } => {
                write!(f, "Error at token {index}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, arity, index } => {
                write!(f, "Error at token {index}: Unknown function '{name}/{arity}'.")
            },
            Self::MissingMain => write!(f, "Error: Missing main/0 function."),
            Self::TypeError { details, index } => {
                write!(f, "Error at token {index}: Type error: {details}.")
            },
            Self::ExpectedBoolean { index } => {
                write!(f, "Error at token {index}: Expected boolean.")
            },
            Self::ExpectedInteger { index } => {
                write!(f, "Error at token {index}: Expected integer.")
            },
            Self::ExpectedList { index } => write!(f, "Error at token {index}: Expected list."),
            Self::IndexOutOfBounds { len, found, index } => write!(f,
                                                                   "Error at token {index}: Index out of bounds. Length is {len}, but found {found} instead."),
            Self::DivisionByZero { index } => {
                write!(f, "Error at token {index}: Division by zero.")
            },
            Self::InvalidExponent { index } => write!(f,
                                                      "Error at token {index}: Exponent must be a non-negative 32-bit integer."),
            Self::InvalidAssignmentTarget { index } => write!(f,
                                                              "Error at token {index}: The receiver of an assignment must be a variable or list element."),
            Self::Output { details } => write!(f, "Error: Could not write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
