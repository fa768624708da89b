use crate::interpreter::environment::types::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the static analyzer can raise.
///
/// Analysis is fail-fast: the first violation aborts the phase.
pub enum AnalysisError {
    /// No zero-argument `main` function was declared.
    MissingMain,
    /// `main/0` exists but does not declare `Integer` as its return type.
    InvalidMainReturnType {
        /// The declared return type name, if any.
        found: String,
    },
    /// A type name that does not belong to the language.
    UnknownType {
        /// The unresolved name.
        name:  String,
        /// The index of the declaring token.
        index: usize,
    },
    /// A value of one type was stored where another type is declared.
    TypeMismatch {
        /// The declared (target) type.
        expected: Type,
        /// The type of the stored value.
        found:    Type,
        /// The index of the offending node.
        index:    usize,
    },
    /// A name with no variable binding in scope.
    UndefinedVariable {
        /// The name of the variable.
        name:  String,
        /// The index of the offending node.
        index: usize,
    },
    /// A call with no function binding for its name and argument count.
    UndefinedFunction {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        arity: usize,
        /// The index of the offending node.
        index: usize,
    },
    /// An integer literal outside the 32-bit signed range.
    IntegerOutOfRange {
        /// The index of the literal.
        index: usize,
    },
    /// A decimal literal outside the double-precision range.
    DecimalOutOfRange {
        /// The index of the literal.
        index: usize,
    },
    /// A parenthesized expression that does not wrap a binary expression.
    InvalidGroup {
        /// The index of the opening parenthesis.
        index: usize,
    },
    /// Operand types not accepted by a binary operator.
    InvalidOperands {
        /// The operator symbol.
        operator: String,
        /// Type of the left operand.
        left:     Type,
        /// Type of the right operand.
        right:    Type,
        /// The index of the operator.
        index:    usize,
    },
    /// A declaration with neither a type nor an initial value.
    UntypedDeclaration {
        /// The declared name.
        name:  String,
        /// The index of the declaration.
        index: usize,
    },
    /// An assignment whose receiver is not a variable or list element.
    InvalidAssignmentTarget {
        /// The index of the receiver.
        index: usize,
    },
    /// An assignment to a variable declared with `VAL`.
    ImmutableAssignment {
        /// The name of the variable.
        name:  String,
        /// The index of the receiver.
        index: usize,
    },
    /// A list index or other operand that must be an `Integer`.
    ExpectedInteger {
        /// The type that was found instead.
        found: Type,
        /// The index of the offending node.
        index: usize,
    },
    /// A `WHILE` or `IF` condition that is not a `Boolean`.
    ConditionNotBoolean {
        /// The type of the condition.
        found: Type,
        /// The index of the condition.
        index: usize,
    },
    /// An `IF` statement with an empty then-branch.
    EmptyIfBranch {
        /// The index of the `IF` statement.
        index: usize,
    },
    /// A `CASE` value whose literal type differs from the `SWITCH` condition.
    CaseTypeMismatch {
        /// The type of the condition.
        expected: Type,
        /// The type of the case value.
        found:    Type,
        /// The index of the case value.
        index:    usize,
    },
    /// A `CASE` value that is not a literal.
    NonLiteralCase {
        /// The index of the case value.
        index: usize,
    },
    /// A `SWITCH` whose last arm is not a value-less `DEFAULT`.
    MisplacedDefault {
        /// The index of the `SWITCH` statement.
        index: usize,
    },
    /// A `RETURN` outside any function body.
    ReturnOutsideFunction {
        /// The index of the `RETURN` statement.
        index: usize,
    },
    /// A returned value whose type differs from the declared return type.
    ReturnTypeMismatch {
        /// The declared return type.
        expected: Type,
        /// The type of the returned value.
        found:    Type,
        /// The index of the `RETURN` statement.
        index:    usize,
    },
    /// A list element whose type differs from the list's element type.
    ListElementMismatch {
        /// The element type of the list.
        expected: Type,
        /// The type of the offending element.
        found:    Type,
        /// The index of the offending element.
        index:    usize,
    },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMain => write!(f, "Error: Missing main/0 function."),
            Self::InvalidMainReturnType { found } => write!(f,
                                                            "Error: The main/0 function must return Integer, found '{found}'."),
            Self::UnknownType { name, index } => {
                write!(f, "Error at token {index}: Unknown type '{name}'.")
            },
            Self::TypeMismatch { expected,
                                 found,
                                 index, } => write!(f,
                                                    "Error at token {index}: Type {found} is not assignable to {expected}."),
            Self::UndefinedVariable { name, index } => {
                write!(f, "Error at token {index}: Variable '{name}' is not defined.")
            },
            Self::UndefinedFunction { name, arity, index } => {
                write!(f, "Error at token {index}: Function '{name}/{arity}' is not defined.")
            },
            Self::IntegerOutOfRange { index } => write!(f,
                                                        "Error at token {index}: Integer literal out of range for a 32-bit signed integer."),
            Self::DecimalOutOfRange { index } => write!(f,
                                                        "Error at token {index}: Decimal literal out of range for a 64-bit double."),
            Self::InvalidGroup { index } => write!(f,
                                                   "Error at token {index}: A group must contain a binary expression."),
            Self::InvalidOperands { operator,
                                    left,
                                    right,
                                    index, } => write!(f,
                                                       "Error at token {index}: Invalid operands for '{operator}', found {left} and {right}."),
            Self::UntypedDeclaration { name, index } => write!(f,
                                                               "Error at token {index}: Declaration of '{name}' lacks both type and initial value."),
            Self::InvalidAssignmentTarget { index } => write!(f,
                                                              "Error at token {index}: The receiver of an assignment must be a variable or list element."),
            Self::ImmutableAssignment { name, index } => write!(f,
                                                                "Error at token {index}: Cannot assign to immutable variable '{name}'."),
            Self::ExpectedInteger { found, index } => {
                write!(f, "Error at token {index}: Expected Integer, found {found}.")
            },
            Self::ConditionNotBoolean { found, index } => {
                write!(f, "Error at token {index}: Condition must be Boolean, found {found}.")
            },
            Self::EmptyIfBranch { index } => {
                write!(f, "Error at token {index}: IF requires a non-empty then-branch.")
            },
            Self::CaseTypeMismatch { expected,
                                     found,
                                     index, } => write!(f,
                                                        "Error at token {index}: CASE value of type {found} does not match SWITCH condition of type {expected}."),
            Self::NonLiteralCase { index } => {
                write!(f, "Error at token {index}: CASE value must be a literal.")
            },
            Self::MisplacedDefault { index } => write!(f,
                                                       "Error at token {index}: The last arm of a SWITCH must be a DEFAULT without a value."),
            Self::ReturnOutsideFunction { index } => {
                write!(f, "Error at token {index}: RETURN outside of a function.")
            },
            Self::ReturnTypeMismatch { expected,
                                       found,
                                       index, } => write!(f,
                                                          "Error at token {index}: Function expected to return {expected}, but returned {found}."),
            Self::ListElementMismatch { expected,
                                        found,
                                        index, } => write!(f,
                                                           "Error at token {index}: Cannot add {found} to a list of {expected}."),
        }
    }
}

impl std::error::Error for AnalysisError {}
