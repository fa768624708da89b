/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces a sequence of
/// tokens, each classified as an identifier, number, character, string or
/// operator and tagged with its source offset. This is the first stage of
/// the toolchain.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, literal text and offset.
/// - Applies the literal rules: no leading zeros, escape sequences, signed
///   numbers.
/// - Reports lexical errors for malformed literals.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a `Source` tree of globals, functions, statements and
/// expressions by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured tree nodes.
/// - Validates grammar and syntax, reporting errors with token indices.
/// - Encodes operator precedence and left associativity.
pub mod parser;
/// The analyzer module type-checks a syntax tree.
///
/// The analyzer resolves every name against a scope stack, assigns a static
/// type to every expression and checks assignments, conditions, returns and
/// calls before anything runs.
///
/// # Responsibilities
/// - Enforces the typing rules and the `main/0` requirement.
/// - Produces side tables of resolved types and bindings keyed by node.
pub mod analyzer;
/// The evaluator module executes a syntax tree.
///
/// The evaluator walks the tree, evaluates expressions, executes statements
/// for effect and calls functions with call-time scoping. It is the last
/// stage of the toolchain.
///
/// # Responsibilities
/// - Evaluates every expression and statement kind.
/// - Carries `RETURN` values to the enclosing call.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// The environment module holds what the analyzer and evaluator share.
///
/// # Responsibilities
/// - Defines the frame stack used for name resolution in both phases.
/// - Defines the static types and the bindings the analyzer records.
pub mod environment;
/// The value module defines the runtime values produced by evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its conversions.
/// - Implements checked accessors and the printed representation.
pub mod value;
