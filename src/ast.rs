use num_bigint::BigInt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code. Character and string literals are stored unquoted and
/// unescaped.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `NIL`.
    Nil,
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// A character literal such as `'a'`.
    Character(char),
    /// An integer literal of any size; range checks happen in the analyzer.
    Integer(BigInt),
    /// A decimal literal.
    Decimal(f64),
    /// A string literal such as `"hello"`.
    String(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A node of the syntax tree representing an expression.
///
/// Every variant records `index`, the position of the token that defines the
/// node: the literal or name itself, the operator of a binary expression, or
/// the opening bracket of a group or list. No two expressions of one tree
/// share an index, which is what lets the analyzer attach resolved types and
/// bindings in side tables keyed by it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Token index of the literal.
        index: usize,
    },
    /// A parenthesized expression, e.g. `(a + b)`.
    Group {
        /// The wrapped expression.
        inner: Box<Self>,
        /// Token index of the `(`.
        index: usize,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Token index of the operator.
        index: usize,
    },
    /// A variable, or a list element when `offset` is present (`xs[i]`).
    Access {
        /// Name of the variable.
        name:   String,
        /// Optional list index expression.
        offset: Option<Box<Self>>,
        /// Token index of the name.
        index:  usize,
    },
    /// Function call expression (e.g. `print(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Token index of the name.
        index:     usize,
    },
    /// List literal expression, e.g. `[1, 2, 3]`.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Token index of the `[`.
        index:    usize,
    },
}

impl Expr {
    /// Gets the token index of the node.
    /// ## Example
    /// ```
    /// use plc::ast::Expr;
    ///
    /// let expr = Expr::Access { name:   "x".to_string(),
    ///                           offset: None,
    ///                           index:  5, };
    ///
    /// assert_eq!(expr.index(), 5);
    /// ```
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Literal { index, .. }
            | Self::Group { index, .. }
            | Self::Binary { index, .. }
            | Self::Access { index, .. }
            | Self::FunctionCall { index, .. }
            | Self::List { index, .. } => *index,
        }
    }
}

/// Binary operators, from weakest to strongest binding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its effect, e.g. `print(x);`.
    Expression {
        /// The expression.
        expr:  Expr,
        /// Token index of the first token.
        index: usize,
    },
    /// `LET name: Type = value;`, type and value both optional.
    Declaration {
        /// The declared name.
        name:      String,
        /// Declared type name, if written.
        type_name: Option<String>,
        /// Initial value, if written.
        value:     Option<Expr>,
        /// Token index of `LET`.
        index:     usize,
    },
    /// `receiver = value;`.
    Assignment {
        /// The assigned variable or list element.
        receiver: Expr,
        /// The assigned value.
        value:    Expr,
        /// Token index of the `=`.
        index:    usize,
    },
    /// `IF condition DO ... ELSE ... END`.
    If {
        /// The condition.
        condition:   Expr,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise; empty without `ELSE`.
        else_branch: Vec<Self>,
        /// Token index of `IF`.
        index:       usize,
    },
    /// `SWITCH condition CASE v: ... DEFAULT ... END`.
    Switch {
        /// The value being matched.
        condition: Expr,
        /// The `CASE` arms followed by the `DEFAULT` arm.
        cases:     Vec<Case>,
        /// Token index of `SWITCH`.
        index:     usize,
    },
    /// `WHILE condition DO ... END`.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Token index of `WHILE`.
        index:     usize,
    },
    /// `RETURN value;`, value optional.
    Return {
        /// The returned value.
        value: Option<Expr>,
        /// Token index of `RETURN`.
        index: usize,
    },
}

/// One arm of a `SWITCH`. An arm without a value is the `DEFAULT` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// The literal the condition is compared against.
    pub value: Option<Expr>,
    /// The statements of the arm.
    pub body:  Vec<Statement>,
    /// Token index of `CASE` or `DEFAULT`.
    pub index: usize,
}

/// A global variable declared with `LIST`, `VAL`, `VAR` or `LET`.
#[derive(Debug, Clone, PartialEq)]
pub struct Global {
    /// The declared name.
    pub name:      String,
    /// Declared type name, if written.
    pub type_name: Option<String>,
    /// `false` only for `VAL`.
    pub mutable:   bool,
    /// Initial value, if written.
    pub value:     Option<Expr>,
    /// Token index of the declaring keyword.
    pub index:     usize,
}

/// A function declared with `FUN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The function name.
    pub name:            String,
    /// Parameter names, in order.
    pub parameters:      Vec<String>,
    /// Parameter type names, parallel to `parameters`.
    pub parameter_types: Vec<Option<String>>,
    /// Declared return type name, if written.
    pub return_type:     Option<String>,
    /// The function body.
    pub body:            Vec<Statement>,
    /// Token index of `FUN`.
    pub index:           usize,
}

impl Function {
    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// The root of a parsed program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    /// Global declarations, in source order.
    pub globals:   Vec<Global>,
    /// Function declarations, in source order.
    pub functions: Vec<Function>,
}
