/// The closed set of static types known to the language.
///
/// Types are plain singletons compared by identity; there are no structural
/// or generic types. `Comparable` is a supertype satisfied by the four
/// orderable types and `Any` is satisfied by every type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Accepts every type.
    Any,
    /// The type of `NIL` and of functions without a declared return type.
    Nil,
    /// `TRUE` / `FALSE`.
    Boolean,
    /// Arbitrary-precision integers (literals are limited to 32 bits).
    Integer,
    /// Double-precision decimals.
    Decimal,
    /// Single characters.
    Character,
    /// Character strings.
    String,
    /// Supertype of `Integer`, `Decimal`, `Character` and `String`.
    Comparable,
}

impl Type {
    /// Every type, in declaration order.
    pub const ALL: [Self; 8] = [Self::Any,
                                Self::Nil,
                                Self::Boolean,
                                Self::Integer,
                                Self::Decimal,
                                Self::Character,
                                Self::String,
                                Self::Comparable];

    /// The name used for the type in source code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Nil => "Nil",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::Character => "Character",
            Self::String => "String",
            Self::Comparable => "Comparable",
        }
    }

    /// Resolves a type name written in source code.
    ///
    /// ```
    /// use plc::interpreter::environment::types::Type;
    ///
    /// assert_eq!(Type::from_name("Integer"), Some(Type::Integer));
    /// assert_eq!(Type::from_name("integer"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// Returns `true` for the types that satisfy `Comparable`.
    #[must_use]
    pub const fn is_comparable(self) -> bool {
        matches!(self, Self::Integer | Self::Decimal | Self::Character | Self::String)
    }

    /// Returns `true` if a value of type `source` may be stored where `self`
    /// is declared.
    ///
    /// The relation is reflexive, `Any` accepts everything and `Comparable`
    /// accepts exactly the comparable types.
    ///
    /// ```
    /// use plc::interpreter::environment::types::Type;
    ///
    /// assert!(Type::Any.accepts(Type::Nil));
    /// assert!(Type::Comparable.accepts(Type::String));
    /// assert!(!Type::Comparable.accepts(Type::Boolean));
    /// assert!(!Type::Integer.accepts(Type::Decimal));
    /// ```
    #[must_use]
    pub fn accepts(self, source: Self) -> bool {
        match self {
            Self::Any => true,
            Self::Comparable => source.is_comparable() || matches!(source, Self::Comparable),
            _ => self == source,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
