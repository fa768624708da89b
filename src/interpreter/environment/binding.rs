use crate::interpreter::environment::types::Type;

/// A variable as the analyzer sees it.
///
/// `exported_name` is the name a later stage emits for the variable; it
/// equals the declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name:          String,
    pub exported_name: String,
    pub ty:            Type,
    /// `false` for `VAL` globals.
    pub mutable:       bool,
}

impl Variable {
    #[must_use]
    pub fn new(name: &str, ty: Type, mutable: bool) -> Self {
        Self { name: name.to_string(),
               exported_name: name.to_string(),
               ty,
               mutable }
    }
}

/// A function signature as the analyzer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name:            String,
    pub exported_name:   String,
    pub parameter_types: Vec<Type>,
    pub return_type:     Type,
}

impl Function {
    #[must_use]
    pub fn new(name: &str, parameter_types: Vec<Type>, return_type: Type) -> Self {
        Self { name: name.to_string(),
               exported_name: name.to_string(),
               parameter_types,
               return_type }
    }

    /// Number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}
