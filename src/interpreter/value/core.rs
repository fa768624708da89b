use std::{cell::RefCell, rc::Rc};

use num_bigint::BigInt;
use ordered_float::OrderedFloat;

use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A shared, mutable list.
///
/// Cloning a `List` clones the handle, so every binding holding the clone
/// observes element assignments made through any other.
pub type List = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the values that can appear in expressions,
/// assignments, function returns and conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The value of `NIL` and of calls to functions that return nothing.
    Nil,
    /// A boolean value (`TRUE` or `FALSE`).
    Boolean(bool),
    /// An arbitrary-precision integer.
    Integer(BigInt),
    /// A double-precision decimal, wrapped for total equality.
    Decimal(OrderedFloat<f64>),
    /// A single character.
    Character(char),
    /// A character string.
    String(String),
    /// A list shared by reference.
    List(List),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Decimal(OrderedFloat(v))
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Boolean(b) => Self::Boolean(*b),
            LiteralValue::Character(c) => Self::Character(*c),
            LiteralValue::Integer(n) => Self::Integer(n.clone()),
            LiteralValue::Decimal(d) => Self::from(*d),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// The name of the value's kind, as used in runtime error messages.
    ///
    /// ```
    /// use plc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1.5).kind_name(), "Decimal");
    /// assert_eq!(Value::Nil.kind_name(), "Nil");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
            Self::Character(_) => "Character",
            Self::String(_) => "String",
            Self::List(_) => "List",
        }
    }

    /// Returns the boolean, or an error if the value is not a boolean.
    ///
    /// # Parameters
    /// - `index`: Token index for error reporting.
    pub const fn as_bool(&self, index: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { index }),
        }
    }

    /// Returns the integer, or an error if the value is not an integer.
    ///
    /// # Parameters
    /// - `index`: Token index for error reporting.
    pub const fn as_integer(&self, index: usize) -> EvalResult<&BigInt> {
        match self {
            Self::Integer(n) => Ok(n),
            _ => Err(RuntimeError::ExpectedInteger { index }),
        }
    }

    /// Returns a handle to the list, or an error if the value is not a list.
    ///
    /// The handle shares the list with `self`.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::value::core::Value;
    ///
    /// let list = Value::from(vec![Value::from(1)]);
    /// list.as_list(0).unwrap().borrow_mut()[0] = Value::from(9);
    ///
    /// assert_eq!(list, Value::from(vec![Value::from(9)]));
    /// ```
    pub fn as_list(&self, index: usize) -> EvalResult<List> {
        match self {
            Self::List(list) => Ok(Rc::clone(list)),
            _ => Err(RuntimeError::ExpectedList { index }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "NIL"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(OrderedFloat(d)) if d.is_finite() && d.fract() == 0.0 => {
                write!(f, "{d:.1}")
            },
            Self::Decimal(OrderedFloat(d)) => write!(f, "{d}"),
            Self::Character(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(list) => {
                write!(f, "[")?;

                for (index, value) in list.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_always_show_a_fraction() {
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn lists_print_their_elements() {
        let list = Value::from(vec![Value::from(1), Value::from("a"), Value::Nil]);
        assert_eq!(list.to_string(), "[1, a, NIL]");
    }

    #[test]
    fn cloned_lists_share_storage() {
        let list = Value::from(vec![Value::from(1)]);
        let alias = list.clone();

        if let Value::List(items) = &list {
            items.borrow_mut().push(Value::from(2));
        }

        assert_eq!(alias.to_string(), "[1, 2]");
    }
}
