use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::AnalysisError,
    interpreter::{
        analyzer::core::{AnalysisResult, Analyzer},
        environment::types::Type,
    },
    util::num::bigint_to_i32,
};

impl Analyzer {
    /// Assigns a type to an expression and every expression inside it.
    ///
    /// The type is recorded in the analysis side table under the node's
    /// index; variable and function references are recorded as well.
    ///
    /// # Errors
    /// Returns the first [`AnalysisError`] found in the expression.
    pub fn visit_expression(&mut self, expr: &Expr) -> AnalysisResult<Type> {
        let ty = match expr {
            Expr::Literal { value, index } => Self::literal_type(value, *index)?,
            Expr::Group { inner, index } => {
                if !matches!(**inner, Expr::Binary { .. }) {
                    return Err(AnalysisError::InvalidGroup { index: *index });
                }
                self.visit_expression(inner)?
            },
            Expr::Binary { op,
                           left,
                           right,
                           index, } => {
                let left = self.visit_expression(left)?;
                let right = self.visit_expression(right)?;
                binary_type(*op, left, right).ok_or_else(|| {
                    AnalysisError::InvalidOperands { operator: op.to_string(),
                                                     left,
                                                     right,
                                                     index: *index }
                })?
            },
            Expr::Access { name, offset, index } => {
                if let Some(offset) = offset {
                    let found = self.visit_expression(offset)?;
                    if found != Type::Integer {
                        return Err(AnalysisError::ExpectedInteger { found,
                                                                    index: offset.index() });
                    }
                }
                let variable = self.scope.lookup_variable(name).cloned().ok_or_else(|| {
                                   AnalysisError::UndefinedVariable { name:  name.clone(),
                                                                      index: *index, }
                               })?;
                let ty = variable.ty;
                self.analysis.variables.insert(*index, variable);
                ty
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 index, } => {
                let function = self.scope
                                   .lookup_function(name, arguments.len())
                                   .cloned()
                                   .ok_or_else(|| AnalysisError::UndefinedFunction {
                                       name:  name.clone(),
                                       arity: arguments.len(),
                                       index: *index,
                                   })?;
                for (argument, &expected) in arguments.iter().zip(&function.parameter_types) {
                    let found = self.visit_initializer(argument, Some(expected))?;
                    Self::require_assignable(expected, found, argument.index())?;
                }
                let ty = function.return_type;
                self.analysis.functions.insert(*index, function);
                ty
            },
            Expr::List { elements, index } => self.visit_list(elements, *index, None)?,
        };

        self.analysis.types.insert(expr.index(), ty);
        Ok(ty)
    }

    /// Types a value about to be stored where `target` is declared.
    ///
    /// A list literal takes `target` as its element type; every other
    /// expression is typed on its own.
    pub(crate) fn visit_initializer(&mut self,
                                    value: &Expr,
                                    target: Option<Type>)
                                    -> AnalysisResult<Type> {
        match value {
            Expr::List { elements, index } => self.visit_list(elements, *index, target),
            _ => self.visit_expression(value),
        }
    }

    /// Types a list literal.
    ///
    /// The element type is `container` when given, else the type of the
    /// first element, else `Any` for an empty list. Every element must have
    /// exactly the element type unless the element type is `Any`; a
    /// `Comparable` list does not take `Integer` or `String` elements.
    fn visit_list(&mut self,
                  elements: &[Expr],
                  index: usize,
                  container: Option<Type>)
                  -> AnalysisResult<Type> {
        let mut element_type = container;

        for element in elements {
            let found = self.visit_expression(element)?;
            let expected = *element_type.get_or_insert(found);
            if found != expected && expected != Type::Any {
                return Err(AnalysisError::ListElementMismatch { expected,
                                                                found,
                                                                index: element.index() });
            }
        }

        let ty = element_type.unwrap_or(Type::Any);
        self.analysis.types.insert(index, ty);
        Ok(ty)
    }

    /// Fails unless a value of type `found` may be stored in `target`.
    pub(crate) fn require_assignable(target: Type,
                                     found: Type,
                                     index: usize)
                                     -> AnalysisResult<()> {
        if target.accepts(found) {
            Ok(())
        } else {
            Err(AnalysisError::TypeMismatch { expected: target,
                                              found,
                                              index })
        }
    }

    fn literal_type(value: &LiteralValue, index: usize) -> AnalysisResult<Type> {
        match value {
            LiteralValue::Nil => Ok(Type::Nil),
            LiteralValue::Boolean(_) => Ok(Type::Boolean),
            LiteralValue::Character(_) => Ok(Type::Character),
            LiteralValue::String(_) => Ok(Type::String),
            LiteralValue::Integer(value) => {
                bigint_to_i32(value, AnalysisError::IntegerOutOfRange { index }).map(|_| Type::Integer)
            },
            LiteralValue::Decimal(value) if value.is_finite() => Ok(Type::Decimal),
            LiteralValue::Decimal(_) => Err(AnalysisError::DecimalOutOfRange { index }),
        }
    }
}

/// The result type of a binary operator, or `None` if the operands do not
/// fit it.
///
/// ```
/// use plc::{
///     ast::BinaryOperator,
///     interpreter::{analyzer::expression::binary_type, environment::types::Type},
/// };
///
/// assert_eq!(binary_type(BinaryOperator::Add, Type::String, Type::Integer),
///            Some(Type::String));
/// assert_eq!(binary_type(BinaryOperator::Sub, Type::Integer, Type::Decimal), None);
/// assert_eq!(binary_type(BinaryOperator::Less, Type::Character, Type::Character),
///            Some(Type::Boolean));
/// ```
#[must_use]
pub fn binary_type(op: BinaryOperator, left: Type, right: Type) -> Option<Type> {
    use BinaryOperator as Op;

    match op {
        Op::And | Op::Or => {
            (left == Type::Boolean && right == Type::Boolean).then_some(Type::Boolean)
        },
        Op::Add if left == Type::String || right == Type::String => Some(Type::String),
        Op::Add | Op::Sub | Op::Mul | Op::Div => {
            (left == right && matches!(left, Type::Integer | Type::Decimal)).then_some(left)
        },
        Op::Pow => (left == Type::Integer && right == Type::Integer).then_some(Type::Integer),
        Op::Less | Op::Greater | Op::Equal | Op::NotEqual => {
            (left == right).then_some(Type::Boolean)
        },
    }
}
