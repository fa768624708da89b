use crate::{
    ast::{Case, Expr, Statement},
    error::AnalysisError,
    interpreter::{
        analyzer::core::{AnalysisResult, Analyzer},
        environment::{binding::Variable, types::Type},
    },
};

impl Analyzer {
    /// Visits every statement of a block in the current scope.
    pub(crate) fn visit_block(&mut self, statements: &[Statement]) -> AnalysisResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.visit_statement(statement))
    }

    /// Checks a single statement.
    ///
    /// # Errors
    /// Returns the first [`AnalysisError`] found in the statement or in any
    /// statement nested in it.
    pub fn visit_statement(&mut self, statement: &Statement) -> AnalysisResult<()> {
        match statement {
            Statement::Expression { expr, .. } => self.visit_expression(expr).map(|_| ()),
            Statement::Declaration { name,
                                     type_name,
                                     value,
                                     index, } => {
                let variable =
                    self.declare(name, type_name.as_deref(), value.as_ref(), true, *index)?;
                self.analysis.variables.insert(*index, variable);
                Ok(())
            },
            Statement::Assignment { receiver, value, .. } => self.visit_assignment(receiver, value),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            index, } => {
                self.require_boolean(condition)?;
                if then_branch.is_empty() {
                    return Err(AnalysisError::EmptyIfBranch { index: *index });
                }
                self.scoped(|analyzer| analyzer.visit_block(then_branch))?;
                self.scoped(|analyzer| analyzer.visit_block(else_branch))
            },
            Statement::Switch { condition, cases, .. } => self.visit_switch(condition, cases),
            Statement::While { condition, body, .. } => {
                self.require_boolean(condition)?;
                self.scoped(|analyzer| analyzer.visit_block(body))
            },
            Statement::Return { value, index } => self.visit_return(value.as_ref(), *index),
        }
    }

    /// Declares a global or local variable in the current scope.
    ///
    /// The variable's type is the declared type when one is written, else the
    /// type of the initializer. The initializer must be assignable to it; a
    /// list initializer takes the declared type as its element type.
    pub(crate) fn declare(&mut self,
                          name: &str,
                          type_name: Option<&str>,
                          value: Option<&Expr>,
                          mutable: bool,
                          index: usize)
                          -> AnalysisResult<Variable> {
        let declared = type_name.map(|name| Self::resolve_type(name, index))
                                .transpose()?;
        let found = value.map(|value| self.visit_initializer(value, declared))
                         .transpose()?;

        let ty = match (declared, found) {
            (Some(ty), _) | (None, Some(ty)) => ty,
            (None, None) => {
                return Err(AnalysisError::UntypedDeclaration { name: name.to_string(),
                                                               index });
            },
        };

        if let (Some(found), Some(value)) = (found, value) {
            Self::require_assignable(ty, found, value.index())?;
        }

        let variable = Variable::new(name, ty, mutable);
        self.scope.define_variable(name, variable.clone());
        Ok(variable)
    }

    fn visit_assignment(&mut self, receiver: &Expr, value: &Expr) -> AnalysisResult<()> {
        let Expr::Access { name, index, .. } = receiver else {
            return Err(AnalysisError::InvalidAssignmentTarget { index: receiver.index() });
        };

        self.visit_expression(receiver)?;
        let Some(variable) = self.analysis.variables.get(index).cloned() else {
            return Err(AnalysisError::UndefinedVariable { name: name.clone(),
                                                          index: *index });
        };
        if !variable.mutable {
            return Err(AnalysisError::ImmutableAssignment { name: name.clone(),
                                                            index: *index });
        }

        let found = self.visit_initializer(value, Some(variable.ty))?;
        Self::require_assignable(variable.ty, found, value.index())
    }

    fn require_boolean(&mut self, condition: &Expr) -> AnalysisResult<()> {
        let found = self.visit_expression(condition)?;
        if found == Type::Boolean {
            Ok(())
        } else {
            Err(AnalysisError::ConditionNotBoolean { found,
                                                     index: condition.index() })
        }
    }

    /// Checks a `SWITCH`.
    ///
    /// Every arm but the last must carry a literal whose type equals the
    /// condition's type; the last arm must be the value-less `DEFAULT`. Each
    /// arm is analyzed in its own child scope.
    fn visit_switch(&mut self, condition: &Expr, cases: &[Case]) -> AnalysisResult<()> {
        let expected = self.visit_expression(condition)?;
        let last = cases.len().saturating_sub(1);

        if cases.is_empty() {
            return Err(AnalysisError::MisplacedDefault { index: condition.index() });
        }

        for (position, case) in cases.iter().enumerate() {
            match (&case.value, position == last) {
                (Some(value), false) => {
                    if !matches!(value, Expr::Literal { .. }) {
                        return Err(AnalysisError::NonLiteralCase { index: value.index() });
                    }
                    let found = self.visit_expression(value)?;
                    if found != expected {
                        return Err(AnalysisError::CaseTypeMismatch { expected,
                                                                     found,
                                                                     index: value.index() });
                    }
                },
                (None, true) => {},
                _ => return Err(AnalysisError::MisplacedDefault { index: case.index }),
            }
            self.scoped(|analyzer| analyzer.visit_block(&case.body))?;
        }

        Ok(())
    }

    fn visit_return(&mut self, value: Option<&Expr>, index: usize) -> AnalysisResult<()> {
        let Some(expected) = self.return_type else {
            return Err(AnalysisError::ReturnOutsideFunction { index });
        };

        let found = match value {
            Some(value) => self.visit_expression(value)?,
            None => Type::Nil,
        };

        if found == expected {
            Ok(())
        } else {
            Err(AnalysisError::ReturnTypeMismatch { expected,
                                                    found,
                                                    index: value.map_or(index, Expr::index) })
        }
    }
}
