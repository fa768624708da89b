use std::collections::HashMap;

use crate::{
    ast::{Function as FunctionDecl, Global, Source},
    error::AnalysisError,
    interpreter::environment::{
        binding::{Function, Variable},
        scope::Scope,
        types::Type,
    },
};

/// Result type used by the analyzer.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Everything the analyzer learned about a program.
///
/// Each table is keyed by the token index of the node it describes, which is
/// unique per node within one [`Source`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Resolved type of every expression.
    pub types:     HashMap<usize, Type>,
    /// Variable bound by every global, declaration and access.
    pub variables: HashMap<usize, Variable>,
    /// Function bound by every function declaration and call.
    pub functions: HashMap<usize, Function>,
}

impl Analysis {
    /// The resolved type of the expression at `index`.
    #[must_use]
    pub fn type_of(&self, index: usize) -> Option<Type> {
        self.types.get(&index).copied()
    }
}

/// The static analyzer.
///
/// Holds the scope stack, the side tables being filled and the return type
/// of the function currently being analyzed.
pub struct Analyzer {
    pub scope:              Scope<Variable, Function>,
    pub(crate) analysis:    Analysis,
    pub(crate) return_type: Option<Type>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer whose root scope holds the `print/1` builtin.
    ///
    /// ```
    /// use plc::interpreter::{analyzer::Analyzer, environment::types::Type};
    ///
    /// let analyzer = Analyzer::new();
    /// let print = analyzer.scope.lookup_function("print", 1).unwrap();
    ///
    /// assert_eq!(print.parameter_types, [Type::Any]);
    /// assert_eq!(print.return_type, Type::Nil);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut scope = Scope::new();
        scope.define_function("print", 1, Function::new("print", vec![Type::Any], Type::Nil));

        Self { scope,
               analysis: Analysis::default(),
               return_type: None }
    }

    /// Analyzes a whole program.
    ///
    /// Globals are visited in order, then functions. A function is declared
    /// just before its body is visited, so it can call itself and every
    /// function above it. Once every function is visited, a `main/0` with an
    /// `Integer` return type must exist.
    ///
    /// # Errors
    /// Returns the first [`AnalysisError`] encountered.
    pub fn analyze(mut self, source: &Source) -> AnalysisResult<Analysis> {
        for global in &source.globals {
            self.visit_global(global)?;
        }

        let mut has_main = false;
        for function in &source.functions {
            if function.name == "main" && function.arity() == 0 {
                has_main = true;
                if function.return_type.as_deref() != Some(Type::Integer.name()) {
                    let found = function.return_type.clone().unwrap_or_default();
                    return Err(AnalysisError::InvalidMainReturnType { found });
                }
            }
            self.visit_function(function)?;
        }

        if !has_main {
            return Err(AnalysisError::MissingMain);
        }

        Ok(self.analysis)
    }

    /// Resolves a type name written at `index`.
    pub(crate) fn resolve_type(name: &str, index: usize) -> AnalysisResult<Type> {
        Type::from_name(name).ok_or_else(|| AnalysisError::UnknownType { name: name.to_string(),
                                                                         index })
    }

    /// Runs `body` inside a fresh child scope.
    pub(crate) fn scoped<T>(&mut self,
                            body: impl FnOnce(&mut Self) -> AnalysisResult<T>)
                            -> AnalysisResult<T> {
        self.scope.push();
        let result = body(self);
        self.scope.pop();
        result
    }

    fn visit_global(&mut self, global: &Global) -> AnalysisResult<()> {
        let variable = self.declare(&global.name,
                                    global.type_name.as_deref(),
                                    global.value.as_ref(),
                                    global.mutable,
                                    global.index)?;
        self.analysis.variables.insert(global.index, variable);
        Ok(())
    }

    fn visit_function(&mut self, function: &FunctionDecl) -> AnalysisResult<()> {
        let parameter_types =
            function.parameter_types
                    .iter()
                    .map(|name| {
                        name.as_deref()
                            .map_or(Ok(Type::Any), |name| Self::resolve_type(name, function.index))
                    })
                    .collect::<AnalysisResult<Vec<_>>>()?;
        let return_type = function.return_type
                                  .as_deref()
                                  .map_or(Ok(Type::Nil), |name| {
                                      Self::resolve_type(name, function.index)
                                  })?;

        let signature = Function::new(&function.name, parameter_types.clone(), return_type);
        self.scope
            .define_function(&function.name, function.arity(), signature.clone());
        self.analysis.functions.insert(function.index, signature);

        self.return_type = Some(return_type);
        let result = self.scoped(|analyzer| {
                             for (name, ty) in function.parameters.iter().zip(parameter_types) {
                                 analyzer.scope.define_variable(name, Variable::new(name, ty, true));
                             }
                             analyzer.visit_block(&function.body)
                         });
        self.return_type = None;
        result
    }
}

/// Analyzes `source` with a fresh [`Analyzer`].
///
/// # Example
/// ```
/// use plc::interpreter::{
///     analyzer::analyze, environment::types::Type, lexer::scan, parser::parse,
/// };
///
/// let tokens = scan("LET x = 5; FUN main(): Integer DO RETURN x; END").unwrap();
/// let analysis = analyze(&parse(&tokens).unwrap()).unwrap();
///
/// assert_eq!(analysis.variables[&0].ty, Type::Integer);
/// ```
///
/// # Errors
/// Returns the first [`AnalysisError`] encountered.
pub fn analyze(source: &Source) -> AnalysisResult<Analysis> {
    Analyzer::new().analyze(source)
}
