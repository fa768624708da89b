use std::collections::HashMap;

/// One level of a [`Scope`].
#[derive(Debug, Clone)]
pub struct Frame<V, F> {
    /// Variables declared in this frame.
    pub variables: HashMap<String, V>,
    /// Functions declared in this frame, keyed by name and arity.
    pub functions: HashMap<(String, usize), F>,
}

impl<V, F> Default for Frame<V, F> {
    fn default() -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(), }
    }
}

/// A stack of frames with innermost-first lookup.
///
/// The bottom frame is the root: it is created with the scope and is never
/// popped, so globals and builtins stay reachable from every nested frame.
/// The analyzer instantiates it with static bindings, the evaluator with
/// runtime values and callables.
///
/// ```
/// use plc::interpreter::environment::scope::Scope;
///
/// let mut scope: Scope<i32, ()> = Scope::new();
/// scope.define_variable("x", 1);
/// scope.push();
/// scope.define_variable("x", 2);
/// assert_eq!(scope.lookup_variable("x"), Some(&2));
///
/// scope.pop();
/// assert_eq!(scope.lookup_variable("x"), Some(&1));
/// ```
#[derive(Debug, Clone)]
pub struct Scope<V, F> {
    frames: Vec<Frame<V, F>>,
}

impl<V, F> Default for Scope<V, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, F> Scope<V, F> {
    /// Creates a scope holding only the root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// Pushes a new innermost frame.
    pub fn push(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Removes the innermost frame.
    ///
    /// The root frame is never removed; popping it is a no-op that returns
    /// `false`.
    pub fn pop(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    /// Number of frames, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn innermost(&mut self) -> &mut Frame<V, F> {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Declares a variable in the innermost frame, replacing any variable of
    /// the same name in that frame.
    pub fn define_variable(&mut self, name: impl Into<String>, value: V) {
        self.innermost().variables.insert(name.into(), value);
    }

    /// Finds the nearest variable called `name`.
    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<&V> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.variables.get(name))
    }

    /// Finds the nearest variable called `name` for modification.
    pub fn lookup_variable_mut(&mut self, name: &str) -> Option<&mut V> {
        self.frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.variables.get_mut(name))
    }

    /// Declares a function of the given arity in the innermost frame.
    pub fn define_function(&mut self, name: impl Into<String>, arity: usize, function: F) {
        self.innermost()
            .functions
            .insert((name.into(), arity), function);
    }

    /// Finds the nearest function called `name` taking `arity` arguments.
    ///
    /// Functions of the same name but another arity are distinct bindings and
    /// never match.
    ///
    /// ```
    /// use plc::interpreter::environment::scope::Scope;
    ///
    /// let mut scope: Scope<(), &str> = Scope::new();
    /// scope.define_function("f", 1, "unary");
    ///
    /// assert_eq!(scope.lookup_function("f", 1), Some(&"unary"));
    /// assert_eq!(scope.lookup_function("f", 2), None);
    /// ```
    #[must_use]
    pub fn lookup_function(&self, name: &str, arity: usize) -> Option<&F> {
        let key = (name.to_string(), arity);
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.functions.get(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_frame_survives_pop() {
        let mut scope: Scope<i32, ()> = Scope::new();
        scope.define_variable("g", 7);

        assert!(!scope.pop());
        assert_eq!(scope.depth(), 1);
        assert_eq!(scope.lookup_variable("g"), Some(&7));
    }

    #[test]
    fn mutation_hits_nearest_binding() {
        let mut scope: Scope<i32, ()> = Scope::new();
        scope.define_variable("x", 1);
        scope.push();

        if let Some(x) = scope.lookup_variable_mut("x") {
            *x = 5;
        }
        scope.pop();

        assert_eq!(scope.lookup_variable("x"), Some(&5));
    }

    #[test]
    fn inner_functions_disappear_with_their_frame() {
        let mut scope: Scope<(), u8> = Scope::new();
        scope.push();
        scope.define_function("f", 0, 1);
        assert!(scope.lookup_function("f", 0).is_some());

        scope.pop();
        assert!(scope.lookup_function("f", 0).is_none());
    }
}
