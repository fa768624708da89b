/// Names and frames shared by the analyzer and the evaluator.
///
/// A [`scope::Scope`] is a stack of frames. Each frame maps names to
/// variables and `(name, arity)` pairs to functions; lookups search from the
/// innermost frame outward, so nearer declarations shadow outer ones.
pub mod scope;

/// The static type system: the closed set of [`types::Type`]s and the
/// assignability relation between them.
pub mod types;

/// Static bindings recorded by the analyzer for declared variables and
/// functions.
pub mod binding;
