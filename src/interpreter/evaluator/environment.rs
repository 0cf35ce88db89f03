use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A single entry of an [`Environment`].
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound value.
    pub value:    Value,
    /// Whether the name was declared with `Λ`.
    pub constant: bool,
}

/// Mutable mapping from names to values.
///
/// Keys are unique and the last write wins. Whether re-declaring a constant
/// is allowed is decided by the interpreter, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|binding| &binding.value)
    }

    /// Looks up the full binding of `name`.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Binds `name`, replacing and returning any previous binding.
    ///
    /// # Example
    /// ```
    /// use tengri::interpreter::{evaluator::environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(10), false);
    /// let previous = env.set("x", Value::Integer(11), false);
    ///
    /// assert_eq!(previous.map(|b| b.value), Some(Value::Integer(10)));
    /// assert_eq!(env.get("x"), Some(&Value::Integer(11)));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: Value, constant: bool) -> Option<Binding> {
        self.bindings.insert(name.to_string(), Binding { value, constant })
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &Binding)> {
        let mut entries = self.bindings
                              .iter()
                              .map(|(name, binding)| (name.as_str(), binding))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries
    }
}
