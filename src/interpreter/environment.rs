use std::collections::HashMap;

use crate::{ast::DataType, interpreter::value::Value};

/// A variable's declared type together with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The type the variable was declared with.
    pub declared_type: DataType,
    /// The value currently bound to the name.
    pub value:         Value,
}

/// Stores every variable of one program run.
///
/// The namespace is flat: `start` blocks share it with their parent, and a
/// second declaration of the same name replaces the first, even when the
/// declared type differs. Create one environment per run; nothing is shared
/// between environments.
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

    /// Looks up the binding for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Looks up only the value bound to `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).map(|binding| &binding.value)
    }

    /// Binds `name`, returning the binding it replaced, if any.
    pub fn define(&mut self, name: &str, declared_type: DataType, value: Value) -> Option<Binding> {
        self.bindings.insert(name.to_string(), Binding { declared_type, value })
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(name, binding)| (name.as_str(), binding))
    }
}
