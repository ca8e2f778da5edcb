use std::fmt;
use std::ops::Deref;

use crate::value::Value;

/// A wrapper around a [`Value`] indicating it is a learnable parameter of a
/// module.
///
/// Semantically a parameter is just a leaf value that an optimizer is
/// allowed to mutate in place; the wrapper keeps that intent visible in
/// signatures and optionally carries a name for diagnostics.
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Creates a new named Parameter from a leaf value.
    pub fn new(value: Value, name: Option<String>) -> Self {
        Parameter { value, name }
    }

    /// Creates a new unnamed Parameter.
    pub fn new_unnamed(value: Value) -> Self {
        Parameter { value, name: None }
    }

    /// Returns the parameter's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the underlying value handle.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Applies an optimizer update: overwrites the scalar in place.
    pub(crate) fn set_data(&self, data: f64) {
        self.value.set_data(data);
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({}: {:?})", name, self.value),
            None => write!(f, "Parameter({:?})", self.value),
        }
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the underlying handle (shallow, via Arc):
    /// both clones refer to the same graph node, so optimizer updates through
    /// one are visible through the other.
    fn clone(&self) -> Self {
        Parameter {
            value: self.value.clone(),
            name: self.name.clone(),
        }
    }
}
