//! Generated output: function bodies and accessor pairs.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::Backend;

/// The composed body of one function for one backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFunctionBody {
    function: String,
    backend: Backend,
    text: String,
    fragment_count: usize,
}

impl GeneratedFunctionBody {
    pub fn new(
        function: impl Into<String>,
        backend: Backend,
        text: String,
        fragment_count: usize,
    ) -> Self {
        Self {
            function: function.into(),
            backend,
            text,
            fragment_count,
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of rendered fragments, return fragments included.
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for GeneratedFunctionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Getter and setter bodies for one value-object class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorBodies {
    class_name: String,
    getter: String,
    setter: String,
}

impl AccessorBodies {
    pub fn new(class_name: impl Into<String>, getter: String, setter: String) -> Self {
        Self {
            class_name: class_name.into(),
            getter,
            setter,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn getter(&self) -> &str {
        &self.getter
    }

    pub fn setter(&self) -> &str {
        &self.setter
    }
}
