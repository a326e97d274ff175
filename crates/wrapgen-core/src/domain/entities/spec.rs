//! Declarative descriptions of what to wrap: parameters, returns, functions
//! and value objects.
//!
//! These are the inputs of generation. They deserialize directly from the
//! manifest's kebab-case TOML and can also be built in code:
//!
//! ```rust
//! use wrapgen_core::domain::{FunctionSpec, ParameterSpec, ReturnSpec};
//!
//! let f = FunctionSpec::new("qlRate", "QuantLib::rate(rateCpp)")
//!     .parameter(ParameterSpec::primitive("rate", "double").default_value("0.05"))
//!     .returns(ReturnSpec::primitive("double"));
//! assert_eq!(f.parameters.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Coercion, Dimensionality, SemanticKind};

/// Name given to a function's return slot in generated code.
pub const RETURN_VALUE: &str = "returnValue";

// ── ParameterSpec ────────────────────────────────────────────────────────────

/// One input of a wrapped function, or one property of a value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(default)]
    pub kind: SemanticKind,
    #[serde(default)]
    pub dimensionality: Dimensionality,
    /// Static native-language type. A primitive without one is a variant.
    pub native_type: Option<String>,
    /// Library-side type: value type, enumeration or handle target.
    pub library_type: Option<String>,
    /// Literal used when the input is missing.
    #[serde(rename = "default")]
    pub default_value: Option<String>,
    /// Literal substituted when the input holds an error.
    #[serde(rename = "error")]
    pub error_value: Option<String>,
    pub namespace_objects: Option<String>,
    pub namespace_library: Option<String>,
    pub class_name: Option<String>,
    /// Look up the library object behind a repository object.
    #[serde(default, rename = "reference")]
    pub is_reference: bool,
    pub coercion: Option<Coercion>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, kind: SemanticKind) -> Self {
        Self {
            name: name.into(),
            kind,
            dimensionality: Dimensionality::Scalar,
            native_type: None,
            library_type: None,
            default_value: None,
            error_value: None,
            namespace_objects: None,
            namespace_library: None,
            class_name: None,
            is_reference: false,
            coercion: None,
        }
    }

    pub fn primitive(name: impl Into<String>, native_type: impl Into<String>) -> Self {
        Self::new(name, SemanticKind::Primitive).native_type(native_type)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, SemanticKind::String)
    }

    pub fn variant(name: impl Into<String>) -> Self {
        Self::new(name, SemanticKind::Variant)
    }

    pub fn object(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(name, SemanticKind::LibraryObject).class_name(class_name)
    }

    pub fn handle(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(name, SemanticKind::ObjectHandleRef).class_name(class_name)
    }

    pub fn enumeration(name: impl Into<String>, library_type: impl Into<String>) -> Self {
        Self::new(name, SemanticKind::Enumerated).library_type(library_type)
    }

    pub fn dimensionality(mut self, d: Dimensionality) -> Self {
        self.dimensionality = d;
        self
    }

    pub fn vector(self) -> Self {
        self.dimensionality(Dimensionality::Vector)
    }

    pub fn matrix(self) -> Self {
        self.dimensionality(Dimensionality::Matrix)
    }

    pub fn native_type(mut self, t: impl Into<String>) -> Self {
        self.native_type = Some(t.into());
        self
    }

    pub fn library_type(mut self, t: impl Into<String>) -> Self {
        self.library_type = Some(t.into());
        self
    }

    pub fn default_value(mut self, v: impl Into<String>) -> Self {
        self.default_value = Some(v.into());
        self
    }

    pub fn error_value(mut self, v: impl Into<String>) -> Self {
        self.error_value = Some(v.into());
        self
    }

    pub fn namespace_objects(mut self, ns: impl Into<String>) -> Self {
        self.namespace_objects = Some(ns.into());
        self
    }

    pub fn namespace_library(mut self, ns: impl Into<String>) -> Self {
        self.namespace_library = Some(ns.into());
        self
    }

    /// Set both namespaces at once.
    pub fn namespaces(self, objects: impl Into<String>, library: impl Into<String>) -> Self {
        self.namespace_objects(objects).namespace_library(library)
    }

    pub fn class_name(mut self, c: impl Into<String>) -> Self {
        self.class_name = Some(c.into());
        self
    }

    pub fn reference(mut self) -> Self {
        self.is_reference = true;
        self
    }

    pub fn coercion(mut self, c: Coercion) -> Self {
        self.coercion = Some(c);
        self
    }

    /// Fill namespaces the parameter leaves unset.
    pub fn inherit_namespaces(&mut self, objects: Option<&str>, library: Option<&str>) {
        if self.namespace_objects.is_none() {
            self.namespace_objects = objects.map(str::to_string);
        }
        if self.namespace_library.is_none() {
            self.namespace_library = library.map(str::to_string);
        }
    }
}

// ── ReturnSpec ───────────────────────────────────────────────────────────────

/// The value a wrapped function returns.
///
/// Classified like a parameter named `returnValue` that never has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReturnSpec {
    #[serde(default)]
    pub kind: SemanticKind,
    #[serde(default)]
    pub dimensionality: Dimensionality,
    pub native_type: Option<String>,
    pub library_type: Option<String>,
    pub namespace_objects: Option<String>,
    pub namespace_library: Option<String>,
    pub class_name: Option<String>,
}

impl ReturnSpec {
    pub fn new(kind: SemanticKind) -> Self {
        Self {
            kind,
            dimensionality: Dimensionality::Scalar,
            native_type: None,
            library_type: None,
            namespace_objects: None,
            namespace_library: None,
            class_name: None,
        }
    }

    pub fn primitive(native_type: impl Into<String>) -> Self {
        Self::new(SemanticKind::Primitive).native_type(native_type)
    }

    pub fn string() -> Self {
        Self::new(SemanticKind::String)
    }

    pub fn variant() -> Self {
        Self::new(SemanticKind::Variant)
    }

    pub fn object() -> Self {
        Self::new(SemanticKind::LibraryObject)
    }

    pub fn dimensionality(mut self, d: Dimensionality) -> Self {
        self.dimensionality = d;
        self
    }

    pub fn vector(self) -> Self {
        self.dimensionality(Dimensionality::Vector)
    }

    pub fn matrix(self) -> Self {
        self.dimensionality(Dimensionality::Matrix)
    }

    pub fn native_type(mut self, t: impl Into<String>) -> Self {
        self.native_type = Some(t.into());
        self
    }

    pub fn library_type(mut self, t: impl Into<String>) -> Self {
        self.library_type = Some(t.into());
        self
    }

    pub fn namespace_objects(mut self, ns: impl Into<String>) -> Self {
        self.namespace_objects = Some(ns.into());
        self
    }

    pub fn inherit_namespaces(&mut self, objects: Option<&str>, library: Option<&str>) {
        if self.namespace_objects.is_none() {
            self.namespace_objects = objects.map(str::to_string);
        }
        if self.namespace_library.is_none() {
            self.namespace_library = library.map(str::to_string);
        }
    }

    /// The return slot as a parameter named `returnValue`.
    pub fn as_parameter(&self) -> ParameterSpec {
        ParameterSpec {
            name: RETURN_VALUE.to_string(),
            kind: self.kind,
            dimensionality: self.dimensionality,
            native_type: self.native_type.clone(),
            library_type: self.library_type.clone(),
            default_value: None,
            error_value: None,
            namespace_objects: self.namespace_objects.clone(),
            namespace_library: self.namespace_library.clone(),
            class_name: self.class_name.clone(),
            is_reference: false,
            coercion: None,
        }
    }
}

// ── FunctionSpec ─────────────────────────────────────────────────────────────

/// A library function to wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FunctionSpec {
    pub name: String,
    /// The call expression assigned to `returnValue`, without trailing `;`.
    pub invocation: String,
    #[serde(default, rename = "parameter")]
    pub parameters: Vec<ParameterSpec>,
    pub returns: ReturnSpec,
}

impl FunctionSpec {
    /// A function returning a variant, with no parameters yet.
    pub fn new(name: impl Into<String>, invocation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invocation: invocation.into(),
            parameters: Vec::new(),
            returns: ReturnSpec::variant(),
        }
    }

    pub fn parameter(mut self, p: ParameterSpec) -> Self {
        self.parameters.push(p);
        self
    }

    pub fn returns(mut self, r: ReturnSpec) -> Self {
        self.returns = r;
        self
    }

    /// Fill namespaces left unset on any parameter or the return.
    pub fn inherit_namespaces(&mut self, objects: Option<&str>, library: Option<&str>) {
        for p in &mut self.parameters {
            p.inherit_namespaces(objects, library);
        }
        self.returns.inherit_namespaces(objects, library);
    }
}

// ── ValueObjectSpec ──────────────────────────────────────────────────────────

/// A value-object class whose properties get generated accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ValueObjectSpec {
    pub class_name: String,
    #[serde(default, rename = "property")]
    pub properties: Vec<ParameterSpec>,
}

impl ValueObjectSpec {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, p: ParameterSpec) -> Self {
        self.properties.push(p);
        self
    }
}
