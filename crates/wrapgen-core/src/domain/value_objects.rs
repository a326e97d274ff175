//! Descriptor axes: Stage, Dimensionality, SemanticKind, Backend, Fallback, Route.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO classification logic. Mapping a parameter onto these axes
//! lives in `classification.rs`. This file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Teach `classification.rs` when the variant applies
//! 4. Register catalog entries for it in `wrapgen-adapters`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Stage ────────────────────────────────────────────────────────────────────

/// The conversion step a fragment performs.
///
/// The declaration order is the order in which the composer emits stages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Raw input to the native-language type (`{name}Cpp`).
    ToNative,
    /// Native value to the library's own value type (`{name}Lib`).
    ToLibrary,
    /// Native string to a library enumeration (`{name}Enum`).
    ToEnum,
    /// Object ID to a repository object reference (`{name}Obj` / `{name}LibObj`).
    ToObjectRef,
    /// Object ID to a library handle (`{name}LibObj`).
    ToHandle,
    /// Declaration of `returnValue`, completed by the invocation.
    ReturnDeclaration,
    /// Conversion of `returnValue` to the backend's output type.
    ReturnConversion,
    /// One arm of a value object's property getter.
    FieldGet,
    /// One arm of a value object's property setter.
    FieldSet,
}

impl Stage {
    pub const ALL: [Stage; 9] = [
        Self::ToNative,
        Self::ToLibrary,
        Self::ToEnum,
        Self::ToObjectRef,
        Self::ToHandle,
        Self::ReturnDeclaration,
        Self::ReturnConversion,
        Self::FieldGet,
        Self::FieldSet,
    ];

    /// Per-parameter stages, in emission order.
    pub const PARAMETER: [Stage; 5] = [
        Self::ToNative,
        Self::ToLibrary,
        Self::ToEnum,
        Self::ToObjectRef,
        Self::ToHandle,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ToNative => "to-native",
            Self::ToLibrary => "to-library",
            Self::ToEnum => "to-enum",
            Self::ToObjectRef => "to-object-ref",
            Self::ToHandle => "to-handle",
            Self::ReturnDeclaration => "return-declaration",
            Self::ReturnConversion => "return-conversion",
            Self::FieldGet => "field-get",
            Self::FieldSet => "field-set",
        }
    }

    /// The comment line that opens this stage's section of a function body.
    ///
    /// Accessor stages have no banner; their arms are spliced into fixed frames.
    pub const fn banner(&self) -> Option<&'static str> {
        match self {
            Self::ToNative => Some("convert input datatypes to C++ datatypes"),
            Self::ToLibrary => Some("convert input datatypes to library datatypes"),
            Self::ToEnum => Some("convert input datatypes to library enumerated datatypes"),
            Self::ToObjectRef => Some("convert input datatypes to Object references"),
            Self::ToHandle => Some("convert object IDs into library objects"),
            Self::ReturnDeclaration => Some("invoke the library function"),
            Self::ReturnConversion => Some("perform data conversion for return value of function"),
            Self::FieldGet | Self::FieldSet => None,
        }
    }

    /// Suffix of the variable a stage declares, appended to the parameter name.
    pub const fn variable_suffix(&self) -> Option<&'static str> {
        match self {
            Self::ToNative => Some("Cpp"),
            Self::ToLibrary => Some("Lib"),
            Self::ToEnum => Some("Enum"),
            Self::ToObjectRef => Some("Obj"),
            Self::ToHandle => Some("LibObj"),
            _ => None,
        }
    }

    pub const fn is_parameter_stage(self) -> bool {
        matches!(
            self,
            Self::ToNative | Self::ToLibrary | Self::ToEnum | Self::ToObjectRef | Self::ToHandle
        )
    }

    pub const fn is_return_stage(self) -> bool {
        matches!(self, Self::ReturnDeclaration | Self::ReturnConversion)
    }

    pub const fn is_accessor_stage(self) -> bool {
        matches!(self, Self::FieldGet | Self::FieldSet)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "to-native" | "native" => Ok(Self::ToNative),
            "to-library" | "library" => Ok(Self::ToLibrary),
            "to-enum" | "enum" => Ok(Self::ToEnum),
            "to-object-ref" | "object-ref" => Ok(Self::ToObjectRef),
            "to-handle" | "handle" => Ok(Self::ToHandle),
            "return-declaration" => Ok(Self::ReturnDeclaration),
            "return-conversion" => Ok(Self::ReturnConversion),
            "field-get" | "get" => Ok(Self::FieldGet),
            "field-set" | "set" => Ok(Self::FieldSet),
            other => Err(DomainError::InvalidSpec(format!("unknown stage: {other}"))),
        }
    }
}

// ── Dimensionality ───────────────────────────────────────────────────────────

/// Tensor rank of a value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dimensionality {
    #[default]
    Scalar,
    Vector,
    Matrix,
}

impl Dimensionality {
    pub const ALL: [Dimensionality; 3] = [Self::Scalar, Self::Vector, Self::Matrix];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
            Self::Matrix => "matrix",
        }
    }

    /// The word templates splice into conversion function names
    /// (`vectorToOper`, `matrixToCalc`, ...).
    pub const fn tensor_rank(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimensionality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" => Ok(Self::Scalar),
            "vector" => Ok(Self::Vector),
            "matrix" => Ok(Self::Matrix),
            other => Err(DomainError::InvalidSpec(format!(
                "unknown dimensionality: {other}"
            ))),
        }
    }
}

// ── SemanticKind ─────────────────────────────────────────────────────────────

/// What a value means, as opposed to how it is laid out.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticKind {
    /// A number, boolean or similar with a statically known native type.
    #[default]
    Primitive,
    String,
    /// A loosely-typed value whose native type is decided at run time.
    #[serde(alias = "any")]
    Variant,
    /// An ID naming an object held in the object repository.
    #[serde(alias = "object")]
    LibraryObject,
    /// An ID naming an object the library sees through a relinkable handle.
    #[serde(alias = "handle")]
    ObjectHandleRef,
    /// A string naming a library enumeration value.
    #[serde(alias = "enum")]
    Enumerated,
}

impl SemanticKind {
    pub const ALL: [SemanticKind; 6] = [
        Self::Primitive,
        Self::String,
        Self::Variant,
        Self::LibraryObject,
        Self::ObjectHandleRef,
        Self::Enumerated,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::String => "string",
            Self::Variant => "variant",
            Self::LibraryObject => "library-object",
            Self::ObjectHandleRef => "object-handle-ref",
            Self::Enumerated => "enumerated",
        }
    }

    /// Kinds whose raw input is an object ID.
    pub const fn is_object(self) -> bool {
        matches!(self, Self::LibraryObject | Self::ObjectHandleRef)
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "primitive" => Ok(Self::Primitive),
            "string" | "str" => Ok(Self::String),
            "variant" | "any" => Ok(Self::Variant),
            "library-object" | "object" => Ok(Self::LibraryObject),
            "object-handle-ref" | "handle" => Ok(Self::ObjectHandleRef),
            "enumerated" | "enum" => Ok(Self::Enumerated),
            other => Err(DomainError::InvalidSpec(format!("unknown kind: {other}"))),
        }
    }
}

// ── Backend ──────────────────────────────────────────────────────────────────

/// A generation target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Spreadsheet add-in functions taking `OPER` arguments.
    SpreadsheetFormula,
    /// Scripting-host bindings taking UNO-style arguments.
    ScriptBinding,
    /// Object constructors reading properties from a serialized value object.
    SerializationLayer,
    /// Property getters and setters on value-object classes.
    ValueObjectAccessor,
    /// Native client functions taking `ObjectHandler::property_t` arguments.
    NativeBinding,
}

impl Backend {
    pub const ALL: [Backend; 5] = [
        Self::SpreadsheetFormula,
        Self::ScriptBinding,
        Self::SerializationLayer,
        Self::ValueObjectAccessor,
        Self::NativeBinding,
    ];

    /// Backends that compose function bodies from parameter stages.
    pub const FUNCTION: [Backend; 4] = [
        Self::SpreadsheetFormula,
        Self::ScriptBinding,
        Self::SerializationLayer,
        Self::NativeBinding,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SpreadsheetFormula => "spreadsheet-formula",
            Self::ScriptBinding => "script-binding",
            Self::SerializationLayer => "serialization-layer",
            Self::ValueObjectAccessor => "value-object-accessor",
            Self::NativeBinding => "native-binding",
        }
    }

    /// Whether this backend emits function bodies (as opposed to accessors).
    pub const fn composes_functions(self) -> bool {
        !matches!(self, Self::ValueObjectAccessor)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "spreadsheet-formula" | "spreadsheet" | "excel" => Ok(Self::SpreadsheetFormula),
            "script-binding" | "script" | "calc" => Ok(Self::ScriptBinding),
            "serialization-layer" | "serialization" => Ok(Self::SerializationLayer),
            "value-object-accessor" | "value-object" | "accessor" => {
                Ok(Self::ValueObjectAccessor)
            }
            "native-binding" | "native" | "cpp" => Ok(Self::NativeBinding),
            other => Err(DomainError::InvalidSpec(format!("unknown backend: {other}"))),
        }
    }
}

// ── Fallback ─────────────────────────────────────────────────────────────────

/// Whether a conversion supplies a default when the input is missing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    #[default]
    Required,
    Defaulted,
}

impl Fallback {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Defaulted => "defaulted",
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Route ────────────────────────────────────────────────────────────────────

/// How a value reaches the library once it is native.
///
/// Coercion routes are chosen explicitly by the parameter's `coercion`
/// field. They are never inferred from other attributes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Consumed as the native value.
    #[default]
    Native,
    /// Converted to a library value type.
    Library,
    /// Looked up as a repository object.
    Object,
    /// Looked up as the library object behind a repository object.
    Reference,
    /// Coerced to a library quote.
    Quote,
    /// Coerced to a library term structure.
    TermStructure,
    /// Coerced to a library object of the same class.
    LibrarySame,
}

impl Route {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Library => "library",
            Self::Object => "object",
            Self::Reference => "reference",
            Self::Quote => "quote",
            Self::TermStructure => "term-structure",
            Self::LibrarySame => "library-same",
        }
    }

    /// Routes that land on the library's object rather than the repository's.
    pub const fn reaches_library_object(self) -> bool {
        matches!(
            self,
            Self::Reference | Self::Quote | Self::TermStructure | Self::LibrarySame
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Coercion ─────────────────────────────────────────────────────────────────

/// Explicit request to coerce an object parameter into another library type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coercion {
    Quote,
    TermStructure,
    LibrarySame,
}

impl Coercion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::TermStructure => "term-structure",
            Self::LibrarySame => "library-same",
        }
    }
}

impl From<Coercion> for Route {
    fn from(c: Coercion) -> Self {
        match c {
            Coercion::Quote => Route::Quote,
            Coercion::TermStructure => Route::TermStructure,
            Coercion::LibrarySame => Route::LibrarySame,
        }
    }
}

impl fmt::Display for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Coercion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "quote" => Ok(Self::Quote),
            "term-structure" | "termstructure" => Ok(Self::TermStructure),
            "library-same" | "same" => Ok(Self::LibrarySame),
            other => Err(DomainError::InvalidSpec(format!("unknown coercion: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_matches_emission_order() {
        let mut sorted = Stage::ALL;
        sorted.sort();
        assert_eq!(sorted, Stage::ALL);
        assert_eq!(&Stage::ALL[..5], &Stage::PARAMETER);
    }

    #[test]
    fn parameter_stages_have_banners_and_suffixes() {
        for stage in Stage::PARAMETER {
            assert!(stage.banner().is_some(), "{stage} has no banner");
            assert!(stage.variable_suffix().is_some(), "{stage} has no suffix");
        }
        assert!(Stage::FieldGet.banner().is_none());
    }

    #[test]
    fn backend_parses_aliases() {
        assert_eq!(
            "excel".parse::<Backend>().unwrap(),
            Backend::SpreadsheetFormula
        );
        assert_eq!(
            "Native_Binding".parse::<Backend>().unwrap(),
            Backend::NativeBinding
        );
        assert!("python".parse::<Backend>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for backend in Backend::ALL {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
        for stage in Stage::ALL {
            assert_eq!(stage.to_string().parse::<Stage>().unwrap(), stage);
        }
        for kind in SemanticKind::ALL {
            assert_eq!(kind.to_string().parse::<SemanticKind>().unwrap(), kind);
        }
    }

    #[test]
    fn only_accessor_backend_skips_function_composition() {
        assert!(!Backend::ValueObjectAccessor.composes_functions());
        assert_eq!(
            Backend::ALL
                .iter()
                .filter(|b| b.composes_functions())
                .count(),
            Backend::FUNCTION.len()
        );
    }

    #[test]
    fn coercion_maps_onto_library_routes() {
        assert_eq!(Route::from(Coercion::Quote), Route::Quote);
        assert!(Route::from(Coercion::TermStructure).reaches_library_object());
        assert!(!Route::Object.reaches_library_object());
    }

    #[test]
    fn tensor_rank_is_lowercase_word() {
        assert_eq!(Dimensionality::Matrix.tensor_rank(), "matrix");
    }
}
