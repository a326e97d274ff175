// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for wrapgen.
//!
//! This module contains pure generation logic with no I/O. Template catalogs,
//! manifest parsing and the global registry live in `wrapgen-adapters`; the
//! application layer reaches them through ports.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std, thiserror, and serde derives for specs
//! - **Immutable entities**: Descriptors and entries are values
//! - **Rich domain model**: Classification and rendering rules live here
//!
// Public API - what the world sees
pub mod classification;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    binding::{BindingContext, NATIVE_STRING, NATIVE_VARIANT, Placeholder},
    descriptor::TypeDescriptor,
    generated::{AccessorBodies, GeneratedFunctionBody},
    spec::{FunctionSpec, ParameterSpec, RETURN_VALUE, ReturnSpec, ValueObjectSpec},
    template::{TemplateEntry, TemplateRegistry},
};

pub use classification::{classify, output_variable, plan};
pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    Backend, Coercion, Dimensionality, Fallback, Route, SemanticKind, Stage,
};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Classification + Registry
    // ========================================================================

    fn registry_with(entries: &[(TypeDescriptor, &'static str)]) -> TemplateRegistry {
        let mut registry = TemplateRegistry::new();
        for (d, body) in entries {
            registry
                .register(TemplateEntry::new(*d, *body).unwrap())
                .unwrap();
        }
        registry
    }

    #[test]
    fn classified_descriptor_resolves_and_renders() {
        let rate = ParameterSpec::primitive("rate", "double").default_value("0.05");
        let d = classify(&rate, Stage::ToNative, Backend::SpreadsheetFormula).unwrap();

        let registry = registry_with(&[(
            d,
            "{nativeType} {name}Cpp = f(*{name}, \"{name}\", {defaultValue}{errorValue});\n",
        )]);
        let entry = registry.resolve(&d).unwrap();
        let out = BindingContext::for_slot(&rate, &d)
            .render(entry.body())
            .unwrap();

        assert_eq!(out, "double rateCpp = f(*rate, \"rate\", 0.05);\n");
    }

    #[test]
    fn string_kind_binds_std_string_as_native_type() {
        let dc = ParameterSpec::enumeration("dc", "QuantLib::DayCounter");
        let d = classify(&dc, Stage::ToNative, Backend::NativeBinding).unwrap();
        let ctx = BindingContext::for_slot(&dc, &d);

        assert_eq!(d.kind, SemanticKind::String);
        assert_eq!(ctx.render("{nativeType}").unwrap(), NATIVE_STRING);
    }

    #[test]
    fn tensor_rank_tracks_dimensionality() {
        let m = ParameterSpec::string("grid").matrix();
        let d = classify(&m, Stage::ToNative, Backend::ScriptBinding).unwrap();
        let ctx = BindingContext::for_slot(&m, &d);
        assert_eq!(ctx.render("{tensorRank}ToCalc").unwrap(), "matrixToCalc");
    }

    #[test]
    fn error_value_is_prefixed_with_comma() {
        let p = ParameterSpec::primitive("x", "double").error_value("-1.0");
        let d = classify(&p, Stage::ToNative, Backend::SpreadsheetFormula).unwrap();
        let ctx = BindingContext::for_slot(&p, &d);
        assert_eq!(ctx.render("f(x{errorValue})").unwrap(), "f(x, -1.0)");
    }
}
