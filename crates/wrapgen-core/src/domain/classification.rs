//! Classification: mapping a parameter onto descriptor axes.
//!
//! # Design
//!
//! All knowledge of "which stages does this parameter need, and what does it
//! look like at each one" lives here. Value objects stay dumb; composers ask
//! this module and nothing else.
//!
//! The rules, per stage:
//!
//! | declared kind      | ToNative / Field*          | object stages    |
//! |--------------------|----------------------------|------------------|
//! | Primitive, no type | Variant                    | n/a              |
//! | Enumerated         | String                     | (ToEnum) as-is   |
//! | LibraryObject      | String                     | as-is            |
//! | ObjectHandleRef    | String (Variant for quote) | as-is            |
//! | anything else      | as-is                      | n/a              |
//!
//! Defaults are consumed where the raw input is first read (`ToNative`) and
//! again by object lookups, which must tolerate the empty ID a default yields.

use crate::domain::{
    entities::{descriptor::TypeDescriptor, spec::ParameterSpec},
    error::DomainError,
    value_objects::{Backend, Coercion, Dimensionality, Fallback, Route, SemanticKind, Stage},
};

/// The kind a slot has before any stage reinterprets it.
///
/// A primitive without a static native type can only be held as a variant.
pub fn effective_kind(spec: &ParameterSpec) -> SemanticKind {
    match spec.kind {
        SemanticKind::Primitive if spec.native_type.is_none() => SemanticKind::Variant,
        k => k,
    }
}

/// How the slot reaches the library once it is native.
///
/// Coercion is honoured only when asked for explicitly, and only on object
/// kinds that can be coerced.
pub fn route(spec: &ParameterSpec) -> Result<Route, DomainError> {
    match (effective_kind(spec), spec.coercion) {
        (SemanticKind::LibraryObject, Some(c)) => Ok(c.into()),
        (SemanticKind::LibraryObject, None) if spec.is_reference => Ok(Route::Reference),
        (SemanticKind::LibraryObject, None) => Ok(Route::Object),
        (SemanticKind::ObjectHandleRef, Some(Coercion::Quote)) => Ok(Route::Quote),
        (SemanticKind::ObjectHandleRef, Some(other)) => Err(mismatch(
            spec,
            "coercion",
            format!("handles can only be coerced to quotes, not {other}"),
        )),
        (SemanticKind::ObjectHandleRef, None) => Ok(Route::Object),
        (kind, Some(c)) => Err(mismatch(
            spec,
            "coercion",
            format!("a {kind} parameter cannot be coerced to {c}"),
        )),
        (SemanticKind::Enumerated, None) => Ok(Route::Native),
        (_, None) if spec.library_type.is_some() => Ok(Route::Library),
        (_, None) => Ok(Route::Native),
    }
}

/// Parameter stages the slot passes through, in emission order.
///
/// Always `ToNative`, followed by at most one conversion into library terms.
pub fn plan(spec: &ParameterSpec) -> Vec<Stage> {
    let follow_up = match effective_kind(spec) {
        SemanticKind::Enumerated => Some(Stage::ToEnum),
        SemanticKind::LibraryObject => Some(Stage::ToObjectRef),
        SemanticKind::ObjectHandleRef => Some(Stage::ToHandle),
        SemanticKind::Primitive | SemanticKind::String | SemanticKind::Variant => {
            spec.library_type.as_ref().map(|_| Stage::ToLibrary)
        }
    };
    std::iter::once(Stage::ToNative).chain(follow_up).collect()
}

pub fn passes_through(spec: &ParameterSpec, stage: Stage) -> bool {
    plan(spec).contains(&stage)
}

/// Name of the variable holding the slot's final converted value.
///
/// This is what an invocation expression refers to: `rateCpp`, `dcEnum`,
/// `curveLibObj` and so on.
pub fn output_variable(spec: &ParameterSpec) -> Result<String, DomainError> {
    let last = plan(spec).pop().unwrap_or(Stage::ToNative);
    let suffix = match last {
        Stage::ToObjectRef if route(spec)?.reaches_library_object() => "LibObj",
        stage => stage.variable_suffix().unwrap_or("Cpp"),
    };
    Ok(format!("{}{}", spec.name, suffix))
}

/// Classify `spec` at `stage` for `backend`.
///
/// Fails with [`DomainError::TypeMismatch`] when the slot does not pass
/// through `stage` or lacks a field the stage needs. The descriptor it
/// returns may still be unsupported; that is the registry's call.
pub fn classify(
    spec: &ParameterSpec,
    stage: Stage,
    backend: Backend,
) -> Result<TypeDescriptor, DomainError> {
    let route = route(spec)?;

    if stage.is_parameter_stage() && !passes_through(spec, stage) {
        return Err(mismatch(
            spec,
            "kind",
            format!("a {} parameter does not pass through {stage}", spec.kind),
        ));
    }
    if spec.default_value.is_some() && spec.dimensionality != Dimensionality::Scalar {
        return Err(mismatch(
            spec,
            "default_value",
            format!("defaults apply to scalars only, not {}", spec.dimensionality),
        ));
    }
    require_fields(spec, stage, route)?;
    // Object kinds carry their names through every stage they pass.
    if stage.is_parameter_stage() {
        match spec.kind {
            SemanticKind::LibraryObject => require_fields(spec, Stage::ToObjectRef, route)?,
            SemanticKind::ObjectHandleRef => require_fields(spec, Stage::ToHandle, route)?,
            _ => {}
        }
    }

    let kind = kind_at(spec, stage);
    let route = match stage {
        Stage::ToNative | Stage::ToEnum | Stage::FieldGet | Stage::FieldSet => Route::Native,
        _ => route,
    };
    let fallback = match stage {
        Stage::ToNative | Stage::ToObjectRef | Stage::ToHandle
            if spec.default_value.is_some() =>
        {
            Fallback::Defaulted
        }
        _ => Fallback::Required,
    };

    Ok(TypeDescriptor::new(stage, spec.dimensionality, kind, backend)
        .with_fallback(fallback)
        .with_route(route))
}

/// The kind a slot presents at `stage`.
fn kind_at(spec: &ParameterSpec, stage: Stage) -> SemanticKind {
    let declared = effective_kind(spec);
    match stage {
        Stage::ToNative | Stage::FieldGet | Stage::FieldSet => match declared {
            SemanticKind::Enumerated | SemanticKind::LibraryObject => SemanticKind::String,
            SemanticKind::ObjectHandleRef if spec.coercion == Some(Coercion::Quote) => {
                SemanticKind::Variant
            }
            SemanticKind::ObjectHandleRef => SemanticKind::String,
            other => other,
        },
        _ => declared,
    }
}

fn require_fields(spec: &ParameterSpec, stage: Stage, route: Route) -> Result<(), DomainError> {
    match stage {
        Stage::ToLibrary => {
            require(spec, "library_type", &spec.library_type, stage)?;
            require(spec, "namespace_objects", &spec.namespace_objects, stage)
        }
        Stage::ToEnum => require(spec, "library_type", &spec.library_type, stage),
        Stage::ToObjectRef => {
            require(spec, "namespace_objects", &spec.namespace_objects, stage)?;
            require(spec, "class_name", &spec.class_name, stage)?;
            if route.reaches_library_object() {
                require(spec, "namespace_library", &spec.namespace_library, stage)?;
            }
            Ok(())
        }
        Stage::ToHandle => {
            require(spec, "namespace_library", &spec.namespace_library, stage)?;
            if route != Route::Quote {
                require(spec, "namespace_objects", &spec.namespace_objects, stage)?;
                require(spec, "class_name", &spec.class_name, stage)?;
            }
            Ok(())
        }
        Stage::ReturnDeclaration | Stage::ReturnConversion if route == Route::Library => {
            require(spec, "namespace_objects", &spec.namespace_objects, stage)
        }
        _ => Ok(()),
    }
}

fn require(
    spec: &ParameterSpec,
    field: &'static str,
    value: &Option<String>,
    stage: Stage,
) -> Result<(), DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(mismatch(spec, field, format!("required at {stage}"))),
    }
}

fn mismatch(spec: &ParameterSpec, field: &'static str, reason: String) -> DomainError {
    DomainError::TypeMismatch {
        parameter: spec.name.clone(),
        field,
        reason,
    }
}
