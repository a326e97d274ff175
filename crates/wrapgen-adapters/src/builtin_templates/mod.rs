//! The built-in template catalog.
//!
//! This module provides [`all_entries`], the single entry-point for the
//! fragments that ship with wrapgen. Each backend keeps its rows in its own
//! submodule; stages whose text does not depend on the backend live in
//! [`shared`] and are registered once per function backend.
//!
//! # Layout
//!
//! | module            | backend               | stages                          |
//! |-------------------|-----------------------|---------------------------------|
//! | `shared`          | every function backend| library, enum, object, handle, return declaration |
//! | `spreadsheet`     | spreadsheet-formula   | to-native, return-conversion    |
//! | `script`          | script-binding        | to-native, return-conversion    |
//! | `serialization`   | serialization-layer   | to-native, object returns       |
//! | `native`          | native-binding        | to-native, return-conversion    |
//! | `accessor`        | value-object-accessor | field-get, field-set            |
//!
//! Fragments are indented eight spaces, with continuation lines at twelve,
//! and end with a newline. Return declarations are the exception: they end
//! with `returnValue = ` so the composer can append the invocation.
//!
//! # Adding a fragment
//!
//! Add a [`Row`] to the relevant table. A row whose descriptor is already
//! taken makes [`all_entries`] fail, and the registry tests catch it.

mod accessor;
mod native;
mod script;
mod serialization;
mod shared;
mod spreadsheet;

use tracing::{debug, instrument};

use wrapgen_core::domain::{
    Backend, Dimensionality, DomainError, Fallback, Route, SemanticKind, Stage, TemplateEntry,
    TypeDescriptor,
};

// ── Rows ──────────────────────────────────────────────────────────────────────

/// One catalog line: every descriptor axis except the backend, plus the body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Row {
    stage: Stage,
    dimensionality: Dimensionality,
    kind: SemanticKind,
    fallback: Fallback,
    route: Route,
    body: &'static str,
}

/// A required, natively-routed row.
pub(crate) const fn row(
    stage: Stage,
    dimensionality: Dimensionality,
    kind: SemanticKind,
    body: &'static str,
) -> Row {
    Row {
        stage,
        dimensionality,
        kind,
        fallback: Fallback::Required,
        route: Route::Native,
        body,
    }
}

impl Row {
    pub(crate) const fn defaulted(self) -> Self {
        Self {
            fallback: Fallback::Defaulted,
            ..self
        }
    }

    pub(crate) const fn via(self, route: Route) -> Self {
        Self { route, ..self }
    }

    fn entry(&self, backend: Backend) -> Result<TemplateEntry, DomainError> {
        let descriptor = TypeDescriptor::new(self.stage, self.dimensionality, self.kind, backend)
            .with_fallback(self.fallback)
            .with_route(self.route);
        TemplateEntry::new(descriptor, self.body)
    }
}

fn build(backend: Backend, rows: &[Row]) -> Result<Vec<TemplateEntry>, DomainError> {
    rows.iter().map(|r| r.entry(backend)).collect()
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Every built-in entry, for every backend.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTemplate`] if a body is malformed. Duplicate
/// descriptors are not detected here; registering the result does that.
#[instrument]
pub fn all_entries() -> Result<Vec<TemplateEntry>, DomainError> {
    let mut entries = Vec::new();

    for backend in Backend::FUNCTION {
        entries.extend(build(backend, shared::ROWS)?);
    }
    entries.extend(build(Backend::SpreadsheetFormula, spreadsheet::ROWS)?);
    entries.extend(build(Backend::ScriptBinding, script::ROWS)?);
    entries.extend(build(Backend::SerializationLayer, serialization::ROWS)?);
    entries.extend(build(Backend::NativeBinding, native::ROWS)?);
    entries.extend(build(Backend::ValueObjectAccessor, accessor::ROWS)?);

    debug!(count = entries.len(), "built-in catalog assembled");
    Ok(entries)
}
