//! Template fragments keyed by descriptor.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  TemplateEntry (Value Object)                            │
//! │  ├── TypeDescriptor  - which slot/stage/backend it serves│
//! │  └── body            - text with {placeholder} tokens    │
//! ├──────────────────────────────────────────────────────────┤
//! │  TemplateRegistry (Aggregate)                            │
//! │  └── HashMap<TypeDescriptor, TemplateEntry>              │
//! │       register()  - rejects duplicates                   │
//! │       resolve()   - exact match or UnresolvedTemplate    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Bodies are validated once, at construction: every `{...}` must name a
//! known [`Placeholder`]. After that an entry is immutable.
//!
//! Resolution is exact. There is no fallback to a "closest" descriptor; an
//! unsupported combination is reported, never approximated.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::domain::{
    entities::{
        binding::{Placeholder, Segment, scan},
        descriptor::TypeDescriptor,
    },
    error::DomainError,
    value_objects::Backend,
};

// ── TemplateEntry ────────────────────────────────────────────────────────────

/// A fragment of target-language text and the descriptor it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    descriptor: TypeDescriptor,
    body: Cow<'static, str>,
}

impl TemplateEntry {
    /// Build an entry, validating the body's placeholder syntax.
    pub fn new(
        descriptor: TypeDescriptor,
        body: impl Into<Cow<'static, str>>,
    ) -> Result<Self, DomainError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "empty body for {descriptor}"
            )));
        }
        scan(&body).map_err(|e| match e {
            DomainError::InvalidTemplate(msg) => {
                DomainError::InvalidTemplate(format!("{descriptor}: {msg}"))
            }
            other => other,
        })?;

        Ok(Self { descriptor, body })
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Distinct placeholders the body references, in vocabulary order.
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        // The body was scanned at construction, so this cannot fail.
        scan(&self.body)
            .map(|segments| {
                segments
                    .into_iter()
                    .filter_map(|s| match s {
                        Segment::Placeholder(p) => Some(p),
                        Segment::Literal(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ── TemplateRegistry ─────────────────────────────────────────────────────────

/// Immutable-after-build map from descriptor to fragment.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    entries: HashMap<TypeDescriptor, TemplateEntry>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry. A second entry for the same descriptor is rejected.
    pub fn register(&mut self, entry: TemplateEntry) -> Result<(), DomainError> {
        let key = entry.descriptor;
        if self.entries.contains_key(&key) {
            return Err(DomainError::DuplicateTemplate {
                descriptor: key.to_string(),
            });
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn register_all(
        &mut self,
        entries: impl IntoIterator<Item = TemplateEntry>,
    ) -> Result<(), DomainError> {
        entries.into_iter().try_for_each(|e| self.register(e))
    }

    /// Exact-match lookup.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<&TemplateEntry, DomainError> {
        self.entries
            .get(descriptor)
            .ok_or_else(|| DomainError::UnresolvedTemplate {
                descriptor: descriptor.to_string(),
            })
    }

    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.entries.contains_key(descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry, sorted by descriptor.
    pub fn entries(&self) -> Vec<&TemplateEntry> {
        let mut all: Vec<_> = self.entries.values().collect();
        all.sort_by_key(|e| e.descriptor);
        all
    }

    /// Entries serving one backend, sorted by descriptor.
    pub fn entries_for(&self, backend: Backend) -> Vec<&TemplateEntry> {
        let mut all: Vec<_> = self
            .entries
            .values()
            .filter(|e| e.descriptor.backend == backend)
            .collect();
        all.sort_by_key(|e| e.descriptor);
        all
    }

    /// Backends with at least one entry.
    pub fn backends(&self) -> BTreeSet<Backend> {
        self.entries.keys().map(|d| d.backend).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Dimensionality, SemanticKind, Stage};

    fn descriptor(backend: Backend) -> TypeDescriptor {
        TypeDescriptor::new(
            Stage::ToNative,
            Dimensionality::Scalar,
            SemanticKind::Primitive,
            backend,
        )
    }

    fn entry(backend: Backend) -> TemplateEntry {
        TemplateEntry::new(descriptor(backend), "{nativeType} {name}Cpp = {name};\n").unwrap()
    }

    #[test]
    fn entry_reports_its_placeholders() {
        let e = entry(Backend::NativeBinding);
        let found: Vec<_> = e.placeholders().into_iter().collect();
        assert_eq!(found, vec![Placeholder::Name, Placeholder::NativeType]);
    }

    #[test]
    fn entry_rejects_unknown_placeholder() {
        let err = TemplateEntry::new(descriptor(Backend::NativeBinding), "{bogus}").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTemplate(msg) if msg.contains("bogus")));
    }

    #[test]
    fn entry_rejects_empty_body() {
        assert!(TemplateEntry::new(descriptor(Backend::NativeBinding), "  ").is_err());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = TemplateRegistry::new();
        registry.register(entry(Backend::NativeBinding)).unwrap();

        let err = registry.register(entry(Backend::NativeBinding)).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateTemplate { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolve_is_exact() {
        let mut registry = TemplateRegistry::new();
        registry.register(entry(Backend::NativeBinding)).unwrap();

        assert!(registry.resolve(&descriptor(Backend::NativeBinding)).is_ok());

        let defaulted = descriptor(Backend::NativeBinding)
            .with_fallback(crate::domain::value_objects::Fallback::Defaulted);
        let err = registry.resolve(&defaulted).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnresolvedTemplate {
                descriptor: defaulted.to_string()
            }
        );
    }

    #[test]
    fn listings_are_sorted_and_filtered() {
        let mut registry = TemplateRegistry::new();
        registry
            .register_all([entry(Backend::NativeBinding), entry(Backend::ScriptBinding)])
            .unwrap();

        let backends: Vec<_> = registry
            .entries()
            .iter()
            .map(|e| e.descriptor().backend)
            .collect();
        assert_eq!(backends, vec![Backend::ScriptBinding, Backend::NativeBinding]);
        assert_eq!(registry.entries_for(Backend::ScriptBinding).len(), 1);
        assert_eq!(registry.backends().len(), 2);
    }
}
