//! `OnceLock`-backed registry holding the built-in catalog.

use std::sync::OnceLock;

use tracing::{debug, info, instrument};

use wrapgen_core::{
    application::ports::TemplateStore,
    domain::{TemplateEntry, TemplateRegistry, TypeDescriptor},
    error::WrapgenResult,
};

use crate::builtin_templates;

static REGISTRY: OnceLock<TemplateRegistry> = OnceLock::new();

/// Build a fresh registry from the built-in catalog.
///
/// # Errors
///
/// Fails with `DuplicateTemplate` if two catalog rows claim the same
/// descriptor, or `InvalidTemplate` if a body is malformed. Both are
/// catalog defects.
pub fn builtin_registry() -> WrapgenResult<TemplateRegistry> {
    let mut registry = TemplateRegistry::new();
    registry.register_all(builtin_templates::all_entries()?)?;
    Ok(registry)
}

/// Build the process-wide registry, or return it if it already exists.
///
/// Safe to call any number of times, from any thread.
#[instrument]
pub fn bootstrap() -> WrapgenResult<&'static TemplateRegistry> {
    if let Some(registry) = REGISTRY.get() {
        debug!("template registry already bootstrapped");
        return Ok(registry);
    }

    let built = builtin_registry()?;
    let registry = REGISTRY.get_or_init(|| built);
    info!(
        entries = registry.len(),
        backends = registry.backends().len(),
        "template registry bootstrapped"
    );
    Ok(registry)
}

/// The process-wide registry.
///
/// # Panics
///
/// Panics if [`bootstrap`] has not completed. Generating before bootstrap
/// is a programming error, not a recoverable condition.
pub fn global() -> &'static TemplateRegistry {
    match REGISTRY.get() {
        Some(registry) => registry,
        None => panic!("template registry used before bootstrap()"),
    }
}

/// The process-wide registry, if [`bootstrap`] has completed.
pub fn try_global() -> Option<&'static TemplateRegistry> {
    REGISTRY.get()
}

/// [`TemplateStore`] over the process-wide registry.
#[derive(Debug, Clone, Copy)]
pub struct GlobalStore {
    registry: &'static TemplateRegistry,
}

impl GlobalStore {
    /// Bootstrap the registry if needed and wrap it.
    pub fn new() -> WrapgenResult<Self> {
        Ok(Self {
            registry: bootstrap()?,
        })
    }

    pub fn registry(&self) -> &'static TemplateRegistry {
        self.registry
    }
}

impl TemplateStore for GlobalStore {
    fn resolve(&self, descriptor: &TypeDescriptor) -> WrapgenResult<TemplateEntry> {
        TemplateStore::resolve(self.registry, descriptor)
    }

    fn entries(&self) -> WrapgenResult<Vec<TemplateEntry>> {
        TemplateStore::entries(self.registry)
    }
}
