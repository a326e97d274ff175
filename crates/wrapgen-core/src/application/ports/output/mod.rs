//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the composers need from the outside world.
//! The `wrapgen-adapters` crate provides implementations.

use crate::domain::{BindingContext, TemplateEntry, TemplateRegistry, TypeDescriptor};
use crate::error::WrapgenResult;

/// Port for template lookup.
///
/// Implemented by:
/// - `wrapgen_adapters::registry::GlobalStore` (process-wide built-in catalog)
/// - `TemplateRegistry` itself (ad-hoc registries, tests)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Exact-match lookup of the fragment for `descriptor`.
    fn resolve(&self, descriptor: &TypeDescriptor) -> WrapgenResult<TemplateEntry>;

    /// Every available entry, sorted by descriptor.
    fn entries(&self) -> WrapgenResult<Vec<TemplateEntry>>;
}

/// Port for fragment rendering.
///
/// Implemented by:
/// - `wrapgen_adapters::renderer::PlaceholderRenderer` (strict `{token}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait FragmentRenderer: Send + Sync {
    /// Substitute `context` into `entry`'s body.
    ///
    /// Must fail, never guess, when the body references an unbound placeholder.
    fn render(&self, entry: &TemplateEntry, context: &BindingContext) -> WrapgenResult<String>;
}

impl TemplateStore for TemplateRegistry {
    fn resolve(&self, descriptor: &TypeDescriptor) -> WrapgenResult<TemplateEntry> {
        Ok(TemplateRegistry::resolve(self, descriptor)?.clone())
    }

    fn entries(&self) -> WrapgenResult<Vec<TemplateEntry>> {
        Ok(TemplateRegistry::entries(self).into_iter().cloned().collect())
    }
}
