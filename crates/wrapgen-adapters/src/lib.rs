//! Infrastructure adapters for wrapgen.
//!
//! This crate implements the ports defined in `wrapgen_core::application::ports`
//! and owns everything that touches the outside world: the built-in template
//! catalog, the process-wide registry, and the TOML manifest loader.

pub mod builtin_templates;
pub mod manifest;
pub mod registry;
pub mod renderer;

// Re-export commonly used adapters
pub use manifest::{Manifest, ManifestError, ManifestLoader, NamespaceDefaults};
pub use registry::{GlobalStore, bootstrap, global};
pub use renderer::PlaceholderRenderer;
