//! The process-wide template registry.
//!
//! The built-in catalog is assembled once, on the first call to
//! [`bootstrap`], and is never mutated afterwards. Composers reach it through
//! [`GlobalStore`], which implements the core `TemplateStore` port.

mod global;

pub use global::{GlobalStore, bootstrap, builtin_registry, global, try_global};
