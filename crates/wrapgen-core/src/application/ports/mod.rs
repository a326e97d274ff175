//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `wrapgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateStore`: Template lookup by descriptor
//!   - `FragmentRenderer`: Placeholder substitution
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by the composers)

pub mod output;

pub use output::{FragmentRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockFragmentRenderer, MockTemplateStore};
