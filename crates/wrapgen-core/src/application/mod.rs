//! Application layer for wrapgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (WrapperComposer, AccessorComposer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! classification or rendering rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AccessorComposer, WrapperComposer};

// Re-export port traits (for adapter implementation)
pub use ports::{FragmentRenderer, TemplateStore};

pub use error::ApplicationError;
