//! Application layer errors.
//!
//! These errors represent failures in orchestration, not classification or
//! rendering rules. Those are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::{Backend, Stage};
use crate::error::{ErrorCategory, WrapgenError};

/// Errors that occur while composing generated code.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// One function could not be generated.
    ///
    /// Carries enough context to point at the offending slot. No partial
    /// output is produced alongside it.
    #[error("cannot generate '{function}' for {backend}{}: {source}", location("parameter", .parameter, .stage))]
    GenerationFailed {
        function: String,
        parameter: Option<String>,
        stage: Option<Stage>,
        backend: Backend,
        #[source]
        source: Box<WrapgenError>,
    },

    /// Accessors for one value-object class could not be generated.
    #[error("cannot generate accessors for '{class_name}'{}: {source}", location("property", .property, .stage))]
    AccessorFailed {
        class_name: String,
        property: Option<String>,
        stage: Option<Stage>,
        #[source]
        source: Box<WrapgenError>,
    },

    /// A composer was asked to target a backend it does not serve.
    #[error("backend {backend} is not supported here: {reason}")]
    BackendMismatch {
        backend: Backend,
        reason: &'static str,
    },
}

fn location(label: &str, slot: &Option<String>, stage: &Option<Stage>) -> String {
    match (slot, stage) {
        (Some(p), Some(s)) => format!(" ({label} '{p}' at {s})"),
        (Some(p), None) => format!(" ({label} '{p}')"),
        (None, Some(s)) => format!(" (at {s})"),
        (None, None) => String::new(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::GenerationFailed { source, .. } | Self::AccessorFailed { source, .. } => {
                source.suggestions()
            }
            Self::BackendMismatch { backend, .. } => vec![
                format!("{} cannot be used for this kind of output", backend),
                "Value objects generate accessors; functions generate bodies".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GenerationFailed { source, .. } | Self::AccessorFailed { source, .. } => {
                source.category()
            }
            Self::BackendMismatch { .. } => ErrorCategory::Validation,
        }
    }
}
