// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so composers can attach them to per-function failures)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid specification: {0}")]
    InvalidSpec(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("parameter '{parameter}' cannot be classified ({field}): {reason}")]
    TypeMismatch {
        parameter: String,
        field: &'static str,
        reason: String,
    },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("No template registered for {descriptor}")]
    UnresolvedTemplate { descriptor: String },

    #[error("Template already registered for {descriptor}")]
    DuplicateTemplate { descriptor: String },

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("Placeholder '{{{placeholder}}}' has no bound value")]
    UnboundPlaceholder { placeholder: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSpec(msg) => vec![
                "Check the function and parameter definitions in your manifest".into(),
                format!("Details: {}", msg),
            ],
            Self::TypeMismatch { field, .. } => vec![
                format!("Set `{}` on the parameter", field.replace('_', "-")),
                "Or change its kind to one that does not need it".into(),
            ],
            Self::UnresolvedTemplate { descriptor } => vec![
                "This combination of type and backend is not supported".into(),
                format!("Descriptor: {}", descriptor),
                "Try: wrapgen list --backend <BACKEND> to see what is".into(),
            ],
            Self::DuplicateTemplate { descriptor } => vec![
                format!("Two catalog entries claim {}", descriptor),
                "This is a bug in the built-in catalog, please report it".into(),
            ],
            Self::UnboundPlaceholder { placeholder } => vec![
                format!("The template expects a value for {{{}}}", placeholder),
                "This is a bug in the built-in catalog, please report it".into(),
            ],
            Self::InvalidTemplate(_) => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSpec(_) | Self::TypeMismatch { .. } => ErrorCategory::Validation,
            Self::UnresolvedTemplate { .. } => ErrorCategory::NotFound,
            Self::InvalidTemplate(_)
            | Self::DuplicateTemplate { .. }
            | Self::UnboundPlaceholder { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
