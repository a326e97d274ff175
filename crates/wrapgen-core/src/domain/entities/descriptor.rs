//! The registry key: one point in the six-axis descriptor space.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::{Backend, Dimensionality, Fallback, Route, SemanticKind, Stage};

/// Identifies exactly one template fragment.
///
/// Equality is structural over all six axes, so two descriptors collide only
/// when every axis agrees. Ordering follows axis declaration order, which puts
/// stage first; sorted listings therefore read in emission order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TypeDescriptor {
    pub stage: Stage,
    pub dimensionality: Dimensionality,
    pub kind: SemanticKind,
    pub backend: Backend,
    pub fallback: Fallback,
    pub route: Route,
}

impl TypeDescriptor {
    /// A required, natively-routed descriptor. Adjust with the `with_*` methods.
    pub const fn new(
        stage: Stage,
        dimensionality: Dimensionality,
        kind: SemanticKind,
        backend: Backend,
    ) -> Self {
        Self {
            stage,
            dimensionality,
            kind,
            backend,
            fallback: Fallback::Required,
            route: Route::Native,
        }
    }

    pub const fn with_fallback(self, fallback: Fallback) -> Self {
        Self { fallback, ..self }
    }

    pub const fn with_route(self, route: Route) -> Self {
        Self { route, ..self }
    }

    pub const fn with_backend(self, backend: Backend) -> Self {
        Self { backend, ..self }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}/{}",
            self.stage, self.dimensionality, self.kind, self.backend, self.fallback, self.route
        )
    }
}
