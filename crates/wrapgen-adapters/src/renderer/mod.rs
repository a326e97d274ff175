//! Fragment rendering adapters.

mod placeholder;

pub use placeholder::PlaceholderRenderer;
