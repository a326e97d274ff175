//! Strict `{placeholder}` substitution renderer.

use tracing::{instrument, trace};

use wrapgen_core::{
    application::ports::FragmentRenderer,
    domain::{BindingContext, TemplateEntry},
    error::WrapgenResult,
};

/// Renderer that substitutes `{token}` placeholders from a binding context.
///
/// Values are inserted verbatim: no escaping, no type coercion, no second
/// pass. A token the context does not bind is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(descriptor = %entry.descriptor(), slot = context.name()))]
    fn render(&self, entry: &TemplateEntry, context: &BindingContext) -> WrapgenResult<String> {
        let text = context.render(entry.body())?;
        trace!(bytes = text.len(), "fragment rendered");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapgen_core::{
        domain::{Backend, Dimensionality, DomainError, SemanticKind, Stage, TypeDescriptor},
        error::WrapgenError,
    };

    fn entry(body: &'static str) -> TemplateEntry {
        let d = TypeDescriptor::new(
            Stage::ToNative,
            Dimensionality::Scalar,
            SemanticKind::Primitive,
            Backend::NativeBinding,
        );
        TemplateEntry::new(d, body).unwrap()
    }

    #[test]
    fn substitutes_bound_values() {
        let ctx = BindingContext::new("notional").with_native_type("double");
        let out = PlaceholderRenderer::new()
            .render(&entry("        {nativeType} {name}Cpp;\n"), &ctx)
            .unwrap();
        assert_eq!(out, "        double notionalCpp;\n");
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let ctx = BindingContext::new("notional");
        let err = PlaceholderRenderer::new()
            .render(&entry("{defaultValue}"), &ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            WrapgenError::Domain(DomainError::UnboundPlaceholder { ref placeholder })
                if placeholder == "defaultValue"
        ));
    }

    #[test]
    fn identical_inputs_render_identically() {
        let ctx = BindingContext::new("x")
            .with_native_type("long")
            .with_default_value("0")
            .with_error_value("-1");
        let e = entry("f<{nativeType}>({name}, {defaultValue}{errorValue})");
        let r = PlaceholderRenderer::new();
        assert_eq!(r.render(&e, &ctx).unwrap(), r.render(&e, &ctx).unwrap());
        assert_eq!(r.render(&e, &ctx).unwrap(), "f<long>(x, 0, -1)");
    }
}
