//! Application services - orchestrate use cases.
//!
//! Services coordinate classification, template lookup and rendering to
//! produce whole function bodies or accessor pairs.

pub mod accessor_composer;
pub mod wrapper_composer;

pub use accessor_composer::AccessorComposer;
pub use wrapper_composer::WrapperComposer;

use tracing::trace;

use crate::{
    application::{
        ApplicationError,
        ports::{FragmentRenderer, TemplateStore},
    },
    domain::{BindingContext, ParameterSpec, Stage, classify, value_objects::Backend},
    error::{WrapgenError, WrapgenResult},
};

/// Classify, resolve and render one slot at one stage.
fn render_slot(
    store: &dyn TemplateStore,
    renderer: &dyn FragmentRenderer,
    spec: &ParameterSpec,
    stage: Stage,
    backend: Backend,
) -> WrapgenResult<String> {
    let descriptor = classify(spec, stage, backend)?;
    trace!(%descriptor, parameter = %spec.name, "rendering fragment");

    let entry = store.resolve(&descriptor)?;
    let context = BindingContext::for_slot(spec, &descriptor);
    renderer.render(&entry, &context)
}

/// Wrap `source` with the function slot it happened at.
fn generation_failed(
    function: &str,
    parameter: Option<&str>,
    stage: Option<Stage>,
    backend: Backend,
    source: WrapgenError,
) -> WrapgenError {
    ApplicationError::GenerationFailed {
        function: function.to_string(),
        parameter: parameter.map(str::to_string),
        stage,
        backend,
        source: Box::new(source),
    }
    .into()
}

fn accessor_failed(
    class_name: &str,
    property: Option<&str>,
    stage: Option<Stage>,
    source: WrapgenError,
) -> WrapgenError {
    ApplicationError::AccessorFailed {
        class_name: class_name.to_string(),
        property: property.map(str::to_string),
        stage,
        source: Box::new(source),
    }
    .into()
}
