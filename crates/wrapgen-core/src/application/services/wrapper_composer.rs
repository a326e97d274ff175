//! Wrapper Composer - builds one function body per backend.
//!
//! The body is assembled stage by stage:
//! 1. Every parameter that passes through a stage contributes one fragment,
//!    in declaration order
//! 2. A non-empty stage is introduced by its banner comment
//! 3. The return declaration is completed with the invocation expression
//! 4. The return conversion closes the body
//!
//! Any failure aborts the whole function. A body is either complete or not
//! produced at all.

use tracing::{debug, instrument};

use super::{generation_failed, render_slot};
use crate::{
    application::{
        ApplicationError,
        ports::{FragmentRenderer, TemplateStore},
    },
    domain::{
        Backend, DomainValidator as validator, FunctionSpec, GeneratedFunctionBody,
        RETURN_VALUE, Stage, classification,
    },
    error::WrapgenResult,
};

/// Composes wrapper function bodies.
pub struct WrapperComposer {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn FragmentRenderer>,
}

impl WrapperComposer {
    /// Create a composer over the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wrapgen_core::application::WrapperComposer;
    /// # use wrapgen_core::application::ports::*;
    /// # fn adapters() -> (Box<dyn TemplateStore>, Box<dyn FragmentRenderer>) { unimplemented!() }
    ///
    /// let (store, renderer) = adapters();
    /// let composer = WrapperComposer::new(store, renderer);
    /// ```
    pub fn new(store: Box<dyn TemplateStore>, renderer: Box<dyn FragmentRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Compose the body of `function` for `backend`.
    #[instrument(skip_all, fields(function = %function.name, backend = %backend))]
    pub fn compose(
        &self,
        function: &FunctionSpec,
        backend: Backend,
    ) -> WrapgenResult<GeneratedFunctionBody> {
        if !backend.composes_functions() {
            return Err(ApplicationError::BackendMismatch {
                backend,
                reason: "it generates value-object accessors, not function bodies",
            }
            .into());
        }
        validator::validate_function(function)
            .map_err(|e| generation_failed(&function.name, None, None, backend, e.into()))?;

        let mut body = String::new();
        let mut fragments = 0;

        for stage in Stage::PARAMETER {
            let mut section = String::new();
            for param in function
                .parameters
                .iter()
                .filter(|p| classification::passes_through(p, stage))
            {
                let text = render_slot(&*self.store, &*self.renderer, param, stage, backend)
                    .map_err(|e| {
                        generation_failed(
                            &function.name,
                            Some(param.name.as_str()),
                            Some(stage),
                            backend,
                            e,
                        )
                    })?;
                section.push_str(&text);
                fragments += 1;
            }
            push_section(&mut body, stage, &section);
        }

        let returns = function.returns.as_parameter();
        for stage in [Stage::ReturnDeclaration, Stage::ReturnConversion] {
            let mut text = render_slot(&*self.store, &*self.renderer, &returns, stage, backend)
                .map_err(|e| {
                    generation_failed(&function.name, Some(RETURN_VALUE), Some(stage), backend, e)
                })?;
            if stage == Stage::ReturnDeclaration {
                text.push_str(function.invocation.trim().trim_end_matches(';').trim_end());
                text.push_str(";\n");
            }
            push_section(&mut body, stage, &text);
            fragments += 1;
        }

        debug!(fragments, "function composed");
        Ok(GeneratedFunctionBody::new(
            &function.name,
            backend,
            body,
            fragments,
        ))
    }

    /// Compose every function for every backend.
    ///
    /// Results are ordered function-major, backend-minor. A failure affects
    /// only its own (function, backend) pair.
    pub fn compose_all(
        &self,
        functions: &[FunctionSpec],
        backends: &[Backend],
    ) -> Vec<WrapgenResult<GeneratedFunctionBody>> {
        functions
            .iter()
            .flat_map(|f| backends.iter().map(move |b| (f, *b)))
            .map(|(f, b)| self.compose(f, b))
            .collect()
    }
}

fn push_section(body: &mut String, stage: Stage, section: &str) {
    if section.is_empty() {
        return;
    }
    if let Some(banner) = stage.banner() {
        body.push_str("\n        // ");
        body.push_str(banner);
        body.push_str("\n\n");
    }
    body.push_str(section);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFragmentRenderer, MockTemplateStore};
    use crate::domain::{
        BindingContext, DomainError, ParameterSpec, ReturnSpec, TemplateEntry, TypeDescriptor,
    };
    use crate::error::WrapgenError;

    fn echo_store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store
            .expect_resolve()
            .returning(|d: &TypeDescriptor| Ok(TemplateEntry::new(*d, "{name}").unwrap()));
        store
    }

    fn stage_renderer() -> MockFragmentRenderer {
        let mut renderer = MockFragmentRenderer::new();
        renderer
            .expect_render()
            .returning(|entry: &TemplateEntry, ctx: &BindingContext| {
                Ok(format!("        {} {}\n", entry.descriptor().stage, ctx.name()))
            });
        renderer
    }

    fn sample() -> FunctionSpec {
        FunctionSpec::new("qlFn", "lib::fn(aCpp, bCpp)")
            .parameter(ParameterSpec::primitive("a", "double"))
            .parameter(ParameterSpec::enumeration("b", "lib::Kind"))
            .returns(ReturnSpec::primitive("double"))
    }

    #[test]
    fn stages_appear_in_order_with_banners() {
        let composer = WrapperComposer::new(Box::new(echo_store()), Box::new(stage_renderer()));
        let out = composer.compose(&sample(), Backend::NativeBinding).unwrap();

        let text = out.text();
        let native = text.find("convert input datatypes to C++ datatypes").unwrap();
        let enums = text
            .find("convert input datatypes to library enumerated datatypes")
            .unwrap();
        let invoke = text.find("invoke the library function").unwrap();
        let ret = text
            .find("perform data conversion for return value of function")
            .unwrap();
        assert!(native < enums && enums < invoke && invoke < ret);

        assert!(text.contains("        to-native a\n        to-native b\n"));
        assert!(text.contains("return-declaration returnValue\nlib::fn(aCpp, bCpp);\n"));
        assert!(!text.contains("to library datatypes"));
        assert_eq!(out.fragment_count(), 5);
    }

    #[test]
    fn invocation_gets_exactly_one_terminator() {
        let composer = WrapperComposer::new(Box::new(echo_store()), Box::new(stage_renderer()));
        let function = FunctionSpec::new("qlFn", "lib::fn(aCpp) ; ")
            .parameter(ParameterSpec::primitive("a", "double"))
            .returns(ReturnSpec::primitive("double"));

        let out = composer.compose(&function, Backend::NativeBinding).unwrap();
        assert!(out.text().contains("\nlib::fn(aCpp);\n"));
        assert!(!out.text().contains(";;"));
    }

    #[test]
    fn unresolved_fragment_fails_the_whole_function() {
        let mut store = MockTemplateStore::new();
        store.expect_resolve().returning(|d: &TypeDescriptor| {
            if d.stage == Stage::ToEnum {
                Err(DomainError::UnresolvedTemplate {
                    descriptor: d.to_string(),
                }
                .into())
            } else {
                Ok(TemplateEntry::new(*d, "{name}").unwrap())
            }
        });
        let composer = WrapperComposer::new(Box::new(store), Box::new(stage_renderer()));

        let err = composer
            .compose(&sample(), Backend::SpreadsheetFormula)
            .unwrap_err();
        match err {
            WrapgenError::Application(ApplicationError::GenerationFailed {
                function,
                parameter,
                stage,
                backend,
                ..
            }) => {
                assert_eq!(function, "qlFn");
                assert_eq!(parameter.as_deref(), Some("b"));
                assert_eq!(stage, Some(Stage::ToEnum));
                assert_eq!(backend, Backend::SpreadsheetFormula);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accessor_backend_is_rejected() {
        let mut store = MockTemplateStore::new();
        store.expect_resolve().never();
        let composer = WrapperComposer::new(Box::new(store), Box::new(stage_renderer()));

        let err = composer
            .compose(&sample(), Backend::ValueObjectAccessor)
            .unwrap_err();
        assert!(matches!(
            err,
            WrapgenError::Application(ApplicationError::BackendMismatch { .. })
        ));
    }

    #[test]
    fn classification_failure_never_reaches_the_store() {
        let mut store = MockTemplateStore::new();
        store.expect_resolve().never();
        let composer = WrapperComposer::new(Box::new(store), Box::new(stage_renderer()));

        // The handle lacks its library namespace, so even ToNative fails.
        let f = FunctionSpec::new("f", "g(hLibObj)")
            .parameter(ParameterSpec::handle("h", "Quote").namespace_objects("Objs"));
        let err = composer.compose(&f, Backend::NativeBinding).unwrap_err();
        assert!(matches!(
            err.root_cause(),
            WrapgenError::Domain(DomainError::TypeMismatch {
                field: "namespace_library",
                ..
            })
        ));
    }

    #[test]
    fn compose_all_is_function_major() {
        let composer = WrapperComposer::new(Box::new(echo_store()), Box::new(stage_renderer()));
        let functions = [sample(), FunctionSpec::new("other", "g()")];
        let backends = [Backend::NativeBinding, Backend::ScriptBinding];

        let results = composer.compose_all(&functions, &backends);
        let order: Vec<_> = results
            .iter()
            .map(|r| {
                let body = r.as_ref().unwrap();
                (body.function().to_string(), body.backend())
            })
            .collect();
        assert_eq!(
            order,
            vec![
                ("qlFn".to_string(), Backend::NativeBinding),
                ("qlFn".to_string(), Backend::ScriptBinding),
                ("other".to_string(), Backend::NativeBinding),
                ("other".to_string(), Backend::ScriptBinding),
            ]
        );
    }
}
