//! End-to-end generation against the built-in catalog.

use wrapgen_adapters::{GlobalStore, PlaceholderRenderer, bootstrap, registry::builtin_registry};
use wrapgen_core::{
    application::{AccessorComposer, WrapperComposer, ports::FragmentRenderer},
    domain::{
        Backend, BindingContext, Coercion, DomainError, FunctionSpec, ParameterSpec, Placeholder,
        ReturnSpec, SemanticKind, Stage, TemplateEntry, TemplateRegistry, ValueObjectSpec,
        classify,
    },
    error::WrapgenError,
};

fn composer() -> WrapperComposer {
    WrapperComposer::new(
        Box::new(GlobalStore::new().unwrap()),
        Box::new(PlaceholderRenderer::new()),
    )
}

fn render_slot(spec: &ParameterSpec, stage: Stage, backend: Backend) -> String {
    let registry = bootstrap().unwrap();
    let descriptor = classify(spec, stage, backend).unwrap();
    let entry = registry.resolve(&descriptor).unwrap();
    PlaceholderRenderer::new()
        .render(entry, &BindingContext::for_slot(spec, &descriptor))
        .unwrap()
}

/// A context binding every placeholder except `skip`.
fn context_without(skip: Option<Placeholder>) -> BindingContext {
    let mut ctx = BindingContext::new("slot");
    let bind = |p: Placeholder| skip != Some(p);
    if bind(Placeholder::NativeType) {
        ctx = ctx.with_native_type("double");
    }
    if bind(Placeholder::Type) {
        ctx = ctx.with_library_type("QuantLib::Real");
    }
    if bind(Placeholder::DefaultValue) {
        ctx = ctx.with_default_value("0.0");
    }
    if bind(Placeholder::ErrorValue) {
        ctx = ctx.with_error_value("-1");
    }
    if bind(Placeholder::Classname) {
        ctx = ctx.with_class_name("YieldTermStructure");
    }
    if bind(Placeholder::NamespaceObjects) {
        ctx = ctx.with_namespace_objects("QuantLibAddin");
    }
    if bind(Placeholder::NamespaceLibrary) {
        ctx = ctx.with_namespace_library("QuantLib");
    }
    if bind(Placeholder::TensorRank) {
        ctx = ctx.with_tensor_rank("vector");
    }
    ctx
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn scalar_primitive_with_default() {
    let rate = ParameterSpec::primitive("rate", "double").default_value("0.0");
    let text = render_slot(&rate, Stage::ToNative, Backend::SpreadsheetFormula);

    assert!(text.contains("double rateCpp"));
    assert!(text.contains("operToScalar<double>"));
    assert!(text.contains("\"rate\""));
    assert!(text.contains("0.0"));
}

#[test]
fn vector_of_library_objects() {
    let curves = ParameterSpec::object("curves", "YieldCurve")
        .vector()
        .namespace_objects("QuantLibAddin");
    let text = render_slot(&curves, Stage::ToObjectRef, Backend::SpreadsheetFormula);

    assert!(text.contains("curvesObj"));
    assert!(text.contains("(curvesCpp)"));
    assert!(text.contains("std::vector<boost::shared_ptr<QuantLibAddin::YieldCurve> >"));
}

#[test]
fn handle_without_library_namespace_is_a_type_mismatch() {
    let function = FunctionSpec::new("qlCurveRate", "curveLibObj->rate()")
        .parameter(ParameterSpec::handle("curve", "YieldTermStructure").namespace_objects("QLA"))
        .returns(ReturnSpec::primitive("double"));

    let err = composer()
        .compose(&function, Backend::SpreadsheetFormula)
        .unwrap_err();
    assert!(err.to_string().contains("parameter 'curve' at to-native"));
    assert!(err.to_string().contains("required at to-handle"));
    match err.root_cause() {
        WrapgenError::Domain(DomainError::TypeMismatch { field, .. }) => {
            assert_eq!(*field, "namespace_library");
        }
        other => panic!("unexpected root cause: {other}"),
    }
}

#[test]
fn matrix_of_strings_return_for_script_binding() {
    let function =
        FunctionSpec::new("qlNames", "QuantLibAddin::names()").returns(ReturnSpec::string().matrix());
    let body = composer().compose(&function, Backend::ScriptBinding).unwrap();

    let text = body.text();
    let declaration = text
        .find("std::vector<std::vector<std::string> > returnValue = QuantLibAddin::names();\n")
        .unwrap();
    let conversion = text.find("SEQSEQ(STRING) returnValueCalc;").unwrap();
    assert!(declaration < conversion);
    assert!(text.contains("matrixToCalc(returnValueCalc, returnValue);"));
    assert_eq!(body.fragment_count(), 2);
}

// ── Properties ────────────────────────────────────────────────────────────────

#[test]
fn every_builtin_entry_renders_with_its_placeholders_and_fails_without_each() {
    let registry = builtin_registry().unwrap();
    let renderer = PlaceholderRenderer::new();
    let full = context_without(None);

    for entry in registry.entries() {
        renderer
            .render(entry, &full)
            .unwrap_or_else(|e| panic!("{}: {e}", entry.descriptor()));

        for p in entry.placeholders() {
            if matches!(p, Placeholder::Name | Placeholder::NameUpper) {
                continue;
            }
            let err = renderer.render(entry, &context_without(Some(p))).unwrap_err();
            match err {
                WrapgenError::Domain(DomainError::UnboundPlaceholder { placeholder }) => {
                    assert_eq!(placeholder, p.token(), "{}", entry.descriptor());
                }
                other => panic!("{}: unexpected error {other}", entry.descriptor()),
            }
        }
    }
}

#[test]
fn registering_a_builtin_descriptor_twice_fails() {
    let registry = builtin_registry().unwrap();
    let first: TemplateEntry = registry.entries()[0].clone();

    let mut copy = TemplateRegistry::new();
    copy.register(first.clone()).unwrap();
    assert!(matches!(
        copy.register(first),
        Err(DomainError::DuplicateTemplate { .. })
    ));
}

#[test]
fn generation_is_deterministic_across_runs() {
    let function = curve_rate();
    for backend in [
        Backend::SpreadsheetFormula,
        Backend::ScriptBinding,
        Backend::NativeBinding,
    ] {
        let a = composer().compose(&function, backend).unwrap();
        let b = composer().compose(&function, backend).unwrap();
        assert_eq!(a.text(), b.text(), "{backend}");
    }
}

#[test]
fn banners_follow_stage_order() {
    let body = composer()
        .compose(&curve_rate(), Backend::NativeBinding)
        .unwrap();
    let text = body.text();

    let positions: Vec<usize> = [
        Stage::ToNative,
        Stage::ToLibrary,
        Stage::ToEnum,
        Stage::ToObjectRef,
        Stage::ToHandle,
        Stage::ReturnDeclaration,
        Stage::ReturnConversion,
    ]
    .into_iter()
    .map(|s| text.find(s.banner().unwrap()).unwrap_or_else(|| panic!("{s} missing")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_stages_have_no_banner() {
    let function = FunctionSpec::new("qlAdd", "QuantLibAddin::add(xCpp)")
        .parameter(ParameterSpec::primitive("x", "double"))
        .returns(ReturnSpec::primitive("double"));
    let text = composer()
        .compose(&function, Backend::SpreadsheetFormula)
        .unwrap()
        .into_text();

    assert!(text.contains(Stage::ToNative.banner().unwrap()));
    for stage in [Stage::ToLibrary, Stage::ToEnum, Stage::ToObjectRef, Stage::ToHandle] {
        assert!(!text.contains(stage.banner().unwrap()), "{stage}");
    }
}

#[test]
fn quote_coerced_handle_reads_a_variant() {
    let quote = ParameterSpec::handle("spot", "Quote")
        .coercion(Coercion::Quote)
        .namespaces("QuantLibAddin", "QuantLib");
    let native = render_slot(&quote, Stage::ToNative, Backend::NativeBinding);
    assert!(native.contains("ObjectHandler::Variant spotCpp"));

    let handle = render_slot(&quote, Stage::ToHandle, Backend::NativeBinding);
    assert!(handle.contains("QuantLib::Handle<QuantLib::Quote> spotLibObj"));
}

#[test]
fn coerced_library_objects_pick_their_route() {
    for (coercion, marker) in [
        (Coercion::Quote, "CoerceQuote"),
        (Coercion::TermStructure, "CoerceTermStructure"),
        (Coercion::LibrarySame, "CoerceLibrarySame"),
    ] {
        let p = ParameterSpec::object("ts", "YieldTermStructure")
            .coercion(coercion)
            .namespaces("QuantLibAddin", "QuantLib");
        let text = render_slot(&p, Stage::ToObjectRef, Backend::ScriptBinding);
        assert!(text.contains(marker), "{coercion:?}");
        assert!(text.contains("tsLibObj"));
    }
}

#[test]
fn serialization_layer_returns_the_built_object() {
    let function = FunctionSpec::new("qlSwap", "new QuantLibAddin::Swap(rateCpp)")
        .parameter(ParameterSpec::primitive("rate", "double").default_value("0.05"))
        .returns(ReturnSpec::new(SemanticKind::LibraryObject));
    let text = composer()
        .compose(&function, Backend::SerializationLayer)
        .unwrap()
        .into_text();

    assert!(text.contains("valueObject->getProperty(\"rate\")"));
    assert!(text.contains("\"rate\", 0.05);"));
    assert!(text.contains(
        "boost::shared_ptr<ObjectHandler::Object> returnValue = new QuantLibAddin::Swap(rateCpp);"
    ));
}

#[test]
fn unsupported_combination_is_unresolved_for_that_backend_only() {
    let mut f = FunctionSpec::new("qlGrid", "QuantLibAddin::grid(nCpp)")
        .parameter(ParameterSpec::primitive("n", "long"))
        .returns(ReturnSpec::primitive("double").matrix().library_type("QuantLib::Matrix"));
    f.inherit_namespaces(Some("QuantLibAddin"), Some("QuantLib"));

    let results = composer().compose_all(&[f], &Backend::FUNCTION);
    assert_eq!(results.len(), Backend::FUNCTION.len());
    for result in results {
        let err = result.unwrap_err();
        assert!(matches!(
            err.root_cause(),
            WrapgenError::Domain(DomainError::UnresolvedTemplate { .. })
        ));
    }
}

#[test]
fn value_object_accessors_cover_every_property() {
    let composer = AccessorComposer::new(
        Box::new(GlobalStore::new().unwrap()),
        Box::new(PlaceholderRenderer::new()),
    );
    let object = ValueObjectSpec::new("qlSwap")
        .property(ParameterSpec::primitive("notional", "double"))
        .property(ParameterSpec::string("tenors").vector())
        .property(ParameterSpec::object("curve", "YieldTermStructure"));
    let bodies = composer.compose(&object).unwrap();

    let getter = bodies.getter();
    assert!(getter.contains("\"NOTIONAL\")==0)\n            return notional_;"));
    assert!(getter.contains("\"TENORS\""));
    assert!(getter.ends_with("non-existent Property: '\" + name + \"'\");\n"));

    let setter = bodies.setter();
    assert!(setter.contains("notional_ = boost::any_cast<double>(value);"));
    assert!(setter.contains("tenors_ = boost::any_cast<std::vector<std::string> >(value);"));
    assert!(setter.contains("curve_ = boost::any_cast<std::string>(value);"));
}

fn curve_rate() -> FunctionSpec {
    let mut f = FunctionSpec::new("qlCurveRate", "curveLibObj->zeroRate(rateLib, dcEnum)")
        .parameter(
            ParameterSpec::primitive("rate", "double")
                .library_type("QuantLib::Rate")
                .default_value("0.0"),
        )
        .parameter(ParameterSpec::enumeration("dc", "QuantLib::DayCounter"))
        .parameter(ParameterSpec::object("model", "Model"))
        .parameter(ParameterSpec::handle("curve", "YieldTermStructure"))
        .returns(ReturnSpec::primitive("double"));
    f.inherit_namespaces(Some("QuantLibAddin"), Some("QuantLib"));
    f
}
