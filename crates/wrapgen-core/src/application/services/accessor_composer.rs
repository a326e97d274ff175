//! Accessor Composer - property getters and setters for value objects.
//!
//! Each property contributes one `else if` arm to the getter and one to the
//! setter. Arms are spliced between fixed frames that handle the built-in
//! `objectId` and `className` properties and reject unknown names.

use tracing::{debug, instrument};

use super::{accessor_failed, render_slot};
use crate::{
    application::ports::{FragmentRenderer, TemplateStore},
    domain::{
        AccessorBodies, Backend, DomainValidator as validator, Stage, ValueObjectSpec,
    },
    error::WrapgenResult,
};

const BACKEND: Backend = Backend::ValueObjectAccessor;

const GETTER_HEAD: &str = r#"        std::string nameUpper = boost::algorithm::to_upper_copy(name);
        if(strcmp(nameUpper.c_str(), "OBJECTID")==0)
            return objectId_;
        else if(strcmp(nameUpper.c_str(), "CLASSNAME")==0)
            return className_;
"#;

const GETTER_TAIL: &str = r#"        else
            OH_FAIL("Error: attempt to retrieve non-existent Property: '" + name + "'");
"#;

const SETTER_HEAD: &str = r#"        std::string nameUpper = boost::algorithm::to_upper_copy(name);
        if(strcmp(nameUpper.c_str(), "OBJECTID")==0)
            objectId_ = boost::any_cast<std::string>(value);
        else if(strcmp(nameUpper.c_str(), "CLASSNAME")==0)
            className_ = boost::any_cast<std::string>(value);
"#;

const SETTER_TAIL: &str = r#"        else
            OH_FAIL("Error: attempt to set non-existent Property: '" + name + "'");
"#;

/// Composes value-object accessor pairs.
pub struct AccessorComposer {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn FragmentRenderer>,
}

impl AccessorComposer {
    pub fn new(store: Box<dyn TemplateStore>, renderer: Box<dyn FragmentRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Compose the getter and setter bodies for `object`.
    #[instrument(skip_all, fields(class = %object.class_name))]
    pub fn compose(&self, object: &ValueObjectSpec) -> WrapgenResult<AccessorBodies> {
        validator::validate_value_object(object)
            .map_err(|e| accessor_failed(&object.class_name, None, None, e.into()))?;

        let mut getter = String::from(GETTER_HEAD);
        let mut setter = String::from(SETTER_HEAD);

        for property in &object.properties {
            for (stage, body) in [(Stage::FieldGet, &mut getter), (Stage::FieldSet, &mut setter)] {
                let arm = render_slot(&*self.store, &*self.renderer, property, stage, BACKEND)
                    .map_err(|e| {
                        let property = Some(property.name.as_str());
                        accessor_failed(&object.class_name, property, Some(stage), e)
                    })?;
                body.push_str(&arm);
            }
        }

        getter.push_str(GETTER_TAIL);
        setter.push_str(SETTER_TAIL);

        debug!(properties = object.properties.len(), "accessors composed");
        Ok(AccessorBodies::new(&object.class_name, getter, setter))
    }

    /// Compose accessors for every class. Failures are per class.
    pub fn compose_all(&self, objects: &[ValueObjectSpec]) -> Vec<WrapgenResult<AccessorBodies>> {
        objects.iter().map(|o| self.compose(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFragmentRenderer, MockTemplateStore};
    use crate::domain::{
        BindingContext, ParameterSpec, TemplateEntry, TemplateRegistry, TypeDescriptor,
    };

    fn composer() -> AccessorComposer {
        let mut store = MockTemplateStore::new();
        store
            .expect_resolve()
            .returning(|d: &TypeDescriptor| Ok(TemplateEntry::new(*d, "{name}").unwrap()));
        let mut renderer = MockFragmentRenderer::new();
        renderer
            .expect_render()
            .returning(|entry: &TemplateEntry, ctx: &BindingContext| {
                Ok(format!("        // {} {}\n", entry.descriptor().stage, ctx.name()))
            });
        AccessorComposer::new(Box::new(store), Box::new(renderer))
    }

    #[test]
    fn arms_sit_between_frames_in_property_order() {
        let object = ValueObjectSpec::new("Swap")
            .property(ParameterSpec::primitive("rate", "double"))
            .property(ParameterSpec::string("tenor"));
        let bodies = composer().compose(&object).unwrap();

        let getter = bodies.getter();
        assert!(getter.starts_with(GETTER_HEAD));
        assert!(getter.ends_with(GETTER_TAIL));
        let rate = getter.find("field-get rate").unwrap();
        let tenor = getter.find("field-get tenor").unwrap();
        assert!(rate < tenor);

        assert!(bodies.setter().contains("field-set tenor"));
        assert!(!bodies.setter().contains("field-get"));
        assert_eq!(bodies.class_name(), "Swap");
    }

    #[test]
    fn empty_class_has_only_frames() {
        let bodies = composer().compose(&ValueObjectSpec::new("Empty")).unwrap();
        assert_eq!(bodies.getter(), format!("{GETTER_HEAD}{GETTER_TAIL}"));
        assert_eq!(bodies.setter(), format!("{SETTER_HEAD}{SETTER_TAIL}"));
    }

    #[test]
    fn missing_arm_template_names_property() {
        let store = TemplateRegistry::new();
        let mut renderer = MockFragmentRenderer::new();
        renderer.expect_render().never();
        let composer = AccessorComposer::new(Box::new(store), Box::new(renderer));

        let object = ValueObjectSpec::new("Swap").property(ParameterSpec::string("tenor"));
        let err = composer.compose(&object).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'Swap'"));
        assert!(msg.contains("property 'tenor' at field-get"));
    }
}
