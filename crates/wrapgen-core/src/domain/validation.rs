use std::collections::HashSet;

use crate::domain::{
    entities::spec::{FunctionSpec, ParameterSpec, ValueObjectSpec},
    error::DomainError,
};

/// Property names the accessor frames already answer.
const RESERVED_PROPERTIES: [&str; 2] = ["OBJECTID", "CLASSNAME"];

/// Centralized domain validation.
///
/// Structural checks that do not depend on a stage or backend. Anything that
/// does (missing namespaces, inapplicable coercions) is classification's job.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_parameter(p: &ParameterSpec) -> Result<(), DomainError> {
        if !is_identifier(&p.name) {
            return Err(DomainError::InvalidSpec(format!(
                "'{}' is not a valid parameter name",
                p.name
            )));
        }
        for (field, value) in [
            ("native-type", &p.native_type),
            ("library-type", &p.library_type),
            ("class-name", &p.class_name),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(DomainError::InvalidSpec(format!(
                    "parameter '{}' has an empty {field}",
                    p.name
                )));
            }
        }
        Ok(())
    }

    pub fn validate_function(f: &FunctionSpec) -> Result<(), DomainError> {
        if !is_identifier(&f.name) {
            return Err(DomainError::InvalidSpec(format!(
                "'{}' is not a valid function name",
                f.name
            )));
        }
        if f.invocation.trim().is_empty() {
            return Err(DomainError::InvalidSpec(format!(
                "function '{}' has no invocation",
                f.name
            )));
        }

        let mut seen = HashSet::new();
        for p in &f.parameters {
            Self::validate_parameter(p)?;
            if !seen.insert(p.name.as_str()) {
                return Err(DomainError::InvalidSpec(format!(
                    "function '{}' declares parameter '{}' twice",
                    f.name, p.name
                )));
            }
        }
        Ok(())
    }

    pub fn validate_value_object(v: &ValueObjectSpec) -> Result<(), DomainError> {
        if !is_identifier(&v.class_name) {
            return Err(DomainError::InvalidSpec(format!(
                "'{}' is not a valid class name",
                v.class_name
            )));
        }

        let mut seen = HashSet::new();
        for p in &v.properties {
            Self::validate_parameter(p)?;
            let upper = p.name.to_uppercase();
            if RESERVED_PROPERTIES.contains(&upper.as_str()) {
                return Err(DomainError::InvalidSpec(format!(
                    "property '{}' of '{}' clashes with a built-in property",
                    p.name, v.class_name
                )));
            }
            // Property lookup is case-insensitive.
            if !seen.insert(upper) {
                return Err(DomainError::InvalidSpec(format!(
                    "'{}' declares property '{}' twice",
                    v.class_name, p.name
                )));
            }
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
