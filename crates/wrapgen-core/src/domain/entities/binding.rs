//! Placeholder vocabulary and the values bound to it for one rendering.
//!
//! Templates reference values as `{name}`, `{nativeType}` and so on. The set
//! of names is closed: [`Placeholder`] enumerates every token a template may
//! use, and [`BindingContext`] holds the values for one parameter at one
//! stage. Rendering is strict. A token with no bound value is an error, never
//! an empty string and never the literal token.

use std::borrow::Cow;
use std::fmt;

use crate::domain::{
    entities::{descriptor::TypeDescriptor, spec::ParameterSpec},
    error::DomainError,
    value_objects::SemanticKind,
};

/// Native type bound to `{nativeType}` for string-kinded slots.
pub const NATIVE_STRING: &str = "std::string";

/// Native type bound to `{nativeType}` for variant-kinded slots.
pub const NATIVE_VARIANT: &str = "ObjectHandler::Variant";

// ── Placeholder ──────────────────────────────────────────────────────────────

/// Every token a template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Name,
    NameUpper,
    NativeType,
    DefaultValue,
    ErrorValue,
    Type,
    Classname,
    NamespaceObjects,
    NamespaceLibrary,
    TensorRank,
}

impl Placeholder {
    pub const ALL: [Placeholder; 10] = [
        Self::Name,
        Self::NameUpper,
        Self::NativeType,
        Self::DefaultValue,
        Self::ErrorValue,
        Self::Type,
        Self::Classname,
        Self::NamespaceObjects,
        Self::NamespaceLibrary,
        Self::TensorRank,
    ];

    /// The token as written between braces.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameUpper => "nameUpper",
            Self::NativeType => "nativeType",
            Self::DefaultValue => "defaultValue",
            Self::ErrorValue => "errorValue",
            Self::Type => "type",
            Self::Classname => "classname",
            Self::NamespaceObjects => "namespaceObjects",
            Self::NamespaceLibrary => "namespaceLibrary",
            Self::TensorRank => "tensorRank",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.token())
    }
}

/// Split `body` into literal runs and placeholder tokens.
///
/// Fails on an unterminated `{`, a stray `}`, or a token outside the
/// vocabulary. Templates contain no other braces.
pub fn scan(body: &str) -> Result<Vec<Segment<'_>>, DomainError> {
    let mut segments = Vec::new();
    let mut rest = body;

    while let Some(open) = rest.find(['{', '}']) {
        if rest.as_bytes()[open] == b'}' {
            return Err(DomainError::InvalidTemplate(format!(
                "stray '}}' in `{}`",
                body.escape_debug()
            )));
        }
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }

        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            DomainError::InvalidTemplate(format!(
                "unterminated placeholder in `{}`",
                body.escape_debug()
            ))
        })?;
        let token = &after[..close];
        let placeholder = Placeholder::from_token(token).ok_or_else(|| {
            DomainError::InvalidTemplate(format!("unknown placeholder '{{{token}}}'"))
        })?;

        segments.push(Segment::Placeholder(placeholder));
        rest = &after[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

/// One piece of a scanned template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
}

// ── BindingContext ───────────────────────────────────────────────────────────

/// Values available to one fragment rendering.
///
/// `{name}` is always bound. `{nameUpper}` is derived from it. Everything else
/// is bound only when the slot supplies it, except `{errorValue}`, which
/// [`BindingContext::for_slot`] always binds: to `", <literal>"` when the
/// parameter has an error value and to the empty string otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingContext {
    name: String,
    native_type: Option<String>,
    library_type: Option<String>,
    default_value: Option<String>,
    error_value: Option<String>,
    class_name: Option<String>,
    namespace_objects: Option<String>,
    namespace_library: Option<String>,
    tensor_rank: Option<&'static str>,
}

impl BindingContext {
    /// A context binding only `{name}` (and the derived `{nameUpper}`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_type: None,
            library_type: None,
            default_value: None,
            error_value: None,
            class_name: None,
            namespace_objects: None,
            namespace_library: None,
            tensor_rank: None,
        }
    }

    /// Bind everything a slot provides, as seen through `descriptor`.
    ///
    /// `{nativeType}` follows the descriptor's kind, not the declared one: a
    /// library object travels as `std::string` at `ToNative`, and a primitive
    /// without a native type travels as `ObjectHandler::Variant`.
    pub fn for_slot(spec: &ParameterSpec, descriptor: &TypeDescriptor) -> Self {
        let native_type = match descriptor.kind {
            SemanticKind::String => Some(NATIVE_STRING.to_string()),
            SemanticKind::Variant => Some(NATIVE_VARIANT.to_string()),
            _ => spec.native_type.clone(),
        };

        let mut ctx = Self::new(spec.name.as_str());
        ctx.native_type = native_type;
        ctx.library_type = spec.library_type.clone();
        ctx.default_value = spec.default_value.clone();
        ctx.class_name = spec.class_name.clone();
        ctx.namespace_objects = spec.namespace_objects.clone();
        ctx.namespace_library = spec.namespace_library.clone();
        ctx.tensor_rank = Some(descriptor.dimensionality.tensor_rank());

        match &spec.error_value {
            Some(literal) => ctx.with_error_value(literal.as_str()),
            None => ctx.without_error_value(),
        }
    }

    pub fn with_native_type(mut self, t: impl Into<String>) -> Self {
        self.native_type = Some(t.into());
        self
    }

    pub fn with_library_type(mut self, t: impl Into<String>) -> Self {
        self.library_type = Some(t.into());
        self
    }

    pub fn with_default_value(mut self, v: impl Into<String>) -> Self {
        self.default_value = Some(v.into());
        self
    }

    /// Bind `{errorValue}` to `", <literal>"`.
    pub fn with_error_value(mut self, literal: impl AsRef<str>) -> Self {
        self.error_value = Some(format!(", {}", literal.as_ref()));
        self
    }

    /// Bind `{errorValue}` to the empty string.
    pub fn without_error_value(mut self) -> Self {
        self.error_value = Some(String::new());
        self
    }

    pub fn with_class_name(mut self, c: impl Into<String>) -> Self {
        self.class_name = Some(c.into());
        self
    }

    pub fn with_namespace_objects(mut self, ns: impl Into<String>) -> Self {
        self.namespace_objects = Some(ns.into());
        self
    }

    pub fn with_namespace_library(mut self, ns: impl Into<String>) -> Self {
        self.namespace_library = Some(ns.into());
        self
    }

    pub fn with_tensor_rank(mut self, rank: &'static str) -> Self {
        self.tensor_rank = Some(rank);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value bound to `placeholder`, if any.
    pub fn value(&self, placeholder: Placeholder) -> Option<Cow<'_, str>> {
        fn borrowed(v: &Option<String>) -> Option<Cow<'_, str>> {
            v.as_deref().map(Cow::Borrowed)
        }
        match placeholder {
            Placeholder::Name => Some(Cow::Borrowed(&self.name)),
            Placeholder::NameUpper => Some(Cow::Owned(self.name.to_uppercase())),
            Placeholder::NativeType => borrowed(&self.native_type),
            Placeholder::DefaultValue => borrowed(&self.default_value),
            Placeholder::ErrorValue => borrowed(&self.error_value),
            Placeholder::Type => borrowed(&self.library_type),
            Placeholder::Classname => borrowed(&self.class_name),
            Placeholder::NamespaceObjects => borrowed(&self.namespace_objects),
            Placeholder::NamespaceLibrary => borrowed(&self.namespace_library),
            Placeholder::TensorRank => self.tensor_rank.map(Cow::Borrowed),
        }
    }

    /// Substitute every placeholder in `body` in a single pass.
    ///
    /// Bound values are inserted verbatim and are not rescanned.
    pub fn render(&self, body: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(body.len() + 64);
        for segment in scan(body)? {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => {
                    let value = self.value(p).ok_or_else(|| DomainError::UnboundPlaceholder {
                        placeholder: p.token().to_string(),
                    })?;
                    out.push_str(&value);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_placeholders_in_one_pass() {
        let ctx = BindingContext::new("rate")
            .with_native_type("double")
            .with_default_value("0.05")
            .with_error_value("-1");

        let out = ctx
            .render("{nativeType} {name}Cpp = f({defaultValue}{errorValue}); // {nameUpper}")
            .unwrap();
        assert_eq!(out, "double rateCpp = f(0.05, -1); // RATE");
    }

    #[test]
    fn value_borrows_bound_fields() {
        let ctx = BindingContext::new("curve").with_namespace_library("QuantLib");
        assert!(matches!(
            ctx.value(Placeholder::NamespaceLibrary),
            Some(Cow::Borrowed("QuantLib"))
        ));
        assert_eq!(ctx.value(Placeholder::Type), None);
        assert_eq!(ctx.value(Placeholder::NameUpper).as_deref(), Some("CURVE"));
    }

    #[test]
    fn bound_values_are_not_rescanned() {
        let ctx = BindingContext::new("x").with_default_value("{name}");
        assert_eq!(ctx.render("{defaultValue}").unwrap(), "{name}");
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let ctx = BindingContext::new("rate");
        let err = ctx.render("{nativeType} {name}Cpp").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnboundPlaceholder {
                placeholder: "nativeType".into()
            }
        );
    }

    #[test]
    fn error_value_binds_empty_when_absent() {
        let ctx = BindingContext::new("rate").without_error_value();
        assert_eq!(ctx.render("f(x{errorValue})").unwrap(), "f(x)");
    }

    #[test]
    fn scan_rejects_malformed_bodies() {
        assert!(matches!(
            scan("{name"),
            Err(DomainError::InvalidTemplate(_))
        ));
        assert!(matches!(
            scan("name}"),
            Err(DomainError::InvalidTemplate(_))
        ));
        assert!(matches!(
            scan("{nombre}"),
            Err(DomainError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn scan_splits_literals_and_tokens() {
        let segments = scan("a{name}b{type}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a"),
                Segment::Placeholder(Placeholder::Name),
                Segment::Literal("b"),
                Segment::Placeholder(Placeholder::Type),
            ]
        );
    }

    #[test]
    fn placeholder_tokens_round_trip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_token(p.token()), Some(p));
        }
        assert_eq!(Placeholder::Classname.to_string(), "{classname}");
    }
}
