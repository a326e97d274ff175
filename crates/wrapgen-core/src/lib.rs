//! wrapgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for wrapgen, a
//! generator of glue code that exposes a numerical library through several
//! backends (spreadsheet add-ins, scripting hosts, serialization, value
//! objects and a native client).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           wrapgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (WrapperComposer, AccessorComposer)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TemplateStore, Renderer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wrapgen-adapters (Infrastructure)    │
//! │ (GlobalStore, PlaceholderRenderer, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TypeDescriptor, TemplateRegistry, ...) │
//! │         No I/O, no globals              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wrapgen_core::{
//!     application::WrapperComposer,
//!     domain::{Backend, FunctionSpec, ParameterSpec, ReturnSpec},
//! };
//! # use wrapgen_core::application::ports::*;
//! # fn adapters() -> (Box<dyn TemplateStore>, Box<dyn FragmentRenderer>) { unimplemented!() }
//!
//! // 1. Describe the function
//! let function = FunctionSpec::new("qlRate", "QuantLib::rate(rateCpp)")
//!     .parameter(ParameterSpec::primitive("rate", "double"))
//!     .returns(ReturnSpec::primitive("double"));
//!
//! // 2. Compose with injected adapters
//! let (store, renderer) = adapters();
//! let composer = WrapperComposer::new(store, renderer);
//! let body = composer.compose(&function, Backend::SpreadsheetFormula).unwrap();
//! println!("{body}");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AccessorComposer, WrapperComposer,
        ports::{FragmentRenderer, TemplateStore},
    };
    pub use crate::domain::{
        AccessorBodies, Backend, BindingContext, Coercion, Dimensionality, FunctionSpec,
        GeneratedFunctionBody, ParameterSpec, ReturnSpec, SemanticKind, Stage, TemplateEntry,
        TemplateRegistry, TypeDescriptor, ValueObjectSpec,
    };
    pub use crate::error::{WrapgenError, WrapgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
