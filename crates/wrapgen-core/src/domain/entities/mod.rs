pub mod binding;
pub mod descriptor;
pub mod generated;
pub mod spec;
pub mod template;

pub use crate::domain::DomainError;
pub use binding::{BindingContext, Placeholder};
pub use descriptor::TypeDescriptor;
pub use generated::{AccessorBodies, GeneratedFunctionBody};
pub use spec::{FunctionSpec, ParameterSpec, ReturnSpec, ValueObjectSpec};
pub use template::{TemplateEntry, TemplateRegistry};
