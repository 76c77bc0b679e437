//! Field type definitions and their registry.
//!
//! - Definitions and behaviour handles in [`definition`]
//! - Inheritance composition in [`extends`]
//! - Storage and validation in [`registry`]
//!
//! # Example
//!
//! ```
//! use formwork::logging::{MockLogger, Warnings};
//! use formwork::registration::RegistrationContext;
//! use formwork::types::{TypeDefinition, TypeRegistry};
//! use formwork::validation::DefaultUsability;
//!
//! let logger = MockLogger::new();
//! let ctx = RegistrationContext::new(&DefaultUsability, Warnings::new(&logger, false));
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register(TypeDefinition::new("input").with_template("<input>"), &ctx)
//!     .unwrap();
//! registry
//!     .register(TypeDefinition::new("email").with_extends("input"), &ctx)
//!     .unwrap();
//!
//! let email = registry.get("email").unwrap();
//! assert_eq!(email.template.as_deref(), Some("<input>"));
//! ```

pub mod definition;
pub mod extends;
pub mod registry;

pub use definition::{
    Controller, DefaultOptions, Link, TypeDefinition, WrapperRef, ALLOWED_TYPE_PROPERTIES,
};
pub use extends::extend_type;
pub use registry::{TypeInput, TypeRegistry};
