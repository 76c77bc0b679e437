//! Formwork - field type and wrapper registry for dynamic forms.
//!
//! A form runtime asks Formwork how to draw each kind of field: which
//! template to use, which controller and link logic to run, which default
//! options to apply and which wrappers surround it. Types may extend one
//! another; inheritance is composed once, at registration.
//!
//! # Modules
//!
//! - [`config`] - Reverse deep merge, settings and definition files
//! - [`error`] - Error types and result aliases
//! - [`facade`] - The [`FormConfig`] object handed to consumers
//! - [`logging`] - Warning output
//! - [`manipulators`] - Template manipulator hooks
//! - [`registration`] - Collaborators shared by the registries
//! - [`types`] - Field type definitions and inheritance
//! - [`validation`] - Schema checks delegated by the registries
//! - [`wrappers`] - Wrapper templates and their type associations
//!
//! # Example
//!
//! ```
//! use formwork::types::{DefaultOptions, TypeDefinition};
//! use formwork::wrappers::WrapperOptions;
//! use formwork::FormConfig;
//! use serde_json::json;
//!
//! let mut config = FormConfig::new();
//! config
//!     .set_type(
//!         TypeDefinition::new("input")
//!             .with_template("<input ng-model=\"model[options.key]\">")
//!             .with_default_options(json!({"templateOptions": {"type": "text"}})),
//!     )
//!     .unwrap();
//! config
//!     .set_type(
//!         TypeDefinition::new("email")
//!             .with_extends("input")
//!             .with_default_options(DefaultOptions::computed(|options| {
//!                 json!({"templateOptions": {"type": "email"}, "seen": options.clone()})
//!             })),
//!     )
//!     .unwrap();
//! config
//!     .set_wrapper(
//!         WrapperOptions::from_template("<label></label><formly-transclude></formly-transclude>")
//!             .with_types(["input", "email"]),
//!         Some("label"),
//!     )
//!     .unwrap();
//!
//! let email = config.get_type("email").unwrap();
//! assert_eq!(email.template, config.get_type("input").unwrap().template);
//! assert_eq!(config.get_wrapper_by_type("email")[0].name, "label");
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod logging;
pub mod manipulators;
pub mod registration;
pub mod types;
pub mod validation;
pub mod wrappers;

pub use error::{RegistryError, Result};
pub use facade::FormConfig;
