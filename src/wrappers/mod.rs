//! Wrapper templates and their association with field types.
//!
//! A wrapper surrounds a field's rendered template (a label, an error
//! container). Each wrapper lists the types it decorates; the type-to-wrapper
//! relation is derived by scanning the registry, never stored separately.

pub mod definition;
pub mod registry;

pub use definition::{
    normalize_types, wrapper_name, WrapperDefinition, WrapperOptions, ALLOWED_WRAPPER_PROPERTIES,
    DEFAULT_WRAPPER_NAME,
};
pub use registry::{RegisteredWrapper, WrapperInput, WrapperRegistry};
