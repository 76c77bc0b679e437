//! Configuration support for the registry.
//!
//! - Reverse and overlay deep merges in [`merger`]
//! - Settings and definition file schema in [`schema`]
//! - Definition file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use formwork::config::reverse_deep_merge;
//! use serde_json::json;
//!
//! let mut target = json!({"a": 1});
//! reverse_deep_merge(&mut target, [&json!({"a": 2, "b": 3})]);
//! assert_eq!(target, json!({"a": 1, "b": 3}));
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_definitions_file, parse_definitions};
pub use merger::{deep_merge, reverse_deep_merge};
pub use schema::{DefinitionFile, Extras, Settings};
