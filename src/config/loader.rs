//! Definition file loading.
//!
//! Files are parsed as YAML, which also accepts JSON documents.

use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::config::schema::DefinitionFile;
use crate::error::{RegistryError, Result};

/// Load a definition file from disk.
pub fn load_definitions_file(path: &Path) -> Result<DefinitionFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definitions from {}", path.display()))?;

    parse_definitions(&content, path)
}

/// Parse YAML or JSON content into a [`DefinitionFile`].
///
/// # Arguments
///
/// * `content` - The document to parse
/// * `source_path` - Path for error reporting
pub fn parse_definitions(content: &str, source_path: &Path) -> Result<DefinitionFile> {
    serde_yaml::from_str(content).map_err(|e| RegistryError::ParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
