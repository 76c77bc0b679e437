//! Collaborators shared by the type and wrapper registries.

use serde::Serialize;

use crate::logging::Warnings;
use crate::validation::Usability;

/// What a registry needs from its owner while registering.
#[derive(Clone, Copy)]
pub struct RegistrationContext<'a> {
    pub usability: &'a dyn Usability,
    pub warnings: Warnings<'a>,
}

impl<'a> RegistrationContext<'a> {
    pub fn new(usability: &'a dyn Usability, warnings: Warnings<'a>) -> Self {
        Self {
            usability,
            warnings,
        }
    }

    /// Warn when `name` is already present in `registry`.
    ///
    /// `existing` is the current entry for `name`, if any.
    pub fn check_overwrite<T: Serialize>(
        &self,
        name: &str,
        existing: Option<&T>,
        replacement: &T,
        registry: &str,
    ) {
        let Some(existing) = existing else {
            return;
        };
        self.warnings
            .warn(&overwrite_message(name, existing, replacement, registry));
    }
}

/// Text of the warning emitted when an entry is replaced.
pub fn overwrite_message<T: Serialize>(
    name: &str,
    existing: &T,
    replacement: &T,
    registry: &str,
) -> String {
    [
        format!("Attempting to overwrite {name} on {registry} which is currently"),
        format!(
            "{} with {}",
            serde_json::to_string(existing).unwrap_or_default(),
            serde_json::to_string(replacement).unwrap_or_default()
        ),
        "To suppress this warning, specify the property \"overwriteOk: true\"".to_string(),
    ]
    .join(" ")
}
