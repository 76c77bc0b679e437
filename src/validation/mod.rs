//! Schema checks delegated by the registries.
//!
//! Registries own the structural rules (names, template exclusivity,
//! wrapper types). Property whitelists and wrapper shape checks go through
//! the [`Usability`] trait so an embedding framework can swap in its own
//! rules and messages.

use crate::error::{RegistryError, Result};
use crate::wrappers::definition::{WrapperOptions, ALLOWED_WRAPPER_PROPERTIES};

/// Validation collaborator used during registration.
pub trait Usability: Send + Sync {
    /// Fail if any of `keys` is not in `allowed`.
    ///
    /// `context` describes the object being checked and is included in
    /// the error message.
    fn check_allowed_properties(&self, allowed: &[&str], keys: &[&str], context: &str)
        -> Result<()>;

    /// Check the overall shape of wrapper options.
    fn check_wrapper(&self, options: &WrapperOptions) -> Result<()>;

    /// Check an inline wrapper template.
    fn check_wrapper_template(&self, template: &str, options: &WrapperOptions) -> Result<()>;
}

/// Built-in validation rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUsability;

impl Usability for DefaultUsability {
    fn check_allowed_properties(
        &self,
        allowed: &[&str],
        keys: &[&str],
        context: &str,
    ) -> Result<()> {
        let invalid: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| !allowed.contains(key))
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }

        Err(RegistryError::config(format!(
            "Invalid properties: {} on {}. Allowed properties are: {}",
            invalid.join(", "),
            context,
            allowed.join(", ")
        )))
    }

    fn check_wrapper(&self, options: &WrapperOptions) -> Result<()> {
        let has_template = options
            .template
            .as_deref()
            .is_some_and(|template| !template.is_empty());
        let has_template_url = options
            .template_url
            .as_deref()
            .is_some_and(|url| !url.is_empty());

        match (has_template, has_template_url) {
            (true, true) => {
                return Err(RegistryError::config(format!(
                    "Wrapper \"{}\" must provide a template OR templateUrl, not both",
                    options.display_name()
                )))
            }
            (false, false) => {
                return Err(RegistryError::config(format!(
                    "Wrapper \"{}\" must provide a template or templateUrl",
                    options.display_name()
                )))
            }
            _ => {}
        }

        let keys = options.keys();
        self.check_allowed_properties(
            &ALLOWED_WRAPPER_PROPERTIES,
            &keys,
            &format!("wrapper \"{}\"", options.display_name()),
        )
    }

    fn check_wrapper_template(&self, template: &str, options: &WrapperOptions) -> Result<()> {
        if template.trim().is_empty() {
            return Err(RegistryError::config(format!(
                "Wrapper \"{}\" has an empty template",
                options.display_name()
            )));
        }
        Ok(())
    }
}
