//! The public configuration object.
//!
//! [`FormConfig`] owns a type registry, a wrapper registry and the global
//! flags a rendering runtime reads. One instance is built per configuration
//! scope and dropped (or [`reset`](FormConfig::reset)) when that scope ends.

use std::fmt;
use std::path::Path;

use crate::config::loader::load_definitions_file;
use crate::config::schema::{DefinitionFile, Extras, Settings};
use crate::error::Result;
use crate::logging::{Logger, TracingLogger, Warnings};
use crate::manipulators::TemplateManipulators;
use crate::registration::RegistrationContext;
use crate::types::{TypeDefinition, TypeInput, TypeRegistry};
use crate::validation::{DefaultUsability, Usability};
use crate::wrappers::{RegisteredWrapper, WrapperDefinition, WrapperInput, WrapperRegistry};

/// Field type and wrapper configuration for a form runtime.
pub struct FormConfig {
    types: TypeRegistry,
    wrappers: WrapperRegistry,
    logger: Box<dyn Logger>,
    usability: Box<dyn Usability>,

    /// Suppress overwrite warnings
    pub disable_warnings: bool,

    /// Flags passed through to the rendering runtime
    pub extras: Extras,

    /// Template hooks run around wrapper application
    pub template_manipulators: TemplateManipulators,
}

impl FormConfig {
    /// Create an empty configuration that logs through `tracing`.
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(TracingLogger), Box::new(DefaultUsability))
    }

    /// Create an empty configuration with a custom logger.
    pub fn with_logger(logger: impl Logger + 'static) -> Self {
        Self::with_collaborators(Box::new(logger), Box::new(DefaultUsability))
    }

    /// Create an empty configuration with custom collaborators.
    pub fn with_collaborators(logger: Box<dyn Logger>, usability: Box<dyn Usability>) -> Self {
        Self {
            types: TypeRegistry::new(),
            wrappers: WrapperRegistry::new(),
            logger,
            usability,
            disable_warnings: false,
            extras: Extras::default(),
            template_manipulators: TemplateManipulators::default(),
        }
    }

    /// Create a configuration with `settings` applied.
    pub fn with_settings(settings: Settings) -> Self {
        let mut config = Self::new();
        config.apply_settings(settings);
        config
    }

    /// Overwrite the global flags from `settings`.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.disable_warnings = settings.disable_warnings;
        self.extras = settings.extras;
    }

    /// Current global flags.
    pub fn settings(&self) -> Settings {
        Settings {
            disable_warnings: self.disable_warnings,
            extras: self.extras.clone(),
        }
    }

    /// Register one or more field types.
    pub fn set_type(&mut self, input: impl Into<TypeInput>) -> Result<()> {
        let ctx = RegistrationContext::new(
            self.usability.as_ref(),
            Warnings::new(self.logger.as_ref(), self.disable_warnings),
        );
        self.types.register(input, &ctx)
    }

    /// Look up a resolved field type.
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Look up a field type, optionally failing when it is missing.
    ///
    /// See [`TypeRegistry::resolve`].
    pub fn resolve_type(
        &self,
        name: &str,
        throw_if_missing: bool,
        error_context: &str,
    ) -> Result<Option<&TypeDefinition>> {
        self.types.resolve(name, throw_if_missing, error_context)
    }

    /// Register one or more wrappers.
    ///
    /// `name` names a bare template or unnamed options.
    pub fn set_wrapper(
        &mut self,
        input: impl Into<WrapperInput>,
        name: Option<&str>,
    ) -> Result<RegisteredWrapper> {
        let ctx = RegistrationContext::new(
            self.usability.as_ref(),
            Warnings::new(self.logger.as_ref(), self.disable_warnings),
        );
        self.wrappers.register(input, name, &ctx)
    }

    /// Look up a wrapper; an empty name means the default wrapper.
    pub fn get_wrapper(&self, name: &str) -> Option<&WrapperDefinition> {
        self.wrappers.get_by_name(name)
    }

    /// Every wrapper that decorates `type_name`, in registration order.
    pub fn get_wrapper_by_type(&self, type_name: &str) -> Vec<&WrapperDefinition> {
        self.wrappers.get_by_type(type_name)
    }

    /// Remove and return the wrapper named `name`.
    pub fn remove_wrapper_by_name(&mut self, name: &str) -> Option<WrapperDefinition> {
        self.wrappers.remove_by_name(name)
    }

    /// Remove every wrapper that decorates `type_name`.
    pub fn remove_wrappers_for_type(&mut self, type_name: &str) -> Option<Vec<WrapperDefinition>> {
        self.wrappers.remove_for_type(type_name)
    }

    /// Apply a definition file: settings first, then types, then wrappers.
    pub fn apply(&mut self, file: DefinitionFile) -> Result<()> {
        if let Some(settings) = file.settings {
            self.apply_settings(settings);
        }
        self.set_type(file.types)?;
        for options in file.wrappers {
            self.set_wrapper(options, None)?;
        }
        Ok(())
    }

    /// Load and apply a definition file from disk.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let file = load_definitions_file(path)?;
        tracing::debug!("Applying definitions from {}", path.display());
        self.apply(file)
    }

    /// Drop every registration and restore default flags.
    ///
    /// The logger and validator are kept.
    pub fn reset(&mut self) {
        self.types.clear();
        self.wrappers.clear();
        self.disable_warnings = false;
        self.extras = Extras::default();
        self.template_manipulators = TemplateManipulators::default();
    }

    /// The type registry.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// The wrapper registry.
    pub fn wrappers(&self) -> &WrapperRegistry {
        &self.wrappers
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormConfig")
            .field("types", &self.types.names())
            .field("wrappers", &self.wrappers.names())
            .field("disable_warnings", &self.disable_warnings)
            .field("extras", &self.extras)
            .field("template_manipulators", &self.template_manipulators)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MockLogger;
    use crate::types::DefaultOptions;
    use crate::wrappers::WrapperOptions;
    use serde_json::json;

    fn config_with_logger() -> (FormConfig, MockLogger) {
        let logger = MockLogger::new();
        (FormConfig::with_logger(logger.clone()), logger)
    }

    #[test]
    fn defaults_are_off() {
        let config = FormConfig::new();
        assert!(!config.disable_warnings);
        assert!(!config.extras.disable_ng_model_attrs_manipulator);
        assert!(config.template_manipulators.pre_wrapper.is_empty());
        assert!(config.template_manipulators.post_wrapper.is_empty());
    }

    #[test]
    fn disable_warnings_suppresses_overwrite_warning() {
        let (mut config, logger) = config_with_logger();
        config.disable_warnings = true;

        config
            .set_type(TypeDefinition::new("input").with_template("<a>"))
            .unwrap();
        config
            .set_type(TypeDefinition::new("input").with_template("<b>"))
            .unwrap();

        assert_eq!(logger.warning_count(), 0);
        assert_eq!(
            config.get_type("input").unwrap().template.as_deref(),
            Some("<b>")
        );
    }

    #[test]
    fn flag_is_read_at_call_time() {
        let (mut config, logger) = config_with_logger();
        config.set_wrapper("<div></div>", Some("a")).unwrap();

        config.disable_warnings = true;
        config.set_wrapper("<div></div>", Some("a")).unwrap();
        assert_eq!(logger.warning_count(), 0);

        config.disable_warnings = false;
        config.set_wrapper("<div></div>", Some("a")).unwrap();
        assert_eq!(logger.warning_count(), 1);
    }

    #[test]
    fn apply_registers_file_contents() {
        let (mut config, _logger) = config_with_logger();
        let file: DefinitionFile = serde_yaml::from_str(
            r#"
settings:
  disableWarnings: true
types:
  - name: input
    template: "<input>"
  - name: email
    extends: input
wrappers:
  - template: "<label></label>"
    types: email
"#,
        )
        .unwrap();

        config.apply(file).unwrap();

        assert!(config.disable_warnings);
        assert_eq!(config.types().names(), vec!["input", "email"]);
        assert_eq!(config.get_wrapper_by_type("email")[0].name, "email");
    }

    #[test]
    fn reset_clears_registrations_and_flags() {
        let (mut config, _logger) = config_with_logger();
        config
            .set_type(
                TypeDefinition::new("input").with_default_options(DefaultOptions::computed(
                    |ctx| ctx.clone(),
                )),
            )
            .unwrap();
        config
            .set_wrapper(WrapperOptions::from_template("<div></div>"), None)
            .unwrap();
        config.disable_warnings = true;
        config.extras.disable_ng_model_attrs_manipulator = true;

        config.reset();

        assert!(config.types().is_empty());
        assert!(config.wrappers().is_empty());
        assert_eq!(config.settings(), Settings::default());
    }

    #[test]
    fn with_settings_applies_flags() {
        let config = FormConfig::with_settings(Settings {
            disable_warnings: true,
            extras: Extras {
                disable_ng_model_attrs_manipulator: true,
            },
        });
        assert!(config.disable_warnings);
        assert!(config.extras.disable_ng_model_attrs_manipulator);
    }

    #[test]
    fn resolve_type_reports_context() {
        let config = FormConfig::new();
        let err = config
            .resolve_type("missing", true, &json!({"key": "email"}).to_string())
            .unwrap_err();
        assert!(err.to_string().contains(r#"{"key":"email"}"#));
    }
}
