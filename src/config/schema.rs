//! Declarative definition file schema.
//!
//! A definition file carries facade settings plus the types and wrappers
//! to register, so a form library can ship its field catalogue as YAML or
//! JSON instead of code.

use serde::{Deserialize, Serialize};

use crate::types::TypeDefinition;
use crate::wrappers::WrapperOptions;

/// Root structure of a definition file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefinitionFile {
    /// Facade flags to apply before registering anything
    pub settings: Option<Settings>,

    /// Field types, registered in document order
    pub types: Vec<TypeDefinition>,

    /// Wrappers, registered in document order
    pub wrappers: Vec<WrapperOptions>,
}

/// Global facade flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Suppress overwrite warnings
    pub disable_warnings: bool,

    /// Flags passed through to the rendering runtime
    pub extras: Extras,
}

/// Pass-through flags for the rendering runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extras {
    /// Skip the runtime's ng-model attribute manipulator
    pub disable_ng_model_attrs_manipulator: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_false() {
        let settings = Settings::default();
        assert!(!settings.disable_warnings);
        assert!(!settings.extras.disable_ng_model_attrs_manipulator);
    }

    #[test]
    fn settings_parse_camel_case() {
        let settings: Settings = serde_yaml::from_str(
            r#"
disableWarnings: true
extras:
  disableNgModelAttrsManipulator: true
"#,
        )
        .unwrap();
        assert!(settings.disable_warnings);
        assert!(settings.extras.disable_ng_model_attrs_manipulator);
    }

    #[test]
    fn definition_file_parses_types_and_wrappers() {
        let file: DefinitionFile = serde_yaml::from_str(
            r#"
types:
  - name: input
    template: "<input ng-model=\"model[options.key]\">"
    defaultOptions:
      templateOptions:
        type: text
  - name: email
    extends: input
wrappers:
  - name: label
    template: "<label>{{to.label}}</label><formly-transclude></formly-transclude>"
    types: [input, email]
"#,
        )
        .unwrap();

        assert!(file.settings.is_none());
        assert_eq!(file.types.len(), 2);
        assert_eq!(file.types[1].parent(), Some("input"));
        assert_eq!(
            file.types[0]
                .default_options
                .as_ref()
                .unwrap()
                .as_static()
                .unwrap()["templateOptions"]["type"],
            "text"
        );
        assert_eq!(file.wrappers[0].name.as_deref(), Some("label"));
    }

    #[test]
    fn empty_document_sections_default() {
        let file: DefinitionFile = serde_yaml::from_str("settings: {}").unwrap();
        assert_eq!(file.settings, Some(Settings::default()));
        assert!(file.types.is_empty());
        assert!(file.wrappers.is_empty());
    }
}
