//! Integration tests for loading definition files.

use formwork::config::{load_definitions_file, Settings};
use formwork::FormConfig;
use std::fs;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("formwork=debug")
        .try_init();
}

#[test]
fn full_definition_workflow() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fields.yml");
    fs::write(
        &path,
        r#"
settings:
  extras:
    disableNgModelAttrsManipulator: true
types:
  - name: input
    template: "<input ng-model=\"model[options.key]\">"
    wrapper: [label, hasError]
    defaultOptions:
      templateOptions:
        type: text
        label: ""
  - name: email
    extends: input
    defaultOptions:
      templateOptions:
        type: email
wrappers:
  - name: label
    template: "<label>{{to.label}}</label><formly-transclude></formly-transclude>"
    types: [input, email]
  - name: hasError
    templateUrl: has-error.html
    types: email
"#,
    )
    .unwrap();

    let mut config = FormConfig::new();
    config.load_file(&path).unwrap();

    assert!(config.extras.disable_ng_model_attrs_manipulator);

    let email = config.get_type("email").unwrap();
    let defaults = email.default_options.as_ref().unwrap().as_static().unwrap();
    assert_eq!(defaults["templateOptions"]["type"], "email");
    assert_eq!(defaults["templateOptions"]["label"], "");
    assert!(email.wrapper.is_some());

    let wrapper_names: Vec<&str> = config
        .get_wrapper_by_type("email")
        .iter()
        .map(|w| w.name.as_str())
        .collect();
    assert_eq!(wrapper_names, vec!["label", "hasError"]);
}

#[test]
fn invalid_type_in_file_stops_registration() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fields.yml");
    fs::write(
        &path,
        r#"
types:
  - name: input
    template: "<input>"
  - name: broken
    extends: nowhere
  - name: never
    template: "<never>"
"#,
    )
    .unwrap();

    let mut config = FormConfig::new();
    let err = config.load_file(&path).unwrap_err();

    assert!(err.to_string().contains("nowhere"));
    assert_eq!(config.types().names(), vec!["input"]);
}

#[test]
fn settings_round_trip_through_facade() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(&path, r#"{"settings": {"disableWarnings": true}}"#).unwrap();

    let file = load_definitions_file(&path).unwrap();
    let mut config = FormConfig::new();
    config.apply(file).unwrap();

    assert_eq!(
        config.settings(),
        Settings {
            disable_warnings: true,
            ..Default::default()
        }
    );
}
