//! Wrapper options as supplied by callers, and wrappers as stored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RegistryError, Result};

/// Name used for a wrapper registered without a name or types.
pub const DEFAULT_WRAPPER_NAME: &str = "default";

/// Properties wrapper options may declare.
pub const ALLOWED_WRAPPER_PROPERTIES: [&str; 6] = [
    "name",
    "template",
    "templateUrl",
    "types",
    "data",
    "overwriteOk",
];

/// Wrapper options before normalization.
///
/// `types` is kept as raw JSON so a single string, a list, or a malformed
/// value can all be accepted here and judged at registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,

    /// Type names this wrapper decorates: a string or a list of strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default)]
    pub overwrite_ok: bool,

    /// Unrecognised keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WrapperOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Options with only an inline template.
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_template_url(mut self, url: impl Into<String>) -> Self {
        self.template_url = Some(url.into());
        self
    }

    /// Decorate a single type.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.types = Some(Value::String(type_name.into()));
        self
    }

    /// Decorate each of `types`, in order.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(Value::Array(
            types.into_iter().map(|t| Value::String(t.into())).collect(),
        ));
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_overwrite_ok(mut self) -> Self {
        self.overwrite_ok = true;
        self
    }

    /// Name for messages.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_WRAPPER_NAME)
    }

    /// Top-level property names these options set.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        if self.name.is_some() {
            keys.push("name");
        }
        if self.template.is_some() {
            keys.push("template");
        }
        if self.template_url.is_some() {
            keys.push("templateUrl");
        }
        if self.types.is_some() {
            keys.push("types");
        }
        if self.data.is_some() {
            keys.push("data");
        }
        if self.overwrite_ok {
            keys.push("overwriteOk");
        }
        keys.extend(self.extra.keys().map(|k| k.as_str()));
        keys
    }
}

/// A registered wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperDefinition {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,

    /// Type names this wrapper decorates, in declaration order
    pub types: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl WrapperDefinition {
    /// Whether this wrapper decorates `type_name`.
    pub fn applies_to(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }
}

/// Promote a raw `types` value to an ordered list of type names.
///
/// A string becomes a one-element list and a missing value an empty one.
/// Anything that is not a list of strings is rejected.
pub fn normalize_types(types: Option<&Value>) -> Result<Vec<String>> {
    match types {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(single)) => Ok(vec![single.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid_types))
            .collect(),
        Some(_) => Err(invalid_types()),
    }
}

fn invalid_types() -> RegistryError {
    RegistryError::config(
        "Attempted to create a template wrapper with types that is not a string or an array of strings",
    )
}

/// Pick the wrapper name: explicit name, then the fallback, then the joined
/// types, then [`DEFAULT_WRAPPER_NAME`].
pub fn wrapper_name(explicit: Option<&str>, fallback: Option<&str>, types: &[String]) -> String {
    explicit
        .filter(|name| !name.is_empty())
        .or(fallback.filter(|name| !name.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| {
            let joined = types.join(" ");
            if joined.is_empty() {
                DEFAULT_WRAPPER_NAME.to_string()
            } else {
                joined
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_types_become_single_element() {
        let types = normalize_types(Some(&json!("input"))).unwrap();
        assert_eq!(types, vec!["input"]);
    }

    #[test]
    fn missing_types_become_empty() {
        assert!(normalize_types(None).unwrap().is_empty());
    }

    #[test]
    fn list_types_pass_through_in_order() {
        let types = normalize_types(Some(&json!(["select", "input"]))).unwrap();
        assert_eq!(types, vec!["select", "input"]);
    }

    #[test]
    fn non_string_entries_are_rejected() {
        let err = normalize_types(Some(&json!(["input", 3]))).unwrap_err();
        assert!(matches!(err, RegistryError::ConfigError { .. }));
    }

    #[test]
    fn scalar_types_are_rejected() {
        assert!(normalize_types(Some(&json!(true))).is_err());
        assert!(normalize_types(Some(&json!({"type": "input"}))).is_err());
    }

    #[test]
    fn name_prefers_explicit_then_fallback() {
        let types = vec!["input".to_string()];
        assert_eq!(wrapper_name(Some("label"), Some("other"), &types), "label");
        assert_eq!(wrapper_name(None, Some("other"), &types), "other");
        assert_eq!(wrapper_name(Some(""), Some("other"), &types), "other");
    }

    #[test]
    fn name_falls_back_to_joined_types_then_default() {
        let types = vec!["input".to_string(), "select".to_string()];
        assert_eq!(wrapper_name(None, None, &types), "input select");
        assert_eq!(wrapper_name(None, None, &[]), DEFAULT_WRAPPER_NAME);
    }

    #[test]
    fn options_deserialize_with_unknown_keys() {
        let options: WrapperOptions = serde_json::from_value(json!({
            "template": "<div><formly-transclude></formly-transclude></div>",
            "types": "input",
            "apiCheck": {}
        }))
        .unwrap();

        assert_eq!(options.types, Some(json!("input")));
        assert_eq!(options.keys(), vec!["template", "types", "apiCheck"]);
    }

    #[test]
    fn applies_to_matches_listed_types() {
        let wrapper = WrapperDefinition {
            name: "label".into(),
            template: Some("<label></label>".into()),
            template_url: None,
            types: vec!["input".into(), "select".into()],
            data: None,
        };
        assert!(wrapper.applies_to("select"));
        assert!(!wrapper.applies_to("checkbox"));
    }
}
