//! Storage and lookup of wrapper templates.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{RegistryError, Result};
use crate::registration::RegistrationContext;

use super::definition::{
    normalize_types, wrapper_name, WrapperDefinition, WrapperOptions, DEFAULT_WRAPPER_NAME,
};

/// Name of the wrapper map in overwrite warnings.
const REGISTRY_NAME: &str = "templateWrappers";

/// Input accepted by [`WrapperRegistry::register`].
#[derive(Debug, Clone)]
pub enum WrapperInput {
    /// Full wrapper options.
    Single(WrapperOptions),
    /// A bare template, named by the fallback name.
    Template(String),
    /// Several inputs, registered in order without the fallback name.
    Many(Vec<WrapperInput>),
}

impl From<WrapperOptions> for WrapperInput {
    fn from(options: WrapperOptions) -> Self {
        Self::Single(options)
    }
}

impl From<String> for WrapperInput {
    fn from(template: String) -> Self {
        Self::Template(template)
    }
}

impl From<&str> for WrapperInput {
    fn from(template: &str) -> Self {
        Self::Template(template.to_string())
    }
}

impl From<Vec<WrapperOptions>> for WrapperInput {
    fn from(options: Vec<WrapperOptions>) -> Self {
        Self::Many(options.into_iter().map(Self::Single).collect())
    }
}

impl From<Vec<WrapperInput>> for WrapperInput {
    fn from(inputs: Vec<WrapperInput>) -> Self {
        Self::Many(inputs)
    }
}

impl TryFrom<Value> for WrapperInput {
    type Error = RegistryError;

    /// Accept a JSON object, a template string, or an array of either.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(template) => Ok(Self::Template(template)),
            Value::Object(_) => serde_json::from_value(value)
                .map(Self::Single)
                .map_err(|e| {
                    RegistryError::config(format!("Invalid wrapper options for setWrapper: {}", e))
                }),
            Value::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Self::Many),
            other => Err(RegistryError::invalid_argument(format!(
                "You must provide an object, string or array for setWrapper. You provided: {}",
                other
            ))),
        }
    }
}

/// What [`WrapperRegistry::register`] stored.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisteredWrapper {
    Single(WrapperDefinition),
    Many(Vec<RegisteredWrapper>),
}

impl RegisteredWrapper {
    /// The stored definition, when a single wrapper was registered.
    pub fn as_single(&self) -> Option<&WrapperDefinition> {
        match self {
            Self::Single(definition) => Some(definition),
            Self::Many(_) => None,
        }
    }

    /// All stored definitions, flattened in registration order.
    pub fn into_definitions(self) -> Vec<WrapperDefinition> {
        match self {
            Self::Single(definition) => vec![definition],
            Self::Many(items) => items
                .into_iter()
                .flat_map(RegisteredWrapper::into_definitions)
                .collect(),
        }
    }
}

/// Registry of wrappers keyed by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct WrapperRegistry {
    wrappers: IndexMap<String, WrapperDefinition>,
}

impl WrapperRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register wrappers.
    ///
    /// `fallback_name` names a wrapper whose options carry no name. It is
    /// not passed on to the elements of a list.
    pub fn register(
        &mut self,
        input: impl Into<WrapperInput>,
        fallback_name: Option<&str>,
        ctx: &RegistrationContext<'_>,
    ) -> Result<RegisteredWrapper> {
        match input.into() {
            WrapperInput::Many(inputs) => inputs
                .into_iter()
                .map(|input| self.register(input, None, ctx))
                .collect::<Result<Vec<_>>>()
                .map(RegisteredWrapper::Many),
            WrapperInput::Template(template) => {
                let mut options = WrapperOptions::from_template(template);
                options.name = fallback_name.map(str::to_string);
                self.register_options(options, fallback_name, ctx)
                    .map(RegisteredWrapper::Single)
            }
            WrapperInput::Single(options) => self
                .register_options(options, fallback_name, ctx)
                .map(RegisteredWrapper::Single),
        }
    }

    fn register_options(
        &mut self,
        mut options: WrapperOptions,
        fallback_name: Option<&str>,
        ctx: &RegistrationContext<'_>,
    ) -> Result<WrapperDefinition> {
        let types = normalize_types(options.types.as_ref())?;
        let name = wrapper_name(options.name.as_deref(), fallback_name, &types);
        options.name = Some(name.clone());
        options.types = Some(Value::from(types.clone()));
        let overwrite_ok = std::mem::take(&mut options.overwrite_ok);

        ctx.usability.check_wrapper(&options)?;
        options.template = options.template.filter(|template| !template.is_empty());
        options.template_url = options.template_url.filter(|url| !url.is_empty());
        if let Some(template) = &options.template {
            ctx.usability.check_wrapper_template(template, &options)?;
        }

        let definition = WrapperDefinition {
            name: name.clone(),
            template: options.template,
            template_url: options.template_url,
            types,
            data: options.data,
        };

        if !overwrite_ok {
            ctx.check_overwrite(&name, self.wrappers.get(&name), &definition, REGISTRY_NAME);
        }

        tracing::debug!("Registered wrapper '{}' for types {:?}", name, definition.types);
        self.wrappers.insert(name, definition.clone());
        Ok(definition)
    }

    /// Look up a wrapper by name; an empty name means the default wrapper.
    pub fn get_by_name(&self, name: &str) -> Option<&WrapperDefinition> {
        let name = if name.is_empty() {
            DEFAULT_WRAPPER_NAME
        } else {
            name
        };
        self.wrappers.get(name)
    }

    /// Every wrapper that decorates `type_name`, in registration order.
    pub fn get_by_type(&self, type_name: &str) -> Vec<&WrapperDefinition> {
        self.wrappers
            .values()
            .filter(|wrapper| wrapper.applies_to(type_name))
            .collect()
    }

    /// Remove and return the wrapper named `name`.
    pub fn remove_by_name(&mut self, name: &str) -> Option<WrapperDefinition> {
        let removed = self.wrappers.shift_remove(name);
        if removed.is_some() {
            tracing::debug!("Removed wrapper '{}'", name);
        }
        removed
    }

    /// Remove every wrapper that decorates `type_name`.
    ///
    /// Returns `None` when nothing matched, otherwise the removed wrappers
    /// in registration order.
    pub fn remove_for_type(&mut self, type_name: &str) -> Option<Vec<WrapperDefinition>> {
        let names: Vec<String> = self
            .get_by_type(type_name)
            .into_iter()
            .map(|wrapper| wrapper.name.clone())
            .collect();

        if names.is_empty() {
            return None;
        }

        Some(
            names
                .iter()
                .filter_map(|name| self.remove_by_name(name))
                .collect(),
        )
    }

    /// Registered wrapper names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.wrappers.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    pub fn clear(&mut self) {
        self.wrappers.clear();
    }
}
