//! Storage and registration of field types.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{RegistryError, Result};
use crate::registration::RegistrationContext;

use super::definition::{present, TypeDefinition, ALLOWED_TYPE_PROPERTIES};
use super::extends::extend_type;

/// Name of the type map in overwrite warnings.
const REGISTRY_NAME: &str = "types";

/// Allowed properties that only closures can fill.
const BEHAVIOUR_KEYS: [&str; 2] = ["controller", "link"];

/// Input accepted by [`TypeRegistry::register`].
#[derive(Debug, Clone)]
pub enum TypeInput {
    /// One definition.
    Single(TypeDefinition),
    /// Several definitions, registered in order.
    Many(Vec<TypeDefinition>),
}

impl From<TypeDefinition> for TypeInput {
    fn from(definition: TypeDefinition) -> Self {
        Self::Single(definition)
    }
}

impl From<Vec<TypeDefinition>> for TypeInput {
    fn from(definitions: Vec<TypeDefinition>) -> Self {
        Self::Many(definitions)
    }
}

impl TryFrom<Value> for TypeInput {
    type Error = RegistryError;

    /// Accept a JSON object or an array of objects.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => parse_definition(value).map(Self::Single),
            Value::Array(items) => {
                if !items.iter().all(Value::is_object) {
                    return Err(invalid_input(&Value::Array(items)));
                }
                items
                    .into_iter()
                    .map(parse_definition)
                    .collect::<Result<Vec<_>>>()
                    .map(Self::Many)
            }
            other => Err(invalid_input(&other)),
        }
    }
}

fn parse_definition(value: Value) -> Result<TypeDefinition> {
    serde_json::from_value(value).map_err(|e| {
        RegistryError::config(format!("Invalid type definition for setType: {}", e))
    })
}

fn invalid_input(value: &Value) -> RegistryError {
    RegistryError::invalid_argument(format!(
        "You must provide an object or array for setType. You provided: {}",
        value
    ))
}

/// Registry of field types keyed by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDefinition>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one or more definitions.
    ///
    /// A list is processed in order and stops at the first failure;
    /// definitions registered before it stay registered.
    pub fn register(
        &mut self,
        input: impl Into<TypeInput>,
        ctx: &RegistrationContext<'_>,
    ) -> Result<()> {
        match input.into() {
            TypeInput::Single(definition) => self.register_one(definition, ctx),
            TypeInput::Many(definitions) => {
                for definition in definitions {
                    self.register_one(definition, ctx)?;
                }
                Ok(())
            }
        }
    }

    fn register_one(
        &mut self,
        mut definition: TypeDefinition,
        ctx: &RegistrationContext<'_>,
    ) -> Result<()> {
        let overwrite_ok = std::mem::take(&mut definition.overwrite_ok);
        let name = check_type(&definition, ctx)?;

        if let Some(parent_name) = definition.parent().map(str::to_string) {
            let context = definition.to_json();
            let parent = self
                .resolve(&parent_name, true, &context)?
                .ok_or_else(|| RegistryError::not_found(&parent_name, context.clone()))?;
            extend_type(&mut definition, parent);
            tracing::debug!("Type '{}' extends '{}'", name, parent_name);
        }

        if !overwrite_ok {
            ctx.check_overwrite(&name, self.types.get(&name), &definition, REGISTRY_NAME);
        }

        tracing::debug!("Registered type '{}'", name);
        self.types.insert(name, definition);
        Ok(())
    }

    /// Look up a resolved type.
    ///
    /// An empty `name` yields `Ok(None)`. A missing type yields `Ok(None)`,
    /// or [`RegistryError::NotFound`] carrying `error_context` when
    /// `throw_if_missing` is set.
    pub fn resolve(
        &self,
        name: &str,
        throw_if_missing: bool,
        error_context: &str,
    ) -> Result<Option<&TypeDefinition>> {
        if name.is_empty() {
            return Ok(None);
        }
        match self.types.get(name) {
            Some(definition) => Ok(Some(definition)),
            None if throw_if_missing => Err(RegistryError::not_found(name, error_context)),
            None => Ok(None),
        }
    }

    /// Look up a resolved type without failing.
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.types.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }
}

/// Validate a definition and return its name.
fn check_type(definition: &TypeDefinition, ctx: &RegistrationContext<'_>) -> Result<String> {
    let description = definition.to_json();

    let Some(name) = definition.name() else {
        return Err(RegistryError::config(format!(
            "You must provide a name for setType. You provided: {}",
            description
        )));
    };

    let has_template = present(&definition.template).is_some();
    let has_template_url = present(&definition.template_url).is_some();

    if definition.default_options.is_none()
        && !has_template
        && !has_template_url
        && definition.parent().is_none()
    {
        return Err(RegistryError::config(format!(
            "You must provide defaultOptions, extends OR a template OR templateUrl for setType. \
             You provided none of these: {}",
            description
        )));
    }

    if has_template && has_template_url {
        return Err(RegistryError::config(format!(
            "You must provide at most a template OR templateUrl for setType. \
             You provided both: {}",
            description
        )));
    }

    if let Some(key) = BEHAVIOUR_KEYS
        .iter()
        .find(|key| definition.extra.contains_key(**key))
    {
        return Err(RegistryError::config(format!(
            "The \"{}\" of type \"{}\" cannot be read from data; \
             set it with TypeDefinition::with_{}. You provided: {}",
            key, name, key, description
        )));
    }

    ctx.usability.check_allowed_properties(
        &ALLOWED_TYPE_PROPERTIES,
        &definition.keys(),
        &format!("type \"{}\"", name),
    )?;

    Ok(name.to_string())
}
