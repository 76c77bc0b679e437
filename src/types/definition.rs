//! Field type definitions and the behaviour handles they carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Properties a type definition may declare.
pub const ALLOWED_TYPE_PROPERTIES: [&str; 9] = [
    "name",
    "template",
    "templateUrl",
    "controller",
    "link",
    "defaultOptions",
    "extends",
    "wrapper",
    "data",
];

type ControllerFn = dyn Fn(&mut Value) + Send + Sync;
type LinkFn = dyn Fn(&[Value]) + Send + Sync;
type OptionsFn = dyn Fn(&Value) -> Value + Send + Sync;

/// Controller logic attached to a field type.
///
/// Instantiation is owned by the rendering runtime; the registry only
/// stores, inherits and chains handles.
#[derive(Clone)]
pub struct Controller(Arc<ControllerFn>);

impl Controller {
    /// Wrap a function that initialises a field scope.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Value) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the controller against `scope`.
    pub fn instantiate(&self, scope: &mut Value) {
        (self.0)(scope)
    }

    /// Controller that runs `parent` and then `child` on the same scope.
    pub fn chain(parent: &Controller, child: &Controller) -> Controller {
        let parent = parent.clone();
        let child = child.clone();
        Controller::new(move |scope| {
            parent.instantiate(scope);
            child.instantiate(scope);
        })
    }

    /// Whether both handles point at the same controller.
    pub fn ptr_eq(&self, other: &Controller) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Controller(..)")
    }
}

/// DOM-linking logic attached to a field type.
#[derive(Clone)]
pub struct Link(Arc<LinkFn>);

impl Link {
    /// Wrap a link function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the link function with the runtime's argument set.
    pub fn call(&self, args: &[Value]) {
        (self.0)(args)
    }

    /// Link that calls `parent` and then `child` with the same arguments.
    pub fn chain(parent: &Link, child: &Link) -> Link {
        let parent = parent.clone();
        let child = child.clone();
        Link::new(move |args| {
            parent.call(args);
            child.call(args);
        })
    }

    /// Whether both handles point at the same link function.
    pub fn ptr_eq(&self, other: &Link) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Link(..)")
    }
}

/// Default field options, either fixed or computed from a context.
#[derive(Clone)]
pub enum DefaultOptions {
    /// A fixed options object.
    Static(Value),
    /// A pure function from the field's options to its defaults.
    Computed(Arc<OptionsFn>),
}

impl DefaultOptions {
    /// Wrap a function as computed default options.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Produce the options for `context`.
    ///
    /// Static options ignore the context and return a copy.
    pub fn resolve(&self, context: &Value) -> Value {
        match self {
            Self::Static(options) => options.clone(),
            Self::Computed(f) => f(context),
        }
    }

    /// Whether these options are a function.
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// The fixed options object, if static.
    pub fn as_static(&self) -> Option<&Value> {
        match self {
            Self::Static(options) => Some(options),
            Self::Computed(_) => None,
        }
    }
}

impl fmt::Debug for DefaultOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(options) => f.debug_tuple("Static").field(options).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Value> for DefaultOptions {
    fn from(options: Value) -> Self {
        Self::Static(options)
    }
}

impl Serialize for DefaultOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Static(options) => options.serialize(serializer),
            Self::Computed(_) => serializer.serialize_str("[computed]"),
        }
    }
}

impl<'de> Deserialize<'de> for DefaultOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::Static)
    }
}

/// Wrapper override declared by a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WrapperRef {
    /// A single wrapper name.
    One(String),
    /// Several wrapper names, outermost first.
    Many(Vec<String>),
}

/// A field type definition.
///
/// Definitions deserialize from camelCase documents. Keys that match no
/// field are kept in `extra` so registration can reject them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    /// Unique type name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Inline template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Template location, resolved by the rendering runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,

    #[serde(skip)]
    pub controller: Option<Controller>,

    #[serde(skip)]
    pub link: Option<Link>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_options: Option<DefaultOptions>,

    /// Parent type name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<WrapperRef>,

    /// Free-form metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Silence the overwrite warning for this registration only
    #[serde(default, skip_serializing_if = "is_false")]
    pub overwrite_ok: bool,

    /// Unrecognised keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Treat empty strings the same as missing values.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl TypeDefinition {
    /// Create a definition with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_template_url(mut self, url: impl Into<String>) -> Self {
        self.template_url = Some(url.into());
        self
    }

    pub fn with_controller(mut self, controller: Controller) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn with_default_options(mut self, options: impl Into<DefaultOptions>) -> Self {
        self.default_options = Some(options.into());
        self
    }

    pub fn with_extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn with_wrapper(mut self, wrapper: WrapperRef) -> Self {
        self.wrapper = Some(wrapper);
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

    /// The type name, if non-empty.
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    /// The parent type name, if non-empty.
    pub fn parent(&self) -> Option<&str> {
        present(&self.extends)
    }

    /// Top-level property names this definition sets.
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
        if self.controller.is_some() {
            keys.push("controller");
        }
        if self.link.is_some() {
            keys.push("link");
        }
        if self.default_options.is_some() {
            keys.push("defaultOptions");
        }
        if self.extends.is_some() {
            keys.push("extends");
        }
        if self.wrapper.is_some() {
            keys.push("wrapper");
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

    /// Compact JSON rendering used in messages.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
