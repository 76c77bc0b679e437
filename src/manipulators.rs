//! Template manipulator hooks.
//!
//! Manipulators are opaque to the registry. The rendering runtime runs the
//! `pre_wrapper` list before wrappers are applied to a field template and
//! the `post_wrapper` list after.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A function `(template, field options, scope) -> template`.
pub type TemplateManipulator = Arc<dyn Fn(&str, &Value, &Value) -> String + Send + Sync>;

/// Ordered manipulator lists.
#[derive(Clone, Default)]
pub struct TemplateManipulators {
    pub pre_wrapper: Vec<TemplateManipulator>,
    pub post_wrapper: Vec<TemplateManipulator>,
}

impl TemplateManipulators {
    /// Run the pre-wrapper manipulators in order.
    pub fn apply_pre(&self, template: &str, options: &Value, scope: &Value) -> String {
        apply(&self.pre_wrapper, template, options, scope)
    }

    /// Run the post-wrapper manipulators in order.
    pub fn apply_post(&self, template: &str, options: &Value, scope: &Value) -> String {
        apply(&self.post_wrapper, template, options, scope)
    }
}

fn apply(
    manipulators: &[TemplateManipulator],
    template: &str,
    options: &Value,
    scope: &Value,
) -> String {
    manipulators
        .iter()
        .fold(template.to_string(), |current, manipulate| {
            manipulate(&current, options, scope)
        })
}

impl fmt::Debug for TemplateManipulators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateManipulators")
            .field("pre_wrapper", &self.pre_wrapper.len())
            .field("post_wrapper", &self.post_wrapper.len())
            .finish()
    }
}
