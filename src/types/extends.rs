//! Type inheritance composition.
//!
//! A definition that declares `extends: <parent>` is merged with the
//! already-resolved parent before it is stored. Parents are themselves
//! stored resolved, so one level of composition carries the whole chain.
//!
//! # Composition Order
//!
//! 1. Controllers: inherit, or chain parent then child
//! 2. Links: inherit, or chain parent then child
//! 3. Default options: compose when either side is computed
//! 4. Everything still unset is filled from the parent

use serde_json::{Map, Value};

use crate::config::merger::{deep_merge, reverse_deep_merge};

use super::definition::{present, Controller, DefaultOptions, Link, TypeDefinition};

/// Merge `parent` into `child` in place.
pub fn extend_type(child: &mut TypeDefinition, parent: &TypeDefinition) {
    extend_controller(child, parent);
    extend_link(child, parent);
    extend_default_options(child, parent);
    fill_from_parent(child, parent);
}

fn extend_controller(child: &mut TypeDefinition, parent: &TypeDefinition) {
    let Some(parent_ctrl) = &parent.controller else {
        return;
    };
    child.controller = Some(match &child.controller {
        Some(child_ctrl) => Controller::chain(parent_ctrl, child_ctrl),
        None => parent_ctrl.clone(),
    });
}

fn extend_link(child: &mut TypeDefinition, parent: &TypeDefinition) {
    let Some(parent_link) = &parent.link else {
        return;
    };
    child.link = Some(match &child.link {
        Some(child_link) => Link::chain(parent_link, child_link),
        None => parent_link.clone(),
    });
}

fn extend_default_options(child: &mut TypeDefinition, parent: &TypeDefinition) {
    let Some(parent_options) = &parent.default_options else {
        return;
    };

    child.default_options = match (parent_options, child.default_options.take()) {
        // Child computes from whatever the parent computed
        (DefaultOptions::Computed(parent_fn), Some(DefaultOptions::Computed(child_fn))) => {
            let parent_fn = parent_fn.clone();
            Some(DefaultOptions::computed(move |context| {
                child_fn(&parent_fn(context))
            }))
        }
        // Parent computes a base and the child's static values are merged
        // onto it. A non-object base is replaced by the child's values.
        (DefaultOptions::Computed(parent_fn), child_options) => {
            let parent_fn = parent_fn.clone();
            let child_static = child_options.and_then(|options| options.as_static().cloned());
            Some(DefaultOptions::computed(move |context| {
                let base = parent_fn(context);
                match &child_static {
                    Some(overrides) => deep_merge(&base, overrides),
                    None => base,
                }
            }))
        }
        // Context wins over the parent's static values, then the child computes
        (DefaultOptions::Static(parent_static), Some(DefaultOptions::Computed(child_fn))) => {
            let parent_static = parent_static.clone();
            Some(DefaultOptions::computed(move |context| {
                let mut fresh = Value::Object(Map::new());
                reverse_deep_merge(&mut fresh, [context, &parent_static]);
                child_fn(&fresh)
            }))
        }
        // Static on both sides (or child unset) is handled by the residual fill
        (DefaultOptions::Static(_), child_options) => child_options,
    };
}

fn fill_from_parent(child: &mut TypeDefinition, parent: &TypeDefinition) {
    if present(&child.template).is_none() && present(&child.template_url).is_none() {
        child.template = parent.template.clone();
        child.template_url = parent.template_url.clone();
    }

    if child.controller.is_none() {
        child.controller = parent.controller.clone();
    }
    if child.link.is_none() {
        child.link = parent.link.clone();
    }

    if child.default_options.is_none() {
        child.default_options = parent.default_options.clone();
    } else if let (Some(DefaultOptions::Static(own)), Some(DefaultOptions::Static(inherited))) =
        (&mut child.default_options, &parent.default_options)
    {
        reverse_deep_merge(own, [inherited]);
    }

    if child.wrapper.is_none() {
        child.wrapper = parent.wrapper.clone();
    }

    if child.data.is_none() {
        child.data = parent.data.clone();
    } else if let (Some(own), Some(inherited)) = (&mut child.data, &parent.data) {
        reverse_deep_merge(own, [inherited]);
    }
}
