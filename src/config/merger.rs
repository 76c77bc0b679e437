//! Reverse deep merge for JSON-shaped option values.
//!
//! Type inheritance fills the gaps a child definition leaves open with
//! whatever its parent provides. This module implements those semantics.
//!
//! # Merge Rules
//!
//! - Keys missing from the target are copied from the source
//! - Objects present on both sides are merged recursively
//! - Arrays present on both sides are merged index by index
//! - Any other value already in the target is left untouched
//! - Null and scalar sources are no-ops

use serde_json::Value;

/// Merge `sources` into `target` without overwriting anything `target`
/// already defines.
///
/// Sources are applied left to right, so precedence runs target first,
/// then earlier sources, then later ones. New object keys are appended
/// after the target's existing keys.
///
/// # Arguments
///
/// * `target` - The value to fill in (mutated in place)
/// * `sources` - Values that supply missing entries, highest priority first
///
/// # Returns
///
/// The mutated target, for chaining
pub fn reverse_deep_merge<'t, 's, I>(target: &'t mut Value, sources: I) -> &'t mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    for source in sources {
        merge_into(target, source);
    }
    target
}

fn merge_into(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(key) {
                    Some(existing) => {
                        if same_container(existing, source_value) {
                            merge_into(existing, source_value);
                        }
                    }
                    None => {
                        target_map.insert(key.clone(), source_value.clone());
                    }
                }
            }
        }
        (Value::Array(target_items), Value::Array(source_items)) => {
            for (index, source_value) in source_items.iter().enumerate() {
                match target_items.get_mut(index) {
                    Some(existing) => {
                        if same_container(existing, source_value) {
                            merge_into(existing, source_value);
                        }
                    }
                    None => target_items.push(source_value.clone()),
                }
            }
        }
        // Scalars, nulls and mismatched shapes: the target keeps its value
        _ => {}
    }
}

/// Merge `overlay` onto `base`, returning a new value.
///
/// The mirror image of [`reverse_deep_merge`]: overlay values win, while
/// the base keeps its key order and new overlay keys are appended after it.
/// When either side is not an object or array of the same shape as the
/// other, the overlay replaces the base outright.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut result = base_map.clone();
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.get(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value.clone(),
                };
                result.insert(key.clone(), merged);
            }
            Value::Object(result)
        }
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            let mut result: Vec<Value> = overlay_items
                .iter()
                .enumerate()
                .map(|(index, overlay_value)| match base_items.get(index) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value.clone(),
                })
                .collect();
            result.extend(base_items.iter().skip(overlay_items.len()).cloned());
            Value::Array(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

fn same_container(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_))
    )
}
