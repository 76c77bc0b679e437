//! Library integration tests.

use formwork::RegistryError;

#[test]
fn error_types_are_public() {
    let err = RegistryError::not_found("test", "{}");
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> formwork::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn merge_is_public() {
    use formwork::config::reverse_deep_merge;
    use serde_json::json;

    let mut target = json!({"a": 1});
    reverse_deep_merge(&mut target, [&json!({"a": 2, "b": 3})]);
    assert_eq!(target, json!({"a": 1, "b": 3}));
}
