//! Tests for custom property value types.

use super::*;
use serde_json::json;

#[test]
fn test_custom_property_value_single_deserialization() {
    let value: CustomPropertyValue =
        serde_json::from_value(json!({"property_name": "env", "value": "prod"}))
            .expect("Failed to deserialize");

    assert_eq!(value.property_name, "env");
    assert_eq!(value.value, Some(PropertyValue::Single("prod".to_string())));
}

#[test]
fn test_custom_property_value_multi_select_deserialization() {
    let value: CustomPropertyValue = serde_json::from_value(json!({
        "property_name": "languages",
        "value": ["rust", "go"]
    }))
    .expect("Failed to deserialize");

    assert_eq!(
        value.value,
        Some(PropertyValue::Multiple(vec![
            "rust".to_string(),
            "go".to_string()
        ]))
    );
    assert_eq!(value.value.as_ref().and_then(|v| v.as_str()), None);
}

#[test]
fn test_custom_property_value_null_deserialization() {
    let value: CustomPropertyValue =
        serde_json::from_value(json!({"property_name": "owner_team", "value": null}))
            .expect("Failed to deserialize");

    assert_eq!(value.property_name, "owner_team");
    assert!(value.value.is_none());
}

#[test]
fn test_custom_property_value_missing_value_deserialization() {
    let value: CustomPropertyValue =
        serde_json::from_value(json!({"property_name": "owner_team"}))
            .expect("Failed to deserialize");

    assert!(value.value.is_none());
}

#[test]
fn test_custom_property_value_rejects_numeric_value() {
    let result =
        serde_json::from_value::<CustomPropertyValue>(json!({"property_name": "x", "value": 3}));

    assert!(result.is_err());
}

#[test]
fn test_non_null_value_serialization() {
    let value = CustomPropertyNonNullValue::new("env", "prod");

    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({"property_name": "env", "value": "prod"})
    );
}

#[test]
fn test_null_value_serializes_explicit_null() {
    let value = CustomPropertyNullValue::new("env");

    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({"property_name": "env", "value": null})
    );
}

#[test]
fn test_property_value_display() {
    assert_eq!(PropertyValue::from("prod").to_string(), "prod");
    assert_eq!(
        PropertyValue::from(vec!["a".to_string(), "b".to_string()]).to_string(),
        "a, b"
    );
}
