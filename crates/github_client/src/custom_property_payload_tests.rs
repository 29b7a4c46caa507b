//! Tests for GitHub custom property payload types.

use super::*;
use crate::{CustomPropertyNonNullValue, CustomPropertyNullValue};
use serde_json::json;

/// Verify that CustomPropertiesPayload can be created with new().
#[test]
fn test_custom_properties_payload_new() {
    let properties = vec![CustomPropertyNonNullValue::new("type", "library")];

    let payload = CustomPropertiesPayload::new(properties.clone());

    assert_eq!(payload.properties.len(), 1);
    assert_eq!(payload.properties, properties);
}

/// Verify that CustomPropertiesPayload serializes to correct JSON format.
#[test]
fn test_custom_properties_payload_serialization() {
    let payload = CustomPropertiesPayload::new(vec![
        CustomPropertyNonNullValue::new("repository_type", "library"),
        CustomPropertyNonNullValue::new("team", "backend"),
    ]);

    let serialized = serde_json::to_value(&payload).expect("Failed to serialize");

    assert_eq!(
        serialized,
        json!({
            "properties": [
                {"property_name": "repository_type", "value": "library"},
                {"property_name": "team", "value": "backend"}
            ]
        })
    );
}

/// Verify that CustomPropertiesPayload deserializes from JSON correctly.
#[test]
fn test_custom_properties_payload_deserialization() {
    let json_str = r#"{
        "properties": [
            {
                "property_name": "environment",
                "value": "production"
            }
        ]
    }"#;

    let payload: CustomPropertiesPayload<CustomPropertyNonNullValue> =
        serde_json::from_str(json_str).expect("Failed to deserialize");

    assert_eq!(payload.properties.len(), 1);
    assert_eq!(payload.properties[0].property_name, "environment");
    assert_eq!(payload.properties[0].value, "production");
}

/// Verify that an empty properties list is kept as an empty array.
#[test]
fn test_custom_properties_payload_empty() {
    let payload: CustomPropertiesPayload<CustomPropertyNonNullValue> =
        CustomPropertiesPayload::new(vec![]);

    let json_str = serde_json::to_string(&payload).expect("Failed to serialize");

    assert_eq!(json_str, r#"{"properties":[]}"#);
}

/// Verify that clearing entries carry explicit nulls.
#[test]
fn test_custom_properties_payload_null_values() {
    let payload = CustomPropertiesPayload::new(vec![
        CustomPropertyNullValue::new("team"),
        CustomPropertyNullValue::new("tier"),
    ]);

    let serialized = serde_json::to_value(&payload).expect("Failed to serialize");

    assert_eq!(
        serialized,
        json!({
            "properties": [
                {"property_name": "team", "value": null},
                {"property_name": "tier", "value": null}
            ]
        })
    );
}
