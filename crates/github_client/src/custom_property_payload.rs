//! GitHub custom property API payload types.
//!
//! The `PATCH /repos/{owner}/{repo}/properties/values` endpoint expects the
//! values wrapped in a `properties` array. This module provides that wrapper.
//!
//! See: https://docs.github.com/en/rest/repos/custom-properties

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "custom_property_payload_tests.rs"]
mod tests;

/// Payload for updating repository custom properties via GitHub API.
///
/// The entries are usually [`CustomPropertyNonNullValue`](crate::CustomPropertyNonNullValue)
/// (set) or [`CustomPropertyNullValue`](crate::CustomPropertyNullValue) (clear).
/// An empty list still serializes as `{"properties": []}`.
///
/// # Examples
///
/// ```
/// use github_client::{CustomPropertiesPayload, CustomPropertyNonNullValue};
///
/// let payload = CustomPropertiesPayload::new(vec![CustomPropertyNonNullValue::new(
///     "repository_type",
///     "library",
/// )]);
///
/// let json = serde_json::to_string(&payload).unwrap();
/// assert_eq!(
///     json,
///     r#"{"properties":[{"property_name":"repository_type","value":"library"}]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPropertiesPayload<T> {
    /// Custom property values to write to the repository.
    ///
    /// The property definitions must already exist at the organization level.
    pub properties: Vec<T>,
}

impl<T> CustomPropertiesPayload<T> {
    /// Create a new custom properties payload from a list of properties.
    pub fn new(properties: Vec<T>) -> Self {
        Self { properties }
    }
}
