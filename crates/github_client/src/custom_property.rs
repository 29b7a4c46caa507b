//! Repository custom property value types.
//!
//! Custom properties are key/value metadata defined at the organization level
//! and set per repository. Reads return [`CustomPropertyValue`], whose value may
//! be a single string, a list of strings (multi-select properties) or null.
//! Writes are split in two types so that setting and clearing a property stay
//! distinct: [`CustomPropertyNonNullValue`] and [`CustomPropertyNullValue`].
//!
//! See: https://docs.github.com/en/rest/repos/custom-properties

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

#[cfg(test)]
#[path = "custom_property_tests.rs"]
mod tests;

/// The value of a custom property as returned by GitHub.
///
/// `string`, `single_select`, `true_false` and `url` properties carry a single
/// string; `multi_select` properties carry a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Single(String),
    Multiple(Vec<String>),
}

impl PropertyValue {
    /// Returns the value if it is a single string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Single(value) => Some(value),
            PropertyValue::Multiple(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Single(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Single(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(values: Vec<String>) -> Self {
        PropertyValue::Multiple(values)
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Single(value) => write!(f, "{value}"),
            PropertyValue::Multiple(values) => write!(f, "{}", values.join(", ")),
        }
    }
}

/// A custom property set on a repository.
///
/// # Examples
///
/// ```rust
/// use github_client::CustomPropertyValue;
///
/// let value: CustomPropertyValue =
///     serde_json::from_str(r#"{"property_name": "env", "value": "prod"}"#).unwrap();
///
/// assert_eq!(value.property_name, "env");
/// assert_eq!(value.value.as_ref().and_then(|v| v.as_str()), Some("prod"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPropertyValue {
    /// The name of the property, unique within the owning organization
    pub property_name: String,

    /// The current value, `None` when GitHub reports `null`
    #[serde(default)]
    pub value: Option<PropertyValue>,
}

/// A custom property value to write: a name paired with a string value.
///
/// # Examples
///
/// ```rust
/// use github_client::CustomPropertyNonNullValue;
///
/// let value = CustomPropertyNonNullValue::new("environment", "production");
/// let json = serde_json::to_value(&value).unwrap();
///
/// assert_eq!(json["property_name"], "environment");
/// assert_eq!(json["value"], "production");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPropertyNonNullValue {
    pub property_name: String,
    pub value: String,
}

impl CustomPropertyNonNullValue {
    pub fn new(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value: value.into(),
        }
    }
}

/// A custom property to remove from a repository.
///
/// Serializes as `{"property_name": "<name>", "value": null}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPropertyNullValue {
    pub property_name: String,
}

impl CustomPropertyNullValue {
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
        }
    }
}

impl Serialize for CustomPropertyNullValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CustomPropertyNullValue", 2)?;
        state.serialize_field("property_name", &self.property_name)?;
        state.serialize_field("value", &None::<String>)?;
        state.end()
    }
}
