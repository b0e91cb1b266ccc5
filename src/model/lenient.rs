//! Tolerant field decoders for the upstream products list.
//!
//! The published JSON is hand-maintained. A field with an unexpected shape
//! decodes to its empty value instead of failing the record, so one odd
//! entry never empties the whole list.

use super::product::ContainerFormats;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text of a scalar value; anything else is empty.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The string elements of an array, in order; non-string elements are dropped.
fn string_elements(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_elements(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn opt_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_elements(Value::deserialize(deserializer)?))
}

/// A media-type map. Entries whose value is not an array are kept as `None`
/// so the normalizer skips them; a non-object container is absent.
pub(crate) fn container<'de, D>(deserializer: D) -> Result<Option<ContainerFormats>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        entries
            .into_iter()
            .map(|(media_type, formats)| (media_type, string_elements(formats)))
            .collect(),
    ))
}

/// A nested record; a value of the wrong shape becomes the default record.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(decode_or_default(Value::deserialize(deserializer)?))
}

/// An optional nested record: absent unless the value is an object.
pub(crate) fn opt_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.is_object().then(|| decode_or_default(value)))
}

pub(crate) fn decode_or_default<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_default()
}
