//! Property variant inference
//!
//! A property's editing variant is read off the shape of its current value,
//! never off its name. Lists are classified by sampling their first element,
//! so the result is recomputed on every edit instead of being stored.

use crate::{DocModelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Shape class of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyVariant {
    /// `true` / `false`, edited with a checkbox
    Boolean,
    /// A string or number, edited with a text input
    Scalar,
    /// List whose first element is a string
    TextList,
    /// List whose first element is an object with a `text` field
    TextedObjectList,
    /// List whose first element is an object with a `label` field and no `text` field
    LabeledObjectList,
    /// List whose first element is an object with neither `text` nor `label`
    UnknownObjectList,
    /// List whose first element is not a string or object
    UnknownList,
    /// List with no elements
    EmptyList,
    /// `null` or a bare object
    Opaque,
}

impl PropertyVariant {
    /// Classify a value by its shape
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Boolean,
            Value::String(_) | Value::Number(_) => Self::Scalar,
            Value::Array(items) => match items.first() {
                None => Self::EmptyList,
                Some(Value::String(_)) => Self::TextList,
                Some(Value::Object(first)) if first.contains_key("text") => {
                    Self::TextedObjectList
                }
                Some(Value::Object(first)) if first.contains_key("label") => {
                    Self::LabeledObjectList
                }
                Some(Value::Object(_)) => Self::UnknownObjectList,
                Some(_) => Self::UnknownList,
            },
            Value::Null | Value::Object(_) => Self::Opaque,
        }
    }

    /// Whether the value is a list (of any element shape)
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Self::TextList
                | Self::TextedObjectList
                | Self::LabeledObjectList
                | Self::UnknownObjectList
                | Self::UnknownList
                | Self::EmptyList
        )
    }

    /// The element appended by "add item", if this variant defines one
    pub fn new_element(&self) -> Option<Value> {
        match self {
            Self::TextList => Some(Value::String(String::new())),
            Self::TextedObjectList => Some(json!({ "text": "", "required": false })),
            Self::LabeledObjectList => {
                Some(json!({ "type": "text", "label": "", "required": false }))
            }
            _ => None,
        }
    }

    pub fn supports_append(&self) -> bool {
        self.new_element().is_some()
    }
}

/// Build the element to append to `property`, whose current value is `value`
pub fn new_list_element(property: &str, value: &Value) -> Result<Value> {
    let variant = PropertyVariant::classify(value);
    variant
        .new_element()
        .ok_or_else(|| DocModelError::UnsupportedVariant {
            property: property.to_string(),
            variant,
        })
}

/// Return a copy of the list `value` with a variant-appropriate element appended
pub fn append_list_element(property: &str, value: &Value) -> Result<Value> {
    let element = new_list_element(property, value)?;
    let mut items = value.as_array().cloned().unwrap_or_default();
    items.push(element);
    Ok(Value::Array(items))
}

/// Return a copy of the list `value` with the element at `index` replaced
pub fn replace_list_element(
    property: &str,
    value: &Value,
    index: usize,
    element: Value,
) -> Result<Value> {
    let mut items = list_items(property, value)?.to_vec();
    let len = items.len();
    let slot = items
        .get_mut(index)
        .ok_or(DocModelError::IndexOutOfRange { index, len })?;
    *slot = element;
    Ok(Value::Array(items))
}

/// Return a copy of the list `value` with the element at `index` removed
pub fn remove_list_element(property: &str, value: &Value, index: usize) -> Result<Value> {
    let mut items = list_items(property, value)?.to_vec();
    if index >= items.len() {
        return Err(DocModelError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    Ok(Value::Array(items))
}

fn list_items<'a>(property: &str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| DocModelError::UnsupportedVariant {
            property: property.to_string(),
            variant: PropertyVariant::classify(value),
        })
}
