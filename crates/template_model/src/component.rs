//! Component instances placed into a template

use crate::{ComponentId, ComponentTypeDefinition, DocModelError, PropertyVariant, Props, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One concrete, editable block in a template document.
///
/// The set of property names is fixed when the instance is created from its
/// type definition; values can change, keys cannot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstance {
    id: ComponentId,
    type_key: String,
    label: String,
    props: Props,
}

impl ComponentInstance {
    /// Create a new instance with a fresh id and its own copy of the type's defaults
    pub fn from_definition(definition: &ComponentTypeDefinition) -> Self {
        Self {
            id: ComponentId::new(),
            type_key: definition.type_key.clone(),
            label: definition.label.clone(),
            props: definition.default_props.clone(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Current value of a property
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    pub fn has_prop(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Property names in declaration order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// Classify a property by its current value
    pub fn variant_of(&self, name: &str) -> Option<PropertyVariant> {
        self.prop(name).map(PropertyVariant::classify)
    }

    /// Replace an existing property's value, returning the previous value
    pub(crate) fn replace_prop(&mut self, name: &str, value: Value) -> Result<Value> {
        match self.props.get_mut(name) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(DocModelError::UnknownProperty {
                id: self.id,
                property: name.to_string(),
            }),
        }
    }
}
