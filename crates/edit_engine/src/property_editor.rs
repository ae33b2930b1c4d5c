//! Property editing against the selected component
//!
//! Every edit reads the selected instance from the document, computes the
//! new value and writes it back through `TemplateDocument::update_property`.

use crate::{EditError, EditingSession, Result};
use serde_json::Value;
use template_model::{variant, ComponentId, DocModelError, PropertyVariant};

impl EditingSession {
    fn require_selection(&self) -> Result<ComponentId> {
        self.selected_id().ok_or(EditError::NoSelection)
    }

    /// Current value of a property on the selected instance
    fn selected_value(&self, property: &str) -> Result<(ComponentId, &Value)> {
        let id = self.require_selection()?;
        let instance = self
            .document()
            .get(id)
            .ok_or(DocModelError::UnknownInstance(id))?;
        let value = instance
            .prop(property)
            .ok_or_else(|| DocModelError::UnknownProperty {
                id,
                property: property.to_string(),
            })?;
        Ok((id, value))
    }

    /// Variant of a property on the selected instance, e.g. to decide
    /// whether "add item" should be offered
    pub fn property_variant(&self, property: &str) -> Result<PropertyVariant> {
        let (_, value) = self.selected_value(property)?;
        Ok(PropertyVariant::classify(value))
    }

    /// Set a text or number property on the selected instance
    pub fn edit_scalar_property(&mut self, property: &str, value: impl Into<Value>) -> Result<()> {
        let id = self.require_selection()?;
        self.update_property(id, property, value.into())
    }

    /// Set a checkbox property on the selected instance
    pub fn edit_boolean_property(&mut self, property: &str, value: bool) -> Result<()> {
        let id = self.require_selection()?;
        self.update_property(id, property, Value::Bool(value))
    }

    /// Replace one element of a list property, keeping the others in place
    pub fn edit_list_element(&mut self, property: &str, index: usize, element: Value) -> Result<()> {
        let (id, value) = self.selected_value(property)?;
        let updated = variant::replace_list_element(property, value, index, element)?;
        self.update_property(id, property, updated)
    }

    /// Append an element shaped like the list's existing elements
    pub fn append_list_element(&mut self, property: &str) -> Result<()> {
        let (id, value) = self.selected_value(property)?;
        let updated = variant::append_list_element(property, value)?;
        tracing::debug!(id = %id, property, "append list element");
        self.record("Add item", None, |document, _| {
            document.update_property(id, property, updated)
        })?;
        Ok(())
    }

    /// Remove one element of a list property
    pub fn remove_list_element(&mut self, property: &str, index: usize) -> Result<()> {
        let (id, value) = self.selected_value(property)?;
        let updated = variant::remove_list_element(property, value, index)?;
        self.record("Remove item", None, |document, _| {
            document.update_property(id, property, updated)
        })?;
        Ok(())
    }
}
