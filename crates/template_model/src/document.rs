//! Template document - ordered component instances plus template metadata

use crate::{ComponentId, ComponentInstance, ComponentRegistry, DocModelError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Template-level metadata, independent of the component list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateInfo {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Standard the template certifies against (e.g. "ISO 9001")
    pub standard: String,
    pub version: String,
    pub last_updated: Option<NaiveDate>,
}

impl TemplateInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0".to_string(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_standard(mut self, standard: impl Into<String>) -> Self {
        self.standard = standard.into();
        self
    }
}

/// The ordered collection of component instances being edited.
///
/// Insertion order is the rendering order. Instance ids are unique across
/// the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredDocument")]
pub struct TemplateDocument {
    pub template_info: TemplateInfo,
    components: Vec<ComponentInstance>,
    /// Change counter, bumped on every successful mutation
    #[serde(skip)]
    revision: u64,
}

/// Wire form of a document; converted through `from_parts` so loaded
/// documents obey the same id-uniqueness rule as edited ones
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDocument {
    #[serde(default)]
    template_info: TemplateInfo,
    #[serde(default)]
    components: Vec<ComponentInstance>,
}

impl TryFrom<StoredDocument> for TemplateDocument {
    type Error = DocModelError;

    fn try_from(stored: StoredDocument) -> Result<Self> {
        Self::from_parts(stored.template_info, stored.components)
    }
}

impl TemplateDocument {
    /// Create a new empty document
    pub fn new(template_info: TemplateInfo) -> Self {
        Self {
            template_info,
            components: Vec::new(),
            revision: 0,
        }
    }

    /// Assemble a document from loaded parts, rejecting duplicate ids
    pub fn from_parts(template_info: TemplateInfo, components: Vec<ComponentInstance>) -> Result<Self> {
        let document = Self {
            template_info,
            components,
            revision: 0,
        };
        document.validate()?;
        Ok(document)
    }

    /// Check that every instance id is unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.components.len());
        for instance in &self.components {
            if !seen.insert(instance.id()) {
                return Err(DocModelError::DuplicateInstance(instance.id()));
            }
        }
        Ok(())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision += 1;
    }

    /// Instances in rendering order
    pub fn instances(&self) -> &[ComponentInstance] {
        &self.components
    }

    pub fn ids(&self) -> Vec<ComponentId> {
        self.components.iter().map(ComponentInstance::id).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: ComponentId) -> Option<&ComponentInstance> {
        self.components.iter().find(|c| c.id() == id)
    }

    pub fn position(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id() == id)
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.position(id).is_some()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.components.len() {
            Ok(())
        } else {
            Err(DocModelError::IndexOutOfRange {
                index,
                len: self.components.len(),
            })
        }
    }

    /// Append a new instance of `type_key` with its own copy of the type's defaults
    pub fn add_component(
        &mut self,
        registry: &ComponentRegistry,
        type_key: &str,
    ) -> Result<&ComponentInstance> {
        let definition = registry.get_type(type_key)?;
        let instance = ComponentInstance::from_definition(definition);
        tracing::debug!(id = %instance.id(), type_key, "add component");

        self.components.push(instance);
        self.bump_revision();
        let index = self.components.len() - 1;
        Ok(&self.components[index])
    }

    /// Remove the instance at `index`, shifting later instances left
    pub fn delete_component(&mut self, index: usize) -> Result<ComponentInstance> {
        self.check_index(index)?;
        let removed = self.components.remove(index);
        tracing::debug!(id = %removed.id(), index, "delete component");
        self.bump_revision();
        Ok(removed)
    }

    /// Move the instance at `source` so that it ends up at `dest`.
    ///
    /// `dest` indexes the sequence after removal. Returns `false` when the
    /// indices are equal and nothing moved.
    pub fn reorder(&mut self, source: usize, dest: usize) -> Result<bool> {
        self.check_index(source)?;
        self.check_index(dest)?;
        if source == dest {
            return Ok(false);
        }

        let instance = self.components.remove(source);
        self.components.insert(dest, instance);
        tracing::debug!(source, dest, "reorder components");
        self.bump_revision();
        Ok(true)
    }

    /// Replace the value of an existing property, returning the previous value.
    ///
    /// The new value is not checked against the old value's variant.
    pub fn update_property(
        &mut self,
        id: ComponentId,
        property: &str,
        value: Value,
    ) -> Result<Value> {
        let instance = self
            .components
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(DocModelError::UnknownInstance(id))?;
        let previous = instance.replace_prop(property, value)?;
        tracing::debug!(id = %id, property, "update property");
        self.bump_revision();
        Ok(previous)
    }

    pub fn replace_template_info(&mut self, template_info: TemplateInfo) {
        self.template_info = template_info;
        self.bump_revision();
    }

    /// Stamp the template's last-updated date
    pub fn mark_updated(&mut self, date: NaiveDate) {
        self.template_info.last_updated = Some(date);
        self.bump_revision();
    }
}
