//! Editing session - one document, its selection, and its history

use crate::{EditError, Result, UndoManager};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use template_model::{
    ComponentId, ComponentInstance, ComponentRegistry, ComponentSelection,
    ComponentTypeDefinition, TemplateDocument, TemplateInfo,
};

/// The single writer for a template document.
///
/// Every operation runs to completion and either applies fully or leaves
/// the document, selection and history untouched.
#[derive(Debug, Clone)]
pub struct EditingSession {
    registry: Arc<ComponentRegistry>,
    document: TemplateDocument,
    selection: ComponentSelection,
    undo_manager: UndoManager,
}

impl EditingSession {
    /// Create a session over an empty document
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        Self::with_document(registry, TemplateDocument::default())
    }

    /// Create a session over a loaded document
    pub fn with_document(registry: Arc<ComponentRegistry>, document: TemplateDocument) -> Self {
        Self {
            registry,
            document,
            selection: ComponentSelection::new(),
            undo_manager: UndoManager::new(),
        }
    }

    /// Bound the undo history
    pub fn with_history_limit(mut self, max_entries: usize) -> Self {
        self.undo_manager = UndoManager::with_limits(max_entries, Duration::from_millis(500));
        self
    }

    pub fn with_undo_manager(mut self, undo_manager: UndoManager) -> Self {
        self.undo_manager = undo_manager;
        self
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn document(&self) -> &TemplateDocument {
        &self.document
    }

    /// Take the document out, e.g. to hand it to the store
    pub fn into_document(self) -> TemplateDocument {
        self.document
    }

    pub fn selection(&self) -> ComponentSelection {
        self.selection
    }

    /// Component types for the palette
    pub fn list_types(&self) -> &[ComponentTypeDefinition] {
        self.registry.list_types()
    }

    pub fn get_type(&self, type_key: &str) -> Result<&ComponentTypeDefinition> {
        Ok(self.registry.get_type(type_key)?)
    }

    /// Run a document mutation, recording a history entry if it changed anything
    pub(crate) fn record<T>(
        &mut self,
        label: &str,
        merge_key: Option<String>,
        mutate: impl FnOnce(&mut TemplateDocument, &ComponentRegistry) -> template_model::Result<T>,
    ) -> Result<T> {
        let before = self.document.clone();
        let value = mutate(&mut self.document, self.registry.as_ref())?;
        if self.document.revision() != before.revision() {
            self.undo_manager.push(label, before, merge_key);
        }
        Ok(value)
    }

    /// Append a new instance of `type_key`
    pub fn add_component(&mut self, type_key: &str) -> Result<&ComponentInstance> {
        let id = self.record("Add component", None, |document, registry| {
            document.add_component(registry, type_key).map(ComponentInstance::id)
        })?;
        self.document
            .get(id)
            .ok_or(EditError::DocModel(template_model::DocModelError::UnknownInstance(id)))
    }

    /// Remove the instance at `index`, clearing the selection if it pointed there
    pub fn delete_component(&mut self, index: usize) -> Result<ComponentInstance> {
        let removed = self.record("Delete component", None, |document, _| {
            document.delete_component(index)
        })?;
        self.selection.forget(removed.id());
        Ok(removed)
    }

    /// Move the instance at `source` to `dest`
    pub fn reorder(&mut self, source: usize, dest: usize) -> Result<()> {
        self.record("Move component", None, |document, _| {
            document.reorder(source, dest)
        })?;
        Ok(())
    }

    /// Complete a drag gesture. Without a drop target nothing changes.
    pub fn apply_drop(&mut self, source: usize, dest: Option<usize>) -> Result<bool> {
        match dest {
            Some(dest) => {
                let revision = self.document.revision();
                self.reorder(source, dest)?;
                Ok(self.document.revision() != revision)
            }
            None => {
                tracing::debug!(source, "drag ended without drop target");
                Ok(false)
            }
        }
    }

    /// Replace one property value on any instance
    pub fn update_property(&mut self, id: ComponentId, property: &str, value: Value) -> Result<()> {
        let merge_key = format!("{id}/{property}");
        self.record("Edit property", Some(merge_key), |document, _| {
            document.update_property(id, property, value)
        })?;
        Ok(())
    }

    pub fn update_template_info(&mut self, template_info: TemplateInfo) -> Result<()> {
        if self.document.template_info == template_info {
            return Ok(());
        }
        self.record("Edit template info", Some("templateInfo".to_string()), |document, _| {
            document.replace_template_info(template_info);
            Ok(())
        })
    }

    /// Swap in an externally reloaded document; history is discarded
    pub fn replace_document(&mut self, document: TemplateDocument) {
        self.document = document;
        self.selection.revalidate(&self.document);
        self.undo_manager.clear();
        tracing::debug!(components = self.document.len(), "document replaced");
    }

    /// Make `id` the active instance
    pub fn select(&mut self, id: ComponentId) -> Result<()> {
        self.selection.select(&self.document, id)?;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_id(&self) -> Option<ComponentId> {
        self.selection.selected_id()
    }

    /// The selected instance as it currently is in the document
    pub fn current_selection(&self) -> Option<&ComponentInstance> {
        self.selection.resolve(&self.document)
    }

    pub fn undo(&mut self) -> Result<()> {
        let current = self.document.clone();
        self.document = self.undo_manager.pop_undo(current)?;
        self.selection.revalidate(&self.document);
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        let current = self.document.clone();
        self.document = self.undo_manager.pop_redo(current)?;
        self.selection.revalidate(&self.document);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.undo_manager.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_manager.can_redo()
    }

    pub fn undo_manager(&self) -> &UndoManager {
        &self.undo_manager
    }
}
