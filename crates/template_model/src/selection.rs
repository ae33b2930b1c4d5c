//! Selection model - which component instance is active
//!
//! The selection only stores an id. The selected instance is always looked
//! up in the document, so there is never a second copy of its data to
//! drift out of sync.

use crate::{ComponentId, ComponentInstance, DocModelError, Result, TemplateDocument};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSelection {
    selected: Option<ComponentId>,
}

impl ComponentSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, which must exist in `document`
    pub fn select(&mut self, document: &TemplateDocument, id: ComponentId) -> Result<()> {
        if !document.contains(id) {
            return Err(DocModelError::UnknownInstance(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<ComponentId> {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// The selected instance, looked up live in `document`
    pub fn resolve<'a>(&self, document: &'a TemplateDocument) -> Option<&'a ComponentInstance> {
        self.selected.and_then(|id| document.get(id))
    }

    /// Clear the selection if it points at `id`
    pub fn forget(&mut self, id: ComponentId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Drop the selection if its id no longer exists in `document`
    pub fn revalidate(&mut self, document: &TemplateDocument) {
        if let Some(id) = self.selected {
            if !document.contains(id) {
                self.selected = None;
            }
        }
    }
}
