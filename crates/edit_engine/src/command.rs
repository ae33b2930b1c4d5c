//! Serializable commands for driving a session from the presentation layer

use crate::{EditingSession, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use template_model::{ComponentId, TemplateInfo};

/// One inbound editing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditCommand {
    AddComponent { type_key: String },
    DeleteComponent { index: usize },
    Reorder { source: usize, dest: usize },
    /// End of a drag gesture; `dest` is `None` when dropped outside a target
    Drop { source: usize, dest: Option<usize> },
    UpdateProperty { id: ComponentId, property: String, value: Value },
    UpdateTemplateInfo { template_info: TemplateInfo },
    Select { id: ComponentId },
    ClearSelection,
    EditScalarProperty { property: String, value: Value },
    EditBooleanProperty { property: String, value: bool },
    EditListElement { property: String, index: usize, value: Value },
    AppendListElement { property: String },
    RemoveListElement { property: String, index: usize },
    Undo,
    Redo,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum CommandOutcome {
    Added { id: ComponentId },
    Removed { id: ComponentId },
    Changed,
    Unchanged,
}

impl EditCommand {
    /// Display name for menus and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AddComponent { .. } => "Add Component",
            Self::DeleteComponent { .. } => "Delete Component",
            Self::Reorder { .. } | Self::Drop { .. } => "Move Component",
            Self::UpdateProperty { .. }
            | Self::EditScalarProperty { .. }
            | Self::EditBooleanProperty { .. } => "Edit Property",
            Self::UpdateTemplateInfo { .. } => "Edit Template Info",
            Self::Select { .. } => "Select",
            Self::ClearSelection => "Clear Selection",
            Self::EditListElement { .. } => "Edit Item",
            Self::AppendListElement { .. } => "Add Item",
            Self::RemoveListElement { .. } => "Remove Item",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
        }
    }
}

impl EditingSession {
    /// Execute a command against this session
    pub fn execute(&mut self, command: EditCommand) -> Result<CommandOutcome> {
        tracing::trace!(command = command.display_name(), "execute");
        let revision = self.document().revision();

        let outcome = match command {
            EditCommand::AddComponent { type_key } => {
                let id = self.add_component(&type_key)?.id();
                return Ok(CommandOutcome::Added { id });
            }
            EditCommand::DeleteComponent { index } => {
                let removed = self.delete_component(index)?;
                return Ok(CommandOutcome::Removed { id: removed.id() });
            }
            EditCommand::Reorder { source, dest } => self.reorder(source, dest),
            EditCommand::Drop { source, dest } => self.apply_drop(source, dest).map(|_| ()),
            EditCommand::UpdateProperty { id, property, value } => {
                self.update_property(id, &property, value)
            }
            EditCommand::UpdateTemplateInfo { template_info } => {
                self.update_template_info(template_info)
            }
            EditCommand::Select { id } => self.select(id),
            EditCommand::ClearSelection => {
                self.clear_selection();
                Ok(())
            }
            EditCommand::EditScalarProperty { property, value } => {
                self.edit_scalar_property(&property, value)
            }
            EditCommand::EditBooleanProperty { property, value } => {
                self.edit_boolean_property(&property, value)
            }
            EditCommand::EditListElement { property, index, value } => {
                self.edit_list_element(&property, index, value)
            }
            EditCommand::AppendListElement { property } => self.append_list_element(&property),
            EditCommand::RemoveListElement { property, index } => {
                self.remove_list_element(&property, index)
            }
            EditCommand::Undo => self.undo(),
            EditCommand::Redo => self.redo(),
        };
        outcome?;

        if self.document().revision() != revision {
            Ok(CommandOutcome::Changed)
        } else {
            Ok(CommandOutcome::Unchanged)
        }
    }
}
