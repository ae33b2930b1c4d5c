//! Edit Engine - editing session, property editor, and undo/redo
//!
//! This crate wraps a `TemplateDocument` in an `EditingSession` that owns
//! the selection and history, and exposes the operations the presentation
//! layer calls: add/delete/reorder components, select, and edit properties.

mod command;
mod error;
mod property_editor;
mod session;
mod undo;

pub use command::*;
pub use error::*;
pub use session::*;
pub use undo::*;
