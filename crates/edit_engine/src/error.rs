//! Error types for editing operations

use serde::Serialize;
use template_model::DocModelError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    #[error("No component is selected")]
    NoSelection,

    #[error(transparent)]
    DocModel(#[from] DocModelError),

    #[error("Undo stack is empty")]
    UndoStackEmpty,

    #[error("Redo stack is empty")]
    RedoStackEmpty,
}

/// Flat error classification for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    UnknownType,
    UnknownInstance,
    UnknownProperty,
    IndexOutOfRange,
    NoSelection,
    UnsupportedVariant,
    InvalidDocument,
    History,
}

impl EditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoSelection => ErrorKind::NoSelection,
            Self::UndoStackEmpty | Self::RedoStackEmpty => ErrorKind::History,
            Self::DocModel(err) => match err {
                DocModelError::UnknownType(_) => ErrorKind::UnknownType,
                DocModelError::UnknownInstance(_) => ErrorKind::UnknownInstance,
                DocModelError::UnknownProperty { .. } => ErrorKind::UnknownProperty,
                DocModelError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
                DocModelError::UnsupportedVariant { .. } => ErrorKind::UnsupportedVariant,
                DocModelError::DuplicateInstance(_) | DocModelError::InvalidCatalog(_) => {
                    ErrorKind::InvalidDocument
                }
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, EditError>;
