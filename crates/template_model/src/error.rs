//! Error types for template model operations

use crate::ComponentId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DocModelError {
    #[error("Unknown component type: {0}")]
    UnknownType(String),

    #[error("Component instance not found: {0}")]
    UnknownInstance(ComponentId),

    #[error("Duplicate component instance id: {0}")]
    DuplicateInstance(ComponentId),

    #[error("Component {id} has no property '{property}'")]
    UnknownProperty { id: ComponentId, property: String },

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Property '{property}' has variant {variant:?}, which does not support this edit")]
    UnsupportedVariant {
        property: String,
        variant: crate::PropertyVariant,
    },

    #[error("Invalid component catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
