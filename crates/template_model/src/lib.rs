//! Template Model - component catalog and template document structure
//!
//! This crate provides the data model for the template editor: the catalog
//! of component types, shape-based property variant inference, the ordered
//! document of component instances, and the id-only selection.

mod component;
mod component_id;
mod document;
mod error;
mod registry;
mod selection;
pub mod variant;

pub use component::*;
pub use component_id::*;
pub use document::*;
pub use error::*;
pub use registry::*;
pub use selection::*;
pub use variant::PropertyVariant;

/// Property values of a component, keyed by property name in declaration order
pub type Props = serde_json::Map<String, serde_json::Value>;
