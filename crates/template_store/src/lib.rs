//! Template Store - persistence and settings for the template editor
//!
//! This crate is the persistence side of the editor: template
//! serialization, file I/O, a directory-backed template repository,
//! component catalog loading, and editor settings.

mod catalog;
mod error;
mod file_io;
mod format;
mod repository;
mod serializer;
mod settings;

pub use catalog::*;
pub use error::*;
pub use file_io::*;
pub use format::*;
pub use repository::*;
pub use serializer::*;
pub use settings::*;
