//! Template repository - the persistence boundary of the editor

use crate::{Result, StoreError, FILE_EXTENSION};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use template_model::TemplateDocument;

/// Loads and saves template documents by key
pub trait TemplateRepository {
    fn load(&self, key: &str) -> Result<TemplateDocument>;

    /// Save `document`, stamping its last-updated date
    fn save(&self, key: &str, document: &mut TemplateDocument) -> Result<()>;

    /// Keys of all stored templates, sorted
    fn list(&self) -> Result<Vec<String>>;

    fn delete(&self, key: &str) -> Result<()>;
}

/// Stores each template as one JSON file in a directory
#[derive(Debug, Clone)]
pub struct JsonDirectoryRepository {
    dir: PathBuf,
    pretty: bool,
}

impl JsonDirectoryRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pretty: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_directory(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidFormat(format!("Invalid template key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl TemplateRepository for JsonDirectoryRepository {
    fn load(&self, key: &str) -> Result<TemplateDocument> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(StoreError::NotFound(key.to_string()));
        }
        crate::load_template_sync(&path)
    }

    fn save(&self, key: &str, document: &mut TemplateDocument) -> Result<()> {
        let path = self.path_for(key)?;
        self.ensure_directory()?;
        document.mark_updated(Utc::now().date_naive());
        crate::save_template_sync(document, &path, self.pretty)?;
        tracing::debug!(key, components = document.len(), "template saved");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let suffix = format!(".{FILE_EXTENSION}");
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if let Some(key) = name.strip_suffix(&suffix) {
                    keys.push(key.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(StoreError::NotFound(key.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}
