//! Reading and writing template files
//!
//! Saves go to a sibling `.tmp` file first and are renamed into place, so an
//! interrupted save never leaves a half-written template behind.

use crate::{Result, StoreError};
use std::path::{Path, PathBuf};
use template_model::TemplateDocument;

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}

fn missing(path: &Path) -> StoreError {
    StoreError::NotFound(path.display().to_string())
}

/// Write a template file
pub async fn save_template(document: &TemplateDocument, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = crate::serialize(document, pretty)?;
    let staged = staging_path(path);
    tokio::fs::write(&staged, json).await?;
    tokio::fs::rename(&staged, path).await?;
    Ok(())
}

/// Read a template file
pub async fn load_template(path: impl AsRef<Path>) -> Result<TemplateDocument> {
    let path = path.as_ref();
    if !tokio::fs::try_exists(path).await? {
        return Err(missing(path));
    }
    let json = tokio::fs::read_to_string(path).await?;
    crate::deserialize(&json)
}

/// Write a template file from synchronous code (the repository, startup paths)
pub fn save_template_sync(document: &TemplateDocument, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = crate::serialize(document, pretty)?;
    let staged = staging_path(path);
    std::fs::write(&staged, json)?;
    std::fs::rename(&staged, path)?;
    Ok(())
}

/// Read a template file from synchronous code
pub fn load_template_sync(path: impl AsRef<Path>) -> Result<TemplateDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(missing(path));
    }
    let json = std::fs::read_to_string(path)?;
    crate::deserialize(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use template_model::{ComponentRegistry, TemplateInfo};

    fn inspection_template() -> TemplateDocument {
        let registry = ComponentRegistry::builtin();
        let mut document = TemplateDocument::new(TemplateInfo::new("入廠檢驗"));
        document.add_component(&registry, "dataTable").unwrap();
        document.add_component(&registry, "signature").unwrap();
        document
    }

    #[tokio::test]
    async fn test_async_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inspection.tpl.json");
        let document = inspection_template();

        save_template(&document, &path, true).await.unwrap();
        let loaded = load_template(&path).await.unwrap();
        assert_eq!(loaded.instances(), document.instances());
    }

    #[test]
    fn test_sync_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inspection.tpl.json");
        let document = inspection_template();

        save_template_sync(&document, &path, false).unwrap();
        let loaded = load_template_sync(&path).unwrap();
        assert_eq!(loaded.template_info.name, "入廠檢驗");
        assert_eq!(loaded.ids(), document.ids());
    }

    #[test]
    fn test_save_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inspection.tpl.json");

        save_template_sync(&inspection_template(), &path, true).unwrap();
        save_template_sync(&TemplateDocument::default(), &path, true).unwrap();

        assert!(!staging_path(&path).exists());
        assert!(load_template_sync(&path).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.tpl.json");
        assert!(matches!(load_template_sync(&path), Err(StoreError::NotFound(_))));
        assert!(matches!(load_template(&path).await, Err(StoreError::NotFound(_))));
    }
}
