//! Component catalog loading

use crate::{CatalogSettings, Result, StoreError};
use template_model::ComponentRegistry;

/// Load the component registry named by the settings, or the built-in one
pub fn load_registry(settings: &CatalogSettings) -> Result<ComponentRegistry> {
    let Some(path) = &settings.path else {
        return Ok(ComponentRegistry::builtin());
    };
    if !path.exists() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    let registry = ComponentRegistry::from_json(&json)?;
    tracing::info!(path = %path.display(), types = registry.len(), "loaded component catalog");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use template_model::DocModelError;

    #[test]
    fn test_builtin_when_unset() {
        let registry = load_registry(&CatalogSettings::default()).unwrap();
        assert!(registry.contains("checkList"));
    }

    #[test]
    fn test_loads_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{ "typeKey": "photo", "label": "照片", "defaultProps": { "captions": ["圖 1"] } }]"#,
        )
        .unwrap();

        let registry = load_registry(&CatalogSettings { path: Some(path) }).unwrap();
        assert_eq!(registry.list_types()[0].type_key, "photo");
        assert!(!registry.contains("checkList"));
    }

    #[test]
    fn test_invalid_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{ "typeKey": "x", "label": "X", "defaultProps": { "rows": [] } }]"#).unwrap();

        let err = load_registry(&CatalogSettings { path: Some(path) }).unwrap_err();
        assert!(matches!(err, StoreError::Model(DocModelError::InvalidCatalog(_))));
    }

    #[test]
    fn test_missing_catalog_file() {
        let dir = TempDir::new().unwrap();
        let settings = CatalogSettings { path: Some(dir.path().join("missing.json")) };
        assert!(matches!(load_registry(&settings), Err(StoreError::NotFound(_))));
    }
}
