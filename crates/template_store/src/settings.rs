//! Editor settings
//!
//! Settings live in `settings.json` under the application data directory.
//! A missing file yields defaults; an unreadable one is logged and replaced
//! by defaults.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    pub history: HistorySettings,
    pub catalog: CatalogSettings,
    pub storage: StorageSettings,
}

/// Undo history settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum undo entries per editing session
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_entries: 100 }
    }
}

/// Component catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON catalog replacing the built-in component types
    pub path: Option<PathBuf>,
}

/// Template storage settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for saved templates, relative to the app data directory
    pub templates_dir: PathBuf,
    pub pretty_print: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            pretty_print: true,
        }
    }
}

/// Loads, saves, and caches editor settings
pub struct SettingsManager {
    app_data_dir: PathBuf,
    settings_path: PathBuf,
    current: EditorSettings,
}

impl SettingsManager {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let settings_path = app_data_dir.join("settings.json");
        Self {
            app_data_dir,
            settings_path,
            current: EditorSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Absolute templates directory
    pub fn templates_dir(&self) -> PathBuf {
        self.app_data_dir.join(&self.current.storage.templates_dir)
    }

    fn parse_or_default(content: &str) -> EditorSettings {
        match serde_json::from_str::<EditorSettings>(content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                EditorSettings::default()
            }
        }
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&EditorSettings> {
        self.current = if self.settings_path.exists() {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            Self::parse_or_default(&content)
        } else {
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    /// Load settings synchronously (for use during startup)
    pub fn load_sync(&mut self) -> Result<&EditorSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            Self::parse_or_default(&content)
        } else {
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    pub fn get(&self) -> &EditorSettings {
        &self.current
    }

    /// Replace settings and save to disk
    pub fn update_sync(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    pub fn reset_sync(&mut self) -> Result<&EditorSettings> {
        self.current = EditorSettings::default();
        self.save_sync()?;
        Ok(&self.current)
    }
}
