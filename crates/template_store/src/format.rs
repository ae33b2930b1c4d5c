//! On-disk template format

use serde::{Deserialize, Serialize};
use template_model::TemplateDocument;

/// File format version
pub const FORMAT_VERSION: u32 = 1;

/// File extension for saved templates
pub const FILE_EXTENSION: &str = "tpl.json";

/// File header for format identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHeader {
    pub magic: String,
    pub version: u32,
    /// When the file was written (RFC 3339)
    pub saved_at: String,
}

impl FileHeader {
    pub const MAGIC: &'static str = "COMPONENT-TEMPLATE";

    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: FORMAT_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.magic == Self::MAGIC && self.version <= FORMAT_VERSION
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete file contents: header plus `{templateInfo, components}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub header: FileHeader,
    pub template: TemplateDocument,
}

impl TemplateFile {
    pub fn new(template: TemplateDocument) -> Self {
        Self {
            header: FileHeader::new(),
            template,
        }
    }
}
