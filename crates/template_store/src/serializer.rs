//! Template serialization

use crate::{Result, StoreError, TemplateFile};
use template_model::TemplateDocument;

/// Serialize a template document to JSON
pub fn serialize(document: &TemplateDocument, pretty: bool) -> Result<String> {
    let file = TemplateFile::new(document.clone());
    let json = if pretty {
        serde_json::to_string_pretty(&file)?
    } else {
        serde_json::to_string(&file)?
    };
    Ok(json)
}

/// Deserialize a template document from JSON.
///
/// Duplicate instance ids are rejected while parsing the document itself.
pub fn deserialize(json: &str) -> Result<TemplateDocument> {
    let file: TemplateFile = serde_json::from_str(json)?;

    if !file.header.is_valid() {
        return Err(StoreError::InvalidFormat(format!(
            "Invalid or unsupported format: {} v{}",
            file.header.magic, file.header.version
        )));
    }

    Ok(file.template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use template_model::{ComponentRegistry, TemplateInfo};

    fn sample() -> TemplateDocument {
        let registry = ComponentRegistry::builtin();
        let mut document = TemplateDocument::new(TemplateInfo::new("供應商評鑑").with_standard("ISO 9001"));
        document.add_component(&registry, "documentUpload").unwrap();
        document.add_component(&registry, "checkList").unwrap();
        document
    }

    #[test]
    fn test_round_trip() {
        let document = sample();
        let json = serialize(&document, true).unwrap();
        let loaded = deserialize(&json).unwrap();

        assert_eq!(loaded.template_info, document.template_info);
        assert_eq!(loaded.instances(), document.instances());
    }

    #[test]
    fn test_component_wire_shape() {
        let document = sample();
        let value: Value = serde_json::from_str(&serialize(&document, false).unwrap()).unwrap();
        let first = &value["template"]["components"][0];

        assert_eq!(first["typeKey"], json!("documentUpload"));
        assert_eq!(first["label"], json!("文件上傳"));
        assert_eq!(first["id"], json!(document.ids()[0].to_string()));
        assert_eq!(first["props"]["acceptedFormats"], json!(["pdf", "doc", "docx"]));
        assert_eq!(value["template"]["templateInfo"]["standard"], json!("ISO 9001"));
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut value: Value = serde_json::from_str(&serialize(&sample(), false).unwrap()).unwrap();
        value["header"]["magic"] = json!("SOMETHING-ELSE");
        let err = deserialize(&value.to_string()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut value: Value = serde_json::from_str(&serialize(&sample(), false).unwrap()).unwrap();
        let id = value["template"]["components"][0]["id"].clone();
        value["template"]["components"][1]["id"] = id;
        let err = deserialize(&value.to_string()).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)), "{err}");
    }
}
