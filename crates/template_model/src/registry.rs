//! Component registry - the catalog of component types and their defaults

use crate::{DocModelError, PropertyVariant, Props, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// A kind of block that can be placed into a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTypeDefinition {
    /// Unique key for this component kind
    pub type_key: String,
    /// Display name shown in the palette
    pub label: String,
    /// Default property values; each value's shape fixes the property's variant
    pub default_props: Props,
}

impl ComponentTypeDefinition {
    pub fn new(type_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            type_key: type_key.into(),
            label: label.into(),
            default_props: Props::new(),
        }
    }

    /// Add a default property value
    pub fn with_prop(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.default_props.insert(name.into(), value);
        self
    }

    /// Check that every list-valued default has an inferable element shape
    fn validate(&self) -> Result<()> {
        for (name, value) in &self.default_props {
            let variant = PropertyVariant::classify(value);
            if variant.is_list() && !variant.supports_append() {
                return Err(DocModelError::InvalidCatalog(format!(
                    "{}.{}: list default must start with a string or an object with 'text' or 'label' (found {:?})",
                    self.type_key, name, variant
                )));
            }
        }
        Ok(())
    }
}

/// Read-only catalog of component types, in declaration order
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    types: Vec<ComponentTypeDefinition>,
    index: HashMap<String, usize>,
}

impl ComponentRegistry {
    /// Build a registry from a list of definitions, validating the catalog
    pub fn from_definitions(types: Vec<ComponentTypeDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(types.len());
        for (position, definition) in types.iter().enumerate() {
            definition.validate()?;
            if index.insert(definition.type_key.clone(), position).is_some() {
                return Err(DocModelError::InvalidCatalog(format!(
                    "duplicate type key '{}'",
                    definition.type_key
                )));
            }
        }
        Ok(Self { types, index })
    }

    /// Parse a catalog from a JSON array of definitions
    pub fn from_json(json: &str) -> Result<Self> {
        let types: Vec<ComponentTypeDefinition> = serde_json::from_str(json)
            .map_err(|e| DocModelError::InvalidCatalog(e.to_string()))?;
        Self::from_definitions(types)
    }

    /// The built-in supplier-document catalog
    pub fn builtin() -> Self {
        let types = builtin_types();
        let index = types
            .iter()
            .enumerate()
            .map(|(position, definition)| (definition.type_key.clone(), position))
            .collect();
        Self { types, index }
    }

    /// All component types, in catalog order
    pub fn list_types(&self) -> &[ComponentTypeDefinition] {
        &self.types
    }

    /// Look up a component type by key
    pub fn get_type(&self, type_key: &str) -> Result<&ComponentTypeDefinition> {
        self.index
            .get(type_key)
            .map(|&position| &self.types[position])
            .ok_or_else(|| DocModelError::UnknownType(type_key.to_string()))
    }

    pub fn contains(&self, type_key: &str) -> bool {
        self.index.contains_key(type_key)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_types() -> Vec<ComponentTypeDefinition> {
    vec![
        ComponentTypeDefinition::new("documentUpload", "文件上傳")
            .with_prop("title", json!("文件上傳"))
            .with_prop("description", json!("請上傳相關文件"))
            .with_prop("required", json!(true))
            .with_prop("acceptedFormats", json!(["pdf", "doc", "docx"]))
            .with_prop("maxSize", json!(10)),
        ComponentTypeDefinition::new("certificationForm", "認證表單")
            .with_prop("title", json!("供應商認證表單"))
            .with_prop(
                "fields",
                json!([
                    { "type": "text", "label": "公司名稱", "required": true },
                    { "type": "text", "label": "統一編號", "required": true },
                    { "type": "date", "label": "認證日期", "required": true },
                ]),
            ),
        ComponentTypeDefinition::new("checkList", "檢查清單")
            .with_prop("title", json!("檢查清單"))
            .with_prop(
                "items",
                json!([
                    { "text": "檢查項目 1", "required": true },
                    { "text": "檢查項目 2", "required": true },
                ]),
            ),
        ComponentTypeDefinition::new("dataTable", "資料表格")
            .with_prop("title", json!("資料表格"))
            .with_prop("columns", json!(["項目", "規格", "數量"]))
            .with_prop("rows", json!(3))
            .with_prop("showBorder", json!(true)),
        ComponentTypeDefinition::new("signature", "簽核欄位")
            .with_prop("title", json!("簽核"))
            .with_prop("signers", json!(["申請人", "審核主管"]))
            .with_prop("showDate", json!(true)),
        ComponentTypeDefinition::new("textBlock", "說明文字")
            .with_prop("content", json!("請輸入說明文字"))
            .with_prop("bold", json!(false)),
        ComponentTypeDefinition::new("dateField", "日期欄位")
            .with_prop("label", json!("日期"))
            .with_prop("required", json!(false)),
    ]
}
