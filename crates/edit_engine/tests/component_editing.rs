//! End-to-end editing scenarios through the public session API

use edit_engine::{EditingSession, ErrorKind};
use serde_json::json;
use std::sync::Arc;
use template_model::{ComponentRegistry, TemplateInfo};

fn session() -> EditingSession {
    EditingSession::new(Arc::new(ComponentRegistry::builtin()))
}

fn add_and_select(session: &mut EditingSession, type_key: &str) {
    let id = session.add_component(type_key).unwrap().id();
    session.select(id).unwrap();
}

#[test]
fn test_checklist_append_adds_blank_item() {
    let mut session = session();
    add_and_select(&mut session, "checkList");

    session.append_list_element("items").unwrap();

    let items = session.current_selection().unwrap().prop("items").unwrap().clone();
    assert_eq!(
        items,
        json!([
            { "text": "檢查項目 1", "required": true },
            { "text": "檢查項目 2", "required": true },
            { "text": "", "required": false },
        ])
    );
}

#[test]
fn test_certification_form_append_adds_text_field() {
    let mut session = session();
    add_and_select(&mut session, "certificationForm");

    session.append_list_element("fields").unwrap();

    let fields = session.current_selection().unwrap().prop("fields").unwrap().clone();
    let fields = fields.as_array().unwrap();
    assert_eq!(fields[0], json!({ "type": "text", "label": "公司名稱", "required": true }));
    assert_eq!(
        fields.last().unwrap(),
        &json!({ "type": "text", "label": "", "required": false })
    );
}

#[test]
fn test_document_upload_append_adds_empty_format() {
    let mut session = session();
    add_and_select(&mut session, "documentUpload");

    session.append_list_element("acceptedFormats").unwrap();

    assert_eq!(
        session.current_selection().unwrap().prop("acceptedFormats"),
        Some(&json!(["pdf", "doc", "docx", ""]))
    );
}

#[test]
fn test_append_to_emptied_list_is_unsupported() {
    let mut session = session();
    add_and_select(&mut session, "documentUpload");
    for _ in 0..3 {
        session.remove_list_element("acceptedFormats", 0).unwrap();
    }

    let err = session.append_list_element("acceptedFormats").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedVariant);
}

#[test]
fn test_instances_of_same_type_are_isolated() {
    let mut session = session();
    let first = session.add_component("checkList").unwrap().id();
    let second = session.add_component("checkList").unwrap().id();
    session.select(first).unwrap();

    session
        .edit_list_element("items", 0, json!({ "text": "營業登記證", "required": true }))
        .unwrap();

    let untouched = session.document().get(second).unwrap().prop("items").unwrap();
    assert_eq!(untouched[0], json!({ "text": "檢查項目 1", "required": true }));
    let defaults = &session.registry().get_type("checkList").unwrap().default_props["items"];
    assert_eq!(defaults[0], json!({ "text": "檢查項目 1", "required": true }));
}

#[test]
fn test_property_keys_never_change() {
    let mut session = session();
    add_and_select(&mut session, "signature");
    let keys_before: Vec<String> = session
        .current_selection()
        .unwrap()
        .property_names()
        .map(String::from)
        .collect();

    session.edit_boolean_property("showDate", false).unwrap();
    assert!(session.edit_scalar_property("stamp", "x").is_err());

    let keys_after: Vec<String> = session
        .current_selection()
        .unwrap()
        .property_names()
        .map(String::from)
        .collect();
    assert_eq!(keys_before, keys_after);
}

#[test]
fn test_build_template_then_rearrange() {
    let mut session = session();
    session
        .update_template_info(TemplateInfo::new("供應商年度評鑑").with_category("品質管理"))
        .unwrap();
    for key in ["documentUpload", "certificationForm", "checkList", "signature"] {
        session.add_component(key).unwrap();
    }

    // drag the signature block to the top
    assert!(session.apply_drop(3, Some(0)).unwrap());
    let order: Vec<&str> = session
        .document()
        .instances()
        .iter()
        .map(|c| c.type_key())
        .collect();
    assert_eq!(order, vec!["signature", "documentUpload", "certificationForm", "checkList"]);

    session.undo().unwrap();
    assert_eq!(session.document().instances()[3].type_key(), "signature");
}
