use graphmodel_cli::{entity_types, enum_code, fields, inspect, inspect_file, Base, CliConfig};
use graphmodel_json::JsonOptions;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

const CONTACT: &str = r##"{
    "@odata.type": "#microsoft.graph.orgContact",
    "id": "oc-1",
    "displayName": "Dana",
    "mail": "dana@contoso.com",
    "@odata.etag": "W/\"1\"",
    "imAddresses": []
}"##;

// ── Config ───────────────────────────────────────────────────────

#[test]
fn config_fields_default_when_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graphmodel.json");
    fs::write(&path, r#"{"pretty": true}"#).unwrap();

    let config = CliConfig::load(&path).unwrap();
    assert_eq!(
        config,
        CliConfig {
            pretty: true,
            ..CliConfig::default()
        }
    );
    assert_eq!(config.base, Base::Entity);
}

#[test]
fn config_reads_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graphmodel.json");
    fs::write(
        &path,
        r#"{"base": "directoryObject", "pretty": false, "strictEnums": true}"#,
    )
    .unwrap();

    let config = CliConfig::load(&path).unwrap();
    assert_eq!(config.base, Base::DirectoryObject);
    assert_eq!(
        config.json_options(),
        JsonOptions::default().with_strict_enums(true)
    );
}

#[test]
fn missing_config_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = CliConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graphmodel.json");
    fs::write(&path, r#"{"base": "group"}"#).unwrap();
    assert!(CliConfig::load(&path).is_err());
}

// ── Inspect ──────────────────────────────────────────────────────

#[test]
fn inspect_resolves_a_single_object() {
    let inspections = inspect(CONTACT, Base::Entity, &JsonOptions::default()).unwrap();
    assert_eq!(inspections.len(), 1);

    let contact = &inspections[0];
    assert_eq!(contact.odata_type, "#microsoft.graph.orgContact");
    assert_eq!(contact.id.as_deref(), Some("oc-1"));
    assert_eq!(contact.additional_data, 2);

    let written: Value = serde_json::from_str(&contact.json).unwrap();
    assert_eq!(written["mail"], json!("dana@contoso.com"));
    assert_eq!(written["imAddresses"], json!([]));
}

#[test]
fn inspect_walks_a_collection_page() {
    let page = json!({
        "@odata.nextLink": "https://graph.microsoft.com/v1.0/contacts?$skiptoken=x",
        "value": [
            serde_json::from_str::<Value>(CONTACT).unwrap(),
            {"@odata.type": "#microsoft.graph.device", "id": "d-1"}
        ]
    });
    let inspections = inspect(&page.to_string(), Base::DirectoryObject, &JsonOptions::default()).unwrap();
    let types: Vec<&str> = inspections.iter().map(|i| i.odata_type).collect();
    assert_eq!(types, vec!["#microsoft.graph.orgContact", "#microsoft.graph.device"]);
}

#[test]
fn inspection_always_writes_the_full_model() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graphmodel.json");
    fs::write(&path, r#"{"changesOnly": true}"#).unwrap();

    let options = CliConfig::load(&path).unwrap().json_options();
    assert!(!options.backing_store_changes_only);
    let inspections = inspect(CONTACT, Base::Entity, &options).unwrap();
    let written: Value = serde_json::from_str(&inspections[0].json).unwrap();
    assert_eq!(written["displayName"], json!("Dana"));
}

#[test]
fn base_limits_which_types_resolve() {
    let inspections = inspect(CONTACT, Base::DeviceConfiguration, &JsonOptions::default()).unwrap();
    assert_eq!(inspections[0].odata_type, "#microsoft.graph.deviceConfiguration");
    assert!(inspections[0].additional_data > 2);
}

#[test]
fn inspect_reads_from_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contact.json");
    fs::write(&path, CONTACT).unwrap();

    let inspections = inspect_file(&path, Base::Entity, &JsonOptions::default().with_pretty(true)).unwrap();
    assert!(inspections[0].json.contains("\n  \"displayName\": \"Dana\""));
    assert!(inspections[0].render().starts_with("type:            #microsoft.graph.orgContact\nid:              oc-1"));
}

#[test]
fn invalid_json_is_reported() {
    let err = inspect("{not json", Base::Entity, &JsonOptions::default()).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
}

// ── Catalog queries ──────────────────────────────────────────────

#[test]
fn fields_are_sorted_and_include_base_fields() {
    let names = fields("microsoft.graph.subscription").unwrap();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(names.contains(&"id"));
    assert!(names.contains(&"notificationUrl"));
    assert!(fields("microsoft.graph.group").is_err());
}

#[test]
fn enum_lookup_reports_codes() {
    assert_eq!(enum_code("alertSeverity", "medium").unwrap(), Some(3));
    assert_eq!(enum_code("alertSeverity", "severe").unwrap(), None);
    assert!(enum_code("colour", "red").is_err());
}

#[test]
fn types_lists_only_entities() {
    let types = entity_types();
    assert!(types.contains(&"#microsoft.graph.todoTask"));
    assert!(types.contains(&"#microsoft.graph.security.alert"));
    assert!(!types.contains(&"#microsoft.graph.itemBody"));
}
