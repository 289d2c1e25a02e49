use graphmodel_models::catalog::{find_model, models};
use graphmodel_models::security::{AlertEvidence, DeviceEvidence};
use graphmodel_models::{find_enum, Device, DirectoryObject, Entity, OrgContact, TodoTask};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

// ── Models ───────────────────────────────────────────────────────

#[test]
fn discriminators_are_unique() {
    let mut seen = HashSet::new();
    for info in models() {
        assert!(seen.insert(info.odata_type), "duplicate {}", info.odata_type);
    }
}

#[test]
fn every_model_creates_its_own_type() {
    for info in models() {
        let model = info.create();
        assert_eq!(model.odata_type_name(), info.odata_type);
    }
}

#[test]
fn lookup_accepts_names_with_or_without_hash() {
    let with_hash = find_model("#microsoft.graph.todoTask").unwrap();
    let without = find_model("microsoft.graph.todoTask").unwrap();
    assert_eq!(with_hash.odata_type, TodoTask::ODATA_TYPE);
    assert_eq!(without.odata_type, TodoTask::ODATA_TYPE);
    assert!(find_model("#microsoft.graph.group").is_none());
}

#[test]
fn device_hierarchy_is_recorded() {
    let device = find_model(Device::ODATA_TYPE).unwrap();
    assert!(device.is_entity());
    assert!(device.derives_from(DirectoryObject::ODATA_TYPE));
    assert!(!device.derives_from(OrgContact::ODATA_TYPE));
    assert_eq!(device.bases, &[DirectoryObject::ODATA_TYPE, Entity::ODATA_TYPE]);
}

#[test]
fn complex_types_are_not_entities() {
    let body = find_model("#microsoft.graph.itemBody").unwrap();
    assert!(!body.is_entity());
    assert!(body.bases.is_empty());
}

#[test]
fn complex_types_can_form_hierarchies() {
    let device = find_model(DeviceEvidence::ODATA_TYPE).unwrap();
    assert!(!device.is_entity());
    assert_eq!(device.bases, &[AlertEvidence::ODATA_TYPE]);
    assert!(device.field_names().contains(&"verdict"));
}

#[test]
fn field_names_include_inherited_properties() {
    let names = find_model(Device::ODATA_TYPE).unwrap().field_names();
    for expected in ["id", "@odata.type", "deletedDateTime", "memberOf", "physicalIds"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn planner_lists_every_category_slot() {
    let names = find_model("#microsoft.graph.plannerCategoryDescriptions")
        .unwrap()
        .field_names();
    assert_eq!(names.iter().filter(|name| name.starts_with("category")).count(), 25);
}

// ── Enums ────────────────────────────────────────────────────────

#[test]
fn enum_lookup_ignores_case() {
    let severity = find_enum("ALERTSEVERITY").unwrap();
    assert_eq!(severity.name, "alertSeverity");
    assert_eq!(severity.code_of("high"), Some(4));
    assert_eq!(severity.code_of("catastrophic"), None);
    assert!(find_enum("noSuchEnum").is_none());
}

#[test]
fn alert_source_enums_are_indexed() {
    assert_eq!(find_enum("serviceSource").unwrap().code_of("microsoftDefenderForEndpoint"), Some(1));
    assert_eq!(find_enum("detectionSource").unwrap().code_of("antivirus"), Some(2));
    assert_eq!(find_enum("alertDetermination").unwrap().code_of("malware"), Some(2));
}

#[test]
fn strict_enums_are_flagged() {
    assert!(find_enum("lifecycleEventType").unwrap().strict);
    assert!(!find_enum("importance").unwrap().strict);
}

#[test]
fn flag_enum_codes_combine_bits() {
    let weeks = find_enum("windowsUpdateForBusinessUpdateWeeks").unwrap();
    assert!(weeks.is_flags);
    assert_eq!(weeks.code_of("firstWeek,everyWeek"), Some(2 | 32));
    assert_eq!(weeks.code_of("firstWeek,lastWeek"), None);
    assert_eq!(weeks.entries().len(), 7);
}

#[test]
fn enum_entries_keep_declaration_order() {
    let status = find_enum("taskStatus").unwrap();
    let names: Vec<&str> = status.entries().into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec!["notStarted", "inProgress", "completed", "waitingOnOthers", "deferred"]
    );
}
