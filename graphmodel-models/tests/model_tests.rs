use graphmodel_abstractions::enums::GraphFlags;
use graphmodel_abstractions::serialization::Parsable;
use graphmodel_abstractions::SerializationError;
use graphmodel_json::{parse, parse_collection, parse_dyn, parse_with, to_json_string, to_json_value, JsonOptions};
use graphmodel_models::enums::{
    AutomaticUpdateMode, BodyType, ChangeType, Enablement, Importance, LifecycleEventType, PhoneType,
    StateManagementSetting, TaskStatus, WindowsUpdateForBusinessUpdateWeeks,
};
use graphmodel_models::security::{
    Alert, AlertClassification, AlertDetermination, AlertEvidence, AlertSeverity, AlertStatus, DetectionSource,
    DeviceEvidence, DeviceHealthStatus, DeviceRiskScore, EvidenceRole, EvidenceVerdict, ServiceSource,
};
use graphmodel_models::{
    ChangeNotificationCollection, DateTimeTimeZone, Device, DeviceConfiguration, DirectoryObject,
    DirectoryObjectModel, Entity, EntityModel, ItemBody, OrgContact, PlannerCategoryDescriptions, Subscription,
    TodoTask, Windows10EndpointProtectionConfiguration, WindowsUpdateForBusinessConfiguration,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

const TASK: &str = r##"{
    "@odata.type": "#microsoft.graph.todoTask",
    "@odata.etag": "W/\"xzyPKP0BiUGgld+lMKXwbQAAnBoTIw==\"",
    "id": "AAMkAGVmMDEzMTM4LTZmYWUtNDdkNC1hMDZiLTU1OGY5OTZhYmY4OABGAAAAAAAiQ8W967B7TKBjgx9rVEURBwAiIsqMbYjsT5e-T7KzowPTAAAAAAESAAAiIsqMbYjsT5e-T7KzowPTAAAnZ8gaAAA=",
    "title": "Buy milk",
    "importance": "high",
    "status": "notStarted",
    "isReminderOn": false,
    "categories": ["Errands"],
    "createdDateTime": "2020-07-08T11:15:19.9359889Z",
    "lastModifiedDateTime": "2020-07-08T11:15:20.1148396Z",
    "body": {"content": "Two litres", "contentType": "text"},
    "dueDateTime": {"dateTime": "2020-07-09T00:00:00.0000000", "timeZone": "UTC"},
    "checklistItems": [
        {"id": "c1", "displayName": "Check fridge", "isChecked": true}
    ],
    "linkedResources": [
        {"id": "l1", "applicationName": "Outlook", "displayName": "Mail", "webUrl": "https://outlook.office.com/"}
    ]
}"##;

fn task() -> TodoTask {
    parse(TASK, TodoTask::create_from_discriminator_value).unwrap()
}

// ── To Do ────────────────────────────────────────────────────────

#[test]
fn todo_task_parses_scalars_and_nested_types() {
    let task = task();

    assert_eq!(task.title().as_deref(), Some("Buy milk"));
    assert_eq!(task.importance(), Some(Importance::High));
    assert_eq!(task.status(), Some(TaskStatus::NotStarted));
    assert_eq!(task.is_reminder_on(), Some(false));
    assert_eq!(task.categories(), Some(vec!["Errands".to_string()]));
    assert!(task.id().unwrap().starts_with("AAMkAGVmMDEz"));

    let body = task.body().unwrap();
    assert_eq!(body.content().as_deref(), Some("Two litres"));
    assert_eq!(body.content_type(), Some(BodyType::Text));

    let due = task.due_date_time().unwrap();
    assert_eq!(due.date_time().as_deref(), Some("2020-07-09T00:00:00.0000000"));
    assert_eq!(due.time_zone().as_deref(), Some("UTC"));

    let items = task.checklist_items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_name().as_deref(), Some("Check fridge"));
    assert_eq!(items[0].is_checked(), Some(true));

    let links = task.linked_resources().unwrap();
    assert_eq!(links[0].application_name().as_deref(), Some("Outlook"));
}

#[test]
fn annotations_are_kept_as_additional_data() {
    let task = task();
    let extra = task.additional_data();
    assert_eq!(extra.len(), 1);
    assert!(extra.contains_key("@odata.etag"));
}

#[test]
fn new_task_carries_its_discriminator() {
    let task = TodoTask::new();
    assert_eq!(task.odata_type().as_deref(), Some(TodoTask::ODATA_TYPE));
    assert_eq!(task.odata_type_name(), TodoTask::ODATA_TYPE);
    assert_eq!(task.id(), None);
}

#[test]
fn entity_accessors_reach_the_shared_store() {
    let mut task = TodoTask::new();
    task.set_id(Some("t-1".into()));
    assert_eq!(task.entity().id().as_deref(), Some("t-1"));
    assert_eq!(task.backing_store().enumerate().len(), 2);
}

#[test]
fn patch_body_holds_only_changed_properties() {
    let mut task = task();
    task.set_status(Some(TaskStatus::Completed));
    task.set_completed_date_time(Some(DateTimeTimeZone::at("2020-07-09T08:00:00", "UTC")));
    task.set_categories(None);

    let patch = to_json_value(&task, &JsonOptions::changes_only()).unwrap();
    assert_eq!(patch["status"], json!("completed"));
    assert_eq!(patch["categories"], json!(null));
    assert_eq!(patch["completedDateTime"]["dateTime"], json!("2020-07-09T08:00:00"));
    assert_eq!(patch["completedDateTime"]["timeZone"], json!("UTC"));
    assert!(patch.get("title").is_none());
    assert!(patch.get("body").is_none());
    assert!(patch.get("@odata.etag").is_none());
}

#[test]
fn patch_carries_whole_edited_body() {
    let mut task = task();
    let mut body = task.body().unwrap();
    body.set_content(Some("Three litres".into()));
    task.set_body(Some(body));

    let patch = to_json_value(&task, &JsonOptions::changes_only()).unwrap();
    assert_eq!(patch["body"]["content"], json!("Three litres"));
    assert_eq!(patch["body"]["contentType"], json!("text"));
    assert!(patch.get("title").is_none());
}

#[test]
fn resetting_nested_values_writes_them_in_full() {
    let mut task = task();
    task.set_checklist_items(task.checklist_items());
    task.set_body(task.body());

    let patch = to_json_value(&task, &JsonOptions::changes_only()).unwrap();
    assert_eq!(patch["body"]["content"], json!("Two litres"));
    assert_eq!(patch["body"]["contentType"], json!("text"));
    let item = &patch["checklistItems"][0];
    assert_eq!(item["id"], json!("c1"));
    assert_eq!(item["displayName"], json!("Check fridge"));
    assert_eq!(item["isChecked"], json!(true));
    assert!(patch.get("linkedResources").is_none());
}

#[test]
fn full_write_restores_the_payload() {
    let task = task();
    let written = to_json_value(&task, &JsonOptions::default()).unwrap();
    let input: serde_json::Value = serde_json::from_str(TASK).unwrap();

    assert_eq!(written["title"], input["title"]);
    assert_eq!(written["@odata.etag"], input["@odata.etag"]);
    assert_eq!(written["dueDateTime"]["timeZone"], json!("UTC"));
    assert_eq!(written["checklistItems"][0]["isChecked"], json!(true));
    assert_eq!(written["createdDateTime"].as_str().map(|s| &s[..19]), Some("2020-07-08T11:15:19"));
}

#[test]
fn item_body_reports_html() {
    let mut body = ItemBody::new();
    body.set_content(Some("<p>hi</p>".into()));
    body.set_content_type(Some(BodyType::Html));
    let value = to_json_value(&body, &JsonOptions::default()).unwrap();
    assert_eq!(
        value,
        json!({"@odata.type": "#microsoft.graph.itemBody", "content": "<p>hi</p>", "contentType": "html"})
    );
}

// ── Polymorphism ─────────────────────────────────────────────────

#[test]
fn entity_factory_resolves_derived_types() {
    let model = parse_dyn(TASK, Entity::create_from_discriminator_value, &JsonOptions::default()).unwrap();
    assert!(model.is::<TodoTask>());
    let task = model.downcast_ref::<TodoTask>().unwrap();
    assert_eq!(task.title().as_deref(), Some("Buy milk"));
}

#[test]
fn unknown_discriminator_falls_back_to_base() {
    let model = parse_dyn(
        r##"{"@odata.type": "#microsoft.graph.notebook", "id": "n1", "displayName": "Work"}"##,
        Entity::create_from_discriminator_value,
        &JsonOptions::default(),
    )
    .unwrap();

    let entity = model.downcast_ref::<Entity>().unwrap();
    assert_eq!(entity.id().as_deref(), Some("n1"));
    assert_eq!(entity.odata_type().as_deref(), Some("#microsoft.graph.notebook"));
    assert_eq!(model.additional_data()["displayName"], json!("Work"));
}

#[test]
fn discriminator_outside_the_hierarchy_is_ignored() {
    let model = parse_dyn(TASK, DirectoryObject::create_from_discriminator_value, &JsonOptions::default()).unwrap();
    assert!(model.is::<DirectoryObject>());
    assert!(model.additional_data().contains_key("title"));
}

#[test]
fn typed_parse_rejects_other_concrete_types() {
    let err = parse::<Device>(TASK, Entity::create_from_discriminator_value).unwrap_err();
    assert!(matches!(err, SerializationError::TypeMismatch { found: "#microsoft.graph.todoTask", .. }));
}

#[test]
fn device_member_of_holds_mixed_directory_objects() {
    let device: Device = parse(
        r##"{
            "@odata.type": "#microsoft.graph.device",
            "id": "d-1",
            "deviceId": "4c299165-6e8f-4b45-a5ba-c5d250a707ff",
            "displayName": "LAPTOP-7",
            "accountEnabled": true,
            "physicalIds": ["[USER-GID]:abc", "[GID]:def"],
            "alternativeSecurityIds": [{"type": 2, "identityProvider": null, "key": "WAA1ADAAOQA="}],
            "deletedDateTime": "2023-01-05T10:00:00Z",
            "memberOf": [
                {"@odata.type": "#microsoft.graph.orgContact", "id": "oc-1", "mail": "x@contoso.com"},
                {"@odata.type": "#microsoft.graph.group", "id": "g-1", "displayName": "Devices"}
            ]
        }"##,
        Device::create_from_discriminator_value,
    )
    .unwrap();

    assert_eq!(device.display_name().as_deref(), Some("LAPTOP-7"));
    assert_eq!(device.account_enabled(), Some(true));
    assert_eq!(device.physical_ids().map(|ids| ids.len()), Some(2));
    assert!(device.deleted_date_time().is_some());
    assert_eq!(device.directory_object().id().as_deref(), Some("d-1"));

    let ids = device.alternative_security_ids().unwrap();
    assert_eq!(ids[0].r#type(), Some(2));
    assert_eq!(ids[0].identity_provider(), None);

    let members = device.member_of().unwrap();
    assert_eq!(members.len(), 2);
    let contact = members[0].downcast_ref::<OrgContact>().unwrap();
    assert_eq!(contact.mail().as_deref(), Some("x@contoso.com"));
    let group = members[1].downcast_ref::<DirectoryObject>().unwrap();
    assert_eq!(group.odata_type().as_deref(), Some("#microsoft.graph.group"));
    assert_eq!(members[1].additional_data()["displayName"], json!("Devices"));
}

#[test]
fn org_contact_reads_phones_addresses_and_manager() {
    let contact: OrgContact = parse(
        r##"{
            "id": "oc-9",
            "displayName": "Dana",
            "onPremisesSyncEnabled": true,
            "proxyAddresses": ["SMTP:dana@contoso.com"],
            "phones": [{"type": "mobile", "number": "+1 555 0100"}, {"type": "pager", "number": "42"}],
            "addresses": [{"city": "Redmond", "countryOrRegion": "US", "postalCode": "98052"}],
            "manager": {"@odata.type": "#microsoft.graph.orgContact", "displayName": "Boss"}
        }"##,
        OrgContact::create_from_discriminator_value,
    )
    .unwrap();

    let phones = contact.phones().unwrap();
    assert_eq!(phones[0].r#type(), Some(PhoneType::Mobile));
    assert_eq!(phones[1].r#type(), Some(PhoneType::Pager));
    assert_eq!(contact.addresses().unwrap()[0].city().as_deref(), Some("Redmond"));

    let manager = contact.manager().unwrap();
    let boss = manager.downcast_ref::<OrgContact>().unwrap();
    assert_eq!(boss.display_name().as_deref(), Some("Boss"));
}

// ── Device configuration ─────────────────────────────────────────

#[test]
fn update_ring_parses_flags_and_enums() {
    let model = parse_dyn(
        r##"{
            "@odata.type": "#microsoft.graph.windowsUpdateForBusinessConfiguration",
            "id": "ring-1",
            "displayName": "Pilot ring",
            "version": 3,
            "automaticUpdateMode": "autoInstallAtMaintenanceTime",
            "businessReadyUpdatesOnly": "all",
            "featureUpdatesDeferralPeriodInDays": 30,
            "qualityUpdatesPaused": false,
            "updateWeeks": "firstWeek,thirdWeek",
            "userPauseAccess": "disabled"
        }"##,
        DeviceConfiguration::create_from_discriminator_value,
        &JsonOptions::default(),
    )
    .unwrap();

    let ring = model.downcast_ref::<WindowsUpdateForBusinessConfiguration>().unwrap();
    assert_eq!(ring.device_configuration().display_name().as_deref(), Some("Pilot ring"));
    assert_eq!(ring.device_configuration().version(), Some(3));
    assert_eq!(ring.automatic_update_mode(), Some(AutomaticUpdateMode::AutoInstallAtMaintenanceTime));
    assert_eq!(ring.feature_updates_deferral_period_in_days(), Some(30));
    assert_eq!(ring.user_pause_access(), Some(Enablement::Disabled));
    assert_eq!(
        ring.update_weeks(),
        Some(WindowsUpdateForBusinessUpdateWeeks::FIRST_WEEK | WindowsUpdateForBusinessUpdateWeeks::THIRD_WEEK)
    );
}

#[test]
fn update_weeks_write_as_a_list() {
    let mut ring = WindowsUpdateForBusinessConfiguration::new();
    ring.set_update_weeks(Some(
        WindowsUpdateForBusinessUpdateWeeks::SECOND_WEEK | WindowsUpdateForBusinessUpdateWeeks::FOURTH_WEEK,
    ));
    let value = to_json_value(&ring, &JsonOptions::default()).unwrap();
    assert_eq!(value["updateWeeks"], json!("secondWeek,fourthWeek"));
    assert_eq!(value["@odata.type"], json!(WindowsUpdateForBusinessConfiguration::ODATA_TYPE));
}

#[test]
fn endpoint_protection_nests_firewall_profiles() {
    let profile: Windows10EndpointProtectionConfiguration = parse(
        r##"{
            "@odata.type": "#microsoft.graph.windows10EndpointProtectionConfiguration",
            "firewallBlockStatefulFTP": true,
            "firewallProfileDomain": {
                "firewallEnabled": "allowed",
                "stealthModeBlocked": true,
                "inboundConnectionsBlocked": false
            },
            "firewallProfilePublic": {"firewallEnabled": "blocked"},
            "defenderScanType": "full"
        }"##,
        DeviceConfiguration::create_from_discriminator_value,
    )
    .unwrap();

    assert_eq!(profile.firewall_block_stateful_ftp(), Some(true));
    let domain = profile.firewall_profile_domain().unwrap();
    assert_eq!(domain.firewall_enabled(), Some(StateManagementSetting::Allowed));
    assert_eq!(domain.stealth_mode_blocked(), Some(true));
    assert_eq!(domain.inbound_connections_blocked(), Some(false));
    assert!(profile.firewall_profile_private().is_none());
    assert_eq!(
        profile.firewall_profile_public().and_then(|p| p.firewall_enabled()),
        Some(StateManagementSetting::Blocked)
    );
    assert_eq!(profile.additional_data()["defenderScanType"], json!("full"));
}

// ── Subscriptions and notifications ──────────────────────────────

#[test]
fn subscription_change_types_split_the_wire_list() {
    let mut subscription = Subscription::new();
    subscription.set_change_type(Some("created, updated,bogus".into()));
    assert_eq!(subscription.change_types(), vec![ChangeType::Created, ChangeType::Updated]);

    subscription.set_change_types(&[ChangeType::Updated, ChangeType::Deleted]);
    assert_eq!(subscription.change_type().as_deref(), Some("updated,deleted"));
}

#[test]
fn notification_batch_parses_lifecycle_events() {
    let batch: ChangeNotificationCollection = parse(
        r#"{
            "validationTokens": ["eyJ0eXAi"],
            "value": [
                {
                    "subscriptionId": "7f105c7d-2dc5-4530-97cd-4e7ae6534c07",
                    "tenantId": "84bd8158-6d4d-4958-8b9f-9d6445542f95",
                    "clientState": "secret",
                    "lifecycleEvent": "reauthorizationRequired",
                    "subscriptionExpirationDateTime": "2024-06-01T11:23:45.9356913+00:00"
                },
                {
                    "changeType": "updated",
                    "resource": "Users/abc/Messages/def",
                    "subscriptionId": "7f105c7d-2dc5-4530-97cd-4e7ae6534c07"
                }
            ]
        }"#,
        ChangeNotificationCollection::create_from_discriminator_value,
    )
    .unwrap();

    assert_eq!(batch.validation_tokens(), Some(vec!["eyJ0eXAi".to_string()]));
    let notifications = batch.value().unwrap();
    assert_eq!(notifications.len(), 2);

    let lifecycle = &notifications[0];
    assert!(lifecycle.is_lifecycle());
    assert_eq!(lifecycle.lifecycle_event(), Some(LifecycleEventType::ReauthorizationRequired));
    assert_eq!(
        lifecycle.tenant_id().map(|id| id.to_string()),
        Some("84bd8158-6d4d-4958-8b9f-9d6445542f95".to_string())
    );

    assert!(!notifications[1].is_lifecycle());
    assert_eq!(notifications[1].change_type(), Some(ChangeType::Updated));
}

#[test]
fn unknown_lifecycle_event_is_an_error() {
    let err = parse::<ChangeNotificationCollection>(
        r#"{"value": [{"lifecycleEvent": "subscriptionPaused"}]}"#,
        ChangeNotificationCollection::create_from_discriminator_value,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SerializationError::UnknownEnumValue { enum_name: "lifecycleEventType", .. }
    ));
}

#[test]
fn bad_subscription_id_is_invalid() {
    let err = parse::<ChangeNotificationCollection>(
        r#"{"value": [{"subscriptionId": "not-a-guid"}]}"#,
        ChangeNotificationCollection::create_from_discriminator_value,
    )
    .unwrap_err();
    assert!(matches!(err, SerializationError::InvalidValue { expected: "uuid", .. }));
}

// ── Security alerts ──────────────────────────────────────────────

const ALERT: &str = r##"{
    "@odata.type": "#microsoft.graph.security.alert",
    "id": "da637551227677560813_-961444813",
    "providerAlertId": "da637551227677560813_-961444813",
    "incidentId": "28282",
    "status": "new",
    "severity": "low",
    "classification": "someNewClassification",
    "serviceSource": "microsoftDefenderForEndpoint",
    "title": "Suspicious execution of hidden file",
    "mitreTechniques": ["T1564.001"],
    "createdDateTime": "2021-04-27T12:19:27.7211305Z",
    "comments": [
        {"comment": "Demo comment", "createdByDisplayName": "secAdmin@contoso.onmicrosoft.com", "createdDateTime": "2021-09-30T12:07:37.2756993Z"}
    ]
}"##;

#[test]
fn alert_parses_with_lenient_enums() {
    let alert: Alert = parse(ALERT, Alert::create_from_discriminator_value).unwrap();
    assert_eq!(alert.status(), Some(AlertStatus::New));
    assert_eq!(alert.severity(), Some(AlertSeverity::Low));
    assert_eq!(alert.classification(), None);
    assert_eq!(alert.mitre_techniques(), Some(vec!["T1564.001".to_string()]));
    assert_eq!(
        alert.comments().unwrap()[0].comment().as_deref(),
        Some("Demo comment")
    );
}

#[test]
fn strict_option_rejects_unknown_alert_values() {
    let strict = JsonOptions::default().with_strict_enums(true);
    let err = parse_with::<Alert>(ALERT, Alert::create_from_discriminator_value, &strict).unwrap_err();
    assert!(matches!(
        err,
        SerializationError::UnknownEnumValue { enum_name: "alertClassification", .. }
    ));
}

#[test]
fn alert_page_resolves_through_entity_factory() {
    let page = parse_collection::<Alert>(
        &format!(r#"{{"@odata.count": 1, "value": [{ALERT}]}}"#),
        Entity::create_from_discriminator_value,
    )
    .unwrap();
    assert_eq!(page.count, Some(1));
    assert_eq!(page.value[0].incident_id().as_deref(), Some("28282"));
}

#[test]
fn resolving_an_alert_writes_a_small_patch() {
    let mut alert: Alert = parse(ALERT, Alert::create_from_discriminator_value).unwrap();
    alert.set_status(Some(AlertStatus::Resolved));
    alert.set_classification(Some(AlertClassification::FalsePositive));

    let patch = to_json_value(&alert, &JsonOptions::changes_only()).unwrap();
    assert_eq!(patch, json!({"status": "resolved", "classification": "falsePositive"}));
}

const ALERT_WITH_EVIDENCE: &str = r##"{
    "@odata.type": "#microsoft.graph.security.alert",
    "id": "da-1",
    "serviceSource": "microsoftDefenderForEndpoint",
    "detectionSource": "antivirus",
    "determination": "malware",
    "evidence": [
        {
            "@odata.type": "#microsoft.graph.security.deviceEvidence",
            "createdDateTime": "2022-01-27T16:52:09.49Z",
            "verdict": "suspicious",
            "remediationStatus": "none",
            "roles": ["compromised", "somethingNew"],
            "tags": [],
            "azureAdDeviceId": "f18bd540-d5e4-46e0-8ddd-3d03a59e4e14",
            "deviceDnsName": "yonif-lap3.middleeast.corp.contoso.com",
            "healthStatus": "active",
            "riskScore": "high",
            "osBuild": 22424,
            "osPlatform": "Windows11",
            "rbacGroupId": 75,
            "ipInterfaces": ["1.1.1.1"]
        },
        {
            "@odata.type": "#microsoft.graph.security.userEvidence",
            "verdict": "unknown",
            "userAccount": {"accountName": "tali"}
        },
        {
            "@odata.type": "#microsoft.graph.todoTask",
            "title": "not evidence"
        }
    ]
}"##;

#[test]
fn alert_reads_source_and_determination_enums() {
    let alert: Alert = parse(ALERT_WITH_EVIDENCE, Alert::create_from_discriminator_value).unwrap();
    assert_eq!(alert.service_source(), Some(ServiceSource::MicrosoftDefenderForEndpoint));
    assert_eq!(alert.detection_source(), Some(DetectionSource::Antivirus));
    assert_eq!(alert.determination(), Some(AlertDetermination::Malware));
}

#[test]
fn evidence_dispatches_on_discriminator() {
    let alert: Alert = parse(ALERT_WITH_EVIDENCE, Alert::create_from_discriminator_value).unwrap();
    let evidence = alert.evidence().unwrap();
    assert_eq!(evidence.len(), 3);

    let device = evidence[0].downcast_ref::<DeviceEvidence>().unwrap();
    assert_eq!(device.device_dns_name().as_deref(), Some("yonif-lap3.middleeast.corp.contoso.com"));
    assert_eq!(device.health_status(), Some(DeviceHealthStatus::Active));
    assert_eq!(device.risk_score(), Some(DeviceRiskScore::High));
    assert_eq!(device.os_build(), Some(22424));
    assert_eq!(device.rbac_group_id(), Some(75));
    assert_eq!(device.alert_evidence().verdict(), Some(EvidenceVerdict::Suspicious));
    assert_eq!(device.alert_evidence().roles(), Some(vec![EvidenceRole::Compromised]));

    let user = evidence[1].downcast_ref::<AlertEvidence>().unwrap();
    assert_eq!(user.odata_type().as_deref(), Some("#microsoft.graph.security.userEvidence"));
    assert!(evidence[1].additional_data().contains_key("userAccount"));

    assert!(evidence[2].is::<AlertEvidence>());
    assert!(evidence[2].additional_data().contains_key("title"));
}

#[test]
fn evidence_writes_back_with_its_own_type() {
    let alert: Alert = parse(ALERT_WITH_EVIDENCE, Alert::create_from_discriminator_value).unwrap();
    let written = to_json_value(&alert, &JsonOptions::default()).unwrap();

    let device = &written["evidence"][0];
    assert_eq!(device["@odata.type"], json!("#microsoft.graph.security.deviceEvidence"));
    assert_eq!(device["roles"], json!(["compromised"]));
    assert_eq!(device["osBuild"], json!(22424));
    assert_eq!(written["evidence"][1]["userAccount"], json!({"accountName": "tali"}));
    assert_eq!(written["serviceSource"], json!("microsoftDefenderForEndpoint"));
}

// ── Planner ──────────────────────────────────────────────────────

#[test]
fn planner_categories_map_to_slots() {
    let descriptions: PlannerCategoryDescriptions = parse(
        r#"{"category1": "Red flag", "category25": "Pink", "category26": "overflow"}"#,
        PlannerCategoryDescriptions::create_from_discriminator_value,
    )
    .unwrap();

    assert_eq!(
        descriptions.categories(),
        vec![(1, "Red flag".to_string()), (25, "Pink".to_string())]
    );
    assert_eq!(descriptions.category(2), None);
    assert_eq!(descriptions.additional_data()["category26"], json!("overflow"));
}

#[test]
fn planner_rejects_out_of_range_slots() {
    let mut descriptions = PlannerCategoryDescriptions::new();
    assert!(!descriptions.set_category(0, Some("zero".into())));
    assert!(!descriptions.set_category(26, Some("too far".into())));
    assert_eq!(descriptions.category(0), None);
    assert!(descriptions.categories().is_empty());
}

#[test]
fn cleared_category_writes_null_in_patch() {
    let mut descriptions: PlannerCategoryDescriptions = parse(
        r#"{"category3": "Blue", "category4": "Green"}"#,
        PlannerCategoryDescriptions::create_from_discriminator_value,
    )
    .unwrap();
    descriptions.set_category(3, None);

    let patch = to_json_value(&descriptions, &JsonOptions::changes_only()).unwrap();
    assert_eq!(patch, json!({"category3": null}));
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn task_title_survives_a_write_and_parse(title in "\\PC{0,40}") {
        let mut task = TodoTask::new();
        task.set_title(Some(title.clone()));
        let text = to_json_string(&task, &JsonOptions::default()).unwrap();
        let back: TodoTask = parse(&text, TodoTask::create_from_discriminator_value).unwrap();
        prop_assert_eq!(back.title(), Some(title));
    }

    #[test]
    fn update_week_flags_render_and_parse(bits in 1u32..128) {
        let weeks = WindowsUpdateForBusinessUpdateWeeks::from_flag_bits(bits);
        prop_assert_eq!(WindowsUpdateForBusinessUpdateWeeks::parse_flags(&weeks.render()), Some(weeks));
    }

    #[test]
    fn only_touched_slots_appear_in_patch(slots in proptest::collection::btree_set(1usize..=25, 0..6)) {
        let mut descriptions: PlannerCategoryDescriptions =
            parse("{}", PlannerCategoryDescriptions::create_from_discriminator_value).unwrap();
        for slot in &slots {
            descriptions.set_category(*slot, Some(format!("label {slot}")));
        }
        let patch = to_json_value(&descriptions, &JsonOptions::changes_only()).unwrap();
        let written = patch.as_object().map(|map| map.len()).unwrap_or_default();
        prop_assert_eq!(written, slots.len());
    }
}
