use super::{
    AlertClassification, AlertDetermination, AlertEvidence, AlertSeverity, AlertStatus, DetectionSource, ServiceSource,
};
use crate::entity::{entity_model, Entity};
use crate::macros::{leaf_factory, properties};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, Parsable, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

/// A potential threat surfaced by one of the Microsoft 365 Defender
/// products.
#[derive(Debug, Clone)]
pub struct Alert {
    pub(crate) entity: Entity,
}

impl Alert {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.security.alert";

    #[must_use]
    pub fn new() -> Self {
        Self {
            entity: Entity::typed(Self::ODATA_TYPE),
        }
    }

    properties! {
        "actorDisplayName" => actor_display_name, set_actor_display_name: String;
        "alertPolicyId" => alert_policy_id, set_alert_policy_id: String;
        "alertWebUrl" => alert_web_url, set_alert_web_url: String;
        "assignedTo" => assigned_to, set_assigned_to: String;
        "category" => category, set_category: String;
        "classification" => classification, set_classification: AlertClassification;
        "comments" => comments, set_comments: Vec<AlertComment>;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "description" => description, set_description: String;
        "detectionSource" => detection_source, set_detection_source: DetectionSource;
        "detectorId" => detector_id, set_detector_id: String;
        "determination" => determination, set_determination: AlertDetermination;
        /// Evidence items; each is an [`AlertEvidence`] or one of its subtypes.
        "evidence" => evidence, set_evidence: Vec<Box<dyn Parsable>>;
        "firstActivityDateTime" => first_activity_date_time, set_first_activity_date_time: DateTime<FixedOffset>;
        "incidentId" => incident_id, set_incident_id: String;
        "incidentWebUrl" => incident_web_url, set_incident_web_url: String;
        "lastActivityDateTime" => last_activity_date_time, set_last_activity_date_time: DateTime<FixedOffset>;
        "lastUpdateDateTime" => last_update_date_time, set_last_update_date_time: DateTime<FixedOffset>;
        /// MITRE ATT&CK technique ids, e.g. `T1059.001`.
        "mitreTechniques" => mitre_techniques, set_mitre_techniques: Vec<String>;
        "productName" => product_name, set_product_name: String;
        "providerAlertId" => provider_alert_id, set_provider_alert_id: String;
        "recommendedActions" => recommended_actions, set_recommended_actions: String;
        "resolvedDateTime" => resolved_date_time, set_resolved_date_time: DateTime<FixedOffset>;
        "serviceSource" => service_source, set_service_source: ServiceSource;
        "severity" => severity, set_severity: AlertSeverity;
        "status" => status, set_status: AlertStatus;
        "systemTags" => system_tags, set_system_tags: Vec<String>;
        "tenantId" => tenant_id, set_tenant_id: String;
        "threatDisplayName" => threat_display_name, set_threat_display_name: String;
        "threatFamilyName" => threat_family_name, set_threat_family_name: String;
        "title" => title, set_title: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.entity.write_fields(writer)?;
        writer.write_string_value(Some("actorDisplayName"), self.actor_display_name().as_deref())?;
        writer.write_string_value(Some("alertPolicyId"), self.alert_policy_id().as_deref())?;
        writer.write_string_value(Some("alertWebUrl"), self.alert_web_url().as_deref())?;
        writer.write_string_value(Some("assignedTo"), self.assigned_to().as_deref())?;
        writer.write_string_value(Some("category"), self.category().as_deref())?;
        writer.write_enum_value(Some("classification"), self.classification())?;
        writer.write_collection_of_objects(Some("comments"), self.comments().as_deref())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time())?;
        writer.write_string_value(Some("description"), self.description().as_deref())?;
        writer.write_enum_value(Some("detectionSource"), self.detection_source())?;
        writer.write_string_value(Some("detectorId"), self.detector_id().as_deref())?;
        writer.write_enum_value(Some("determination"), self.determination())?;
        writer.write_collection_of_boxed_objects(Some("evidence"), self.evidence().as_deref())?;
        writer.write_date_time_value(Some("firstActivityDateTime"), self.first_activity_date_time())?;
        writer.write_string_value(Some("incidentId"), self.incident_id().as_deref())?;
        writer.write_string_value(Some("incidentWebUrl"), self.incident_web_url().as_deref())?;
        writer.write_date_time_value(Some("lastActivityDateTime"), self.last_activity_date_time())?;
        writer.write_date_time_value(Some("lastUpdateDateTime"), self.last_update_date_time())?;
        writer.write_collection_of_string_values(Some("mitreTechniques"), self.mitre_techniques().as_deref())?;
        writer.write_string_value(Some("productName"), self.product_name().as_deref())?;
        writer.write_string_value(Some("providerAlertId"), self.provider_alert_id().as_deref())?;
        writer.write_string_value(Some("recommendedActions"), self.recommended_actions().as_deref())?;
        writer.write_date_time_value(Some("resolvedDateTime"), self.resolved_date_time())?;
        writer.write_enum_value(Some("serviceSource"), self.service_source())?;
        writer.write_enum_value(Some("severity"), self.severity())?;
        writer.write_enum_value(Some("status"), self.status())?;
        writer.write_collection_of_string_values(Some("systemTags"), self.system_tags().as_deref())?;
        writer.write_string_value(Some("tenantId"), self.tenant_id().as_deref())?;
        writer.write_string_value(Some("threatDisplayName"), self.threat_display_name().as_deref())?;
        writer.write_string_value(Some("threatFamilyName"), self.threat_family_name().as_deref())?;
        writer.write_string_value(Some("title"), self.title().as_deref())
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for Alert {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<Alert>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<Alert>::inherit(Entity::field_deserializers(), |alert| &mut alert.entity);
            fields
                .string("actorDisplayName", Alert::set_actor_display_name)
                .string("alertPolicyId", Alert::set_alert_policy_id)
                .string("alertWebUrl", Alert::set_alert_web_url)
                .string("assignedTo", Alert::set_assigned_to)
                .string("category", Alert::set_category)
                .enumeration("classification", Alert::set_classification)
                .objects("comments", AlertComment::create_from_discriminator_value, Alert::set_comments)
                .date_time("createdDateTime", Alert::set_created_date_time)
                .string("description", Alert::set_description)
                .enumeration("detectionSource", Alert::set_detection_source)
                .string("detectorId", Alert::set_detector_id)
                .enumeration("determination", Alert::set_determination)
                .polymorphic_collection(
                    "evidence",
                    AlertEvidence::create_from_discriminator_value,
                    Alert::set_evidence,
                )
                .date_time("firstActivityDateTime", Alert::set_first_activity_date_time)
                .string("incidentId", Alert::set_incident_id)
                .string("incidentWebUrl", Alert::set_incident_web_url)
                .date_time("lastActivityDateTime", Alert::set_last_activity_date_time)
                .date_time("lastUpdateDateTime", Alert::set_last_update_date_time)
                .strings("mitreTechniques", Alert::set_mitre_techniques)
                .string("productName", Alert::set_product_name)
                .string("providerAlertId", Alert::set_provider_alert_id)
                .string("recommendedActions", Alert::set_recommended_actions)
                .date_time("resolvedDateTime", Alert::set_resolved_date_time)
                .enumeration("serviceSource", Alert::set_service_source)
                .enumeration("severity", Alert::set_severity)
                .enumeration("status", Alert::set_status)
                .strings("systemTags", Alert::set_system_tags)
                .string("tenantId", Alert::set_tenant_id)
                .string("threatDisplayName", Alert::set_threat_display_name)
                .string("threatFamilyName", Alert::set_threat_family_name)
                .string("title", Alert::set_title);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(Alert, Alert::ODATA_TYPE, store = entity.backing_store);
entity_model!(Alert, entity);
leaf_factory!(Alert);

// ── alertComment ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AlertComment {
    backing_store: Box<dyn BackingStore>,
}

impl AlertComment {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.security.alertComment";

    #[must_use]
    pub fn new() -> Self {
        let mut comment = Self {
            backing_store: backing_store_factory().create(),
        };
        comment.backing_store.set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        comment
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "comment" => comment, set_comment: String;
        "createdByDisplayName" => created_by_display_name, set_created_by_display_name: String;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_string_value(Some("comment"), self.comment().as_deref())?;
        writer.write_string_value(Some("createdByDisplayName"), self.created_by_display_name().as_deref())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time())
    }
}

impl Default for AlertComment {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for AlertComment {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<AlertComment>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, AlertComment::set_odata_type)
                .string("comment", AlertComment::set_comment)
                .string("createdByDisplayName", AlertComment::set_created_by_display_name)
                .date_time("createdDateTime", AlertComment::set_created_date_time);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(AlertComment, AlertComment::ODATA_TYPE, store = backing_store);
leaf_factory!(AlertComment);
