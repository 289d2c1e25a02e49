use super::{
    DefenderAvStatus, DeviceHealthStatus, DeviceRiskScore, EvidenceRemediationStatus, EvidenceRole, EvidenceVerdict,
    OnboardingStatus,
};
use crate::catalog;
use crate::macros::{leaf_factory, properties};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, Parsable, ParseNode, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

/// An artifact attached to an alert. Concrete kinds (devices, files,
/// users, ...) derive from it and are picked by `@odata.type`.
#[derive(Debug, Clone)]
pub struct AlertEvidence {
    pub(crate) backing_store: Box<dyn BackingStore>,
}

impl AlertEvidence {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.security.alertEvidence";

    #[must_use]
    pub fn new() -> Self {
        Self::typed(Self::ODATA_TYPE)
    }

    pub(crate) fn typed(odata_type: &str) -> Self {
        let mut evidence = Self {
            backing_store: backing_store_factory().create(),
        };
        evidence.backing_store.set_property(ODATA_TYPE_KEY, odata_type);
        evidence
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "detailedRoles" => detailed_roles, set_detailed_roles: Vec<String>;
        "remediationStatus" => remediation_status, set_remediation_status: EvidenceRemediationStatus;
        "remediationStatusDetails" => remediation_status_details, set_remediation_status_details: String;
        "roles" => roles, set_roles: Vec<EvidenceRole>;
        "tags" => tags, set_tags: Vec<String>;
        "verdict" => verdict, set_verdict: EvidenceVerdict;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time())?;
        writer.write_collection_of_string_values(Some("detailedRoles"), self.detailed_roles().as_deref())?;
        writer.write_enum_value(Some("remediationStatus"), self.remediation_status())?;
        writer.write_string_value(Some("remediationStatusDetails"), self.remediation_status_details().as_deref())?;
        writer.write_collection_of_enum_values(Some("roles"), self.roles().as_deref())?;
        writer.write_collection_of_string_values(Some("tags"), self.tags().as_deref())?;
        writer.write_enum_value(Some("verdict"), self.verdict())
    }

    /// Picks an evidence kind from `@odata.type`.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> SerializationResult<Box<dyn Parsable>> {
        Ok(catalog::create_derived(node, Self::ODATA_TYPE).unwrap_or_else(|| Box::new(Self::new())))
    }
}

impl Default for AlertEvidence {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for AlertEvidence {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<AlertEvidence>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, AlertEvidence::set_odata_type)
                .date_time("createdDateTime", AlertEvidence::set_created_date_time)
                .strings("detailedRoles", AlertEvidence::set_detailed_roles)
                .enumeration("remediationStatus", AlertEvidence::set_remediation_status)
                .string("remediationStatusDetails", AlertEvidence::set_remediation_status_details)
                .enumerations("roles", AlertEvidence::set_roles)
                .strings("tags", AlertEvidence::set_tags)
                .enumeration("verdict", AlertEvidence::set_verdict);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(AlertEvidence, AlertEvidence::ODATA_TYPE, store = backing_store);

// ── deviceEvidence ───────────────────────────────────────────────

/// A device involved in an alert, as seen by Defender for Endpoint.
#[derive(Debug, Clone)]
pub struct DeviceEvidence {
    pub(crate) alert_evidence: AlertEvidence,
}

impl DeviceEvidence {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.security.deviceEvidence";

    #[must_use]
    pub fn new() -> Self {
        Self {
            alert_evidence: AlertEvidence::typed(Self::ODATA_TYPE),
        }
    }

    #[must_use]
    pub fn alert_evidence(&self) -> &AlertEvidence {
        &self.alert_evidence
    }

    pub fn alert_evidence_mut(&mut self) -> &mut AlertEvidence {
        &mut self.alert_evidence
    }

    properties! {
        /// Microsoft Entra device id.
        "azureAdDeviceId" => azure_ad_device_id, set_azure_ad_device_id: String;
        "defenderAvStatus" => defender_av_status, set_defender_av_status: DefenderAvStatus;
        "deviceDnsName" => device_dns_name, set_device_dns_name: String;
        "dnsDomain" => dns_domain, set_dns_domain: String;
        "firstSeenDateTime" => first_seen_date_time, set_first_seen_date_time: DateTime<FixedOffset>;
        "healthStatus" => health_status, set_health_status: DeviceHealthStatus;
        "hostName" => host_name, set_host_name: String;
        "ipInterfaces" => ip_interfaces, set_ip_interfaces: Vec<String>;
        "lastExternalIpAddress" => last_external_ip_address, set_last_external_ip_address: String;
        "lastIpAddress" => last_ip_address, set_last_ip_address: String;
        "mdeDeviceId" => mde_device_id, set_mde_device_id: String;
        "ntDomain" => nt_domain, set_nt_domain: String;
        "onboardingStatus" => onboarding_status, set_onboarding_status: OnboardingStatus;
        "osBuild" => os_build, set_os_build: i64;
        "osPlatform" => os_platform, set_os_platform: String;
        "rbacGroupId" => rbac_group_id, set_rbac_group_id: i32;
        "rbacGroupName" => rbac_group_name, set_rbac_group_name: String;
        "riskScore" => risk_score, set_risk_score: DeviceRiskScore;
        "version" => version, set_version: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.alert_evidence.write_fields(writer)?;
        writer.write_string_value(Some("azureAdDeviceId"), self.azure_ad_device_id().as_deref())?;
        writer.write_enum_value(Some("defenderAvStatus"), self.defender_av_status())?;
        writer.write_string_value(Some("deviceDnsName"), self.device_dns_name().as_deref())?;
        writer.write_string_value(Some("dnsDomain"), self.dns_domain().as_deref())?;
        writer.write_date_time_value(Some("firstSeenDateTime"), self.first_seen_date_time())?;
        writer.write_enum_value(Some("healthStatus"), self.health_status())?;
        writer.write_string_value(Some("hostName"), self.host_name().as_deref())?;
        writer.write_collection_of_string_values(Some("ipInterfaces"), self.ip_interfaces().as_deref())?;
        writer.write_string_value(Some("lastExternalIpAddress"), self.last_external_ip_address().as_deref())?;
        writer.write_string_value(Some("lastIpAddress"), self.last_ip_address().as_deref())?;
        writer.write_string_value(Some("mdeDeviceId"), self.mde_device_id().as_deref())?;
        writer.write_string_value(Some("ntDomain"), self.nt_domain().as_deref())?;
        writer.write_enum_value(Some("onboardingStatus"), self.onboarding_status())?;
        writer.write_i64_value(Some("osBuild"), self.os_build())?;
        writer.write_string_value(Some("osPlatform"), self.os_platform().as_deref())?;
        writer.write_i32_value(Some("rbacGroupId"), self.rbac_group_id())?;
        writer.write_string_value(Some("rbacGroupName"), self.rbac_group_name().as_deref())?;
        writer.write_enum_value(Some("riskScore"), self.risk_score())?;
        writer.write_string_value(Some("version"), self.version().as_deref())
    }
}

impl Default for DeviceEvidence {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for DeviceEvidence {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<DeviceEvidence>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<DeviceEvidence>::inherit(AlertEvidence::field_deserializers(), |device| {
                &mut device.alert_evidence
            });
            fields
                .string("azureAdDeviceId", DeviceEvidence::set_azure_ad_device_id)
                .enumeration("defenderAvStatus", DeviceEvidence::set_defender_av_status)
                .string("deviceDnsName", DeviceEvidence::set_device_dns_name)
                .string("dnsDomain", DeviceEvidence::set_dns_domain)
                .date_time("firstSeenDateTime", DeviceEvidence::set_first_seen_date_time)
                .enumeration("healthStatus", DeviceEvidence::set_health_status)
                .string("hostName", DeviceEvidence::set_host_name)
                .strings("ipInterfaces", DeviceEvidence::set_ip_interfaces)
                .string("lastExternalIpAddress", DeviceEvidence::set_last_external_ip_address)
                .string("lastIpAddress", DeviceEvidence::set_last_ip_address)
                .string("mdeDeviceId", DeviceEvidence::set_mde_device_id)
                .string("ntDomain", DeviceEvidence::set_nt_domain)
                .enumeration("onboardingStatus", DeviceEvidence::set_onboarding_status)
                .int64("osBuild", DeviceEvidence::set_os_build)
                .string("osPlatform", DeviceEvidence::set_os_platform)
                .int32("rbacGroupId", DeviceEvidence::set_rbac_group_id)
                .string("rbacGroupName", DeviceEvidence::set_rbac_group_name)
                .enumeration("riskScore", DeviceEvidence::set_risk_score)
                .string("version", DeviceEvidence::set_version);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(DeviceEvidence, DeviceEvidence::ODATA_TYPE, store = alert_evidence.backing_store);
leaf_factory!(DeviceEvidence);
