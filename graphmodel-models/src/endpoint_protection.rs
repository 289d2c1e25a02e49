use crate::device_configuration::DeviceConfiguration;
use crate::entity::entity_model;
use crate::enums::StateManagementSetting;
use crate::macros::{leaf_factory, properties};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

/// Endpoint protection profile for Windows 10 devices. Only the firewall
/// and Application Guard settings are modelled; anything else the service
/// sends lands in additional data.
#[derive(Debug, Clone)]
pub struct Windows10EndpointProtectionConfiguration {
    pub(crate) device_configuration: DeviceConfiguration,
}

impl Windows10EndpointProtectionConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windows10EndpointProtectionConfiguration";

    #[must_use]
    pub fn new() -> Self {
        Self {
            device_configuration: DeviceConfiguration::typed(Self::ODATA_TYPE),
        }
    }

    #[must_use]
    pub fn device_configuration(&self) -> &DeviceConfiguration {
        &self.device_configuration
    }

    pub fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration {
        &mut self.device_configuration
    }

    properties! {
        "applicationGuardEnabled" => application_guard_enabled, set_application_guard_enabled: bool;
        "applicationGuardBlockClipboardSharing" => application_guard_block_clipboard_sharing, set_application_guard_block_clipboard_sharing: String;
        "firewallBlockStatefulFTP" => firewall_block_stateful_ftp, set_firewall_block_stateful_ftp: bool;
        "firewallIdleTimeoutForSecurityAssociationInSeconds" => firewall_idle_timeout_for_security_association_in_seconds, set_firewall_idle_timeout_for_security_association_in_seconds: i32;
        "firewallProfileDomain" => firewall_profile_domain, set_firewall_profile_domain: WindowsFirewallNetworkProfile;
        "firewallProfilePrivate" => firewall_profile_private, set_firewall_profile_private: WindowsFirewallNetworkProfile;
        "firewallProfilePublic" => firewall_profile_public, set_firewall_profile_public: WindowsFirewallNetworkProfile;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.device_configuration.write_fields(writer)?;
        writer.write_bool_value(Some("applicationGuardEnabled"), self.application_guard_enabled())?;
        writer.write_string_value(
            Some("applicationGuardBlockClipboardSharing"),
            self.application_guard_block_clipboard_sharing().as_deref(),
        )?;
        writer.write_bool_value(Some("firewallBlockStatefulFTP"), self.firewall_block_stateful_ftp())?;
        writer.write_i32_value(
            Some("firewallIdleTimeoutForSecurityAssociationInSeconds"),
            self.firewall_idle_timeout_for_security_association_in_seconds(),
        )?;
        writer.write_object(Some("firewallProfileDomain"), self.firewall_profile_domain().as_ref())?;
        writer.write_object(Some("firewallProfilePrivate"), self.firewall_profile_private().as_ref())?;
        writer.write_object(Some("firewallProfilePublic"), self.firewall_profile_public().as_ref())
    }
}

impl Default for Windows10EndpointProtectionConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for Windows10EndpointProtectionConfiguration {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        type Profile = Windows10EndpointProtectionConfiguration;

        static FIELDS: LazyLock<FieldDeserializers<Profile>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<Profile>::inherit(DeviceConfiguration::field_deserializers(), |profile| {
                &mut profile.device_configuration
            });
            fields
                .boolean("applicationGuardEnabled", Profile::set_application_guard_enabled)
                .string(
                    "applicationGuardBlockClipboardSharing",
                    Profile::set_application_guard_block_clipboard_sharing,
                )
                .boolean("firewallBlockStatefulFTP", Profile::set_firewall_block_stateful_ftp)
                .int32(
                    "firewallIdleTimeoutForSecurityAssociationInSeconds",
                    Profile::set_firewall_idle_timeout_for_security_association_in_seconds,
                )
                .object(
                    "firewallProfileDomain",
                    WindowsFirewallNetworkProfile::create_from_discriminator_value,
                    Profile::set_firewall_profile_domain,
                )
                .object(
                    "firewallProfilePrivate",
                    WindowsFirewallNetworkProfile::create_from_discriminator_value,
                    Profile::set_firewall_profile_private,
                )
                .object(
                    "firewallProfilePublic",
                    WindowsFirewallNetworkProfile::create_from_discriminator_value,
                    Profile::set_firewall_profile_public,
                );
            fields
        });
        &FIELDS
    }
}

impl_parsable!(
    Windows10EndpointProtectionConfiguration,
    Windows10EndpointProtectionConfiguration::ODATA_TYPE,
    store = device_configuration.entity.backing_store
);
entity_model!(Windows10EndpointProtectionConfiguration, device_configuration.entity);
leaf_factory!(Windows10EndpointProtectionConfiguration);

// ── windowsFirewallNetworkProfile ────────────────────────────────

/// Firewall settings for one network profile (domain, private or public).
#[derive(Debug, Clone)]
pub struct WindowsFirewallNetworkProfile {
    backing_store: Box<dyn BackingStore>,
}

impl WindowsFirewallNetworkProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsFirewallNetworkProfile";

    #[must_use]
    pub fn new() -> Self {
        let mut profile = Self {
            backing_store: backing_store_factory().create(),
        };
        profile.backing_store.set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        profile
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "authorizedApplicationRulesFromGroupPolicyMerged" => authorized_application_rules_from_group_policy_merged, set_authorized_application_rules_from_group_policy_merged: bool;
        "connectionSecurityRulesFromGroupPolicyMerged" => connection_security_rules_from_group_policy_merged, set_connection_security_rules_from_group_policy_merged: bool;
        "firewallEnabled" => firewall_enabled, set_firewall_enabled: StateManagementSetting;
        "globalPortRulesFromGroupPolicyMerged" => global_port_rules_from_group_policy_merged, set_global_port_rules_from_group_policy_merged: bool;
        "inboundConnectionsBlocked" => inbound_connections_blocked, set_inbound_connections_blocked: bool;
        "inboundNotificationsBlocked" => inbound_notifications_blocked, set_inbound_notifications_blocked: bool;
        "incomingTrafficBlocked" => incoming_traffic_blocked, set_incoming_traffic_blocked: bool;
        "outboundConnectionsBlocked" => outbound_connections_blocked, set_outbound_connections_blocked: bool;
        "policyRulesFromGroupPolicyMerged" => policy_rules_from_group_policy_merged, set_policy_rules_from_group_policy_merged: bool;
        "securedPacketExemptionAllowed" => secured_packet_exemption_allowed, set_secured_packet_exemption_allowed: bool;
        "stealthModeBlocked" => stealth_mode_blocked, set_stealth_mode_blocked: bool;
        "unicastResponsesToMulticastBroadcastsBlocked" => unicast_responses_to_multicast_broadcasts_blocked, set_unicast_responses_to_multicast_broadcasts_blocked: bool;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_bool_value(
            Some("authorizedApplicationRulesFromGroupPolicyMerged"),
            self.authorized_application_rules_from_group_policy_merged(),
        )?;
        writer.write_bool_value(
            Some("connectionSecurityRulesFromGroupPolicyMerged"),
            self.connection_security_rules_from_group_policy_merged(),
        )?;
        writer.write_enum_value(Some("firewallEnabled"), self.firewall_enabled())?;
        writer.write_bool_value(
            Some("globalPortRulesFromGroupPolicyMerged"),
            self.global_port_rules_from_group_policy_merged(),
        )?;
        writer.write_bool_value(Some("inboundConnectionsBlocked"), self.inbound_connections_blocked())?;
        writer.write_bool_value(Some("inboundNotificationsBlocked"), self.inbound_notifications_blocked())?;
        writer.write_bool_value(Some("incomingTrafficBlocked"), self.incoming_traffic_blocked())?;
        writer.write_bool_value(Some("outboundConnectionsBlocked"), self.outbound_connections_blocked())?;
        writer.write_bool_value(
            Some("policyRulesFromGroupPolicyMerged"),
            self.policy_rules_from_group_policy_merged(),
        )?;
        writer.write_bool_value(Some("securedPacketExemptionAllowed"), self.secured_packet_exemption_allowed())?;
        writer.write_bool_value(Some("stealthModeBlocked"), self.stealth_mode_blocked())?;
        writer.write_bool_value(
            Some("unicastResponsesToMulticastBroadcastsBlocked"),
            self.unicast_responses_to_multicast_broadcasts_blocked(),
        )
    }
}

impl Default for WindowsFirewallNetworkProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for WindowsFirewallNetworkProfile {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        type Firewall = WindowsFirewallNetworkProfile;

        static FIELDS: LazyLock<FieldDeserializers<Firewall>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, Firewall::set_odata_type)
                .boolean(
                    "authorizedApplicationRulesFromGroupPolicyMerged",
                    Firewall::set_authorized_application_rules_from_group_policy_merged,
                )
                .boolean(
                    "connectionSecurityRulesFromGroupPolicyMerged",
                    Firewall::set_connection_security_rules_from_group_policy_merged,
                )
                .enumeration("firewallEnabled", Firewall::set_firewall_enabled)
                .boolean(
                    "globalPortRulesFromGroupPolicyMerged",
                    Firewall::set_global_port_rules_from_group_policy_merged,
                )
                .boolean("inboundConnectionsBlocked", Firewall::set_inbound_connections_blocked)
                .boolean("inboundNotificationsBlocked", Firewall::set_inbound_notifications_blocked)
                .boolean("incomingTrafficBlocked", Firewall::set_incoming_traffic_blocked)
                .boolean("outboundConnectionsBlocked", Firewall::set_outbound_connections_blocked)
                .boolean(
                    "policyRulesFromGroupPolicyMerged",
                    Firewall::set_policy_rules_from_group_policy_merged,
                )
                .boolean("securedPacketExemptionAllowed", Firewall::set_secured_packet_exemption_allowed)
                .boolean("stealthModeBlocked", Firewall::set_stealth_mode_blocked)
                .boolean(
                    "unicastResponsesToMulticastBroadcastsBlocked",
                    Firewall::set_unicast_responses_to_multicast_broadcasts_blocked,
                );
            fields
        });
        &FIELDS
    }
}

impl_parsable!(
    WindowsFirewallNetworkProfile,
    WindowsFirewallNetworkProfile::ODATA_TYPE,
    store = backing_store
);
leaf_factory!(WindowsFirewallNetworkProfile);
