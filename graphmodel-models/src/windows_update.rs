use crate::device_configuration::DeviceConfiguration;
use crate::entity::entity_model;
use crate::enums::{AutomaticUpdateMode, Enablement, WindowsUpdateForBusinessUpdateWeeks, WindowsUpdateType};
use crate::macros::{leaf_factory, properties};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::{impl_parsable, SerializationResult};
use std::sync::LazyLock;

/// Windows Update for Business ring settings.
#[derive(Debug, Clone)]
pub struct WindowsUpdateForBusinessConfiguration {
    pub(crate) device_configuration: DeviceConfiguration,
}

impl WindowsUpdateForBusinessConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsUpdateForBusinessConfiguration";

    #[must_use]
    pub fn new() -> Self {
        Self {
            device_configuration: DeviceConfiguration::typed(Self::ODATA_TYPE),
        }
    }

    /// The embedded base profile.
    #[must_use]
    pub fn device_configuration(&self) -> &DeviceConfiguration {
        &self.device_configuration
    }

    pub fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration {
        &mut self.device_configuration
    }

    properties! {
        "automaticUpdateMode" => automatic_update_mode, set_automatic_update_mode: AutomaticUpdateMode;
        "businessReadyUpdatesOnly" => business_ready_updates_only, set_business_ready_updates_only: WindowsUpdateType;
        "driversExcluded" => drivers_excluded, set_drivers_excluded: bool;
        /// Days to defer feature updates, 0 to 365.
        "featureUpdatesDeferralPeriodInDays" => feature_updates_deferral_period_in_days, set_feature_updates_deferral_period_in_days: i32;
        "featureUpdatesPaused" => feature_updates_paused, set_feature_updates_paused: bool;
        /// Days to defer quality updates, 0 to 30.
        "qualityUpdatesDeferralPeriodInDays" => quality_updates_deferral_period_in_days, set_quality_updates_deferral_period_in_days: i32;
        "qualityUpdatesPaused" => quality_updates_paused, set_quality_updates_paused: bool;
        "updateWeeks" => update_weeks, set_update_weeks: WindowsUpdateForBusinessUpdateWeeks;
        "userPauseAccess" => user_pause_access, set_user_pause_access: Enablement;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.device_configuration.write_fields(writer)?;
        writer.write_enum_value(Some("automaticUpdateMode"), self.automatic_update_mode())?;
        writer.write_enum_value(Some("businessReadyUpdatesOnly"), self.business_ready_updates_only())?;
        writer.write_bool_value(Some("driversExcluded"), self.drivers_excluded())?;
        writer.write_i32_value(
            Some("featureUpdatesDeferralPeriodInDays"),
            self.feature_updates_deferral_period_in_days(),
        )?;
        writer.write_bool_value(Some("featureUpdatesPaused"), self.feature_updates_paused())?;
        writer.write_i32_value(
            Some("qualityUpdatesDeferralPeriodInDays"),
            self.quality_updates_deferral_period_in_days(),
        )?;
        writer.write_bool_value(Some("qualityUpdatesPaused"), self.quality_updates_paused())?;
        writer.write_flags_value(Some("updateWeeks"), self.update_weeks())?;
        writer.write_enum_value(Some("userPauseAccess"), self.user_pause_access())
    }
}

impl Default for WindowsUpdateForBusinessConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for WindowsUpdateForBusinessConfiguration {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        type Ring = WindowsUpdateForBusinessConfiguration;

        static FIELDS: LazyLock<FieldDeserializers<Ring>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<Ring>::inherit(DeviceConfiguration::field_deserializers(), |ring| {
                &mut ring.device_configuration
            });
            fields
                .enumeration("automaticUpdateMode", Ring::set_automatic_update_mode)
                .enumeration("businessReadyUpdatesOnly", Ring::set_business_ready_updates_only)
                .boolean("driversExcluded", Ring::set_drivers_excluded)
                .int32(
                    "featureUpdatesDeferralPeriodInDays",
                    Ring::set_feature_updates_deferral_period_in_days,
                )
                .boolean("featureUpdatesPaused", Ring::set_feature_updates_paused)
                .int32(
                    "qualityUpdatesDeferralPeriodInDays",
                    Ring::set_quality_updates_deferral_period_in_days,
                )
                .boolean("qualityUpdatesPaused", Ring::set_quality_updates_paused)
                .flags("updateWeeks", Ring::set_update_weeks)
                .enumeration("userPauseAccess", Ring::set_user_pause_access);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(
    WindowsUpdateForBusinessConfiguration,
    WindowsUpdateForBusinessConfiguration::ODATA_TYPE,
    store = device_configuration.entity.backing_store
);
entity_model!(WindowsUpdateForBusinessConfiguration, device_configuration.entity);
leaf_factory!(WindowsUpdateForBusinessConfiguration);
