use crate::catalog;
use crate::entity::{entity_model, Entity};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{Deserializable, FieldDeserializers, Parsable, ParseNode, SerializationWriter};
use graphmodel_abstractions::{impl_parsable, SerializationResult};
use std::sync::LazyLock;

/// Base of the Intune device configuration profiles.
#[derive(Debug, Clone)]
pub struct DeviceConfiguration {
    pub(crate) entity: Entity,
}

impl DeviceConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceConfiguration";

    #[must_use]
    pub fn new() -> Self {
        Self::typed(Self::ODATA_TYPE)
    }

    pub(crate) fn typed(odata_type: &str) -> Self {
        Self {
            entity: Entity::typed(odata_type),
        }
    }

    crate::macros::properties! {
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "description" => description, set_description: String;
        "displayName" => display_name, set_display_name: String;
        "lastModifiedDateTime" => last_modified_date_time, set_last_modified_date_time: DateTime<FixedOffset>;
        /// Incremented by the service on every change.
        "version" => version, set_version: i32;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.entity.write_fields(writer)?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time())?;
        writer.write_string_value(Some("description"), self.description().as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name().as_deref())?;
        writer.write_date_time_value(Some("lastModifiedDateTime"), self.last_modified_date_time())?;
        writer.write_i32_value(Some("version"), self.version())
    }

    /// Picks a configuration profile type from `@odata.type`.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> SerializationResult<Box<dyn Parsable>> {
        Ok(catalog::create_derived(node, Self::ODATA_TYPE).unwrap_or_else(|| Box::new(Self::new())))
    }
}

impl Default for DeviceConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for DeviceConfiguration {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<DeviceConfiguration>> = LazyLock::new(|| {
            let mut fields =
                FieldDeserializers::<DeviceConfiguration>::inherit(Entity::field_deserializers(), |config| &mut config.entity);
            fields
                .date_time("createdDateTime", DeviceConfiguration::set_created_date_time)
                .string("description", DeviceConfiguration::set_description)
                .string("displayName", DeviceConfiguration::set_display_name)
                .date_time("lastModifiedDateTime", DeviceConfiguration::set_last_modified_date_time)
                .int32("version", DeviceConfiguration::set_version);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(DeviceConfiguration, DeviceConfiguration::ODATA_TYPE, store = entity.backing_store);
entity_model!(DeviceConfiguration, entity);
