use crate::directory_object::{directory_object_model, DirectoryObject};
use crate::macros::{leaf_factory, properties};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, Parsable, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

/// A device registered in the directory.
#[derive(Debug, Clone)]
pub struct Device {
    pub(crate) directory_object: DirectoryObject,
}

impl Device {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.device";

    #[must_use]
    pub fn new() -> Self {
        Self {
            directory_object: DirectoryObject::typed(Self::ODATA_TYPE),
        }
    }

    properties! {
        "accountEnabled" => account_enabled, set_account_enabled: bool;
        "alternativeSecurityIds" => alternative_security_ids, set_alternative_security_ids: Vec<AlternativeSecurityId>;
        "approximateLastSignInDateTime" => approximate_last_sign_in_date_time, set_approximate_last_sign_in_date_time: DateTime<FixedOffset>;
        /// Identifier assigned at registration; distinct from the object `id`.
        "deviceId" => device_id, set_device_id: String;
        "displayName" => display_name, set_display_name: String;
        "isCompliant" => is_compliant, set_is_compliant: bool;
        "isManaged" => is_managed, set_is_managed: bool;
        /// Groups and administrative units the device belongs to.
        "memberOf" => member_of, set_member_of: Vec<Box<dyn Parsable>>;
        "operatingSystem" => operating_system, set_operating_system: String;
        "operatingSystemVersion" => operating_system_version, set_operating_system_version: String;
        "physicalIds" => physical_ids, set_physical_ids: Vec<String>;
        "trustType" => trust_type, set_trust_type: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.directory_object.write_fields(writer)?;
        writer.write_bool_value(Some("accountEnabled"), self.account_enabled())?;
        writer.write_collection_of_objects(Some("alternativeSecurityIds"), self.alternative_security_ids().as_deref())?;
        writer.write_date_time_value(
            Some("approximateLastSignInDateTime"),
            self.approximate_last_sign_in_date_time(),
        )?;
        writer.write_string_value(Some("deviceId"), self.device_id().as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name().as_deref())?;
        writer.write_bool_value(Some("isCompliant"), self.is_compliant())?;
        writer.write_bool_value(Some("isManaged"), self.is_managed())?;
        writer.write_collection_of_boxed_objects(Some("memberOf"), self.member_of().as_deref())?;
        writer.write_string_value(Some("operatingSystem"), self.operating_system().as_deref())?;
        writer.write_string_value(Some("operatingSystemVersion"), self.operating_system_version().as_deref())?;
        writer.write_collection_of_string_values(Some("physicalIds"), self.physical_ids().as_deref())?;
        writer.write_string_value(Some("trustType"), self.trust_type().as_deref())
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for Device {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<Device>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<Device>::inherit(DirectoryObject::field_deserializers(), |device| {
                &mut device.directory_object
            });
            fields
                .boolean("accountEnabled", Device::set_account_enabled)
                .objects(
                    "alternativeSecurityIds",
                    AlternativeSecurityId::create_from_discriminator_value,
                    Device::set_alternative_security_ids,
                )
                .date_time(
                    "approximateLastSignInDateTime",
                    Device::set_approximate_last_sign_in_date_time,
                )
                .string("deviceId", Device::set_device_id)
                .string("displayName", Device::set_display_name)
                .boolean("isCompliant", Device::set_is_compliant)
                .boolean("isManaged", Device::set_is_managed)
                .polymorphic_collection(
                    "memberOf",
                    DirectoryObject::create_from_discriminator_value,
                    Device::set_member_of,
                )
                .string("operatingSystem", Device::set_operating_system)
                .string("operatingSystemVersion", Device::set_operating_system_version)
                .strings("physicalIds", Device::set_physical_ids)
                .string("trustType", Device::set_trust_type);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(Device, Device::ODATA_TYPE, store = directory_object.entity.backing_store);
directory_object_model!(Device, directory_object);
leaf_factory!(Device);

// ── alternativeSecurityId ────────────────────────────────────────

/// An alternative identity for a device, used by conditional access.
#[derive(Debug, Clone)]
pub struct AlternativeSecurityId {
    backing_store: Box<dyn BackingStore>,
}

impl AlternativeSecurityId {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.alternativeSecurityId";

    #[must_use]
    pub fn new() -> Self {
        let mut id = Self {
            backing_store: backing_store_factory().create(),
        };
        id.backing_store.set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        id
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "identityProvider" => identity_provider, set_identity_provider: String;
        /// Base64-encoded key material.
        "key" => key, set_key: String;
        "type" => r#type, set_type: i32;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_string_value(Some("identityProvider"), self.identity_provider().as_deref())?;
        writer.write_string_value(Some("key"), self.key().as_deref())?;
        writer.write_i32_value(Some("type"), self.r#type())
    }
}

impl Default for AlternativeSecurityId {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for AlternativeSecurityId {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<AlternativeSecurityId>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, AlternativeSecurityId::set_odata_type)
                .string("identityProvider", AlternativeSecurityId::set_identity_provider)
                .string("key", AlternativeSecurityId::set_key)
                .int32("type", AlternativeSecurityId::set_type);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(AlternativeSecurityId, AlternativeSecurityId::ODATA_TYPE, store = backing_store);
leaf_factory!(AlternativeSecurityId);
