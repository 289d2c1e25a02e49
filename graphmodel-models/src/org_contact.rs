use crate::directory_object::{directory_object_model, DirectoryObject};
use crate::enums::PhoneType;
use crate::macros::{leaf_factory, properties};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, Parsable, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

/// An organizational contact synchronized from on-premises directories.
#[derive(Debug, Clone)]
pub struct OrgContact {
    pub(crate) directory_object: DirectoryObject,
}

impl OrgContact {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.orgContact";

    #[must_use]
    pub fn new() -> Self {
        Self {
            directory_object: DirectoryObject::typed(Self::ODATA_TYPE),
        }
    }

    properties! {
        "addresses" => addresses, set_addresses: Vec<PhysicalOfficeAddress>;
        "companyName" => company_name, set_company_name: String;
        "department" => department, set_department: String;
        "displayName" => display_name, set_display_name: String;
        "givenName" => given_name, set_given_name: String;
        "jobTitle" => job_title, set_job_title: String;
        "mail" => mail, set_mail: String;
        "mailNickname" => mail_nickname, set_mail_nickname: String;
        /// Any directory object: a user or another contact.
        "manager" => manager, set_manager: Box<dyn Parsable>;
        "onPremisesLastSyncDateTime" => on_premises_last_sync_date_time, set_on_premises_last_sync_date_time: DateTime<FixedOffset>;
        "onPremisesSyncEnabled" => on_premises_sync_enabled, set_on_premises_sync_enabled: bool;
        "phones" => phones, set_phones: Vec<Phone>;
        "proxyAddresses" => proxy_addresses, set_proxy_addresses: Vec<String>;
        "surname" => surname, set_surname: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.directory_object.write_fields(writer)?;
        writer.write_collection_of_objects(Some("addresses"), self.addresses().as_deref())?;
        writer.write_string_value(Some("companyName"), self.company_name().as_deref())?;
        writer.write_string_value(Some("department"), self.department().as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name().as_deref())?;
        writer.write_string_value(Some("givenName"), self.given_name().as_deref())?;
        writer.write_string_value(Some("jobTitle"), self.job_title().as_deref())?;
        writer.write_string_value(Some("mail"), self.mail().as_deref())?;
        writer.write_string_value(Some("mailNickname"), self.mail_nickname().as_deref())?;
        writer.write_object_value(Some("manager"), self.manager().as_deref())?;
        writer.write_date_time_value(
            Some("onPremisesLastSyncDateTime"),
            self.on_premises_last_sync_date_time(),
        )?;
        writer.write_bool_value(Some("onPremisesSyncEnabled"), self.on_premises_sync_enabled())?;
        writer.write_collection_of_objects(Some("phones"), self.phones().as_deref())?;
        writer.write_collection_of_string_values(Some("proxyAddresses"), self.proxy_addresses().as_deref())?;
        writer.write_string_value(Some("surname"), self.surname().as_deref())
    }
}

impl Default for OrgContact {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for OrgContact {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<OrgContact>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<OrgContact>::inherit(DirectoryObject::field_deserializers(), |contact| {
                &mut contact.directory_object
            });
            fields
                .objects(
                    "addresses",
                    PhysicalOfficeAddress::create_from_discriminator_value,
                    OrgContact::set_addresses,
                )
                .string("companyName", OrgContact::set_company_name)
                .string("department", OrgContact::set_department)
                .string("displayName", OrgContact::set_display_name)
                .string("givenName", OrgContact::set_given_name)
                .string("jobTitle", OrgContact::set_job_title)
                .string("mail", OrgContact::set_mail)
                .string("mailNickname", OrgContact::set_mail_nickname)
                .polymorphic("manager", DirectoryObject::create_from_discriminator_value, OrgContact::set_manager)
                .date_time(
                    "onPremisesLastSyncDateTime",
                    OrgContact::set_on_premises_last_sync_date_time,
                )
                .boolean("onPremisesSyncEnabled", OrgContact::set_on_premises_sync_enabled)
                .objects("phones", Phone::create_from_discriminator_value, OrgContact::set_phones)
                .strings("proxyAddresses", OrgContact::set_proxy_addresses)
                .string("surname", OrgContact::set_surname);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(OrgContact, OrgContact::ODATA_TYPE, store = directory_object.entity.backing_store);
directory_object_model!(OrgContact, directory_object);
leaf_factory!(OrgContact);

// ── physicalOfficeAddress ────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PhysicalOfficeAddress {
    backing_store: Box<dyn BackingStore>,
}

impl PhysicalOfficeAddress {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.physicalOfficeAddress";

    #[must_use]
    pub fn new() -> Self {
        let mut address = Self {
            backing_store: backing_store_factory().create(),
        };
        address.backing_store.set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        address
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "city" => city, set_city: String;
        "countryOrRegion" => country_or_region, set_country_or_region: String;
        "officeLocation" => office_location, set_office_location: String;
        "postalCode" => postal_code, set_postal_code: String;
        "state" => state, set_state: String;
        "street" => street, set_street: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_string_value(Some("city"), self.city().as_deref())?;
        writer.write_string_value(Some("countryOrRegion"), self.country_or_region().as_deref())?;
        writer.write_string_value(Some("officeLocation"), self.office_location().as_deref())?;
        writer.write_string_value(Some("postalCode"), self.postal_code().as_deref())?;
        writer.write_string_value(Some("state"), self.state().as_deref())?;
        writer.write_string_value(Some("street"), self.street().as_deref())
    }
}

impl Default for PhysicalOfficeAddress {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for PhysicalOfficeAddress {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<PhysicalOfficeAddress>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, PhysicalOfficeAddress::set_odata_type)
                .string("city", PhysicalOfficeAddress::set_city)
                .string("countryOrRegion", PhysicalOfficeAddress::set_country_or_region)
                .string("officeLocation", PhysicalOfficeAddress::set_office_location)
                .string("postalCode", PhysicalOfficeAddress::set_postal_code)
                .string("state", PhysicalOfficeAddress::set_state)
                .string("street", PhysicalOfficeAddress::set_street);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(PhysicalOfficeAddress, PhysicalOfficeAddress::ODATA_TYPE, store = backing_store);
leaf_factory!(PhysicalOfficeAddress);

// ── phone ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Phone {
    backing_store: Box<dyn BackingStore>,
}

impl Phone {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.phone";

    #[must_use]
    pub fn new() -> Self {
        let mut phone = Self {
            backing_store: backing_store_factory().create(),
        };
        phone.backing_store.set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        phone
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "language" => language, set_language: String;
        "number" => number, set_number: String;
        "region" => region, set_region: String;
        "type" => r#type, set_type: PhoneType;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_string_value(Some("language"), self.language().as_deref())?;
        writer.write_string_value(Some("number"), self.number().as_deref())?;
        writer.write_string_value(Some("region"), self.region().as_deref())?;
        writer.write_enum_value(Some("type"), self.r#type())
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for Phone {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<Phone>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, Phone::set_odata_type)
                .string("language", Phone::set_language)
                .string("number", Phone::set_number)
                .string("region", Phone::set_region)
                .enumeration("type", Phone::set_type);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(Phone, Phone::ODATA_TYPE, store = backing_store);
leaf_factory!(Phone);
