//! Change-notification subscriptions and the notifications delivered for
//! them.

use crate::entity::{entity_model, Entity};
use crate::enums::{ChangeType, LifecycleEventType};
use crate::macros::{leaf_factory, properties};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;
use uuid::Uuid;

// ── subscription ─────────────────────────────────────────────────

/// A webhook subscription to changes on a Graph resource.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub(crate) entity: Entity,
}

impl Subscription {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.subscription";

    #[must_use]
    pub fn new() -> Self {
        Self {
            entity: Entity::typed(Self::ODATA_TYPE),
        }
    }

    properties! {
        "applicationId" => application_id, set_application_id: String;
        /// Comma-separated change types, e.g. `created,updated`.
        "changeType" => change_type, set_change_type: String;
        /// Echoed back in every notification so the receiver can verify it.
        "clientState" => client_state, set_client_state: String;
        "creatorId" => creator_id, set_creator_id: String;
        "encryptionCertificate" => encryption_certificate, set_encryption_certificate: String;
        "encryptionCertificateId" => encryption_certificate_id, set_encryption_certificate_id: String;
        "expirationDateTime" => expiration_date_time, set_expiration_date_time: DateTime<FixedOffset>;
        "includeResourceData" => include_resource_data, set_include_resource_data: bool;
        "latestSupportedTlsVersion" => latest_supported_tls_version, set_latest_supported_tls_version: String;
        "lifecycleNotificationUrl" => lifecycle_notification_url, set_lifecycle_notification_url: String;
        "notificationQueryOptions" => notification_query_options, set_notification_query_options: String;
        "notificationUrl" => notification_url, set_notification_url: String;
        "notificationUrlAppId" => notification_url_app_id, set_notification_url_app_id: String;
        "resource" => resource, set_resource: String;
    }

    /// Parsed form of [`change_type`](Self::change_type). Unknown entries
    /// are skipped.
    #[must_use]
    pub fn change_types(&self) -> Vec<ChangeType> {
        self.change_type()
            .map(|raw| {
                raw.split(',')
                    .filter_map(|part| part.trim().parse::<ChangeType>().ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set_change_types(&mut self, types: &[ChangeType]) {
        let joined = types.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        self.set_change_type(Some(joined));
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.entity.write_fields(writer)?;
        writer.write_string_value(Some("applicationId"), self.application_id().as_deref())?;
        writer.write_string_value(Some("changeType"), self.change_type().as_deref())?;
        writer.write_string_value(Some("clientState"), self.client_state().as_deref())?;
        writer.write_string_value(Some("creatorId"), self.creator_id().as_deref())?;
        writer.write_string_value(Some("encryptionCertificate"), self.encryption_certificate().as_deref())?;
        writer.write_string_value(Some("encryptionCertificateId"), self.encryption_certificate_id().as_deref())?;
        writer.write_date_time_value(Some("expirationDateTime"), self.expiration_date_time())?;
        writer.write_bool_value(Some("includeResourceData"), self.include_resource_data())?;
        writer.write_string_value(Some("latestSupportedTlsVersion"), self.latest_supported_tls_version().as_deref())?;
        writer.write_string_value(Some("lifecycleNotificationUrl"), self.lifecycle_notification_url().as_deref())?;
        writer.write_string_value(Some("notificationQueryOptions"), self.notification_query_options().as_deref())?;
        writer.write_string_value(Some("notificationUrl"), self.notification_url().as_deref())?;
        writer.write_string_value(Some("notificationUrlAppId"), self.notification_url_app_id().as_deref())?;
        writer.write_string_value(Some("resource"), self.resource().as_deref())
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for Subscription {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<Subscription>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<Subscription>::inherit(Entity::field_deserializers(), |sub| &mut sub.entity);
            fields
                .string("applicationId", Subscription::set_application_id)
                .string("changeType", Subscription::set_change_type)
                .string("clientState", Subscription::set_client_state)
                .string("creatorId", Subscription::set_creator_id)
                .string("encryptionCertificate", Subscription::set_encryption_certificate)
                .string("encryptionCertificateId", Subscription::set_encryption_certificate_id)
                .date_time("expirationDateTime", Subscription::set_expiration_date_time)
                .boolean("includeResourceData", Subscription::set_include_resource_data)
                .string("latestSupportedTlsVersion", Subscription::set_latest_supported_tls_version)
                .string("lifecycleNotificationUrl", Subscription::set_lifecycle_notification_url)
                .string("notificationQueryOptions", Subscription::set_notification_query_options)
                .string("notificationUrl", Subscription::set_notification_url)
                .string("notificationUrlAppId", Subscription::set_notification_url_app_id)
                .string("resource", Subscription::set_resource);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(Subscription, Subscription::ODATA_TYPE, store = entity.backing_store);
entity_model!(Subscription, entity);
leaf_factory!(Subscription);

// ── changeNotification ───────────────────────────────────────────

/// One notification delivered to a subscription's notification URL.
#[derive(Debug, Clone)]
pub struct ChangeNotification {
    backing_store: Box<dyn BackingStore>,
}

impl ChangeNotification {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.changeNotification";

    #[must_use]
    pub fn new() -> Self {
        let mut notification = Self {
            backing_store: backing_store_factory().create(),
        };
        notification
            .backing_store
            .set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        notification
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "changeType" => change_type, set_change_type: ChangeType;
        "clientState" => client_state, set_client_state: String;
        "id" => id, set_id: String;
        /// Set instead of `changeType` on lifecycle notifications.
        "lifecycleEvent" => lifecycle_event, set_lifecycle_event: LifecycleEventType;
        "resource" => resource, set_resource: String;
        "subscriptionExpirationDateTime" => subscription_expiration_date_time, set_subscription_expiration_date_time: DateTime<FixedOffset>;
        "subscriptionId" => subscription_id, set_subscription_id: Uuid;
        "tenantId" => tenant_id, set_tenant_id: Uuid;
    }

    /// Whether this is a lifecycle notification rather than a resource change.
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        self.lifecycle_event().is_some()
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_enum_value(Some("changeType"), self.change_type())?;
        writer.write_string_value(Some("clientState"), self.client_state().as_deref())?;
        writer.write_string_value(Some("id"), self.id().as_deref())?;
        writer.write_enum_value(Some("lifecycleEvent"), self.lifecycle_event())?;
        writer.write_string_value(Some("resource"), self.resource().as_deref())?;
        writer.write_date_time_value(
            Some("subscriptionExpirationDateTime"),
            self.subscription_expiration_date_time(),
        )?;
        writer.write_uuid_value(Some("subscriptionId"), self.subscription_id())?;
        writer.write_uuid_value(Some("tenantId"), self.tenant_id())
    }
}

impl Default for ChangeNotification {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for ChangeNotification {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<ChangeNotification>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, ChangeNotification::set_odata_type)
                .enumeration("changeType", ChangeNotification::set_change_type)
                .string("clientState", ChangeNotification::set_client_state)
                .string("id", ChangeNotification::set_id)
                .enumeration("lifecycleEvent", ChangeNotification::set_lifecycle_event)
                .string("resource", ChangeNotification::set_resource)
                .date_time(
                    "subscriptionExpirationDateTime",
                    ChangeNotification::set_subscription_expiration_date_time,
                )
                .uuid("subscriptionId", ChangeNotification::set_subscription_id)
                .uuid("tenantId", ChangeNotification::set_tenant_id);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(ChangeNotification, ChangeNotification::ODATA_TYPE, store = backing_store);
leaf_factory!(ChangeNotification);

// ── changeNotificationCollection ─────────────────────────────────

/// The body POSTed to a notification URL.
#[derive(Debug, Clone)]
pub struct ChangeNotificationCollection {
    backing_store: Box<dyn BackingStore>,
}

impl ChangeNotificationCollection {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.changeNotificationCollection";

    #[must_use]
    pub fn new() -> Self {
        let mut collection = Self {
            backing_store: backing_store_factory().create(),
        };
        collection
            .backing_store
            .set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        collection
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "validationTokens" => validation_tokens, set_validation_tokens: Vec<String>;
        "value" => value, set_value: Vec<ChangeNotification>;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_collection_of_string_values(Some("validationTokens"), self.validation_tokens().as_deref())?;
        writer.write_collection_of_objects(Some("value"), self.value().as_deref())
    }
}

impl Default for ChangeNotificationCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for ChangeNotificationCollection {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<ChangeNotificationCollection>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, ChangeNotificationCollection::set_odata_type)
                .strings("validationTokens", ChangeNotificationCollection::set_validation_tokens)
                .objects(
                    "value",
                    ChangeNotification::create_from_discriminator_value,
                    ChangeNotificationCollection::set_value,
                );
            fields
        });
        &FIELDS
    }
}

impl_parsable!(
    ChangeNotificationCollection,
    ChangeNotificationCollection::ODATA_TYPE,
    store = backing_store
);
leaf_factory!(ChangeNotificationCollection);
