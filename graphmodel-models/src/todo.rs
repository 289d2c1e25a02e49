//! Microsoft To Do: tasks, checklist items, linked resources and the
//! complex types they carry.

use crate::entity::{entity_model, Entity};
use crate::enums::{BodyType, Importance, TaskStatus};
use crate::macros::{leaf_factory, properties};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{
    Deserializable, FieldDeserializers, SerializationWriter, SerializationWriterExt,
};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

// ── todoTask ─────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TodoTask {
    pub(crate) entity: Entity,
}

impl TodoTask {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.todoTask";

    #[must_use]
    pub fn new() -> Self {
        Self {
            entity: Entity::typed(Self::ODATA_TYPE),
        }
    }

    properties! {
        "body" => body, set_body: ItemBody;
        /// When the body was last changed by the user.
        "bodyLastModifiedDateTime" => body_last_modified_date_time, set_body_last_modified_date_time: DateTime<FixedOffset>;
        "categories" => categories, set_categories: Vec<String>;
        "checklistItems" => checklist_items, set_checklist_items: Vec<ChecklistItem>;
        "completedDateTime" => completed_date_time, set_completed_date_time: DateTimeTimeZone;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "dueDateTime" => due_date_time, set_due_date_time: DateTimeTimeZone;
        "hasAttachments" => has_attachments, set_has_attachments: bool;
        "importance" => importance, set_importance: Importance;
        "isReminderOn" => is_reminder_on, set_is_reminder_on: bool;
        "lastModifiedDateTime" => last_modified_date_time, set_last_modified_date_time: DateTime<FixedOffset>;
        "linkedResources" => linked_resources, set_linked_resources: Vec<LinkedResource>;
        "reminderDateTime" => reminder_date_time, set_reminder_date_time: DateTimeTimeZone;
        "startDateTime" => start_date_time, set_start_date_time: DateTimeTimeZone;
        "status" => status, set_status: TaskStatus;
        "title" => title, set_title: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.entity.write_fields(writer)?;
        writer.write_object(Some("body"), self.body().as_ref())?;
        writer.write_date_time_value(Some("bodyLastModifiedDateTime"), self.body_last_modified_date_time())?;
        writer.write_collection_of_string_values(Some("categories"), self.categories().as_deref())?;
        writer.write_collection_of_objects(Some("checklistItems"), self.checklist_items().as_deref())?;
        writer.write_object(Some("completedDateTime"), self.completed_date_time().as_ref())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time())?;
        writer.write_object(Some("dueDateTime"), self.due_date_time().as_ref())?;
        writer.write_bool_value(Some("hasAttachments"), self.has_attachments())?;
        writer.write_enum_value(Some("importance"), self.importance())?;
        writer.write_bool_value(Some("isReminderOn"), self.is_reminder_on())?;
        writer.write_date_time_value(Some("lastModifiedDateTime"), self.last_modified_date_time())?;
        writer.write_collection_of_objects(Some("linkedResources"), self.linked_resources().as_deref())?;
        writer.write_object(Some("reminderDateTime"), self.reminder_date_time().as_ref())?;
        writer.write_object(Some("startDateTime"), self.start_date_time().as_ref())?;
        writer.write_enum_value(Some("status"), self.status())?;
        writer.write_string_value(Some("title"), self.title().as_deref())
    }
}

impl Default for TodoTask {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for TodoTask {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<TodoTask>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::<TodoTask>::inherit(Entity::field_deserializers(), |task| &mut task.entity);
            fields
                .object("body", ItemBody::create_from_discriminator_value, TodoTask::set_body)
                .date_time("bodyLastModifiedDateTime", TodoTask::set_body_last_modified_date_time)
                .strings("categories", TodoTask::set_categories)
                .objects(
                    "checklistItems",
                    ChecklistItem::create_from_discriminator_value,
                    TodoTask::set_checklist_items,
                )
                .object(
                    "completedDateTime",
                    DateTimeTimeZone::create_from_discriminator_value,
                    TodoTask::set_completed_date_time,
                )
                .date_time("createdDateTime", TodoTask::set_created_date_time)
                .object(
                    "dueDateTime",
                    DateTimeTimeZone::create_from_discriminator_value,
                    TodoTask::set_due_date_time,
                )
                .boolean("hasAttachments", TodoTask::set_has_attachments)
                .enumeration("importance", TodoTask::set_importance)
                .boolean("isReminderOn", TodoTask::set_is_reminder_on)
                .date_time("lastModifiedDateTime", TodoTask::set_last_modified_date_time)
                .objects(
                    "linkedResources",
                    LinkedResource::create_from_discriminator_value,
                    TodoTask::set_linked_resources,
                )
                .object(
                    "reminderDateTime",
                    DateTimeTimeZone::create_from_discriminator_value,
                    TodoTask::set_reminder_date_time,
                )
                .object(
                    "startDateTime",
                    DateTimeTimeZone::create_from_discriminator_value,
                    TodoTask::set_start_date_time,
                )
                .enumeration("status", TodoTask::set_status)
                .string("title", TodoTask::set_title);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(TodoTask, TodoTask::ODATA_TYPE, store = entity.backing_store);
entity_model!(TodoTask, entity);
leaf_factory!(TodoTask);

// ── checklistItem ────────────────────────────────────────────────

/// A subtask of a [`TodoTask`].
#[derive(Debug, Clone)]
pub struct ChecklistItem {
    pub(crate) entity: Entity,
}

impl ChecklistItem {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.checklistItem";

    #[must_use]
    pub fn new() -> Self {
        Self {
            entity: Entity::typed(Self::ODATA_TYPE),
        }
    }

    properties! {
        "checkedDateTime" => checked_date_time, set_checked_date_time: DateTime<FixedOffset>;
        "createdDateTime" => created_date_time, set_created_date_time: DateTime<FixedOffset>;
        "displayName" => display_name, set_display_name: String;
        "isChecked" => is_checked, set_is_checked: bool;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.entity.write_fields(writer)?;
        writer.write_date_time_value(Some("checkedDateTime"), self.checked_date_time())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time())?;
        writer.write_string_value(Some("displayName"), self.display_name().as_deref())?;
        writer.write_bool_value(Some("isChecked"), self.is_checked())
    }
}

impl Default for ChecklistItem {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for ChecklistItem {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<ChecklistItem>> = LazyLock::new(|| {
            let mut fields =
                FieldDeserializers::<ChecklistItem>::inherit(Entity::field_deserializers(), |item| &mut item.entity);
            fields
                .date_time("checkedDateTime", ChecklistItem::set_checked_date_time)
                .date_time("createdDateTime", ChecklistItem::set_created_date_time)
                .string("displayName", ChecklistItem::set_display_name)
                .boolean("isChecked", ChecklistItem::set_is_checked);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(ChecklistItem, ChecklistItem::ODATA_TYPE, store = entity.backing_store);
entity_model!(ChecklistItem, entity);
leaf_factory!(ChecklistItem);

// ── linkedResource ───────────────────────────────────────────────

/// A link from a task back to the item it was created from.
#[derive(Debug, Clone)]
pub struct LinkedResource {
    pub(crate) entity: Entity,
}

impl LinkedResource {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.linkedResource";

    #[must_use]
    pub fn new() -> Self {
        Self {
            entity: Entity::typed(Self::ODATA_TYPE),
        }
    }

    properties! {
        /// Source application, e.g. `Outlook`.
        "applicationName" => application_name, set_application_name: String;
        "displayName" => display_name, set_display_name: String;
        "externalId" => external_id, set_external_id: String;
        "webUrl" => web_url, set_web_url: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.entity.write_fields(writer)?;
        writer.write_string_value(Some("applicationName"), self.application_name().as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name().as_deref())?;
        writer.write_string_value(Some("externalId"), self.external_id().as_deref())?;
        writer.write_string_value(Some("webUrl"), self.web_url().as_deref())
    }
}

impl Default for LinkedResource {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for LinkedResource {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<LinkedResource>> = LazyLock::new(|| {
            let mut fields =
                FieldDeserializers::<LinkedResource>::inherit(Entity::field_deserializers(), |link| &mut link.entity);
            fields
                .string("applicationName", LinkedResource::set_application_name)
                .string("displayName", LinkedResource::set_display_name)
                .string("externalId", LinkedResource::set_external_id)
                .string("webUrl", LinkedResource::set_web_url);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(LinkedResource, LinkedResource::ODATA_TYPE, store = entity.backing_store);
entity_model!(LinkedResource, entity);
leaf_factory!(LinkedResource);

// ── itemBody ─────────────────────────────────────────────────────

/// Text or HTML content of a message or task.
#[derive(Debug, Clone)]
pub struct ItemBody {
    backing_store: Box<dyn BackingStore>,
}

impl ItemBody {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.itemBody";

    #[must_use]
    pub fn new() -> Self {
        let mut body = Self {
            backing_store: backing_store_factory().create(),
        };
        body.backing_store.set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        body
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        "content" => content, set_content: String;
        "contentType" => content_type, set_content_type: BodyType;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_string_value(Some("content"), self.content().as_deref())?;
        writer.write_enum_value(Some("contentType"), self.content_type())
    }
}

impl Default for ItemBody {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for ItemBody {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<ItemBody>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, ItemBody::set_odata_type)
                .string("content", ItemBody::set_content)
                .enumeration("contentType", ItemBody::set_content_type);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(ItemBody, ItemBody::ODATA_TYPE, store = backing_store);
leaf_factory!(ItemBody);

// ── dateTimeTimeZone ─────────────────────────────────────────────

/// A local date and time plus the time zone it is expressed in.
///
/// `dateTime` is kept as the raw string since it carries no offset.
#[derive(Debug, Clone)]
pub struct DateTimeTimeZone {
    backing_store: Box<dyn BackingStore>,
}

impl DateTimeTimeZone {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.dateTimeTimeZone";

    #[must_use]
    pub fn new() -> Self {
        let mut value = Self {
            backing_store: backing_store_factory().create(),
        };
        value.backing_store.set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        value
    }

    /// Shorthand for a value with both properties set.
    #[must_use]
    pub fn at(date_time: &str, time_zone: &str) -> Self {
        let mut value = Self::new();
        value.set_date_time(Some(date_time.to_owned()));
        value.set_time_zone(Some(time_zone.to_owned()));
        value
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
        /// e.g. `2024-05-01T17:00:00.0000000`.
        "dateTime" => date_time, set_date_time: String;
        /// Windows or IANA zone name, e.g. `Pacific Standard Time`.
        "timeZone" => time_zone, set_time_zone: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_string_value(Some("dateTime"), self.date_time().as_deref())?;
        writer.write_string_value(Some("timeZone"), self.time_zone().as_deref())
    }
}

impl Default for DateTimeTimeZone {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for DateTimeTimeZone {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<DateTimeTimeZone>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string(ODATA_TYPE_KEY, DateTimeTimeZone::set_odata_type)
                .string("dateTime", DateTimeTimeZone::set_date_time)
                .string("timeZone", DateTimeTimeZone::set_time_zone);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(DateTimeTimeZone, DateTimeTimeZone::ODATA_TYPE, store = backing_store);
leaf_factory!(DateTimeTimeZone);
