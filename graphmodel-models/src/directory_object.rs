use crate::catalog;
use crate::entity::{entity_model, Entity, EntityModel};
use chrono::{DateTime, FixedOffset};
use graphmodel_abstractions::serialization::{Deserializable, FieldDeserializers, Parsable, ParseNode, SerializationWriter};
use graphmodel_abstractions::{impl_parsable, SerializationResult};
use std::sync::LazyLock;

/// An object in the directory: the base of devices, contacts, users and
/// groups.
#[derive(Debug, Clone)]
pub struct DirectoryObject {
    pub(crate) entity: Entity,
}

impl DirectoryObject {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.directoryObject";

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
        /// When the object was soft-deleted; only set for deleted items.
        "deletedDateTime" => deleted_date_time, set_deleted_date_time: DateTime<FixedOffset>;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        self.entity.write_fields(writer)?;
        writer.write_date_time_value(Some("deletedDateTime"), self.deleted_date_time())
    }

    /// Picks a directory object subtype from `@odata.type`.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> SerializationResult<Box<dyn Parsable>> {
        Ok(catalog::create_derived(node, Self::ODATA_TYPE).unwrap_or_else(|| Box::new(Self::new())))
    }
}

impl Default for DirectoryObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for DirectoryObject {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<DirectoryObject>> = LazyLock::new(|| {
            let mut fields =
                FieldDeserializers::<DirectoryObject>::inherit(Entity::field_deserializers(), |object| &mut object.entity);
            fields.date_time("deletedDateTime", DirectoryObject::set_deleted_date_time);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(DirectoryObject, DirectoryObject::ODATA_TYPE, store = entity.backing_store);
entity_model!(DirectoryObject, entity);

/// Implemented by every type that embeds a [`DirectoryObject`].
pub trait DirectoryObjectModel: EntityModel {
    fn directory_object(&self) -> &DirectoryObject;

    fn directory_object_mut(&mut self) -> &mut DirectoryObject;

    fn deleted_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.directory_object().deleted_date_time()
    }

    fn set_deleted_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.directory_object_mut().set_deleted_date_time(value);
    }
}

impl DirectoryObjectModel for DirectoryObject {
    fn directory_object(&self) -> &DirectoryObject {
        self
    }

    fn directory_object_mut(&mut self) -> &mut DirectoryObject {
        self
    }
}

/// Implements [`EntityModel`] and [`DirectoryObjectModel`] for a type
/// embedding a `DirectoryObject` in the named field.
macro_rules! directory_object_model {
    ($ty:ty, $field:ident) => {
        $crate::entity::entity_model!($ty, $field.entity);

        impl $crate::directory_object::DirectoryObjectModel for $ty {
            fn directory_object(&self) -> &$crate::directory_object::DirectoryObject {
                &self.$field
            }

            fn directory_object_mut(&mut self) -> &mut $crate::directory_object::DirectoryObject {
                &mut self.$field
            }
        }
    };
}

pub(crate) use directory_object_model;
