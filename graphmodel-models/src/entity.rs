use crate::catalog;
use crate::macros::properties;
use graphmodel_abstractions::serialization::{Deserializable, FieldDeserializers, Parsable, ParseNode, SerializationWriter};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

/// Base of every entity type: an `id` and the `@odata.type` discriminator.
///
/// Derived models embed an `Entity` and share its backing store.
#[derive(Debug, Clone)]
pub struct Entity {
    pub(crate) backing_store: Box<dyn BackingStore>,
}

impl Entity {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.entity";

    #[must_use]
    pub fn new() -> Self {
        Self {
            backing_store: backing_store_factory().create(),
        }
    }

    /// An entity whose discriminator is already set, for derived types.
    pub(crate) fn typed(odata_type: &str) -> Self {
        let mut entity = Self::new();
        entity.backing_store.set_property(ODATA_TYPE_KEY, odata_type);
        entity
    }

    properties! {
        "id" => id, set_id: String;
        /// Discriminator naming the concrete type.
        "@odata.type" => odata_type, set_odata_type: String;
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        writer.write_string_value(Some("id"), self.id().as_deref())
    }

    /// Picks the catalog type named by `@odata.type`, falling back to a
    /// plain `Entity`.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> SerializationResult<Box<dyn Parsable>> {
        Ok(catalog::create_derived(node, Self::ODATA_TYPE).unwrap_or_else(|| Box::new(Self::new())))
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for Entity {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<Entity>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .string("id", Entity::set_id)
                .string(ODATA_TYPE_KEY, Entity::set_odata_type);
            fields
        });
        &FIELDS
    }
}

impl_parsable!(Entity, Entity::ODATA_TYPE, store = backing_store);

/// Shorthand for [`Entity::create_from_discriminator_value`].
pub fn create_entity_from_discriminator_value(node: &dyn ParseNode) -> SerializationResult<Box<dyn Parsable>> {
    Entity::create_from_discriminator_value(node)
}

/// Implemented by every type that embeds an [`Entity`].
pub trait EntityModel: Parsable {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    fn id(&self) -> Option<String> {
        self.entity().id()
    }

    fn set_id(&mut self, value: Option<String>) {
        self.entity_mut().set_id(value);
    }

    fn odata_type(&self) -> Option<String> {
        self.entity().odata_type()
    }

    fn set_odata_type(&mut self, value: Option<String>) {
        self.entity_mut().set_odata_type(value);
    }
}

impl EntityModel for Entity {
    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

/// Implements [`EntityModel`] for a type through the path to its `Entity`.
macro_rules! entity_model {
    ($ty:ty, $($path:ident).+) => {
        impl $crate::entity::EntityModel for $ty {
            fn entity(&self) -> &$crate::entity::Entity {
                &self.$($path).+
            }

            fn entity_mut(&mut self) -> &mut $crate::entity::Entity {
                &mut self.$($path).+
            }
        }
    };
}

pub(crate) use entity_model;
