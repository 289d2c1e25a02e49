use super::{ParseNode, SerializationWriter};
use crate::store::{BackingStore, BackingStoreExt};
use crate::{AdditionalData, SerializationError, SerializationResult, ADDITIONAL_DATA_KEY};
use std::any::Any;
use std::fmt;

/// Builds the model instance for a node, usually by inspecting its
/// `@odata.type` discriminator.
pub type ParsableFactory = fn(&dyn ParseNode) -> SerializationResult<Box<dyn Parsable>>;

/// A model that can be populated from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
///
/// Implementations are normally generated with [`impl_parsable!`](crate::impl_parsable).
pub trait Parsable: Any + Send + Sync + fmt::Debug {
    /// Discriminator value of the concrete type, e.g. `#microsoft.graph.todoTask`.
    fn odata_type_name(&self) -> &'static str;

    /// Applies the field table entry for `name`.
    ///
    /// Returns `Ok(false)` when the type has no entry for `name`.
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> SerializationResult<bool>;

    /// Writes every property, base type first, additional data last.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()>;

    fn backing_store(&self) -> &dyn BackingStore;

    fn backing_store_mut(&mut self) -> &mut dyn BackingStore;

    fn clone_box(&self) -> Box<dyn Parsable>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Properties found on the wire that the field table did not recognize.
    fn additional_data(&self) -> AdditionalData {
        self.backing_store()
            .property(ADDITIONAL_DATA_KEY)
            .unwrap_or_default()
    }

    fn set_additional_data(&mut self, data: AdditionalData) {
        self.backing_store_mut()
            .set_property(ADDITIONAL_DATA_KEY, data);
    }
}

impl Clone for Box<dyn Parsable> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl dyn Parsable {
    /// Whether the concrete model is a `T`.
    #[must_use]
    pub fn is<T: Parsable>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Parsable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Parsable>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Unboxes into the concrete model, handing the box back on mismatch.
    pub fn downcast<T: Parsable>(self: Box<Self>) -> Result<Box<T>, Box<dyn Parsable>> {
        if self.is::<T>() {
            self.into_any()
                .downcast::<T>()
                .map_err(|_| unreachable!("type checked above"))
        } else {
            Err(self)
        }
    }

    /// Unboxes into `T`, failing with [`SerializationError::TypeMismatch`]
    /// when the concrete model is some other type.
    pub fn into_model<T: Parsable>(self: Box<Self>) -> SerializationResult<T> {
        let found = self.odata_type_name();
        self.downcast::<T>()
            .map(|model| *model)
            .map_err(|_| SerializationError::TypeMismatch {
                expected: std::any::type_name::<T>(),
                found,
            })
    }
}

/// Implements [`Parsable`] and the store conversions for a model type.
///
/// The type must provide `Deserializable::field_deserializers()` and an
/// inherent `write_fields(&self, &mut dyn SerializationWriter)` method; the
/// `store` path names the field holding its `Box<dyn BackingStore>`.
///
/// ```ignore
/// impl_parsable!(TodoTask, TodoTask::ODATA_TYPE, store = entity.backing_store);
/// ```
#[macro_export]
macro_rules! impl_parsable {
    ($ty:ty, $odata_type:expr, store = $($store:ident).+) => {
        impl $crate::serialization::Parsable for $ty {
            fn odata_type_name(&self) -> &'static str {
                $odata_type
            }

            fn deserialize_field(
                &mut self,
                name: &str,
                node: &dyn $crate::serialization::ParseNode,
            ) -> $crate::SerializationResult<bool> {
                <$ty as $crate::serialization::Deserializable>::field_deserializers()
                    .deserialize(self, name, node)
            }

            fn serialize(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> $crate::SerializationResult<()> {
                self.write_fields(writer)?;
                writer.write_additional_data(
                    &$crate::serialization::Parsable::additional_data(self),
                )
            }

            fn backing_store(&self) -> &dyn $crate::store::BackingStore {
                self.$($store).+.as_ref()
            }

            fn backing_store_mut(&mut self) -> &mut dyn $crate::store::BackingStore {
                self.$($store).+.as_mut()
            }

            fn clone_box(&self) -> Box<dyn $crate::serialization::Parsable> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }

        impl $crate::store::FromStoreValue for $ty {
            const EXPECTED: &'static str = $odata_type;

            fn from_store_value(value: &$crate::store::StoreValue) -> Option<Self> {
                match value {
                    $crate::store::StoreValue::Object(model) => model.downcast_ref::<$ty>().cloned(),
                    _ => None,
                }
            }
        }

        impl $crate::store::IntoStoreValue for $ty {
            fn into_store_value(self) -> $crate::store::StoreValue {
                $crate::store::StoreValue::Object(Box::new(self))
            }
        }
    };
}
