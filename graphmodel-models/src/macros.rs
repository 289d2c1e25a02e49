/// Getter/setter pairs over a model's backing store.
///
/// Getters return `None` for absent values and for values of the wrong
/// type (logged by the store). Setters store `None` as an explicit null.
macro_rules! properties {
    ($( $(#[$meta:meta])* $key:literal => $get:ident, $set:ident : $ty:ty; )+) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $get(&self) -> Option<$ty> {
                graphmodel_abstractions::store::BackingStoreExt::property(
                    graphmodel_abstractions::serialization::Parsable::backing_store(self),
                    $key,
                )
            }

            pub fn $set(&mut self, value: Option<$ty>) {
                graphmodel_abstractions::store::BackingStoreExt::set_property(
                    graphmodel_abstractions::serialization::Parsable::backing_store_mut(self),
                    $key,
                    value,
                );
            }
        )+
    };
}

/// A `ParsableFactory` for a type with no derived types.
macro_rules! leaf_factory {
    ($ty:ty) => {
        impl $ty {
            pub fn create_from_discriminator_value(
                _node: &dyn graphmodel_abstractions::serialization::ParseNode,
            ) -> graphmodel_abstractions::SerializationResult<
                Box<dyn graphmodel_abstractions::serialization::Parsable>,
            > {
                Ok(Box::new(<$ty>::new()))
            }
        }
    };
}

pub(crate) use leaf_factory;
pub(crate) use properties;
