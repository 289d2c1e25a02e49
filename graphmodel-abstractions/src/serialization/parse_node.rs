use super::{Parsable, ParsableFactory};
use crate::enums::{parse_enum_value, GraphEnum, GraphFlags};
use crate::{SerializationError, SerializationResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use tracing::warn;
use uuid::Uuid;

/// A cursor over one node of an incoming payload.
///
/// Scalar getters return `Ok(None)` for null or absent values. They fail
/// only when a value is present but malformed (an unparsable date, an
/// out-of-range integer).
pub trait ParseNode {
    fn child_node(&self, key: &str) -> Option<Box<dyn ParseNode + '_>>;

    fn is_null(&self) -> bool;

    fn string_value(&self) -> SerializationResult<Option<String>>;

    fn bool_value(&self) -> SerializationResult<Option<bool>>;

    fn i32_value(&self) -> SerializationResult<Option<i32>>;

    fn i64_value(&self) -> SerializationResult<Option<i64>>;

    fn f64_value(&self) -> SerializationResult<Option<f64>>;

    fn uuid_value(&self) -> SerializationResult<Option<Uuid>>;

    fn date_time_value(&self) -> SerializationResult<Option<DateTime<FixedOffset>>>;

    fn date_only_value(&self) -> SerializationResult<Option<NaiveDate>>;

    fn time_only_value(&self) -> SerializationResult<Option<NaiveTime>>;

    /// Element nodes of a collection; errors when the node is not one.
    fn collection_nodes(&self) -> SerializationResult<Option<Vec<Box<dyn ParseNode + '_>>>>;

    /// Builds a model with `factory` and populates it from this node.
    fn object_value(&self, factory: ParsableFactory) -> SerializationResult<Option<Box<dyn Parsable>>>;

    /// The node as free-form JSON, for additional data.
    fn untyped_value(&self) -> serde_json::Value;

    /// Whether unknown enum strings should fail even for lenient enums.
    fn strict_enums(&self) -> bool {
        false
    }

    /// Null elements are skipped.
    fn collection_of_object_values(
        &self,
        factory: ParsableFactory,
    ) -> SerializationResult<Option<Vec<Box<dyn Parsable>>>> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut models = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(model) = node.object_value(factory)? {
                models.push(model);
            }
        }
        Ok(Some(models))
    }
}

/// Scalar types a [`ParseNode`] can produce.
pub trait Primitive: Sized {
    fn from_node(node: &dyn ParseNode) -> SerializationResult<Option<Self>>;
}

macro_rules! primitive {
    ($ty:ty, $getter:ident) => {
        impl Primitive for $ty {
            fn from_node(node: &dyn ParseNode) -> SerializationResult<Option<Self>> {
                node.$getter()
            }
        }
    };
}

primitive!(String, string_value);
primitive!(bool, bool_value);
primitive!(i32, i32_value);
primitive!(i64, i64_value);
primitive!(f64, f64_value);
primitive!(Uuid, uuid_value);
primitive!(DateTime<FixedOffset>, date_time_value);
primitive!(NaiveDate, date_only_value);
primitive!(NaiveTime, time_only_value);

/// Generic getters layered on any [`ParseNode`].
pub trait ParseNodeExt: ParseNode {
    fn enum_value<E: GraphEnum>(&self) -> SerializationResult<Option<E>> {
        match self.string_value()? {
            Some(raw) => parse_enum_value::<E>(&raw, self.strict_enums()),
            None => Ok(None),
        }
    }

    /// Unknown segments make the whole value absent.
    fn flags_value<F: GraphFlags>(&self) -> SerializationResult<Option<F>> {
        let Some(raw) = self.string_value()? else {
            return Ok(None);
        };
        match F::parse_flags(&raw) {
            Some(flags) => Ok(Some(flags)),
            None if self.strict_enums() => Err(SerializationError::UnknownEnumValue {
                enum_name: F::NAME,
                value: raw,
            }),
            None => {
                warn!(flags = F::NAME, value = %raw, "ignoring unknown flag value");
                Ok(None)
            }
        }
    }

    /// Unknown entries are dropped from the result.
    fn collection_of_enum_values<E: GraphEnum>(&self) -> SerializationResult<Option<Vec<E>>> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(value) = node.enum_value::<E>()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    /// Null entries are dropped from the result.
    fn collection_of_primitive_values<T: Primitive>(&self) -> SerializationResult<Option<Vec<T>>> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(value) = T::from_node(&*node)? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    /// Parses a nested model that must come out of `factory` as a `T`.
    fn object_value_as<T: Parsable>(&self, factory: ParsableFactory) -> SerializationResult<Option<T>> {
        match self.object_value(factory)? {
            Some(model) => model.into_model().map(Some),
            None => Ok(None),
        }
    }

    fn collection_of_object_values_as<T: Parsable>(
        &self,
        factory: ParsableFactory,
    ) -> SerializationResult<Option<Vec<T>>> {
        match self.collection_of_object_values(factory)? {
            Some(models) => models
                .into_iter()
                .map(<dyn Parsable>::into_model)
                .collect::<SerializationResult<Vec<T>>>()
                .map(Some),
            None => Ok(None),
        }
    }
}

impl<N: ParseNode + ?Sized> ParseNodeExt for N {}
