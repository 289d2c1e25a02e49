use super::Parsable;
use crate::enums::{serialize_enum_values, GraphEnum, GraphFlags};
use crate::{AdditionalData, SerializationResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

/// Writes model properties to a wire format.
///
/// `key` is `None` for values written as collection elements. `None`
/// values are skipped; use [`write_null_value`](Self::write_null_value)
/// to emit an explicit null.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> SerializationResult<()>;

    fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> SerializationResult<()>;

    fn write_i32_value(&mut self, key: Option<&str>, value: Option<i32>) -> SerializationResult<()>;

    fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> SerializationResult<()>;

    fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> SerializationResult<()>;

    fn write_uuid_value(&mut self, key: Option<&str>, value: Option<Uuid>) -> SerializationResult<()>;

    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: Option<DateTime<FixedOffset>>,
    ) -> SerializationResult<()>;

    fn write_date_only_value(&mut self, key: Option<&str>, value: Option<NaiveDate>) -> SerializationResult<()>;

    fn write_time_only_value(&mut self, key: Option<&str>, value: Option<NaiveTime>) -> SerializationResult<()>;

    fn write_null_value(&mut self, key: Option<&str>) -> SerializationResult<()>;

    fn write_collection_of_string_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[String]>,
    ) -> SerializationResult<()>;

    fn write_object_value(&mut self, key: Option<&str>, value: Option<&dyn Parsable>) -> SerializationResult<()>;

    fn write_collection_of_object_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn Parsable]>,
    ) -> SerializationResult<()>;

    fn write_untyped_value(&mut self, key: Option<&str>, value: &serde_json::Value) -> SerializationResult<()>;

    /// Writes each entry as a property of the object being written.
    fn write_additional_data(&mut self, data: &AdditionalData) -> SerializationResult<()> {
        for (key, value) in data {
            self.write_untyped_value(Some(key), value)?;
        }
        Ok(())
    }
}

/// Generic writers layered on any [`SerializationWriter`].
pub trait SerializationWriterExt: SerializationWriter {
    fn write_enum_value<E: GraphEnum>(&mut self, key: Option<&str>, value: Option<E>) -> SerializationResult<()> {
        self.write_string_value(key, value.as_ref().map(GraphEnum::as_str))
    }

    fn write_flags_value<F: GraphFlags>(&mut self, key: Option<&str>, value: Option<F>) -> SerializationResult<()> {
        let rendered = value.map(|flags| flags.render());
        self.write_string_value(key, rendered.as_deref())
    }

    fn write_collection_of_enum_values<E: GraphEnum>(
        &mut self,
        key: Option<&str>,
        values: Option<&[E]>,
    ) -> SerializationResult<()> {
        let rendered = values.map(serialize_enum_values);
        self.write_collection_of_string_values(key, rendered.as_deref())
    }

    /// Typed form of [`write_object_value`](SerializationWriter::write_object_value).
    fn write_object<T: Parsable>(&mut self, key: Option<&str>, value: Option<&T>) -> SerializationResult<()> {
        self.write_object_value(key, value.map(|model| model as &dyn Parsable))
    }

    fn write_collection_of_objects<T: Parsable>(
        &mut self,
        key: Option<&str>,
        values: Option<&[T]>,
    ) -> SerializationResult<()> {
        let refs: Option<Vec<&dyn Parsable>> =
            values.map(|items| items.iter().map(|item| item as &dyn Parsable).collect());
        self.write_collection_of_object_values(key, refs.as_deref())
    }

    fn write_collection_of_boxed_objects(
        &mut self,
        key: Option<&str>,
        values: Option<&[Box<dyn Parsable>]>,
    ) -> SerializationResult<()> {
        let refs: Option<Vec<&dyn Parsable>> =
            values.map(|items| items.iter().map(|item| &**item).collect());
        self.write_collection_of_object_values(key, refs.as_deref())
    }
}

impl<W: SerializationWriter + ?Sized> SerializationWriterExt for W {}
