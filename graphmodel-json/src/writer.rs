use crate::{JsonOptions, CONTENT_TYPE};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use graphmodel_abstractions::serialization::{Parsable, SerializationWriter};
use graphmodel_abstractions::{SerializationError, SerializationResult};
use serde_json::{Map, Value};
use uuid::Uuid;

enum Frame {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

/// A [`SerializationWriter`] that builds a `serde_json::Value`.
///
/// Nested objects and collections are assembled on a frame stack and
/// attached to their parent when closed. A keyed write with nothing open
/// starts a root object.
pub struct JsonSerializationWriter {
    root: Option<Value>,
    stack: Vec<Frame>,
    changes_only: bool,
    pretty: bool,
}

impl JsonSerializationWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&JsonOptions::default())
    }

    #[must_use]
    pub fn with_options(options: &JsonOptions) -> Self {
        Self {
            root: None,
            stack: Vec::new(),
            changes_only: options.backing_store_changes_only,
            pretty: options.pretty,
        }
    }

    /// The value written so far; `Null` when nothing was written.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root.unwrap_or(Value::Null)
    }

    pub fn into_string(self) -> SerializationResult<String> {
        let pretty = self.pretty;
        let value = self.into_value();
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    pub fn into_bytes(self) -> SerializationResult<Vec<u8>> {
        self.into_string().map(String::into_bytes)
    }

    fn put(&mut self, key: Option<&str>, value: Value) -> SerializationResult<()> {
        match (self.stack.last_mut(), key) {
            (Some(Frame::Object(properties)), Some(key)) => {
                properties.insert(key.to_owned(), value);
                Ok(())
            }
            (Some(Frame::Array(items)), None) => {
                items.push(value);
                Ok(())
            }
            (Some(Frame::Object(_)), None) => Err(SerializationError::Writer(
                "value without a property name inside an object".to_owned(),
            )),
            (Some(Frame::Array(_)), Some(key)) => Err(SerializationError::Writer(format!(
                "property '{key}' written inside an array"
            ))),
            (None, None) => {
                self.root = Some(value);
                Ok(())
            }
            (None, Some(key)) => match self.root.get_or_insert_with(|| Value::Object(Map::new())) {
                Value::Object(properties) => {
                    properties.insert(key.to_owned(), value);
                    Ok(())
                }
                _ => Err(SerializationError::Writer(format!(
                    "property '{key}' written after a non-object root"
                ))),
            },
        }
    }

    fn write_model_properties(&mut self, model: &dyn Parsable) -> SerializationResult<()> {
        if self.changes_only {
            for key in model.backing_store().enumerate_keys_for_values_changed_to_null() {
                self.write_null_value(Some(&key))?;
            }
        }
        model.serialize(self)
    }
}

impl Default for JsonSerializationWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value)),
            None => Ok(()),
        }
    }

    fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value)),
            None => Ok(()),
        }
    }

    fn write_i32_value(&mut self, key: Option<&str>, value: Option<i32>) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value)),
            None => Ok(()),
        }
    }

    fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value)),
            None => Ok(()),
        }
    }

    fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> SerializationResult<()> {
        match value {
            Some(value) if value.is_finite() => self.put(key, Value::from(value)),
            Some(value) => Err(SerializationError::InvalidValue {
                expected: "finite number",
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn write_uuid_value(&mut self, key: Option<&str>, value: Option<Uuid>) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value.to_string())),
            None => Ok(()),
        }
    }

    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: Option<DateTime<FixedOffset>>,
    ) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))),
            None => Ok(()),
        }
    }

    fn write_date_only_value(&mut self, key: Option<&str>, value: Option<NaiveDate>) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value.format("%Y-%m-%d").to_string())),
            None => Ok(()),
        }
    }

    fn write_time_only_value(&mut self, key: Option<&str>, value: Option<NaiveTime>) -> SerializationResult<()> {
        match value {
            Some(value) => self.put(key, Value::from(value.format("%H:%M:%S%.f").to_string())),
            None => Ok(()),
        }
    }

    fn write_null_value(&mut self, key: Option<&str>) -> SerializationResult<()> {
        self.put(key, Value::Null)
    }

    fn write_collection_of_string_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[String]>,
    ) -> SerializationResult<()> {
        match values {
            Some(values) => self.put(key, Value::from(values.to_vec())),
            None => Ok(()),
        }
    }

    fn write_object_value(&mut self, key: Option<&str>, value: Option<&dyn Parsable>) -> SerializationResult<()> {
        let Some(model) = value else {
            return Ok(());
        };

        let store = model.backing_store();
        if self.changes_only {
            store.set_return_only_changed_values(true);
        }
        self.stack.push(Frame::Object(Map::new()));
        let written = self.write_model_properties(model);
        let frame = self.stack.pop();
        if self.changes_only {
            store.set_return_only_changed_values(false);
        }
        written?;

        match frame {
            Some(Frame::Object(properties)) => self.put(key, Value::Object(properties)),
            _ => Err(SerializationError::Writer("unbalanced object frame".to_owned())),
        }
    }

    fn write_collection_of_object_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn Parsable]>,
    ) -> SerializationResult<()> {
        let Some(models) = values else {
            return Ok(());
        };

        self.stack.push(Frame::Array(Vec::with_capacity(models.len())));
        let written = models
            .iter()
            .try_for_each(|model| self.write_object_value(None, Some(*model)));
        let frame = self.stack.pop();
        written?;

        match frame {
            Some(Frame::Array(items)) => self.put(key, Value::Array(items)),
            _ => Err(SerializationError::Writer("unbalanced collection frame".to_owned())),
        }
    }

    fn write_untyped_value(&mut self, key: Option<&str>, value: &Value) -> SerializationResult<()> {
        self.put(key, value.clone())
    }
}

/// Hands out [`JsonSerializationWriter`]s configured from [`JsonOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializationWriterFactory {
    options: JsonOptions,
}

impl JsonSerializationWriterFactory {
    #[must_use]
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn valid_content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    #[must_use]
    pub fn writer(&self) -> JsonSerializationWriter {
        JsonSerializationWriter::with_options(&self.options)
    }
}
