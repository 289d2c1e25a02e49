use crate::CONTENT_TYPE;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use graphmodel_abstractions::serialization::{Parsable, ParsableFactory, ParseNode};
use graphmodel_abstractions::{AdditionalData, SerializationError, SerializationResult};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// A [`ParseNode`] over a borrowed `serde_json::Value`.
///
/// Scalars of the wrong JSON kind read as absent rather than failing, so a
/// payload with an unexpected shape for one property does not sink the
/// whole model. Objects and collections of the wrong kind are errors.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
    strict_enums: bool,
}

impl<'a> JsonParseNode<'a> {
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            strict_enums: false,
        }
    }

    #[must_use]
    pub fn with_strict_enums(mut self, strict: bool) -> Self {
        self.strict_enums = strict;
        self
    }

    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn child(&self, value: &'a Value) -> JsonParseNode<'a> {
        JsonParseNode {
            value,
            strict_enums: self.strict_enums,
        }
    }

    fn str_value(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    /// Whole-number floats (`5.0`, `1e3`) count as integers; ones outside
    /// the `i64` range are invalid rather than saturated.
    fn integer(&self) -> SerializationResult<Option<i64>> {
        let Value::Number(n) = self.value else {
            return Ok(None);
        };
        if let Some(int) = n.as_i64() {
            return Ok(Some(int));
        }
        match n.as_f64() {
            Some(f) if f.fract() != 0.0 => Ok(None),
            Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(Some(f as i64)),
            _ => Err(invalid("int64", &n.to_string())),
        }
    }
}

/// JSON kind name for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid(expected: &'static str, value: &str) -> SerializationError {
    SerializationError::InvalidValue {
        expected,
        value: value.to_owned(),
    }
}

/// RFC 3339, falling back to a zone-less timestamp read as UTC.
pub(crate) fn parse_date_time(raw: &str) -> SerializationResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).or_else(|_| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().fixed_offset())
            .map_err(|_| invalid("date-time", raw))
    })
}

pub(crate) fn parse_date(raw: &str) -> SerializationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid("date", raw))
}

pub(crate) fn parse_time(raw: &str) -> SerializationResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f").map_err(|_| invalid("time", raw))
}

impl ParseNode for JsonParseNode<'_> {
    fn child_node(&self, key: &str) -> Option<Box<dyn ParseNode + '_>> {
        self.value
            .get(key)
            .map(|value| Box::new(self.child(value)) as Box<dyn ParseNode + '_>)
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn string_value(&self) -> SerializationResult<Option<String>> {
        Ok(self.str_value().map(str::to_owned))
    }

    fn bool_value(&self) -> SerializationResult<Option<bool>> {
        Ok(self.value.as_bool())
    }

    fn i32_value(&self) -> SerializationResult<Option<i32>> {
        self.integer()?
            .map(|n| i32::try_from(n).map_err(|_| invalid("int32", &n.to_string())))
            .transpose()
    }

    fn i64_value(&self) -> SerializationResult<Option<i64>> {
        self.integer()
    }

    fn f64_value(&self) -> SerializationResult<Option<f64>> {
        Ok(self.value.as_f64())
    }

    fn uuid_value(&self) -> SerializationResult<Option<Uuid>> {
        self.str_value()
            .map(|raw| Uuid::parse_str(raw).map_err(|_| invalid("uuid", raw)))
            .transpose()
    }

    fn date_time_value(&self) -> SerializationResult<Option<DateTime<FixedOffset>>> {
        self.str_value().map(parse_date_time).transpose()
    }

    fn date_only_value(&self) -> SerializationResult<Option<NaiveDate>> {
        self.str_value().map(parse_date).transpose()
    }

    fn time_only_value(&self) -> SerializationResult<Option<NaiveTime>> {
        self.str_value().map(parse_time).transpose()
    }

    fn collection_nodes(&self) -> SerializationResult<Option<Vec<Box<dyn ParseNode + '_>>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|item| Box::new(self.child(item)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            other => Err(SerializationError::UnexpectedNodeKind {
                expected: "array",
                found: kind_of(other),
            }),
        }
    }

    fn object_value(&self, factory: ParsableFactory) -> SerializationResult<Option<Box<dyn Parsable>>> {
        let properties = match self.value {
            Value::Null => return Ok(None),
            Value::Object(properties) => properties,
            other => {
                return Err(SerializationError::UnexpectedNodeKind {
                    expected: "object",
                    found: kind_of(other),
                });
            }
        };

        let mut model = factory(self)?;
        model.backing_store_mut().set_initialization_completed(false);

        let mut additional = AdditionalData::new();
        for (name, value) in properties {
            if !model.deserialize_field(name, &self.child(value))? {
                additional.insert(name.clone(), value.clone());
            }
        }
        if !additional.is_empty() {
            model.set_additional_data(additional);
        }

        model.backing_store_mut().set_initialization_completed(true);
        debug!(
            odata_type = model.odata_type_name(),
            properties = properties.len(),
            "parsed object"
        );
        Ok(Some(model))
    }

    fn untyped_value(&self) -> Value {
        self.value.clone()
    }

    fn strict_enums(&self) -> bool {
        self.strict_enums
    }
}

/// Hands out root [`JsonParseNode`]s for `application/json` payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParseNodeFactory {
    strict_enums: bool,
}

impl JsonParseNodeFactory {
    #[must_use]
    pub fn new(strict_enums: bool) -> Self {
        Self { strict_enums }
    }

    #[must_use]
    pub fn valid_content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// Root node for `value`, after checking the payload's content type.
    ///
    /// Media type parameters such as `charset` are ignored.
    pub fn root<'a>(&self, content_type: &str, value: &'a Value) -> SerializationResult<JsonParseNode<'a>> {
        let media_type = content_type.split(';').next().unwrap_or_default().trim();
        if !media_type.eq_ignore_ascii_case(CONTENT_TYPE) {
            return Err(SerializationError::UnsupportedContentType(content_type.to_owned()));
        }
        Ok(JsonParseNode::new(value).with_strict_enums(self.strict_enums))
    }
}
