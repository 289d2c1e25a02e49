//! JSON wire format for Graph models.
//!
//! [`JsonParseNode`] reads a `serde_json::Value` into models through their
//! field tables; [`JsonSerializationWriter`] writes them back. The free
//! functions below cover the usual entry points: parse one object, parse
//! an OData collection page, and write a model as JSON text or value.

mod options;
mod parse_node;
mod writer;

pub use options::JsonOptions;
pub use parse_node::{JsonParseNode, JsonParseNodeFactory};
pub use writer::{JsonSerializationWriter, JsonSerializationWriterFactory};

use graphmodel_abstractions::serialization::{Parsable, ParsableFactory, ParseNode, SerializationWriter};
use graphmodel_abstractions::{SerializationError, SerializationResult};
use serde_json::Value;

/// Media type handled by this crate.
pub const CONTENT_TYPE: &str = "application/json";

/// One page of an OData collection response.
#[derive(Debug, Clone, PartialEq)]
pub struct ODataCollection<T> {
    pub value: Vec<T>,
    /// `@odata.nextLink`: URL of the next page.
    pub next_link: Option<String>,
    /// `@odata.deltaLink`: URL for the next delta query.
    pub delta_link: Option<String>,
    /// `@odata.count`, when `$count=true` was requested.
    pub count: Option<i64>,
}

impl<T> ODataCollection<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn map_values<U>(self, f: impl FnMut(T) -> SerializationResult<U>) -> SerializationResult<ODataCollection<U>> {
        Ok(ODataCollection {
            value: self.value.into_iter().map(f).collect::<SerializationResult<_>>()?,
            next_link: self.next_link,
            delta_link: self.delta_link,
            count: self.count,
        })
    }
}

/// Parses an already-decoded JSON value. A JSON `null` yields `Ok(None)`.
pub fn parse_value(
    value: &Value,
    factory: ParsableFactory,
    options: &JsonOptions,
) -> SerializationResult<Option<Box<dyn Parsable>>> {
    JsonParseNode::new(value)
        .with_strict_enums(options.strict_enums)
        .object_value(factory)
}

/// Parses JSON text into a model whose concrete type the factory picks.
pub fn parse_dyn(json: &str, factory: ParsableFactory, options: &JsonOptions) -> SerializationResult<Box<dyn Parsable>> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(&value, factory, options)?.ok_or(SerializationError::UnexpectedNodeKind {
        expected: "object",
        found: "null",
    })
}

/// Parses JSON text into a `T`.
///
/// Fails with [`SerializationError::TypeMismatch`] when the factory picks
/// a different concrete type for the payload's `@odata.type`.
pub fn parse<T: Parsable>(json: &str, factory: ParsableFactory) -> SerializationResult<T> {
    parse_with(json, factory, &JsonOptions::default())
}

pub fn parse_with<T: Parsable>(json: &str, factory: ParsableFactory, options: &JsonOptions) -> SerializationResult<T> {
    parse_dyn(json, factory, options)?.into_model()
}

/// Parses an OData collection page (`{"value": [...], "@odata.nextLink": ...}`),
/// keeping each element behind `dyn Parsable`.
pub fn parse_collection_dyn(
    json: &str,
    factory: ParsableFactory,
    options: &JsonOptions,
) -> SerializationResult<ODataCollection<Box<dyn Parsable>>> {
    let root: Value = serde_json::from_str(json)?;
    if !root.is_object() {
        return Err(SerializationError::UnexpectedNodeKind {
            expected: "object",
            found: parse_node::kind_of(&root),
        });
    }

    let node = JsonParseNode::new(&root).with_strict_enums(options.strict_enums);
    let value = match node.child_node("value") {
        Some(items) => items.collection_of_object_values(factory)?.unwrap_or_default(),
        None => Vec::new(),
    };
    let link = |key: &str| root.get(key).and_then(Value::as_str).map(str::to_owned);

    Ok(ODataCollection {
        value,
        next_link: link("@odata.nextLink"),
        delta_link: link("@odata.deltaLink"),
        count: root.get("@odata.count").and_then(Value::as_i64),
    })
}

/// Typed form of [`parse_collection_dyn`]; every element must be a `T`.
pub fn parse_collection<T: Parsable>(json: &str, factory: ParsableFactory) -> SerializationResult<ODataCollection<T>> {
    parse_collection_with(json, factory, &JsonOptions::default())
}

pub fn parse_collection_with<T: Parsable>(
    json: &str,
    factory: ParsableFactory,
    options: &JsonOptions,
) -> SerializationResult<ODataCollection<T>> {
    parse_collection_dyn(json, factory, options)?.map_values(<dyn Parsable>::into_model)
}

/// Writes `model` to a JSON value.
pub fn to_json_value(model: &dyn Parsable, options: &JsonOptions) -> SerializationResult<Value> {
    let mut writer = JsonSerializationWriter::with_options(options);
    writer.write_object_value(None, Some(model))?;
    Ok(writer.into_value())
}

/// Writes `model` as JSON text, indented when `options.pretty` is set.
pub fn to_json_string(model: &dyn Parsable, options: &JsonOptions) -> SerializationResult<String> {
    let mut writer = JsonSerializationWriter::with_options(options);
    writer.write_object_value(None, Some(model))?;
    writer.into_string()
}
