use super::{ParsableFactory, ParseNode, ParseNodeExt, Parsable, Primitive};
use crate::enums::{GraphEnum, GraphFlags};
use crate::SerializationResult;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Parses one wire property into a model of type `M`.
pub type FieldDeserializer<M> =
    Box<dyn Fn(&mut M, &dyn ParseNode) -> SerializationResult<()> + Send + Sync>;

/// A model type's table from wire property name to parse callback.
///
/// Derived types start from their parent's table with
/// [`inherit`](Self::inherit) and add their own entries on top, so a
/// lookup covers the whole composition chain.
pub struct FieldDeserializers<M> {
    fields: BTreeMap<&'static str, FieldDeserializer<M>>,
}

/// Types with a statically built field table.
pub trait Deserializable: Sized + 'static {
    fn field_deserializers() -> &'static FieldDeserializers<Self>;
}

impl<M: 'static> FieldDeserializers<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Copies a parent type's table, reaching the parent through `project`.
    #[must_use]
    pub fn inherit<B: 'static>(base: &'static FieldDeserializers<B>, project: fn(&mut M) -> &mut B) -> Self {
        let fields = base
            .fields
            .iter()
            .map(|(name, parse)| {
                let lifted: FieldDeserializer<M> = Box::new(move |model: &mut M, node: &dyn ParseNode| {
                    parse(project(model), node)
                });
                (*name, lifted)
            })
            .collect();
        Self { fields }
    }

    /// Adds or replaces the entry for `name`.
    pub fn insert<F>(&mut self, name: &'static str, parse: F) -> &mut Self
    where
        F: Fn(&mut M, &dyn ParseNode) -> SerializationResult<()> + Send + Sync + 'static,
    {
        self.fields.insert(name, Box::new(parse));
        self
    }

    /// Runs the entry for `name`; `Ok(false)` when there is none.
    pub fn deserialize(&self, model: &mut M, name: &str, node: &dyn ParseNode) -> SerializationResult<bool> {
        match self.fields.get(name) {
            Some(parse) => {
                parse(model, node)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDeserializer<M>> {
        self.fields.get(name)
    }

    /// Wire names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // ── Typed entry helpers ──────────────────────────────────────
    //
    // Each reads the node with the matching getter and calls the setter
    // only when a value is present.

    fn primitive<T: Primitive + 'static>(&mut self, name: &'static str, set: fn(&mut M, Option<T>)) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(value) = T::from_node(node)? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    pub fn string(&mut self, name: &'static str, set: fn(&mut M, Option<String>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn boolean(&mut self, name: &'static str, set: fn(&mut M, Option<bool>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn int32(&mut self, name: &'static str, set: fn(&mut M, Option<i32>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn int64(&mut self, name: &'static str, set: fn(&mut M, Option<i64>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn float(&mut self, name: &'static str, set: fn(&mut M, Option<f64>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn uuid(&mut self, name: &'static str, set: fn(&mut M, Option<Uuid>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn date_time(&mut self, name: &'static str, set: fn(&mut M, Option<DateTime<FixedOffset>>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn date(&mut self, name: &'static str, set: fn(&mut M, Option<NaiveDate>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn time(&mut self, name: &'static str, set: fn(&mut M, Option<NaiveTime>)) -> &mut Self {
        self.primitive(name, set)
    }

    pub fn strings(&mut self, name: &'static str, set: fn(&mut M, Option<Vec<String>>)) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(values) = node.collection_of_primitive_values::<String>()? {
                set(model, Some(values));
            }
            Ok(())
        })
    }

    pub fn enumeration<E: GraphEnum>(&mut self, name: &'static str, set: fn(&mut M, Option<E>)) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(value) = node.enum_value::<E>()? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    pub fn enumerations<E: GraphEnum>(&mut self, name: &'static str, set: fn(&mut M, Option<Vec<E>>)) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(values) = node.collection_of_enum_values::<E>()? {
                set(model, Some(values));
            }
            Ok(())
        })
    }

    pub fn flags<F: GraphFlags>(&mut self, name: &'static str, set: fn(&mut M, Option<F>)) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(value) = node.flags_value::<F>()? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    /// Nested model of a known concrete type.
    pub fn object<T: Parsable>(
        &mut self,
        name: &'static str,
        factory: ParsableFactory,
        set: fn(&mut M, Option<T>),
    ) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(value) = node.object_value_as::<T>(factory)? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    /// Nested model whose concrete type is picked by the factory.
    pub fn polymorphic(
        &mut self,
        name: &'static str,
        factory: ParsableFactory,
        set: fn(&mut M, Option<Box<dyn Parsable>>),
    ) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(value) = node.object_value(factory)? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    pub fn objects<T: Parsable>(
        &mut self,
        name: &'static str,
        factory: ParsableFactory,
        set: fn(&mut M, Option<Vec<T>>),
    ) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(values) = node.collection_of_object_values_as::<T>(factory)? {
                set(model, Some(values));
            }
            Ok(())
        })
    }

    pub fn polymorphic_collection(
        &mut self,
        name: &'static str,
        factory: ParsableFactory,
        set: fn(&mut M, Option<Vec<Box<dyn Parsable>>>),
    ) -> &mut Self {
        self.insert(name, move |model, node| {
            if let Some(values) = node.collection_of_object_values(factory)? {
                set(model, Some(values));
            }
            Ok(())
        })
    }
}

impl<M: 'static> Default for FieldDeserializers<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for FieldDeserializers<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields.keys()).finish()
    }
}
