//! Values held by a backing store and the conversions in and out of them.

use crate::serialization::Parsable;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

/// A property value as kept in a backing store.
///
/// `Null` records an explicit "no value" so that a property cleared after
/// initialization can still be reported as changed.
#[derive(Debug)]
pub enum StoreValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Uuid(Uuid),
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Wire spelling of an enum or flag-enum value.
    Enum(String),
    Object(Box<dyn Parsable>),
    Collection(Vec<StoreValue>),
    /// Free-form JSON (additional data, untyped properties).
    Untyped(serde_json::Value),
}

impl StoreValue {
    /// Short type name used in mismatch errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Uuid(_) => "uuid",
            Self::DateTime(_) => "datetime",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::Collection(_) => "collection",
            Self::Untyped(_) => "untyped",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Visits every backed model directly held by this value.
    pub fn for_each_model(&self, f: &mut dyn FnMut(&dyn Parsable)) {
        match self {
            Self::Object(model) => f(model.as_ref()),
            Self::Collection(items) => items.iter().for_each(|item| item.for_each_model(f)),
            _ => {}
        }
    }

    /// Mutable counterpart of [`StoreValue::for_each_model`].
    pub fn for_each_model_mut(&mut self, f: &mut dyn FnMut(&mut dyn Parsable)) {
        match self {
            Self::Object(model) => f(model.as_mut()),
            Self::Collection(items) => items
                .iter_mut()
                .for_each(|item| item.for_each_model_mut(f)),
            _ => {}
        }
    }
}

impl Clone for StoreValue {
    fn clone(&self) -> Self {
        match self {
            Self::Null => Self::Null,
            Self::Bool(v) => Self::Bool(*v),
            Self::Int(v) => Self::Int(*v),
            Self::Float(v) => Self::Float(*v),
            Self::String(v) => Self::String(v.clone()),
            Self::Uuid(v) => Self::Uuid(*v),
            Self::DateTime(v) => Self::DateTime(*v),
            Self::Date(v) => Self::Date(*v),
            Self::Time(v) => Self::Time(*v),
            Self::Enum(v) => Self::Enum(v.clone()),
            Self::Object(model) => Self::Object(model.clone_box()),
            Self::Collection(items) => Self::Collection(items.clone()),
            Self::Untyped(v) => Self::Untyped(v.clone()),
        }
    }
}

/// Models never compare equal; the store treats every object write as a change.
impl PartialEq for StoreValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Uuid(a), Self::Uuid(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Collection(a), Self::Collection(b)) => a == b,
            (Self::Untyped(a), Self::Untyped(b)) => a == b,
            _ => false,
        }
    }
}

/// Typed extraction from a [`StoreValue`].
///
/// Returns `None` when the value has a different shape; the store turns
/// that into [`StoreError::TypeMismatch`](crate::StoreError::TypeMismatch).
pub trait FromStoreValue: Sized {
    /// Type name reported in mismatch errors.
    const EXPECTED: &'static str;

    fn from_store_value(value: &StoreValue) -> Option<Self>;
}

/// Conversion of a typed property value into a [`StoreValue`].
pub trait IntoStoreValue {
    fn into_store_value(self) -> StoreValue;
}

macro_rules! store_scalar {
    ($ty:ty, $expected:literal, $variant:ident) => {
        impl FromStoreValue for $ty {
            const EXPECTED: &'static str = $expected;

            fn from_store_value(value: &StoreValue) -> Option<Self> {
                match value {
                    StoreValue::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }

        impl IntoStoreValue for $ty {
            fn into_store_value(self) -> StoreValue {
                StoreValue::$variant(self)
            }
        }
    };
}

store_scalar!(bool, "bool", Bool);
store_scalar!(i64, "int", Int);
store_scalar!(String, "string", String);
store_scalar!(Uuid, "uuid", Uuid);
store_scalar!(DateTime<FixedOffset>, "datetime", DateTime);
store_scalar!(NaiveDate, "date", Date);
store_scalar!(NaiveTime, "time", Time);
store_scalar!(serde_json::Value, "untyped", Untyped);

impl FromStoreValue for i32 {
    const EXPECTED: &'static str = "int";

    fn from_store_value(value: &StoreValue) -> Option<Self> {
        match value {
            StoreValue::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl IntoStoreValue for i32 {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Int(i64::from(self))
    }
}

impl FromStoreValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_store_value(value: &StoreValue) -> Option<Self> {
        match value {
            StoreValue::Float(v) => Some(*v),
            StoreValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl IntoStoreValue for f64 {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Float(self)
    }
}

impl IntoStoreValue for &str {
    fn into_store_value(self) -> StoreValue {
        StoreValue::String(self.to_owned())
    }
}

impl FromStoreValue for crate::AdditionalData {
    const EXPECTED: &'static str = "untyped object";

    fn from_store_value(value: &StoreValue) -> Option<Self> {
        match value {
            StoreValue::Untyped(serde_json::Value::Object(map)) => Some(map.clone()),
            _ => None,
        }
    }
}

impl IntoStoreValue for crate::AdditionalData {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Untyped(serde_json::Value::Object(self))
    }
}

/// Polymorphic model values keep their concrete type behind the box.
impl FromStoreValue for Box<dyn Parsable> {
    const EXPECTED: &'static str = "object";

    fn from_store_value(value: &StoreValue) -> Option<Self> {
        match value {
            StoreValue::Object(model) => Some(model.clone_box()),
            _ => None,
        }
    }
}

impl IntoStoreValue for Box<dyn Parsable> {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Object(self)
    }
}

impl<T: FromStoreValue> FromStoreValue for Vec<T> {
    const EXPECTED: &'static str = "collection";

    fn from_store_value(value: &StoreValue) -> Option<Self> {
        match value {
            StoreValue::Collection(items) => items.iter().map(T::from_store_value).collect(),
            _ => None,
        }
    }
}

impl<T: IntoStoreValue> IntoStoreValue for Vec<T> {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Collection(self.into_iter().map(IntoStoreValue::into_store_value).collect())
    }
}

impl<T: IntoStoreValue> IntoStoreValue for Option<T> {
    fn into_store_value(self) -> StoreValue {
        self.map_or(StoreValue::Null, IntoStoreValue::into_store_value)
    }
}
