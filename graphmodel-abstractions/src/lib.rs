//! Core abstractions for Graph model bindings.
//!
//! Every model in the catalog is built from the same few pieces:
//! - [`store`]: the string-keyed backing store holding property values,
//!   with change tracking for PATCH-style serialization
//! - [`serialization`]: the [`ParseNode`](serialization::ParseNode) and
//!   [`SerializationWriter`](serialization::SerializationWriter) contracts,
//!   the [`Parsable`](serialization::Parsable) model trait and per-type
//!   field deserializer tables
//! - [`enums`]: string tables for enum and flag-enum properties
//!
//! Wire formats live in other crates (`graphmodel-json`); nothing here knows
//! about JSON text.

mod error;
pub mod enums;
pub mod serialization;
pub mod store;

pub use error::{SerializationError, SerializationResult, StoreError, StoreResult};

/// Key under which unknown wire properties are kept in a model's store.
pub const ADDITIONAL_DATA_KEY: &str = "additionalData";

/// Wire name of the discriminator property.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Unknown wire properties captured during deserialization.
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

#[doc(hidden)]
pub mod __private {
    pub use bitflags;
    pub use serde;
}
