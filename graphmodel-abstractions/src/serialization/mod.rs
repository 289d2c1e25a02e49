//! Parse and write contracts shared by every model and wire format.
//!
//! A wire format supplies a [`ParseNode`] (a cursor over incoming data) and
//! a [`SerializationWriter`]. Models implement [`Parsable`]: they look up
//! incoming property names in a [`FieldDeserializers`] table and write
//! their properties back out through the writer.

mod fields;
mod parsable;
mod parse_node;
mod writer;

pub use fields::{Deserializable, FieldDeserializer, FieldDeserializers};
pub use parsable::{Parsable, ParsableFactory};
pub use parse_node::{ParseNode, ParseNodeExt, Primitive};
pub use writer::{SerializationWriter, SerializationWriterExt};
