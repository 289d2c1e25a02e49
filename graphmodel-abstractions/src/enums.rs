//! String tables for enum and flag-enum properties.
//!
//! Enums are declared with [`graph_enum!`](crate::graph_enum), which emits
//! the integer codes, the wire spelling of each variant, `Display`/`FromStr`
//! and serde impls. Flag enums are declared with
//! [`graph_flags!`](crate::graph_flags) on top of `bitflags`; their wire form
//! is a comma-separated list of flag names.

use crate::{SerializationError, SerializationResult};
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// An enum property type with a fixed string table.
pub trait GraphEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Schema name of the enum, e.g. `taskStatus`.
    const NAME: &'static str;

    /// Strict enums reject unknown strings instead of dropping them.
    const STRICT: bool = false;

    /// Every variant, in code order.
    fn variants() -> &'static [Self];

    /// Wire spelling of the variant.
    fn as_str(&self) -> &'static str;

    fn code(&self) -> i32;

    /// Exact, case-sensitive lookup of a wire string.
    fn parse(value: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.code() == code)
    }
}

/// `FromStr` failure for a [`GraphEnum`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {enum_name} value: {value}")]
pub struct EnumParseError {
    pub enum_name: &'static str,
    pub value: String,
}

impl EnumParseError {
    #[must_use]
    pub fn new(enum_name: &'static str, value: &str) -> Self {
        Self {
            enum_name,
            value: value.to_owned(),
        }
    }
}

/// Maps a slice of enum values to their wire spellings.
#[must_use]
pub fn serialize_enum_values<E: GraphEnum>(values: &[E]) -> Vec<String> {
    values.iter().map(|value| value.as_str().to_owned()).collect()
}

/// Looks up a wire string for a parse node.
///
/// Unknown strings fail when the enum is strict or `strict` is set, and are
/// otherwise logged and read as absent.
pub fn parse_enum_value<E: GraphEnum>(raw: &str, strict: bool) -> SerializationResult<Option<E>> {
    match E::parse(raw) {
        Some(value) => Ok(Some(value)),
        None if E::STRICT || strict => Err(SerializationError::UnknownEnumValue {
            enum_name: E::NAME,
            value: raw.to_owned(),
        }),
        None => {
            warn!(enum_name = E::NAME, value = raw, "ignoring unknown enum value");
            Ok(None)
        }
    }
}

/// A bitmask enum whose wire form is a comma-separated list of names.
pub trait GraphFlags: Copy + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// `(wire name, bit)` for every single flag, in declaration order.
    fn named_flags() -> &'static [(&'static str, u32)];

    fn flag_bits(&self) -> u32;

    fn from_flag_bits(bits: u32) -> Self;

    /// Names of the set flags joined with `,`.
    fn render(&self) -> String {
        let bits = self.flag_bits();
        Self::named_flags()
            .iter()
            .filter(|(_, flag)| *flag != 0 && bits & flag == *flag)
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parses a comma-separated list. Any unknown name, or no name at all,
    /// yields `None`.
    fn parse_flags(raw: &str) -> Option<Self> {
        let mut bits = 0;
        let mut seen = false;
        for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            let (_, flag) = Self::named_flags()
                .iter()
                .find(|(name, _)| *name == part)?;
            bits |= flag;
            seen = true;
        }
        seen.then(|| Self::from_flag_bits(bits))
    }
}

/// Declares a [`GraphEnum`].
///
/// ```ignore
/// graph_enum! {
///     /// Importance of a task.
///     pub enum Importance: "importance" {
///         Low = "low" => 0,
///         Normal = "normal" => 1,
///         High = "high" => 2,
///     }
/// }
/// ```
///
/// Append `strict` after the schema name to reject unknown strings.
#[macro_export]
macro_rules! graph_enum {
    (@strict strict) => {
        true
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $wire:literal $($strict:ident)? {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $code ),+
        }

        impl $crate::enums::GraphEnum for $name {
            const NAME: &'static str = $wire;
            $( const STRICT: bool = $crate::graph_enum!(@strict $strict); )?

            fn variants() -> &'static [Self] {
                &[ $( Self::$variant ),+ ]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value ),+
                }
            }

            fn code(&self) -> i32 {
                *self as i32
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::GraphEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::enums::EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::enums::GraphEnum>::parse(s)
                    .ok_or_else(|| $crate::enums::EnumParseError::new($wire, s))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::enums::GraphEnum::as_str(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse()
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }

        impl $crate::store::FromStoreValue for $name {
            const EXPECTED: &'static str = $wire;

            fn from_store_value(value: &$crate::store::StoreValue) -> Option<Self> {
                match value {
                    $crate::store::StoreValue::Enum(raw) => {
                        <Self as $crate::enums::GraphEnum>::parse(raw)
                    }
                    _ => None,
                }
            }
        }

        impl $crate::store::IntoStoreValue for $name {
            fn into_store_value(self) -> $crate::store::StoreValue {
                $crate::store::StoreValue::Enum(
                    $crate::enums::GraphEnum::as_str(&self).to_owned(),
                )
            }
        }
    };
}

/// Declares a [`GraphFlags`] bitmask type.
///
/// ```ignore
/// graph_flags! {
///     pub struct UpdateWeeks: "updateWeeks" {
///         const FIRST_WEEK = "firstWeek" => 1 << 1;
///     }
/// }
/// ```
#[macro_export]
macro_rules! graph_flags {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $wire:literal {
            $( $(#[$fmeta:meta])* const $flag:ident = $value:literal => $bits:expr; )+
        }
    ) => {
        $crate::__private::bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis struct $name: u32 {
                $( $(#[$fmeta])* const $flag = $bits; )+
            }
        }

        impl $crate::enums::GraphFlags for $name {
            const NAME: &'static str = $wire;

            fn named_flags() -> &'static [(&'static str, u32)] {
                &[ $( ($value, $bits) ),+ ]
            }

            fn flag_bits(&self) -> u32 {
                self.bits()
            }

            fn from_flag_bits(bits: u32) -> Self {
                Self::from_bits_retain(bits)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::enums::GraphFlags::render(self))
            }
        }

        impl $crate::store::FromStoreValue for $name {
            const EXPECTED: &'static str = $wire;

            fn from_store_value(value: &$crate::store::StoreValue) -> Option<Self> {
                match value {
                    $crate::store::StoreValue::Enum(raw) => {
                        <Self as $crate::enums::GraphFlags>::parse_flags(raw)
                    }
                    _ => None,
                }
            }
        }

        impl $crate::store::IntoStoreValue for $name {
            fn into_store_value(self) -> $crate::store::StoreValue {
                $crate::store::StoreValue::Enum($crate::enums::GraphFlags::render(&self))
            }
        }
    };
}
