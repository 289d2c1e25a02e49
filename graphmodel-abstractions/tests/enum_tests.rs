use graphmodel_abstractions::enums::{
    parse_enum_value, serialize_enum_values, EnumParseError, GraphEnum, GraphFlags,
};
use graphmodel_abstractions::store::{BackingStoreExt, InMemoryBackingStore};
use graphmodel_abstractions::{graph_enum, graph_flags, SerializationError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

graph_enum! {
    /// Test enum with a lenient table.
    pub enum Color: "color" {
        Red = "red" => 0,
        Green = "green" => 1,
        Blue = "blue" => 2,
        UnknownFutureValue = "unknownFutureValue" => 3,
    }
}

graph_enum! {
    pub enum Phase: "phase" strict {
        Start = "start" => 0,
        Stop = "stop" => 1,
    }
}

graph_flags! {
    pub struct Days: "days" {
        const MONDAY = "monday" => 1;
        const TUESDAY = "tuesday" => 1 << 1;
        const WEDNESDAY = "wednesday" => 1 << 2;
    }
}

// ── Enum tables ──────────────────────────────────────────────────

#[test]
fn display_uses_wire_spelling() {
    assert_eq!(Color::Green.to_string(), "green");
    assert_eq!(Color::UnknownFutureValue.to_string(), "unknownFutureValue");
}

#[test]
fn codes_follow_declaration() {
    assert_eq!(Color::Red.code(), 0);
    assert_eq!(Color::Blue.code(), 2);
    assert_eq!(Color::from_code(1), Some(Color::Green));
    assert_eq!(Color::from_code(99), None);
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!(Color::parse("blue"), Some(Color::Blue));
    assert_eq!(Color::parse("Blue"), None);
}

#[test]
fn from_str_reports_enum_name() {
    let err = "purple".parse::<Color>().unwrap_err();
    assert_eq!(err, EnumParseError::new("color", "purple"));
    assert_eq!(err.to_string(), "unknown color value: purple");
}

#[test]
fn serialize_enum_values_maps_each() {
    assert_eq!(
        serialize_enum_values(&[Color::Red, Color::Blue]),
        vec!["red".to_string(), "blue".to_string()]
    );
    assert!(serialize_enum_values::<Color>(&[]).is_empty());
}

#[test]
fn serde_uses_wire_strings() {
    let json = serde_json::to_string(&vec![Color::Red, Color::Green]).unwrap();
    assert_eq!(json, r#"["red","green"]"#);
    let back: Vec<Color> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![Color::Red, Color::Green]);
    assert!(serde_json::from_str::<Color>(r#""mauve""#).is_err());
}

// ── Unknown values ───────────────────────────────────────────────

#[test]
fn lenient_enum_swallows_unknown() {
    assert_eq!(parse_enum_value::<Color>("mauve", false).unwrap(), None);
}

#[test]
fn strict_enum_rejects_unknown() {
    assert!(Phase::STRICT);
    let err = parse_enum_value::<Phase>("pause", false).unwrap_err();
    assert!(matches!(
        err,
        SerializationError::UnknownEnumValue { enum_name: "phase", ref value } if value == "pause"
    ));
}

#[test]
fn strict_flag_overrides_lenient_enum() {
    assert!(!Color::STRICT);
    assert!(parse_enum_value::<Color>("mauve", true).is_err());
    assert_eq!(parse_enum_value::<Color>("red", true).unwrap(), Some(Color::Red));
}

// ── Flags ────────────────────────────────────────────────────────

#[test]
fn flags_render_in_declaration_order() {
    let days = Days::WEDNESDAY | Days::MONDAY;
    assert_eq!(days.render(), "monday,wednesday");
    assert_eq!(days.to_string(), "monday,wednesday");
}

#[test]
fn flags_parse_trims_segments() {
    assert_eq!(
        Days::parse_flags(" tuesday , monday"),
        Some(Days::MONDAY | Days::TUESDAY)
    );
}

#[test]
fn flags_unknown_segment_is_none() {
    assert_eq!(Days::parse_flags("monday,funday"), None);
}

#[test]
fn flags_empty_is_none() {
    assert_eq!(Days::parse_flags(""), None);
    assert_eq!(Days::parse_flags(" , "), None);
}

// ── Store conversions ────────────────────────────────────────────

#[test]
fn enums_and_flags_roundtrip_through_store() {
    let mut store = InMemoryBackingStore::new();
    store.set_property("color", Color::Blue);
    store.set_property("days", Days::MONDAY | Days::WEDNESDAY);
    store.set_property("colors", vec![Color::Red, Color::Green]);

    assert_eq!(store.property::<Color>("color"), Some(Color::Blue));
    assert_eq!(store.property::<Days>("days"), Some(Days::MONDAY | Days::WEDNESDAY));
    assert_eq!(
        store.property::<Vec<Color>>("colors"),
        Some(vec![Color::Red, Color::Green])
    );
    assert_eq!(store.property::<Phase>("color"), None);
}

// ── Properties ───────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::variants().to_vec())
}

proptest! {
    #[test]
    fn every_variant_parses_from_its_spelling(color in color_strategy()) {
        prop_assert_eq!(Color::parse(color.as_str()), Some(color));
        prop_assert_eq!(Color::from_code(color.code()), Some(color));
    }

    #[test]
    fn any_nonempty_flag_set_parses_from_its_rendering(bits in 1u32..8) {
        let days = Days::from_flag_bits(bits);
        prop_assert_eq!(Days::parse_flags(&days.render()), Some(days));
    }
}
