// File: crates/pulse-core/tests/color.rs
// Purpose: Color parsing from the CSS notations chart data carries, and its serde form.

use pulse_core::{ChartError, Color};

#[test]
fn parses_hex_forms() {
    assert_eq!("#3b82f6".parse::<Color>().unwrap(), Color::rgb(0x3b, 0x82, 0xf6));
    assert_eq!("#3B82F6".parse::<Color>().unwrap(), Color::rgb(0x3b, 0x82, 0xf6));
    assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
    assert_eq!("#10b98180".parse::<Color>().unwrap(), Color::rgba(0x10, 0xb9, 0x81, 0x80));
}

#[test]
fn parses_functional_and_named_forms() {
    assert_eq!("rgb(16, 185, 129)".parse::<Color>().unwrap(), Color::rgb(16, 185, 129));
    assert_eq!("rgba(0,0,0,0.1)".parse::<Color>().unwrap(), Color::rgba(0, 0, 0, 26));
    assert_eq!(" black ".parse::<Color>().unwrap(), Color::BLACK);
    assert_eq!("Transparent".parse::<Color>().unwrap(), Color::TRANSPARENT);
}

#[test]
fn rejects_malformed_colors() {
    for bad in ["", "#12", "#12345", "#gggggg", "rgb(1,2)", "rgb(1,2,300)", "rgba(1,2,3,1.5)", "blue", "rgb(1,2,3"] {
        match bad.parse::<Color>() {
            Err(ChartError::InvalidColor(s)) => assert_eq!(s, bad),
            other => panic!("{bad:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn display_round_trips_through_parse() {
    let opaque = Color::rgb(0xef, 0x44, 0x44);
    assert_eq!(opaque.to_string(), "#ef4444");
    let shadow = Color::BLACK.with_alpha(0.1);
    assert_eq!(shadow.to_string(), "rgba(0,0,0,0.102)");
    assert_eq!(shadow.to_string().parse::<Color>().unwrap(), shadow);
}

#[test]
fn serde_uses_the_string_form() {
    let json = serde_json::to_string(&Color::rgb(0xf5, 0x9e, 0x0b)).unwrap();
    assert_eq!(json, "\"#f59e0b\"");
    let back: Color = serde_json::from_str("\"rgb(245, 158, 11)\"").unwrap();
    assert_eq!(back, Color::rgb(0xf5, 0x9e, 0x0b));
    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}
