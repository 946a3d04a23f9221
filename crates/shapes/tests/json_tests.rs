//! Tests for the rectangle and JSON helpers.

use serde::Deserialize;
use shapes::{Rectangle, ShapesError, from_json, to_json};

// ============================================================================
// Rectangle
// ============================================================================

#[test]
fn area() {
    assert_eq!(Rectangle::new(10.0, 20.0).area(), 200.0);
    assert_eq!(Rectangle::new(5.0, 5.0).area(), 25.0);
    assert_eq!(Rectangle::default().area(), 0.0);
}

#[test]
fn fields_are_public() {
    let rect = Rectangle::new(3.0, 4.0);
    assert_eq!(rect.width, 3.0);
    assert_eq!(rect.height, 4.0);
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn encode_array() {
    assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn encode_rectangle_writes_float_fields() {
    assert_eq!(
        to_json(&Rectangle::new(10.0, 20.0)).unwrap(),
        r#"{"width":10.0,"height":20.0}"#
    );
}

#[test]
fn encode_str() {
    assert_eq!(to_json("hi").unwrap(), r#""hi""#);
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decode_rectangle_gets_methods() {
    let rect: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#).unwrap();
    assert_eq!(rect, Rectangle::new(10.0, 20.0));
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn decode_ignores_unknown_fields() {
    let rect: Rectangle = from_json(r#"{"width":2,"height":3,"color":"red"}"#).unwrap();
    assert_eq!(rect.area(), 6.0);
}

#[test]
fn decode_missing_field_is_error() {
    let result: Result<Rectangle, _> = from_json(r#"{"width":2}"#);
    assert!(matches!(result, Err(ShapesError::Json(msg)) if msg.contains("height")));
}

#[test]
fn decode_invalid_json_is_error() {
    let result: Result<Rectangle, _> = from_json("{width:");
    assert!(result.is_err());
}

#[derive(Debug, Deserialize, PartialEq)]
struct Circle {
    radius: f64,
}

#[test]
fn decode_into_any_record() {
    let circle: Circle = from_json(r#"{"radius":1.5}"#).unwrap();
    assert_eq!(circle, Circle { radius: 1.5 });
}
