// Host-side tests for transform field parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod transform {
    include!("../src/transform.rs");
}

use std::f32::consts::FRAC_PI_2;
use transform::*;

#[test]
fn parse_float_plain_numbers() {
    assert_eq!(parse_float("10"), 10.0);
    assert_eq!(parse_float("-2.5"), -2.5);
    assert_eq!(parse_float("+3"), 3.0);
    assert_eq!(parse_float(".5"), 0.5);
    assert_eq!(parse_float("5."), 5.0);
    assert_eq!(parse_float("1e3"), 1000.0);
    assert_eq!(parse_float("2.5E-1"), 0.25);
}

#[test]
fn parse_float_takes_numeric_prefix() {
    assert_eq!(parse_float("  42  "), 42.0);
    assert_eq!(parse_float("12px"), 12.0);
    assert_eq!(parse_float("3.14.15"), 3.14);
    assert_eq!(parse_float("7e"), 7.0);
    assert_eq!(parse_float("7e+"), 7.0);
    assert_eq!(parse_float("-0"), 0.0);
}

#[test]
fn parse_float_infinity() {
    assert_eq!(parse_float("Infinity"), f32::INFINITY);
    assert_eq!(parse_float("-Infinity"), f32::NEG_INFINITY);
    assert_eq!(parse_float("+Infinityx"), f32::INFINITY);
}

#[test]
fn parse_float_rejects_non_numbers() {
    assert!(parse_float("").is_nan());
    assert!(parse_float("   ").is_nan());
    assert!(parse_float("abc").is_nan());
    assert!(parse_float(".").is_nan());
    assert!(parse_float("-").is_nan());
    assert!(parse_float("e5").is_nan());
    assert!(parse_float("inf").is_nan());
}

#[test]
fn resolves_fields_into_engine_transform() {
    let input = TransformInput::parse("10", "20", "2", "90");
    let t = input.resolve();
    assert_eq!(t.position, glam::Vec2::new(10.0, 20.0));
    assert_eq!(t.scale, 2.0);
    assert!((t.rotation - FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn unparsable_field_propagates_nan() {
    let t = TransformInput::parse("10", "oops", "1", "0").resolve();
    assert_eq!(t.position.x, 10.0);
    assert!(t.position.y.is_nan());
    assert_eq!(t.scale, 1.0);
}

#[test]
fn degrees_convert_to_radians() {
    assert_eq!(degrees_to_radians(0.0), 0.0);
    assert!((degrees_to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
    assert!((degrees_to_radians(-90.0) + FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn default_input_resolves_to_identity() {
    assert_eq!(TransformInput::default().resolve(), AnimationTransform::IDENTITY);
}

#[test]
fn describe_reports_raw_values() {
    let text = TransformInput::parse("10", "20", "2", "90").describe();
    assert_eq!(text, "applied settings - x: 10, y: 20, scale: 2, rotation: 90°");
}
