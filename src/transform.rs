// User-driven transform for the foreground animation.
//
// Values come straight from text fields and are recomputed from scratch on
// every apply; nothing here is persisted.

use glam::Vec2;
use std::f32::consts::PI;

/// Parse a number the way the browser's `parseFloat` does: skip leading
/// whitespace, take the longest numeric prefix, NaN if there is none.
pub fn parse_float(text: &str) -> f32 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f32::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f32>().unwrap_or(f32::NAN)
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Raw values of the four transform fields, rotation still in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformInput {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

impl TransformInput {
    /// Parse the x, y, scale and rotation fields. Unparsable fields become NaN
    /// and are applied as-is.
    pub fn parse(x: &str, y: &str, scale: &str, rotation: &str) -> Self {
        Self {
            x: parse_float(x),
            y: parse_float(y),
            scale: parse_float(scale),
            rotation_deg: parse_float(rotation),
        }
    }

    pub fn resolve(&self) -> AnimationTransform {
        AnimationTransform {
            position: Vec2::new(self.x, self.y),
            scale: self.scale,
            rotation: degrees_to_radians(self.rotation_deg),
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "applied settings - x: {}, y: {}, scale: {}, rotation: {}°",
            self.x, self.y, self.scale, self.rotation_deg
        )
    }
}

impl Default for TransformInput {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

/// Transform as handed to the engine: position, uniform scale, radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTransform {
    pub position: Vec2,
    pub scale: f32,
    pub rotation: f32,
}

impl AnimationTransform {
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };
}
