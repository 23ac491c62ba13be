// File: crates/pulse-core/src/color.rs
// Summary: RGBA8 color with parsing from the CSS notations chart data uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Color with alpha given as a 0..=1 fraction, as in CSS `rgba()`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }

    pub const fn is_opaque(&self) -> bool { self.a == 255 }

    /// Alpha as a 0..=1 fraction.
    pub fn opacity(&self) -> f64 { self.a as f64 / 255.0 }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    /// Opaque colors print as `#rrggbb`, translucent ones as `rgba(r,g,b,a)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            let a = (self.opacity() * 1000.0).round() / 1000.0;
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a)
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || ChartError::InvalidColor(s.to_string());
        let lower = raw.to_ascii_lowercase();
        match lower.as_str() {
            "white" => return Ok(Color::WHITE),
            "black" => return Ok(Color::BLACK),
            "transparent" => return Ok(Color::TRANSPARENT),
            _ => {}
        }
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        let (body, has_alpha) = if let Some(b) = lower.strip_prefix("rgba(") {
            (b, true)
        } else if let Some(b) = lower.strip_prefix("rgb(") {
            (b, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let want = if has_alpha { 4 } else { 3 };
        if parts.len() != want { return Err(invalid()); }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let color = Color::rgb(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
        if has_alpha {
            let alpha: f64 = parts[3].parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&alpha) { return Err(invalid()); }
            Ok(color.with_alpha(alpha))
        } else {
            Ok(color)
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) { return None; }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
