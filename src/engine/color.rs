//! RGB color type used throughout the engine.
//!
//! Colors travel through the engine as plain 8-bit RGB triples and only
//! become `ratatui` colors at paint time. Serialization uses `"#rrggbb"`
//! strings so palettes stay readable in the config file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{input}' (expected \"#rrggbb\")")]
pub struct ParseColorError {
    /// The rejected input string.
    pub input: String,
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolate from `self` toward `other`.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` returns exactly `self` and
    /// `t = 1` returns exactly `other`. Intermediate values stay within the
    /// component-wise bounding box of the two endpoints.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb::new(
            lerp_u8(self.r, other.r, t),
            lerp_u8(self.g, other.g, t),
            lerp_u8(self.b, other.b, t),
        )
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
        Ok(Rgb::new(r, g, b))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(value: Rgb) -> Self {
        ratatui::style::Color::Rgb(value.r, value.g, value.b)
    }
}
