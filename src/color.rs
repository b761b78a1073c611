//! RGBA colors in the string form Chart.js accepts.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, Result};

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .expect("color pattern is valid")
});

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
        .expect("hex pattern is valid")
});

/// A color with four 8-bit channels.
///
/// The alpha channel is stored as 0..=255 and rendered as a 0..1 fraction,
/// e.g. `Rgba::new(0, 255, 0, 200)` becomes `rgba(0, 255, 0, 0.784)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as the fraction used in the rendered string.
    #[must_use]
    pub fn alpha_fraction(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.alpha_fraction()
        )
    }
}

fn channel(s: &str, input: &str) -> Result<u8> {
    s.parse::<u8>()
        .map_err(|_| ChartError::InvalidColor(input.to_string()))
}

fn hex_channel(s: &str, input: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ChartError::InvalidColor(input.to_string()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=255
fn alpha_from_fraction(s: &str, input: &str) -> Result<u8> {
    let fraction: f64 = s
        .parse()
        .map_err(|_| ChartError::InvalidColor(input.to_string()))?;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(ChartError::InvalidColor(input.to_string()));
    }
    Ok((fraction * 255.0).round() as u8)
}

impl FromStr for Rgba {
    type Err = ChartError;

    /// Parses `rgba(r, g, b, a)`, `rgb(r, g, b)`, `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();

        if let Some(caps) = RGBA_PATTERN.captures(input) {
            let a = match caps.get(4) {
                Some(m) => alpha_from_fraction(m.as_str(), s)?,
                None => 255,
            };
            return Ok(Self::new(
                channel(&caps[1], s)?,
                channel(&caps[2], s)?,
                channel(&caps[3], s)?,
                a,
            ));
        }

        if let Some(caps) = HEX_PATTERN.captures(input) {
            let a = match caps.get(4) {
                Some(m) => hex_channel(m.as_str(), s)?,
                None => 255,
            };
            return Ok(Self::new(
                hex_channel(&caps[1], s)?,
                hex_channel(&caps[2], s)?,
                hex_channel(&caps[3], s)?,
                a,
            ));
        }

        Err(ChartError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
