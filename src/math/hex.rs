use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{FormatError, FormatErrorKind};

/// A 24-bit sRGB color. Channels are always in 0-255 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::from_channels(255, 255, 255);
    pub const BLACK: HexColor = HexColor::from_channels(0, 0, 0);

    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from blended channel values.
    /// Each value is truncated toward zero, then clamped to 0-255.
    pub fn from_clamped(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Parse `#rrggbb` or `rrggbb`. Case-insensitive.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 {
            return Err(FormatError::new(text, FormatErrorKind::WrongLength(hex.len())));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FormatError::new(text, FormatErrorKind::InvalidDigit));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| FormatError::new(text, FormatErrorKind::InvalidDigit))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// `#rrggbb`, lowercase.
    pub fn format(&self) -> String {
        self.to_string()
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn clamp_channel(value: f64) -> u8 {
    // `as` truncates toward zero and saturates; NaN becomes 0.
    value.trunc().clamp(0.0, 255.0) as u8
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
