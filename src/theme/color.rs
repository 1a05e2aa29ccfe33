// Color values are renderer-agnostic and don't depend on any specific backend

use thiserror::Error;
use tracing::warn;

/// A color represented as RGBA values (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error from [`Color::from_hex`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("hex color must have 3, 6, or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl Color {
    /// Value produced by [`Color::hex`] for malformed input. Kept for
    /// compatibility with decks that relied on the historical behavior:
    /// rgba(1/255, 1/255, 0, 1/255), a nearly transparent near-black.
    pub const FALLBACK: Color = Color {
        r: 1.0 / 255.0,
        g: 1.0 / 255.0,
        b: 0.0,
        a: 1.0 / 255.0,
    };

    pub const CLEAR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Parse a hex color string. A leading `#` is ignored. Accepts 3 digits
    /// (RGB shorthand, `"FFF"` is white), 6 digits (RGB), or 8 digits (ARGB,
    /// alpha first).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }

        let int = u32::from_str_radix(digits, 16).map_err(|_| {
            // only reachable for empty or oversized input, digits are valid
            ColorParseError::InvalidLength(digits.len())
        })?;

        let (a, r, g, b) = match digits.len() {
            3 => (
                255,
                (int >> 8) * 17,
                (int >> 4 & 0xF) * 17,
                (int & 0xF) * 17,
            ),
            6 => (255, int >> 16, int >> 8 & 0xFF, int & 0xFF),
            8 => (int >> 24, int >> 16 & 0xFF, int >> 8 & 0xFF, int & 0xFF),
            n => return Err(ColorParseError::InvalidLength(n)),
        };

        Ok(Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        })
    }

    /// Infallible hex parse for literal color tables. Malformed input yields
    /// [`Color::FALLBACK`] and logs a warning; prefer [`Color::from_hex`]
    /// when the string comes from outside the program.
    pub fn hex(hex: &str) -> Self {
        match Self::from_hex(hex) {
            Ok(color) => color,
            Err(err) => {
                warn!(hex, %err, "malformed hex color, using fallback");
                Self::FALLBACK
            }
        }
    }

    /// Re-encode as a 6-digit RGB hex string (alpha dropped)
    pub fn to_rgb_hex(&self) -> String {
        format!(
            "{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}
