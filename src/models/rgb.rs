//! RGB color handling with hex parsing, sanitization and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Hex color substituted for anything that fails validation.
pub const DEFAULT_HEX: &str = "#000000";

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex pattern is valid"));

static RGB_FUNCTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\((\d+),\s*(\d+),\s*(\d+)\)").expect("rgb() pattern is valid")
});

/// Returns true if `value` is exactly `#` followed by six hex digits.
#[must_use]
pub fn is_valid_hex(value: &str) -> bool {
    HEX_PATTERN.is_match(value)
}

/// Returns `input` unchanged if it is a valid `#RRGGBB` string, otherwise `#000000`.
///
/// Every string labeled as a color goes through this before it is rendered,
/// persisted or exported.
///
/// # Examples
///
/// ```
/// use huepick::models::sanitize_hex;
///
/// assert_eq!(sanitize_hex("#ABCDEF"), "#ABCDEF");
/// assert_eq!(sanitize_hex("not-a-color"), "#000000");
/// ```
#[must_use]
pub fn sanitize_hex(input: &str) -> String {
    if is_valid_hex(input) {
        input.to_string()
    } else {
        DEFAULT_HEX.to_string()
    }
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a lowercase `#rrggbb` string; deserialization sanitizes,
/// so a malformed stored value loads as black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black, the sanitization fallback.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a `#RRGGBB` hex string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("00FF00").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match `#` plus six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if !is_valid_hex(hex) {
            anyhow::bail!("Invalid hex color '{hex}'. Expected # followed by 6 hex digits (#RRGGBB)");
        }

        let digits = &hex[1..];
        let r = u8::from_str_radix(&digits[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Parses a hex string, substituting black for anything malformed.
    #[must_use]
    pub fn sanitized(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::BLACK)
    }

    /// Parses either `#rrggbb` or a CSS `rgb(r, g, b)` function.
    ///
    /// An `rgb()` string whose channels cannot be read yields black, matching
    /// how blend swatches are read back from rendered styles.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is neither a hex color nor an `rgb()` function.
    pub fn parse_css(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }

        if !value.starts_with("rgb(") {
            anyhow::bail!("Unrecognized color '{value}'. Expected #RRGGBB or rgb(r, g, b)");
        }

        let Some(caps) = RGB_FUNCTION_PATTERN.captures(value) else {
            return Ok(Self::BLACK);
        };
        let channel = |i: usize| caps[i].parse::<u16>().map_or(0, |v| v.min(255) as u8);
        Ok(Self::new(channel(1), channel(2), channel(3)))
    }

    /// Converts the color to a lowercase hex string `#rrggbb`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an array, in r, g, b order.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled into `0.0..=1.0`.
    #[must_use]
    pub fn unit_channels(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// CSS `rgb(r, g, b)` form.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` form. Alpha is clamped into `0.0..=1.0`.
    #[must_use]
    pub fn to_rgba(&self, alpha: f64) -> String {
        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_css(s)
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::sanitized(&raw))
    }
}
