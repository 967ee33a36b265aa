//! Every display form of a color in one place.

use serde::Serialize;

use super::library::display_name;
use super::{PreciseHsl, RgbColor};

/// A color in all supported notations plus its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    /// Name, or "Custom Color"
    pub name: String,
    /// `#rrggbb`
    pub hex: String,
    /// `rgb(r, g, b)`
    pub rgb: String,
    /// `hsl(h, s%, l%)`
    pub hsl: String,
    /// `hsb(h°, s%, b%)`
    pub hsb: String,
    /// `hwb(h°, w%, b%)`
    pub hwb: String,
    /// `cmyk(c%, m%, y%, k%)`
    pub cmyk: String,
    /// Unrounded HSL components
    pub hsl_values: PreciseHsl,
}

impl ColorInfo {
    /// Collects the display forms of `color`.
    #[must_use]
    pub fn of(color: &RgbColor) -> Self {
        Self {
            name: display_name(color).to_string(),
            hex: color.to_hex(),
            rgb: color.to_rgb_string(),
            hsl: color.to_hsl().to_string(),
            hsb: color.to_hsb().to_string(),
            hwb: color.to_hwb().to_string(),
            cmyk: color.to_cmyk().to_string(),
            hsl_values: color.to_hsl_precise(),
        }
    }

    /// Label/value pairs in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("HEX", self.hex.as_str()),
            ("RGB", self.rgb.as_str()),
            ("HSL", self.hsl.as_str()),
            ("HSB", self.hsb.as_str()),
            ("HWB", self.hwb.as_str()),
            ("CMYK", self.cmyk.as_str()),
        ]
    }
}
