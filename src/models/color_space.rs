//! Cylindrical and subtractive color spaces derived from RGB.
//!
//! The public structs round to whole degrees/percent, the way values are
//! shown to users, so round trips through them are lossy. [`PreciseHsl`]
//! keeps the unrounded components for further computation.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Channel comparison against the exact maximum is part of the hue sector formula
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RgbColor;

/// Hue as a fraction of a full turn (`0.0..1.0`), plus max/min/delta of the unit channels.
///
/// Uses the 60° sector formula keyed on the maximal channel. Achromatic
/// colors report a hue of zero.
fn hue_fraction(color: &RgbColor) -> (f64, f64, f64, f64) {
    let [r, g, b] = color.unit_channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, max, min, delta);
    }

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (sector / 6.0, max, min, delta)
}

/// Rounds a hue fraction to whole degrees in `0..360`.
fn round_hue(fraction: f64) -> u16 {
    ((fraction * 360.0).round() as u16) % 360
}

/// Rounds a unit value to a whole percentage in `0..=100`.
fn round_percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Normalizes any hue offset into `0..360`.
#[must_use]
pub fn normalize_hue(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}

/// Hue, saturation, lightness with whole-number components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `0..360`
    pub h: u16,
    /// Saturation in percent, `0..=100`
    pub s: u8,
    /// Lightness in percent, `0..=100`
    pub l: u8,
}

impl Hsl {
    /// Creates an HSL value, wrapping the hue and clamping the percentages.
    #[must_use]
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Returns this color with the hue rotated by `degrees` (may be negative).
    #[must_use]
    pub fn rotate(&self, degrees: i32) -> Self {
        Self {
            h: normalize_hue(i32::from(self.h) + degrees),
            ..*self
        }
    }

    /// Returns this color with lightness shifted by `delta` percent, clamped to `0..=100`.
    #[must_use]
    pub fn shift_lightness(&self, delta: i16) -> Self {
        Self {
            l: (i16::from(self.l) + delta).clamp(0, 100) as u8,
            ..*self
        }
    }

    /// Converts back to RGB using the piecewise hue-to-channel helper.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(Hsl::new(120, 100, 50).to_rgb(), RgbColor::new(0, 255, 0));
    /// assert_eq!(Hsl::new(0, 0, 50).to_rgb(), RgbColor::new(128, 128, 128));
    /// ```
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let [r, g, b] = hsl_to_unit(
            f64::from(self.h) / 360.0,
            f64::from(self.s) / 100.0,
            f64::from(self.l) / 100.0,
        );

        RgbColor::new(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Converts back to a lowercase hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

/// HSL with unrounded components.
///
/// Converting an RGB color here and back lands on the original channels, which
/// the whole-number [`Hsl`] cannot guarantee.
///
/// # Examples
///
/// ```
/// use huepick::models::RgbColor;
///
/// let color = RgbColor::new(0, 19, 23);
/// assert_eq!(color.to_hsl_precise().to_rgb(), color);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreciseHsl {
    /// Hue in degrees, `0.0..360.0`
    pub h: f64,
    /// Saturation in percent, `0.0..=100.0`
    pub s: f64,
    /// Lightness in percent, `0.0..=100.0`
    pub l: f64,
}

impl PreciseHsl {
    /// Converts back to RGB, rounding each channel to the nearest byte.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let [r, g, b] = hsl_to_unit(self.h / 360.0, self.s / 100.0, self.l / 100.0);
        RgbColor::new(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Rounds to whole degrees and percentages.
    #[must_use]
    pub fn rounded(&self) -> Hsl {
        Hsl {
            h: round_hue(self.h / 360.0),
            s: round_percent(self.s / 100.0),
            l: round_percent(self.l / 100.0),
        }
    }
}

/// Unit HSL (hue as a fraction of a turn) to unit RGB channels.
fn hsl_to_unit(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

/// Channel value for position `t` on the hue circle between chroma bounds `p` and `q`.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Hue, saturation, brightness (a.k.a. HSV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue in degrees, `0..360`
    pub h: u16,
    /// Saturation in percent
    pub s: u8,
    /// Brightness (value) in percent
    pub b: u8,
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsb({}°, {}%, {}%)", self.h, self.s, self.b)
    }
}

/// Hue, whiteness, blackness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hwb {
    /// Hue in degrees, `0..360`
    pub h: u16,
    /// Whiteness in percent
    pub w: u8,
    /// Blackness in percent
    pub b: u8,
}

impl fmt::Display for Hwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hwb({}°, {}%, {}%)", self.h, self.w, self.b)
    }
}

/// Cyan, magenta, yellow, key (black), all in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan
    pub c: u8,
    /// Magenta
    pub m: u8,
    /// Yellow
    pub y: u8,
    /// Key (black)
    pub k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

impl RgbColor {
    /// Converts to HSL.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = self.hsl_fractions();
        Hsl {
            h: round_hue(h),
            s: round_percent(s),
            l: round_percent(l),
        }
    }

    /// Converts to HSL without rounding.
    #[must_use]
    pub fn to_hsl_precise(&self) -> PreciseHsl {
        let (h, s, l) = self.hsl_fractions();
        PreciseHsl {
            h: h * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Hue as a fraction of a turn, saturation and lightness as unit values.
    fn hsl_fractions(&self) -> (f64, f64, f64) {
        let (h, max, min, delta) = hue_fraction(self);
        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        (h, s, l)
    }

    /// Converts to HSB/HSV. Saturation is zero for achromatic colors.
    #[must_use]
    pub fn to_hsb(&self) -> Hsb {
        let (h, max, _, delta) = hue_fraction(self);
        let s = if delta == 0.0 { 0.0 } else { delta / max };

        Hsb {
            h: round_hue(h),
            s: round_percent(s),
            b: round_percent(max),
        }
    }

    /// Converts to HWB.
    #[must_use]
    pub fn to_hwb(&self) -> Hwb {
        let (h, max, min, _) = hue_fraction(self);

        Hwb {
            h: round_hue(h),
            w: round_percent(min),
            b: round_percent(1.0 - max),
        }
    }

    /// Converts to CMYK.
    ///
    /// Pure black has no defined ink ratios (`1 - k` is zero) and maps to
    /// `0, 0, 0, 100`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::{Cmyk, RgbColor};
    ///
    /// assert_eq!(RgbColor::BLACK.to_cmyk(), Cmyk { c: 0, m: 0, y: 0, k: 100 });
    /// ```
    #[must_use]
    pub fn to_cmyk(&self) -> Cmyk {
        let [r, g, b] = self.unit_channels();
        let k = 1.0 - r.max(g).max(b);

        if k >= 1.0 {
            return Cmyk { c: 0, m: 0, y: 0, k: 100 };
        }

        Cmyk {
            c: round_percent((1.0 - r - k) / (1.0 - k)),
            m: round_percent((1.0 - g - k) / (1.0 - k)),
            y: round_percent((1.0 - b - k) / (1.0 - k)),
            k: round_percent(k),
        }
    }
}

/// Output format for displaying a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsb(h°, s%, b%)`
    Hsb,
    /// `hwb(h°, w%, b%)`
    Hwb,
    /// `cmyk(c%, m%, y%, k%)`
    Cmyk,
}

impl DisplayFormat {
    /// All formats, in the order they are listed in color info output.
    pub const ALL: [Self; 6] = [
        Self::Hex,
        Self::Rgb,
        Self::Hsl,
        Self::Hsb,
        Self::Hwb,
        Self::Cmyk,
    ];

    /// Lowercase identifier used on the command line and in config.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsb => "hsb",
            Self::Hwb => "hwb",
            Self::Cmyk => "cmyk",
        }
    }

    /// Formats `color` for display.
    #[must_use]
    pub fn format(&self, color: &RgbColor) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Rgb => color.to_rgb_string(),
            Self::Hsl => color.to_hsl().to_string(),
            Self::Hsb => color.to_hsb().to_string(),
            Self::Hwb => color.to_hwb().to_string(),
            Self::Cmyk => color.to_cmyk().to_string(),
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown format '{s}'. Expected one of: hex, rgb, hsl, hsb, hwb, cmyk")
            })
    }
}

/// Parses `hex` into its RGB channels.
///
/// # Errors
///
/// Returns an error if `hex` is not a `#RRGGBB` string.
pub fn hex_to_rgb(hex: &str) -> anyhow::Result<(u8, u8, u8)> {
    let color = RgbColor::from_hex(hex)?;
    Ok((color.r, color.g, color.b))
}

/// RGB channels to rounded HSL.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    RgbColor::new(r, g, b).to_hsl()
}

/// RGB channels to unrounded HSL.
#[must_use]
pub fn rgb_to_hsl_precise(r: u8, g: u8, b: u8) -> PreciseHsl {
    RgbColor::new(r, g, b).to_hsl_precise()
}

/// HSL to RGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> RgbColor {
    hsl.to_rgb()
}

/// HSL to lowercase hex.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_hex()
}

/// RGB channels to rounded HSB.
#[must_use]
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> Hsb {
    RgbColor::new(r, g, b).to_hsb()
}

/// RGB channels to rounded HWB.
#[must_use]
pub fn rgb_to_hwb(r: u8, g: u8, b: u8) -> Hwb {
    RgbColor::new(r, g, b).to_hwb()
}

/// RGB channels to rounded CMYK.
#[must_use]
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    RgbColor::new(r, g, b).to_cmyk()
}

/// Hex string to rounded CMYK.
///
/// # Errors
///
/// Returns an error if `hex` is not a `#RRGGBB` string.
pub fn hex_to_cmyk(hex: &str) -> anyhow::Result<Cmyk> {
    Ok(RgbColor::from_hex(hex)?.to_cmyk())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: RgbColor, b: RgbColor) {
        for (x, y) in a.channels().into_iter().zip(b.channels()) {
            assert!(
                (i16::from(x) - i16::from(y)).abs() <= 1,
                "channel mismatch: {a} vs {b}"
            );
        }
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128), Hsl::new(0, 0, 50));
    }

    #[test]
    fn test_rgb_to_hsl_red_sector_wraps() {
        // g < b in the red sector adds a full turn before dividing
        let hsl = rgb_to_hsl(255, 0, 128);
        assert_eq!(hsl.h, 330);
        assert_eq!(hsl.s, 100);
    }

    #[test]
    fn test_hue_never_reaches_360() {
        // hue fraction rounds up to a full turn
        let hsl = rgb_to_hsl(255, 0, 1);
        assert_eq!(hsl.h, 0);
        assert!(rgb_to_hsb(255, 0, 1).h < 360);
        assert!(rgb_to_hwb(255, 0, 1).h < 360);
    }

    #[test]
    fn test_precise_hsl_round_trip_every_third_step() {
        // 0, 3, .., 255 covers both channel extremes
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(3) {
                    let color = RgbColor::new(r, g, b);
                    let hsl = rgb_to_hsl_precise(r, g, b);
                    assert!((0.0..360.0).contains(&hsl.h), "{color} -> {hsl:?}");
                    assert!((0.0..=100.0).contains(&hsl.s), "{color} -> {hsl:?}");
                    assert!((0.0..=100.0).contains(&hsl.l), "{color} -> {hsl:?}");
                    assert_close(hsl.to_rgb(), color);
                }
            }
        }
    }

    #[test]
    fn test_precise_hsl_keeps_dark_saturated_colors() {
        // whole-percent HSL drifts on these
        for color in [RgbColor::new(0, 19, 23), RgbColor::new(2, 228, 230)] {
            assert_eq!(color.to_hsl_precise().to_rgb(), color);
            assert_ne!(color.to_hsl().to_rgb(), color);
        }
    }

    #[test]
    fn test_precise_hsl_rounds_to_display_form() {
        let precise = rgb_to_hsl_precise(255, 0, 1);
        assert_eq!(precise.rounded(), rgb_to_hsl(255, 0, 1));
        assert_eq!(precise.rounded().h, 0);
        assert_eq!(rgb_to_hsl_precise(128, 64, 192).rounded(), rgb_to_hsl(128, 64, 192));
    }

    #[test]
    fn test_hsl_fixpoints() {
        for color in [
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 255),
            RgbColor::new(128, 128, 128),
            RgbColor::WHITE,
            RgbColor::BLACK,
        ] {
            let hsl = color.to_hsl();
            assert_eq!(hsl.to_rgb(), color);
            assert_eq!(hsl.to_rgb().to_hsl(), hsl);
        }
        assert_close(RgbColor::new(12, 34, 56).to_hsl().to_rgb(), RgbColor::new(12, 34, 56));
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex(Hsl::new(0, 100, 50)), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl::new(180, 100, 50)), "#00ffff");
        assert_eq!(hsl_to_hex(Hsl::new(240, 100, 50)), "#0000ff");
        assert_eq!(hsl_to_hex(Hsl::new(0, 0, 100)), "#ffffff");
    }

    #[test]
    fn test_hsl_new_wraps_and_clamps() {
        let hsl = Hsl::new(370, 150, 200);
        assert_eq!(hsl, Hsl { h: 10, s: 100, l: 100 });
        assert_eq!(Hsl::new(10, 50, 50).rotate(-30).h, 340);
        assert_eq!(Hsl::new(10, 50, 95).shift_lightness(30).l, 100);
        assert_eq!(Hsl::new(10, 50, 5).shift_lightness(-30).l, 0);
    }

    #[test]
    fn test_hsb() {
        assert_eq!(rgb_to_hsb(255, 0, 0), Hsb { h: 0, s: 100, b: 100 });
        assert_eq!(rgb_to_hsb(0, 0, 0), Hsb { h: 0, s: 0, b: 0 });
        assert_eq!(rgb_to_hsb(128, 128, 128), Hsb { h: 0, s: 0, b: 50 });
        assert_eq!(rgb_to_hsb(0, 128, 255).to_string(), "hsb(210°, 100%, 100%)");
    }

    #[test]
    fn test_hwb() {
        assert_eq!(rgb_to_hwb(255, 0, 0), Hwb { h: 0, w: 0, b: 0 });
        assert_eq!(rgb_to_hwb(255, 255, 255), Hwb { h: 0, w: 100, b: 0 });
        assert_eq!(rgb_to_hwb(0, 0, 0), Hwb { h: 0, w: 0, b: 100 });
        assert_eq!(rgb_to_hwb(0, 255, 0).to_string(), "hwb(120°, 0%, 0%)");
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(hex_to_cmyk("#ffffff").unwrap(), Cmyk { c: 0, m: 0, y: 0, k: 0 });
        assert_eq!(hex_to_cmyk("#ff0000").unwrap(), Cmyk { c: 0, m: 100, y: 100, k: 0 });
        assert_eq!(
            hex_to_cmyk("#000000").unwrap().to_string(),
            "cmyk(0%, 0%, 0%, 100%)"
        );
        assert!(hex_to_cmyk("nope").is_err());
    }

    #[test]
    fn test_ranges_hold_for_samples() {
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let hsl = rgb_to_hsl(r, g, b);
                    let hsb = rgb_to_hsb(r, g, b);
                    let hwb = rgb_to_hwb(r, g, b);
                    let cmyk = rgb_to_cmyk(r, g, b);
                    assert!(hsl.h < 360 && hsl.s <= 100 && hsl.l <= 100);
                    assert!(hsb.h < 360 && hsb.s <= 100 && hsb.b <= 100);
                    assert!(hwb.h < 360 && hwb.w <= 100 && hwb.b <= 100);
                    assert!(cmyk.c <= 100 && cmyk.m <= 100 && cmyk.y <= 100 && cmyk.k <= 100);
                }
            }
        }
    }

    #[test]
    fn test_display_format() {
        let red = RgbColor::new(255, 0, 0);
        assert_eq!(DisplayFormat::Hex.format(&red), "#ff0000");
        assert_eq!(DisplayFormat::Rgb.format(&red), "rgb(255, 0, 0)");
        assert_eq!(DisplayFormat::Hsl.format(&red), "hsl(0, 100%, 50%)");
        assert_eq!(DisplayFormat::Cmyk.format(&red), "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!("HSB".parse::<DisplayFormat>().unwrap(), DisplayFormat::Hsb);
        assert!("lab".parse::<DisplayFormat>().is_err());
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#0a141e").unwrap(), (10, 20, 30));
        assert!(hex_to_rgb("#0a141").is_err());
    }
}
