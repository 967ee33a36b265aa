//! Color model and user-owned data.
//!
//! Conversions, harmonies, blends and previews are pure functions over
//! [`RgbColor`]. Palettes, history and preferences are plain data owned by
//! the session and persisted through the store.

pub mod blend;
pub mod color_space;
pub mod harmony;
pub mod history;
pub mod info;
pub mod library;
pub mod palette;
pub mod preferences;
pub mod rgb;
pub mod shades;

// Re-export all model types
pub use blend::{blend, BlendMode};
pub use color_space::{
    hex_to_cmyk, hex_to_rgb, hsl_to_hex, hsl_to_rgb, normalize_hue, rgb_to_cmyk, rgb_to_hsb,
    rgb_to_hsl, rgb_to_hsl_precise, rgb_to_hwb, Cmyk, DisplayFormat, Hsb, Hsl, Hwb, PreciseHsl,
};
pub use harmony::{generate_harmony, hue_rotate, HarmonyKind};
pub use history::{ColorHistory, HISTORY_CAPACITY};
pub use info::ColorInfo;
pub use palette::{Palette, PaletteBook};
pub use preferences::{Preferences, Theme};
pub use rgb::{is_valid_hex, sanitize_hex, RgbColor, DEFAULT_HEX};
pub use shades::preview_series;
