//! Export functionality for colors and saved palettes.
//!
//! Single colors export as copy-ready code snippets; palette collections
//! export as files in several design-tool formats.

pub mod palettes;
pub mod snippet;

pub use palettes::{export_palettes, PaletteExport};
pub use snippet::{color_snippet, ColorExport};
