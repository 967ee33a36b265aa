//! Huepick Library
//!
//! Color model and tooling for a color picker: conversions between hex,
//! RGB, HSL, HSB, HWB and CMYK, harmonies, blend modes, tint/shade previews,
//! saved palettes and history, and exports for design tools.

// Module declarations
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
