//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including storage locations and store keys.

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Huepick";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "HUEPICK_CONFIG_DIR";

/// Store key holding the color history.
pub const HISTORY_KEY: &str = "colorHistory";

/// Store key holding saved palettes.
pub const PALETTES_KEY: &str = "palettes";

/// Store key holding user preferences.
pub const PREFERENCES_KEY: &str = "userPreferences";
