//! Picker session: the current color plus the user's persisted data.
//!
//! A `Session` is created from the store, mutated by commands, and written
//! back explicitly. The color model itself stays stateless; everything the
//! picker remembers lives here.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{HISTORY_KEY, PALETTES_KEY, PREFERENCES_KEY};
use crate::models::{
    generate_harmony, preview_series, ColorHistory, ColorInfo, DisplayFormat, HarmonyKind, Hsl,
    Palette, PaletteBook, Preferences, RgbColor, Theme,
};
use crate::services::store::{load_entries, load_value, save_value, KeyValueStore};

/// Slider positions restored by [`Session::reset_sliders`]: hue, saturation, lightness, alpha.
pub const DEFAULT_SLIDERS: (u16, u8, u8, u8) = (0, 100, 50, 100);

/// State of one picker session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Color being inspected
    pub current: RgbColor,
    /// Format used for the main display value
    pub format: DisplayFormat,
    /// Harmony shown for the current color
    pub harmony: HarmonyKind,
    /// Opacity of the preview swatch, `0.0..=1.0`
    pub alpha: f64,
    history: ColorHistory,
    palettes: PaletteBook,
    preferences: Preferences,
    /// List keys that could not be read and must not be overwritten
    unreadable: Vec<&'static str>,
}

impl Session {
    /// Creates a session with no stored data.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            current: RgbColor::sanitized(&config.ui.initial_color),
            format: config.ui.default_format,
            harmony: HarmonyKind::default(),
            alpha: 1.0,
            history: ColorHistory::new(),
            palettes: PaletteBook::new(),
            preferences: Preferences {
                theme: config.ui.theme_mode.resolve(),
            },
            unreadable: Vec::new(),
        }
    }

    /// Loads history, palettes and preferences from `store`.
    ///
    /// The most recent history entry becomes the current color.
    ///
    /// Each key is read on its own. History and palette entries that cannot
    /// be read are dropped with a warning. If a whole list cannot be read it
    /// starts empty, and saving it is refused so the stored data survives.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore, config: &Config) -> Self {
        let mut session = Self::new(config);

        match load_entries::<RgbColor>(store, HISTORY_KEY) {
            Ok(Some((colors, skipped))) => {
                if skipped > 0 {
                    warn!("Skipped {skipped} unreadable color history entries");
                }
                session.history = ColorHistory::from(colors);
                if let Some(latest) = session.history.latest() {
                    session.current = *latest;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Error loading color history: {e:#}");
                session.unreadable.push(HISTORY_KEY);
            }
        }

        match load_entries::<Palette>(store, PALETTES_KEY) {
            Ok(Some((palettes, skipped))) => {
                if skipped > 0 {
                    warn!("Skipped {skipped} unreadable palettes");
                }
                session.palettes = PaletteBook::from(palettes);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Error loading palettes: {e:#}");
                session.unreadable.push(PALETTES_KEY);
            }
        }

        match load_value::<Preferences>(store, PREFERENCES_KEY) {
            Ok(Some(preferences)) => session.preferences = preferences,
            Ok(None) => {}
            Err(e) => warn!("Error loading preferences: {e:#}"),
        }

        debug!(
            history = session.history.len(),
            palettes = session.palettes.len(),
            theme = %session.preferences.theme,
            "session loaded"
        );
        session
    }

    /// Saved color history.
    #[must_use]
    pub const fn history(&self) -> &ColorHistory {
        &self.history
    }

    /// Saved palettes.
    #[must_use]
    pub const fn palettes(&self) -> &PaletteBook {
        &self.palettes
    }

    /// User preferences.
    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Makes `color` current and records it in the history.
    ///
    /// Returns whether the history changed and needs saving.
    pub fn select_color(&mut self, color: RgbColor) -> bool {
        self.current = color;
        self.history.push(color)
    }

    /// Makes `color` current without touching the history.
    pub fn preview_color(&mut self, color: RgbColor) {
        self.current = color;
    }

    /// Applies typed RGB inputs. Any value outside `0..=255` leaves the session unchanged.
    pub fn set_from_rgb_inputs(&mut self, values: [i64; 3]) -> Option<RgbColor> {
        if values.iter().any(|v| !(0..=255).contains(v)) {
            debug!(?values, "ignoring out-of-range RGB input");
            return None;
        }

        let color = RgbColor::new(values[0] as u8, values[1] as u8, values[2] as u8);
        self.current = color;
        Some(color)
    }

    /// Applies typed HSL inputs. Hue must be `0..=360`, saturation and lightness `0..=100`.
    pub fn set_from_hsl_inputs(&mut self, values: [i64; 3]) -> Option<RgbColor> {
        let [h, s, l] = values;
        if !(0..=360).contains(&h) || !(0..=100).contains(&s) || !(0..=100).contains(&l) {
            debug!(?values, "ignoring out-of-range HSL input");
            return None;
        }

        let color = Hsl::new(h as u16, s as u8, l as u8).to_rgb();
        self.current = color;
        Some(color)
    }

    /// Applies slider positions and records the resulting color.
    ///
    /// `alpha_percent` is clamped to `0..=100`.
    pub fn apply_sliders(&mut self, hue: u16, saturation: u8, lightness: u8, alpha_percent: u8) -> RgbColor {
        self.alpha = f64::from(alpha_percent.min(100)) / 100.0;
        let color = Hsl::new(hue, saturation, lightness).to_rgb();
        self.select_color(color);
        color
    }

    /// Moves the sliders back to pure red at full opacity.
    pub fn reset_sliders(&mut self) -> RgbColor {
        let (h, s, l, a) = DEFAULT_SLIDERS;
        self.apply_sliders(h, s, l, a)
    }

    /// Main display value in the selected format.
    #[must_use]
    pub fn display_value(&self) -> String {
        self.format.format(&self.current)
    }

    /// Swatch background including the alpha slider.
    #[must_use]
    pub fn swatch_rgba(&self) -> String {
        self.current.to_rgba(self.alpha)
    }

    /// All display forms of the current color.
    #[must_use]
    pub fn color_info(&self) -> ColorInfo {
        ColorInfo::of(&self.current)
    }

    /// Harmony of the current color.
    #[must_use]
    pub fn harmony_colors(&self) -> Vec<RgbColor> {
        generate_harmony(&self.current, self.harmony)
    }

    /// Tint/shade strip of the current color.
    #[must_use]
    pub fn preview(&self) -> [RgbColor; 5] {
        preview_series(&self.current)
    }

    /// Saves a palette holding just the current color.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn create_palette(&mut self, name: &str) -> Result<&Palette> {
        self.add_palette(Palette::new(name, vec![self.current])?)
    }

    /// Saves the current harmony as a palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn save_harmony_as_palette(&mut self, name: &str) -> Result<&Palette> {
        self.add_palette(Palette::new(name, self.harmony_colors())?)
    }

    /// Saves a palette with explicit colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn create_palette_with(&mut self, name: &str, colors: Vec<RgbColor>) -> Result<&Palette> {
        self.add_palette(Palette::new(name, colors)?)
    }

    fn add_palette(&mut self, palette: Palette) -> Result<&Palette> {
        debug!(id = %palette.id, name = %palette.name, "palette created");
        self.palettes.add(palette);
        self.palettes
            .iter()
            .last()
            .ok_or_else(|| anyhow::anyhow!("Palette was not stored"))
    }

    /// Deletes a palette by id. Returns whether one was removed.
    pub fn delete_palette(&mut self, id: &str) -> bool {
        self.palettes.remove(id)
    }

    /// Empties the history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Switches light/dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.preferences.toggle_theme()
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    /// Writes the history under `colorHistory`.
    ///
    /// # Errors
    ///
    /// Fails if the stored history could not be read when the session was loaded.
    pub fn save_history(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        self.ensure_writable(HISTORY_KEY)?;
        save_value(store, HISTORY_KEY, &self.history)
    }

    /// Writes the palettes under `palettes`.
    ///
    /// # Errors
    ///
    /// Fails if the stored palettes could not be read when the session was loaded.
    pub fn save_palettes(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        self.ensure_writable(PALETTES_KEY)?;
        save_value(store, PALETTES_KEY, &self.palettes)
    }

    fn ensure_writable(&self, key: &str) -> Result<()> {
        if self.unreadable.iter().any(|k| *k == key) {
            anyhow::bail!("Stored '{key}' could not be read; fix or remove it before saving");
        }
        Ok(())
    }

    /// Writes the preferences under `userPreferences`.
    pub fn save_preferences(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        save_value(store, PREFERENCES_KEY, &self.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::services::store::MemoryStore;
    use serde_json::json;

    fn test_config() -> Config {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new(&test_config());
        assert_eq!(session.current, RgbColor::new(255, 0, 0));
        assert_eq!(session.display_value(), "#ff0000");
        assert_eq!(session.preferences().theme, Theme::Light);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_select_records_history() {
        let mut session = Session::new(&test_config());
        assert!(session.select_color(RgbColor::new(1, 2, 3)));
        assert!(!session.select_color(RgbColor::new(1, 2, 3)));
        session.preview_color(RgbColor::new(9, 9, 9));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current, RgbColor::new(9, 9, 9));
    }

    #[test]
    fn test_rgb_inputs_out_of_range_ignored() {
        let mut session = Session::new(&test_config());
        assert!(session.set_from_rgb_inputs([0, 300, 0]).is_none());
        assert_eq!(session.current, RgbColor::new(255, 0, 0));
        assert_eq!(
            session.set_from_rgb_inputs([0, 128, 255]),
            Some(RgbColor::new(0, 128, 255))
        );
    }

    #[test]
    fn test_hsl_inputs() {
        let mut session = Session::new(&test_config());
        assert!(session.set_from_hsl_inputs([361, 50, 50]).is_none());
        assert!(session.set_from_hsl_inputs([10, -1, 50]).is_none());
        assert_eq!(
            session.set_from_hsl_inputs([120, 100, 50]),
            Some(RgbColor::new(0, 255, 0))
        );
    }

    #[test]
    fn test_sliders() {
        let mut session = Session::new(&test_config());
        let color = session.apply_sliders(240, 100, 50, 40);
        assert_eq!(color, RgbColor::new(0, 0, 255));
        assert_eq!(session.swatch_rgba(), "rgba(0, 0, 255, 0.4)");
        assert_eq!(session.history().latest(), Some(&color));

        let reset = session.reset_sliders();
        assert_eq!(reset, RgbColor::new(255, 0, 0));
        assert!((session.alpha - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_palettes_from_current_and_harmony() {
        let mut session = Session::new(&test_config());
        session.harmony = HarmonyKind::Triadic;

        let single_id = session.create_palette("Single").unwrap().id.clone();
        let harmony = session.save_harmony_as_palette("Triad").unwrap();
        assert_eq!(harmony.copy_text(), "#ff0000, #00ff00, #0000ff");
        assert!(session.create_palette("  ").is_err());

        assert_eq!(session.palettes().len(), 2);
        assert!(session.delete_palette(&single_id));
        assert_eq!(session.palettes().len(), 1);
    }

    #[test]
    fn test_persist_and_reload() {
        let mut store = MemoryStore::new();
        let mut session = Session::new(&test_config());
        session.select_color(RgbColor::new(10, 20, 30));
        session.create_palette("Saved").unwrap();
        session.toggle_theme();

        session.save_history(&mut store).unwrap();
        session.save_palettes(&mut store).unwrap();
        session.save_preferences(&mut store).unwrap();

        assert_eq!(store.get(HISTORY_KEY).unwrap(), Some(json!(["#0a141e"])));

        let reloaded = Session::load(&store, &test_config());
        assert_eq!(reloaded.history().latest(), Some(&RgbColor::new(10, 20, 30)));
        assert_eq!(reloaded.current, RgbColor::new(10, 20, 30));
        assert_eq!(reloaded.palettes().len(), 1);
        assert_eq!(reloaded.preferences().theme, Theme::Dark);
    }

    #[test]
    fn test_load_tolerates_damaged_keys() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, json!({"not": "a list"})).unwrap();
        store.set(PALETTES_KEY, json!([])).unwrap();
        store
            .set(PREFERENCES_KEY, json!({"theme": "dark"}))
            .unwrap();

        let session = Session::load(&store, &test_config());
        assert!(session.history().is_empty());
        assert!(session.palettes().is_empty());
        assert_eq!(session.preferences().theme, Theme::Dark);

        // the damaged history is kept rather than replaced
        let mut store = store;
        assert!(session.save_history(&mut store).is_err());
        assert!(session.save_palettes(&mut store).is_ok());
        assert_eq!(store.get(HISTORY_KEY).unwrap(), Some(json!({"not": "a list"})));
    }

    #[test]
    fn test_unreadable_palette_entries_do_not_take_the_rest_down() {
        let mut store = MemoryStore::new();
        store
            .set(
                PALETTES_KEY,
                json!([
                    {"id": "a", "name": "Keep me", "colors": ["#112233"],
                     "timestamp": "2024-01-01T00:00:00Z"},
                    {"id": "b", "name": "No timestamp", "colors": []},
                ]),
            )
            .unwrap();
        store.set(HISTORY_KEY, json!(["#010101", 7, "#020202"])).unwrap();

        let mut session = Session::load(&store, &test_config());
        assert_eq!(session.palettes().len(), 1);
        assert_eq!(session.history().len(), 2);

        session.create_palette("New").unwrap();
        session.save_palettes(&mut store).unwrap();
        session.save_history(&mut store).unwrap();

        let reloaded = Session::load(&store, &test_config());
        let names: Vec<&str> = reloaded.palettes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Keep me", "New"]);
        assert_eq!(store.get(HISTORY_KEY).unwrap(), Some(json!(["#010101", "#020202"])));
    }
}
