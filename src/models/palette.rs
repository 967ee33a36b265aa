//! Saved color palettes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::RgbColor;

/// A named, ordered set of colors saved by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Unique identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Colors in display order
    pub colors: Vec<RgbColor>,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

/// Accepts both string ids and the numeric millisecond ids of older data.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

impl Palette {
    /// Creates a palette with a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty.
    pub fn new(name: &str, colors: Vec<RgbColor>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Palette name cannot be empty");
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            colors,
            timestamp: Utc::now(),
        })
    }

    /// Colors joined as `"#aaaaaa, #bbbbbb"` for copying.
    #[must_use]
    pub fn copy_text(&self) -> String {
        self.colors
            .iter()
            .map(RgbColor::to_hex)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The user's saved palettes in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteBook {
    palettes: Vec<Palette>,
}

impl PaletteBook {
    /// Creates an empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            palettes: Vec::new(),
        }
    }

    /// Appends a palette.
    pub fn add(&mut self, palette: Palette) {
        self.palettes.push(palette);
    }

    /// Removes the palette with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.palettes.len();
        self.palettes.retain(|p| p.id != id);
        self.palettes.len() != before
    }

    /// Finds a palette by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Finds a palette by id, or failing that by exact name.
    #[must_use]
    pub fn find_by_id_or_name(&self, key: &str) -> Option<&Palette> {
        self.find(key)
            .or_else(|| self.palettes.iter().find(|p| p.name == key))
    }

    /// Iterates in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    /// All palettes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Palette] {
        &self.palettes
    }

    /// Number of palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// True when no palette is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl From<Vec<Palette>> for PaletteBook {
    fn from(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }
}
