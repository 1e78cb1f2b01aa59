use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two-stop color gradient, both ends as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: String,
    pub end: String,
}

impl Gradient {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn start_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex(&self.start)
    }

    pub fn end_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex(&self.end)
    }
}

/// One palette entry as written in config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub key: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette has no colors")]
    Empty,
    #[error("palette color key is empty")]
    EmptyKey,
    #[error("palette color `{0}` is defined twice")]
    DuplicateKey(String),
    #[error("palette color `{key}` has invalid hex value `{value}`")]
    InvalidHex { key: String, value: String },
}

/// Ordered lookup from palette key to gradient.
///
/// Passed explicitly to list creation and rendering; order is the order colors
/// are offered in the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    entries: Vec<(String, Gradient)>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        let entries = [
            ("vividOrange", "#FF4500", "#FF6347"),
            ("grayGradient", "#BDC3C7", "#2C3E50"),
            ("deepOcean", "#003B4C", "#007A8D"),
            ("sunsetGold", "#FFD700", "#FF6347"),
            ("tealTwist", "#009688", "#004D40"),
            ("crimsonFade", "#e53935", "#e35d5b"),
            ("electricPurple", "#fc00ff", "#00dbde"),
        ]
        .into_iter()
        .map(|(key, start, end)| (key.to_string(), Gradient::new(start, end)))
        .collect();

        Self { entries }
    }
}

impl ColorPalette {
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut out: Vec<(String, Gradient)> = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.key.trim().is_empty() {
                return Err(PaletteError::EmptyKey);
            }
            if out.iter().any(|(k, _)| *k == entry.key) {
                return Err(PaletteError::DuplicateKey(entry.key));
            }
            for value in [&entry.start, &entry.end] {
                if parse_hex(value).is_none() {
                    return Err(PaletteError::InvalidHex {
                        key: entry.key.clone(),
                        value: value.clone(),
                    });
                }
            }
            out.push((entry.key, Gradient::new(&entry.start, &entry.end)));
        }

        Ok(Self { entries: out })
    }

    pub fn get(&self, key: &str) -> Option<&Gradient> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, g)| g)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> &[(String, Gradient)] {
        &self.entries
    }

    /// Key at a position in palette order
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse `#RRGGBB` (case-insensitive, leading `#` required)
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
