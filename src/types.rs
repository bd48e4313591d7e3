use std::ops::Index;

use serde::Serialize;

use crate::math::hex::HexColor;

/// Number of entries in every tonal scale.
pub const SERIES_LEN: usize = 9;
/// Position of the unmodified base color.
pub const CENTER_INDEX: usize = 4;

/// One labelled entry of a tonal scale, e.g. `primary-300`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    pub name: String,
    pub color: HexColor,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: HexColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Nine shades ordered lightest to darkest, base color at [`CENTER_INDEX`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorSeries {
    entries: [NamedColor; SERIES_LEN],
}

// Length is fixed at SERIES_LEN, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl ColorSeries {
    pub(crate) fn from_entries(entries: [NamedColor; SERIES_LEN]) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedColor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        SERIES_LEN
    }

    pub fn get(&self, index: usize) -> Option<&NamedColor> {
        self.entries.get(index)
    }

    pub fn center(&self) -> &NamedColor {
        &self.entries[CENTER_INDEX]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn as_slice(&self) -> &[NamedColor] {
        &self.entries
    }
}

impl Index<usize> for ColorSeries {
    type Output = NamedColor;

    fn index(&self, index: usize) -> &NamedColor {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a ColorSeries {
    type Item = &'a NamedColor;
    type IntoIter = std::slice::Iter<'a, NamedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One line of the contrast table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastRow {
    pub name1: String,
    pub color1: HexColor,
    pub name2: String,
    pub color2: HexColor,
    pub ratio: f64,
}
