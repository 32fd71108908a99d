//! Color codes and ordered color sets.
//!
//! The five colors are identified by their single-letter codes (W, U, B,
//! R, G). A `ColorSet` keeps at most one of each and iterates in the
//! canonical WUBRG order regardless of insertion order. An empty set
//! means colorless.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the five card colors.
///
/// Declaration order is the canonical WUBRG sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// White (W).
    #[serde(rename = "W")]
    White,
    /// Blue (U).
    #[serde(rename = "U")]
    Blue,
    /// Black (B).
    #[serde(rename = "B")]
    Black,
    /// Red (R).
    #[serde(rename = "R")]
    Red,
    /// Green (G).
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// All colors in WUBRG order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Single-letter code for this color.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Look up a color by its letter code (case-insensitive).
    #[must_use]
    pub fn from_code(code: char) -> Option<Color> {
        match code.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ordered set of colors.
///
/// Holds at most one of each color, in WUBRG order. Serializes as a list
/// of letter codes (`["U", "R"]`), matching the shape card records use.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::{Color, ColorSet};
///
/// let mut colors = ColorSet::new();
/// colors.insert(Color::Red);
/// colors.insert(Color::Blue);
/// colors.insert(Color::Red); // duplicate, ignored
///
/// assert_eq!(colors.len(), 2);
/// // WUBRG order, not insertion order
/// assert_eq!(colors.iter().collect::<Vec<_>>(), vec![Color::Blue, Color::Red]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Color>", into = "Vec<Color>")]
pub struct ColorSet(SmallVec<[Color; 5]>);

impl ColorSet {
    /// Create an empty (colorless) set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a color, keeping WUBRG order.
    ///
    /// Returns `false` if the color was already present.
    pub fn insert(&mut self, color: Color) -> bool {
        match self.0.binary_search(&color) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, color);
                true
            }
        }
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.binary_search(&color).is_ok()
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the colorless case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate colors in WUBRG order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::new();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl From<Vec<Color>> for ColorSet {
    fn from(colors: Vec<Color>) -> Self {
        colors.into_iter().collect()
    }
}

impl From<ColorSet> for Vec<Color> {
    fn from(set: ColorSet) -> Self {
        set.0.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()), Some(color));
        }
        assert_eq!(Color::from_code('u'), Some(Color::Blue));
        assert_eq!(Color::from_code('Z'), None);
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut set = ColorSet::new();
        assert!(set.insert(Color::Green));
        assert!(!set.insert(Color::Green));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_wubrg_order() {
        let set: ColorSet = [Color::Green, Color::White, Color::Black]
            .into_iter()
            .collect();
        let order: Vec<Color> = set.iter().collect();
        assert_eq!(order, vec![Color::White, Color::Black, Color::Green]);
    }

    #[test]
    fn test_serde_as_letter_codes() {
        let set: ColorSet = [Color::Red, Color::Blue].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["U","R"]"#);

        let back: ColorSet = serde_json::from_str(r#"["R","U","R"]"#).unwrap();
        assert_eq!(back, set);
    }
}
