//! The canonical card shape.
//!
//! Every card record entering the engine is normalized into `Card`
//! exactly once; everything downstream (deck collection, statistics,
//! sorting, filtering) reads these fields and nothing else.

use serde::{Deserialize, Serialize};

use super::color::ColorSet;
use crate::mana;

/// Sort rank for a rarity string.
///
/// Total order: common(1) < uncommon(2) < rare(3) < mythic(4) <
/// special/bonus(5). Unknown or blank rarities rank 0 and sort first.
#[must_use]
pub fn rarity_rank(rarity: &str) -> u8 {
    match rarity.to_lowercase().as_str() {
        "common" => 1,
        "uncommon" => 2,
        "rare" => 3,
        "mythic" | "mythic rare" => 4,
        "special" | "bonus" => 5,
        _ => 0,
    }
}

/// Canonical card data, immutable once normalized.
///
/// All fields are defaulted rather than optional: a record missing every
/// recognizable field still yields a valid zeroed `Card`.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::{Card, Color};
///
/// let bolt = Card::new("c1", "Lightning Bolt")
///     .with_mana_cost("{R}")
///     .with_type_line("Instant")
///     .with_rarity("common");
///
/// assert_eq!(bolt.cmc, 1.0);
/// assert!(bolt.colors.contains(Color::Red));
/// assert!(!bolt.is_land());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    /// Stable identifier. Empty string is the degenerate/unknown case.
    pub id: String,

    /// Card name.
    pub name: String,

    /// Raw cost notation, e.g. `"{2}{U}{R}"`. Empty for lands and some
    /// artifacts.
    pub mana_cost: String,

    /// Converted mana cost, always ≥ 0. Integer-valued in practice but
    /// kept as a number because source records supply it that way.
    pub cmc: f64,

    /// Free-text type line, e.g. `"Legendary Creature — Human Wizard"`.
    #[serde(rename = "type")]
    pub type_line: String,

    /// Rarity string; open set, blank when unknown.
    pub rarity: String,

    /// Oracle/rules text.
    pub text: String,

    /// Set code.
    pub set: String,

    /// Full set name.
    pub set_name: String,

    /// Colors in WUBRG order; empty means colorless.
    pub colors: ColorSet,

    /// Power, kept as text because special values like `"*"` occur.
    pub power: String,

    /// Toughness, kept as text for the same reason.
    pub toughness: String,
}

impl Card {
    /// Create a card with the given id and name; everything else zeroed.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the mana cost and derive `cmc` and `colors` from it.
    ///
    /// Apply `with_cmc`/`with_colors` afterwards to override the
    /// derived values.
    #[must_use]
    pub fn with_mana_cost(mut self, mana_cost: impl Into<String>) -> Self {
        self.mana_cost = mana_cost.into();
        let parsed = mana::parse(&self.mana_cost);
        self.cmc = f64::from(parsed.value);
        self.colors = parsed.colors;
        self
    }

    /// Set the converted mana cost directly.
    #[must_use]
    pub fn with_cmc(mut self, cmc: f64) -> Self {
        self.cmc = cmc.max(0.0);
        self
    }

    /// Set the type line.
    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    /// Set the rarity.
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Set the colors directly.
    #[must_use]
    pub fn with_colors(mut self, colors: ColorSet) -> Self {
        self.colors = colors;
        self
    }

    /// Set the set code and full set name.
    #[must_use]
    pub fn with_set(mut self, set: impl Into<String>, set_name: impl Into<String>) -> Self {
        self.set = set.into();
        self.set_name = set_name.into();
        self
    }

    /// Set the oracle text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// True if the type line mentions "Land" (case-insensitive).
    #[must_use]
    pub fn is_land(&self) -> bool {
        self.type_line.to_lowercase().contains("land")
    }

    /// Sort rank of this card's rarity. See [`rarity_rank`].
    #[must_use]
    pub fn rarity_rank(&self) -> u8 {
        rarity_rank(&self.rarity)
    }
}
