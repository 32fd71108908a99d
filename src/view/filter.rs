//! Conjunctive card filtering.
//!
//! A `CardFilter` is a set of predicates combined with AND. Every unset
//! field matches everything, so the empty filter is the identity over
//! any card list.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};

/// Mana-cost filter value meaning "6 or more".
pub const SIX_PLUS: &str = "6+";

/// Filter predicate set over canonical card fields.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::Card;
/// use deckcraft::view::{filtered, CardFilter};
///
/// let cards = vec![
///     Card::new("1", "Lightning Bolt").with_type_line("Instant"),
///     Card::new("2", "Grizzly Bears").with_type_line("Creature — Bear"),
/// ];
///
/// let filter = CardFilter {
///     type_line: "creature".to_string(),
///     ..CardFilter::default()
/// };
/// let hits = filtered(&cards, &filter);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Grizzly Bears");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFilter {
    /// Case-insensitive substring over name OR text OR type line.
    pub search: String,
    /// Case-insensitive substring of the type line.
    pub type_line: String,
    /// Exact rarity, case-insensitive.
    pub rarity: String,
    /// Exact set code, case-insensitive.
    pub set: String,
    /// Converted-cost value as text: a numeral, or `"6+"` for ≥ 6.
    pub mana_cost: String,
    /// Color the card's color set must contain.
    pub color: Option<Color>,
}

impl CardFilter {
    /// True when no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.type_line.is_empty()
            && self.rarity.is_empty()
            && self.set.is_empty()
            && self.mana_cost.is_empty()
            && self.color.is_none()
    }

    /// Clear every predicate.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a card passes every set predicate.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = card.name.to_lowercase().contains(&term)
                || card.text.to_lowercase().contains(&term)
                || card.type_line.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if !self.type_line.is_empty()
            && !card
                .type_line
                .to_lowercase()
                .contains(&self.type_line.to_lowercase())
        {
            return false;
        }

        if !self.rarity.is_empty() && !card.rarity.eq_ignore_ascii_case(&self.rarity) {
            return false;
        }

        if !self.set.is_empty() && !card.set.eq_ignore_ascii_case(&self.set) {
            return false;
        }

        if !self.mana_cost.is_empty() && !matches_cost(&self.mana_cost, card.cmc) {
            return false;
        }

        if let Some(color) = self.color {
            if !card.colors.contains(color) {
                return false;
            }
        }

        true
    }
}

/// A cost value that fails to parse matches everything, like an unset
/// filter.
fn matches_cost(wanted: &str, cmc: f64) -> bool {
    if wanted == SIX_PLUS {
        return cmc >= 6.0;
    }
    match wanted.parse::<f64>() {
        Ok(value) => cmc == value,
        Err(_) => true,
    }
}

/// Order-preserving filter projection. The empty filter returns the
/// input unchanged.
#[must_use]
pub fn filtered(cards: &[Card], filter: &CardFilter) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| filter.matches(card))
        .cloned()
        .collect()
}

/// Distinct leading type words of a card list, sorted.
///
/// Drives the type filter's option list: "Legendary Creature — Human
/// Wizard" contributes "Legendary".
#[must_use]
pub fn distinct_types(cards: &[Card]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    for card in cards {
        if let Some(word) = card.type_line.split_whitespace().next() {
            seen.insert(word.to_string());
        }
    }
    let mut types: Vec<String> = seen.into_iter().collect();
    types.sort();
    types
}

/// Distinct set codes of a card list, sorted.
#[must_use]
pub fn distinct_sets(cards: &[Card]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !card.set.is_empty() {
            seen.insert(card.set.clone());
        }
    }
    let mut sets: Vec<String> = seen.into_iter().collect();
    sets.sort();
    sets
}
