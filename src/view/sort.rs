//! Stable card sorting.
//!
//! Sorting is a projection: it never mutates the input and can be
//! re-applied freely. String keys compare case-insensitively. Rarity
//! and mana cost order by their numeric value with a name tie-break
//! that stays ascending whichever direction the primary key uses.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::mana;

/// Which card field to sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Card name, case-insensitive.
    Name,
    /// Type line, case-insensitive.
    #[serde(rename = "type")]
    TypeLine,
    /// Full set name, case-insensitive.
    SetName,
    /// Rarity rank, name tie-break.
    Rarity,
    /// Numeric converted cost, name tie-break.
    ManaCost,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Low to high.
    #[default]
    Ascending,
    /// High to low.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flip(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort selection, with the column-header toggle behavior:
/// requesting the active key flips its direction, requesting a new key
/// resets to ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Active sort key.
    pub key: SortKey,
    /// Active direction.
    pub direction: SortDirection,
}

impl SortConfig {
    /// Start sorting ascending on the given key.
    #[must_use]
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Select a key: toggle direction on the active key, reset to
    /// ascending on a new one.
    pub fn request(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Sort with the current selection.
    #[must_use]
    pub fn sorted(&self, cards: &[Card]) -> Vec<Card> {
        sorted(cards, self.key, self.direction)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortKey::Name)
    }
}

/// Return a sorted copy of the cards.
///
/// Stable: cards that compare equal keep their input order.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::Card;
/// use deckcraft::view::{sorted, SortDirection, SortKey};
///
/// let cards = vec![
///     Card::new("1", "Bolt").with_rarity("rare"),
///     Card::new("2", "Ajani").with_rarity("rare"),
///     Card::new("3", "Sol Ring").with_rarity("uncommon"),
/// ];
/// let by_rarity = sorted(&cards, SortKey::Rarity, SortDirection::Ascending);
/// let names: Vec<&str> = by_rarity.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, vec!["Sol Ring", "Ajani", "Bolt"]);
/// ```
#[must_use]
pub fn sorted(cards: &[Card], key: SortKey, direction: SortDirection) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.sort_by(|a, b| compare(a, b, key, direction));
    out
}

/// Compare two cards under a key and direction.
///
/// The direction flips the primary comparison only; the name tie-break
/// of the rarity and mana-cost keys always runs ascending.
#[must_use]
pub fn compare(a: &Card, b: &Card, key: SortKey, direction: SortDirection) -> Ordering {
    let primary = match key {
        SortKey::Name => compare_ci(&a.name, &b.name),
        SortKey::TypeLine => compare_ci(&a.type_line, &b.type_line),
        SortKey::SetName => compare_ci(&a.set_name, &b.set_name),
        SortKey::Rarity => a.rarity_rank().cmp(&b.rarity_rank()),
        SortKey::ManaCost => converted_cost(a).total_cmp(&converted_cost(b)),
    };
    if primary == Ordering::Equal && matches!(key, SortKey::Rarity | SortKey::ManaCost) {
        return compare_ci(&a.name, &b.name);
    }
    direction.apply(primary)
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric cost for sorting: the card's own cmc when it carries one,
/// else parsed from the cost notation.
fn converted_cost(card: &Card) -> f64 {
    if card.cmc != 0.0 {
        card.cmc
    } else {
        f64::from(mana::parse(&card.mana_cost).value)
    }
}
