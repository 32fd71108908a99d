//! Color distribution.
//!
//! Tallies quantities into one bucket per color plus a colorless
//! bucket, in WUBRG+C order. A multicolor card's quantity lands in
//! every one of its colors' buckets (each color bar shows its own
//! total), so the bucket sum can exceed the card count.

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::deck::DeckEntry;

/// Bucket label for the colorless bucket.
pub const COLORLESS_CODE: char = 'C';

/// Quantity tally per color, plus colorless.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::{Card, Color};
/// use deckcraft::deck::DeckEntry;
/// use deckcraft::stats::ColorDistribution;
///
/// let entries = vec![
///     DeckEntry { card: Card::new("a", "Izzet Charm").with_mana_cost("{U}{R}"), quantity: 2 },
///     DeckEntry { card: Card::new("b", "Sol Ring"), quantity: 1 },
/// ];
/// let distribution = ColorDistribution::of(&entries);
///
/// // the multicolor card fans out into both its buckets
/// assert_eq!(distribution.colored(Color::Blue), 2);
/// assert_eq!(distribution.colored(Color::Red), 2);
/// assert_eq!(distribution.colorless(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDistribution {
    // WUBRG order, then colorless
    buckets: [u32; 6],
}

impl ColorDistribution {
    /// Tally a partition's entries.
    #[must_use]
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a DeckEntry>) -> Self {
        let mut distribution = Self::default();
        for entry in entries {
            if entry.card.colors.is_empty() {
                distribution.buckets[5] += entry.quantity;
            } else {
                for color in entry.card.colors.iter() {
                    distribution.buckets[color as usize] += entry.quantity;
                }
            }
        }
        distribution
    }

    /// Quantity tallied under one color.
    #[must_use]
    pub fn colored(&self, color: Color) -> u32 {
        self.buckets[color as usize]
    }

    /// Quantity of colorless cards.
    #[must_use]
    pub fn colorless(&self) -> u32 {
        self.buckets[5]
    }

    /// Largest bucket count (display scaling).
    #[must_use]
    pub fn max(&self) -> u32 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Iterate `(code, count)` pairs in WUBRG+C order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        Color::ALL
            .into_iter()
            .map(Color::code)
            .chain(std::iter::once(COLORLESS_CODE))
            .zip(self.buckets.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn entry(id: &str, mana_cost: &str, quantity: u32) -> DeckEntry {
        DeckEntry {
            card: Card::new(id, id).with_mana_cost(mana_cost),
            quantity,
        }
    }

    #[test]
    fn test_single_color_tally() {
        let entries = vec![entry("a", "{R}", 4), entry("b", "{1}{R}", 2)];
        let distribution = ColorDistribution::of(&entries);
        assert_eq!(distribution.colored(Color::Red), 6);
        assert_eq!(distribution.colored(Color::Blue), 0);
    }

    #[test]
    fn test_multicolor_fans_out() {
        let entries = vec![entry("a", "{W}{U}{B}", 3)];
        let distribution = ColorDistribution::of(&entries);

        assert_eq!(distribution.colored(Color::White), 3);
        assert_eq!(distribution.colored(Color::Blue), 3);
        assert_eq!(distribution.colored(Color::Black), 3);

        // fan-out: bucket sum exceeds the card count
        let sum: u32 = distribution.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, 9);
    }

    #[test]
    fn test_colorless_bucket() {
        let entries = vec![entry("a", "{2}", 4), entry("b", "", 20)];
        let distribution = ColorDistribution::of(&entries);
        assert_eq!(distribution.colorless(), 24);
    }

    #[test]
    fn test_iter_order() {
        let codes: Vec<char> = ColorDistribution::default().iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!['W', 'U', 'B', 'R', 'G', 'C']);
    }
}
