//! Mana-value curve.
//!
//! Buckets deck entries by converted mana cost into the fixed labels
//! `0,1,2,3,4,5,6+`, weighted by quantity. Two variants exist because
//! both appear in deck displays: the plain curve counts every card, the
//! spells-only curve leaves lands out.

use serde::{Deserialize, Serialize};

use crate::deck::DeckEntry;

/// Bucket labels in curve order.
pub const CURVE_LABELS: [&str; 7] = ["0", "1", "2", "3", "4", "5", "6+"];

/// Quantity-weighted mana-value histogram with fixed buckets.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::Card;
/// use deckcraft::deck::DeckEntry;
/// use deckcraft::stats::ManaCurve;
///
/// let entries = vec![
///     DeckEntry { card: Card::new("a", "Opt").with_cmc(1.0), quantity: 4 },
///     DeckEntry { card: Card::new("b", "Shock").with_cmc(1.0), quantity: 2 },
/// ];
/// let curve = ManaCurve::of(&entries);
/// assert_eq!(curve.get(1), 6);
/// assert_eq!(curve.total(), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCurve {
    buckets: [u32; 7],
}

impl ManaCurve {
    /// Curve over all entries, lands included.
    #[must_use]
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a DeckEntry>) -> Self {
        Self::build(entries, false)
    }

    /// Curve over non-land entries only.
    #[must_use]
    pub fn of_spells<'a>(entries: impl IntoIterator<Item = &'a DeckEntry>) -> Self {
        Self::build(entries, true)
    }

    fn build<'a>(entries: impl IntoIterator<Item = &'a DeckEntry>, skip_lands: bool) -> Self {
        let mut curve = Self::default();
        for entry in entries {
            if skip_lands && entry.card.is_land() {
                continue;
            }
            curve.buckets[bucket_index(entry.card.cmc)] += entry.quantity;
        }
        curve
    }

    /// Count in one bucket; index 6 is the `6+` bucket.
    #[must_use]
    pub fn get(&self, bucket: usize) -> u32 {
        self.buckets.get(bucket).copied().unwrap_or(0)
    }

    /// Largest bucket count (display scaling).
    #[must_use]
    pub fn max(&self) -> u32 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.buckets.iter().sum()
    }

    /// Iterate `(label, count)` pairs in curve order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        CURVE_LABELS.into_iter().zip(self.buckets.iter().copied())
    }

    /// Average converted mana cost over the bucketed cards, rounded to
    /// two decimals. The `6+` bucket counts as 6. An empty curve yields
    /// 0.00 rather than dividing by zero.
    #[must_use]
    pub fn average(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let sum: u32 = self
            .buckets
            .iter()
            .enumerate()
            .map(|(value, count)| value as u32 * count)
            .sum();
        round2(f64::from(sum) / f64::from(total))
    }
}

fn bucket_index(cmc: f64) -> usize {
    if cmc >= 6.0 {
        6
    } else if cmc <= 0.0 {
        0
    } else {
        // 0 < cmc < 6, fractional costs bucket by floor
        cmc.floor() as usize
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
