//! Aggregate deck statistics for one partition.

use serde::Serialize;

use super::colors::ColorDistribution;
use super::curve::ManaCurve;
use crate::deck::{DeckCollection, Partition};

/// The derived statistics a deck display shows for one partition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeckSummary {
    /// Total card count (sum of quantities).
    pub total_cards: u32,
    /// Average converted mana cost, `6+` counted as 6, two decimals.
    pub average_cmc: f64,
    /// Land-inclusive mana curve.
    pub curve: ManaCurve,
    /// Color distribution (fan-out).
    pub colors: ColorDistribution,
}

impl DeckSummary {
    /// Compute the summary for one partition of a collection.
    #[must_use]
    pub fn of(cards: &DeckCollection, partition: Partition) -> Self {
        let curve = ManaCurve::of(cards.entries(partition));
        let colors = ColorDistribution::of(cards.entries(partition));
        Self {
            total_cards: cards.count(partition),
            average_cmc: curve.average(),
            curve,
            colors,
        }
    }
}
