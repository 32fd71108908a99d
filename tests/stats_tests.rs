//! Statistics tests over realistic deck partitions.

use deckcraft::cards::{Card, Color};
use deckcraft::deck::{DeckCollection, Partition};
use deckcraft::stats::{group_by_type, ColorDistribution, DeckSummary, ManaCurve, TypeGroup};

/// A small mono-red list: 4 one-drops, 2 three-drops, 1 seven-drop.
fn curve_deck() -> DeckCollection {
    let mut deck = DeckCollection::new();
    deck.add(
        Card::new("bolt", "Lightning Bolt").with_mana_cost("{R}"),
        4,
        Partition::Main,
    );
    deck.add(
        Card::new("hordeling", "Hordeling Outburst").with_mana_cost("{1}{R}{R}"),
        2,
        Partition::Main,
    );
    deck.add(
        Card::new("dragon", "Moonveil Dragon").with_mana_cost("{5}{R}{R}"),
        1,
        Partition::Main,
    );
    deck
}

#[test]
fn test_mana_curve_and_average() {
    let deck = curve_deck();
    let curve = ManaCurve::of(deck.entries(Partition::Main));

    let counts: Vec<(&str, u32)> = curve.iter().collect();
    assert_eq!(
        counts,
        vec![("0", 0), ("1", 4), ("2", 0), ("3", 2), ("4", 0), ("5", 0), ("6+", 1)]
    );

    // (1*4 + 3*2 + 6*1) / 7, rounded to two decimals
    assert_eq!(curve.average(), 2.29);
}

#[test]
fn test_curve_variants_differ_on_lands() {
    let mut deck = curve_deck();
    deck.add(
        Card::new("mountain", "Mountain").with_type_line("Basic Land — Mountain"),
        20,
        Partition::Main,
    );

    let full = ManaCurve::of(deck.entries(Partition::Main));
    let spells = ManaCurve::of_spells(deck.entries(Partition::Main));

    assert_eq!(full.get(0), 20);
    assert_eq!(spells.get(0), 0);
    assert_eq!(spells.total(), 7);
}

#[test]
fn test_color_distribution_fan_out() {
    let mut deck = DeckCollection::new();
    deck.add(
        Card::new("charm", "Izzet Charm").with_mana_cost("{U}{R}"),
        4,
        Partition::Main,
    );
    deck.add(Card::new("ring", "Sol Ring").with_mana_cost("{1}"), 1, Partition::Main);

    let distribution = ColorDistribution::of(deck.entries(Partition::Main));
    assert_eq!(distribution.colored(Color::Blue), 4);
    assert_eq!(distribution.colored(Color::Red), 4);
    assert_eq!(distribution.colorless(), 1);

    // fan-out means bucket sum exceeds card count
    let bucket_sum: u32 = distribution.iter().map(|(_, count)| count).sum();
    assert!(bucket_sum > deck.count(Partition::Main));
}

#[test]
fn test_summary_bundle() {
    let deck = curve_deck();
    let summary = DeckSummary::of(&deck, Partition::Main);

    assert_eq!(summary.total_cards, 7);
    assert_eq!(summary.average_cmc, 2.29);
    assert_eq!(summary.colors.colored(Color::Red), 7);
    assert_eq!(summary.curve.max(), 4);
}

#[test]
fn test_group_by_type_buckets() {
    let mut deck = DeckCollection::new();
    deck.add(
        Card::new("bear", "Grizzly Bears").with_type_line("Creature — Bear"),
        4,
        Partition::Main,
    );
    deck.add(Card::new("opt", "Opt").with_type_line("Instant"), 4, Partition::Main);
    deck.add(
        Card::new("forest", "Forest").with_type_line("Basic Land — Forest"),
        12,
        Partition::Main,
    );
    deck.add(Card::new("weird", "Conspiracy").with_type_line("Conspiracy"), 1, Partition::Main);

    let entries: Vec<_> = deck.entries(Partition::Main).cloned().collect();
    let groups = group_by_type(&entries);

    for (group, members) in &groups {
        let expected = match group {
            TypeGroup::Creature | TypeGroup::Instant | TypeGroup::Land | TypeGroup::Other => 1,
            _ => 0,
        };
        assert_eq!(members.len(), expected, "group {group:?}");
    }
}
