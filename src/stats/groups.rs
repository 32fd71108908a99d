//! Grouping deck entries by card type.

use serde::{Deserialize, Serialize};

use crate::deck::DeckEntry;

/// Display group for a card type line.
///
/// A card lands in the first group whose keyword its type line contains
/// (case-insensitive), in declaration order; everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeGroup {
    Creature,
    Instant,
    Sorcery,
    Artifact,
    Enchantment,
    Planeswalker,
    Land,
    Other,
}

impl TypeGroup {
    /// All groups in display order.
    pub const ALL: [TypeGroup; 8] = [
        TypeGroup::Creature,
        TypeGroup::Instant,
        TypeGroup::Sorcery,
        TypeGroup::Artifact,
        TypeGroup::Enchantment,
        TypeGroup::Planeswalker,
        TypeGroup::Land,
        TypeGroup::Other,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TypeGroup::Creature => "Creature",
            TypeGroup::Instant => "Instant",
            TypeGroup::Sorcery => "Sorcery",
            TypeGroup::Artifact => "Artifact",
            TypeGroup::Enchantment => "Enchantment",
            TypeGroup::Planeswalker => "Planeswalker",
            TypeGroup::Land => "Land",
            TypeGroup::Other => "Other",
        }
    }

    /// Classify a free-text type line.
    #[must_use]
    pub fn of(type_line: &str) -> TypeGroup {
        let lower = type_line.to_lowercase();
        for group in Self::ALL {
            if group != TypeGroup::Other && lower.contains(&group.label().to_lowercase()) {
                return group;
            }
        }
        TypeGroup::Other
    }
}

/// Partition entries into type groups, in display order.
///
/// Every group is present (possibly empty); entries keep their relative
/// order within a group.
#[must_use]
pub fn group_by_type<'a>(
    entries: impl IntoIterator<Item = &'a DeckEntry>,
) -> Vec<(TypeGroup, Vec<&'a DeckEntry>)> {
    let mut groups: Vec<(TypeGroup, Vec<&DeckEntry>)> =
        TypeGroup::ALL.into_iter().map(|group| (group, Vec::new())).collect();
    for entry in entries {
        let group = TypeGroup::of(&entry.card.type_line);
        if let Some((_, members)) = groups.iter_mut().find(|(g, _)| *g == group) {
            members.push(entry);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_classification() {
        assert_eq!(TypeGroup::of("Legendary Creature — Human"), TypeGroup::Creature);
        assert_eq!(TypeGroup::of("Instant"), TypeGroup::Instant);
        assert_eq!(TypeGroup::of("Basic Land — Island"), TypeGroup::Land);
        assert_eq!(TypeGroup::of("Tribal Sorcery — Elf"), TypeGroup::Sorcery);
        assert_eq!(TypeGroup::of("Conspiracy"), TypeGroup::Other);
        assert_eq!(TypeGroup::of(""), TypeGroup::Other);
    }

    #[test]
    fn test_first_matching_group_wins() {
        // both "Artifact" and "Creature" appear; Creature is checked first
        assert_eq!(TypeGroup::of("Artifact Creature — Golem"), TypeGroup::Creature);
    }

    #[test]
    fn test_group_by_type_keeps_order() {
        let entries = vec![
            DeckEntry { card: Card::new("a", "Opt").with_type_line("Instant"), quantity: 4 },
            DeckEntry { card: Card::new("b", "Bear").with_type_line("Creature — Bear"), quantity: 2 },
            DeckEntry { card: Card::new("c", "Shock").with_type_line("Instant"), quantity: 3 },
        ];
        let groups = group_by_type(&entries);

        assert_eq!(groups.len(), TypeGroup::ALL.len());
        let (group, instants) = &groups[1];
        assert_eq!(*group, TypeGroup::Instant);
        let ids: Vec<&str> = instants.iter().map(|e| e.card.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
