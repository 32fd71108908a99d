//! Card normalization.
//!
//! External card records arrive with inconsistent, overlapping field
//! names depending on which source produced them (catalog API, persisted
//! deck, bulk import). Normalization maps any such record onto the one
//! canonical `Card` shape.
//!
//! Resolution is driven by one alias table per attribute: an ordered
//! list of candidate keys, first non-empty match wins, typed zero value
//! as the fallback. The function is total: it never fails, whatever
//! the input shape.

use serde_json::Value;

use super::card::Card;
use super::color::{Color, ColorSet};
use crate::mana;

/// Candidate keys per attribute, in resolution order.
mod aliases {
    pub const ID: &[&str] = &["id", "scryfall_id"];
    pub const NAME: &[&str] = &["name"];
    pub const MANA_COST: &[&str] = &["mana_cost", "manaCost"];
    pub const TYPE_LINE: &[&str] = &["type", "type_line"];
    pub const RARITY: &[&str] = &["rarity"];
    pub const TEXT: &[&str] = &["text", "oracle_text"];
    pub const SET: &[&str] = &["set"];
    pub const SET_NAME: &[&str] = &["set_name", "setName"];
    pub const COLORS: &[&str] = &["colors", "color_identity"];
    pub const POWER: &[&str] = &["power"];
    pub const TOUGHNESS: &[&str] = &["toughness"];
}

/// First non-empty string among the candidate keys, else `""`.
///
/// Also stringifies bare numbers so numeric identifiers survive.
pub(crate) fn resolve_text(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Explicit numeric value under `key`, if the record carries one.
fn resolve_number(raw: &Value, key: &str) -> Option<f64> {
    raw.get(key).and_then(Value::as_f64)
}

/// Explicit color list among the candidate keys, if the record carries
/// one. An explicit empty list counts as supplied and suppresses
/// derivation from the mana cost.
fn resolve_colors(raw: &Value, keys: &[&str]) -> Option<ColorSet> {
    let list = keys.iter().find_map(|key| raw.get(key)?.as_array())?;
    Some(
        list.iter()
            .filter_map(Value::as_str)
            .filter_map(|code| code.chars().next())
            .filter_map(Color::from_code)
            .collect(),
    )
}

/// Normalize an arbitrary card record into the canonical shape.
///
/// Total function: any JSON value (including non-objects) produces a
/// valid `Card`, with empty strings and zero cost where nothing is
/// recognizable. `cmc` and `colors` are taken from the record when it
/// supplies them and derived from the mana cost otherwise.
///
/// ## Example
///
/// ```
/// use deckcraft::cards::normalize;
/// use serde_json::json;
///
/// // catalog shape
/// let card = normalize(&json!({
///     "scryfall_id": "abc",
///     "name": "Izzet Charm",
///     "manaCost": "{U}{R}",
///     "type_line": "Instant",
/// }));
/// assert_eq!(card.id, "abc");
/// assert_eq!(card.cmc, 2.0);
/// assert_eq!(card.type_line, "Instant");
/// ```
#[must_use]
pub fn normalize(raw: &Value) -> Card {
    let mana_cost = resolve_text(raw, aliases::MANA_COST);

    let cmc = match resolve_number(raw, "cmc") {
        Some(value) => value.max(0.0),
        None => f64::from(mana::parse(&mana_cost).value),
    };
    let colors = resolve_colors(raw, aliases::COLORS)
        .unwrap_or_else(|| mana::parse(&mana_cost).colors);

    Card {
        id: resolve_text(raw, aliases::ID),
        name: resolve_text(raw, aliases::NAME),
        mana_cost,
        cmc,
        type_line: resolve_text(raw, aliases::TYPE_LINE),
        rarity: resolve_text(raw, aliases::RARITY),
        text: resolve_text(raw, aliases::TEXT),
        set: resolve_text(raw, aliases::SET),
        set_name: resolve_text(raw, aliases::SET_NAME),
        colors,
        power: resolve_text(raw, aliases::POWER),
        toughness: resolve_text(raw, aliases::TOUGHNESS),
    }
}

/// Normalize a batch of records, preserving order.
#[must_use]
pub fn normalize_all(raw: &[Value]) -> Vec<Card> {
    raw.iter().map(normalize).collect()
}
