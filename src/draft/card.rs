//! Card records as served by the cube API.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Unique identifier of a card within a draft session.
pub type CardId = String;

/// A pack of cards dealt to one seat for one round.
pub type Pack = Vec<Card>;

/// One of the five color symbols.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
pub enum Color {
    /// White.
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    White,
    /// Blue.
    #[serde(rename = "U")]
    #[strum(serialize = "U")]
    Blue,
    /// Black.
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    Black,
    /// Red.
    #[serde(rename = "R")]
    #[strum(serialize = "R")]
    Red,
    /// Green.
    #[serde(rename = "G")]
    #[strum(serialize = "G")]
    Green,
}

/// A card record.
///
/// Only `id`, `name`, `colors` and `type` matter to the draft engine. The
/// remaining fields are carried through for display and for the scored bot
/// policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier.
    id: CardId,
    /// Card name.
    name: String,
    /// Color identity; empty means colorless.
    #[serde(default)]
    colors: Vec<Color>,
    /// Type line, e.g. "Creature - Elf Druid".
    #[serde(rename = "type", default)]
    type_line: String,
    /// Rarity name ("Common", "Uncommon", "Rare", "Mythic Rare").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[new(default)]
    rarity: Option<String>,
    /// Printed power, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[new(default)]
    power: Option<String>,
    /// Printed toughness, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[new(default)]
    toughness: Option<String>,
    /// Mana cost string, e.g. "{1}{G}".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[new(default)]
    mana_cost: Option<String>,
    /// Card image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[new(default)]
    image_url: Option<String>,
}

impl Card {
    /// Sets the rarity.
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Sets power and toughness.
    pub fn with_stats(mut self, power: impl Into<String>, toughness: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    /// True when the card has no color symbols.
    pub fn is_colorless(&self) -> bool {
        self.colors.is_empty()
    }

    /// True when the card has two or more colors.
    pub fn is_multicolor(&self) -> bool {
        self.colors.len() > 1
    }

    /// Formats the color identity as symbols, e.g. "WU", or "C" when colorless.
    pub fn color_symbols(&self) -> String {
        format_colors(&self.colors)
    }
}

/// Formats a color identity as its symbols, "C" when empty.
pub fn format_colors(colors: &[Color]) -> String {
    if colors.is_empty() {
        return "C".to_string();
    }
    colors.iter().map(|c| c.to_string()).collect()
}
