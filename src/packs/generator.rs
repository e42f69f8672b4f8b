//! Random pack generator tool.

use super::{PackSource, PackSourceError};
use crate::draft::{Card, Color, PACK_SIZE};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// Largest pack the generator will build.
pub const MAX_GENERATED_PACK_SIZE: usize = 30;

/// Source draws allowed before giving up on a full pack.
const MAX_DRAW_ATTEMPTS: usize = 10;

/// Breakdown of a generated pack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackMetadata {
    /// Size the caller asked for, before clamping.
    pub requested_size: usize,
    /// Number of cards actually in the pack.
    pub size: usize,
    /// Cards containing each color.
    pub colors: BTreeMap<Color, usize>,
    /// Colorless cards.
    pub colorless: usize,
    /// Cards with two or more colors.
    pub multicolor: usize,
    /// Cards per rarity; cards without one count as "Unknown".
    pub rarities: BTreeMap<String, usize>,
}

impl PackMetadata {
    fn describe(requested_size: usize, cards: &[Card]) -> Self {
        let mut metadata = Self {
            requested_size,
            size: cards.len(),
            ..Self::default()
        };
        for card in cards {
            for color in card.colors() {
                *metadata.colors.entry(*color).or_default() += 1;
            }
            if card.is_colorless() {
                metadata.colorless += 1;
            }
            if card.is_multicolor() {
                metadata.multicolor += 1;
            }
            let rarity = card.rarity().clone().unwrap_or_else(|| "Unknown".to_string());
            *metadata.rarities.entry(rarity).or_default() += 1;
        }
        metadata
    }
}

/// A single pack drawn for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPack {
    /// The cards.
    pub cards: Vec<Card>,
    /// Color and rarity breakdown.
    pub metadata: PackMetadata,
}

/// Draws one pack of `requested_size` cards (clamped to 1..=30) from `source`.
///
/// Keeps the first occurrence of each card id and pulls more source packs
/// until the pack is full. Fails when the source cannot supply enough
/// distinct cards within `MAX_DRAW_ATTEMPTS` draws.
#[instrument(skip(source), fields(source = source.name()))]
pub async fn generate_pack(
    source: &dyn PackSource,
    requested_size: usize,
) -> Result<GeneratedPack, PackSourceError> {
    let size = requested_size.clamp(1, MAX_GENERATED_PACK_SIZE);
    let mut seen = HashSet::new();
    let mut cards: Vec<Card> = Vec::with_capacity(size);

    for attempt in 1..=MAX_DRAW_ATTEMPTS {
        let missing = size - cards.len();
        let packs = source.fetch_packs(missing.div_ceil(PACK_SIZE)).await?;
        cards.extend(
            packs
                .into_iter()
                .flatten()
                .filter(|card| seen.insert(card.id().clone()))
                .take(missing),
        );
        if cards.len() == size {
            break;
        }
        debug!(attempt, have = cards.len(), wanted = size, "Drawing more cards");
    }

    if cards.len() < size {
        warn!(wanted = size, got = cards.len(), "Source ran out of distinct cards");
        return Err(PackSourceError::new(format!(
            "Not enough distinct cards to generate a pack ({} of {})",
            cards.len(),
            size
        )));
    }
    info!(size, "Generated random pack");

    let metadata = PackMetadata::describe(requested_size, &cards);
    Ok(GeneratedPack { cards, metadata })
}
