//! Draft participants.

use super::card::{Card, Color, Pack};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Seat index of the human player.
pub const HUMAN_SEAT: usize = 0;

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    /// The human player at seat 0.
    Human,
    /// A bot at seats 1..=N.
    Bot,
}

/// A card in a pick history, tagged with when it was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PickedCard {
    /// The card.
    card: Card,
    /// Round (1-based) in which it was picked.
    round: u8,
    /// Pick number within the round (1-based).
    pick: u8,
}

impl PickedCard {
    /// Creates a pick history entry.
    pub fn new(card: Card, round: u8, pick: u8) -> Self {
        Self { card, round, pick }
    }
}

/// One draft participant.
#[derive(Debug, Clone, Getters)]
pub struct Seat {
    /// Ordinal position; 0 is the human.
    index: usize,
    /// Display name.
    name: String,
    /// Human or bot.
    kind: SeatKind,
    /// Cards taken so far, in pick order.
    picks: Vec<PickedCard>,
    /// Pack currently in hand.
    current_pack: Pack,
    /// Inferred color identity (bots only), fixed after the first colored pick.
    colors: Option<Vec<Color>>,
}

impl Seat {
    /// Creates the human seat.
    pub fn human() -> Self {
        Self::with_kind(HUMAN_SEAT, "You".to_string(), SeatKind::Human)
    }

    /// Creates the bot seat at `index` (1-based among bots).
    pub fn bot(index: usize) -> Self {
        Self::with_kind(index, format!("Bot {}", index), SeatKind::Bot)
    }

    fn with_kind(index: usize, name: String, kind: SeatKind) -> Self {
        Self {
            index,
            name,
            kind,
            picks: Vec::new(),
            current_pack: Vec::new(),
            colors: None,
        }
    }

    /// True for bot seats.
    pub fn is_bot(&self) -> bool {
        self.kind == SeatKind::Bot
    }

    /// Inferred colors as a slice, if any were inferred yet.
    pub fn preferred_colors(&self) -> Option<&[Color]> {
        self.colors.as_deref()
    }

    /// Position of the card with `card_id` in the current pack.
    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.current_pack.iter().position(|c| c.id() == card_id)
    }

    /// Replaces the pack in hand.
    pub(crate) fn receive_pack(&mut self, pack: Pack) {
        self.current_pack = pack;
    }

    /// Hands the current pack over, leaving this seat empty-handed.
    pub(crate) fn hand_over_pack(&mut self) -> Pack {
        std::mem::take(&mut self.current_pack)
    }

    /// Removes the card at `position` from the pack and records the pick.
    ///
    /// Returns `None` when `position` is out of range.
    pub(crate) fn take(&mut self, position: usize, round: u8, pick: u8) -> Option<&PickedCard> {
        if position >= self.current_pack.len() {
            return None;
        }
        let card = self.current_pack.remove(position);

        if self.is_bot() && self.colors.is_none() && !card.colors().is_empty() {
            debug!(seat = self.index, colors = ?card.colors(), "Bot settled on colors");
            self.colors = Some(card.colors().clone());
        }

        self.picks.push(PickedCard::new(card, round, pick));
        self.picks.last()
    }
}
