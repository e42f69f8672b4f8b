//! Bot pick policies.

mod random;
mod scored;

pub use random::RandomPicker;
pub use scored::ScoredPicker;

use crate::draft::{Card, Color};
use serde::{Deserialize, Serialize};

/// What a bot knows when it picks.
#[derive(Debug, Clone, Copy)]
pub struct PickContext<'a> {
    /// Current round (1-based).
    pub round: u8,
    /// Current pick number within the round (1-based).
    pub pick: u8,
    /// Colors the bot has settled on, if any.
    pub colors: Option<&'a [Color]>,
}

/// Trait for bots that choose a card from a pack.
pub trait BotPicker: Send {
    /// Chooses a card from `pack`.
    ///
    /// Returns the index of the chosen card, or `None` for an empty pack.
    fn pick(&mut self, pack: &[Card], context: &PickContext<'_>) -> Option<usize>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

/// Selectable bot policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BotStrategy {
    /// Uniform random choice; inferred colors are ignored.
    #[default]
    Random,
    /// Heuristic scoring by card type, rarity and color fit.
    Scored,
}

impl BotStrategy {
    /// Builds the picker for this strategy.
    pub fn build(self, seed: Option<u64>) -> Box<dyn BotPicker> {
        match self {
            Self::Random => Box::new(RandomPicker::new(seed)),
            Self::Scored => Box::new(ScoredPicker::new(seed)),
        }
    }
}
