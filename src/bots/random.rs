//! Uniform random bot.

use super::{BotPicker, PickContext};
use crate::draft::Card;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Bot that takes a uniformly random card from its pack.
///
/// The bot's inferred colors are tracked by the seat but never consulted here.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Creates a random picker, deterministic when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl BotPicker for RandomPicker {
    fn pick(&mut self, pack: &[Card], context: &PickContext<'_>) -> Option<usize> {
        if pack.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..pack.len());
        debug!(round = context.round, pick = context.pick, index, "Random pick");
        Some(index)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Color;

    fn pack(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| {
                Card::new(
                    format!("c{i}"),
                    format!("Card {i}"),
                    vec![],
                    "Artifact".to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_pack_yields_none() {
        let mut picker = RandomPicker::new(Some(1));
        let context = PickContext {
            round: 1,
            pick: 1,
            colors: None,
        };
        assert_eq!(picker.pick(&[], &context), None);
    }

    #[test]
    fn test_pick_in_range() {
        let mut picker = RandomPicker::new(Some(7));
        let cards = pack(15);
        let colors = [Color::Green];
        let context = PickContext {
            round: 2,
            pick: 4,
            colors: Some(&colors),
        };
        for _ in 0..100 {
            let index = picker.pick(&cards, &context).expect("nonempty pack");
            assert!(index < cards.len());
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let cards = pack(15);
        let context = PickContext {
            round: 1,
            pick: 1,
            colors: None,
        };
        let mut a = RandomPicker::new(Some(42));
        let mut b = RandomPicker::new(Some(42));
        let picks_a: Vec<_> = (0..20).map(|_| a.pick(&cards, &context)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.pick(&cards, &context)).collect();
        assert_eq!(picks_a, picks_b);
    }
}
