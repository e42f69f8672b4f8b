//! Heuristic bot that weighs card quality against its colors.

use super::{BotPicker, PickContext};
use crate::draft::Card;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Bot that scores every card and takes the best one.
///
/// Creatures score 5 plus half their combined stats (capped at 8), instants
/// and sorceries score 4. Rarity adds up to 3. Once the bot has colors,
/// on-color cards gain weight as the round goes on and off-color cards lose
/// it. A small random jitter keeps bots from agreeing on every pack.
pub struct ScoredPicker {
    rng: StdRng,
}

impl ScoredPicker {
    /// Creates a scored picker, deterministic when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Deterministic part of a card's score.
    #[instrument(skip_all, fields(card = %card.name()))]
    pub fn base_score(card: &Card, context: &PickContext<'_>) -> f64 {
        let mut score = 0.0;
        let type_line = card.type_line();

        if type_line.contains("Creature") {
            score += 5.0;
            let power = parse_stat(card.power().as_deref());
            let toughness = parse_stat(card.toughness().as_deref());
            score += f64::from((power + toughness).min(8)) / 2.0;
        } else if type_line.contains("Instant") || type_line.contains("Sorcery") {
            score += 4.0;
        }

        score += match card.rarity().as_deref() {
            Some("Uncommon") => 1.0,
            Some("Rare") => 2.0,
            Some("Mythic Rare") => 3.0,
            _ => 0.0,
        };

        let pick = f64::from(context.pick);
        if let Some(bot_colors) = context.colors.filter(|c| !c.is_empty()) {
            let matching = card
                .colors()
                .iter()
                .filter(|c| bot_colors.contains(c))
                .count();
            if matching > 0 {
                score += matching as f64 * (1.0 + pick / 5.0);
            } else if card.is_colorless() {
                score += 1.0;
            } else {
                score -= (pick / 3.0).min(3.0);
            }
        }

        if context.round == 1 && context.pick <= 3 {
            score += 2.0;
        }

        score
    }
}

/// Parses a printed stat; variable stats like "*" count as zero.
fn parse_stat(stat: Option<&str>) -> i32 {
    stat.and_then(|s| s.trim().parse::<i32>().ok()).unwrap_or(0)
}

impl BotPicker for ScoredPicker {
    fn pick(&mut self, pack: &[Card], context: &PickContext<'_>) -> Option<usize> {
        let (index, score) = pack
            .iter()
            .map(|card| Self::base_score(card, context) + self.rng.gen_range(0.0..2.0))
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))?;
        debug!(round = context.round, pick = context.pick, index, score, "Scored pick");
        Some(index)
    }

    fn name(&self) -> &str {
        "scored"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Color;

    fn context(colors: Option<&[Color]>) -> PickContext<'_> {
        PickContext {
            round: 2,
            pick: 6,
            colors,
        }
    }

    #[test]
    fn test_creature_stats_capped() {
        let big = Card::new("1".into(), "Giant".into(), vec![], "Creature - Giant".into())
            .with_stats("7", "7");
        // 5 + min(14, 8) / 2
        assert_eq!(ScoredPicker::base_score(&big, &context(None)), 9.0);
    }

    #[test]
    fn test_variable_stats_count_as_zero() {
        let odd = Card::new("1".into(), "Tarmogoyf".into(), vec![], "Creature - Lhurgoyf".into())
            .with_stats("*", "1+*");
        assert_eq!(ScoredPicker::base_score(&odd, &context(None)), 5.0);
    }

    #[test]
    fn test_color_fit_changes_score() {
        let colors = [Color::Green];
        let on = Card::new("1".into(), "On".into(), vec![Color::Green], "Sorcery".into());
        let off = Card::new("2".into(), "Off".into(), vec![Color::Red], "Sorcery".into());
        let colorless = Card::new("3".into(), "Rock".into(), vec![], "Sorcery".into());

        let on_score = ScoredPicker::base_score(&on, &context(Some(&colors)));
        let off_score = ScoredPicker::base_score(&off, &context(Some(&colors)));
        let colorless_score = ScoredPicker::base_score(&colorless, &context(Some(&colors)));

        assert!(on_score > colorless_score);
        assert!(colorless_score > off_score);
    }

    #[test]
    fn test_prefers_clearly_better_card() {
        let mut picker = ScoredPicker::new(Some(3));
        let pack = vec![
            Card::new("land".into(), "Plains".into(), vec![], "Basic Land - Plains".into()),
            Card::new("bomb".into(), "Dragon".into(), vec![Color::Red], "Creature - Dragon".into())
                .with_stats("5", "5")
                .with_rarity("Mythic Rare"),
        ];
        let ctx = PickContext {
            round: 1,
            pick: 1,
            colors: None,
        };
        assert_eq!(picker.pick(&pack, &ctx), Some(1));
        assert_eq!(picker.pick(&[], &ctx), None);
    }
}
