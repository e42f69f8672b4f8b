//! Draft session state and the per-pick transition.

use super::card::{Card, Pack};
use super::direction::{PassDirection, ROUNDS};
use super::seat::{HUMAN_SEAT, PickedCard, Seat};
use super::summary::DraftSummary;
use crate::bots::{BotPicker, PickContext};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Cards in a standard pack.
pub const PACK_SIZE: usize = 15;

/// Cards every seat holds after a standard draft.
pub const EXPECTED_PICKS: usize = ROUNDS as usize * PACK_SIZE;

/// A bot's pick, recorded for the end-of-draft bot deck view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct BotPickEvent {
    /// Bot seat index.
    seat: usize,
    /// Bot display name.
    bot: String,
    /// Card taken.
    card: Card,
    /// Round of the pick.
    round: u8,
    /// Pick number within the round.
    pick: u8,
}

/// Why a pick did not change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredPick {
    /// The draft already finished.
    DraftComplete,
    /// No draft has been started.
    NotStarted,
    /// The card is not in the human's current pack.
    CardNotInPack,
}

/// Result of applying one pick step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing changed.
    Ignored(IgnoredPick),
    /// Packs were passed; the round continues at `pick`.
    Passed {
        /// Current round.
        round: u8,
        /// Next pick number.
        pick: u8,
    },
    /// The previous round ended and `round` was dealt.
    RoundAdvanced {
        /// The new round.
        round: u8,
    },
    /// The final round ended.
    Completed(Box<DraftSummary>),
}

/// One simulated booster draft: the human at seat 0 and bots at 1..=N.
#[derive(Debug, Clone)]
pub struct DraftSession {
    seats: Vec<Seat>,
    /// Undealt packs indexed by round, then seat.
    packs: Vec<Vec<Pack>>,
    round: u8,
    pick: u8,
    direction: PassDirection,
    complete: bool,
    bot_picks: Vec<BotPickEvent>,
    anomalies: Vec<String>,
}

impl DraftSession {
    /// Seats `num_bots + 1` players and deals round 1.
    ///
    /// `packs` holds one pack per seat per round, round-major: the first
    /// `num_bots + 1` packs are round 1. Packs that are not `PACK_SIZE`
    /// cards long are kept and noted.
    #[instrument(skip(packs), fields(pack_count = packs.len()))]
    pub fn new(num_bots: usize, packs: Vec<Pack>) -> Self {
        let seat_count = num_bots + 1;
        let mut seats = Vec::with_capacity(seat_count);
        seats.push(Seat::human());
        seats.extend((1..=num_bots).map(Seat::bot));

        let mut anomalies = Vec::new();
        let mut matrix: Vec<Vec<Pack>> = (0..ROUNDS)
            .map(|_| Vec::with_capacity(seat_count))
            .collect();
        for (i, pack) in packs.into_iter().enumerate() {
            let round_index = i / seat_count;
            let seat = i % seat_count;
            let Some(round_packs) = matrix.get_mut(round_index) else {
                warn!(extra_pack = i, "Pack source returned more packs than the table needs");
                break;
            };
            if pack.len() != PACK_SIZE {
                warn!(
                    round = round_index + 1,
                    seat,
                    cards = pack.len(),
                    expected = PACK_SIZE,
                    "Pack does not contain the expected number of cards"
                );
                anomalies.push(format!(
                    "Round {} pack for {} contained {} cards instead of expected {}",
                    round_index + 1,
                    seats[seat].name(),
                    pack.len(),
                    PACK_SIZE
                ));
            }
            round_packs.push(pack);
        }

        let mut session = Self {
            seats,
            packs: matrix,
            round: 1,
            pick: 1,
            direction: PassDirection::Left,
            complete: false,
            bot_picks: Vec::new(),
            anomalies,
        };
        session.deal_round();
        if session.skip_dead_round() {
            session.finish_round();
        }
        info!(seats = seat_count, "Draft session ready");
        session
    }

    /// All seats, human first.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The human's seat.
    pub fn human(&self) -> &Seat {
        &self.seats[HUMAN_SEAT]
    }

    /// Pack currently in the human's hand.
    pub fn current_pack(&self) -> &[Card] {
        self.human().current_pack()
    }

    /// Current round (1..=3).
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Current pick number within the round.
    pub fn pick_number(&self) -> u8 {
        self.pick
    }

    /// Pass direction of the current round.
    pub fn direction(&self) -> PassDirection {
        self.direction
    }

    /// True once the final round has ended.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Every bot pick made so far, in order.
    pub fn bot_picks(&self) -> &[BotPickEvent] {
        &self.bot_picks
    }

    /// Bot picks made by one seat.
    pub fn bot_picks_for(&self, seat: usize) -> impl Iterator<Item = &BotPickEvent> {
        self.bot_picks.iter().filter(move |event| event.seat == seat)
    }

    /// Pick history of one seat.
    pub fn picks_of(&self, seat: usize) -> Option<&[PickedCard]> {
        self.seats.get(seat).map(|s| s.picks().as_slice())
    }

    /// Final report; `None` until the draft is complete.
    pub fn summary(&self) -> Option<DraftSummary> {
        self.complete
            .then(|| DraftSummary::from_seats(&self.seats, EXPECTED_PICKS, &self.anomalies))
    }

    /// Applies the human's pick of `card_id`, then every bot's pick, then
    /// passes packs or moves to the next round.
    #[instrument(skip(self, picker), fields(round = self.round, pick = self.pick))]
    pub fn pick(&mut self, card_id: &str, picker: &mut dyn BotPicker) -> PickOutcome {
        if self.complete {
            debug!("Pick ignored, draft is complete");
            return PickOutcome::Ignored(IgnoredPick::DraftComplete);
        }

        let (round, pick) = (self.round, self.pick);
        let human = &mut self.seats[HUMAN_SEAT];
        let Some(position) = human.position_of(card_id) else {
            warn!(card_id, "Card is not in the current pack");
            return PickOutcome::Ignored(IgnoredPick::CardNotInPack);
        };
        if let Some(taken) = human.take(position, round, pick) {
            debug!(card = %taken.card().name(), "Human picked");
        }

        self.bot_round_of_picks(picker);

        if self.seats.iter().all(|s| s.current_pack().is_empty()) {
            return self.finish_round();
        }

        self.pass_packs();
        self.pick = self.pick.saturating_add(1);

        if self.human().current_pack().is_empty() {
            // Only reachable with short packs: the human has nothing to pick from.
            let left_over = self.discard_packs();
            warn!(round, left_over, "Human received an empty pack, ending round early");
            self.anomalies.push(format!(
                "Round {} ended early; {} undrafted cards were discarded",
                round, left_over
            ));
            return self.finish_round();
        }

        PickOutcome::Passed {
            round: self.round,
            pick: self.pick,
        }
    }

    fn bot_round_of_picks(&mut self, picker: &mut dyn BotPicker) {
        let (round, pick) = (self.round, self.pick);
        for seat in self.seats.iter_mut().filter(|s| s.is_bot()) {
            if seat.current_pack().is_empty() {
                continue;
            }
            let context = PickContext {
                round,
                pick,
                colors: seat.preferred_colors(),
            };
            let Some(position) = picker.pick(seat.current_pack(), &context) else {
                warn!(seat = seat.index(), "Bot declined to pick from a nonempty pack");
                continue;
            };
            let name = seat.name().clone();
            let index = *seat.index();
            match seat.take(position, round, pick) {
                Some(taken) => {
                    debug!(bot = %name, card = %taken.card().name(), "Bot picked");
                    self.bot_picks.push(BotPickEvent {
                        seat: index,
                        bot: name,
                        card: taken.card().clone(),
                        round,
                        pick,
                    });
                }
                None => warn!(bot = %name, position, "Bot chose a card outside its pack"),
            }
        }
    }

    fn pass_packs(&mut self) {
        let seat_count = self.seats.len();
        let packs: Vec<Pack> = self.seats.iter_mut().map(Seat::hand_over_pack).collect();
        for (giver, pack) in packs.into_iter().enumerate() {
            let receiver = self.direction.receiver(giver, seat_count);
            self.seats[receiver].receive_pack(pack);
        }
        debug!(direction = %self.direction, "Passed packs");
    }

    fn finish_round(&mut self) -> PickOutcome {
        while self.round < ROUNDS {
            self.round += 1;
            self.pick = 1;
            self.direction = PassDirection::for_round(self.round).unwrap_or(PassDirection::Left);
            self.deal_round();
            if self.skip_dead_round() {
                continue;
            }
            info!(round = self.round, direction = %self.direction, "Next round dealt");
            return PickOutcome::RoundAdvanced { round: self.round };
        }

        self.complete = true;
        let summary = DraftSummary::from_seats(&self.seats, EXPECTED_PICKS, &self.anomalies);
        for note in summary.advisories() {
            warn!(note = %note, "Draft completed with anomalies");
        }
        info!(picks = summary.pool().len(), "Draft complete");
        PickOutcome::Completed(Box::new(summary))
    }

    /// Discards a freshly dealt round that leaves the human nothing to pick.
    ///
    /// Returns true when the round was discarded.
    fn skip_dead_round(&mut self) -> bool {
        if !self.human().current_pack().is_empty() {
            return false;
        }
        let discarded = self.discard_packs();
        warn!(round = self.round, discarded, "Human was dealt an empty pack, skipping round");
        self.anomalies.push(format!(
            "Round {} skipped; {} received an empty pack and {} cards were discarded",
            self.round,
            self.human().name(),
            discarded
        ));
        true
    }

    /// Empties every seat's pack, returning the number of cards thrown away.
    fn discard_packs(&mut self) -> usize {
        self.seats
            .iter_mut()
            .map(|seat| seat.hand_over_pack().len())
            .sum()
    }

    fn deal_round(&mut self) {
        let round_index = usize::from(self.round - 1);
        let round_packs = self
            .packs
            .get_mut(round_index)
            .map(std::mem::take)
            .unwrap_or_default();
        let mut dealt = round_packs.into_iter();
        for seat in &mut self.seats {
            seat.receive_pack(dealt.next().unwrap_or_default());
        }
    }
}
