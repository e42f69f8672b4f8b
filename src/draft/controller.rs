//! Draft session controller: the single owner of the current draft.

use super::card::Card;
use super::direction::{PassDirection, ROUNDS};
use super::error::{DraftError, DraftErrorKind};
use super::session::{BotPickEvent, DraftSession, IgnoredPick, PickOutcome};
use super::seat::{HUMAN_SEAT, PickedCard, Seat};
use super::summary::DraftSummary;
use crate::bots::BotPicker;
use crate::packs::PackSource;
use serde::Serialize;
use tracing::{error, info, instrument};

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DraftStatus {
    /// No draft has been started.
    NotStarted,
    /// A draft is running.
    InProgress {
        /// Current round (1..=3).
        round: u8,
        /// Current pick number within the round.
        pick: u8,
        /// Pass direction of the round.
        direction: PassDirection,
    },
    /// The last draft finished.
    Complete,
}

/// Owns one draft session at a time and exposes the two mutators
/// [`start_draft`](Self::start_draft) and [`pick_card`](Self::pick_card).
pub struct DraftController {
    source: Box<dyn PackSource>,
    picker: Box<dyn BotPicker>,
    session: Option<DraftSession>,
}

impl DraftController {
    /// Creates a controller with no draft in progress.
    pub fn new(source: Box<dyn PackSource>, picker: Box<dyn BotPicker>) -> Self {
        info!(source = source.name(), picker = picker.name(), "Creating draft controller");
        Self {
            source,
            picker,
            session: None,
        }
    }

    /// Starts a new draft against `num_bots` bots, discarding any previous one.
    ///
    /// Fetches every pack of the draft before seating anyone. If any pack
    /// request fails, nothing is committed and the previous state is kept.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn start_draft(&mut self, num_bots: usize) -> Result<(), DraftError> {
        if num_bots == 0 {
            return Err(DraftError::new(DraftErrorKind::InvalidConfiguration(
                "a draft needs at least one bot".to_string(),
            )));
        }

        let Some(total) = num_bots
            .checked_add(1)
            .and_then(|seats| seats.checked_mul(usize::from(ROUNDS)))
        else {
            return Err(DraftError::new(DraftErrorKind::InvalidConfiguration(format!(
                "{} bots is more than a table can seat",
                num_bots
            ))));
        };
        info!(num_bots, total_packs = total, "Fetching packs for new draft");

        let packs = self.source.fetch_packs(total).await.map_err(|e| {
            error!(error = %e, "Pack source failed, draft not started");
            DraftError::from(e)
        })?;

        if packs.len() != total {
            error!(
                received = packs.len(),
                expected = total,
                "Pack source returned wrong pack count"
            );
            return Err(DraftError::new(DraftErrorKind::InvalidConfiguration(format!(
                "expected {} packs from {}, received {}",
                total,
                self.source.name(),
                packs.len()
            ))));
        }

        self.session = Some(DraftSession::new(num_bots, packs));
        Ok(())
    }

    /// Picks `card_id` for the human seat; every bot picks in the same step.
    ///
    /// Picking a card the human does not hold, or picking with no running
    /// draft, changes nothing.
    #[instrument(skip(self))]
    pub fn pick_card(&mut self, card_id: &str) -> PickOutcome {
        match self.session.as_mut() {
            Some(session) => session.pick(card_id, self.picker.as_mut()),
            None => PickOutcome::Ignored(IgnoredPick::NotStarted),
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> DraftStatus {
        match &self.session {
            None => DraftStatus::NotStarted,
            Some(session) if session.is_complete() => DraftStatus::Complete,
            Some(session) => DraftStatus::InProgress {
                round: session.round(),
                pick: session.pick_number(),
                direction: session.direction(),
            },
        }
    }

    /// The running or finished session, if any.
    pub fn session(&self) -> Option<&DraftSession> {
        self.session.as_ref()
    }

    /// Current round, if a draft was started.
    pub fn round(&self) -> Option<u8> {
        self.session.as_ref().map(DraftSession::round)
    }

    /// Current pick number, if a draft was started.
    pub fn pick_number(&self) -> Option<u8> {
        self.session.as_ref().map(DraftSession::pick_number)
    }

    /// Current pass direction, if a draft was started.
    pub fn direction(&self) -> Option<PassDirection> {
        self.session.as_ref().map(DraftSession::direction)
    }

    /// Cards the human can pick from; empty when no draft is running.
    pub fn current_pack(&self) -> &[Card] {
        self.session
            .as_ref()
            .map(DraftSession::current_pack)
            .unwrap_or_default()
    }

    /// All seats, human first; empty when no draft was started.
    pub fn seats(&self) -> &[Seat] {
        self.session
            .as_ref()
            .map(DraftSession::seats)
            .unwrap_or_default()
    }

    /// The human's pick history.
    pub fn picks(&self) -> &[PickedCard] {
        self.picks_of(HUMAN_SEAT)
    }

    /// Pick history of any seat.
    pub fn picks_of(&self, seat: usize) -> &[PickedCard] {
        self.session
            .as_ref()
            .and_then(|s| s.picks_of(seat))
            .unwrap_or_default()
    }

    /// Bot picks made so far.
    pub fn bot_picks(&self) -> &[BotPickEvent] {
        self.session
            .as_ref()
            .map(DraftSession::bot_picks)
            .unwrap_or_default()
    }

    /// True once the running draft has finished.
    pub fn is_complete(&self) -> bool {
        self.session.as_ref().is_some_and(DraftSession::is_complete)
    }

    /// Final report of a finished draft.
    pub fn summary(&self) -> Option<DraftSummary> {
        self.session.as_ref().and_then(DraftSession::summary)
    }
}
