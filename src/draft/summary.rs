//! End-of-draft report.

use super::card::{Color, format_colors};
use super::seat::{PickedCard, Seat};
use derive_getters::Getters;
use serde::Serialize;
use std::fmt;

/// Per-seat totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SeatSummary {
    /// Seat index.
    seat: usize,
    /// Seat display name.
    name: String,
    /// Number of cards drafted.
    picks: usize,
    /// Inferred colors for bots; empty for the human or an all-colorless bot.
    colors: Vec<Color>,
}

/// Terminal report of a completed draft.
///
/// Count mismatches are advisory notes, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct DraftSummary {
    /// Totals for every seat, human first.
    seats: Vec<SeatSummary>,
    /// The human's final pool in pick order.
    pool: Vec<PickedCard>,
    /// Cards each seat should hold after a standard draft.
    expected_picks: usize,
    /// Advisory notes about anomalies seen during the draft.
    advisories: Vec<String>,
}

impl DraftSummary {
    /// Builds the summary from the final seats and the anomalies recorded so far.
    pub(crate) fn from_seats(seats: &[Seat], expected_picks: usize, anomalies: &[String]) -> Self {
        let mut advisories = anomalies.to_vec();

        let summaries: Vec<SeatSummary> = seats
            .iter()
            .map(|seat| {
                let picks = seat.picks().len();
                if picks != expected_picks {
                    advisories.push(format!(
                        "{} drafted {} cards instead of expected {}",
                        seat.name(),
                        picks,
                        expected_picks
                    ));
                }
                SeatSummary {
                    seat: *seat.index(),
                    name: seat.name().clone(),
                    picks,
                    colors: seat.colors().clone().unwrap_or_default(),
                }
            })
            .collect();

        let pool = seats
            .first()
            .map(|human| human.picks().clone())
            .unwrap_or_default();

        Self {
            seats: summaries,
            pool,
            expected_picks,
            advisories,
        }
    }

    /// True when every seat drafted the expected number of cards and no
    /// anomaly was recorded.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }
}

impl fmt::Display for DraftSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Draft complete: you selected {} cards.",
            self.pool.len()
        )?;
        for entry in &self.pool {
            writeln!(
                f,
                "  P{}p{:<2} [{:<5}] {}",
                entry.round(),
                entry.pick(),
                entry.card().color_symbols(),
                entry.card().name()
            )?;
        }
        writeln!(f)?;
        for seat in self.seats.iter().skip(1) {
            writeln!(
                f,
                "  {:<8} {:>3} cards  colors: {}",
                seat.name,
                seat.picks,
                format_colors(&seat.colors)
            )?;
        }
        for note in &self.advisories {
            writeln!(f, "Note: {}", note)?;
        }
        Ok(())
    }
}
