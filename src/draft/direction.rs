//! Pack passing direction per round.

use serde::{Deserialize, Serialize};

/// Number of rounds in a draft.
pub const ROUNDS: u8 = 3;

/// Which way packs travel around the table after each pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PassDirection {
    /// Seat i receives the pack seat i-1 was holding.
    Left,
    /// Seat i receives the pack seat i+1 was holding.
    Right,
}

/// Direction for rounds 1, 2 and 3.
const ROUND_DIRECTIONS: [PassDirection; ROUNDS as usize] =
    [PassDirection::Left, PassDirection::Right, PassDirection::Left];

impl PassDirection {
    /// Direction used in the given round (1-based).
    ///
    /// Returns `None` outside `1..=ROUNDS`.
    pub fn for_round(round: u8) -> Option<Self> {
        let index = usize::from(round).checked_sub(1)?;
        ROUND_DIRECTIONS.get(index).copied()
    }

    /// Seat that receives the pack currently held by `seat`.
    pub fn receiver(self, seat: usize, seat_count: usize) -> usize {
        match self {
            Self::Left => (seat + 1) % seat_count,
            Self::Right => (seat + seat_count - 1) % seat_count,
        }
    }

    /// Seat whose pack `seat` receives on the next pass.
    pub fn giver(self, seat: usize, seat_count: usize) -> usize {
        match self {
            Self::Left => (seat + seat_count - 1) % seat_count,
            Self::Right => (seat + 1) % seat_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_table() {
        assert_eq!(PassDirection::for_round(1), Some(PassDirection::Left));
        assert_eq!(PassDirection::for_round(2), Some(PassDirection::Right));
        assert_eq!(PassDirection::for_round(3), Some(PassDirection::Left));
        assert_eq!(PassDirection::for_round(0), None);
        assert_eq!(PassDirection::for_round(4), None);
    }

    #[test]
    fn test_left_wraps_to_human() {
        // Human receives from the last bot.
        assert_eq!(PassDirection::Left.giver(0, 4), 3);
        assert_eq!(PassDirection::Left.receiver(3, 4), 0);
        assert_eq!(PassDirection::Left.giver(2, 4), 1);
    }

    #[test]
    fn test_right_wraps_to_last_seat() {
        assert_eq!(PassDirection::Right.giver(0, 4), 1);
        assert_eq!(PassDirection::Right.receiver(0, 4), 3);
        assert_eq!(PassDirection::Right.giver(3, 4), 0);
    }

    #[test]
    fn test_receiver_and_giver_are_inverse() {
        for direction in [PassDirection::Left, PassDirection::Right] {
            for seat in 0..6 {
                let to = direction.receiver(seat, 6);
                assert_eq!(direction.giver(to, 6), seat);
            }
        }
    }
}
