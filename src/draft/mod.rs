//! Booster draft simulation: one human seat against N bots over three rounds.

mod card;
mod controller;
mod direction;
mod error;
mod seat;
mod session;
mod summary;

pub use card::{Card, CardId, Color, Pack, format_colors};
pub use controller::{DraftController, DraftStatus};
pub use direction::{PassDirection, ROUNDS};
pub use error::{DraftError, DraftErrorKind};
pub use seat::{HUMAN_SEAT, PickedCard, Seat, SeatKind};
pub use session::{
    BotPickEvent, DraftSession, EXPECTED_PICKS, IgnoredPick, PACK_SIZE, PickOutcome,
};
pub use summary::{DraftSummary, SeatSummary};
