//! Cube Draft - booster draft simulator for a custom card cube
//!
//! One human seat drafts against N bots over three rounds of 15-card packs.
//! Packs come from the cube's REST API or from a local cube list.
//!
//! # Architecture
//!
//! - **Draft**: session state, pack passing and the controller that owns it
//! - **Bots**: pick policies (uniform random by default)
//! - **Packs**: pack sources and the random pack generator
//! - **Terminal**: line-based front end used by the binary
//!
//! # Example
//!
//! ```no_run
//! use cube_draft::{BotStrategy, DraftController, RestPackSource, DEFAULT_API_URL};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let source = RestPackSource::new(DEFAULT_API_URL, Duration::from_secs(30))?;
//! let mut controller = DraftController::new(Box::new(source), BotStrategy::Random.build(None));
//!
//! controller.start_draft(7).await?;
//! let first = controller.current_pack()[0].id().clone();
//! controller.pick_card(&first);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bots;
mod config;
mod draft;
mod packs;
mod terminal;

// Crate-level exports - Configuration
pub use config::{API_URL_ENV, ConfigError, DraftConfig};

// Crate-level exports - Draft engine
pub use draft::{
    BotPickEvent, Card, CardId, Color, DraftController, DraftError, DraftErrorKind, DraftSession,
    DraftStatus, DraftSummary, EXPECTED_PICKS, HUMAN_SEAT, IgnoredPick, PACK_SIZE, Pack,
    PassDirection, PickOutcome, PickedCard, ROUNDS, Seat, SeatKind, SeatSummary, format_colors,
};

// Crate-level exports - Bot policies
pub use bots::{BotPicker, BotStrategy, PickContext, RandomPicker, ScoredPicker};

// Crate-level exports - Pack sources
pub use packs::{
    CubePackSource, DEFAULT_API_URL, GeneratedPack, MAX_GENERATED_PACK_SIZE, PackMetadata,
    PackSource, PackSourceError, RestPackSource, generate_pack,
};

// Crate-level exports - Terminal front end
pub use terminal::{Choice, card_line, parse_choice, render_summary, run_autopilot, run_interactive};
