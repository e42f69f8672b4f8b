//! Draft error types.

use crate::packs::PackSourceError;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a draft could not be started.
#[derive(Debug, Clone, Display)]
pub enum DraftErrorKind {
    /// The requested table cannot be seated.
    #[display("Invalid draft configuration: {_0}")]
    InvalidConfiguration(String),
    /// Fetching the draft's packs failed.
    #[display("Failed to start draft: {_0}")]
    PackSource(PackSourceError),
}

/// Draft error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Draft error: {} at {}:{}", kind, file, line)]
pub struct DraftError {
    /// What went wrong.
    pub kind: DraftErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DraftError {
    /// Creates a new draft error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: DraftErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<PackSourceError> for DraftError {
    #[track_caller]
    fn from(err: PackSourceError) -> Self {
        Self::new(DraftErrorKind::PackSource(err))
    }
}
