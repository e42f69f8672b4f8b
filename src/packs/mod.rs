//! Pack sources: where a draft's packs come from.

mod cube;
mod generator;
mod rest_client;

pub use cube::CubePackSource;
pub use generator::{GeneratedPack, MAX_GENERATED_PACK_SIZE, PackMetadata, generate_pack};
pub use rest_client::{DEFAULT_API_URL, RestPackSource};

use crate::draft::Pack;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Trait for collaborators that produce packs on demand.
#[async_trait::async_trait]
pub trait PackSource: Send + Sync {
    /// Produces one pack, nominally 15 cards.
    async fn fetch_pack(&self) -> Result<Pack, PackSourceError>;

    /// Produces `count` packs.
    ///
    /// All requests are issued together; the first failure fails the batch.
    async fn fetch_packs(&self, count: usize) -> Result<Vec<Pack>, PackSourceError> {
        debug!(count, source = self.name(), "Fetching pack batch");
        let requests = (0..count).map(|_| self.fetch_pack());
        futures::future::try_join_all(requests).await
    }

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

/// Pack source error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Pack source error: {} at {}:{}", message, file, line)]
pub struct PackSourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PackSourceError {
    /// Creates a new pack source error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for PackSourceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}
