//! Pack source drawing from a local cube list.

use super::{PackSource, PackSourceError};
use crate::draft::{Card, PACK_SIZE, Pack};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, instrument};

/// Pack source that shuffles a cube list and deals the top cards.
///
/// Every pack is drawn from the full cube, so the same card can show up in
/// several packs of one draft.
pub struct CubePackSource {
    cards: Vec<Card>,
    pack_size: usize,
    rng: Mutex<StdRng>,
}

impl CubePackSource {
    /// Creates a source over `cards` dealing standard 15-card packs.
    #[instrument(skip(cards), fields(cube_size = cards.len()))]
    pub fn new(cards: Vec<Card>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!("Created cube pack source");
        Self {
            cards,
            pack_size: PACK_SIZE,
            rng: Mutex::new(rng),
        }
    }

    /// Loads the cube list from a JSON array of cards.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>, seed: Option<u64>) -> Result<Self, PackSourceError> {
        debug!("Loading cube list");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PackSourceError::new(format!("Failed to read cube list: {}", e)))?;
        let cards: Vec<Card> = serde_json::from_str(&content)
            .map_err(|e| PackSourceError::new(format!("Failed to parse cube list: {}", e)))?;
        Ok(Self::new(cards, seed))
    }

    /// Deals packs of `pack_size` cards instead of the standard size.
    pub fn with_pack_size(mut self, pack_size: usize) -> Self {
        self.pack_size = pack_size;
        self
    }

    /// Number of cards in the cube.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the cube has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[async_trait::async_trait]
impl PackSource for CubePackSource {
    async fn fetch_pack(&self) -> Result<Pack, PackSourceError> {
        if self.cards.len() < self.pack_size {
            return Err(PackSourceError::new(format!(
                "Not enough cards in cube to create a pack ({} of {})",
                self.cards.len(),
                self.pack_size
            )));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| PackSourceError::new("Cube shuffler lock poisoned"))?;
        let pack: Pack = self
            .cards
            .choose_multiple(&mut *rng, self.pack_size)
            .cloned()
            .collect();
        debug!(cards = pack.len(), "Dealt pack from cube");
        Ok(pack)
    }

    fn name(&self) -> &str {
        "local cube"
    }
}
