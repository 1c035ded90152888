//! Stand-in extractor returning one of a few fixed palettes
//!
//! The image content is ignored. Useful for demos and for exercising the
//! pipeline without decoding real images.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::ColorExtractor;
use crate::error::{PaletteError, Result};

/// Palettes the stand-in extractor chooses from
pub const CANNED_PALETTES: [[&str; 5]; 5] = [
    ["#2563eb", "#dc2626", "#059669", "#d97706", "#7c3aed"],
    ["#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444"],
    ["#6366f1", "#ec4899", "#14b8a6", "#84cc16", "#f97316"],
    ["#a855f7", "#3b82f6", "#22c55e", "#eab308", "#f43f5e"],
    ["#1e293b", "#475569", "#64748b", "#94a3b8", "#cbd5e1"],
];

/// Picks a canned palette uniformly at random per call
pub struct CannedExtractor<R> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> CannedExtractor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng: Mutex::new(rng) }
    }
}

impl CannedExtractor<StdRng> {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> ColorExtractor for CannedExtractor<R> {
    fn extract(&self, _image_bytes: &[u8]) -> Result<Vec<String>> {
        let mut rng = self.rng.lock().map_err(|_| PaletteError::ExtractionError {
            reason: "random source lock poisoned".into(),
        })?;
        let index = rng.gen_range(0..CANNED_PALETTES.len());
        log::debug!("Using canned palette {}", index);
        Ok(CANNED_PALETTES[index].iter().map(|hex| hex.to_string()).collect())
    }
}
