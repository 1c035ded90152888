//! Dominant color extraction module
//!
//! The palette pipeline depends on extraction only through the narrow
//! [`ColorExtractor`] contract: image bytes in, hex strings out. Two
//! implementations are provided:
//! - [`HistogramExtractor`]: quantized color histogram over the decoded image
//! - [`CannedExtractor`]: picks one of a few fixed palettes at random, for
//!   demos and tests that do not care about the image content

pub mod canned;
pub mod histogram;

pub use canned::{CannedExtractor, CANNED_PALETTES};
pub use histogram::HistogramExtractor;

use crate::error::Result;
use crate::generation::{ColorRecord, PaletteBuilder, PaletteKind};

/// Produces the dominant colors of an encoded image
pub trait ColorExtractor: Send + Sync {
    /// Return dominant colors as `#rrggbb` strings, most dominant first
    fn extract(&self, image_bytes: &[u8]) -> Result<Vec<String>>;
}

/// Extract dominant colors and describe them as a palette of `kind`
pub fn describe_image(
    extractor: &dyn ColorExtractor,
    image_bytes: &[u8],
    builder: &PaletteBuilder,
    kind: PaletteKind,
) -> Result<Vec<ColorRecord>> {
    let colors = extractor.extract(image_bytes)?;
    log::debug!("Extractor returned {} colors", colors.len());
    Ok(builder.build(kind, &colors))
}
