//! Reference swatch classification module
//!
//! Assigns each color the label of its nearest entry in a fixed reference
//! swatch table.

pub mod swatch;

pub use swatch::{nearest_swatch, rgb_distance, ReferenceSwatch, SwatchMatch, SwatchMatcher, REFERENCE_SWATCHES};
