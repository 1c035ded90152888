//! Palette assembly, synthesis and export module
//!
//! Builds color records from hex lists, synthesizes new palettes from a
//! random hue seed and serializes palettes into the exported JSON shape.

pub mod builder;
pub mod export;
pub mod synthesis;

pub use builder::{build_palette, ColorRecord, PaletteBuilder, PaletteKind};
pub use export::{CombinedExport, PaletteExport, PaletteSource};
pub use synthesis::{synthesize_palette, synthesize_seeds, synthesize_with, HslSeed};
