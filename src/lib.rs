//! # Swatchbook
//!
//! A Rust crate for describing dominant colors and synthesizing palettes.
//!
//! This library turns raw hex colors into descriptive records by:
//! - Converting between hex, RGB and HSL
//! - Naming each color from a fixed vocabulary of hue/lightness bands
//! - Optionally classifying it against a reference swatch table
//! - Synthesizing evenly spaced, vivid palettes from a seeded random source
//! - Extracting dominant colors from images through a pluggable extractor
//!
//! ## Example
//!
//! ```rust
//! use swatchbook::{build_palette, ColorName};
//!
//! let records = build_palette(&["#2563eb", "#dc2626"], true);
//! assert_eq!(records[0].name, ColorName::RoyalBlue);
//! assert_eq!(records[0].class_label, Some("bg-blue-500"));
//! println!("{}", serde_json::to_string_pretty(&records)?);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod classify;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod generation;
pub mod image_loader;

pub use classify::{nearest_swatch, SwatchMatcher};
pub use color::{hex_to_rgb, hsl_to_rgb, name_color, rgb_to_hex, rgb_to_hsl, try_hex_to_rgb, ColorName, Hsl, Rgb};
pub use config::{HexPolicy, PaletteConfig};
pub use error::{PaletteError, Result};
pub use extraction::{describe_image, CannedExtractor, ColorExtractor, HistogramExtractor};
pub use generation::{
    build_palette, synthesize_palette, ColorRecord, CombinedExport, PaletteBuilder, PaletteExport,
    PaletteKind, PaletteSource,
};
