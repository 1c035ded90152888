//! Color conversion and naming module
//!
//! This module handles hex/RGB/HSL conversions and maps display-precision
//! HSL values to a fixed vocabulary of human-readable names.

pub mod conversion;
pub mod naming;

pub use conversion::{
    hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsl_exact, try_hex_to_rgb,
    ColorConverter, Hsl, HslExact, Rgb,
};
pub use naming::{name_color, name_hsl, ColorName};
