//! Thresholds and design constants for naming, synthesis and extraction
//!
//! Lookup tables live next to the code that scans them (hue bands in
//! [`crate::color::naming`], reference swatches in [`crate::classify::swatch`]);
//! this module only holds the scalar limits they are evaluated against.

/// Lightness and saturation thresholds used by the color namer
///
/// All values are integer percentages on the rounded HSL scale.
pub mod naming {
    /// Below this lightness every color is "Deep Black"
    pub const BLACK_BELOW_LIGHTNESS: u8 = 10;

    /// Above this lightness every color is "Pure White"
    pub const WHITE_ABOVE_LIGHTNESS: u8 = 95;

    /// Below this saturation a color is named from the grayscale band
    pub const GRAYSCALE_BELOW_SATURATION: u8 = 10;

    /// Grayscale: below this lightness is "Charcoal"
    pub const CHARCOAL_BELOW_LIGHTNESS: u8 = 30;

    /// Grayscale: below this lightness is "Gray", otherwise "Light Gray"
    pub const GRAY_BELOW_LIGHTNESS: u8 = 70;

    /// Chromatic bands pick the lighter variant above this lightness
    pub const LIGHT_VARIANT_ABOVE_LIGHTNESS: u8 = 60;
}

/// Hue-rotation palette synthesis
pub mod synthesis {
    /// Number of colors in a synthesized palette
    pub const PALETTE_SIZE: usize = 5;

    /// Angular distance between consecutive hues (360 / 5)
    pub const HUE_STEP_DEGREES: f64 = 72.0;

    /// Saturation is drawn uniformly from `[MIN, MAX)` percent
    pub const SATURATION_MIN: f64 = 60.0;
    pub const SATURATION_MAX: f64 = 100.0;

    /// Lightness is drawn uniformly from `[MIN, MAX)` percent
    pub const LIGHTNESS_MIN: f64 = 40.0;
    pub const LIGHTNESS_MAX: f64 = 80.0;
}

/// Histogram-based dominant color extraction
pub mod extraction {
    /// Number of dominant colors returned by default
    pub const MAX_COLORS: usize = 5;

    /// Bits kept per channel when bucketing pixels (4 bits = 4096 bins)
    pub const QUANTIZATION_BITS: u8 = 4;

    /// Images larger than this are downsampled before bucketing
    pub const MAX_SAMPLE_PIXELS: u32 = 250_000;

    /// Minimum Euclidean RGB distance between two returned colors
    pub const MIN_COLOR_DISTANCE: f64 = 24.0;

    /// Pixels with alpha below this are ignored
    pub const MIN_ALPHA: u8 = 128;
}
