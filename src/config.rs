//! Configuration structures for the swatchbook pipeline.
//!
//! This module defines the tunable parameters for hex parsing, palette
//! synthesis and dominant-color extraction.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use swatchbook::PaletteConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = PaletteConfig::default();
//! # Ok::<(), swatchbook::PaletteError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`HexPolicy`]: what happens to malformed hex input
//! - [`SynthesisConfig`]: hue spacing and saturation/lightness ranges
//! - [`ExtractionConfig`]: histogram quantization settings

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{extraction, synthesis};
use crate::error::{PaletteError, Result};

/// Complete configuration for describing, synthesizing and extracting palettes.
///
/// Missing sections fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaletteConfig {
    /// Handling of malformed hex strings
    pub hex_policy: HexPolicy,

    /// Random palette synthesis parameters
    pub synthesis: SynthesisConfig,

    /// Dominant color extraction parameters
    pub extraction: ExtractionConfig,
}

/// Policy applied to hex strings that fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HexPolicy {
    /// Substitute black and log a warning
    #[default]
    Lenient,
    /// Surface [`PaletteError::MalformedColor`]
    Strict,
}

/// Half-open `[min, max)` range of percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

impl PercentRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &str) -> Result<()> {
        let in_bounds = (0.0..=100.0).contains(&self.min) && (0.0..=100.0).contains(&self.max);
        if !in_bounds || self.min >= self.max {
            return Err(PaletteError::invalid_parameter(
                name,
                format!("[{}, {})", self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// Hue-rotation synthesis parameters.
///
/// The defaults produce five vivid, mid-toned colors spaced evenly around
/// the hue circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Number of colors to generate
    pub count: usize,

    /// Degrees between consecutive hues
    pub hue_step: f64,

    /// Saturation range in percent
    pub saturation: PercentRange,

    /// Lightness range in percent
    pub lightness: PercentRange,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            count: synthesis::PALETTE_SIZE,
            hue_step: synthesis::HUE_STEP_DEGREES,
            saturation: PercentRange::new(synthesis::SATURATION_MIN, synthesis::SATURATION_MAX),
            lightness: PercentRange::new(synthesis::LIGHTNESS_MIN, synthesis::LIGHTNESS_MAX),
        }
    }
}

/// Histogram extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of dominant colors returned
    pub max_colors: usize,

    /// Bits kept per channel when bucketing (1-8)
    pub quantization_bits: u8,

    /// Pixel budget; larger images are downsampled first
    pub max_sample_pixels: u32,

    /// Minimum RGB distance between two returned colors
    pub min_distance: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_colors: extraction::MAX_COLORS,
            quantization_bits: extraction::QUANTIZATION_BITS,
            max_sample_pixels: extraction::MAX_SAMPLE_PIXELS,
            min_distance: extraction::MIN_COLOR_DISTANCE,
        }
    }
}

impl PaletteConfig {
    /// Check that every range and count is usable
    pub fn validate(&self) -> Result<()> {
        let synthesis = &self.synthesis;
        if synthesis.count == 0 {
            return Err(PaletteError::invalid_parameter("synthesis.count", synthesis.count));
        }
        if !synthesis.hue_step.is_finite() {
            return Err(PaletteError::invalid_parameter("synthesis.hue_step", synthesis.hue_step));
        }
        synthesis.saturation.validate("synthesis.saturation")?;
        synthesis.lightness.validate("synthesis.lightness")?;

        let extraction = &self.extraction;
        if extraction.max_colors == 0 {
            return Err(PaletteError::invalid_parameter("extraction.max_colors", extraction.max_colors));
        }
        if !(1..=8).contains(&extraction.quantization_bits) {
            return Err(PaletteError::invalid_parameter(
                "extraction.quantization_bits",
                extraction.quantization_bits,
            ));
        }
        if extraction.max_sample_pixels == 0 {
            return Err(PaletteError::invalid_parameter(
                "extraction.max_sample_pixels",
                extraction.max_sample_pixels,
            ));
        }
        if extraction.min_distance.is_nan() || extraction.min_distance < 0.0 {
            return Err(PaletteError::invalid_parameter("extraction.min_distance", extraction.min_distance));
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PaletteError::io(format!("Failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded palette configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| PaletteError::io(format!("Failed to write {}", path.display()), e))?;
        Ok(())
    }
}
