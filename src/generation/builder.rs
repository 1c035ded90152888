//! Color record assembly
//!
//! Turns raw hex strings into fully described [`ColorRecord`]s by running
//! each one through the converter, the namer and (for classified palettes)
//! the swatch matcher. Records are computed independently: a malformed
//! entry only affects its own record.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::classify::SwatchMatcher;
use crate::color::conversion::rgb_css;
use crate::color::{name_hsl, rgb_to_hex, rgb_to_hsl, ColorConverter, ColorName, Hsl, Rgb};
use crate::config::PaletteConfig;
use crate::error::Result;

/// A fully described color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRecord {
    /// Canonical lowercase `#rrggbb`
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub name: ColorName,
    /// Nearest reference swatch label, only set for classified palettes
    pub class_label: Option<&'static str>,
}

impl ColorRecord {
    /// Describe an RGB color without classification
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsl = rgb_to_hsl(rgb.red, rgb.green, rgb.blue);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl,
            name: name_hsl(hsl),
            class_label: None,
        }
    }

    /// `rgb(r, g, b)`
    pub fn rgb_css(&self) -> String {
        rgb_css(self.rgb)
    }

    /// `hsl(h, s%, l%)`
    pub fn hsl_css(&self) -> String {
        self.hsl.css()
    }
}

// Field names and string formats follow the exported palette JSON.
impl Serialize for ColorRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = if self.class_label.is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("ColorRecord", fields)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("hex", &self.hex)?;
        state.serialize_field("rgb", &self.rgb_css())?;
        state.serialize_field("hsl", &self.hsl_css())?;
        match self.class_label {
            Some(label) => state.serialize_field("tailwindClass", label)?,
            None => state.skip_field("tailwindClass")?,
        }
        state.end()
    }
}

/// The two palette flavours offered for every set of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Named colors only
    Material,
    /// Named colors with nearest Tailwind class
    Tailwind,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 2] = [PaletteKind::Material, PaletteKind::Tailwind];

    pub fn with_classification(self) -> bool {
        matches!(self, PaletteKind::Tailwind)
    }

    pub fn title(self) -> &'static str {
        match self {
            PaletteKind::Material => "Material Design Palette",
            PaletteKind::Tailwind => "Tailwind CSS Palette",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            PaletteKind::Material => "Google Material Design inspired colors with perfect harmony",
            PaletteKind::Tailwind => "Ready-to-use Tailwind classes for rapid development",
        }
    }
}

/// Builds color records from hex strings
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteBuilder {
    converter: ColorConverter,
    matcher: SwatchMatcher,
}

impl PaletteBuilder {
    /// Create a builder with lenient hex parsing and the default swatch table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder honouring the configured hex policy
    pub fn with_config(config: &PaletteConfig) -> Self {
        Self {
            converter: ColorConverter::with_policy(config.hex_policy),
            matcher: SwatchMatcher::new(),
        }
    }

    pub fn with_matcher(mut self, matcher: SwatchMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    fn record(&self, rgb: Rgb, with_classification: bool) -> ColorRecord {
        let mut record = ColorRecord::from_rgb(rgb);
        if with_classification {
            record.class_label = Some(self.matcher.classify(rgb));
        }
        log::trace!("{} -> {} ({})", record.hex, record.name, record.hsl_css());
        record
    }

    /// Describe one color; malformed input becomes a black record
    pub fn describe(&self, hex: &str, with_classification: bool) -> ColorRecord {
        self.record(crate::color::hex_to_rgb(hex), with_classification)
    }

    /// Describe one color, failing on malformed input under a strict policy
    pub fn try_describe(&self, hex: &str, with_classification: bool) -> Result<ColorRecord> {
        let rgb = self.converter.parse_hex(hex)?;
        Ok(self.record(rgb, with_classification))
    }

    /// Describe every color in input order
    ///
    /// Output length always equals input length; malformed entries become
    /// black records regardless of the configured policy.
    pub fn build_palette<S: AsRef<str>>(&self, hex_list: &[S], with_classification: bool) -> Vec<ColorRecord> {
        log::debug!(
            "Building palette of {} colors (classification: {})",
            hex_list.len(),
            with_classification
        );
        hex_list
            .iter()
            .map(|hex| self.describe(hex.as_ref(), with_classification))
            .collect()
    }

    /// Describe every color in input order, honouring the hex policy
    ///
    /// # Errors
    ///
    /// Under [`crate::HexPolicy::Strict`], returns the first
    /// [`crate::PaletteError::MalformedColor`] encountered.
    pub fn try_build_palette<S: AsRef<str>>(
        &self,
        hex_list: &[S],
        with_classification: bool,
    ) -> Result<Vec<ColorRecord>> {
        hex_list
            .iter()
            .map(|hex| self.try_describe(hex.as_ref(), with_classification))
            .collect()
    }

    /// Build the palette flavour named by `kind`
    pub fn build<S: AsRef<str>>(&self, kind: PaletteKind, hex_list: &[S]) -> Vec<ColorRecord> {
        self.build_palette(hex_list, kind.with_classification())
    }
}

/// Describe every color with a default [`PaletteBuilder`]
pub fn build_palette<S: AsRef<str>>(hex_list: &[S], with_classification: bool) -> Vec<ColorRecord> {
    PaletteBuilder::new().build_palette(hex_list, with_classification)
}
