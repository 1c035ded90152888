//! Color space conversion utilities
//!
//! Provides the conversions every color record is built from:
//! - Hex string to 8-bit sRGB and back (bit-exact)
//! - sRGB to HSL, rounded to display precision or kept exact
//! - HSL (fractional percentages allowed) back to sRGB
//!
//! Hex parsing is strict about shape: an optional `#` followed by exactly six
//! hex digits. What happens to anything else is decided by [`HexPolicy`].

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::config::HexPolicy;
use crate::error::{PaletteError, Result};

/// 8-bit sRGB color
pub type Rgb = Srgb<u8>;

/// HSL at display precision: whole degrees and whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `0..360`
    pub hue: u16,
    /// Saturation in percent, `0..=100`
    pub saturation: u8,
    /// Lightness in percent, `0..=100`
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS functional notation, e.g. `hsl(221, 83%, 53%)`
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// HSL without rounding; degrees and percentages as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslExact {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslExact {
    /// Round to display precision; a hue that rounds up to 360 becomes 0
    pub fn rounded(&self) -> Hsl {
        Hsl {
            hue: (self.hue.round() as u16) % 360,
            saturation: self.saturation.round() as u8,
            lightness: self.lightness.round() as u8,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// Parse `#rrggbb` or `rrggbb` (case-insensitive)
///
/// # Errors
///
/// Returns [`PaletteError::MalformedColor`] for shorthand (`#fff`), alpha
/// (`#rrggbbaa`), whitespace or non-hex characters.
pub fn try_hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaletteError::malformed(hex));
    }

    let channel = |start: usize| {
        u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| PaletteError::malformed(hex))
    };
    Ok(Srgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Parse a hex color, substituting black for malformed input
///
/// The substitution is logged at `warn` level. Use [`try_hex_to_rgb`] to
/// reject malformed input instead.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    try_hex_to_rgb(hex).unwrap_or_else(|err| {
        log::warn!("{}; substituting #000000", err);
        Srgb::new(0, 0, 0)
    })
}

/// Format as lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

/// CSS functional notation, e.g. `rgb(37, 99, 235)`
pub fn rgb_css(rgb: Rgb) -> String {
    format!("rgb({}, {}, {})", rgb.red, rgb.green, rgb.blue)
}

/// Convert 8-bit channels to unrounded HSL
pub fn rgb_to_hsl_exact(r: u8, g: u8, b: u8) -> HslExact {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        // achromatic
        return HslExact {
            hue: 0.0,
            saturation: 0.0,
            lightness: lightness * 100.0,
        };
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Sector position in [0, 6); the red sector wraps negative values.
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    HslExact {
        hue: sector / 6.0 * 360.0,
        saturation: saturation * 100.0,
        lightness: lightness * 100.0,
    }
}

/// Convert 8-bit channels to display-precision HSL
///
/// Rounding to whole degrees and percentages is lossy: converting back with
/// [`hsl_to_rgb`] can miss the original by a few levels per channel. Use
/// [`rgb_to_hsl_exact`] when a faithful round trip matters.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    rgb_to_hsl_exact(r, g, b).rounded()
}

/// Convert HSL to 8-bit sRGB
///
/// # Arguments
///
/// * `hue` - Degrees; values outside `0..360` are wrapped
/// * `saturation`, `lightness` - Percentages, clamped to `0..=100`
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let l = lightness.clamp(0.0, 100.0) / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match (h / 60.0) as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let scale = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Srgb::new(scale(r), scale(g), scale(b))
}

/// Hex parser bound to a [`HexPolicy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter {
    policy: HexPolicy,
}

impl ColorConverter {
    /// Create a lenient converter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: HexPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> HexPolicy {
        self.policy
    }

    /// Parse a hex color according to the configured policy
    ///
    /// # Errors
    ///
    /// Only a [`HexPolicy::Strict`] converter fails, with
    /// [`PaletteError::MalformedColor`].
    pub fn parse_hex(&self, hex: &str) -> Result<Rgb> {
        match self.policy {
            HexPolicy::Strict => try_hex_to_rgb(hex),
            HexPolicy::Lenient => Ok(hex_to_rgb(hex)),
        }
    }
}
