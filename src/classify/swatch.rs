//! Nearest reference swatch classification
//!
//! Maps an arbitrary color to the closest entry of a fixed reference table
//! (the 500 weight of the Tailwind CSS scale plus three darker grays) by
//! Euclidean distance in 8-bit RGB space.
//!
//! The scan is linear and keeps the first minimum, so ties resolve to the
//! entry listed earlier in [`REFERENCE_SWATCHES`].

use palette::Srgb;

use crate::color::{hex_to_rgb, Rgb};

/// A named reference color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSwatch {
    /// Lowercase `#rrggbb`
    pub hex: &'static str,
    /// Tailwind background class, e.g. `bg-red-500`
    pub label: &'static str,
    pub rgb: (u8, u8, u8),
}

const fn swatch(hex: &'static str, label: &'static str, rgb: (u8, u8, u8)) -> ReferenceSwatch {
    ReferenceSwatch { hex, label, rgb }
}

/// Reference table in tie-break order
pub static REFERENCE_SWATCHES: [ReferenceSwatch; 19] = [
    swatch("#ef4444", "bg-red-500", (239, 68, 68)),
    swatch("#f97316", "bg-orange-500", (249, 115, 22)),
    swatch("#eab308", "bg-yellow-500", (234, 179, 8)),
    swatch("#84cc16", "bg-lime-500", (132, 204, 22)),
    swatch("#22c55e", "bg-green-500", (34, 197, 94)),
    swatch("#10b981", "bg-emerald-500", (16, 185, 129)),
    swatch("#14b8a6", "bg-teal-500", (20, 184, 166)),
    swatch("#06b6d4", "bg-cyan-500", (6, 182, 212)),
    swatch("#3b82f6", "bg-blue-500", (59, 130, 246)),
    swatch("#6366f1", "bg-indigo-500", (99, 102, 241)),
    swatch("#8b5cf6", "bg-violet-500", (139, 92, 246)),
    swatch("#a855f7", "bg-purple-500", (168, 85, 247)),
    swatch("#d946ef", "bg-fuchsia-500", (217, 70, 239)),
    swatch("#ec4899", "bg-pink-500", (236, 72, 153)),
    swatch("#f43f5e", "bg-rose-500", (244, 63, 94)),
    swatch("#6b7280", "bg-gray-500", (107, 114, 128)),
    swatch("#374151", "bg-gray-700", (55, 65, 81)),
    swatch("#1f2937", "bg-gray-800", (31, 41, 55)),
    swatch("#111827", "bg-gray-900", (17, 24, 39)),
];

/// Euclidean distance between two colors in 8-bit RGB space
pub fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.red) - f64::from(b.red);
    let dg = f64::from(a.green) - f64::from(b.green);
    let db = f64::from(a.blue) - f64::from(b.blue);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Label returned when a matcher has no swatches to compare against
pub const FALLBACK_LABEL: &str = "bg-gray-500";

impl ReferenceSwatch {
    pub fn to_rgb(&self) -> Rgb {
        Srgb::from_components(self.rgb)
    }

    pub fn distance(&self, rgb: Rgb) -> f64 {
        rgb_distance(self.to_rgb(), rgb)
    }
}

/// Result of a nearest-swatch lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchMatch {
    pub swatch: &'static ReferenceSwatch,
    pub distance: f64,
}

impl SwatchMatch {
    pub fn label(&self) -> &'static str {
        self.swatch.label
    }
}

/// Nearest-swatch classifier over a static reference table
#[derive(Debug, Clone, Copy)]
pub struct SwatchMatcher {
    swatches: &'static [ReferenceSwatch],
}

impl Default for SwatchMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SwatchMatcher {
    /// Create a matcher over [`REFERENCE_SWATCHES`]
    pub fn new() -> Self {
        Self {
            swatches: &REFERENCE_SWATCHES,
        }
    }

    /// Create a matcher over a custom table (order decides ties)
    pub fn with_swatches(swatches: &'static [ReferenceSwatch]) -> Self {
        Self { swatches }
    }

    pub fn swatches(&self) -> &'static [ReferenceSwatch] {
        self.swatches
    }

    /// Find the closest swatch, or `None` for an empty table
    pub fn nearest(&self, rgb: Rgb) -> Option<SwatchMatch> {
        let mut best: Option<SwatchMatch> = None;
        for swatch in self.swatches {
            let distance = swatch.distance(rgb);
            // strict comparison keeps the earliest entry on ties
            if best.map_or(true, |current| distance < current.distance) {
                best = Some(SwatchMatch { swatch, distance });
            }
        }
        best
    }

    /// Label of the closest swatch, or [`FALLBACK_LABEL`] for an empty table
    pub fn classify(&self, rgb: Rgb) -> &'static str {
        match self.nearest(rgb) {
            Some(found) => {
                log::trace!(
                    "rgb({}, {}, {}) -> {} (distance {:.2})",
                    rgb.red,
                    rgb.green,
                    rgb.blue,
                    found.label(),
                    found.distance
                );
                found.label()
            }
            None => FALLBACK_LABEL,
        }
    }
}

/// Classify a hex color against [`REFERENCE_SWATCHES`]
///
/// Malformed input is parsed leniently and therefore classified as black.
pub fn nearest_swatch(hex: &str) -> &'static str {
    SwatchMatcher::new().classify(hex_to_rgb(hex))
}
