//! Human-readable color names from display-precision HSL
//!
//! Naming is a fixed decision table evaluated in priority order:
//! 1. Extreme lightness: "Deep Black" / "Pure White"
//! 2. Low saturation: grayscale band by lightness
//! 3. Hue band, with a lighter or deeper variant chosen by lightness
//!
//! The hue bands are contiguous and cover `[0, 360)` exactly, so every HSL
//! triple maps to exactly one name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::conversion::Hsl;
use crate::constants::naming::{
    BLACK_BELOW_LIGHTNESS, CHARCOAL_BELOW_LIGHTNESS, GRAYSCALE_BELOW_SATURATION,
    GRAY_BELOW_LIGHTNESS, LIGHT_VARIANT_ABOVE_LIGHTNESS, WHITE_ABOVE_LIGHTNESS,
};

/// Closed vocabulary of color names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorName {
    #[serde(rename = "Deep Black")]
    DeepBlack,
    #[serde(rename = "Pure White")]
    PureWhite,
    #[serde(rename = "Charcoal")]
    Charcoal,
    #[serde(rename = "Gray")]
    Gray,
    #[serde(rename = "Light Gray")]
    LightGray,
    #[serde(rename = "Light Red")]
    LightRed,
    #[serde(rename = "Deep Red")]
    DeepRed,
    #[serde(rename = "Golden")]
    Golden,
    #[serde(rename = "Brown")]
    Brown,
    #[serde(rename = "Light Green")]
    LightGreen,
    #[serde(rename = "Forest Green")]
    ForestGreen,
    #[serde(rename = "Mint")]
    Mint,
    #[serde(rename = "Emerald")]
    Emerald,
    #[serde(rename = "Sky Blue")]
    SkyBlue,
    #[serde(rename = "Ocean Blue")]
    OceanBlue,
    #[serde(rename = "Lavender")]
    Lavender,
    #[serde(rename = "Royal Blue")]
    RoyalBlue,
    #[serde(rename = "Pink")]
    Pink,
    #[serde(rename = "Purple")]
    Purple,
    #[serde(rename = "Rose")]
    Rose,
    #[serde(rename = "Crimson")]
    Crimson,
}

impl ColorName {
    /// Every name the namer can produce
    pub const ALL: [ColorName; 21] = [
        ColorName::DeepBlack,
        ColorName::PureWhite,
        ColorName::Charcoal,
        ColorName::Gray,
        ColorName::LightGray,
        ColorName::LightRed,
        ColorName::DeepRed,
        ColorName::Golden,
        ColorName::Brown,
        ColorName::LightGreen,
        ColorName::ForestGreen,
        ColorName::Mint,
        ColorName::Emerald,
        ColorName::SkyBlue,
        ColorName::OceanBlue,
        ColorName::Lavender,
        ColorName::RoyalBlue,
        ColorName::Pink,
        ColorName::Purple,
        ColorName::Rose,
        ColorName::Crimson,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::DeepBlack => "Deep Black",
            ColorName::PureWhite => "Pure White",
            ColorName::Charcoal => "Charcoal",
            ColorName::Gray => "Gray",
            ColorName::LightGray => "Light Gray",
            ColorName::LightRed => "Light Red",
            ColorName::DeepRed => "Deep Red",
            ColorName::Golden => "Golden",
            ColorName::Brown => "Brown",
            ColorName::LightGreen => "Light Green",
            ColorName::ForestGreen => "Forest Green",
            ColorName::Mint => "Mint",
            ColorName::Emerald => "Emerald",
            ColorName::SkyBlue => "Sky Blue",
            ColorName::OceanBlue => "Ocean Blue",
            ColorName::Lavender => "Lavender",
            ColorName::RoyalBlue => "Royal Blue",
            ColorName::Pink => "Pink",
            ColorName::Purple => "Purple",
            ColorName::Rose => "Rose",
            ColorName::Crimson => "Crimson",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `[start, end)` hue range and its two names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueBand {
    pub start: u16,
    pub end: u16,
    /// Used when lightness is above the light-variant threshold
    pub light: ColorName,
    pub deep: ColorName,
}

const fn band(start: u16, end: u16, light: ColorName, deep: ColorName) -> HueBand {
    HueBand {
        start,
        end,
        light,
        deep,
    }
}

/// Hue bands in ascending order; each `end` is the next band's `start`.
pub static HUE_BANDS: [HueBand; 8] = [
    band(0, 30, ColorName::LightRed, ColorName::DeepRed),
    band(30, 60, ColorName::Golden, ColorName::Brown),
    band(60, 90, ColorName::LightGreen, ColorName::ForestGreen),
    band(90, 150, ColorName::Mint, ColorName::Emerald),
    band(150, 210, ColorName::SkyBlue, ColorName::OceanBlue),
    band(210, 270, ColorName::Lavender, ColorName::RoyalBlue),
    band(270, 330, ColorName::Pink, ColorName::Purple),
    band(330, 360, ColorName::Rose, ColorName::Crimson),
];

/// Find the hue band containing `hue` (degrees, wrapped into `[0, 360)`)
pub fn hue_band(hue: u16) -> &'static HueBand {
    let hue = hue % 360;
    HUE_BANDS
        .iter()
        .find(|band| hue >= band.start && hue < band.end)
        .unwrap_or(&HUE_BANDS[HUE_BANDS.len() - 1])
}

/// Name a color from its hue (degrees), saturation and lightness (percent)
pub fn name_color(hue: u16, saturation: u8, lightness: u8) -> ColorName {
    if lightness < BLACK_BELOW_LIGHTNESS {
        return ColorName::DeepBlack;
    }
    if lightness > WHITE_ABOVE_LIGHTNESS {
        return ColorName::PureWhite;
    }

    if saturation < GRAYSCALE_BELOW_SATURATION {
        return if lightness < CHARCOAL_BELOW_LIGHTNESS {
            ColorName::Charcoal
        } else if lightness < GRAY_BELOW_LIGHTNESS {
            ColorName::Gray
        } else {
            ColorName::LightGray
        };
    }

    let band = hue_band(hue);
    if lightness > LIGHT_VARIANT_ABOVE_LIGHTNESS {
        band.light
    } else {
        band.deep
    }
}

pub fn name_hsl(hsl: Hsl) -> ColorName {
    name_color(hsl.hue, hsl.saturation, hsl.lightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_tile_the_circle() {
        assert_eq!(HUE_BANDS[0].start, 0);
        assert_eq!(HUE_BANDS[HUE_BANDS.len() - 1].end, 360);
        for pair in HUE_BANDS.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
    }

    #[test]
    fn test_every_hue_has_exactly_one_band() {
        for hue in 0..360u16 {
            let matches = HUE_BANDS
                .iter()
                .filter(|band| hue >= band.start && hue < band.end)
                .count();
            assert_eq!(matches, 1, "hue {}", hue);
        }
    }

    #[test]
    fn test_lightness_extremes() {
        assert_eq!(name_color(200, 80, 9), ColorName::DeepBlack);
        assert_ne!(name_color(200, 80, 10), ColorName::DeepBlack);
        assert_eq!(name_color(200, 80, 96), ColorName::PureWhite);
        assert_ne!(name_color(200, 80, 95), ColorName::PureWhite);
        // extremes win over low saturation
        assert_eq!(name_color(0, 0, 5), ColorName::DeepBlack);
        assert_eq!(name_color(0, 0, 100), ColorName::PureWhite);
    }

    #[test]
    fn test_grayscale_band() {
        assert_eq!(name_color(200, 9, 50), ColorName::Gray);
        assert_eq!(name_color(200, 10, 50), ColorName::OceanBlue);
        assert_eq!(name_color(0, 0, 29), ColorName::Charcoal);
        assert_eq!(name_color(0, 0, 30), ColorName::Gray);
        assert_eq!(name_color(0, 0, 69), ColorName::Gray);
        assert_eq!(name_color(0, 0, 70), ColorName::LightGray);
        assert_eq!(name_color(0, 0, 10), ColorName::Charcoal);
        assert_eq!(name_color(0, 0, 95), ColorName::LightGray);
    }

    #[test]
    fn test_hue_band_boundaries() {
        let cases = [
            (29, ColorName::DeepRed, 30, ColorName::Brown),
            (59, ColorName::Brown, 60, ColorName::ForestGreen),
            (89, ColorName::ForestGreen, 90, ColorName::Emerald),
            (149, ColorName::Emerald, 150, ColorName::OceanBlue),
            (209, ColorName::OceanBlue, 210, ColorName::RoyalBlue),
            (269, ColorName::RoyalBlue, 270, ColorName::Purple),
            (329, ColorName::Purple, 330, ColorName::Crimson),
            (359, ColorName::Crimson, 0, ColorName::DeepRed),
        ];
        for (below, below_name, at, at_name) in cases {
            assert_eq!(name_color(below, 80, 50), below_name, "hue {}", below);
            assert_eq!(name_color(at, 80, 50), at_name, "hue {}", at);
        }
    }

    #[test]
    fn test_light_variant_threshold() {
        assert_eq!(name_color(0, 80, 60), ColorName::DeepRed);
        assert_eq!(name_color(0, 80, 61), ColorName::LightRed);
        assert_eq!(name_color(40, 80, 61), ColorName::Golden);
        assert_eq!(name_color(75, 80, 61), ColorName::LightGreen);
        assert_eq!(name_color(120, 80, 61), ColorName::Mint);
        assert_eq!(name_color(180, 80, 61), ColorName::SkyBlue);
        assert_eq!(name_color(240, 80, 61), ColorName::Lavender);
        assert_eq!(name_color(300, 80, 61), ColorName::Pink);
        assert_eq!(name_color(345, 80, 61), ColorName::Rose);
    }

    #[test]
    fn test_hue_360_wraps_to_red() {
        assert_eq!(name_color(360, 80, 50), ColorName::DeepRed);
    }

    #[test]
    fn test_naming_is_total_and_in_vocabulary() {
        for hue in (0..360u16).step_by(3) {
            for saturation in 0..=100u8 {
                for lightness in 0..=100u8 {
                    let name = name_color(hue, saturation, lightness);
                    assert!(ColorName::ALL.contains(&name));
                    assert!(!name.as_str().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_name_serializes_as_display_string() {
        let json = serde_json::to_string(&ColorName::ForestGreen).unwrap();
        assert_eq!(json, "\"Forest Green\"");
        let back: ColorName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorName::ForestGreen);
        assert_eq!(ColorName::ForestGreen.to_string(), "Forest Green");
    }

    #[test]
    fn test_name_hsl_matches_name_color() {
        assert_eq!(name_hsl(Hsl::new(221, 83, 53)), ColorName::RoyalBlue);
    }
}
