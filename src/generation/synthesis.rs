//! Hue-rotation palette synthesis
//!
//! A palette is seeded from one random base hue; the remaining hues follow at
//! a fixed angular step so the colors sit evenly around the hue circle.
//! Saturation and lightness are drawn per color from ranges that keep the
//! results vivid and mid-toned.
//!
//! The random source is always passed in, so seeded generators give
//! reproducible palettes.

use rand::Rng;

use crate::color::{hsl_to_rgb, rgb_to_hex};
use crate::config::{PercentRange, SynthesisConfig};

/// One synthesized color before conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslSeed {
    /// Degrees in `[0, 360)`
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

fn draw<R: Rng + ?Sized>(rng: &mut R, range: PercentRange) -> f64 {
    if range.min < range.max {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

/// Draw the HSL seeds of a palette
///
/// Draw order is fixed: the base hue, then saturation and lightness for
/// each color in turn.
pub fn synthesize_seeds<R: Rng + ?Sized>(rng: &mut R, config: &SynthesisConfig) -> Vec<HslSeed> {
    let base_hue = f64::from(rng.gen_range(0..360u16));
    let mut seeds = Vec::with_capacity(config.count);

    for i in 0..config.count {
        let hue = (base_hue + i as f64 * config.hue_step).rem_euclid(360.0);
        let saturation = draw(rng, config.saturation);
        let lightness = draw(rng, config.lightness);
        seeds.push(HslSeed {
            hue,
            saturation,
            lightness,
        });
    }

    log::debug!("Synthesized {} hues from base hue {}", seeds.len(), base_hue);
    seeds
}

/// Synthesize a palette as lowercase hex strings
pub fn synthesize_with<R: Rng + ?Sized>(rng: &mut R, config: &SynthesisConfig) -> Vec<String> {
    synthesize_seeds(rng, config)
        .into_iter()
        .map(|seed| rgb_to_hex(hsl_to_rgb(seed.hue, seed.saturation, seed.lightness)))
        .collect()
}

/// Synthesize five evenly spaced, vivid colors
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let palette = swatchbook::synthesize_palette(&mut rng);
/// assert_eq!(palette.len(), 5);
/// ```
pub fn synthesize_palette<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    synthesize_with(rng, &SynthesisConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgb_to_hsl_exact, try_hex_to_rgb};
    use rand::{rngs::StdRng, SeedableRng};

    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_palette_is_five_hex_strings() {
        let mut rng = StdRng::seed_from_u64(42);
        let palette = synthesize_palette(&mut rng);

        assert_eq!(palette.len(), 5);
        for hex in &palette {
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            assert!(try_hex_to_rgb(hex).is_ok());
        }
    }

    #[test]
    fn test_hues_are_72_degrees_apart() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let seeds = synthesize_seeds(&mut rng, &SynthesisConfig::default());
            let base = seeds[0].hue;

            assert_eq!(base.fract(), 0.0);
            for (i, s) in seeds.iter().enumerate() {
                assert!(s.hue >= 0.0 && s.hue < 360.0);
                assert_eq!((s.hue - base).rem_euclid(360.0), 72.0 * i as f64);
            }
        }
    }

    #[test]
    fn test_saturation_and_lightness_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            for seed in synthesize_seeds(&mut rng, &SynthesisConfig::default()) {
                assert!(seed.saturation >= 60.0 && seed.saturation < 100.0);
                assert!(seed.lightness >= 40.0 && seed.lightness < 80.0);
            }
        }
    }

    #[test]
    fn test_hex_hues_track_seeds() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = SynthesisConfig::default();
        let seeds = synthesize_seeds(&mut rng, &config);

        let mut rng = StdRng::seed_from_u64(11);
        let palette = synthesize_with(&mut rng, &config);

        for (seed, hex) in seeds.iter().zip(&palette) {
            let rgb = try_hex_to_rgb(hex).unwrap();
            let hsl = rgb_to_hsl_exact(rgb.red, rgb.green, rgb.blue);
            assert!(circular_distance(hsl.hue, seed.hue) < 2.0, "{} vs {}", hsl.hue, seed.hue);
        }
    }

    #[test]
    fn test_same_seed_same_palette() {
        let a = synthesize_palette(&mut StdRng::seed_from_u64(99));
        let b = synthesize_palette(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_config() {
        let config = SynthesisConfig {
            count: 3,
            hue_step: 120.0,
            saturation: PercentRange::new(100.0, 100.0),
            lightness: PercentRange::new(50.0, 50.0),
        };
        let mut rng = StdRng::seed_from_u64(5);
        let seeds = synthesize_seeds(&mut rng, &config);

        assert_eq!(seeds.len(), 3);
        for (i, seed) in seeds.iter().enumerate() {
            assert_eq!(seed.saturation, 100.0);
            assert_eq!(seed.lightness, 50.0);
            assert_eq!((seed.hue - seeds[0].hue).rem_euclid(360.0), 120.0 * i as f64);
        }
    }
}
