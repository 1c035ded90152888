//! Histogram-based dominant color extraction
//!
//! Extracts dominant colors by:
//! - Downsampling to a pixel budget (nearest neighbour)
//! - Skipping mostly transparent pixels
//! - Bucketing each channel to a few bits and counting bucket populations
//! - Emitting the mean color of the most populated buckets, skipping any
//!   that sit too close to a color already chosen

use image::RgbaImage;
use palette::Srgb;
use std::collections::HashMap;

use super::ColorExtractor;
use crate::classify::rgb_distance;
use crate::color::{rgb_to_hex, Rgb};
use crate::config::ExtractionConfig;
use crate::constants::extraction::MIN_ALPHA;
use crate::error::{PaletteError, Result};
use crate::image_loader::{downsample, load_image_from_memory};

/// Population and channel sums of one quantization bucket
#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    key: u32,
    count: u64,
    red: u64,
    green: u64,
    blue: u64,
}

impl Bucket {
    fn mean(&self) -> Rgb {
        let half = self.count / 2;
        let channel = |sum: u64| ((sum + half) / self.count) as u8;
        Srgb::new(channel(self.red), channel(self.green), channel(self.blue))
    }
}

/// Dominant color extractor over a quantized color histogram
#[derive(Debug, Clone, Default)]
pub struct HistogramExtractor {
    config: ExtractionConfig,
}

impl HistogramExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom parameters
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract dominant colors from decoded pixels
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ExtractionError`] if the image has no pixel
    /// opaque enough to count.
    pub fn extract_from_image(&self, image: &RgbaImage) -> Result<Vec<String>> {
        let sampled = downsample(image, self.config.max_sample_pixels);
        let buckets = self.bucket_pixels(&sampled);

        if buckets.is_empty() {
            return Err(PaletteError::ExtractionError {
                reason: "image has no opaque pixels".into(),
            });
        }

        let mut ranked: Vec<Bucket> = buckets.into_values().collect();
        // population first, bucket key keeps equal populations deterministic
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.key.cmp(&b.key)));
        log::debug!("{} occupied buckets", ranked.len());

        let mut chosen: Vec<Rgb> = Vec::with_capacity(self.config.max_colors);
        for bucket in &ranked {
            if chosen.len() == self.config.max_colors {
                break;
            }
            let mean = bucket.mean();
            if chosen
                .iter()
                .any(|&existing| rgb_distance(existing, mean) < self.config.min_distance)
            {
                continue;
            }
            log::trace!("bucket {:#x}: {} pixels -> {}", bucket.key, bucket.count, rgb_to_hex(mean));
            chosen.push(mean);
        }

        Ok(chosen.into_iter().map(rgb_to_hex).collect())
    }

    fn bucket_pixels(&self, image: &RgbaImage) -> HashMap<u32, Bucket> {
        let bits = u32::from(self.config.quantization_bits.clamp(1, 8));
        let shift = 8 - bits;
        let mut buckets: HashMap<u32, Bucket> = HashMap::new();

        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            if a < MIN_ALPHA {
                continue;
            }
            let key = (u32::from(r) >> shift) << (2 * bits)
                | (u32::from(g) >> shift) << bits
                | (u32::from(b) >> shift);

            let bucket = buckets.entry(key).or_insert(Bucket {
                key,
                ..Bucket::default()
            });
            bucket.count += 1;
            bucket.red += u64::from(r);
            bucket.green += u64::from(g);
            bucket.blue += u64::from(b);
        }
        buckets
    }
}

impl ColorExtractor for HistogramExtractor {
    fn extract(&self, image_bytes: &[u8]) -> Result<Vec<String>> {
        let image = load_image_from_memory(image_bytes)?;
        self.extract_from_image(&image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba};
    use std::io::Cursor;

    const RED: Rgba<u8> = Rgba([239, 68, 68, 255]);
    const BLUE: Rgba<u8> = Rgba([37, 99, 235, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 255, 0, 0]);

    /// 10x10 image whose first `red` pixels are red, next `blue` are blue,
    /// remainder transparent
    fn striped(red: u32, blue: u32) -> RgbaImage {
        RgbaImage::from_fn(10, 10, |x, y| {
            let index = y * 10 + x;
            if index < red {
                RED
            } else if index < red + blue {
                BLUE
            } else {
                CLEAR
            }
        })
    }

    #[test]
    fn test_most_populated_first() {
        let colors = HistogramExtractor::new().extract_from_image(&striped(30, 60)).unwrap();
        assert_eq!(colors, vec!["#2563eb".to_string(), "#ef4444".to_string()]);
    }

    #[test]
    fn test_transparent_pixels_ignored() {
        let colors = HistogramExtractor::new().extract_from_image(&striped(5, 0)).unwrap();
        assert_eq!(colors, vec!["#ef4444".to_string()]);
    }

    #[test]
    fn test_fully_transparent_is_error() {
        let image = RgbaImage::from_pixel(8, 8, CLEAR);
        let err = HistogramExtractor::new().extract_from_image(&image).unwrap_err();
        assert!(matches!(err, PaletteError::ExtractionError { .. }));
    }

    #[test]
    fn test_near_duplicates_merged() {
        // 239 and 240 fall in different 4-bit buckets but are 3 apart
        let image = RgbaImage::from_fn(10, 10, |x, _| {
            if x < 6 {
                RED
            } else {
                Rgba([240, 70, 66, 255])
            }
        });
        let colors = HistogramExtractor::new().extract_from_image(&image).unwrap();
        assert_eq!(colors, vec!["#ef4444".to_string()]);
    }

    #[test]
    fn test_bucket_mean_rounds() {
        let image = RgbaImage::from_fn(2, 1, |x, _| if x == 0 { Rgba([10, 10, 10, 255]) } else { Rgba([11, 11, 11, 255]) });
        let colors = HistogramExtractor::new().extract_from_image(&image).unwrap();
        // (10 + 11) / 2 = 10.5 rounds up
        assert_eq!(colors, vec!["#0b0b0b".to_string()]);
    }

    #[test]
    fn test_max_colors_limit() {
        let config = ExtractionConfig {
            max_colors: 1,
            ..ExtractionConfig::default()
        };
        let colors = HistogramExtractor::with_config(config).extract_from_image(&striped(30, 60)).unwrap();
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn test_extract_from_encoded_bytes() {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(striped(70, 20))
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let colors = HistogramExtractor::new().extract(&bytes).unwrap();
        assert_eq!(colors[0], "#ef4444");
        assert_eq!(colors[1], "#2563eb");
    }

    #[test]
    fn test_undecodable_bytes() {
        let err = HistogramExtractor::new().extract(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, PaletteError::ImageLoadError { .. }));
    }
}
