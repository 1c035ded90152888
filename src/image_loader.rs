//! Image loading for dominant color extraction
//!
//! This module provides a single entry point for turning image files or
//! in-memory buffers into RGBA pixel buffers.
//!
//! ## Supported Formats
//!
//! Decoded via the `image` crate:
//! - JPEG, PNG, GIF (first frame only), WebP, TIFF, BMP
//!
//! ## Design
//!
//! Everything is converted to 8-bit RGBA so extraction can skip transparent
//! pixels uniformly. Large images can be downsampled to a pixel budget with
//! nearest-neighbour sampling, which keeps every sampled color an actual
//! pixel color.

use image::imageops::FilterType;
use image::RgbaImage;
use std::borrow::Cow;
use std::path::Path;

use crate::error::{PaletteError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Load an image from disk as RGBA
///
/// # Errors
///
/// Returns [`PaletteError::UnsupportedFormat`] for unknown extensions and
/// [`PaletteError::ImageLoadError`] if the file cannot be read or decoded.
///
/// # Example
///
/// ```rust,no_run
/// use swatchbook::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), swatchbook::PaletteError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| PaletteError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;

    let bytes = std::fs::read(path).map_err(|e| {
        PaletteError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = image::load_from_memory_with_format(&bytes, format.into()).map_err(|e| {
        PaletteError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    log::debug!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgba8())
}

/// Decode an in-memory image, guessing the format from its content
pub fn load_image_from_memory(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| PaletteError::image_load("Failed to decode image buffer", e))?;
    Ok(img.to_rgba8())
}

/// Shrink `image` to at most `max_pixels`, keeping its aspect ratio
///
/// Images already within budget are borrowed unchanged.
pub fn downsample(image: &RgbaImage, max_pixels: u32) -> Cow<'_, RgbaImage> {
    let (width, height) = image.dimensions();
    let area = u64::from(width) * u64::from(height);
    if area <= u64::from(max_pixels.max(1)) {
        return Cow::Borrowed(image);
    }

    let scale = (f64::from(max_pixels.max(1)) / area as f64).sqrt();
    let new_width = ((f64::from(width) * scale).floor() as u32).max(1);
    let new_height = ((f64::from(height) * scale).floor() as u32).max(1);
    log::debug!(
        "Downsampling {}x{} to {}x{} for extraction",
        width,
        height,
        new_width,
        new_height
    );
    Cow::Owned(image::imageops::resize(image, new_width, new_height, FilterType::Nearest))
}
