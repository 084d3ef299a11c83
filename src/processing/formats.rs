// src/processing/formats.rs

//! WebP encoding.
//!
//! libwebp only takes 8-bit RGB or RGBA, so every decoded image is flattened to
//! one of those first. Alpha is kept when the source has it.

use image::DynamicImage;
use webp::Encoder;
use crate::utils::ProcessingError;

type Result<T> = std::result::Result<T, ProcessingError>;

/// libwebp refuses anything larger on either axis
pub const WEBP_MAX_DIMENSION: u32 = 16383;

/// Returns `true` when `quality` selects lossless mode.
fn is_lossless(quality: u32) -> bool {
    quality >= 100
}

/// Encodes `image` as WebP.
///
/// When quality == 100: lossless mode.
/// Otherwise: lossy at the given quality.
pub fn encode_webp(image: &DynamicImage, quality: u32) -> Result<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
        return Err(ProcessingError::Encode(format!(
            "{width}x{height} exceeds the WebP limit of {WEBP_MAX_DIMENSION} pixels per side"
        )));
    }

    let lossless = is_lossless(quality);
    let quality = quality.min(100) as f32;

    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        let encoder = Encoder::from_rgba(rgba.as_raw(), width, height);
        encoder.encode_simple(lossless, quality).map(|memory| memory.to_vec())
    } else {
        let rgb = image.to_rgb8();
        let encoder = Encoder::from_rgb(rgb.as_raw(), width, height);
        encoder.encode_simple(lossless, quality).map(|memory| memory.to_vec())
    };

    encoded.map_err(|e| ProcessingError::Encode(format!("{e:?}")))
}
