// src/processing/resize.rs

//! Resize policy: turns `ResizeSettings` plus the source size into a target
//! size, then resamples with Lanczos3.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;
use crate::core::ResizeSettings;
use crate::utils::ProcessingError;
use super::formats::WEBP_MAX_DIMENSION;

type Result<T> = std::result::Result<T, ProcessingError>;

/// Target size for an image of `orig_w`x`orig_h`, or `None` to keep it as is.
///
/// With `keep_aspect_ratio` only a lone width or a lone height is used to
/// derive the other axis. When both are given they are used verbatim, and
/// when neither is given the source size is kept. Without `keep_aspect_ratio`
/// the values pass through untouched, zeros included.
pub fn target_dimensions(
    settings: &ResizeSettings,
    orig_w: u32,
    orig_h: u32,
) -> Option<(u32, u32)> {
    if !settings.enabled {
        return None;
    }

    let (width, height) = (settings.width, settings.height);
    if !settings.keep_aspect_ratio {
        return Some((width, height));
    }

    match (width, height) {
        (0, 0) => None,
        (w, 0) if orig_w > 0 => Some((w, scale(w, orig_h, orig_w))),
        (0, h) if orig_h > 0 => Some((scale(h, orig_w, orig_h), h)),
        (w, h) => Some((w, h)),
    }
}

/// `round(value * num / den)`, never below one pixel.
fn scale(value: u32, num: u32, den: u32) -> u32 {
    let scaled = (value as f64 * num as f64 / den as f64).round();
    (scaled as u32).max(1)
}

/// Applies the resize specified in `settings` to `image`.
///
/// Returns the original image unchanged when no resize is requested or the
/// target equals the source size.
pub fn apply_resize(image: DynamicImage, settings: &ResizeSettings) -> Result<DynamicImage> {
    let (orig_w, orig_h) = (image.width(), image.height());

    let Some((width, height)) = target_dimensions(settings, orig_w, orig_h) else {
        return Ok(image);
    };

    // Larger targets cannot be encoded and would exhaust memory while resampling
    if width == 0 || height == 0 || width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
        return Err(ProcessingError::InvalidDimension { width, height });
    }

    if (width, height) == (orig_w, orig_h) {
        return Ok(image);
    }

    debug!("Resizing {}×{} → {}×{}", orig_w, orig_h, width, height);
    Ok(image.resize_exact(width, height, FilterType::Lanczos3))
}
