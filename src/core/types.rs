//! Core types for conversion requests and results.

use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::utils::formats::DEFAULT_WEBP_QUALITY;

/// One batch conversion: where to read, where to write, and how to resize.
///
/// Built once per run from CLI flags or a settings file, validated, and then
/// consumed by a single pass over the input folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Folder scanned for JPEG/PNG files
    pub input_dir: PathBuf,
    /// Folder receiving the `.webp` files, created when missing
    pub output_dir: PathBuf,
    /// Resize settings applied to every image
    pub resize: ResizeSettings,
    /// WebP quality (0-100, 100 = lossless)
    pub quality: u32,
}

impl ConversionRequest {
    /// Creates a request without resizing, at the default quality.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            resize: ResizeSettings::default(),
            quality: DEFAULT_WEBP_QUALITY,
        }
    }

    pub fn with_resize(mut self, resize: ResizeSettings) -> Self {
        self.resize = resize;
        self
    }

    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }
}

/// Resize settings for image dimensions.
///
/// A dimension of 0 means "unset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeSettings {
    /// Whether to resize at all
    pub enabled: bool,
    /// Derive the unset dimension from the source proportions
    pub keep_aspect_ratio: bool,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
}

impl ResizeSettings {
    /// Resize to exactly `width`x`height`.
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            enabled: true,
            keep_aspect_ratio: false,
            width,
            height,
        }
    }

    /// Resize keeping proportions; pass 0 for the dimension to derive.
    pub fn keep_aspect(width: u32, height: u32) -> Self {
        Self {
            enabled: true,
            keep_aspect_ratio: true,
            width,
            height,
        }
    }
}

/// Outcome for one eligible file. Produced, reported and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ConversionResult {
    Converted { input: PathBuf, output: PathBuf },
    Failed { input: PathBuf, message: String },
}

impl ConversionResult {
    pub fn input(&self) -> &PathBuf {
        match self {
            Self::Converted { input, .. } | Self::Failed { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Terminal report of a run.
///
/// `count` is the number of eligible files attempted, failures included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSummary {
    pub count: usize,
    pub elapsed: Duration,
    /// Set when the run stopped early on a cancel request
    pub cancelled: bool,
}

impl ConversionSummary {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
