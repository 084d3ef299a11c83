//! Serde configuration object that conversion requests are built from.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::{ConversionRequest, ResizeSettings};
use crate::utils::{ConverterError, ConverterResult};
use crate::utils::formats::DEFAULT_WEBP_QUALITY;

pub const DEFAULT_INPUT_FOLDER: &str = "ALL-IMG";
pub const DEFAULT_OUTPUT_FOLDER: &str = "WEBP";

/// User-editable settings, as read from a JSON file or a form.
///
/// Every key is optional in the file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterSettings {
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    pub resize: bool,
    pub keep_aspect_ratio: bool,
    pub width: u32,
    pub height: u32,
    pub quality: u32,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from(".").join(DEFAULT_INPUT_FOLDER),
            output_folder: PathBuf::from(".").join(DEFAULT_OUTPUT_FOLDER),
            resize: false,
            keep_aspect_ratio: false,
            width: 0,
            height: 0,
            quality: DEFAULT_WEBP_QUALITY,
        }
    }
}

impl ConverterSettings {
    /// Parses settings from JSON text.
    pub fn from_json(text: &str) -> ConverterResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| ConverterError::io(format!("Invalid settings: {e}")))
    }

    /// Reads settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConverterResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConverterError::io(format!("Cannot read settings file {}: {e}", path.display()))
        })?;
        debug!("Loaded settings from {}", path.display());
        Self::from_json(&text)
    }

    /// Builds the request handed to the converter. Validation happens there.
    pub fn into_request(self) -> ConversionRequest {
        ConversionRequest {
            input_dir: self.input_folder,
            output_dir: self.output_folder,
            resize: ResizeSettings {
                enabled: self.resize,
                keep_aspect_ratio: self.keep_aspect_ratio,
                width: self.width,
                height: self.height,
            },
            quality: self.quality,
        }
    }
}
