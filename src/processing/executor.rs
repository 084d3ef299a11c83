// src/processing/executor.rs

//! The batch converter.
//!
//! Files are handled one at a time: decode, resize, encode, write. A failure
//! on one file is reported and the batch moves on; only request validation,
//! output folder creation and listing the input folder can stop a run.

use std::path::{Path, PathBuf};
use std::time::Instant;
use image::ImageReader;
use tracing::{debug, info, warn};

use crate::core::{CancelToken, ConversionRequest, ConversionSummary, ProgressEvent, ProgressSink};
use crate::utils::{
    ConverterResult, ProcessingError, ensure_output_dir, extract_filename, list_eligible_files,
    output_path_for, validate_request, write_atomic,
};

use super::formats::encode_webp;
use super::resize::apply_resize;

/// Converts every JPEG/PNG in a folder to WebP.
#[derive(Debug, Clone, Default)]
pub struct BatchConverter {
    cancel: CancelToken,
}

impl BatchConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `cancel` to stop between files.
    pub fn with_cancel(cancel: CancelToken) -> Self {
        Self { cancel }
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Runs one full pass over `request.input_dir`.
    ///
    /// Emits `Started`, one event per eligible file, then `Finished`. Fatal
    /// errors are returned before anything is emitted.
    pub fn convert(
        &self,
        request: &ConversionRequest,
        sink: &mut dyn ProgressSink,
    ) -> ConverterResult<ConversionSummary> {
        debug!(
            "Conversion requested: {} -> {} (resize: {:?}, quality: {})",
            request.input_dir.display(),
            request.output_dir.display(),
            request.resize,
            request.quality
        );

        validate_request(request)?;
        ensure_output_dir(&request.output_dir)?;
        let files = list_eligible_files(&request.input_dir)?;

        let start = Instant::now();
        sink.emit(&ProgressEvent::Started);

        let mut count = 0;
        let mut cancelled = false;

        for input in &files {
            if self.cancel.is_cancelled() {
                info!("Conversion cancelled after {} of {} files", count, files.len());
                cancelled = true;
                break;
            }

            let event = match convert_single(input, request) {
                Ok(output) => ProgressEvent::converted(input, output),
                Err(e) => {
                    warn!("Conversion failed for {}: {}", input.display(), e);
                    ProgressEvent::failed(input, e.to_string())
                }
            };
            sink.emit(&event);
            // Attempts are counted, not successes
            count += 1;
        }

        let summary = ConversionSummary {
            count,
            elapsed: start.elapsed(),
            cancelled,
        };
        info!(
            "Converted {} images in {:.2}s",
            summary.count,
            summary.elapsed_seconds()
        );
        sink.emit(&ProgressEvent::Finished(summary));
        Ok(summary)
    }
}

/// Runs a batch with no cancellation.
pub fn convert(
    request: &ConversionRequest,
    sink: &mut dyn ProgressSink,
) -> ConverterResult<ConversionSummary> {
    BatchConverter::new().convert(request, sink)
}

/// Converts one file and returns the path written.
fn convert_single(input: &Path, request: &ConversionRequest) -> Result<PathBuf, ProcessingError> {
    let image = ImageReader::open(input)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ProcessingError::Decode(e.to_string()))?
        .decode()?;

    debug!(
        "Loaded '{}': {}×{}",
        extract_filename(input),
        image.width(),
        image.height()
    );

    let image = apply_resize(image, &request.resize)?;
    let bytes = encode_webp(&image, request.quality)?;

    let output = output_path_for(input, &request.output_dir);
    write_atomic(&output, &bytes)?;

    debug!("'{}' → {} bytes", extract_filename(&output), bytes.len());
    Ok(output)
}
