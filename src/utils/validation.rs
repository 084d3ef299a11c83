use std::path::Path;
use crate::core::ConversionRequest;
use crate::utils::ValidationError;

/// Checks a request before any file is read or written.
pub fn validate_request(request: &ConversionRequest) -> Result<(), ValidationError> {
    if request.input_dir.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath("Input"));
    }
    if request.output_dir.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath("Output"));
    }

    validate_input_dir(&request.input_dir)?;

    let resize = &request.resize;
    if resize.enabled && !resize.keep_aspect_ratio && resize.width == 0 && resize.height == 0 {
        return Err(ValidationError::MissingDimensions);
    }

    if request.quality > 100 {
        return Err(ValidationError::InvalidQuality(request.quality));
    }

    Ok(())
}

fn validate_input_dir(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ValidationError::InputNotDirectory(path.to_path_buf()));
    }
    Ok(())
}
