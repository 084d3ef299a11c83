use std::path::Path;

/// Input formats the converter picks up from the source folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    JPEG,
    PNG,
}

/// Default encoder quality for WebP output
pub const DEFAULT_WEBP_QUALITY: u32 = 85;

/// Extension written on every output file
pub const OUTPUT_EXTENSION: &str = "webp";

impl InputFormat {
    pub const ALL: [InputFormat; 2] = [Self::JPEG, Self::PNG];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Format for an extension (without the dot), if it is one we read
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.matches_extension(ext))
    }
}

/// Get format from a path's extension, `None` when the file is not eligible
pub fn format_from_path(path: impl AsRef<Path>) -> Option<InputFormat> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .and_then(InputFormat::from_extension)
}

/// Whether the converter should process this path at all
pub fn is_eligible(path: impl AsRef<Path>) -> bool {
    format_from_path(path).is_some()
}
