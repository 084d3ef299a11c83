use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use crate::utils::{ConverterError, ConverterResult};
use crate::utils::formats::{is_eligible, OUTPUT_EXTENSION};

/// Lists the entries directly inside `dir` with a JPEG/PNG extension, sorted
/// by file name.
///
/// Only the extension decides: a folder named `x.png` is listed too and fails
/// later like any unreadable image. Anything else is skipped without a trace.
pub fn list_eligible_files(dir: impl AsRef<Path>) -> ConverterResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| {
        ConverterError::io(format!("Cannot read input folder {}: {e}", dir.display()))
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| eligible_entry(dir, entry.map(|e| e.path())))
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} eligible files in {}", files.len(), dir.display());
    Ok(files)
}

/// Keeps eligible paths; logs and drops entries the OS could not read.
fn eligible_entry(dir: &Path, entry: io::Result<PathBuf>) -> Option<PathBuf> {
    match entry {
        Ok(path) => Some(path).filter(|path| is_eligible(path)),
        Err(e) => {
            warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
            None
        }
    }
}

/// Creates `dir` and any missing parents. Existing folders are left alone.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> ConverterResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| ConverterError::directory_creation(dir, &e))
}

/// `<output_dir>/<input stem>.webp`
pub fn output_path_for(input: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> PathBuf {
    let stem = input
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.as_ref().join(format!("{stem}.{OUTPUT_EXTENSION}"))
}

/// Writes `bytes` next to `path` under a temporary name, then renames it into
/// place. An existing file at `path` is replaced.
pub fn write_atomic(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let result = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Extracts the file name for log messages, falling back to the full path.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
