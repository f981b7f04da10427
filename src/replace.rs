use crate::constants::TEMP_SUFFIX;
use crate::error::{OptimizeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Removes the wrapped path on drop unless disarmed.
struct TempFileGuard {
    path: PathBuf,
    armed: bool,
}

impl TempFileGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Sibling temp path: `photo.jpg` becomes `photo.jpg.tmp`.
pub fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| OptimizeError::InvalidFileName(path.to_path_buf()))?;
    Ok(path.with_file_name(format!("{}{}", file_name.to_string_lossy(), TEMP_SUFFIX)))
}

/// Replaces `original` with `bytes` through a sibling temp file.
///
/// The original is only removed once the temp file is fully written, and a
/// failed write never leaves the temp file behind. If the final rename fails
/// after the original is gone, the temp file is kept since it is then the only
/// copy.
pub fn replace_via_temp(original: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(original)?;
    let mut guard = TempFileGuard::new(temp_path.clone());

    fs::write(&temp_path, bytes)?;
    fs::remove_file(original)?;
    guard.disarm();
    fs::rename(&temp_path, original)?;

    Ok(())
}

/// Writes `bytes` to `target`, then removes `original` when it is a
/// different file.
pub fn write_and_remove_original(original: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    if original == target {
        return replace_via_temp(original, bytes);
    }

    fs::write(target, bytes)?;
    fs::remove_file(original)?;
    Ok(())
}
