use crate::error::{OptimizeError, Result};
use crate::variant::Variant;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the files directly inside `gallery_dir` that `variant` accepts,
/// sorted by file name.
///
/// # Arguments
/// * `gallery_dir` - Directory to scan; it is never created
/// * `variant` - Decides which extensions count as candidates
///
/// # Returns
/// * `Ok(files)` - Candidate paths, possibly empty
/// * `Err(OptimizeError)` - If the directory is missing or cannot be listed
pub fn collect_candidates(gallery_dir: &Path, variant: Variant) -> Result<Vec<PathBuf>> {
    if !gallery_dir.is_dir() {
        return Err(OptimizeError::GalleryNotFound(gallery_dir.to_path_buf()));
    }

    let walker = WalkDir::new(gallery_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && variant.accepts(entry.path()) {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
