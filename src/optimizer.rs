use crate::constants::{INFO_PREFIX, MAX_DIMENSION, SKIP_PREFIX, SUCCESS_PREFIX};
use crate::discovery::collect_candidates;
use crate::encode::encode_for_variant;
use crate::error::Result;
use crate::replace::write_and_remove_original;
use crate::resize::resize_to_fit;
use crate::utils::{create_progress_spinner, format_kib, format_savings};
use crate::variant::Variant;
use crate::{error, info, verbose, warn};
use image::{GenericImageView, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a single file that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Optimized {
        before: u64,
        after: u64,
        output: PathBuf,
    },
    Skipped {
        size: u64,
    },
}

/// Counts accumulated over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub optimized: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &Result<FileOutcome>) {
        match result {
            Ok(FileOutcome::Optimized { .. }) => self.optimized += 1,
            Ok(FileOutcome::Skipped { .. }) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.optimized + self.skipped + self.failed
    }
}

/// Width and height from the image header, without decoding pixels.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    Ok(ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()?)
}

/// Runs one variant over a single candidate file.
///
/// Either leaves the file untouched (`Skipped`) or writes the resized,
/// re-encoded image to the variant's target path (`Optimized`). Any error is
/// returned to the caller; the batch loop decides what to do with it.
pub fn process_file(path: &Path, variant: Variant) -> Result<FileOutcome> {
    let before = fs::metadata(path)?.len();

    // The header read doubles as a sanity check: a file that is not a
    // readable image fails here instead of being skipped.
    let dimensions = read_dimensions(path)?;

    if variant.should_skip(path, before, dimensions) {
        return Ok(FileOutcome::Skipped { size: before });
    }

    let target = variant.target_path(path)?;

    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let (width, height) = dimensions;
    let resized = resize_to_fit(img, MAX_DIMENSION);
    let (new_width, new_height) = resized.dimensions();
    verbose!(
        "{}: {}x{} -> {}x{}",
        path.display(),
        width,
        height,
        new_width,
        new_height
    );

    let bytes = encode_for_variant(&resized, variant)?;
    write_and_remove_original(path, &target, &bytes)?;

    let after = fs::metadata(&target)?.len();
    Ok(FileOutcome::Optimized {
        before,
        after,
        output: target,
    })
}

/// Optimizes every candidate in `gallery_dir` with `variant`, one file at a
/// time.
///
/// Per-file failures are logged and counted, never propagated. Only a gallery
/// directory that cannot be listed fails the run.
pub fn optimize_gallery(gallery_dir: &Path, variant: Variant) -> Result<RunSummary> {
    let candidates = collect_candidates(gallery_dir, variant)?;
    info!(
        "{} Found {} images to optimize ({} variant)...",
        INFO_PREFIX,
        candidates.len(),
        variant
    );

    let mut summary = RunSummary::default();

    for path in &candidates {
        let name = display_name(path);

        let spinner = create_progress_spinner(format!("Optimizing {}...", name));
        let result = process_file(path, variant);
        spinner.finish_and_clear();

        report(&name, variant, &result);
        summary.record(&result);
    }

    info!(
        "\nCompleted: {} optimized, {} skipped",
        summary.optimized, summary.skipped
    );
    if summary.failed > 0 {
        warn!("Failed: {} files", summary.failed);
    }
    verbose!(
        "Processed {} of {} candidates in {}",
        summary.total(),
        candidates.len(),
        gallery_dir.display()
    );

    Ok(summary)
}

fn report(name: &str, variant: Variant, result: &Result<FileOutcome>) {
    match result {
        Ok(FileOutcome::Optimized {
            before,
            after,
            output,
        }) => {
            info!(
                "{} {} - {} → {} ({})",
                SUCCESS_PREFIX,
                name,
                format_kib(*before),
                format_kib(*after),
                format_savings(*before, *after)
            );
            verbose!("Saved as {}", output.display());
        }
        Ok(FileOutcome::Skipped { size }) => {
            let reason = match variant {
                Variant::WebP => "already an optimized WebP",
                Variant::Jpeg => "already optimized",
            };
            info!("{} {} - {} ({})", SKIP_PREFIX, name, reason, format_kib(*size));
        }
        Err(e) => {
            error!("Error with {}: {}", name, e);
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizeError;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_run_summary_record() {
        let mut summary = RunSummary::default();
        summary.record(&Ok(FileOutcome::Optimized {
            before: 10,
            after: 5,
            output: PathBuf::from("a.webp"),
        }));
        summary.record(&Ok(FileOutcome::Skipped { size: 3 }));
        summary.record(&Err(OptimizeError::WebpEncoding("boom".to_string())));

        assert_eq!(
            summary,
            RunSummary {
                optimized: 1,
                skipped: 1,
                failed: 1
            }
        );
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/g/photo.jpg")), "photo.jpg");
    }

    #[test]
    fn test_process_file_missing() {
        let result = process_file(Path::new("/nonexistent/photo.jpg"), Variant::Jpeg);
        assert!(matches!(result, Err(OptimizeError::Io(_))));
    }

    #[test]
    fn test_process_file_corrupt_image_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.jpg");
        File::create(&path)
            .unwrap()
            .write_all(b"definitely not a jpeg")
            .unwrap();

        assert!(process_file(&path, Variant::Jpeg).is_err());
        assert!(process_file(&path, Variant::WebP).is_err());
        // Nothing is touched on failure.
        assert_eq!(fs::read(&path).unwrap(), b"definitely not a jpeg");
        assert!(!temp_dir.path().join("broken.webp").exists());
        assert!(!temp_dir.path().join("broken.jpg.tmp").exists());
    }
}
