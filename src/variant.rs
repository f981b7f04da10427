//! Output variants of the gallery optimizer
//!
//! Each variant owns its accepted extension set, its skip rule and the
//! target path a processed file ends up at.

use crate::constants::{
    JPEG_EXTENSIONS, JPEG_QUALITY, JPEG_SKIP_THRESHOLD, MAX_DIMENSION, WEBP_EXTENSION,
    WEBP_EXTENSIONS, WEBP_QUALITY, WEBP_SKIP_THRESHOLD,
};
use crate::error::{OptimizeError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Convert everything to lossy WebP next to the original
    WebP,
    /// Re-encode as JPEG at the original path
    Jpeg,
}

impl Variant {
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            Variant::WebP => WEBP_EXTENSIONS,
            Variant::Jpeg => JPEG_EXTENSIONS,
        }
    }

    pub fn quality(&self) -> u8 {
        match self {
            Variant::WebP => WEBP_QUALITY,
            Variant::Jpeg => JPEG_QUALITY,
        }
    }

    pub fn skip_threshold(&self) -> u64 {
        match self {
            Variant::WebP => WEBP_SKIP_THRESHOLD,
            Variant::Jpeg => JPEG_SKIP_THRESHOLD,
        }
    }

    /// Case-insensitive extension check against this variant's set.
    pub fn accepts(&self, path: &Path) -> bool {
        lowercase_extension(path)
            .map(|ext| self.accepted_extensions().contains(&ext.as_str()))
            .unwrap_or(false)
    }

    /// WebP only skips small `.webp` files; other inputs are always converted
    /// and the dimensions play no part. JPEG skips small files that already
    /// fit the bounding box.
    pub fn should_skip(&self, path: &Path, size: u64, dimensions: (u32, u32)) -> bool {
        match self {
            Variant::WebP => {
                lowercase_extension(path).as_deref() == Some(WEBP_EXTENSION)
                    && size < self.skip_threshold()
            }
            Variant::Jpeg => {
                let (width, height) = dimensions;
                size < self.skip_threshold() && width <= MAX_DIMENSION && height <= MAX_DIMENSION
            }
        }
    }

    /// Where the optimized file is written.
    pub fn target_path(&self, path: &Path) -> Result<PathBuf> {
        match self {
            Variant::WebP => {
                if lowercase_extension(path).as_deref() == Some(WEBP_EXTENSION) {
                    return Ok(path.to_path_buf());
                }
                let stem = path
                    .file_stem()
                    .ok_or_else(|| OptimizeError::InvalidFileName(path.to_path_buf()))?;
                Ok(path.with_file_name(format!(
                    "{}.{}",
                    stem.to_string_lossy(),
                    WEBP_EXTENSION
                )))
            }
            Variant::Jpeg => Ok(path.to_path_buf()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::WebP => "WebP",
            Variant::Jpeg => "JPEG",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Variant {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "webp" => Ok(Variant::WebP),
            "jpeg" | "jpg" => Ok(Variant::Jpeg),
            _ => Err(OptimizeError::UnsupportedVariant(s.to_string())),
        }
    }
}

pub(crate) fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
