/// Gallery location, relative to the current working directory
pub const DEFAULT_GALLERY_DIR: &str = "public/images/galleria";

/// Bounding box both variants fit images into
pub const MAX_DIMENSION: u32 = 1080;

pub const WEBP_QUALITY: u8 = 70;
pub const JPEG_QUALITY: u8 = 80;

pub const KIB: u64 = 1024;

/// `.webp` files below this size are left alone by the WebP variant
pub const WEBP_SKIP_THRESHOLD: u64 = 100 * KIB;

/// Files below this size that already fit the bounding box are left alone by
/// the JPEG variant
pub const JPEG_SKIP_THRESHOLD: u64 = 150 * KIB;

pub const WEBP_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const WEBP_EXTENSION: &str = "webp";
pub const TEMP_SUFFIX: &str = ".tmp";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const SKIP_PREFIX: &str = "⏭️ ";
pub const ERROR_PREFIX: &str = "❌";
pub const WARNING_PREFIX: &str = "⚠️ ";
pub const INFO_PREFIX: &str = "📋";
