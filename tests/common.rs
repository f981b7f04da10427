#![allow(dead_code)]

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GALLERY_DIR: &str = "public/images/galleria";

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates `public/images/galleria` under `root` and returns its path.
pub fn create_gallery(root: &Path) -> PathBuf {
    let gallery = root.join(GALLERY_DIR);
    fs::create_dir_all(&gallery).unwrap();
    gallery
}

/// Deterministic per-pixel noise; compresses badly in every codec.
pub fn noise_image(width: u32, height: u32) -> RgbImage {
    let mut state: u32 = 0x1234_5678;
    RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };
        image::Rgb([next(), next(), next()])
    })
}

/// Slow two-axis gradient; compresses very well.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    })
}

pub fn write_jpeg(path: &Path, img: &RgbImage, quality: u8) {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(img)
        .unwrap();
    fs::write(path, buffer).unwrap();
}

pub fn write_png(path: &Path, img: &RgbImage) {
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

pub fn write_lossless_webp(path: &Path, img: &RgbImage) {
    let encoded = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height()).encode_lossless();
    fs::write(path, &*encoded).unwrap();
}

pub fn write_lossy_webp(path: &Path, img: &RgbImage, quality: f32) {
    let encoded = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height()).encode(quality);
    fs::write(path, &*encoded).unwrap();
}

pub fn write_garbage(path: &Path) {
    File::create(path)
        .unwrap()
        .write_all(b"this is not an image")
        .unwrap();
}

pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).unwrap().len()
}

pub fn dimensions_of(path: &Path) -> (u32, u32) {
    image::ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .into_dimensions()
        .unwrap()
}

pub fn format_of(path: &Path) -> ImageFormat {
    image::guess_format(&fs::read(path).unwrap()).unwrap()
}
