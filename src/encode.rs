use crate::error::{OptimizeError, Result};
use crate::variant::Variant;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::borrow::Cow;

/// Encodes `img` in the output format of `variant` at that variant's quality.
pub fn encode_for_variant(img: &DynamicImage, variant: Variant) -> Result<Vec<u8>> {
    match variant {
        Variant::WebP => encode_webp(img, variant.quality()),
        Variant::Jpeg => encode_jpeg(img, variant.quality()),
    }
}

/// Lossy WebP. libwebp only takes 8-bit RGB or RGBA, so anything else is
/// converted first.
pub fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let source: Cow<'_, DynamicImage> = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(img),
        _ if img.color().has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    };

    let encoder = webp::Encoder::from_image(&source)
        .map_err(|e| OptimizeError::WebpEncoding(e.to_string()))?;
    Ok(encoder.encode(quality as f32).to_vec())
}

/// Baseline JPEG. Alpha is dropped.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let source: Cow<'_, DynamicImage> = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => Cow::Borrowed(img),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    };

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    source.write_with_encoder(encoder)?;
    Ok(buffer)
}
