use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Dimensions of `(width, height)` scaled to fit inside `max x max`.
///
/// Aspect ratio is preserved within rounding. Images that already fit are
/// returned unchanged; nothing is ever enlarged.
pub fn fit_inside(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let scale = (max as f64 / width as f64).min(max as f64 / height as f64);
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max);

    (scaled(width), scaled(height))
}

pub fn resize_to_fit(img: DynamicImage, max: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    let (new_width, new_height) = fit_inside(width, height, max);

    if (new_width, new_height) == (width, height) {
        img
    } else {
        img.resize_exact(new_width, new_height, FilterType::Lanczos3)
    }
}
