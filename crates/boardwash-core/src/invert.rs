//! Photometric negation.
//!
//! After edge amplification the image is bright ink on a black field;
//! inversion flips it to the dark-ink-on-white orientation the rest of
//! the chain (blur, sigmoid, median) works in.

use crate::types::RgbaImage;

/// Negate every color channel: `255 - v`. Alpha is preserved.
///
/// Applying it twice returns the original image.
#[must_use = "returns the inverted image"]
pub fn invert(image: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        image::Rgba([
            255 - pixel.0[0],
            255 - pixel.0[1],
            255 - pixel.0[2],
            pixel.0[3],
        ])
    })
}
