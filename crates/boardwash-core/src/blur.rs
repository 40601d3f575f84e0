//! Gaussian smoothing of the inverted edge image.
//!
//! Wraps [`imageproc::filter::gaussian_blur_f32`], which only accepts
//! single-channel images, so the RGBA image is split into four
//! channels, blurred independently, and reassembled. Gaussian blur is
//! a linear per-channel operation, so this is equivalent to blurring
//! in color space. The kernel radius follows imageproc's truncation
//! rule derived from sigma.

use image::GrayImage;

use crate::types::RgbaImage;

/// Apply gaussian blur with the given standard deviation.
///
/// `sigma <= 0` returns the image unchanged: zero means "no blur" in
/// the configuration, and the underlying imageproc function panics on
/// non-positive sigma.
#[must_use = "returns the blurred image"]
pub fn gaussian_blur(image: &RgbaImage, sigma: f32) -> RgbaImage {
    if sigma <= 0.0 {
        return image.clone();
    }

    let (w, h) = (image.width(), image.height());

    let channels: [GrayImage; 4] = std::array::from_fn(|c| {
        GrayImage::from_fn(w, h, |x, y| image::Luma([image.get_pixel(x, y).0[c]]))
    });

    let blurred: [GrayImage; 4] =
        std::array::from_fn(|c| imageproc::filter::gaussian_blur_f32(&channels[c], sigma));

    RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([
            blurred[0].get_pixel(x, y).0[0],
            blurred[1].get_pixel(x, y).0[0],
            blurred[2].get_pixel(x, y).0[0],
            blurred[3].get_pixel(x, y).0[0],
        ])
    })
}
