//! Spatial convolution stages: edge detection and amplification.
//!
//! [`edge_convolve`] applies the [`EdgeKernel`] with edge-extension
//! boundary handling: coordinates outside the image are clamped to the
//! nearest border pixel, so the output keeps the input's dimensions and
//! border pixels see a flat extension of the image rather than a black
//! frame. No normalization and no offset are applied; results are
//! clamped to the sample range.
//!
//! [`amplify`] is the degenerate 1x1 convolution that follows: a
//! uniform per-channel multiply-and-clamp. On the edge map it stretches
//! faint strokes toward full intensity while flat regions stay at zero.
//!
//! Both stages operate on R/G/B and carry the center pixel's alpha
//! through unchanged.

use crate::kernel::EdgeKernel;
use crate::types::RgbaImage;

/// Convolve the image with the edge-detection kernel.
///
/// A flat region convolves to zero (the kernel weights sum to zero), so
/// the result is black background with bright responses where the image
/// deviates locally — handwriting, board edges, hard shadows.
#[must_use = "returns the edge-response image"]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn edge_convolve(image: &RgbaImage, kernel: &EdgeKernel) -> RgbaImage {
    let (width, height) = (image.width(), image.height());
    let radius = i64::from(kernel.radius());
    let size = i64::from(kernel.size());

    RgbaImage::from_fn(width, height, |x, y| {
        let mut sum = [0.0_f32; 3];
        for ky in 0..size {
            for kx in 0..size {
                let weight = kernel.weights()[(size * ky + kx) as usize];
                // Edge extension: clamp out-of-bounds taps to the border.
                let sx = (i64::from(x) + kx - radius).clamp(0, i64::from(width) - 1) as u32;
                let sy = (i64::from(y) + ky - radius).clamp(0, i64::from(height) - 1) as u32;
                let pixel = image.get_pixel(sx, sy);
                for (acc, &sample) in sum.iter_mut().zip(&pixel.0[..3]) {
                    *acc += weight * f32::from(sample);
                }
            }
        }
        let alpha = image.get_pixel(x, y).0[3];
        image::Rgba([
            sum[0].clamp(0.0, 255.0) as u8,
            sum[1].clamp(0.0, 255.0) as u8,
            sum[2].clamp(0.0, 255.0) as u8,
            alpha,
        ])
    })
}

/// Multiply every color channel by `factor`, clamping to the sample range.
///
/// Equivalent to convolving with the single-tap kernel `[factor]`.
#[must_use = "returns the amplified image"]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn amplify(image: &RgbaImage, factor: f32) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        image::Rgba([
            (factor * f32::from(pixel.0[0])).clamp(0.0, 255.0) as u8,
            (factor * f32::from(pixel.0[1])).clamp(0.0, 255.0) as u8,
            (factor * f32::from(pixel.0[2])).clamp(0.0, 255.0) as u8,
            pixel.0[3],
        ])
    })
}
