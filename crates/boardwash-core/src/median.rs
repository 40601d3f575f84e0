//! Median despeckle pass, the final stage of the chain.
//!
//! Wraps [`imageproc::filter::median_filter`], which computes a sliding
//! per-channel median and replicates edge pixels at the borders, so the
//! output keeps the input's dimensions. The sigmoid stage leaves
//! isolated salt-and-pepper speckles where sensor noise crossed the
//! contrast threshold; a small median window removes them without
//! eroding strokes.

use crate::types::RgbaImage;

/// Apply a `ksize` x `ksize` median filter per channel.
///
/// `ksize` must be odd; the window radius is `(ksize - 1) / 2`.
/// Validation happens at pipeline construction, so this function
/// assumes a well-formed window size.
#[must_use = "returns the denoised image"]
pub fn median_denoise(image: &RgbaImage, ksize: u32) -> RgbaImage {
    let radius = (ksize - 1) / 2;
    if radius == 0 {
        return image.clone();
    }
    imageproc::filter::median_filter(image, radius, radius)
}
