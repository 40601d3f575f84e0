//! Pipeline configuration and its validation.
//!
//! [`CleanConfig`] carries the six numeric parameters that drive the
//! cleaning chain. Every field has an independent default exposed as a
//! `DEFAULT_*` associated const so CLI flag defaults reference the same
//! values and cannot silently diverge.

use serde::{Deserialize, Serialize};

use crate::types::CleanError;

/// Configuration for the whiteboard cleaning pipeline.
///
/// All parameters default to the values the original tool shipped with.
/// Fields are public; [`validate`](Self::validate) enforces the range
/// invariants and is called by `Pipeline::new`, so an out-of-range
/// config cannot reach the transform chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Side length of the square edge-detection kernel.
    /// Must be an odd positive integer.
    pub edge_kernel_size: u32,

    /// Amplification factor applied after edge detection, as a
    /// degenerate 1x1 convolution. Any real value is accepted.
    pub convolution_multiplier: f32,

    /// Standard deviation of the gaussian smoothing pass.
    /// Must be non-negative; zero disables the blur.
    pub gaussian_blur_sigma: f32,

    /// Contrast-remap midpoint on the normalized [0, 1] sample scale.
    pub sigmoid_midpoint: f32,

    /// Contrast-remap steepness. Must be positive.
    pub sigmoid_factor: f32,

    /// Window side length for the median denoise pass.
    /// Must be an odd integer of at least 3.
    pub median_ksize: u32,
}

impl CleanConfig {
    /// Default edge-detection kernel side length.
    pub const DEFAULT_EDGE_KERNEL_SIZE: u32 = 15;

    /// Default post-edge amplification factor.
    pub const DEFAULT_CONVOLUTION_MULTIPLIER: f32 = 15.0;

    /// Default gaussian blur sigma.
    pub const DEFAULT_GAUSSIAN_BLUR_SIGMA: f32 = 3.0;

    /// Default sigmoid contrast midpoint.
    pub const DEFAULT_SIGMOID_MIDPOINT: f32 = 0.75;

    /// Default sigmoid contrast steepness.
    pub const DEFAULT_SIGMOID_FACTOR: f32 = 100.0;

    /// Default median denoise window size.
    pub const DEFAULT_MEDIAN_KSIZE: u32 = 3;

    /// Check every field against its documented valid range.
    ///
    /// Reports the first offending field by name. Range checks for the
    /// individual fields are exposed separately (e.g.
    /// [`check_edge_kernel_size`](Self::check_edge_kernel_size)) so the
    /// form parser can attribute errors per field.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::InvalidConfig`] naming the first field
    /// whose value is out of range.
    pub fn validate(&self) -> Result<(), CleanError> {
        Self::check_edge_kernel_size(self.edge_kernel_size)
            .and_then(|()| Self::check_gaussian_blur_sigma(self.gaussian_blur_sigma))
            .and_then(|()| Self::check_sigmoid_midpoint(self.sigmoid_midpoint))
            .and_then(|()| Self::check_sigmoid_factor(self.sigmoid_factor))
            .and_then(|()| Self::check_median_ksize(self.median_ksize))
            .map_err(CleanError::InvalidConfig)
    }

    /// Range check for `edge_kernel_size`: odd and at least 1.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message naming the field.
    pub fn check_edge_kernel_size(size: u32) -> Result<(), String> {
        if size == 0 || size % 2 == 0 {
            return Err(format!(
                "EdgeDetectionKernelSize must be an odd positive integer, got {size}"
            ));
        }
        Ok(())
    }

    /// Range check for `gaussian_blur_sigma`: finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message naming the field.
    pub fn check_gaussian_blur_sigma(sigma: f32) -> Result<(), String> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(format!(
                "GaussianBlurSigma must be a non-negative number, got {sigma}"
            ));
        }
        Ok(())
    }

    /// Range check for `sigmoid_midpoint`: within [0, 1].
    ///
    /// # Errors
    ///
    /// Returns a human-readable message naming the field.
    pub fn check_sigmoid_midpoint(midpoint: f32) -> Result<(), String> {
        if !midpoint.is_finite() || !(0.0..=1.0).contains(&midpoint) {
            return Err(format!(
                "SigmoidMidpoint must be between 0 and 1, got {midpoint}"
            ));
        }
        Ok(())
    }

    /// Range check for `sigmoid_factor`: finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message naming the field.
    pub fn check_sigmoid_factor(factor: f32) -> Result<(), String> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(format!("SigmoidFactor must be positive, got {factor}"));
        }
        Ok(())
    }

    /// Range check for `median_ksize`: odd and at least 3.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message naming the field.
    pub fn check_median_ksize(ksize: u32) -> Result<(), String> {
        if ksize < 3 || ksize % 2 == 0 {
            return Err(format!(
                "MedianKsize must be an odd integer of at least 3, got {ksize}"
            ));
        }
        Ok(())
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            edge_kernel_size: Self::DEFAULT_EDGE_KERNEL_SIZE,
            convolution_multiplier: Self::DEFAULT_CONVOLUTION_MULTIPLIER,
            gaussian_blur_sigma: Self::DEFAULT_GAUSSIAN_BLUR_SIGMA,
            sigmoid_midpoint: Self::DEFAULT_SIGMOID_MIDPOINT,
            sigmoid_factor: Self::DEFAULT_SIGMOID_FACTOR,
            median_ksize: Self::DEFAULT_MEDIAN_KSIZE,
        }
    }
}
