//! Synthesis of the edge-detection convolution kernel.
//!
//! The kernel is a Laplacian-style high-pass filter: every cell weighs
//! `1` except the center, which weighs `1 - size²`. The weights always
//! sum to exactly zero, so a flat region convolves to zero signal and
//! only local deviations (ink strokes, shadows' edges) survive.

use crate::config::CleanConfig;
use crate::types::CleanError;

/// A square edge-detection kernel with odd side length.
///
/// Weights are stored row-major. Constructed once per pipeline from
/// `edge_kernel_size` and owned by the edge-convolution stage.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeKernel {
    size: u32,
    weights: Vec<f32>,
}

impl EdgeKernel {
    /// Build the kernel for an odd positive `size`.
    ///
    /// The center cell is `1 - size²`; every other cell is `1`.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::InvalidConfig`] for zero or even `size`.
    /// An even size would have no center cell to carry the negative
    /// weight, so it is rejected rather than silently shifted.
    pub fn new(size: u32) -> Result<Self, CleanError> {
        CleanConfig::check_edge_kernel_size(size).map_err(CleanError::InvalidConfig)?;

        let center = size / 2;
        let area = size * size;
        #[allow(clippy::cast_precision_loss)]
        let center_weight = 1.0 - area as f32;

        let mut weights = vec![1.0_f32; area as usize];
        weights[(size * center + center) as usize] = center_weight;

        Ok(Self { size, weights })
    }

    /// Side length of the kernel.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center cell to the kernel's edge.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Row-major weights, `size * size` entries.
    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}
