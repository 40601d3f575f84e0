//! boardwash-core: Pure whiteboard-cleaning pipeline (sans-IO).
//!
//! Turns a photograph of a whiteboard or blackboard into dark ink on a
//! uniform light background through a fixed six-stage chain:
//! edge convolution -> amplify -> invert -> gaussian blur ->
//! sigmoid contrast -> median denoise.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! pixel buffers and configuration values. File and transport handling
//! belongs to callers such as `boardwash-cli`.

pub mod blur;
pub mod config;
pub mod convolve;
pub mod form;
pub mod invert;
pub mod kernel;
pub mod median;
pub mod raster;
pub mod sigmoid;
pub mod transform;
pub mod types;

pub use config::CleanConfig;
pub use kernel::EdgeKernel;
pub use transform::{Pipeline, Transform};
pub use types::{CleanError, Dimensions, RgbaImage};

/// Clean a decoded image with the given configuration.
///
/// Builds the six-stage [`Pipeline`], sizes the output per its bounds
/// contract (identical to the input for this chain), and runs it.
///
/// # Errors
///
/// Returns [`CleanError::InvalidConfig`] if any configuration field is
/// out of range. Execution itself does not fail for valid
/// configurations.
pub fn clean(image: &RgbaImage, config: &CleanConfig) -> Result<RgbaImage, CleanError> {
    let pipeline = Pipeline::new(config)?;
    Ok(pipeline.apply(image))
}

/// Decode raw image bytes and clean the result.
///
/// Convenience wrapper over [`raster::decode`] and [`clean`] for
/// callers holding an encoded image.
///
/// # Errors
///
/// Returns [`CleanError::EmptyInput`] for empty input,
/// [`CleanError::ImageDecode`] for undecodable bytes, and
/// [`CleanError::InvalidConfig`] for an out-of-range configuration.
pub fn clean_bytes(bytes: &[u8], config: &CleanConfig) -> Result<RgbaImage, CleanError> {
    let image = raster::decode(bytes)?;
    clean(&image, config)
}
