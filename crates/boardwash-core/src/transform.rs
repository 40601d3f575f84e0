//! The transform chain: a closed set of single-purpose image
//! operations and the [`Pipeline`] that runs them in fixed order.
//!
//! The transform set is small and will not grow per-user, so it is a
//! tagged enum executed by a plain interpreter loop rather than an
//! open trait-object plugin surface. Each variant is stateless given
//! its parameters: applying it twice to the same input produces
//! byte-identical output.

use crate::config::CleanConfig;
use crate::kernel::EdgeKernel;
use crate::types::{CleanError, Dimensions, RgbaImage};

/// One stage of the cleaning chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Laplacian-style edge detection with edge-extension boundaries.
    EdgeConvolve(EdgeKernel),
    /// Uniform per-channel multiply-and-clamp (1x1 convolution).
    Amplify(f32),
    /// Per-channel photometric negation.
    Invert,
    /// Isotropic gaussian smoothing; sigma 0 is the identity.
    GaussianBlur(f32),
    /// S-curve contrast remap around a midpoint.
    SigmoidContrast {
        /// Pivot on the normalized [0, 1] sample scale.
        midpoint: f32,
        /// Steepness of the curve.
        factor: f32,
    },
    /// Sliding-window median despeckle with border replication.
    MedianDenoise(u32),
}

impl Transform {
    /// Human-readable stage name for reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EdgeConvolve(_) => "edge convolve",
            Self::Amplify(_) => "amplify",
            Self::Invert => "invert",
            Self::GaussianBlur(_) => "gaussian blur",
            Self::SigmoidContrast { .. } => "sigmoid contrast",
            Self::MedianDenoise(_) => "median denoise",
        }
    }

    /// The output rectangle this transform produces for a given input.
    ///
    /// Every operation in the set extends or replicates at borders
    /// instead of shrinking, so each one is size-preserving. Kept as a
    /// per-transform function so [`Pipeline::bounds`] composes it; a
    /// future size-changing transform would only override its own arm.
    #[must_use]
    pub const fn bounds(&self, input: Dimensions) -> Dimensions {
        match self {
            Self::EdgeConvolve(_)
            | Self::Amplify(_)
            | Self::Invert
            | Self::GaussianBlur(_)
            | Self::SigmoidContrast { .. }
            | Self::MedianDenoise(_) => input,
        }
    }

    /// Run this transform over an input image.
    #[must_use = "returns the transformed image"]
    pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
        match self {
            Self::EdgeConvolve(kernel) => crate::convolve::edge_convolve(image, kernel),
            Self::Amplify(factor) => crate::convolve::amplify(image, *factor),
            Self::Invert => crate::invert::invert(image),
            Self::GaussianBlur(sigma) => crate::blur::gaussian_blur(image, *sigma),
            Self::SigmoidContrast { midpoint, factor } => {
                crate::sigmoid::sigmoid_contrast(image, *midpoint, *factor)
            }
            Self::MedianDenoise(ksize) => crate::median::median_denoise(image, *ksize),
        }
    }
}

/// The fixed six-stage cleaning chain, built once from a validated
/// [`CleanConfig`] and immutable thereafter.
///
/// Construction synthesizes the edge kernel and instantiates every
/// stage; invocations share no mutable state, so independent pipelines
/// (or the same pipeline from multiple threads) may run concurrently.
#[derive(Debug, Clone)]
pub struct Pipeline {
    transforms: Vec<Transform>,
}

impl Pipeline {
    /// Build the chain from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::InvalidConfig`] if any field is outside
    /// its documented range (see [`CleanConfig::validate`]).
    pub fn new(config: &CleanConfig) -> Result<Self, CleanError> {
        config.validate()?;
        let kernel = EdgeKernel::new(config.edge_kernel_size)?;

        Ok(Self {
            transforms: vec![
                Transform::EdgeConvolve(kernel),
                Transform::Amplify(config.convolution_multiplier),
                Transform::Invert,
                Transform::GaussianBlur(config.gaussian_blur_sigma),
                Transform::SigmoidContrast {
                    midpoint: config.sigmoid_midpoint,
                    factor: config.sigmoid_factor,
                },
                Transform::MedianDenoise(config.median_ksize),
            ],
        })
    }

    /// The ordered transform chain.
    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// The output rectangle produced for a given input rectangle,
    /// composed across the chain. For this fixed chain the result
    /// always equals the input.
    #[must_use]
    pub fn bounds(&self, input: Dimensions) -> Dimensions {
        self.transforms
            .iter()
            .fold(input, |dims, transform| transform.bounds(dims))
    }

    /// Run the chain, feeding each stage's output into the next.
    #[must_use = "returns the cleaned image"]
    pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
        let mut current = image.clone();
        for transform in &self.transforms {
            current = transform.apply(&current);
        }
        current
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn small_config() -> CleanConfig {
        // Smaller kernel than the default keeps tests fast.
        CleanConfig {
            edge_kernel_size: 5,
            ..CleanConfig::default()
        }
    }

    #[test]
    fn chain_has_six_stages_in_order() {
        let pipeline = Pipeline::new(&small_config()).unwrap();
        let names: Vec<&str> = pipeline.transforms().iter().map(Transform::name).collect();
        assert_eq!(
            names,
            [
                "edge convolve",
                "amplify",
                "invert",
                "gaussian blur",
                "sigmoid contrast",
                "median denoise",
            ],
        );
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = CleanConfig {
            edge_kernel_size: 2,
            ..CleanConfig::default()
        };
        assert!(matches!(
            Pipeline::new(&config),
            Err(CleanError::InvalidConfig(_)),
        ));
    }

    #[test]
    fn bounds_equal_input_bounds() {
        let pipeline = Pipeline::new(&small_config()).unwrap();
        for (w, h) in [(1, 1), (17, 31), (100, 100), (640, 480)] {
            let dims = Dimensions {
                width: w,
                height: h,
            };
            assert_eq!(pipeline.bounds(dims), dims);
        }
    }

    #[test]
    fn apply_preserves_dimensions() {
        let pipeline = Pipeline::new(&small_config()).unwrap();
        let img = RgbaImage::new(20, 14);
        let out = pipeline.apply(&img);
        assert_eq!(Dimensions::of(&out), Dimensions::of(&img));
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn apply_is_deterministic() {
        let pipeline = Pipeline::new(&small_config()).unwrap();
        let img = RgbaImage::from_fn(16, 16, |x, y| {
            image::Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255])
        });
        assert_eq!(pipeline.apply(&img), pipeline.apply(&img));
    }

    #[test]
    fn uniform_input_produces_uniform_output() {
        // No edges means no signal to amplify; every later stage acts
        // on a flat field and must not introduce texture.
        let pipeline = Pipeline::new(&small_config()).unwrap();
        let img = RgbaImage::from_fn(100, 100, |_, _| image::Rgba([128, 128, 128, 255]));
        let out = pipeline.apply(&img);

        let first = out.get_pixel(0, 0);
        for pixel in out.pixels() {
            assert_eq!(pixel, first, "output should be uniform");
        }
    }

    #[test]
    fn uniform_input_comes_out_white() {
        // Flat field -> zero edge response -> inversion lands at full
        // white -> sigmoid keeps it saturated.
        let pipeline = Pipeline::new(&small_config()).unwrap();
        let img = RgbaImage::from_fn(32, 32, |_, _| image::Rgba([90, 90, 90, 255]));
        let out = pipeline.apply(&img);
        assert_eq!(&out.get_pixel(16, 16).0[..3], &[255, 255, 255]);
    }

    #[test]
    fn line_becomes_ink_on_white_background() {
        // A sharp dark stroke on a flat background: after the chain the
        // background is close to white and the stroke region is darker.
        // The stroke is three pixels wide, matching real pen width at
        // photo resolution; a single-pixel line would be thinned below
        // the sigmoid midpoint by the default sigma-3 blur.
        let pipeline = Pipeline::new(&small_config()).unwrap();
        let img = RgbaImage::from_fn(64, 64, |_, y| {
            if (31..=33).contains(&y) {
                image::Rgba([30, 30, 30, 255])
            } else {
                image::Rgba([180, 180, 180, 255])
            }
        });
        let out = pipeline.apply(&img);

        let background = out.get_pixel(32, 8).0[0];
        let line = out.get_pixel(32, 32).0[0];
        assert!(
            background >= 250,
            "background should be near white, got {background}"
        );
        assert!(
            line < 64,
            "stroke should read as ink, got {line}"
        );
        assert!(
            line < background,
            "stroke ({line}) should be darker than background ({background})"
        );
    }
}
