//! boardwash: clean a whiteboard/blackboard photo from the command line.
//!
//! Reads a source image, runs the cleaning pipeline with configurable
//! parameters, and writes the result. JPEG destinations are encoded at
//! quality 99; other formats go through the `image` crate's
//! extension-based encoder.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin boardwash -- [OPTIONS] <SRC> <DST>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use boardwash_core::{CleanConfig, Pipeline};
use clap::Parser;

/// Clean up a photo of a whiteboard or blackboard.
///
/// Removes uneven lighting, shadows, and background texture so the
/// handwriting stands out on a uniform light background.
#[derive(Parser)]
#[command(name = "boardwash", version)]
struct Cli {
    /// Path to the source photo (PNG, JPEG, BMP, WebP).
    src: PathBuf,

    /// Path of the cleaned image to write.
    dst: PathBuf,

    /// Edge-detection kernel side length (odd).
    #[arg(long, default_value_t = CleanConfig::DEFAULT_EDGE_KERNEL_SIZE)]
    edge_kernel_size: u32,

    /// Amplification factor applied after edge detection.
    #[arg(long, default_value_t = CleanConfig::DEFAULT_CONVOLUTION_MULTIPLIER)]
    convolution_multiplier: f32,

    /// Gaussian blur sigma (0 disables the blur).
    #[arg(long, default_value_t = CleanConfig::DEFAULT_GAUSSIAN_BLUR_SIGMA)]
    gaussian_blur_sigma: f32,

    /// Sigmoid contrast midpoint (0 to 1).
    #[arg(long, default_value_t = CleanConfig::DEFAULT_SIGMOID_MIDPOINT)]
    sigmoid_midpoint: f32,

    /// Sigmoid contrast steepness.
    #[arg(long, default_value_t = CleanConfig::DEFAULT_SIGMOID_FACTOR)]
    sigmoid_factor: f32,

    /// Median denoise window size (odd, at least 3).
    #[arg(long, default_value_t = CleanConfig::DEFAULT_MEDIAN_KSIZE)]
    median_ksize: u32,

    /// Full pipeline config as a JSON string.
    ///
    /// When provided, all other pipeline parameter flags are ignored.
    /// The JSON must be a valid `CleanConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,

    /// Print a per-stage timing report.
    #[arg(long)]
    timings: bool,
}

/// Build a [`CleanConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and all
/// individual parameter flags are ignored. Otherwise, a config is
/// assembled from the individual flags.
fn config_from_cli(cli: &Cli) -> Result<CleanConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(CleanConfig {
        edge_kernel_size: cli.edge_kernel_size,
        convolution_multiplier: cli.convolution_multiplier,
        gaussian_blur_sigma: cli.gaussian_blur_sigma,
        sigmoid_midpoint: cli.sigmoid_midpoint,
        sigmoid_factor: cli.sigmoid_factor,
        median_ksize: cli.median_ksize,
    })
}

/// Write the cleaned image to `dst`.
///
/// JPEG destinations are encoded at quality 99 after dropping the
/// alpha channel (JPEG has none); everything else dispatches on the
/// file extension via the `image` crate.
fn save_image(image: &boardwash_core::RgbaImage, dst: &Path) -> Result<(), String> {
    let is_jpeg = dst
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));

    if is_jpeg {
        let file = std::fs::File::create(dst)
            .map_err(|e| format!("Error creating {}: {e}", dst.display()))?;
        let writer = std::io::BufWriter::new(file);
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, 99);
        let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        rgb.write_with_encoder(encoder)
            .map_err(|e| format!("Error encoding {}: {e}", dst.display()))
    } else {
        image
            .save(dst)
            .map_err(|e| format!("Error writing {}: {e}", dst.display()))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match std::fs::read(&cli.src) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.src.display());
            return ExitCode::FAILURE;
        }
    };

    let source = match boardwash_core::raster::decode(&bytes) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Error decoding {}: {e}", cli.src.display());
            return ExitCode::FAILURE;
        }
    };

    let pipeline = match Pipeline::new(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Cleaning {} ({}x{})",
        cli.src.display(),
        source.width(),
        source.height(),
    );

    let start = Instant::now();
    let cleaned = if cli.timings {
        run_with_timings(&pipeline, &source)
    } else {
        pipeline.apply(&source)
    };
    let total = start.elapsed();

    if let Err(msg) = save_image(&cleaned, &cli.dst) {
        eprintln!("{msg}");
        return ExitCode::FAILURE;
    }

    eprintln!(
        "Wrote {} in {:.3}ms",
        cli.dst.display(),
        total.as_secs_f64() * 1000.0,
    );
    ExitCode::SUCCESS
}

/// Run the chain stage by stage, printing per-stage durations.
fn run_with_timings(
    pipeline: &Pipeline,
    source: &boardwash_core::RgbaImage,
) -> boardwash_core::RgbaImage {
    println!("{:<20} {:>12}", "Stage", "Duration (ms)");
    println!("{}", "-".repeat(34));

    let mut current = source.clone();
    for transform in pipeline.transforms() {
        let start = Instant::now();
        current = transform.apply(&current);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        println!("{:<20} {elapsed:>12.3}", transform.name());
    }
    current
}
