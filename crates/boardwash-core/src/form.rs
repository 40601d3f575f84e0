//! Parsing of untrusted textual option fields.
//!
//! A caller fronting the pipeline with a form (or any field-name to
//! text mapping) hands the raw values here and gets back a fresh
//! [`CleanConfig`] plus a map of per-field error messages. Parsing
//! never fails fast: every field is attempted independently so a form
//! can be re-rendered with all its errors at once. Field names are the
//! historical ones the original tool recognized.

use std::collections::BTreeMap;

use crate::config::CleanConfig;

/// Recognized field name for `edge_kernel_size`.
pub const FIELD_EDGE_KERNEL_SIZE: &str = "EdgeDetectionKernelSize";
/// Recognized field name for `convolution_multiplier`.
pub const FIELD_CONVOLUTION_MULTIPLIER: &str = "ConvolutionMultiplicator";
/// Recognized field name for `gaussian_blur_sigma`.
pub const FIELD_GAUSSIAN_BLUR_SIGMA: &str = "GaussianBlurSigma";
/// Recognized field name for `sigmoid_midpoint`.
pub const FIELD_SIGMOID_MIDPOINT: &str = "SigmoidMidpoint";
/// Recognized field name for `sigmoid_factor`.
pub const FIELD_SIGMOID_FACTOR: &str = "SigmoidFactor";
/// Recognized field name for `median_ksize`.
pub const FIELD_MEDIAN_KSIZE: &str = "MedianKsize";

/// Parse a map of field-name to raw text into a config and a map of
/// per-field errors.
///
/// - Keys not present leave the corresponding field at its default.
/// - Unknown keys are ignored.
/// - A value that fails to parse, or parses out of range, records one
///   error under its field name and leaves the field at its default.
///
/// The caller must not trust a field's value when an error is recorded
/// for it; whether to proceed anyway (form re-render) or abort (CLI)
/// is the caller's decision.
#[must_use]
pub fn parse_fields(
    values: &BTreeMap<String, String>,
) -> (CleanConfig, BTreeMap<String, String>) {
    let mut config = CleanConfig::default();
    let mut errors = BTreeMap::new();

    let mut record = |field: &str, message: String| {
        errors.insert(field.to_string(), message);
    };

    for (key, raw) in values {
        match key.as_str() {
            FIELD_EDGE_KERNEL_SIZE => match parse_checked(raw, CleanConfig::check_edge_kernel_size)
            {
                Ok(val) => config.edge_kernel_size = val,
                Err(message) => record(FIELD_EDGE_KERNEL_SIZE, message),
            },
            FIELD_CONVOLUTION_MULTIPLIER => match raw.parse::<f32>() {
                Ok(val) if val.is_finite() => config.convolution_multiplier = val,
                Ok(val) => record(
                    FIELD_CONVOLUTION_MULTIPLIER,
                    format!("ConvolutionMultiplicator must be finite, got {val}"),
                ),
                Err(e) => record(FIELD_CONVOLUTION_MULTIPLIER, e.to_string()),
            },
            FIELD_GAUSSIAN_BLUR_SIGMA => {
                match parse_checked(raw, CleanConfig::check_gaussian_blur_sigma) {
                    Ok(val) => config.gaussian_blur_sigma = val,
                    Err(message) => record(FIELD_GAUSSIAN_BLUR_SIGMA, message),
                }
            }
            FIELD_SIGMOID_MIDPOINT => {
                match parse_checked(raw, CleanConfig::check_sigmoid_midpoint) {
                    Ok(val) => config.sigmoid_midpoint = val,
                    Err(message) => record(FIELD_SIGMOID_MIDPOINT, message),
                }
            }
            FIELD_SIGMOID_FACTOR => match parse_checked(raw, CleanConfig::check_sigmoid_factor) {
                Ok(val) => config.sigmoid_factor = val,
                Err(message) => record(FIELD_SIGMOID_FACTOR, message),
            },
            FIELD_MEDIAN_KSIZE => match parse_checked(raw, CleanConfig::check_median_ksize) {
                Ok(val) => config.median_ksize = val,
                Err(message) => record(FIELD_MEDIAN_KSIZE, message),
            },
            _ => {}
        }
    }

    (config, errors)
}

/// Parse a value and run it through its range check, collapsing both
/// failure modes into the message string the error map carries.
fn parse_checked<T, F>(raw: &str, check: F) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(T) -> Result<(), String>,
    T: Copy,
{
    let val = raw.parse::<T>().map_err(|e| e.to_string())?;
    check(val)?;
    Ok(val)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults_and_no_errors() {
        let (config, errors) = parse_fields(&BTreeMap::new());
        assert_eq!(config, CleanConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn supplied_fields_override_defaults_only() {
        let (config, errors) = parse_fields(&fields(&[
            (FIELD_EDGE_KERNEL_SIZE, "9"),
            (FIELD_SIGMOID_MIDPOINT, "0.5"),
        ]));
        assert!(errors.is_empty());
        assert_eq!(config.edge_kernel_size, 9);
        assert!((config.sigmoid_midpoint - 0.5).abs() < f32::EPSILON);
        // Untouched fields keep their defaults.
        assert_eq!(config.median_ksize, CleanConfig::DEFAULT_MEDIAN_KSIZE);
        assert!(
            (config.convolution_multiplier - CleanConfig::DEFAULT_CONVOLUTION_MULTIPLIER).abs()
                < f32::EPSILON
        );
    }

    #[test]
    fn unparsable_value_records_one_error_and_keeps_default() {
        let (config, errors) = parse_fields(&fields(&[
            (FIELD_EDGE_KERNEL_SIZE, "15"),
            (FIELD_MEDIAN_KSIZE, "not-a-number"),
        ]));
        assert_eq!(config.edge_kernel_size, 15);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(FIELD_MEDIAN_KSIZE));
        assert_eq!(config.median_ksize, CleanConfig::DEFAULT_MEDIAN_KSIZE);
    }

    #[test]
    fn out_of_range_value_records_error_under_field_name() {
        let (config, errors) = parse_fields(&fields(&[(FIELD_SIGMOID_MIDPOINT, "1.5")]));
        assert!(errors.contains_key(FIELD_SIGMOID_MIDPOINT));
        assert!(
            (config.sigmoid_midpoint - CleanConfig::DEFAULT_SIGMOID_MIDPOINT).abs() < f32::EPSILON
        );
    }

    #[test]
    fn even_kernel_size_recorded_as_error() {
        let (_, errors) = parse_fields(&fields(&[(FIELD_EDGE_KERNEL_SIZE, "14")]));
        let message = &errors[FIELD_EDGE_KERNEL_SIZE];
        assert!(message.contains("odd"), "message was: {message}");
    }

    #[test]
    fn unknown_keys_ignored() {
        let (config, errors) = parse_fields(&fields(&[
            ("NoSuchOption", "whatever"),
            ("file", "photo.jpg"),
        ]));
        assert_eq!(config, CleanConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn errors_are_independent_per_field() {
        let (config, errors) = parse_fields(&fields(&[
            (FIELD_EDGE_KERNEL_SIZE, "abc"),
            (FIELD_GAUSSIAN_BLUR_SIGMA, "-1"),
            (FIELD_SIGMOID_FACTOR, "120"),
        ]));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(FIELD_EDGE_KERNEL_SIZE));
        assert!(errors.contains_key(FIELD_GAUSSIAN_BLUR_SIGMA));
        // The valid field still took effect.
        assert!((config.sigmoid_factor - 120.0).abs() < f32::EPSILON);
    }

    #[test]
    fn all_fields_parse_together() {
        let (config, errors) = parse_fields(&fields(&[
            (FIELD_EDGE_KERNEL_SIZE, "11"),
            (FIELD_CONVOLUTION_MULTIPLIER, "20"),
            (FIELD_GAUSSIAN_BLUR_SIGMA, "1.5"),
            (FIELD_SIGMOID_MIDPOINT, "0.6"),
            (FIELD_SIGMOID_FACTOR, "80"),
            (FIELD_MEDIAN_KSIZE, "5"),
        ]));
        assert!(errors.is_empty());
        assert_eq!(config.edge_kernel_size, 11);
        assert!((config.convolution_multiplier - 20.0).abs() < f32::EPSILON);
        assert!((config.gaussian_blur_sigma - 1.5).abs() < f32::EPSILON);
        assert!((config.sigmoid_midpoint - 0.6).abs() < f32::EPSILON);
        assert!((config.sigmoid_factor - 80.0).abs() < f32::EPSILON);
        assert_eq!(config.median_ksize, 5);
        assert!(config.validate().is_ok());
    }
}
