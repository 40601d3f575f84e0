//! Image decoding.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces the
//! RGBA buffer the pipeline operates on. This is the only place the
//! core touches an encoded representation; how the bytes were obtained
//! (file, upload, test fixture) is the caller's business.

use crate::types::{CleanError, RgbaImage};

/// Decode raw image bytes into an RGBA buffer.
///
/// # Errors
///
/// Returns [`CleanError::EmptyInput`] if `bytes` is empty.
/// Returns [`CleanError::ImageDecode`] if the format is unrecognized
/// or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, CleanError> {
    if bytes.is_empty() {
        return Err(CleanError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        assert!(matches!(decode(&[]), Err(CleanError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_return_decode_error() {
        let result = decode(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(CleanError::ImageDecode(_))));
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn valid_png_round_trips_pixels() {
        let img = RgbaImage::from_fn(3, 2, |x, y| {
            image::Rgba([(x * 80) as u8, (y * 100) as u8, 7, 255])
        });
        let decoded = decode(&png_bytes(&img)).unwrap();
        assert_eq!(decoded, img);
    }
}
