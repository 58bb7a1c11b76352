use image::imageops::FilterType;
use image::{load_from_memory, DynamicImage};
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};
use std::error::Error;
use tempfile::NamedTempFile;

/// Printed edge of the seal on the page.
pub(crate) const SEAL_SIZE_MM: f64 = 15.0;
/// Raster edge of the embedded seal in pixels.
pub(crate) const SEAL_PX: u32 = 177;
/// DPI at which `SEAL_PX` pixels span `SEAL_SIZE_MM` millimetres.
pub(crate) const SEAL_DPI: f64 = SEAL_PX as f64 * 25.4 / SEAL_SIZE_MM;

const SEAL_OPACITY: f64 = 0.6;

/// Turns the raw seal bytes into a temporary PNG ready for embedding:
/// decode, scale to the layout size, fade to 60% over a white background
/// and flatten to RGB.
///
/// The caller must keep the returned handle alive until document rendering
/// finishes; dropping it deletes the file.
pub(crate) fn prepare_seal(bytes: &[u8]) -> Result<NamedTempFile, Box<dyn Error>> {
    let img = load_from_memory(bytes)?;
    let resized = img.resize_exact(SEAL_PX, SEAL_PX, FilterType::Lanczos3);

    // The PDF layer has no graphics-state opacity, so the fade is baked
    // into the raster: scale the alpha channel, then flatten over white.
    let mut rgba = resized.to_rgba8();
    for px in rgba.pixels_mut() {
        px.0[3] = (f64::from(px.0[3]) * SEAL_OPACITY).round() as u8;
    }
    let mut background =
        image::RgbaImage::from_pixel(SEAL_PX, SEAL_PX, image::Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut background, &rgba, 0, 0);
    let raw = DynamicImage::ImageRgba8(background).to_rgb8().into_raw();

    let mut tmp = NamedTempFile::new()?;
    {
        let file = tmp.as_file_mut();
        let mut encoder = PngEncoder::new(file, SEAL_PX, SEAL_PX);
        encoder.set_color(PngColorType::Rgb);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raw)?;
    }
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_png() -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            4,
            4,
            image::Rgba([0, 128, 0, 255]),
        ));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn produces_a_nonempty_temp_png() {
        let tmp = prepare_seal(&sample_png()).unwrap();
        let meta = std::fs::metadata(tmp.path()).unwrap();
        assert!(meta.len() > 0);

        // The written file must itself decode as an image.
        let bytes = std::fs::read(tmp.path()).unwrap();
        let decoded = load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), SEAL_PX);
        assert_eq!(decoded.height(), SEAL_PX);
    }

    #[test]
    fn garbage_bytes_are_an_error_not_a_panic() {
        assert!(prepare_seal(b"definitely not an image").is_err());
    }
}
