//! Frame encoding and export.
//!
//! [`encode_png`] and [`encode_jpeg`] turn a [`Frame`] into bytes;
//! [`save`] and [`save_with_options`] write PNG bytes (as held by an
//! [`EncodedImage`](crate::EncodedImage)) to disk, choosing the output
//! format from the destination's extension.
//!
//! # Example
//!
//! ```no_run
//! use icoview::{IconError, load_icon, save};
//!
//! let icons = load_icon("app.ico")?;
//! if let Some(largest) = icons.iter().last() {
//!     save(largest.png_bytes(), "largest.jpg")?;
//! }
//! # Ok::<(), IconError>(())
//! ```

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs,
    io::Cursor,
    path::Path,
};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage, codecs::jpeg::JpegEncoder};

use crate::{configuration::ExportOptions, error::IconError, frame::Frame};

/// Export file format, chosen by destination extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PNG. Lossless, keeps the alpha channel.
    Png,
    /// JPEG. Lossy; alpha is flattened onto a background colour.
    Jpeg,
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ExportFormat::Png => write!(f, "PNG"),
            ExportFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

impl ExportFormat {
    /// Pick the format from `path`'s extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::UnsupportedFormat`] for any extension other
    /// than `png`, `jpg` or `jpeg`, including a missing one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IconError> {
        let extension = path
            .as_ref()
            .extension()
            .map(|extension| extension.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            _ => Err(IconError::UnsupportedFormat(if extension.is_empty() {
                String::new()
            } else {
                format!(".{extension}")
            })),
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

/// Encode a frame as PNG.
///
/// The payload decodes back to exactly the frame's pixels.
///
/// # Errors
///
/// Returns [`IconError::ImageError`] if the PNG encoder fails, which does
/// not happen for an in-memory buffer and a valid frame.
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, IconError> {
    let mut buffer = Cursor::new(Vec::new());
    frame.as_image().write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Encode a frame as JPEG, flattening alpha onto `options.background`.
///
/// # Errors
///
/// Returns [`IconError::InvalidQuality`] if `options.quality` is outside
/// `1..=100`, or [`IconError::ImageError`] if the JPEG encoder fails.
pub fn encode_jpeg(frame: &Frame, options: &ExportOptions) -> Result<Vec<u8>, IconError> {
    let quality = options.checked_quality()?;
    let flattened = flatten_alpha(frame.as_image(), options.background);

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality).encode_image(&flattened)?;
    Ok(buffer)
}

/// Composite an RGBA raster over an opaque background colour.
pub(crate) fn flatten_alpha(image: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([red, green, blue, alpha]) = *image.get_pixel(x, y);
        let alpha = u32::from(alpha);
        let blend = |source: u8, base: u8| {
            ((u32::from(source) * alpha + u32::from(base) * (255 - alpha) + 127) / 255) as u8
        };
        Rgb([
            blend(red, background[0]),
            blend(green, background[1]),
            blend(blue, background[2]),
        ])
    })
}

/// Save PNG bytes to `path` with default [`ExportOptions`].
///
/// # Errors
///
/// See [`save_with_options`].
pub fn save<P: AsRef<Path>>(png_bytes: &[u8], path: P) -> Result<(), IconError> {
    save_with_options(png_bytes, path, &ExportOptions::default())
}

/// Save PNG bytes to `path`, picking the format by extension.
///
/// `.png` writes the bytes verbatim. `.jpg` and `.jpeg` decode the PNG
/// bytes and re-encode them with [`encode_jpeg`].
///
/// # Errors
///
/// Returns [`IconError::EmptyData`] if `png_bytes` is empty,
/// [`IconError::UnsupportedFormat`] for any other extension,
/// [`IconError::InvalidQuality`] for an out-of-range JPEG quality,
/// [`IconError::ImageError`] if the bytes are not decodable PNG, and
/// [`IconError::IoError`] if the file cannot be written.
pub fn save_with_options<P: AsRef<Path>>(
    png_bytes: &[u8],
    path: P,
    options: &ExportOptions,
) -> Result<(), IconError> {
    let path = path.as_ref();
    if png_bytes.is_empty() {
        return Err(IconError::EmptyData);
    }

    let format = ExportFormat::from_path(path)?;
    log::debug!("Saving {} bytes as {format} to {}", png_bytes.len(), path.display());

    match format {
        ExportFormat::Png => fs::write(path, png_bytes)?,
        ExportFormat::Jpeg => {
            let image = image::load_from_memory_with_format(png_bytes, ImageFormat::Png)?;
            let frame = Frame::new(image.into_rgba8())?;
            fs::write(path, encode_jpeg(&frame, options)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{Rgb, Rgba, RgbaImage};

    use super::{ExportFormat, flatten_alpha};
    use crate::error::IconError;

    #[test]
    fn format_from_extension() {
        assert_eq!(ExportFormat::from_path("a.png").unwrap(), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path("a.PNG").unwrap(), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path("a.jpg").unwrap(), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path("dir/a.JPEG").unwrap(), ExportFormat::Jpeg);
    }

    #[test]
    fn unsupported_extensions() {
        match ExportFormat::from_path("out.bmp") {
            Err(IconError::UnsupportedFormat(extension)) => assert_eq!(extension, ".bmp"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
        assert!(matches!(
            ExportFormat::from_path("no_extension"),
            Err(IconError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn flatten_blends_against_background() {
        let mut image = RgbaImage::new(3, 1);
        image.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        image.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
        image.put_pixel(2, 0, Rgba([255, 0, 0, 128]));

        let flat = flatten_alpha(&image, Rgb([0, 0, 255]));
        assert_eq!(*flat.get_pixel(0, 0), Rgb([10, 20, 30]));
        assert_eq!(*flat.get_pixel(1, 0), Rgb([0, 0, 255]));
        assert_eq!(*flat.get_pixel(2, 0), Rgb([128, 0, 127]));
    }
}
