//! Export configuration.
//!
//! [`ExportOptions`] is a builder carrying the settings that only matter
//! when a frame is written out as JPEG: the background colour transparent
//! pixels are flattened onto, and the encoder quality.
//!
//! # Example
//!
//! ```
//! use icoview::ExportOptions;
//! use image::Rgb;
//!
//! let options = ExportOptions::new()
//!     .with_background(Rgb([0, 0, 0]))
//!     .with_quality(80);
//! assert_eq!(options.quality, 80);
//! ```

use image::Rgb;

use crate::error::IconError;

/// Default JPEG quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Settings for [`save_with_options`](crate::save_with_options) and
/// [`encode_jpeg`](crate::encode_jpeg).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ExportOptions {
    /// Opaque colour composited under the frame before JPEG encoding.
    /// Defaults to white.
    pub background: Rgb<u8>,
    /// JPEG quality, `1..=100`. Defaults to
    /// [`DEFAULT_JPEG_QUALITY`].
    pub quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportOptions {
    /// Create options with a white background and quality 95.
    pub fn new() -> Self {
        Self {
            background: Rgb([255, 255, 255]),
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Set the JPEG background colour.
    pub fn with_background(mut self, background: Rgb<u8>) -> Self {
        self.background = background;
        self
    }

    /// Set the JPEG quality.
    ///
    /// Not validated here; [`encode_jpeg`](crate::encode_jpeg) rejects
    /// values outside `1..=100`.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Returns the quality if it is inside `1..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidQuality`] otherwise.
    pub(crate) fn checked_quality(&self) -> Result<u8, IconError> {
        if (1..=100).contains(&self.quality) {
            Ok(self.quality)
        } else {
            Err(IconError::InvalidQuality(self.quality))
        }
    }
}
