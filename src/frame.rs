//! Decoded icon frames.

use image::{RgbaImage, imageops::FilterType};

use crate::{error::IconError, size::IconSize};

/// One decoded raster image extracted from an icon container.
///
/// Frames are always RGBA and never zero-sized. They are immutable once
/// produced; resampling returns a new frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    /// Wrap an RGBA raster as a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidDimensions`] if either dimension is zero.
    pub fn new(image: RgbaImage) -> Result<Self, IconError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(IconError::InvalidDimensions {
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self { image })
    }

    /// Build a frame from tightly-packed RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidDimensions`] if the buffer length does not
    /// match `width * height * 4` or either dimension is zero.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, IconError> {
        let image = RgbaImage::from_raw(width, height, rgba)
            .ok_or(IconError::InvalidDimensions { width, height })?;
        Self::new(image)
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Frame dimensions.
    pub fn size(&self) -> IconSize {
        IconSize::new(self.width(), self.height())
    }

    /// Borrow the underlying RGBA raster.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the frame, returning its RGBA raster.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Resample to `target` with a Lanczos3 filter.
    pub(crate) fn resampled(&self, target: IconSize) -> Frame {
        let image =
            image::imageops::resize(&self.image, target.width, target.height, FilterType::Lanczos3);
        Frame { image }
    }
}
