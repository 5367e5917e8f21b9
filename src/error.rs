//! Error types for the `icoview` crate.
//!
//! This module defines [`IconError`], the unified error type returned by all
//! fallible operations in the crate. Errors carry enough context (file
//! paths, indices, offending values) to render a user-facing message at the
//! presentation boundary without additional logging.

use std::{io::Error as IoError, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// The unified error type for all `icoview` operations.
///
/// Every public method that can fail returns `Result<T, IconError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IconError {
    /// The file decoded as an image, but not as an icon container.
    #[error("File at {path} is not an ICO icon (detected format: {detected})")]
    NotAnIcon {
        /// Path that was passed to [`crate::IconFile::open`].
        path: PathBuf,
        /// Name of the format that was detected instead.
        detected: String,
    },

    /// The file could not be read or no frame in it could be decoded.
    #[error("Failed to decode icon at {path}: {reason}")]
    DecodeError {
        /// Path that was passed to [`crate::IconFile::open`].
        path: PathBuf,
        /// Underlying reason the decode failed.
        reason: String,
    },

    /// A selection index was outside the loaded icon set.
    #[error("Index {index} is out of range (icon set has {len} entries)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of entries in the icon set.
        len: usize,
    },

    /// Export was attempted with no image data.
    #[error("No image data to save")]
    EmptyData,

    /// The export path has an extension other than `.png`, `.jpg` or `.jpeg`.
    #[error("Unsupported export extension: {0:?}. Use .png, .jpg or .jpeg")]
    UnsupportedFormat(String),

    /// JPEG quality outside `1..=100`.
    #[error("Invalid JPEG quality {0} (expected 1-100)")]
    InvalidQuality(u8),

    /// A raster with a zero dimension cannot become a frame.
    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Raster width.
        width: u32,
        /// Raster height.
        height: u32,
    },

    /// A `WxH` size label could not be parsed.
    #[error("Invalid icon size {0:?} (expected WxH, e.g. 32x32)")]
    InvalidSize(String),

    /// An I/O error occurred while writing an export.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate while encoding or re-decoding a frame.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}
