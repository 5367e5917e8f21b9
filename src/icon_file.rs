//! Core [`IconFile`] implementation.
//!
//! `IconFile` is the frame extractor. Opening a file reads the icon
//! directory, decodes every entry it can, and remembers which sizes the
//! directory declared. Reconciling those two views into an [`IconSet`] is
//! left to [`IconFile::icon_set`].

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use ico::{IconDir, IconDirEntry};
use image::ImageFormat;

use crate::{
    error::IconError,
    frame::Frame,
    icon_set::IconSet,
    metadata::IconMetadata,
    reconcile::reconcile,
    size::IconSize,
    validation::{ValidationReport, validate_icon},
};

/// An opened icon container.
///
/// Created via [`IconFile::open`]. Holds the decoded frames (one per
/// distinct size, first decoded wins) and the sizes the container's
/// directory declares.
///
/// # Example
///
/// ```no_run
/// use icoview::{IconError, IconFile};
///
/// let icon = IconFile::open("app.ico")?;
/// for image in &icon.icon_set()? {
///     println!("{} ({} bytes)", image.label(), image.byte_length());
/// }
/// # Ok::<(), IconError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IconFile {
    /// Path the file was opened from.
    pub(crate) path: PathBuf,
    /// Decoded frames in directory order, deduplicated by size.
    pub(crate) frames: Vec<Frame>,
    /// Index into `frames` of the largest frame by area (first seen on ties).
    pub(crate) largest: Option<usize>,
    /// Every directory entry's declared size in file order, duplicates
    /// included.
    pub(crate) declared: Vec<IconSize>,
    /// Whether the directory itself could be read.
    pub(crate) directory_read: bool,
    /// Declared sizes whose entry failed to decode or held a frame of a
    /// different size.
    pub(crate) undecodable: Vec<IconSize>,
    /// Decoded frames dropped because an earlier frame had the same size.
    pub(crate) duplicates: Vec<IconSize>,
}

impl IconFile {
    /// Open an icon container and decode its frames.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::NotAnIcon`] if the content is a recognised image
    /// format other than ICO, and [`IconError::DecodeError`] if the file
    /// cannot be read, its format is not recognised, or no frame at all can
    /// be decoded from it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IconError> {
        let path = path.as_ref().to_path_buf();
        log::debug!("Opening icon file: {}", path.display());

        let bytes = fs::read(&path).map_err(|error| IconError::DecodeError {
            path: path.clone(),
            reason: error.to_string(),
        })?;

        let format = image::guess_format(&bytes).map_err(|error| IconError::DecodeError {
            path: path.clone(),
            reason: error.to_string(),
        })?;
        if format != ImageFormat::Ico {
            return Err(IconError::NotAnIcon {
                path,
                detected: format!("{format:?}"),
            });
        }

        let mut icon = IconFile {
            path,
            frames: Vec::new(),
            largest: None,
            declared: Vec::new(),
            directory_read: false,
            undecodable: Vec::new(),
            duplicates: Vec::new(),
        };

        match IconDir::read(Cursor::new(&bytes)) {
            Ok(directory) => {
                icon.directory_read = true;
                for (index, entry) in directory.entries().iter().enumerate() {
                    let declared = declared_size(&bytes, index, entry);
                    icon.declared.push(declared);

                    match decode_entry(entry) {
                        Ok(frame) if frame.size() == declared => icon.push_frame(frame),
                        Ok(frame) => {
                            log::debug!(
                                "Directory entry {index} declares {declared} but holds {}",
                                frame.size()
                            );
                            icon.undecodable.push(declared);
                            icon.push_frame(frame);
                        }
                        Err(reason) => {
                            log::debug!(
                                "Directory entry {index} ({declared}) is undecodable: {reason}"
                            );
                            icon.undecodable.push(declared);
                        }
                    }
                }
                log::debug!(
                    "Directory declares {} entries, {} decoded",
                    icon.declared.len(),
                    icon.frames.len()
                );
                if icon.declared.is_empty() {
                    return Ok(icon);
                }
            }
            Err(error) => {
                log::debug!("Icon directory could not be read: {error}");
            }
        }

        if icon.frames.is_empty() {
            let frame = decode_top_level(&bytes).map_err(|reason| IconError::DecodeError {
                path: icon.path.clone(),
                reason,
            })?;
            log::debug!("Falling back to the top-level image ({})", frame.size());
            icon.push_frame(frame);
        }

        Ok(icon)
    }

    fn push_frame(&mut self, frame: Frame) {
        let size = frame.size();
        if self.frames.iter().any(|kept| kept.size() == size) {
            self.duplicates.push(size);
            return;
        }

        let is_larger = self
            .largest_frame()
            .is_none_or(|largest| size.area() > largest.size().area());
        self.frames.push(frame);
        if is_larger {
            self.largest = Some(self.frames.len() - 1);
        }
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded frames, one per distinct size, in decode order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Decoded frame with exactly `size`, if one exists.
    pub fn frame(&self, size: IconSize) -> Option<&Frame> {
        self.frames.iter().find(|frame| frame.size() == size)
    }

    /// The largest decoded frame by pixel area; the synthesis source.
    pub fn largest_frame(&self) -> Option<&Frame> {
        self.largest.and_then(|index| self.frames.get(index))
    }

    /// Sizes declared by the container's directory, in file order.
    ///
    /// Empty when the directory could not be read.
    pub fn declared_sizes(&self) -> &[IconSize] {
        &self.declared
    }

    /// Sizes of the decoded frames, in decode order.
    pub fn decoded_sizes(&self) -> Vec<IconSize> {
        self.frames.iter().map(Frame::size).collect()
    }

    /// The sizes an [`IconSet`] built from this file will contain, sorted
    /// and deduplicated.
    ///
    /// These are the declared sizes when the directory declares any, and
    /// the decoded sizes otherwise.
    pub fn target_sizes(&self) -> Vec<IconSize> {
        let mut sizes = if self.declared.is_empty() {
            self.decoded_sizes()
        } else {
            self.declared.clone()
        };
        sizes.sort();
        sizes.dedup();
        sizes
    }

    /// Summary of declared, decoded and missing sizes.
    pub fn metadata(&self) -> IconMetadata {
        IconMetadata::from_icon(self)
    }

    /// Inspect the file for issues that affect reconciliation.
    pub fn validate(&self) -> ValidationReport {
        validate_icon(self)
    }

    /// Reconcile declared sizes against decoded frames.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::ImageError`] if a frame cannot be PNG-encoded.
    pub fn icon_set(&self) -> Result<IconSet, IconError> {
        reconcile(self)
    }
}

const DIRECTORY_HEADER_LEN: usize = 6;
const DIRECTORY_ENTRY_LEN: usize = 16;

/// The size entry `index` declares in the raw directory table.
///
/// `IconDir::read` overwrites each entry's dimensions with its payload's, so
/// the declared width and height bytes are read from `bytes` directly. A
/// zero byte stands for 256 or more; the payload's dimension is used then.
fn declared_size(bytes: &[u8], index: usize, entry: &IconDirEntry) -> IconSize {
    let start = DIRECTORY_HEADER_LEN + index * DIRECTORY_ENTRY_LEN;
    let dimension = |offset: usize, actual: u32| match bytes.get(start + offset) {
        Some(&0) | None => actual,
        Some(&byte) => u32::from(byte),
    };
    IconSize::new(dimension(0, entry.width()), dimension(1, entry.height()))
}

fn decode_entry(entry: &IconDirEntry) -> Result<Frame, String> {
    let image = entry.decode().map_err(|error| error.to_string())?;
    Frame::from_rgba(image.width(), image.height(), image.rgba_data().to_vec())
        .map_err(|error| error.to_string())
}

/// Decode the container's single best image with the `image` crate's own
/// ICO decoder.
fn decode_top_level(bytes: &[u8]) -> Result<Frame, String> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Ico)
        .map_err(|error| error.to_string())?;
    Frame::new(image.into_rgba8()).map_err(|error| error.to_string())
}

/// Open `path` and reconcile it into an [`IconSet`] in one call.
///
/// # Errors
///
/// Same as [`IconFile::open`] and [`IconFile::icon_set`].
pub fn load_icon<P: AsRef<Path>>(path: P) -> Result<IconSet, IconError> {
    IconFile::open(path)?.icon_set()
}
