//! PNG-encoded icon entries and the ordered set they form.
//!
//! An [`IconSet`] is what a presentation layer displays: one
//! [`EncodedImage`] per distinct size, smallest first. Entries are
//! immutable and carry their PNG payload, so exporting one never touches
//! the source file again.

use std::slice::Iter;

use crate::{error::IconError, frame::Frame, size::IconSize};

/// Where an entry's pixels came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    /// Decoded directly from the container.
    Decoded,
    /// Resampled from the largest decoded frame because the container
    /// declared this size without a decodable image for it.
    Synthesized,
}

impl FrameSource {
    /// Lower-case name used in listings.
    pub fn as_str(self) -> &'static str {
        match self {
            FrameSource::Decoded => "decoded",
            FrameSource::Synthesized => "synthesized",
        }
    }
}

/// One icon entry, encoded as PNG.
///
/// The byte length is always the length of the PNG payload; there is no
/// separately stored count that could drift from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    size: IconSize,
    source: FrameSource,
    png_bytes: Vec<u8>,
}

impl EncodedImage {
    pub(crate) fn new(size: IconSize, source: FrameSource, png_bytes: Vec<u8>) -> Self {
        Self {
            size,
            source,
            png_bytes,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Dimensions of the entry.
    pub fn size(&self) -> IconSize {
        self.size
    }

    /// Length of the PNG payload in bytes.
    pub fn byte_length(&self) -> usize {
        self.png_bytes.len()
    }

    /// The PNG payload.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png_bytes
    }

    /// Whether the entry was decoded or synthesized.
    pub fn source(&self) -> FrameSource {
        self.source
    }

    /// Display label, e.g. `"32x32"`.
    pub fn label(&self) -> String {
        self.size.to_string()
    }

    /// Decode the PNG payload back into a [`Frame`].
    ///
    /// # Errors
    ///
    /// Returns [`IconError::ImageError`] if the payload is not valid PNG.
    pub fn decode(&self) -> Result<Frame, IconError> {
        let image = image::load_from_memory_with_format(&self.png_bytes, image::ImageFormat::Png)?;
        Frame::new(image.into_rgba8())
    }
}

/// Icon entries ordered by ascending pixel area, then width, then height,
/// with at most one entry per size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    images: Vec<EncodedImage>,
}

impl IconSet {
    /// Build a set from arbitrary entries, sorting them and keeping the
    /// first entry seen for each size.
    pub(crate) fn from_images(images: Vec<EncodedImage>) -> Self {
        let mut unique: Vec<EncodedImage> = Vec::with_capacity(images.len());
        for image in images {
            if !unique.iter().any(|kept| kept.size == image.size) {
                unique.push(image);
            }
        }
        unique.sort_by_key(|image| image.size);
        Self { images: unique }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&EncodedImage> {
        self.images.get(index)
    }

    /// Entry with exactly `size`, if any.
    pub fn find(&self, size: IconSize) -> Option<&EncodedImage> {
        self.images.iter().find(|image| image.size == size)
    }

    /// Index of the entry with exactly `size`, if any.
    pub fn position(&self, size: IconSize) -> Option<usize> {
        self.images.iter().position(|image| image.size == size)
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> Iter<'_, EncodedImage> {
        self.images.iter()
    }

    /// Labels of all entries in order.
    pub fn labels(&self) -> Vec<String> {
        self.images.iter().map(EncodedImage::label).collect()
    }

    /// Sizes of all entries in order.
    pub fn sizes(&self) -> Vec<IconSize> {
        self.images.iter().map(EncodedImage::size).collect()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a EncodedImage;
    type IntoIter = Iter<'a, EncodedImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for IconSet {
    type Item = EncodedImage;
    type IntoIter = std::vec::IntoIter<EncodedImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}
