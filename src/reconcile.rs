//! Size reconciliation.
//!
//! Declared sizes decide which entries exist, decoded frames supply the
//! pixels wherever they can, and every remaining size is resampled from the
//! largest decoded frame. Synthesized frames are never used as a source for
//! further synthesis.

use crate::{
    encode::encode_png,
    error::IconError,
    icon_file::IconFile,
    icon_set::{EncodedImage, FrameSource, IconSet},
};

/// Build the [`IconSet`] for an opened icon.
///
/// Returns an empty set when the file has no decoded frame (a container
/// whose directory declares nothing).
///
/// # Errors
///
/// Returns [`IconError::ImageError`] if a frame cannot be PNG-encoded.
pub fn reconcile(icon: &IconFile) -> Result<IconSet, IconError> {
    let Some(largest) = icon.largest_frame() else {
        log::debug!("{} has no decoded frames", icon.path().display());
        return Ok(IconSet::default());
    };

    let targets = icon.target_sizes();
    let mut images = Vec::with_capacity(targets.len());

    for size in targets {
        let image = match icon.frame(size) {
            Some(frame) => {
                log::trace!("Encoding decoded frame {size}");
                EncodedImage::new(size, FrameSource::Decoded, encode_png(frame)?)
            }
            None => {
                log::debug!("Synthesizing {size} from {}", largest.size());
                let frame = largest.resampled(size);
                EncodedImage::new(size, FrameSource::Synthesized, encode_png(&frame)?)
            }
        };
        images.push(image);
    }

    Ok(IconSet::from_images(images))
}
