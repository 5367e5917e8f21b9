//! Icon metadata types.
//!
//! This module defines [`IconMetadata`], returned by
//! [`IconFile::metadata`](crate::IconFile::metadata). It summarises how the
//! container's directory and its decodable frames line up, without
//! encoding anything.

use std::path::PathBuf;

use crate::{icon_file::IconFile, size::IconSize};

/// Declared versus decoded sizes for one icon file.
///
/// # Example
///
/// ```no_run
/// use icoview::IconFile;
///
/// let icon = IconFile::open("app.ico").unwrap();
/// let metadata = icon.metadata();
/// println!("Declared: {:?}", metadata.declared_sizes);
/// println!("Will synthesize: {:?}", metadata.missing_sizes());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct IconMetadata {
    /// Path the icon was opened from.
    pub path: PathBuf,
    /// Whether the icon directory could be read.
    pub directory_read: bool,
    /// Sizes the directory declares, sorted and deduplicated.
    pub declared_sizes: Vec<IconSize>,
    /// Sizes of the decoded frames, sorted.
    pub decoded_sizes: Vec<IconSize>,
    /// Declared sizes whose entry failed to decode or held a frame of
    /// another size.
    pub undecodable_sizes: Vec<IconSize>,
    /// Decoded frames discarded because an earlier frame had the same size.
    pub duplicate_sizes: Vec<IconSize>,
    /// Size of the synthesis source, if any frame decoded.
    pub largest: Option<IconSize>,
    /// Sizes the resulting icon set will contain.
    pub target_sizes: Vec<IconSize>,
}

impl IconMetadata {
    pub(crate) fn from_icon(icon: &IconFile) -> Self {
        let mut declared_sizes = icon.declared_sizes().to_vec();
        declared_sizes.sort();
        declared_sizes.dedup();

        let mut decoded_sizes = icon.decoded_sizes();
        decoded_sizes.sort();

        Self {
            path: icon.path().to_path_buf(),
            directory_read: icon.directory_read,
            declared_sizes,
            decoded_sizes,
            undecodable_sizes: icon.undecodable.clone(),
            duplicate_sizes: icon.duplicates.clone(),
            largest: icon.largest_frame().map(|frame| frame.size()),
            target_sizes: icon.target_sizes(),
        }
    }

    /// Target sizes with no decoded frame; these are synthesized.
    ///
    /// Empty when nothing decoded at all, since nothing can be synthesized
    /// without a source.
    pub fn missing_sizes(&self) -> Vec<IconSize> {
        if self.largest.is_none() {
            return Vec::new();
        }
        self.target_sizes
            .iter()
            .filter(|size| !self.decoded_sizes.contains(size))
            .copied()
            .collect()
    }
}
