//! Selection state.
//!
//! [`Selection`] is what a viewer holds on to between user actions: the
//! icon set of the most recently opened file and which entry is active.
//! It is replaced wholesale on every successful [`open`](Selection::open).

use std::path::{Path, PathBuf};

use crate::{
    configuration::ExportOptions,
    encode::save_with_options,
    error::IconError,
    icon_file::IconFile,
    icon_set::{EncodedImage, IconSet},
    size::IconSize,
};

/// The loaded icon set and its active entry.
///
/// The active index is `None` exactly when the set is empty.
///
/// # Example
///
/// ```no_run
/// use icoview::{IconError, Selection};
///
/// let mut selection = Selection::new();
/// let labels = selection.open("app.ico")?;
/// println!("{labels:?}");
///
/// selection.select(labels.len() - 1)?;
/// selection.export_current("largest.png", &Default::default())?;
/// # Ok::<(), IconError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selection {
    icons: IconSet,
    active: Option<usize>,
    current_file: Option<PathBuf>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and reconcile `path`, replacing the loaded set.
    ///
    /// Resets the active entry to the first (smallest) one. Returns the
    /// labels of the new set. On error the previous state is kept.
    ///
    /// # Errors
    ///
    /// Same as [`IconFile::open`] and [`IconFile::icon_set`].
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<String>, IconError> {
        let path = path.as_ref();
        let icons = IconFile::open(path)?.icon_set()?;
        let active = if icons.is_empty() { None } else { Some(0) };

        *self = Selection {
            icons,
            active,
            current_file: Some(path.to_path_buf()),
        };
        log::debug!("Loaded {} entries from {}", self.icons.len(), path.display());
        Ok(self.labels())
    }

    /// Make entry `index` active.
    ///
    /// Selecting in an empty set is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::IndexOutOfRange`] if the set is non-empty and
    /// `index >= len`.
    pub fn select(&mut self, index: usize) -> Result<(), IconError> {
        if self.icons.is_empty() {
            self.active = None;
            return Ok(());
        }
        if index >= self.icons.len() {
            return Err(IconError::IndexOutOfRange {
                index,
                len: self.icons.len(),
            });
        }
        self.active = Some(index);
        Ok(())
    }

    /// Make the entry with exactly `size` active.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidSize`] if no entry has that size.
    pub fn select_size(&mut self, size: IconSize) -> Result<(), IconError> {
        let index = self
            .icons
            .position(size)
            .ok_or_else(|| IconError::InvalidSize(size.to_string()))?;
        self.select(index)
    }

    /// The active entry, if any.
    pub fn current(&self) -> Option<&EncodedImage> {
        self.active.and_then(|index| self.icons.get(index))
    }

    /// Index of the active entry.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The loaded icon set.
    pub fn icon_set(&self) -> &IconSet {
        &self.icons
    }

    /// Labels of the loaded entries in display order.
    pub fn labels(&self) -> Vec<String> {
        self.icons.labels()
    }

    /// Label of the active entry.
    pub fn current_label(&self) -> Option<String> {
        self.current().map(EncodedImage::label)
    }

    /// PNG payload of the active entry.
    pub fn current_png_bytes(&self) -> Option<&[u8]> {
        self.current().map(EncodedImage::png_bytes)
    }

    /// Path of the loaded file.
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Default export file name: `{stem}_{label}.png`, or `image.png` when
    /// nothing is loaded.
    pub fn suggested_file_name(&self) -> String {
        let stem = self
            .current_file
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        match self.current_label() {
            Some(label) => format!("{stem}_{label}.png"),
            None => format!("{stem}.png"),
        }
    }

    /// Save the active entry to `path`, format chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::EmptyData`] when nothing is selected, otherwise
    /// the errors of [`save_with_options`](crate::save_with_options).
    pub fn export_current<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ExportOptions,
    ) -> Result<(), IconError> {
        let bytes = self.current_png_bytes().unwrap_or_default();
        save_with_options(bytes, path, options)
    }
}
