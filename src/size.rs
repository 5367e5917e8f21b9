//! Icon dimensions.
//!
//! [`IconSize`] is the key every other module agrees on: frames are looked
//! up by it, declared sizes are lists of it, and its [`Ord`] implementation
//! *is* the icon set ordering (ascending pixel area, then width, then
//! height).

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::IconError;

/// Width and height of one icon entry, in pixels.
///
/// # Example
///
/// ```
/// use icoview::IconSize;
///
/// let size: IconSize = "32x32".parse().unwrap();
/// assert_eq!(size, IconSize::square(32));
/// assert_eq!(size.to_string(), "32x32");
/// assert!(IconSize::square(16) < size);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl IconSize {
    /// Create a size from explicit dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create an `n`×`n` size.
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Number of pixels covered by this size.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns `true` if either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn sort_key(self) -> (u64, u32, u32) {
        (self.area(), self.width, self.height)
    }
}

impl Ord for IconSize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for IconSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for IconSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for IconSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl FromStr for IconSize {
    type Err = IconError;

    /// Parse `"WxH"`, `"W×H"`, or a bare `"N"` meaning `N`×`N`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || IconError::InvalidSize(value.to_string());
        let trimmed = value.trim();

        let size = match trimmed.split_once(['x', 'X', '×']) {
            Some((width, height)) => IconSize::new(
                width.trim().parse().map_err(|_| invalid())?,
                height.trim().parse().map_err(|_| invalid())?,
            ),
            None => IconSize::square(trimmed.parse().map_err(|_| invalid())?),
        };

        if size.is_empty() {
            return Err(invalid());
        }
        Ok(size)
    }
}
