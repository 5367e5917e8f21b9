//! # icoview
//!
//! Open Windows `.ico` files, extract every embedded frame, and export one
//! to PNG or JPEG.
//!
//! An icon container declares a list of sizes in its directory, but real
//! files sometimes omit (or corrupt) the image for a size they declare.
//! `icoview` trusts the directory for *which* sizes exist, trusts decoded
//! images for *what they look like*, and fills the gaps by resampling the
//! largest decoded frame. Decoding, resizing and encoding are done by the
//! [`image`](https://crates.io/crates/image) and
//! [`ico`](https://crates.io/crates/ico) crates.
//!
//! ## Quick Start
//!
//! ### List the sizes in an icon
//!
//! ```no_run
//! use icoview::load_icon;
//!
//! let icons = load_icon("app.ico").unwrap();
//! for image in &icons {
//!     println!("{} ({} bytes, {})", image.label(), image.byte_length(), image.source().as_str());
//! }
//! ```
//!
//! ### Export one size
//!
//! ```no_run
//! use icoview::{ExportOptions, IconSize, Selection};
//! use image::Rgb;
//!
//! let mut selection = Selection::new();
//! selection.open("app.ico").unwrap();
//! selection.select_size(IconSize::square(32)).unwrap();
//!
//! let options = ExportOptions::new().with_background(Rgb([0, 0, 0]));
//! selection.export_current("app_32.jpg", &options).unwrap();
//! ```
//!
//! ### Inspect before loading
//!
//! ```no_run
//! use icoview::IconFile;
//!
//! let icon = IconFile::open("app.ico").unwrap();
//! print!("{}", icon.validate());
//! ```
//!
//! ## Behaviour
//!
//! - **Format check** — content sniffing, not the file extension; a PNG
//!   renamed to `.ico` is rejected with [`IconError::NotAnIcon`]
//! - **Deduplication** — one entry per size, first decoded frame wins
//! - **Synthesis** — declared sizes without a decodable image are resampled
//!   (Lanczos3) from the largest decoded frame, never from another
//!   synthesized one
//! - **Ordering** — ascending pixel area, then width, then height
//! - **Export** — `.png` writes the PNG payload verbatim; `.jpg`/`.jpeg`
//!   flattens alpha onto a background colour (white by default) at quality
//!   95
//!
//! All operations are synchronous. Logging goes through the
//! [`log`](https://crates.io/crates/log) facade.

pub mod configuration;
pub mod encode;
pub mod error;
pub mod frame;
pub mod icon_file;
pub mod icon_set;
pub mod metadata;
mod reconcile;
pub mod selection;
pub mod size;
pub mod validation;

pub use configuration::{DEFAULT_JPEG_QUALITY, ExportOptions};
pub use encode::{ExportFormat, encode_jpeg, encode_png, save, save_with_options};
pub use error::IconError;
pub use frame::Frame;
pub use icon_file::{IconFile, load_icon};
pub use icon_set::{EncodedImage, FrameSource, IconSet};
pub use metadata::IconMetadata;
pub use reconcile::reconcile;
pub use selection::Selection;
pub use size::IconSize;
pub use validation::ValidationReport;
