//! Fixture builders shared by the integration tests.
//!
//! Icons are generated at test time into temporary directories, either
//! through the `ico` crate (well-formed files) or assembled byte by byte
//! (files whose directory declares entries with broken payloads).

#![allow(dead_code)]

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{ImageFormat, Rgba, RgbaImage};

/// A raster whose every pixel depends on the position and the size, so
/// frames of different sizes never share content.
pub fn pattern(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 7 + width) as u8,
            (y * 13 + height) as u8,
            ((x + y) * 3) as u8,
            (128 + (x ^ y) % 128) as u8,
        ])
    })
}

/// A raster of one colour.
pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Encode a raster as PNG bytes.
pub fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    buffer.into_inner()
}

/// Write a well-formed icon with one PNG entry per raster, in the given
/// order.
pub fn write_icon(directory: &Path, name: &str, images: &[RgbaImage]) -> PathBuf {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for image in images {
        let icon_image =
            IconImage::from_rgba_data(image.width(), image.height(), image.as_raw().clone());
        icon_dir.add_entry(
            IconDirEntry::encode_as_png(&icon_image).expect("Failed to encode icon entry"),
        );
    }

    let path = directory.join(name);
    let file = fs::File::create(&path).expect("Failed to create icon fixture");
    icon_dir.write(file).expect("Failed to write icon fixture");
    path
}

/// Write a well-formed icon with a [`pattern`] frame for each square size.
pub fn write_pattern_icon(directory: &Path, name: &str, sizes: &[u32]) -> PathBuf {
    let images: Vec<RgbaImage> = sizes.iter().map(|&size| pattern(size, size)).collect();
    write_icon(directory, name, &images)
}

/// One directory entry of a hand-assembled icon.
pub enum RawEntry {
    /// Declares `width`x`height` and carries a valid PNG of that size.
    Png(RgbaImage),
    /// Declares `width`x`height` but carries bytes no decoder accepts.
    Broken { width: u32, height: u32 },
}

/// Assemble an icon container byte by byte.
pub fn write_raw_icon(directory: &Path, name: &str, entries: &[RawEntry]) -> PathBuf {
    let payloads: Vec<(u32, u32, Vec<u8>)> = entries
        .iter()
        .map(|entry| match entry {
            RawEntry::Png(image) => (image.width(), image.height(), png_bytes(image)),
            RawEntry::Broken { width, height } => (
                *width,
                *height,
                b"this payload is neither PNG nor BMP data".to_vec(),
            ),
        })
        .collect();

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&(entries.len() as u16).to_le_bytes());

    let mut offset = 6 + 16 * entries.len() as u32;
    for (width, height, data) in &payloads {
        bytes.push((*width % 256) as u8);
        bytes.push((*height % 256) as u8);
        bytes.push(0);
        bytes.push(0);
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&32u16.to_le_bytes());
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&offset.to_le_bytes());
        offset += data.len() as u32;
    }
    for (_, _, data) in &payloads {
        bytes.extend_from_slice(data);
    }

    let path = directory.join(name);
    fs::write(&path, bytes).expect("Failed to write raw icon fixture");
    path
}

/// Overwrite bytes of an existing fixture starting at `offset`.
pub fn patch_bytes(path: &Path, offset: usize, patch: &[u8]) {
    let mut bytes = fs::read(path).expect("Failed to read fixture");
    bytes[offset..offset + patch.len()].copy_from_slice(patch);
    fs::write(path, bytes).expect("Failed to rewrite fixture");
}

/// Write a plain PNG file.
pub fn write_png(directory: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = directory.join(name);
    fs::write(&path, png_bytes(image)).expect("Failed to write PNG fixture");
    path
}
