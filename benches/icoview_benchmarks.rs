//! Benchmarks for icon loading, reconciliation and export.
//!
//! Run with: cargo bench
//!
//! Fixtures are generated into a temporary directory before measuring.

use std::{fs, path::Path, path::PathBuf};

use criterion::Criterion;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use icoview::{ExportOptions, Frame, IconFile, encode_jpeg, encode_png, load_icon};
use image::{Rgba, RgbaImage};

const SIZES: [u32; 6] = [16, 24, 32, 48, 64, 256];

fn gradient(side: u32) -> RgbaImage {
    RgbaImage::from_fn(side, side, |x, y| {
        Rgba([(x * 255 / side) as u8, (y * 255 / side) as u8, 128, 255])
    })
}

/// Writes an icon embedding the sizes in `SIZES` selected by `embed`.
fn write_fixture(directory: &Path, name: &str, embed: impl Fn(u32) -> bool) -> PathBuf {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for side in SIZES.into_iter().filter(|&side| embed(side)) {
        let image = IconImage::from_rgba_data(side, side, gradient(side).into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&image).unwrap());
    }
    let path = directory.join(name);
    icon_dir.write(fs::File::create(&path).unwrap()).unwrap();
    path
}

fn benchmark_loading(criterion: &mut Criterion) {
    let directory = tempfile::tempdir().unwrap();
    let full = write_fixture(directory.path(), "full.ico", |_| true);

    criterion.bench_function("open icon (6 entries)", |bencher| {
        bencher.iter(|| IconFile::open(&full).unwrap());
    });

    criterion.bench_function("load icon set (6 entries)", |bencher| {
        bencher.iter(|| load_icon(&full).unwrap());
    });
}

fn benchmark_synthesis(criterion: &mut Criterion) {
    let directory = tempfile::tempdir().unwrap();
    let path = write_fixture(directory.path(), "largest_only.ico", |side| side == 256);
    let icon = IconFile::open(&path).unwrap();
    let largest = icon.largest_frame().unwrap().clone();

    criterion.bench_function("reconcile single 256x256 frame", |bencher| {
        bencher.iter(|| icon.icon_set().unwrap());
    });

    criterion.bench_function("encode 256x256 PNG", |bencher| {
        bencher.iter(|| encode_png(&largest).unwrap());
    });
}

fn benchmark_export(criterion: &mut Criterion) {
    let frame = Frame::new(gradient(256)).unwrap();
    let options = ExportOptions::default();

    criterion.bench_function("encode 256x256 JPEG (flattened)", |bencher| {
        bencher.iter(|| encode_jpeg(&frame, &options).unwrap());
    });
}

criterion::criterion_group!(
    benches,
    benchmark_loading,
    benchmark_synthesis,
    benchmark_export,
);

criterion::criterion_main!(benches);
