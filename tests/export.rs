//! Export integration tests.

mod common;

use common::{pattern, png_bytes, solid, write_pattern_icon};
use icoview::{ExportOptions, Frame, IconError, encode_jpeg, encode_png, load_icon, save, save_with_options};
use image::{ImageFormat, Rgb};

#[test]
fn png_round_trip_keeps_dimensions() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let frame = Frame::new(pattern(24, 12)).expect("Valid frame");
    let output_path = directory.path().join("x.png");

    save(&encode_png(&frame).unwrap(), &output_path).expect("Failed to save PNG");

    let reopened = image::open(&output_path).expect("Saved PNG should open");
    assert_eq!((reopened.width(), reopened.height()), (24, 12));
    assert_eq!(reopened.to_rgba8(), pattern(24, 12));
}

#[test]
fn png_export_writes_bytes_verbatim() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let icon_path = write_pattern_icon(directory.path(), "sample.ico", &[16, 32]);
    let icons = load_icon(&icon_path).expect("Failed to load icon");
    let image = icons.get(1).expect("32x32 entry");
    let output_path = directory.path().join("out.PNG");

    save(image.png_bytes(), &output_path).expect("Failed to save PNG");

    let written = std::fs::read(&output_path).expect("Failed to read output");
    assert_eq!(written, image.png_bytes());
}

#[test]
fn jpeg_export_produces_valid_jpeg() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let icon_path = write_pattern_icon(directory.path(), "sample.ico", &[16, 48]);
    let icons = load_icon(&icon_path).expect("Failed to load icon");
    let image = icons.get(1).expect("48x48 entry");

    for name in ["out.jpg", "out.jpeg"] {
        let output_path = directory.path().join(name);
        save(image.png_bytes(), &output_path).expect("Failed to save JPEG");

        let bytes = std::fs::read(&output_path).expect("Failed to read output");
        assert_eq!(
            image::guess_format(&bytes).expect("Output format should be recognised"),
            ImageFormat::Jpeg
        );
        let decoded = image::load_from_memory(&bytes).expect("JPEG should decode");
        assert_eq!((decoded.width(), decoded.height()), (48, 48));
    }
}

#[test]
fn jpeg_flattens_transparency_onto_background() {
    let frame = Frame::new(solid(16, 16, [0, 255, 0, 0])).expect("Valid frame");

    let white = encode_jpeg(&frame, &ExportOptions::default()).expect("Failed to encode");
    let white = image::load_from_memory(&white).unwrap().to_rgb8();
    for pixel in white.pixels() {
        assert!(pixel.0.iter().all(|&channel| channel >= 250), "{pixel:?}");
    }

    let options = ExportOptions::new().with_background(Rgb([0, 0, 0]));
    let black = encode_jpeg(&frame, &options).expect("Failed to encode");
    let black = image::load_from_memory(&black).unwrap().to_rgb8();
    for pixel in black.pixels() {
        assert!(pixel.0.iter().all(|&channel| channel <= 5), "{pixel:?}");
    }
}

#[test]
fn jpeg_quality_is_validated() {
    let frame = Frame::new(pattern(8, 8)).expect("Valid frame");

    for quality in [0u8, 101, 255] {
        let options = ExportOptions::new().with_quality(quality);
        match encode_jpeg(&frame, &options) {
            Err(IconError::InvalidQuality(value)) => assert_eq!(value, quality),
            other => panic!("expected InvalidQuality, got {other:?}"),
        }
    }

    for quality in [1u8, 50, 100] {
        let options = ExportOptions::new().with_quality(quality);
        assert!(encode_jpeg(&frame, &options).is_ok());
    }
}

#[test]
fn save_rejects_invalid_quality_for_jpeg_only() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let bytes = png_bytes(&pattern(8, 8));
    let options = ExportOptions::new().with_quality(0);

    let result = save_with_options(&bytes, directory.path().join("out.jpg"), &options);
    assert!(matches!(result, Err(IconError::InvalidQuality(0))));

    save_with_options(&bytes, directory.path().join("out.png"), &options)
        .expect("Quality does not apply to PNG");
}

#[test]
fn unsupported_extension_is_rejected() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let bytes = png_bytes(&pattern(8, 8));
    let output_path = directory.path().join("out.bmp");

    let result = save(&bytes, &output_path);

    assert!(matches!(result, Err(IconError::UnsupportedFormat(_))));
    assert!(!output_path.exists(), "Nothing should be written");
}

#[test]
fn empty_data_is_rejected() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");

    let result = save(&[], directory.path().join("out.png"));
    assert!(matches!(result, Err(IconError::EmptyData)));

    // Empty data is reported before the extension is considered.
    let result = save(&[], directory.path().join("out.bmp"));
    assert!(matches!(result, Err(IconError::EmptyData)));
}

#[test]
fn jpeg_export_of_non_png_bytes_fails() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");

    let result = save(b"not a png", directory.path().join("out.jpg"));

    assert!(matches!(result, Err(IconError::ImageError(_))));
}
