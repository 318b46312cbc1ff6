use std::path::Path;

use floodfill_transparency::{
    default_output_path, process_file, remove_background, Connectivity, Error, FloodRange,
    RemovalOptions,
};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

fn near_white_with_blue_block() -> RgbImage {
    let mut img = RgbImage::from_pixel(10, 10, Rgb([250, 250, 250]));
    for y in 3..7 {
        for x in 3..7 {
            img.put_pixel(x, y, Rgb([0, 0, 255]));
        }
    }
    img
}

fn load_rgba(path: &Path) -> RgbaImage {
    let img = image::open(path).unwrap();
    assert_eq!(img.color().channel_count(), 4);
    img.to_rgba8()
}

#[test]
fn uniform_png_becomes_fully_transparent() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("favicon.png");
    let output = dir.path().join("favicon_final.png");
    RgbImage::from_pixel(10, 10, Rgb([250, 250, 250]))
        .save(&input)
        .unwrap();

    let result = process_file(&input, &output, &RemovalOptions::default()).unwrap();
    assert!(result.written);
    assert_eq!(result.background_pixels, 100);
    assert!(result.message.contains("favicon_final.png"));

    let out = load_rgba(&output);
    assert_eq!(out.dimensions(), (10, 10));
    assert!(out.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
}

#[test]
fn blue_block_keeps_colour_and_opacity() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = default_output_path(&input);
    near_white_with_blue_block().save(&input).unwrap();

    let result = process_file(&input, &output, &RemovalOptions::default()).unwrap();
    assert!(result.written);
    assert_eq!(result.background_pixels, 100 - 16);
    assert_eq!(output, dir.path().join("logo_final.png"));

    let out = load_rgba(&output);
    assert_eq!(*out.get_pixel(3, 3), Rgba([0, 0, 255, 255]));
    assert_eq!(*out.get_pixel(6, 6), Rgba([0, 0, 255, 255]));
    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(*out.get_pixel(9, 5), Rgba([0, 0, 0, 0]));
}

#[test]
fn alpha_in_input_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("translucent.png");
    let output = dir.path().join("out.png");
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([250, 250, 250, 10]));
    img.put_pixel(2, 2, Rgba([0, 0, 255, 0]));
    img.save(&input).unwrap();

    process_file(&input, &output, &RemovalOptions::default()).unwrap();

    let out = load_rgba(&output);
    assert_eq!(*out.get_pixel(2, 2), Rgba([0, 0, 255, 255]));
    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
}

#[test]
fn missing_input_reports_in_result_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does_not_exist.png");
    let output = dir.path().join("does_not_exist_final.png");

    let result = process_file(&input, &output, &RemovalOptions::default()).unwrap();
    assert!(!result.written);
    assert!(result.message.contains("Could not open"));
    assert!(result.message.contains("does_not_exist.png"));
    assert!(!output.exists());
}

#[test]
fn corrupt_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.png");
    let output = dir.path().join("broken_final.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let result = process_file(&input, &output, &RemovalOptions::default()).unwrap();
    assert!(!result.written);
    assert!(!output.exists());
}

#[test]
fn jpeg_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let nested = dir.path().join("nested");
    let output = nested.join("out.jpg");
    near_white_with_blue_block().save(&input).unwrap();

    let err = process_file(&input, &output, &RemovalOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(!output.exists());
    assert!(!nested.exists());
}

#[test]
fn mislabelled_png_is_decoded_from_its_contents() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("favicon.png");
    near_white_with_blue_block().save(&original).unwrap();

    for name in ["favicon.jpg", "favicon"] {
        let input = dir.path().join(name);
        std::fs::copy(&original, &input).unwrap();
        let output = dir.path().join(format!("{name}_out.png"));

        let result = process_file(&input, &output, &RemovalOptions::default()).unwrap();
        assert!(result.written, "{name}: {}", result.message);
        assert_eq!(result.background_pixels, 100 - 16, "{name}");

        let out = load_rgba(&output);
        assert_eq!(*out.get_pixel(4, 4), Rgba([0, 0, 255, 255]), "{name}");
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]), "{name}");
    }
}

#[test]
fn unknown_output_extension_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.nope");
    near_white_with_blue_block().save(&input).unwrap();

    let err = process_file(&input, &output, &RemovalOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn missing_output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("nested").join("deeper").join("out.png");
    near_white_with_blue_block().save(&input).unwrap();

    let result = process_file(&input, &output, &RemovalOptions::default()).unwrap();
    assert!(result.written);
    assert!(output.exists());
}

#[test]
fn other_alpha_formats_round_trip_transparency() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    near_white_with_blue_block().save(&input).unwrap();

    for name in ["out.webp", "out.tiff"] {
        let output = dir.path().join(name);
        process_file(&input, &output, &RemovalOptions::default()).unwrap();
        let out = image::open(&output).unwrap().to_rgba8();
        assert_eq!(out.get_pixel(0, 0)[3], 0, "{name}");
        assert_eq!(*out.get_pixel(4, 4), Rgba([0, 0, 255, 255]), "{name}");
    }
}

#[test]
fn fixed_range_stops_on_gradient_background() {
    let mut img = RgbImage::new(12, 1);
    for x in 0..12u8 {
        img.put_pixel(u32::from(x), 0, Rgb([x * 10, x * 10, x * 10]));
    }

    let floating = remove_background(&img, &RemovalOptions::default()).unwrap();
    assert!(floating.pixels().all(|p| p[3] == 0));

    let opts = RemovalOptions {
        connectivity: Connectivity::Four,
        range: FloodRange::Fixed,
    };
    let fixed = remove_background(&img, &opts).unwrap();
    let cleared = fixed.pixels().filter(|p| p[3] == 0).count();
    assert_eq!(cleared, 3);
}
