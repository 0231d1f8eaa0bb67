use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use outline_convert::{convert, ConvertError};
use tempfile::TempDir;

struct Workspace {
    _dir: TempDir,
    source: PathBuf,
    output: PathBuf,
    square: PathBuf,
}

fn workspace() -> Workspace {
    let dir = tempfile::tempdir().expect("create temp dir");
    let source = dir.path().join("source.png");
    let output = dir.path().join("outline.png");
    let square = dir.path().join("outline-square.png");
    Workspace {
        _dir: dir,
        source,
        output,
        square,
    }
}

fn save_uniform_rgb(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(path)
        .expect("save source image");
}

fn load_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("open output image").to_rgba8()
}

#[test]
fn all_black_source_becomes_opaque_white() {
    let ws = workspace();
    save_uniform_rgb(&ws.source, 4, 4, [0, 0, 0]);

    let report = convert(&ws.source, &ws.output, &ws.square).expect("convert");
    assert_eq!(report.original, (4, 4));
    assert_eq!(report.output, (4, 4));
    assert_eq!(report.square, (4, 4));

    let out = load_rgba(&ws.output);
    for p in out.pixels() {
        // (255 - 0) * 1.8 saturates to 255.
        assert_eq!(*p, Rgba([255, 255, 255, 255]));
    }

    // Square crop of a square image is the whole image.
    let square = load_rgba(&ws.square);
    assert_eq!(square, out);
}

#[test]
fn all_white_source_is_fully_transparent() {
    let ws = workspace();
    save_uniform_rgb(&ws.source, 4, 4, [255, 255, 255]);

    convert(&ws.source, &ws.output, &ws.square).expect("convert");

    let out = load_rgba(&ws.output);
    for p in out.pixels() {
        assert_eq!(*p, Rgba([255, 255, 255, 0]));
    }
}

#[test]
fn midtone_alpha_follows_gain_formula() {
    let ws = workspace();
    // Uniform gray 150: luminance 150, alpha round((255 - 150) * 1.8) = 189.
    save_uniform_rgb(&ws.source, 2, 2, [150, 150, 150]);

    convert(&ws.source, &ws.output, &ws.square).expect("convert");

    let out = load_rgba(&ws.output);
    for p in out.pixels() {
        assert_eq!(*p, Rgba([255, 255, 255, 189]));
    }
}

#[test]
fn wide_source_yields_centered_square_crop() {
    let ws = workspace();
    // 10x4 white image with a black column at x = 3, which is exactly the
    // left edge of the centered 4x4 crop.
    let mut img = RgbImage::from_pixel(10, 4, Rgb([255, 255, 255]));
    for y in 0..4 {
        img.put_pixel(3, y, Rgb([0, 0, 0]));
    }
    img.save(&ws.source).expect("save source image");

    let report = convert(&ws.source, &ws.output, &ws.square).expect("convert");
    assert_eq!(report.original, (10, 4));
    assert_eq!(report.output, (10, 4));
    assert_eq!(report.square, (4, 4));

    let square = load_rgba(&ws.square);
    for y in 0..4 {
        assert_eq!(square.get_pixel(0, y).0[3], 255, "line column at x=0");
        for x in 1..4 {
            assert_eq!(square.get_pixel(x, y).0[3], 0, "background at x={x}");
        }
    }
}

#[test]
fn one_by_one_source_round_trips() {
    let ws = workspace();
    save_uniform_rgb(&ws.source, 1, 1, [0, 0, 0]);

    let report = convert(&ws.source, &ws.output, &ws.square).expect("convert");
    assert_eq!(report.output, (1, 1));
    assert_eq!(report.square, (1, 1));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let ws = workspace();
    save_uniform_rgb(&ws.source, 5, 3, [40, 40, 40]);

    convert(&ws.source, &ws.output, &ws.square).expect("first run");
    let first_output = fs::read(&ws.output).expect("read output");
    let first_square = fs::read(&ws.square).expect("read square");

    convert(&ws.source, &ws.output, &ws.square).expect("second run");
    assert_eq!(fs::read(&ws.output).expect("read output"), first_output);
    assert_eq!(fs::read(&ws.square).expect("read square"), first_square);
}

#[test]
fn rgba_source_with_alpha_is_accepted() {
    let ws = workspace();
    RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 128]))
        .save(&ws.source)
        .expect("save source image");

    // Luminance only looks at RGB, so a half-transparent black pixel is
    // still classified as line art.
    convert(&ws.source, &ws.output, &ws.square).expect("convert");
    let out = load_rgba(&ws.output);
    assert_eq!(out.get_pixel(0, 0).0[3], 255);
}

#[test]
fn missing_source_is_load_error() {
    let ws = workspace();
    let err = convert(&ws.source, &ws.output, &ws.square).unwrap_err();
    assert!(matches!(err, ConvertError::Load { .. }), "got {err:?}");
    assert!(!ws.output.exists());
    assert!(!ws.square.exists());
}

#[test]
fn unwritable_destination_is_write_error() {
    let ws = workspace();
    save_uniform_rgb(&ws.source, 2, 2, [0, 0, 0]);

    let missing_dir = ws.output.with_file_name("no-such-dir").join("out.png");
    let err = convert(&ws.source, &missing_dir, &ws.square).unwrap_err();
    assert!(matches!(err, ConvertError::Write { .. }), "got {err:?}");
}
