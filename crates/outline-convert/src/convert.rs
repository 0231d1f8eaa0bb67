//! End-to-end conversion: decode, outline, encode, crop, encode.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageReader};
use log::{debug, info};

use outline_core::{
    center_square_bounds, compose_outline, crop, line_mask, luminance_map, RgbaImage,
};

/// Errors produced by [`convert`].
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("failed to load source image {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("failed to write output image {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Size summary of a completed conversion, as `(width, height)` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertReport {
    pub original: (u32, u32),
    pub output: (u32, u32),
    pub square: (u32, u32),
}

/// Convert the line-art image at `source` into a white-outline RGBA PNG
/// at `output` and a centered square crop of it at `square_output`.
///
/// The source may be any format the `image` crate decodes; it is
/// normalized to RGBA8 before processing, so sources without an alpha
/// channel are accepted. Both outputs are encoded only after the whole
/// result has been computed in memory, so a failure never leaves a
/// partially converted image pair behind a successful exit.
///
/// # Errors
///
/// [`ConvertError::Load`] if the source is missing or undecodable;
/// [`ConvertError::Write`] if either destination cannot be created or
/// encoded to.
pub fn convert(
    source: impl AsRef<Path>,
    output: impl AsRef<Path>,
    square_output: impl AsRef<Path>,
) -> Result<ConvertReport, ConvertError> {
    let source = source.as_ref();
    let img = load_rgba(source)?;
    info!(
        "loaded {} ({}x{})",
        source.display(),
        img.width,
        img.height
    );

    let luma = luminance_map(&img.as_view());
    let mask = line_mask(&luma);
    debug!(
        "line mask covers {} of {} pixels",
        mask.data.iter().filter(|&&m| m).count(),
        mask.data.len()
    );

    let outline = compose_outline(&luma, &mask);
    let bounds = center_square_bounds(outline.width, outline.height);
    let square = crop(&outline, bounds);
    debug!(
        "square crop {}px at ({}, {})",
        bounds.side, bounds.left, bounds.top
    );

    write_png(&outline, output.as_ref())?;
    write_png(&square, square_output.as_ref())?;
    info!(
        "wrote {} and {}",
        output.as_ref().display(),
        square_output.as_ref().display()
    );

    Ok(ConvertReport {
        original: (img.width as u32, img.height as u32),
        output: (outline.width as u32, outline.height as u32),
        square: (square.width as u32, square.height as u32),
    })
}

/// Decode `path` and normalize to a 4-channel RGBA buffer.
fn load_rgba(path: &Path) -> Result<RgbaImage, ConvertError> {
    let load_err = |source| ConvertError::Load {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .map_err(|e| load_err(ImageError::IoError(e)))?
        .decode()
        .map_err(load_err)?
        .to_rgba8();

    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    Ok(RgbaImage {
        width,
        height,
        data: decoded.into_raw(),
    })
}

/// Encode `img` as an 8-bit RGBA PNG at `path`.
fn write_png(img: &RgbaImage, path: &Path) -> Result<(), ConvertError> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(|e| write_err(ImageError::IoError(e)))?;
    PngEncoder::new(BufWriter::new(file))
        .write_image(
            &img.data,
            img.width as u32,
            img.height as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(write_err)
}
