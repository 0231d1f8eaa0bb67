//! Per-pixel luminance scoring and line/background classification.

use crate::image::RgbaImageView;

/// Luminance below this value classifies a pixel as line art.
pub const LINE_THRESHOLD: f32 = 180.0;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Per-pixel luminance scores, row-major, same dimensions as the source.
#[derive(Clone, Debug)]
pub struct LuminanceMap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

/// Boolean line-art classification, row-major, same dimensions as the source.
#[derive(Clone, Debug)]
pub struct LineMask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<bool>,
}

/// Score every pixel with the ITU-R BT.601 luma weighting
/// `0.299*R + 0.587*G + 0.114*B`, kept at floating-point precision so
/// rounding happens only once, when the alpha channel is quantized.
pub fn luminance_map(src: &RgbaImageView<'_>) -> LuminanceMap {
    let mut data = Vec::with_capacity(src.width * src.height);
    for y in 0..src.height {
        for x in 0..src.width {
            let (r, g, b) = src.rgb(x, y);
            data.push(LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32);
        }
    }
    LuminanceMap {
        width: src.width,
        height: src.height,
        data,
    }
}

/// Classify pixels strictly darker than [`LINE_THRESHOLD`] as line art.
pub fn line_mask(luma: &LuminanceMap) -> LineMask {
    LineMask {
        width: luma.width,
        height: luma.height,
        data: luma.data.iter().map(|&v| v < LINE_THRESHOLD).collect(),
    }
}
