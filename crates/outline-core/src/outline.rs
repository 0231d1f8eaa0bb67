//! White-outline composition from a luminance map and line mask.

use crate::image::RgbaImage;
use crate::luminance::{LineMask, LuminanceMap};

/// Gain applied to `255 - luminance` when deriving stroke opacity.
/// Darker original pixels become more opaque white.
pub const ALPHA_GAIN: f32 = 1.8;

/// Render the outline image: RGB fixed to white everywhere, alpha
/// `round((255 - luminance) * ALPHA_GAIN)` clamped to 0..=255 on line
/// pixels and forced to 0 on background pixels.
pub fn compose_outline(luma: &LuminanceMap, mask: &LineMask) -> RgbaImage {
    debug_assert_eq!(luma.width, mask.width);
    debug_assert_eq!(luma.height, mask.height);

    let mut data = vec![255u8; luma.width * luma.height * 4];
    for (i, (&v, &line)) in luma.data.iter().zip(mask.data.iter()).enumerate() {
        let alpha = if line {
            ((255.0 - v) * ALPHA_GAIN).round().clamp(0.0, 255.0) as u8
        } else {
            0
        };
        data[i * 4 + 3] = alpha;
    }
    RgbaImage {
        width: luma.width,
        height: luma.height,
        data,
    }
}
