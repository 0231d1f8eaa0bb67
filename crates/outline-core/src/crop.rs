//! Centered square cropping.

use crate::image::RgbaImage;

/// Pixel-space bounds of a crop region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropBounds {
    pub left: usize,
    pub top: usize,
    pub side: usize,
}

/// Bounds of the centered square with side `min(width, height)`.
/// Offsets use floor division, so an odd margin leans one pixel toward
/// the top-left.
pub fn center_square_bounds(width: usize, height: usize) -> CropBounds {
    let side = width.min(height);
    CropBounds {
        left: (width - side) / 2,
        top: (height - side) / 2,
        side,
    }
}

/// Extract the sub-image described by `bounds`, row by row.
pub fn crop(src: &RgbaImage, bounds: CropBounds) -> RgbaImage {
    debug_assert!(bounds.left + bounds.side <= src.width);
    debug_assert!(bounds.top + bounds.side <= src.height);

    let mut data = Vec::with_capacity(bounds.side * bounds.side * 4);
    for y in bounds.top..bounds.top + bounds.side {
        let row = (y * src.width + bounds.left) * 4;
        data.extend_from_slice(&src.data[row..row + bounds.side * 4]);
    }
    RgbaImage {
        width: bounds.side,
        height: bounds.side,
        data,
    }
}
