//! Pixel-buffer operations for line-art outline extraction.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! depend on any image codec or filesystem API: everything operates on
//! row-major RGBA byte buffers and derived per-pixel maps. Decoding and
//! encoding live in the `outline-convert` facade crate.
//!
//! The pipeline implemented here classifies each pixel of a
//! black-on-white line drawing as line or background by its luminance,
//! then re-renders the drawing as a white outline whose opacity tracks
//! the darkness of the original stroke.

mod crop;
mod image;
mod logger;
mod luminance;
mod outline;

pub use crop::{center_square_bounds, crop, CropBounds};
pub use image::{ImageBufferError, RgbaImage, RgbaImageView};
pub use logger::init_with_level;
pub use luminance::{line_mask, luminance_map, LineMask, LuminanceMap, LINE_THRESHOLD};
pub use outline::{compose_outline, ALPHA_GAIN};
