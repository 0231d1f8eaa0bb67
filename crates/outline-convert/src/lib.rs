//! Line-art outline converter.
//!
//! Turns a raster image of black line art on a white background into a
//! white-outline-on-transparent PNG, plus a centered square crop of the
//! same result. The pixel math lives in [`outline_core`]; this crate adds
//! the codec boundary (via the `image` crate), the error taxonomy, and
//! the size report.
//!
//! ## Quickstart
//!
//! ```no_run
//! use outline_convert::convert;
//!
//! # fn main() -> Result<(), outline_convert::ConvertError> {
//! let report = convert(
//!     "drawing.jpg",
//!     "drawing-outline.png",
//!     "drawing-outline-square.png",
//! )?;
//! println!("Original: {}x{}", report.original.0, report.original.1);
//! # Ok(())
//! # }
//! ```

mod convert;

pub use convert::{convert, ConvertError, ConvertReport};

pub use outline_core as core;
