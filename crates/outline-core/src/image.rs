/// Errors produced when constructing a pixel buffer from raw parts.
#[derive(thiserror::Error, Debug)]
pub enum ImageBufferError {
    #[error("invalid RGBA buffer length (expected {expected} bytes, got {got})")]
    InvalidLength { expected: usize, got: usize },
}

/// Borrowed row-major RGBA pixel buffer, 4 bytes per pixel.
#[derive(Clone, Copy, Debug)]
pub struct RgbaImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major RGBA, len = 4*w*h
}

/// Owned row-major RGBA pixel buffer, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl<'a> RgbaImageView<'a> {
    /// Wrap a raw RGBA byte slice, validating its length against the
    /// dimensions.
    pub fn from_raw(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageBufferError> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(ImageBufferError::InvalidLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGB channels of the pixel at `(x, y)`. The alpha channel is ignored
    /// by the luminance computation.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = (y * self.width + x) * 4;
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }
}

impl RgbaImage {
    /// Build an owned buffer from raw RGBA bytes, validating the length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageBufferError> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(ImageBufferError::InvalidLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Borrow this buffer as a view.
    pub fn as_view(&self) -> RgbaImageView<'_> {
        RgbaImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// RGBA channels of the pixel at `(x, y)`.
    #[inline]
    pub fn rgba(&self, x: usize, y: usize) -> (u8, u8, u8, u8) {
        let i = (y * self.width + x) * 4;
        (
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }
}
