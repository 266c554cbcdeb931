//! Bitmap data shared across engine components.
//!
//! Bitmaps store one palette index per pixel. Index 0 is transparent: the
//! blit skips it, so sprites can have arbitrary silhouettes.

use thiserror::Error;

/// Errors raised when constructing a [`Bitmap`] from raw pixel data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitmapError {
    /// The pixel buffer length does not match `width * height`.
    #[error("bitmap is {width}x{height} but {len} pixels were supplied")]
    SizeMismatch {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Length of the supplied buffer.
        len: usize,
    },
}

/// Palette-indexed image data for image elements.
///
/// Contains the intrinsic dimensions and one palette index per pixel in
/// row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Intrinsic width of the bitmap in pixels.
    width: u32,
    /// Intrinsic height of the bitmap in pixels.
    height: u32,
    /// Palette indices (width * height entries, 0 = transparent).
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a new `Bitmap` from palette-indexed pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError::SizeMismatch`] if `pixels` does not hold exactly
    /// `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(BitmapError::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap of the given size filled with one palette index.
    #[must_use]
    pub fn filled(width: u32, height: u32, index: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![index; (width as usize) * (height as usize)],
        }
    }

    /// Intrinsic width of the bitmap in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height of the bitmap in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Palette index at `(x, y)`, or `None` outside the bitmap.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    /// Raw palette indices in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_buffer() {
        let err = Bitmap::new(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            BitmapError::SizeMismatch {
                width: 2,
                height: 2,
                len: 3
            }
        );
    }

    #[test]
    fn test_get_row_major() {
        let bitmap = Bitmap::new(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(bitmap.get(1, 0), Some(2));
        assert_eq!(bitmap.get(0, 1), Some(3));
        assert_eq!(bitmap.get(2, 0), None);
    }
}
