//! Image loading: read, decode, and quantize to the palette.
//!
//! Any raster format the `image` crate understands (PNG, GIF, BMP, ...) is
//! decoded to RGBA, then every pixel is snapped to the nearest palette entry.
//! Pixels under 50% alpha become index 0 (transparent).

use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;
use trellis_common::image::{Bitmap, BitmapError};

use crate::palette;

/// Errors raised while loading a bitmap.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The bytes are not a decodable image.
    #[error("could not decode image ({0})")]
    Decode(#[from] image::ImageError),
    /// The decoded image did not produce a consistent bitmap.
    #[error(transparent)]
    Bitmap(#[from] BitmapError),
}

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Decode`] if its contents are not an image.
pub fn load_bitmap(path: &Path) -> Result<Bitmap, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bitmap(&bytes)
}

/// Decode an in-memory image.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if `bytes` are not an image.
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap, LoadError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    quantize(&rgba)
}

/// Snap every pixel of `rgba` to the palette.
///
/// # Errors
///
/// Never fails for a well-formed buffer; the error type is shared with the
/// loaders.
pub fn quantize(rgba: &RgbaImage) -> Result<Bitmap, LoadError> {
    let (width, height) = rgba.dimensions();
    let pixels = rgba.pixels().map(|&p| palette::nearest(p)).collect();
    Ok(Bitmap::new(width, height, pixels)?)
}
