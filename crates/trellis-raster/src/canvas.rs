//! Software canvas for headless rendering.
//!
//! Executes surface calls into an RGBA pixel buffer. The canvas knows nothing
//! about elements or layout; it only fills, strokes, blits, and draws text.
//!
//! ```text
//! Measure → Place → Paint → Canvas → PNG
//! ```
//!
//! All drawing is palette-exact: no blending, no anti-aliasing. Glyph
//! coverage is thresholded at 50%.

use std::path::Path;

use anyhow::{Context, Result, bail};
use image::{ImageBuffer, Rgba, RgbaImage, imageops};
use trellis_common::image::Bitmap;
use trellis_common::warning::warn_once;
use trellis_layout::{Color, FontMetrics, FontSelector, GlyphMetrics, Rect, Surface};

use crate::font_metrics::FontdueFontMetrics;
use crate::palette;

/// Minimum glyph coverage that lights a pixel.
const GLYPH_THRESHOLD: u8 = 0x80;

/// An RGBA pixel buffer implementing [`Surface`].
pub struct Canvas {
    buffer: RgbaImage,
    font: Option<FontdueFontMetrics>,
}

impl Canvas {
    /// A canvas of `width` x `height` cleared to `background`.
    ///
    /// A transparent background leaves the buffer fully transparent.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let fill = palette::rgba(background).unwrap_or(Rgba([0, 0, 0, 0]));
        Self {
            buffer: ImageBuffer::from_pixel(width, height, fill),
            font: None,
        }
    }

    /// Use `font` to rasterize text.
    #[must_use]
    pub fn with_font(mut self, font: FontdueFontMetrics) -> Self {
        self.font = Some(font);
        self
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Pixel at (`x`, `y`), or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.buffer.get_pixel_checked(x, y).copied()
    }

    /// The pixel buffer.
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Size of the canvas enlarged by `factor`, or `None` if the enlarged
    /// RGBA buffer would not be addressable with 32-bit sizes.
    #[must_use]
    pub fn scaled_size(&self, factor: u32) -> Option<(u32, u32)> {
        let factor = factor.max(1);
        let width = self.width().checked_mul(factor)?;
        let height = self.height().checked_mul(factor)?;
        width
            .checked_mul(height)?
            .checked_mul(4)
            .map(|_| (width, height))
    }

    /// A copy enlarged by `factor` with nearest-neighbor sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if the enlarged image would be too large.
    pub fn scaled(&self, factor: u32) -> Result<RgbaImage> {
        let Some((width, height)) = self.scaled_size(factor) else {
            bail!(
                "scale factor {factor} is too large for a {}x{} canvas",
                self.width(),
                self.height()
            );
        };
        Ok(imageops::resize(
            &self.buffer,
            width,
            height,
            imageops::FilterType::Nearest,
        ))
    }

    /// Write the canvas as a PNG, enlarged by `factor`, and return the
    /// written image size.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaled size does not fit, or if the image
    /// cannot be encoded or written.
    pub fn save_png(&self, path: &Path, factor: u32) -> Result<(u32, u32)> {
        let scaled = self.scaled(factor)?;
        scaled
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to save image to '{}'", path.display()))?;
        Ok(scaled.dimensions())
    }

    /// Set one pixel, ignoring coordinates outside the canvas.
    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.buffer.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }

    /// Fill the part of `rect` that lies on the canvas.
    fn fill(&mut self, rect: Rect, color: Rgba<u8>) {
        let (width, height) = (self.buffer.width(), self.buffer.height());
        let right = rect.right().min(i32::try_from(width).unwrap_or(i32::MAX));
        let bottom = rect.bottom().min(i32::try_from(height).unwrap_or(i32::MAX));
        for y in rect.top.max(0)..bottom {
            for x in rect.left.max(0)..right {
                self.put(x, y, color);
            }
        }
    }

    /// Rasterize `ch` with its pen position at (`left`, `baseline`).
    fn draw_glyph(
        &mut self,
        font: &FontdueFontMetrics,
        ch: char,
        pen: (i32, i32),
        px: f32,
        color: Rgba<u8>,
    ) {
        let (left, baseline) = pen;
        let (metrics, coverage) = font.font().rasterize(ch, px);
        let (Ok(glyph_width), Ok(glyph_height)) =
            (i32::try_from(metrics.width), i32::try_from(metrics.height))
        else {
            return;
        };
        if glyph_width == 0 {
            return;
        }
        let glyph_left = left + metrics.xmin;
        let glyph_top = baseline - metrics.ymin - glyph_height;

        for (index, &alpha) in coverage.iter().enumerate() {
            if alpha < GLYPH_THRESHOLD {
                continue;
            }
            let Ok(index) = i32::try_from(index) else {
                break;
            };
            self.put(
                glyph_left + index % glyph_width,
                glyph_top + index / glyph_width,
                color,
            );
        }
    }
}

impl Surface for Canvas {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        let Some(rgba) = palette::rgba(color) else {
            return;
        };
        if !rect.is_empty() {
            self.fill(rect, rgba);
        }
    }

    fn draw_stroked_rect(&mut self, rect: Rect, color: Color) {
        let Some(rgba) = palette::rgba(color) else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        self.fill(Rect::new(rect.left, rect.top, rect.width, 1), rgba);
        self.fill(Rect::new(rect.left, bottom, rect.width, 1), rgba);
        self.fill(Rect::new(rect.left, rect.top, 1, rect.height), rgba);
        self.fill(Rect::new(right, rect.top, 1, rect.height), rgba);
    }

    fn draw_text(&mut self, text: &str, left: i32, top: i32, color: Color, metrics: GlyphMetrics) {
        let Some(rgba) = palette::rgba(color) else {
            return;
        };
        let Some(font) = self.font.clone() else {
            warn_once("raster", "no font loaded, text is not drawn");
            return;
        };

        // Cells carry no selector; the small font is the one with matching cells.
        let selector = if font.glyph_metrics(FontSelector::Small) == metrics {
            FontSelector::Small
        } else {
            FontSelector::Normal
        };
        let px = FontdueFontMetrics::pixel_size(selector);
        let baseline = top + font.ascent(selector);

        let mut cell_left = left;
        for ch in text.chars() {
            if !ch.is_control() && ch != ' ' {
                self.draw_glyph(&font, ch, (cell_left, baseline), px, rgba);
            }
            cell_left += metrics.glyph_width;
        }
    }

    fn draw_image(&mut self, bitmap: &Bitmap, left: i32, top: i32) {
        let (Ok(width), Ok(height)) =
            (i32::try_from(bitmap.width()), i32::try_from(bitmap.height()))
        else {
            return;
        };
        for y in 0..height {
            for x in 0..width {
                let index = bitmap
                    .get(x.unsigned_abs(), y.unsigned_abs())
                    .unwrap_or(0);
                if let Some(rgba) = palette::rgba(Color(index)) {
                    self.put(left + x, top + y, rgba);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(index: u8) -> Rgba<u8> {
        palette::rgba(Color(index)).unwrap()
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = Canvas::new(4, 4, Color(15));
        canvas.draw_filled_rect(Rect::new(-2, -2, 4, 4), Color(2));

        assert_eq!(canvas.pixel(0, 0), Some(rgb(2)));
        assert_eq!(canvas.pixel(1, 1), Some(rgb(2)));
        assert_eq!(canvas.pixel(2, 2), Some(rgb(15)));
    }

    #[test]
    fn test_stroke_leaves_interior() {
        let mut canvas = Canvas::new(5, 5, Color(15));
        canvas.draw_stroked_rect(Rect::new(0, 0, 5, 5), Color(1));

        assert_eq!(canvas.pixel(0, 0), Some(rgb(1)));
        assert_eq!(canvas.pixel(4, 4), Some(rgb(1)));
        assert_eq!(canvas.pixel(4, 2), Some(rgb(1)));
        assert_eq!(canvas.pixel(2, 2), Some(rgb(15)));
    }

    #[test]
    fn test_transparent_color_and_empty_rect_draw_nothing() {
        let mut canvas = Canvas::new(3, 3, Color(15));
        canvas.draw_filled_rect(Rect::new(0, 0, 3, 3), Color::NONE);
        canvas.draw_filled_rect(Rect::new(0, 0, -3, 3), Color(2));

        assert!(canvas.image().pixels().all(|p| *p == rgb(15)));
    }

    #[test]
    fn test_image_skips_index_zero() {
        let mut canvas = Canvas::new(3, 1, Color(15));
        let bitmap = Bitmap::new(3, 1, vec![2, 0, 7]).unwrap();
        canvas.draw_image(&bitmap, 0, 0);

        assert_eq!(canvas.pixel(0, 0), Some(rgb(2)));
        assert_eq!(canvas.pixel(1, 0), Some(rgb(15)));
        assert_eq!(canvas.pixel(2, 0), Some(rgb(7)));
    }

    #[test]
    fn test_scaled_is_nearest_neighbor() {
        let mut canvas = Canvas::new(2, 1, Color(15));
        canvas.draw_filled_rect(Rect::new(0, 0, 1, 1), Color(5));
        let big = canvas.scaled(3).unwrap();

        assert_eq!(big.dimensions(), (6, 3));
        assert_eq!(*big.get_pixel(2, 2), rgb(5));
        assert_eq!(*big.get_pixel(3, 0), rgb(15));
    }

    #[test]
    fn test_oversized_scale_is_an_error() {
        let canvas = Canvas::new(160, 120, Color(15));

        assert_eq!(canvas.scaled_size(4), Some((640, 480)));
        assert_eq!(canvas.scaled_size(30_000_000), None);
        let err = canvas.scaled(30_000_000).unwrap_err();
        assert!(err.to_string().contains("scale factor 30000000 is too large"));
    }

    #[test]
    fn test_save_png_rejects_oversized_scale() {
        let canvas = Canvas::new(160, 120, Color(15));
        let path = std::env::temp_dir().join("trellis-oversized-scale.png");

        assert!(canvas.save_png(&path, u32::MAX).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_text_without_font_is_skipped() {
        let mut canvas = Canvas::new(20, 10, Color(15));
        canvas.draw_text(
            "A",
            0,
            0,
            Color(1),
            GlyphMetrics {
                glyph_width: 6,
                glyph_height: 8,
            },
        );

        assert!(canvas.image().pixels().all(|p| *p == rgb(15)));
        assert!(trellis_common::warning::was_warned(
            "raster",
            "no font loaded, text is not drawn"
        ));
    }
}
