//! Painting.
//!
//! The engine never touches pixels. Painting walks the placed tree parent
//! before children and issues primitive calls on a [`Surface`] supplied by
//! the host:
//!
//! ```text
//! Measure → Place → Paint → Surface
//!                     ↓
//!               DisplayList (recording surface)
//! ```
//!
//! [`DisplayList`] records those calls so they can be inspected or replayed
//! onto another surface later.

mod display_list;
mod painter;

use trellis_common::image::Bitmap;

use crate::color::Color;
use crate::font::GlyphMetrics;
use crate::geometry::Rect;

pub use display_list::{DisplayCommand, DisplayList};

/// Drawing primitives provided by a rendering backend.
///
/// Rectangles may be empty or extend past the surface; implementations clip.
pub trait Surface {
    /// Fill `rect` with `color`.
    fn draw_filled_rect(&mut self, rect: Rect, color: Color);

    /// Draw the one-pixel outline of `rect` in `color`.
    fn draw_stroked_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its first glyph cell's top-left corner at
    /// (`left`, `top`), advancing one `metrics.glyph_width` per character.
    fn draw_text(&mut self, text: &str, left: i32, top: i32, color: Color, metrics: GlyphMetrics);

    /// Blit `bitmap` with its top-left corner at (`left`, `top`). Pixels with
    /// index 0 are transparent.
    fn draw_image(&mut self, bitmap: &Bitmap, left: i32, top: i32);
}
