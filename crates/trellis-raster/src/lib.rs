//! Software rendering backend for trellis scenes.
//!
//! Provides the pieces a host needs to turn a [`Scene`] into pixels:
//!
//! - [`Canvas`]: an RGBA buffer implementing [`Surface`](trellis_layout::Surface)
//! - [`FontdueFontMetrics`]: text cell metrics and glyphs from a TrueType font
//! - [`load_bitmap`]: palette-quantized images for image elements
//! - [`palette`]: the 16-color display palette

pub mod canvas;
pub mod font_metrics;
pub mod image_loader;
pub mod palette;

use trellis_layout::{Color, NodeId, Scene};

pub use canvas::Canvas;
pub use font_metrics::FontdueFontMetrics;
pub use image_loader::{LoadError, decode_bitmap, load_bitmap};

/// Draw `root` onto a viewport-sized canvas cleared to `background`.
///
/// Text is rasterized with `font` when given; otherwise text cells stay
/// empty.
#[must_use]
pub fn render(
    scene: &mut Scene,
    root: NodeId,
    background: Color,
    font: Option<FontdueFontMetrics>,
) -> Canvas {
    let viewport = scene.viewport();
    let mut canvas = Canvas::new(
        viewport.width.max(0).unsigned_abs(),
        viewport.height.max(0).unsigned_abs(),
        background,
    );
    if let Some(font) = font {
        canvas = canvas.with_font(font);
    }
    scene.draw(root, &mut canvas);
    canvas
}
