//! Display list: a recorded sequence of drawing commands.

use trellis_common::image::Bitmap;

use crate::color::Color;
use crate::font::GlyphMetrics;
use crate::geometry::Rect;

use super::Surface;

/// A single drawing command, in the order it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCommand {
    /// Solid rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Palette color.
        color: Color,
    },
    /// One-pixel rectangle outline.
    StrokeRect {
        /// Rectangle whose edges are drawn.
        rect: Rect,
        /// Palette color.
        color: Color,
    },
    /// A line of fixed-cell text.
    DrawText {
        /// The characters.
        text: String,
        /// Left edge of the first glyph cell.
        left: i32,
        /// Top edge of the glyph cells.
        top: i32,
        /// Foreground color.
        color: Color,
        /// Cell size the text was laid out with.
        metrics: GlyphMetrics,
    },
    /// A bitmap blit.
    DrawImage {
        /// The pixels.
        bitmap: Bitmap,
        /// Left edge.
        left: i32,
        /// Top edge.
        top: i32,
    },
}

/// A list of drawing commands in painting order (back to front).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append `command` after everything recorded so far.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Recorded commands, back to front.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// How many commands were recorded.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing was painted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Issue every recorded command, in order, on `surface`.
    pub fn replay(&self, surface: &mut dyn Surface) {
        for command in &self.commands {
            match command {
                DisplayCommand::FillRect { rect, color } => surface.draw_filled_rect(*rect, *color),
                DisplayCommand::StrokeRect { rect, color } => {
                    surface.draw_stroked_rect(*rect, *color);
                }
                DisplayCommand::DrawText {
                    text,
                    left,
                    top,
                    color,
                    metrics,
                } => surface.draw_text(text, *left, *top, *color, *metrics),
                DisplayCommand::DrawImage { bitmap, left, top } => {
                    surface.draw_image(bitmap, *left, *top);
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.push(DisplayCommand::FillRect { rect, color });
    }

    fn draw_stroked_rect(&mut self, rect: Rect, color: Color) {
        self.push(DisplayCommand::StrokeRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, left: i32, top: i32, color: Color, metrics: GlyphMetrics) {
        self.push(DisplayCommand::DrawText {
            text: text.to_owned(),
            left,
            top,
            color,
            metrics,
        });
    }

    fn draw_image(&mut self, bitmap: &Bitmap, left: i32, top: i32) {
        self.push(DisplayCommand::DrawImage {
            bitmap: bitmap.clone(),
            left,
            top,
        });
    }
}
