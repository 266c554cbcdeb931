//! Concrete element kinds.
//!
//! Every element shares the same box model and flow placement; the kind only
//! decides how the element paints itself, which extra style attributes it
//! understands, and (for text and images) how big its own content is.

use std::fmt;
use std::rc::Rc;

use trellis_common::image::Bitmap;
use trellis_common::warning::warn_once;

use crate::color::Color;
use crate::content_box::ContentBox;
use crate::font::{FontMetrics, FontSelector};
use crate::geometry::Rect;
use crate::paint::Surface;
use crate::style::Style;

/// How a shape element paints its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeStyle {
    /// Solid fill.
    Filled,
    /// One-pixel outline.
    Stroked,
}

/// Caller-supplied paint routine for [`ElementKind::Callback`].
///
/// Receives the surface and the element's final rectangle.
pub type PaintFn = Box<dyn Fn(&mut dyn Surface, Rect)>;

/// The closed set of element kinds.
pub enum ElementKind {
    /// A flow container with no paint of its own.
    Container,
    /// A filled or stroked rectangle. Paints only when `color` is set.
    Shape {
        /// Fill or stroke color; [`Color::NONE`] paints nothing.
        color: Color,
        /// Filled or outlined.
        style: ShapeStyle,
    },
    /// A single line of fixed-cell text.
    Text {
        /// The characters to draw.
        text: String,
        /// Which font's glyph cells to use.
        font: FontSelector,
        /// Foreground color.
        color: Color,
    },
    /// A fixed-size bitmap.
    Image {
        /// Palette-indexed pixels, shared between elements.
        bitmap: Rc<Bitmap>,
    },
    /// Painted by a caller-supplied function.
    Callback {
        /// The paint routine.
        paint: PaintFn,
    },
}

impl ElementKind {
    /// A shape with no color yet.
    #[must_use]
    pub const fn shape(style: ShapeStyle) -> Self {
        Self::Shape {
            color: Color::NONE,
            style,
        }
    }

    /// Text in the normal font, drawn in the foreground color.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            font: FontSelector::Normal,
            color: Color::FOREGROUND,
        }
    }

    /// An image element showing `bitmap`.
    #[must_use]
    pub const fn image(bitmap: Rc<Bitmap>) -> Self {
        Self::Image { bitmap }
    }

    /// An element painted by `paint`.
    #[must_use]
    pub fn callback(paint: impl Fn(&mut dyn Surface, Rect) + 'static) -> Self {
        Self::Callback {
            paint: Box::new(paint),
        }
    }

    /// Short lowercase name, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Shape {
                style: ShapeStyle::Filled,
                ..
            } => "box",
            Self::Shape {
                style: ShapeStyle::Stroked,
                ..
            } => "frame",
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Callback { .. } => "callback",
        }
    }

    /// Kind-specific style attributes. Returns false for anything the kind
    /// does not own so the caller can fall through to the shared attributes.
    pub(crate) fn apply_style(&mut self, style: &Style) -> bool {
        match (self, style) {
            (Self::Shape { color, .. }, Style::Color(value))
            | (Self::Text { color, .. }, Style::Color(value)) => {
                *color = *value;
                true
            }
            (Self::Text { font, .. }, Style::Font(value)) => {
                *font = *value;
                true
            }
            _ => false,
        }
    }

    /// Size of the kind's own content, for leaf elements.
    ///
    /// Containers, shapes, and callbacks have no content of their own.
    pub(crate) fn leaf_size(&self, fonts: &dyn FontMetrics) -> (i32, i32) {
        match self {
            Self::Text { text, font, .. } => fonts.glyph_metrics(*font).measure(text),
            Self::Image { bitmap } => (
                i32::try_from(bitmap.width()).unwrap_or(i32::MAX),
                i32::try_from(bitmap.height()).unwrap_or(i32::MAX),
            ),
            Self::Container | Self::Shape { .. } | Self::Callback { .. } => (0, 0),
        }
    }

    /// Paint the element itself (not its border, not its children).
    pub(crate) fn paint(
        &self,
        surface: &mut dyn Surface,
        rect: Rect,
        content_box: &ContentBox,
        fonts: &dyn FontMetrics,
    ) {
        let origin_left = rect.left + content_box.padding.left();
        let origin_top = rect.top + content_box.padding.top();

        match self {
            Self::Container => {}
            Self::Shape { color, style } => {
                if !color.is_set() || rect.is_empty() {
                    return;
                }
                match style {
                    ShapeStyle::Filled => surface.draw_filled_rect(rect, *color),
                    ShapeStyle::Stroked => surface.draw_stroked_rect(rect, *color),
                }
            }
            Self::Text { text, font, color } => {
                if text.is_empty() || !color.is_set() {
                    return;
                }
                if let Some(ch) = text.chars().find(|&ch| !fonts.has_glyph(*font, ch)) {
                    warn_once("text", &format!("no glyph for {ch:?} in the {font} font"));
                }
                surface.draw_text(
                    text,
                    origin_left,
                    origin_top,
                    *color,
                    fonts.glyph_metrics(*font),
                );
            }
            Self::Image { bitmap } => surface.draw_image(bitmap, origin_left, origin_top),
            Self::Callback { paint } => paint(surface, rect),
        }
    }
}

impl fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => f.write_str("Container"),
            Self::Shape { color, style } => f
                .debug_struct("Shape")
                .field("color", color)
                .field("style", style)
                .finish(),
            Self::Text { text, font, color } => f
                .debug_struct("Text")
                .field("text", text)
                .field("font", font)
                .field("color", color)
                .finish(),
            Self::Image { bitmap } => f
                .debug_struct("Image")
                .field("width", &bitmap.width())
                .field("height", &bitmap.height())
                .finish(),
            Self::Callback { .. } => f.write_str("Callback"),
        }
    }
}
