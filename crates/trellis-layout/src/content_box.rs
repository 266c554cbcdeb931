//! The content-box model: padding, border, border color, and cross-axis
//! content alignment.
//!
//! ```text
//! ┌─────────────────────────────────┐  outer rectangle (what the parent allots)
//! │          border-top             │
//! │   ┌─────────────────────────┐   │  element rectangle (outer - border)
//! │ b │      padding-top        │ b │
//! │ o │   ┌─────────────────┐   │ o │
//! │ r │ p │     CONTENT     │ p │ r │  child placement (element + padding,
//! │ d │   └─────────────────┘   │ d │  then aligned on the cross axis)
//! │ e │      padding-bottom     │ e │
//! │ r └─────────────────────────┘ r │
//! │          border-bottom          │
//! └─────────────────────────────────┘
//! ```

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::color::Color;
use crate::geometry::{Axis, BoxSides, Rect};

/// Cross-axis placement of a child inside a vertical-flow container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentAlign {
    /// Flush against the left padding edge.
    Left,
    /// Centered within the element rectangle.
    #[default]
    Center,
    /// Flush against the right padding edge.
    Right,
}

/// Per-element padding, border, border color, and content alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentBox {
    /// Space between the border and the content.
    pub padding: BoxSides,
    /// Border thickness per side.
    pub border: BoxSides,
    /// Color the border ring is painted with.
    pub border_color: Color,
    /// Cross-axis alignment of children in vertical flow.
    pub align: ContentAlign,
}

impl Default for ContentBox {
    fn default() -> Self {
        Self {
            padding: BoxSides::default(),
            border: BoxSides::default(),
            border_color: Color::FOREGROUND,
            align: ContentAlign::Center,
        }
    }
}

impl ContentBox {
    /// Subtract the border from an outer rectangle.
    ///
    /// ```text
    /// left   = outer_left + border.left
    /// top    = outer_top + border.top
    /// width  = outer_width - border.left - border.right
    /// height = outer_height - border.top - border.bottom
    /// ```
    ///
    /// The result may have a negative extent when the border is thicker than
    /// the outer rectangle; such an element simply paints nothing.
    #[must_use]
    pub const fn outer_to_element_bounds(
        &self,
        outer_left: i32,
        outer_top: i32,
        outer_width: i32,
        outer_height: i32,
    ) -> Rect {
        Rect {
            left: outer_left + self.border.left(),
            top: outer_top + self.border.top(),
            width: outer_width - self.border.left() - self.border.right(),
            height: outer_height - self.border.top() - self.border.bottom(),
        }
    }

    /// Inverse of [`ContentBox::outer_to_element_bounds`]: grow an element
    /// rectangle back out by the border.
    #[must_use]
    pub const fn element_to_outer_bounds(&self, element: Rect) -> Rect {
        Rect {
            left: element.left - self.border.left(),
            top: element.top - self.border.top(),
            width: element.width + self.border.horizontal(),
            height: element.height + self.border.vertical(),
        }
    }

    /// Placement rectangle for a child of size `content_width` x `content_height`.
    ///
    /// The top is always `element.top + padding.top`; the left depends on the
    /// alignment mode:
    ///
    /// ```text
    /// Left   => element.left + padding.left
    /// Center => element.left + element.width / 2 - content_width / 2   (floor)
    /// Right  => element.left + element.width - padding.right - content_width
    /// ```
    ///
    /// Alignment is a cross-axis concept for vertical flow. Horizontal flow
    /// overrides the returned `left` with its own cursor.
    #[must_use]
    pub const fn place_content(
        &self,
        element: &Rect,
        content_width: i32,
        content_height: i32,
    ) -> Rect {
        let left = match self.align {
            ContentAlign::Left => element.left + self.padding.left(),
            // Arithmetic shift: floor division, also for negative extents.
            ContentAlign::Center => element.left + (element.width >> 1) - (content_width >> 1),
            ContentAlign::Right => {
                element.left + element.width - self.padding.right() - content_width
            }
        };

        Rect {
            left,
            top: element.top + self.padding.top(),
            width: content_width,
            height: content_height,
        }
    }

    /// Padding plus border on both sides of `axis`.
    #[must_use]
    pub const fn insets(&self, axis: Axis) -> i32 {
        self.padding.along(axis) + self.border.along(axis)
    }

    /// Offset of the first child from the element rectangle's top-left
    /// corner along `axis`: `padding + border` on the leading side.
    #[must_use]
    pub const fn leading_offset(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.padding.left() + self.border.left(),
            Axis::Vertical => self.padding.top() + self.border.top(),
        }
    }
}
