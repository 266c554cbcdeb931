//! Geometry primitives: rectangles, four-sided box values, and layout axes.

use serde::Serialize;

/// A rectangle positioned on the display, in whole pixels.
///
/// Width and height are non-negative once resolved but may go negative when
/// a border is thicker than the space it was given. A negative or zero extent
/// is a degenerate rectangle: it paints nothing and is never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub left: i32,
    /// Vertical position of the top-left corner.
    pub top: i32,
    /// Width of the rectangle.
    pub width: i32,
    /// Height of the rectangle.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.left + self.width
    }

    /// One past the bottom row.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// True when the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (widths).
    Horizontal,
    /// The y axis (heights).
    Vertical,
}

/// Four per-side magnitudes used for both padding and border thickness.
///
/// Each side is stored in 8 bits. Setters take any integer and keep only its
/// low byte (`value & 0xff`), so `256` becomes `0` and `-1` becomes `255`.
/// Out-of-range values are truncated, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BoxSides {
    left: u8,
    top: u8,
    right: u8,
    bottom: u8,
}

/// Keep the low byte of `value`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn truncate(value: i32) -> u8 {
    (value & 0xff) as u8
}

impl BoxSides {
    /// All four sides set to `value` (truncated to 8 bits).
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        let v = truncate(value);
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// Left magnitude.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.left as i32
    }

    /// Top magnitude.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top as i32
    }

    /// Right magnitude.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.right as i32
    }

    /// Bottom magnitude.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.bottom as i32
    }

    /// Set the left magnitude (truncated to 8 bits).
    pub const fn set_left(&mut self, value: i32) {
        self.left = truncate(value);
    }

    /// Set the top magnitude (truncated to 8 bits).
    pub const fn set_top(&mut self, value: i32) {
        self.top = truncate(value);
    }

    /// Set the right magnitude (truncated to 8 bits).
    pub const fn set_right(&mut self, value: i32) {
        self.right = truncate(value);
    }

    /// Set the bottom magnitude (truncated to 8 bits).
    pub const fn set_bottom(&mut self, value: i32) {
        self.bottom = truncate(value);
    }

    /// Set all four sides (truncated to 8 bits).
    pub const fn set_all(&mut self, value: i32) {
        *self = Self::uniform(value);
    }

    /// `left + right`.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left() + self.right()
    }

    /// `top + bottom`.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top() + self.bottom()
    }

    /// Sum of both sides across `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    /// True when every side is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}
