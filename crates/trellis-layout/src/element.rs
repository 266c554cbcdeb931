//! The element: the payload of every tree node.

use trellis_common::warning::warn_once;

use crate::content_box::ContentBox;
use crate::geometry::{Axis, Rect};
use crate::kind::ElementKind;
use crate::style::{Flow, Size, Style};

/// Memoized outputs of the measurement and placement passes.
///
/// Each field is filled independently: the width and height caches belong to
/// measurement, the rectangle to placement. [`LayoutCache::clear`] is the only
/// way to empty them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutCache {
    width: Option<i32>,
    height: Option<i32>,
    rect: Option<Rect>,
}

impl LayoutCache {
    /// Resolved extent along `axis`, if measured.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> Option<i32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub(crate) const fn set_extent(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Horizontal => self.width = Some(value),
            Axis::Vertical => self.height = Some(value),
        }
    }

    /// Placement rectangle, if placed.
    #[must_use]
    pub const fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub(crate) const fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    /// Forget everything.
    pub const fn clear(&mut self) {
        *self = Self {
            width: None,
            height: None,
            rect: None,
        };
    }
}

/// A node of the element tree: kind, box model, flow, declared size, and caches.
///
/// Changing any public field does not touch the caches. Call
/// [`Scene::invalidate`](crate::Scene::invalidate) before the next layout if
/// the change should show up.
#[derive(Debug)]
pub struct Element {
    /// What the element paints.
    pub kind: ElementKind,
    /// Padding, border, border color, alignment.
    pub content_box: ContentBox,
    /// Axis along which children are stacked.
    pub flow: Flow,
    /// Declared width.
    pub width: Size,
    /// Declared height.
    pub height: Size,
    cache: LayoutCache,
}

impl Element {
    /// A vertical-flow element with intrinsic size and a default content box.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            content_box: ContentBox::default(),
            flow: Flow::Vertical,
            width: Size::Intrinsic,
            height: Size::Intrinsic,
            cache: LayoutCache::default(),
        }
    }

    /// Declared size along `axis`.
    #[must_use]
    pub const fn declared(&self, axis: Axis) -> Size {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The memoized layout state.
    #[must_use]
    pub const fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    pub(crate) const fn cache_mut(&mut self) -> &mut LayoutCache {
        &mut self.cache
    }

    /// Apply one style.
    ///
    /// The element's kind gets the first look; anything it does not own
    /// falls through to the attributes every element shares. A style neither
    /// understands is reported once and otherwise ignored.
    pub fn apply_style(&mut self, style: &Style) {
        if self.kind.apply_style(style) || self.apply_base_style(style) {
            return;
        }
        warn_once(
            "style",
            &format!(
                "'{}' has no effect on {} elements",
                style.name(),
                self.kind.name()
            ),
        );
    }

    /// Apply styles in order; the last write to an attribute wins.
    pub fn apply_styles(&mut self, styles: &[Style]) {
        for style in styles {
            self.apply_style(style);
        }
    }

    fn apply_base_style(&mut self, style: &Style) -> bool {
        let cb = &mut self.content_box;
        match *style {
            Style::Width(size) => self.width = size,
            Style::Height(size) => self.height = size,
            Style::PaddingLeft(v) => cb.padding.set_left(v),
            Style::PaddingTop(v) => cb.padding.set_top(v),
            Style::PaddingRight(v) => cb.padding.set_right(v),
            Style::PaddingBottom(v) => cb.padding.set_bottom(v),
            Style::Padding(v) => cb.padding.set_all(v),
            Style::BorderLeft(v) => cb.border.set_left(v),
            Style::BorderTop(v) => cb.border.set_top(v),
            Style::BorderRight(v) => cb.border.set_right(v),
            Style::BorderBottom(v) => cb.border.set_bottom(v),
            Style::Border(v) => cb.border.set_all(v),
            Style::BorderColor(color) => cb.border_color = color,
            Style::ContentAlign(align) => cb.align = align,
            Style::Flow(flow) => self.flow = flow,
            Style::Color(_) | Style::Font(_) => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::content_box::ContentAlign;
    use crate::font::FontSelector;
    use crate::kind::ShapeStyle;

    #[test]
    fn test_shorthand_fans_out() {
        let mut el = Element::new(ElementKind::Container);
        el.apply_styles(&[Style::padding(3), Style::PaddingLeft(1), Style::border(2)]);
        assert_eq!(el.content_box.padding.left(), 1);
        assert_eq!(el.content_box.padding.top(), 3);
        assert_eq!(el.content_box.padding.right(), 3);
        assert_eq!(el.content_box.padding.bottom(), 3);
        assert_eq!(el.content_box.border.horizontal(), 4);
    }

    #[test]
    fn test_last_write_wins() {
        let mut el = Element::new(ElementKind::Container);
        el.apply_styles(&[
            Style::width(10),
            Style::width(Size::Inherit),
            Style::align_left(),
            Style::align_right(),
        ]);
        assert_eq!(el.width, Size::Inherit);
        assert_eq!(el.content_box.align, ContentAlign::Right);
    }

    #[test]
    fn test_kind_intercepts_color_and_delegates_rest() {
        let mut el = Element::new(ElementKind::shape(ShapeStyle::Filled));
        el.apply_styles(&[Style::color(3), Style::padding(1)]);
        match el.kind {
            ElementKind::Shape { color, .. } => assert_eq!(color, Color(3)),
            ref other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(el.content_box.padding.top(), 1);
    }

    #[test]
    fn test_text_takes_font() {
        let mut el = Element::new(ElementKind::text("HP:"));
        el.apply_style(&Style::small_font());
        assert!(matches!(
            el.kind,
            ElementKind::Text {
                font: FontSelector::Small,
                ..
            }
        ));
    }

    #[test]
    fn test_font_on_container_is_ignored() {
        let mut el = Element::new(ElementKind::Container);
        el.apply_style(&Style::small_font());
        assert!(matches!(el.kind, ElementKind::Container));
        assert!(trellis_common::warning::was_warned(
            "style",
            "'font' has no effect on container elements"
        ));
    }
}
