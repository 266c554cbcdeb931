//! Paint traversal: walks a placed tree and issues drawing commands in
//! painting order (back to front).
//!
//! Per element:
//! 1. Border ring, in the border color
//! 2. Kind-specific content (shape, text, image, callback)
//! 3. Children, in tree order

use trellis_dom::NodeId;

use crate::content_box::ContentBox;
use crate::geometry::Rect;
use crate::scene::Scene;

use super::{DisplayList, Surface};

impl Scene {
    /// Paint `root` and its subtree onto `surface`.
    ///
    /// Any element met without a rectangle is laid out on the spot as a root
    /// sized against the viewport. After a whole-tree invalidation that is
    /// just `root`; invalidating only part of a placed tree moves that part to
    /// the origin.
    pub fn draw(&mut self, root: NodeId, surface: &mut dyn Surface) {
        if !self.is_placed(root) {
            self.layout(root);
        }

        let element = &self.tree[root];
        let Some(rect) = element.cache().rect() else {
            return;
        };
        paint_border(surface, rect, &element.content_box);
        element
            .kind
            .paint(surface, rect, &element.content_box, self.fonts.as_ref());

        let children = self.tree.children(root).to_vec();
        for child in children {
            self.draw(child, surface);
        }
    }

    /// Paint `root` into a fresh [`DisplayList`].
    #[must_use]
    pub fn record(&mut self, root: NodeId) -> DisplayList {
        let mut list = DisplayList::new();
        self.draw(root, &mut list);
        list
    }
}

/// Fill the band between the outer rectangle and the element rectangle.
///
/// Top and bottom strips span the full outer width including the corners;
/// left and right strips sit between them. When the border leaves no room
/// for the element, the whole outer rectangle is border.
fn paint_border(surface: &mut dyn Surface, rect: Rect, content_box: &ContentBox) {
    let border = content_box.border;
    let color = content_box.border_color;
    if border.is_zero() || !color.is_set() {
        return;
    }

    let outer = content_box.element_to_outer_bounds(rect);
    if rect.is_empty() {
        if !outer.is_empty() {
            surface.draw_filled_rect(outer, color);
        }
        return;
    }

    let strips = [
        Rect::new(outer.left, outer.top, outer.width, border.top()),
        Rect::new(outer.left, rect.bottom(), outer.width, border.bottom()),
        Rect::new(outer.left, rect.top, border.left(), rect.height),
        Rect::new(rect.right(), rect.top, border.right(), rect.height),
    ];
    for strip in strips {
        if !strip.is_empty() {
            surface.draw_filled_rect(strip, color);
        }
    }
}
