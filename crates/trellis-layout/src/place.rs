//! Flow placement and invalidation.
//!
//! Placement runs at most once per invalidation: an element that already has
//! a rectangle is left alone, along with everything beneath it. Nothing in
//! the engine invalidates on its own. After changing a declared size, a box
//! value, or the tree shape, call [`Scene::invalidate`] on the affected
//! subtree (usually the root) before laying out or drawing again.

use trellis_dom::NodeId;

use crate::geometry::Rect;
use crate::scene::Scene;
use crate::style::Flow;

impl Scene {
    /// Place `id` and its subtree, treating `id` as a root.
    ///
    /// The outer rectangle is `(0, 0, resolved_width, resolved_height)`.
    pub fn layout(&mut self, id: NodeId) {
        self.layout_with(id, None);
    }

    /// Place `id` inside the outer rectangle `hint`, or as a root when `hint`
    /// is `None`. A no-op if `id` is already placed.
    pub fn layout_with(&mut self, id: NodeId, hint: Option<Rect>) {
        if self.tree[id].cache().rect().is_some() {
            return;
        }

        let outer = match hint {
            Some(outer) => outer,
            None => {
                let width = self.resolve_width(id);
                let height = self.resolve_height(id);
                Rect::new(0, 0, width, height)
            }
        };

        let element = &self.tree[id];
        let content_box = element.content_box;
        let flow = element.flow;
        let rect =
            content_box.outer_to_element_bounds(outer.left, outer.top, outer.width, outer.height);

        #[cfg(feature = "layout-trace")]
        let _guard = crate::trace::enter(
            "PLACE",
            &format!("{id} {} {rect:?} flow={flow}", element.kind.name()),
        );

        self.tree[id].cache_mut().set_rect(rect);

        let children = self.tree.children(id).to_vec();
        match flow {
            Flow::Vertical => {
                // `rect` already excludes the border; the leading border is
                // counted again here.
                let mut cursor = rect.top + content_box.leading_offset(flow.axis());
                for child in children {
                    let width = self.resolve_width(child);
                    let height = self.resolve_height(child);
                    let mut slot = content_box.place_content(&rect, width, height);
                    slot.top = cursor;
                    self.layout_with(child, Some(slot));
                    cursor += height;
                }
            }
            Flow::Horizontal => {
                let mut cursor = rect.left + content_box.leading_offset(flow.axis());
                for child in children {
                    let width = self.resolve_width(child);
                    let height = self.resolve_height(child);
                    let mut slot = content_box.place_content(&rect, width, height);
                    slot.left = cursor;
                    self.layout_with(child, Some(slot));
                    cursor += width;
                }
            }
        }
    }

    /// Forget the resolved sizes and rectangles of `id` and every descendant.
    pub fn invalidate(&mut self, id: NodeId) {
        let subtree: Vec<NodeId> = self.tree.subtree(id).collect();

        #[cfg(feature = "layout-trace")]
        crate::trace::note("INVALIDATE", &format!("{id} ({} elements)", subtree.len()));

        for node in subtree {
            self.tree[node].cache_mut().clear();
        }
    }

    /// Final element rectangle of `id` (outer bounds minus border), if placed.
    #[must_use]
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.tree[id].cache().rect()
    }

    /// True once `id` has been placed and not invalidated since.
    #[must_use]
    pub fn is_placed(&self, id: NodeId) -> bool {
        self.rect(id).is_some()
    }
}
