//! Size resolution: the measurement pass.
//!
//! Each axis is resolved independently by [`Scene::resolve`] and memoized on
//! the element until the next invalidation:
//!
//! | declared    | resolved size                                                  |
//! |-------------|----------------------------------------------------------------|
//! | `Fixed(n)`  | `n`                                                            |
//! | `Intrinsic` | children aggregate (sum on the flow axis, max across) + insets |
//! | `Inherit`   | parent's content extent (viewport for roots)                   |
//! | `Fill`      | parent's content extent left over after non-`Fill` siblings, split evenly |
//!
//! Measurement only ever looks upward (parent, siblings) for `Inherit` and
//! `Fill`, and only downward for `Intrinsic`. When a parent aggregates its
//! children, an `Inherit` or `Fill` child contributes its own content size
//! instead of resolving against the parent, so the two directions never meet.

use serde::Serialize;
use trellis_dom::NodeId;

use crate::geometry::Axis;
use crate::scene::Scene;
use crate::style::Size;

/// Counters for the measurement pass.
///
/// Every [`Scene::resolve`] either hits the cache or performs exactly one
/// computation, so `width_computations + height_computations + cache_hits`
/// equals the number of resolutions since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MeasureStats {
    /// Widths computed on a cache miss.
    pub width_computations: u64,
    /// Heights computed on a cache miss.
    pub height_computations: u64,
    /// Resolutions answered from the cache.
    pub cache_hits: u64,
}

impl MeasureStats {
    /// Total computations on both axes.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.width_computations + self.height_computations
    }

    fn record_miss(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => self.width_computations += 1,
            Axis::Vertical => self.height_computations += 1,
        }
    }
}

impl Scene {
    /// Resolved width of `id`, measuring it if necessary.
    pub fn resolve_width(&mut self, id: NodeId) -> i32 {
        self.resolve(id, Axis::Horizontal)
    }

    /// Resolved height of `id`, measuring it if necessary.
    pub fn resolve_height(&mut self, id: NodeId) -> i32 {
        self.resolve(id, Axis::Vertical)
    }

    /// Resolved extent of `id` along `axis`.
    ///
    /// Returns the cached value when there is one; otherwise computes it from
    /// the declared size and caches the result.
    pub fn resolve(&mut self, id: NodeId, axis: Axis) -> i32 {
        if let Some(cached) = self.tree[id].cache().extent(axis) {
            self.stats.cache_hits += 1;
            return cached;
        }
        self.stats.record_miss(axis);

        let declared = self.tree[id].declared(axis);

        #[cfg(feature = "layout-trace")]
        let _guard = crate::trace::enter(
            "MEASURE",
            &format!("{id} {} {axis:?} declared={declared}", self.tree[id].kind.name()),
        );

        let resolved = match declared {
            Size::Fixed(px) => i32::from(px),
            Size::Intrinsic => self.intrinsic(id, axis),
            Size::Inherit => self.parent_content(self.tree.parent(id), axis),
            Size::Fill => self.fill_share(id, axis),
        };

        #[cfg(feature = "layout-trace")]
        crate::trace::note("MEASURE", &format!("{id} {axis:?} = {resolved}"));

        self.tree[id].cache_mut().set_extent(axis, resolved);
        resolved
    }

    /// Content extent of `parent` along `axis`: its resolved size minus its
    /// own padding and border. A missing parent stands for the viewport.
    pub fn parent_content(&mut self, parent: Option<NodeId>, axis: Axis) -> i32 {
        match parent {
            None => self.viewport.extent(axis),
            Some(parent) => {
                let outer = self.resolve(parent, axis);
                outer - self.tree[parent].content_box.insets(axis)
            }
        }
    }

    /// Size `id` would have from its own content alone, regardless of what
    /// it declares. Not cached.
    pub fn intrinsic(&mut self, id: NodeId, axis: Axis) -> i32 {
        let children = self.tree.children(id).to_vec();
        let element = &self.tree[id];
        let insets = element.content_box.insets(axis);

        let content = if children.is_empty() {
            let (width, height) = element.kind.leaf_size(self.fonts.as_ref());
            match axis {
                Axis::Horizontal => width,
                Axis::Vertical => height,
            }
        } else {
            let stacked = element.flow.axis() == axis;
            let mut total = 0;
            for child in children {
                let size = self.contribution(child, axis);
                total = if stacked { total + size } else { total.max(size) };
            }
            total
        };

        content + insets
    }

    /// What `child` adds to its parent's intrinsic size along `axis`.
    fn contribution(&mut self, child: NodeId, axis: Axis) -> i32 {
        match self.tree[child].declared(axis) {
            Size::Fixed(_) | Size::Intrinsic => self.resolve(child, axis),
            Size::Inherit | Size::Fill => match self.tree[child].cache().extent(axis) {
                Some(cached) => cached,
                None => self.intrinsic(child, axis),
            },
        }
    }

    /// Resolve a `Fill` extent.
    ///
    /// Across the parent's flow this is the parent's content extent. Along it,
    /// the content extent minus every non-`Fill` sibling is divided (floor)
    /// among the `Fill` siblings, never going below zero.
    fn fill_share(&mut self, id: NodeId, axis: Axis) -> i32 {
        let Some(parent) = self.tree.parent(id) else {
            return self.viewport.extent(axis);
        };
        let available = self.parent_content(Some(parent), axis);
        if self.tree[parent].flow.axis() != axis {
            return available;
        }

        let siblings = self.tree.children(parent).to_vec();
        let mut claimed = 0;
        let mut fillers = 0;
        for sibling in siblings {
            if self.tree[sibling].declared(axis) == Size::Fill {
                fillers += 1;
            } else {
                claimed += self.resolve(sibling, axis);
            }
        }

        let remaining = (available - claimed).max(0);
        remaining.div_euclid(fillers.max(1))
    }

    /// Counters accumulated since the scene was created or last reset.
    #[must_use]
    pub const fn measure_stats(&self) -> MeasureStats {
        self.stats
    }

    /// Zero the measurement counters.
    pub fn reset_measure_stats(&mut self) {
        self.stats = MeasureStats::default();
    }
}
