//! The scene: an element tree plus the viewport and font metrics it is laid
//! out against.
//!
//! Measurement lives in [`crate::measure`], placement and invalidation in
//! [`crate::place`], painting in [`crate::paint`]; this module holds the tree
//! and its structural edits.

use std::fmt;

use trellis_dom::{NodeId, Tree, TreeError};

use crate::element::Element;
use crate::font::{BuiltinFonts, FontMetrics};
use crate::geometry::Axis;
use crate::kind::ElementKind;
use crate::measure::MeasureStats;
use crate::style::Style;

/// Size of the display, used wherever an element has no parent to size
/// itself against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Display width in pixels.
    pub width: i32,
    /// Display height in pixels.
    pub height: i32,
}

impl Viewport {
    /// A viewport of the given pixel size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
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

/// A retained element tree ready to be measured, placed, and drawn.
///
/// Elements are created detached and become part of a hierarchy through
/// [`Scene::append_child`]. Any element without a parent can act as the root
/// of a draw.
pub struct Scene {
    pub(crate) tree: Tree<Element>,
    pub(crate) viewport: Viewport,
    pub(crate) fonts: Box<dyn FontMetrics>,
    pub(crate) stats: MeasureStats,
}

impl Scene {
    /// An empty scene using the display's built-in fonts.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_fonts(viewport, Box::new(BuiltinFonts))
    }

    /// An empty scene measuring text with a backend-supplied font provider.
    #[must_use]
    pub fn with_fonts(viewport: Viewport, fonts: Box<dyn FontMetrics>) -> Self {
        Self {
            tree: Tree::new(),
            viewport,
            fonts,
            stats: MeasureStats::default(),
        }
    }

    /// The viewport roots are sized against.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The font provider used for text measurement and painting.
    #[must_use]
    pub fn fonts(&self) -> &dyn FontMetrics {
        self.fonts.as_ref()
    }

    /// The underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &Tree<Element> {
        &self.tree
    }

    /// Create a detached element of the given kind with default styles.
    pub fn create(&mut self, kind: ElementKind) -> NodeId {
        self.tree.alloc(Element::new(kind))
    }

    /// Borrow an element.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn element(&self, id: NodeId) -> &Element {
        &self.tree[id]
    }

    /// Borrow an element mutably. Changes are not reflected in layout until
    /// the element is invalidated.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    pub fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.tree[id]
    }

    /// Parent of `id`, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    /// Children of `id`, in flow order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    /// Topmost ancestor of `id`.
    #[must_use]
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.tree.root_of(id)
    }

    /// Append `child` to `parent`, first detaching it from any previous parent.
    ///
    /// # Panics
    ///
    /// Panics if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.append_child(parent, child);
    }

    /// Checked form of [`Scene::append_child`].
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if the edit would create a cycle or an id is stale.
    pub fn try_append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.tree.try_append_child(parent, child)
    }

    /// Remove `child` from `parent`. Returns false if it was not a child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.tree.remove_child(parent, child)
    }

    /// Detach `id` from its parent, returning the old parent.
    pub fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        self.tree.detach(id)
    }

    /// Detach and drop `id` with its whole subtree. Returns how many
    /// elements were destroyed.
    pub fn destroy(&mut self, id: NodeId) -> usize {
        self.tree.remove_subtree(id)
    }

    /// Apply one style to `id`. Never invalidates.
    pub fn apply_style(&mut self, id: NodeId, style: &Style) {
        self.tree[id].apply_style(style);
    }

    /// Apply styles to `id` in order. Never invalidates.
    pub fn apply_styles(&mut self, id: NodeId, styles: &[Style]) {
        self.tree[id].apply_styles(styles);
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("viewport", &self.viewport)
            .field("elements", &self.tree.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
