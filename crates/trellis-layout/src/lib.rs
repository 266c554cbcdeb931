//! Trellis layout engine
//!
//! A retained-mode box-model layout engine for small palette displays. An
//! element tree measures itself, places its children by flow, and paints
//! onto a host-supplied [`Surface`].
//!
//! # Architecture
//!
//! ```text
//! Scene (Tree<Element> + Viewport + FontMetrics)
//!    │
//!    ├─ apply_style ──► Element fields (no invalidation)
//!    │
//!    ├─ resolve ──────► cached width / height     (measure)
//!    ├─ layout ───────► cached element rectangle  (place)
//!    ├─ invalidate ───► clears all three caches, whole subtree
//!    │
//!    └─ draw ─────────► Surface calls, parent before children
//! ```
//!
//! # Example
//!
//! ```
//! use trellis_layout::{Scene, Size, Style, Viewport};
//!
//! let mut scene = Scene::new(Viewport::new(160, 120));
//! let a = scene.boxed(None, &[Style::width(Size::Inherit), Style::height(10)]);
//! let b = scene.boxed(None, &[Style::width(Size::Inherit), Style::height(15)]);
//! let root = scene.vertical(&[a, b], &[Style::width(Size::Inherit), Style::height(Size::Inherit)]);
//!
//! scene.layout(root);
//! assert_eq!(scene.rect(b).map(|r| r.top), Some(10));
//! assert_eq!(scene.rect(b).map(|r| r.width), Some(160));
//! ```
//!
//! # Features
//!
//! - `layout-trace`: print measurement, placement, and invalidation steps to
//!   stderr.

pub mod builder;
pub mod color;
pub mod content_box;
pub mod element;
pub mod font;
pub mod geometry;
pub mod kind;
pub mod measure;
pub mod paint;
pub mod place;
pub mod scene;
pub mod style;

#[cfg(feature = "layout-trace")]
mod trace;

pub use color::Color;
pub use content_box::{ContentAlign, ContentBox};
pub use element::{Element, LayoutCache};
pub use font::{BuiltinFonts, FontMetrics, FontSelector, GlyphMetrics};
pub use geometry::{Axis, BoxSides, Rect};
pub use kind::{ElementKind, PaintFn, ShapeStyle};
pub use measure::MeasureStats;
pub use paint::{DisplayCommand, DisplayList, Surface};
pub use scene::{Scene, Viewport};
pub use style::{Flow, Size, Style, StyleError, StyleName};

pub use trellis_dom::{NodeId, TreeError};
