//! Shorthand constructors for common element shapes.
//!
//! Each builder creates one element, attaches the given children in order,
//! and applies the given styles. None of them lay anything out.

use std::rc::Rc;

use trellis_common::image::Bitmap;
use trellis_dom::NodeId;

use crate::geometry::Rect;
use crate::kind::{ElementKind, ShapeStyle};
use crate::paint::Surface;
use crate::scene::Scene;
use crate::style::{Flow, Style};

impl Scene {
    /// A container stacking `children` along `flow`.
    pub fn container(&mut self, flow: Flow, children: &[NodeId], styles: &[Style]) -> NodeId {
        let id = self.create(ElementKind::Container);
        self.element_mut(id).flow = flow;
        for &child in children {
            self.append_child(id, child);
        }
        self.apply_styles(id, styles);
        id
    }

    /// A container stacking `children` top to bottom.
    pub fn vertical(&mut self, children: &[NodeId], styles: &[Style]) -> NodeId {
        self.container(Flow::Vertical, children, styles)
    }

    /// A container stacking `children` left to right.
    pub fn horizontal(&mut self, children: &[NodeId], styles: &[Style]) -> NodeId {
        self.container(Flow::Horizontal, children, styles)
    }

    /// A filled rectangle, optionally wrapping one child.
    pub fn boxed(&mut self, child: Option<NodeId>, styles: &[Style]) -> NodeId {
        self.shape(ShapeStyle::Filled, child, styles)
    }

    /// An outlined rectangle, optionally wrapping one child.
    pub fn frame(&mut self, child: Option<NodeId>, styles: &[Style]) -> NodeId {
        self.shape(ShapeStyle::Stroked, child, styles)
    }

    /// A line of text.
    pub fn text(&mut self, text: impl Into<String>, styles: &[Style]) -> NodeId {
        let id = self.create(ElementKind::text(text));
        self.apply_styles(id, styles);
        id
    }

    /// A bitmap.
    pub fn image(&mut self, bitmap: Rc<Bitmap>, styles: &[Style]) -> NodeId {
        let id = self.create(ElementKind::image(bitmap));
        self.apply_styles(id, styles);
        id
    }

    /// An element painted by `paint` with its final rectangle.
    pub fn callback(
        &mut self,
        paint: impl Fn(&mut dyn Surface, Rect) + 'static,
        styles: &[Style],
    ) -> NodeId {
        let id = self.create(ElementKind::callback(paint));
        self.apply_styles(id, styles);
        id
    }

    fn shape(&mut self, style: ShapeStyle, child: Option<NodeId>, styles: &[Style]) -> NodeId {
        let id = self.create(ElementKind::shape(style));
        if let Some(child) = child {
            self.append_child(id, child);
        }
        self.apply_styles(id, styles);
        id
    }
}
