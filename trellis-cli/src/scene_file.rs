//! Scenes described as JSON.
//!
//! A scene file holds one element object; containers nest their children:
//!
//! ```json
//! {
//!   "kind": "vertical",
//!   "styles": ["width=inherit"],
//!   "children": [
//!     { "kind": "box", "styles": ["color=1", "padding=2"],
//!       "children": [{ "kind": "text", "text": "HELLO", "styles": ["color=15"] }] },
//!     { "kind": "image", "src": "sprite.png" }
//!   ]
//! }
//! ```
//!
//! Image paths are resolved relative to the scene file.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use trellis_layout::{NodeId, Scene, Style};
use trellis_raster::load_bitmap;

/// Element kinds a scene file can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NodeKind {
    Box,
    Frame,
    Vertical,
    Horizontal,
    Text,
    Image,
}

/// One element as written in the file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneNode {
    kind: NodeKind,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    src: Option<String>,
    #[serde(default)]
    styles: Vec<String>,
    #[serde(default)]
    children: Vec<SceneNode>,
}

/// Read a scene file and build it into `scene`, returning the root.
pub fn load(scene: &mut Scene, path: &Path) -> Result<NodeId> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    parse(scene, &source, base).with_context(|| format!("Invalid scene file: {}", path.display()))
}

/// Build a scene from JSON text. Image paths are joined onto `base`.
pub fn parse(scene: &mut Scene, source: &str, base: &Path) -> Result<NodeId> {
    let node: SceneNode = serde_json::from_str(source)?;
    build(scene, &node, base)
}

fn build(scene: &mut Scene, node: &SceneNode, base: &Path) -> Result<NodeId> {
    let styles = node
        .styles
        .iter()
        .map(|text| {
            text.parse::<Style>()
                .with_context(|| format!("bad style on {:?} element", node.kind))
        })
        .collect::<Result<Vec<_>>>()?;

    let children = node
        .children
        .iter()
        .map(|child| build(scene, child, base))
        .collect::<Result<Vec<_>>>()?;

    let id = match node.kind {
        NodeKind::Vertical => scene.vertical(&children, &styles),
        NodeKind::Horizontal => scene.horizontal(&children, &styles),
        NodeKind::Box | NodeKind::Frame => {
            if children.len() > 1 {
                bail!(
                    "a {:?} element wraps at most one child, found {}",
                    node.kind,
                    children.len()
                );
            }
            let child = children.first().copied();
            if node.kind == NodeKind::Box {
                scene.boxed(child, &styles)
            } else {
                scene.frame(child, &styles)
            }
        }
        NodeKind::Text => {
            leaf_only(node)?;
            scene.text(node.text.as_deref().unwrap_or_default(), &styles)
        }
        NodeKind::Image => {
            leaf_only(node)?;
            let Some(src) = node.src.as_deref() else {
                bail!("image element has no 'src'");
            };
            let path = base.join(src);
            let bitmap = load_bitmap(&path)
                .with_context(|| format!("Failed to load image: {}", path.display()))?;
            scene.image(Rc::new(bitmap), &styles)
        }
    };
    Ok(id)
}

fn leaf_only(node: &SceneNode) -> Result<()> {
    if node.children.is_empty() {
        Ok(())
    } else {
        bail!("{:?} elements cannot have children", node.kind)
    }
}

#[cfg(test)]
mod tests {
    use trellis_layout::{ElementKind, Rect, Size, Viewport};

    use super::*;

    fn scene() -> Scene {
        Scene::new(Viewport::new(160, 120))
    }

    #[test]
    fn test_parse_nested_scene() {
        let mut scene = scene();
        let source = r#"{
            "kind": "vertical",
            "children": [
                { "kind": "box", "styles": ["width=40", "height=10", "color=2"] },
                { "kind": "box", "styles": ["padding=1"],
                  "children": [{ "kind": "text", "text": "HI" }] }
            ]
        }"#;
        let root = parse(&mut scene, source, Path::new(".")).unwrap();

        let children = scene.children(root).to_vec();
        assert_eq!(children.len(), 2);
        assert_eq!(scene.element(children[0]).width, Size::Fixed(40));
        assert!(matches!(
            scene.element(scene.children(children[1])[0]).kind,
            ElementKind::Text { ref text, .. } if text == "HI"
        ));

        scene.layout(root);
        assert_eq!(scene.rect(children[0]), Some(Rect::new(0, 0, 40, 10)));
    }

    #[test]
    fn test_box_with_two_children_is_rejected() {
        let mut scene = scene();
        let source = r#"{ "kind": "box", "children": [{ "kind": "text" }, { "kind": "text" }] }"#;
        let err = parse(&mut scene, source, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("at most one child"));
    }

    #[test]
    fn test_bad_style_names_the_element() {
        let mut scene = scene();
        let source = r#"{ "kind": "text", "text": "X", "styles": ["wdth=4"] }"#;
        let err = parse(&mut scene, source, Path::new(".")).unwrap_err();
        assert!(format!("{err:#}").contains("unknown style attribute 'wdth'"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut scene = scene();
        let source = r#"{ "kind": "vertical", "colour": 3 }"#;
        assert!(parse(&mut scene, source, Path::new(".")).is_err());
    }

    #[test]
    fn test_image_without_src_is_rejected() {
        let mut scene = scene();
        let err = parse(&mut scene, r#"{ "kind": "image" }"#, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("no 'src'"));
    }
}
