//! Human and machine readable dumps of a placed scene.

use owo_colors::OwoColorize;
use serde_json::{Map, Value, json};
use trellis_layout::{ElementKind, NodeId, Scene};

/// Print the placed tree under `id`, one element per line.
pub fn print_layout(scene: &Scene, id: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    let element = scene.element(id);

    let rect = scene.rect(id).map_or_else(
        || "unplaced".to_string(),
        |r| format!("({}, {}) {}x{}", r.left, r.top, r.width, r.height),
    );
    let label = match &element.kind {
        ElementKind::Text { text, .. } => format!(" {text:?}"),
        _ => String::new(),
    };

    println!(
        "{indent}{} {}{} {} {}",
        element.kind.name().cyan(),
        id.dimmed(),
        label.yellow(),
        rect,
        format!("[w={} h={}]", element.width, element.height).dimmed(),
    );

    for &child in scene.children(id) {
        print_layout(scene, child, depth + 1);
    }
}

/// The placed tree under `id` as a JSON value.
pub fn layout_json(scene: &Scene, id: NodeId) -> Value {
    let element = scene.element(id);
    let mut obj = Map::new();

    let _ = obj.insert("id".to_string(), json!(id.0));
    let _ = obj.insert("kind".to_string(), json!(element.kind.name()));
    if let ElementKind::Text { text, .. } = &element.kind {
        let _ = obj.insert("text".to_string(), json!(text));
    }
    let _ = obj.insert("flow".to_string(), json!(element.flow.to_string()));
    let _ = obj.insert("width".to_string(), json!(element.width.to_string()));
    let _ = obj.insert("height".to_string(), json!(element.height.to_string()));
    let _ = obj.insert("contentBox".to_string(), json!(element.content_box));
    let _ = obj.insert("rect".to_string(), json!(scene.rect(id)));

    let children: Vec<Value> = scene
        .children(id)
        .iter()
        .map(|&child| layout_json(scene, child))
        .collect();
    if !children.is_empty() {
        let _ = obj.insert("children".to_string(), Value::Array(children));
    }

    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use trellis_layout::{Style, Viewport};

    use super::*;

    #[test]
    fn test_layout_json_reports_rects() {
        let mut scene = Scene::new(Viewport::new(100, 50));
        let child = scene.boxed(None, &[Style::width(20), Style::height(5)]);
        let root = scene.vertical(&[child], &[Style::padding(1)]);
        scene.layout(root);

        let value = layout_json(&scene, root);
        assert_eq!(value["kind"], "container");
        assert_eq!(value["rect"]["width"], 22);
        assert_eq!(value["children"][0]["width"], "20");
        assert_eq!(value["children"][0]["rect"]["top"], 1);
    }

    #[test]
    fn test_unplaced_rect_is_null() {
        let mut scene = Scene::new(Viewport::new(100, 50));
        let root = scene.text("A", &[]);
        assert!(layout_json(&scene, root)["rect"].is_null());
    }
}
