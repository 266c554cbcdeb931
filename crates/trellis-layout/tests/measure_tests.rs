//! Integration tests for size resolution.

use trellis_layout::{Axis, Flow, NodeId, Scene, Size, Style, Viewport};

fn scene() -> Scene {
    Scene::new(Viewport::new(160, 120))
}

fn leaf(scene: &mut Scene, width: i32, height: i32) -> NodeId {
    scene.boxed(None, &[Style::width(width), Style::height(height)])
}

#[test]
fn test_vertical_flow_sums_heights_and_maxes_widths() {
    let mut scene = scene();
    let a = leaf(&mut scene, 5, 10);
    let b = leaf(&mut scene, 7, 20);
    let c = leaf(&mut scene, 3, 30);
    let root = scene.vertical(&[a, b, c], &[]);

    assert_eq!(scene.resolve_height(root), 60);
    assert_eq!(scene.resolve_width(root), 7);
}

#[test]
fn test_horizontal_flow_sums_widths_and_maxes_heights() {
    let mut scene = scene();
    let a = leaf(&mut scene, 10, 4);
    let b = leaf(&mut scene, 20, 9);
    let c = leaf(&mut scene, 30, 2);
    let root = scene.horizontal(&[a, b, c], &[]);

    assert_eq!(scene.resolve_width(root), 60);
    assert_eq!(scene.resolve_height(root), 9);
}

#[test]
fn test_intrinsic_adds_padding_and_border() {
    let mut scene = scene();
    let child = leaf(&mut scene, 10, 10);
    let root = scene.vertical(&[child], &[Style::padding(2), Style::border(1)]);

    assert_eq!(scene.resolve_width(root), 16);
    assert_eq!(scene.resolve_height(root), 16);
}

#[test]
fn test_childless_container_is_just_its_insets() {
    let mut scene = scene();
    let root = scene.vertical(&[], &[Style::PaddingLeft(3), Style::BorderRight(2)]);

    assert_eq!(scene.resolve_width(root), 5);
    assert_eq!(scene.resolve_height(root), 0);
}

#[test]
fn test_text_measures_glyph_cells() {
    let mut scene = scene();
    let normal = scene.text("HP:", &[]);
    let small = scene.text("HP:", &[Style::small_font(), Style::padding(1)]);
    let empty = scene.text("", &[]);

    assert_eq!(scene.resolve_width(normal), 18);
    assert_eq!(scene.resolve_height(normal), 8);
    assert_eq!(scene.resolve_width(small), 20);
    assert_eq!(scene.resolve_height(small), 7);
    assert_eq!(scene.resolve_width(empty), 0);
    assert_eq!(scene.resolve_height(empty), 0);
}

#[test]
fn test_resolution_is_memoized_until_invalidated() {
    let mut scene = scene();
    let a = leaf(&mut scene, 12, 3);
    let root = scene.vertical(&[a], &[]);

    scene.reset_measure_stats();
    let first = scene.resolve_width(root);
    let after_first = scene.measure_stats();
    assert_eq!(after_first.width_computations, 2);

    let second = scene.resolve_width(root);
    let after_second = scene.measure_stats();
    assert_eq!(first, second);
    assert_eq!(after_second.computations(), after_first.computations());
    assert_eq!(after_second.cache_hits, after_first.cache_hits + 1);

    // Declared size changes are invisible until invalidation.
    scene.element_mut(root).width = Size::Fixed(50);
    assert_eq!(scene.resolve_width(root), 12);

    scene.invalidate(root);
    assert_eq!(scene.resolve_width(root), 50);
}

#[test]
fn test_inherit_takes_parent_content_extent() {
    let mut scene = scene();
    let child = scene.boxed(None, &[Style::width(Size::Inherit), Style::height(Size::Inherit)]);
    let _root = scene.vertical(
        &[child],
        &[Style::width(100), Style::height(80), Style::padding(5), Style::border(2)],
    );

    assert_eq!(scene.resolve_width(child), 86);
    assert_eq!(scene.resolve_height(child), 66);
}

#[test]
fn test_root_inherit_and_fill_use_viewport() {
    let mut scene = scene();
    let inherit = scene.vertical(&[], &[Style::width(Size::Inherit)]);
    let fill = scene.vertical(&[], &[Style::height(Size::Fill)]);

    assert_eq!(scene.resolve_width(inherit), 160);
    assert_eq!(scene.resolve_height(fill), 120);
}

#[test]
fn test_inherit_child_follows_intrinsic_parent() {
    let mut scene = scene();
    let wide = leaf(&mut scene, 30, 5);
    let stretched = scene.boxed(None, &[Style::width(Size::Inherit), Style::height(5)]);
    let root = scene.vertical(&[wide, stretched], &[]);

    assert_eq!(scene.resolve_width(root), 30);
    assert_eq!(scene.resolve_width(stretched), 30);
}

#[test]
fn test_fill_splits_remaining_flow_space() {
    let mut scene = scene();
    let header = leaf(&mut scene, 10, 21);
    let first = scene.boxed(None, &[Style::width(Size::Fill), Style::height(Size::Fill)]);
    let second = scene.boxed(None, &[Style::height(Size::Fill)]);
    let _root = scene.vertical(
        &[header, first, second],
        &[Style::width(60), Style::height(100)],
    );

    // (100 - 21) / 2, floored.
    assert_eq!(scene.resolve_height(first), 39);
    assert_eq!(scene.resolve_height(second), 39);
    // Across the flow, fill is the parent's content width.
    assert_eq!(scene.resolve_width(first), 60);
}

#[test]
fn test_fill_never_goes_negative() {
    let mut scene = scene();
    let big = leaf(&mut scene, 200, 5);
    let filler = scene.boxed(None, &[Style::width(Size::Fill)]);
    let _root = scene.horizontal(&[big, filler], &[Style::width(100), Style::height(5)]);

    assert_eq!(scene.resolve_width(filler), 0);
}

#[test]
fn test_fill_contributes_its_content_to_intrinsic_parent() {
    let mut scene = scene();
    let label = scene.text("AB", &[]);
    let filler = scene.vertical(&[label], &[Style::width(Size::Fill)]);
    let fixed = leaf(&mut scene, 4, 8);
    let root = scene.container(Flow::Horizontal, &[fixed, filler], &[]);

    // 4 + the label's 12 columns.
    assert_eq!(scene.resolve_width(root), 16);
    assert_eq!(scene.resolve_width(filler), 12);
}

#[test]
fn test_stats_count_each_axis() {
    let mut scene = scene();
    let root = leaf(&mut scene, 1, 1);
    scene.reset_measure_stats();

    let _ = scene.resolve(root, Axis::Horizontal);
    let _ = scene.resolve(root, Axis::Vertical);
    let _ = scene.resolve(root, Axis::Vertical);

    let stats = scene.measure_stats();
    assert_eq!(stats.width_computations, 1);
    assert_eq!(stats.height_computations, 1);
    assert_eq!(stats.cache_hits, 1);
}
