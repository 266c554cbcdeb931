//! Property tests for the content-box model.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use trellis_layout::{BoxSides, Color, ContentAlign, ContentBox, Rect};

fn content_box(padding: BoxSides, border: BoxSides, align: ContentAlign) -> ContentBox {
    ContentBox {
        padding,
        border,
        border_color: Color::FOREGROUND,
        align,
    }
}

fn sides((left, top, right, bottom): (u8, u8, u8, u8)) -> BoxSides {
    let mut sides = BoxSides::default();
    sides.set_left(i32::from(left));
    sides.set_top(i32::from(top));
    sides.set_right(i32::from(right));
    sides.set_bottom(i32::from(bottom));
    sides
}

#[quickcheck]
fn border_subtraction_is_exact(border: (u8, u8, u8, u8), outer: (i16, i16, u16, u16)) -> TestResult {
    let (left, top, width, height) = (
        i32::from(outer.0),
        i32::from(outer.1),
        i32::from(outer.2),
        i32::from(outer.3),
    );
    let border = sides(border);
    if border.horizontal() >= width || border.vertical() >= height {
        return TestResult::discard();
    }

    let cb = content_box(BoxSides::default(), border, ContentAlign::Center);
    let rect = cb.outer_to_element_bounds(left, top, width, height);

    TestResult::from_bool(
        rect.width == width - border.left() - border.right()
            && rect.height == height - border.top() - border.bottom()
            && rect.left == left + border.left()
            && rect.top == top + border.top()
            && cb.element_to_outer_bounds(rect) == Rect::new(left, top, width, height),
    )
}

#[quickcheck]
fn right_alignment_at_full_width_lands_on_left_edge(
    padding: (u8, u8, u8, u8),
    element: (i16, i16, u16, u16),
) -> TestResult {
    let padding = sides(padding);
    let element = Rect::new(
        i32::from(element.0),
        i32::from(element.1),
        i32::from(element.2),
        i32::from(element.3),
    );
    if padding.right() > element.width {
        return TestResult::discard();
    }

    let cb = content_box(padding, BoxSides::default(), ContentAlign::Right);
    let placed = cb.place_content(&element, element.width - padding.right(), 1);
    TestResult::from_bool(placed.left == element.left)
}

#[quickcheck]
fn left_alignment_ignores_content_width(
    padding: (u8, u8, u8, u8),
    element: (i16, i16, u16, u16),
    content_width: i16,
) -> bool {
    let padding = sides(padding);
    let element = Rect::new(
        i32::from(element.0),
        i32::from(element.1),
        i32::from(element.2),
        i32::from(element.3),
    );
    let cb = content_box(padding, BoxSides::default(), ContentAlign::Left);
    let placed = cb.place_content(&element, i32::from(content_width), 3);
    placed.left == element.left + padding.left()
        && placed.top == element.top + padding.top()
        && placed.width == i32::from(content_width)
        && placed.height == 3
}

#[test]
fn test_box_sides_truncate_to_eight_bits() {
    let mut sides = BoxSides::default();
    sides.set_left(256);
    sides.set_top(257);
    sides.set_right(-1);
    sides.set_bottom(255);
    assert_eq!(sides.left(), 0);
    assert_eq!(sides.top(), 1);
    assert_eq!(sides.right(), 255);
    assert_eq!(sides.bottom(), 255);
}

#[test]
fn test_center_alignment_floors_odd_extents() {
    let cb = content_box(BoxSides::default(), BoxSides::default(), ContentAlign::Center);
    let element = Rect::new(10, 0, 11, 11);
    // 10 + 5 - 1
    assert_eq!(cb.place_content(&element, 3, 3).left, 14);
    // Content wider than the element hangs out on both sides.
    assert_eq!(cb.place_content(&element, 21, 3).left, 10 + 5 - 10);
}
