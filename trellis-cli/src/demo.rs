//! The built-in `stat-card` scene: a monster status screen.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ SPARKY            (name box) │
//! │ HP: [L48 / bar / 95/138]     │
//! │ STATUS/OK                    │
//! ├───────────────┬──────────────┤
//! │ ATTACK     89 │ TYPE1/       │
//! │ ...           │   ELECTRIC   │
//! └───────────────┴──────────────┘
//! ```

use trellis_layout::{NodeId, Scene, Size, Style};

/// Panel background.
const PAPER: u8 = 1;
/// Text drawn on panels.
const INK: u8 = 15;
/// HP bar fill.
const HP_BAR: u8 = 3;

/// Build the stat card and return its root.
pub fn stat_card(scene: &mut Scene) -> NodeId {
    let name = name_view(scene);
    let header = scene.boxed(
        Some(name),
        &[Style::width(Size::Inherit), Style::align_right(), Style::BorderRight(2)],
    );

    let stats = stats_view(scene);
    let stats = scene.boxed(Some(stats), &[Style::border(2)]);
    let details = detail_view(scene);
    let details = scene.boxed(
        Some(details),
        &[Style::BorderBottom(2), Style::BorderTop(2), Style::BorderRight(2)],
    );
    let body = scene.horizontal(&[stats, details], &[]);

    scene.vertical(&[header, body], &[])
}

fn label(scene: &mut Scene, text: &str, small: bool) -> NodeId {
    let mut styles = vec![Style::color(INK)];
    if small {
        styles.push(Style::small_font());
    }
    scene.text(text, &styles)
}

fn row(scene: &mut Scene, text: &str, small: bool, styles: &[Style]) -> NodeId {
    let text = label(scene, text, small);
    scene.boxed(Some(text), styles)
}

fn panel(scene: &mut Scene, rows: &[NodeId], styles: &[Style]) -> NodeId {
    let column = scene.vertical(rows, &[Style::width(Size::Inherit)]);
    scene.boxed(Some(column), styles)
}

fn stats_view(scene: &mut Scene) -> NodeId {
    let name = [Style::align_left(), Style::width(Size::Inherit)];
    let value = [Style::align_right(), Style::width(Size::Inherit)];

    let mut rows = Vec::new();
    for (stat, amount) in [("ATTACK", "89"), ("DEFENSE", "86"), ("SPEED", "152"), ("SPECIAL", "132")] {
        rows.push(row(scene, stat, false, &name));
        rows.push(row(scene, amount, true, &value));
    }
    panel(
        scene,
        &rows,
        &[Style::color(PAPER), Style::width(60), Style::padding(2)],
    )
}

fn detail_view(scene: &mut Scene) -> NodeId {
    let name = [Style::align_left(), Style::width(Size::Inherit)];
    let detail = [
        Style::align_left(),
        Style::width(Size::Inherit),
        Style::PaddingLeft(5),
    ];

    let mut rows = Vec::new();
    for (heading, value) in [("TYPE1/", "ELECTRIC"), ("", ""), ("no/", "44196"), ("OT/", "Richard")] {
        rows.push(row(scene, heading, false, &name));
        rows.push(row(scene, value, true, &detail));
    }
    panel(
        scene,
        &rows,
        &[Style::color(PAPER), Style::width(60), Style::padding(2)],
    )
}

fn name_view(scene: &mut Scene) -> NodeId {
    let name = row(
        scene,
        "SPARKY",
        false,
        &[Style::width(Size::Inherit), Style::align_left()],
    );
    let hp = hp_view(scene);
    let hp = scene.boxed(
        Some(hp),
        &[
            Style::align_right(),
            Style::PaddingTop(1),
            Style::PaddingBottom(1),
            Style::width(Size::Inherit),
        ],
    );
    let status = row(
        scene,
        "STATUS/OK",
        false,
        &[Style::width(Size::Inherit), Style::align_left()],
    );
    panel(
        scene,
        &[name, hp, status],
        &[Style::color(PAPER), Style::padding(2), Style::width(70)],
    )
}

fn hp_view(scene: &mut Scene) -> NodeId {
    let caption = row(scene, "HP:", true, &[Style::PaddingTop(3)]);
    let level = row(
        scene,
        "L48",
        true,
        &[Style::width(Size::Inherit), Style::align_center()],
    );
    let bar = scene.boxed(
        None,
        &[
            Style::width(Size::Inherit),
            Style::height(4),
            Style::color(HP_BAR),
            Style::border(1),
        ],
    );
    let points = row(
        scene,
        "95/138",
        true,
        &[Style::width(Size::Inherit), Style::align_right()],
    );
    let gauge = scene.vertical(&[level, bar, points], &[Style::width(30)]);
    scene.horizontal(&[caption, gauge], &[])
}
