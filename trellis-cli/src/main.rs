//! trellis: lay out a scene and render it to a PNG.
//!
//! Run with: cargo run --bin trellis -- --output card.png
//!
//! Scenes come from the built-in `stat-card` demo or a JSON scene file.
//! Layout can be inspected as an indented tree (`--dump`) or JSON (`--json`).

mod demo;
mod dump;
mod scene_file;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use trellis_common::warning::clear_warnings;
use trellis_layout::{Color, NodeId, Scene, Viewport};
use trellis_raster::{FontdueFontMetrics, render};

/// trellis: box-model layout for small raster displays
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the layout of the built-in stat card
    trellis --dump

    # Render it at 4x scale
    trellis -o card.png --scale 4

    # Lay out a JSON scene file on a 128x64 display
    trellis ui.json --width 128 --height 64 --json

    # Render with a specific font
    trellis ui.json -o ui.png --font ./fonts/mono.ttf
"#)]
struct Cli {
    /// Scene file to load, or `stat-card` for the built-in demo
    #[arg(value_name = "SCENE", default_value = "stat-card")]
    scene: String,

    /// Display width in pixels
    #[arg(long, default_value = "160")]
    width: u16,

    /// Display height in pixels
    #[arg(long, default_value = "120")]
    height: u16,

    /// Palette index the display is cleared to
    #[arg(long, default_value = "15")]
    background: u8,

    /// TrueType font for text (default: first monospace system font found)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Save the render to the specified file (PNG format)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Integer upscaling applied to the saved PNG
    #[arg(long, default_value = "1")]
    scale: u32,

    /// Print the placed element tree
    #[arg(short, long)]
    dump: bool,

    /// Print the placed element tree as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let font = match &cli.font {
        Some(path) => Some(FontdueFontMetrics::load(path)?),
        None => FontdueFontMetrics::load_system_font(),
    };

    let viewport = Viewport::new(i32::from(cli.width), i32::from(cli.height));
    let mut scene = match &font {
        Some(font) => Scene::with_fonts(viewport, Box::new(font.clone())),
        None => Scene::new(viewport),
    };

    let root = build_scene(&mut scene, &cli.scene)?;
    scene.layout(root);

    if cli.json {
        let value = dump::layout_json(&scene, root);
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("Failed to serialize layout")?
        );
    } else if cli.dump || cli.output.is_none() {
        dump::print_layout(&scene, root, 0);
        let stats = scene.measure_stats();
        println!(
            "{}",
            format!(
                "measured {} widths, {} heights, {} cache hits",
                stats.width_computations, stats.height_computations, stats.cache_hits
            )
            .dimmed()
        );
    }

    if let Some(output) = &cli.output {
        let canvas = render(&mut scene, root, Color(cli.background), font);
        let (width, height) = canvas.save_png(output, cli.scale)?;
        println!(
            "{} {width}x{height} render to {}",
            "Saved".green(),
            output.display()
        );
    }

    Ok(())
}

fn build_scene(scene: &mut Scene, name: &str) -> Result<NodeId> {
    if name == "stat-card" {
        Ok(demo::stat_card(scene))
    } else {
        scene_file::load(scene, Path::new(name))
    }
}
