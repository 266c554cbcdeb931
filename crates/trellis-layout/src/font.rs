//! Font selection and glyph-cell metrics.
//!
//! The display uses fixed-cell bitmap fonts: every glyph of a font occupies
//! the same `glyph_width` x `glyph_height` cell, so text measurement is a
//! multiplication. The metrics themselves come from the rendering backend
//! through the [`FontMetrics`] trait.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Which of the display's fonts a text element uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FontSelector {
    /// The regular 8-pixel-high font.
    #[default]
    Normal,
    /// The compact 5-pixel-high font.
    Small,
}

/// Size of one glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GlyphMetrics {
    /// Horizontal advance of every glyph, in pixels.
    pub glyph_width: i32,
    /// Height of every glyph, in pixels.
    pub glyph_height: i32,
}

impl GlyphMetrics {
    /// Pixel size `(width, height)` of a single line of `text`.
    ///
    /// Empty text measures 0x0 so an empty text element collapses to its
    /// padding and border.
    #[must_use]
    pub fn measure(&self, text: &str) -> (i32, i32) {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        if chars == 0 {
            return (0, 0);
        }
        (chars.saturating_mul(self.glyph_width), self.glyph_height)
    }
}

/// Font-metrics provider supplied by the rendering backend.
pub trait FontMetrics {
    /// Glyph-cell metrics of the given font.
    fn glyph_metrics(&self, font: FontSelector) -> GlyphMetrics;

    /// Whether the font can draw `ch`. Unknown glyphs still take up a cell.
    fn has_glyph(&self, _font: FontSelector, _ch: char) -> bool {
        true
    }
}

/// The display's built-in fonts: 6x8 for [`FontSelector::Normal`] and 6x5
/// for [`FontSelector::Small`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFonts;

impl FontMetrics for BuiltinFonts {
    fn glyph_metrics(&self, font: FontSelector) -> GlyphMetrics {
        match font {
            FontSelector::Normal => GlyphMetrics {
                glyph_width: 6,
                glyph_height: 8,
            },
            FontSelector::Small => GlyphMetrics {
                glyph_width: 6,
                glyph_height: 5,
            },
        }
    }

    fn has_glyph(&self, _font: FontSelector, ch: char) -> bool {
        ch == ' ' || ch.is_ascii_graphic()
    }
}
