//! Glyph cell metrics backed by a TrueType font.
//!
//! The layout engine sizes text as a row of identical cells. This provider
//! derives each font's cell from a real font: the advance of `'0'` for the
//! width and the font's line height for the height, both rounded up.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use fontdue::{Font, FontSettings};
use trellis_layout::{FontMetrics, FontSelector, GlyphMetrics};

/// Monospace fonts searched by [`FontdueFontMetrics::load_system_font`].
const FONT_SEARCH_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    // macOS
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    // Windows
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Font metrics and glyph source for text cells.
///
/// Cloning is cheap: clones share the parsed font.
#[derive(Clone)]
pub struct FontdueFontMetrics {
    font: Rc<Font>,
}

impl FontdueFontMetrics {
    /// Wrap an already parsed font.
    #[must_use]
    pub fn new(font: Font) -> Self {
        Self {
            font: Rc::new(font),
        }
    }

    /// Parse a TrueType or OpenType font.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a font fontdue can read.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow!("failed to parse font: {e}"))?;
        Ok(Self::new(font))
    }

    /// Read and parse a font file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read font '{}'", path.display()))?;
        Self::from_bytes(bytes).with_context(|| format!("in font file '{}'", path.display()))
    }

    /// Try the usual system locations for a monospace font.
    #[must_use]
    pub fn load_system_font() -> Option<Self> {
        FONT_SEARCH_PATHS
            .iter()
            .find_map(|path| Self::load(Path::new(path)).ok())
    }

    /// The underlying fontdue font.
    #[must_use]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Pixel size glyphs of `font` are rasterized at.
    #[must_use]
    pub const fn pixel_size(font: FontSelector) -> f32 {
        match font {
            FontSelector::Normal => 8.0,
            FontSelector::Small => 6.0,
        }
    }

    /// Distance from the top of a cell to the baseline, in whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn ascent(&self, font: FontSelector) -> i32 {
        let px = Self::pixel_size(font);
        self.font
            .horizontal_line_metrics(px)
            .map_or(px, |line| line.ascent)
            .ceil() as i32
    }
}

impl FontMetrics for FontdueFontMetrics {
    #[allow(clippy::cast_possible_truncation)]
    fn glyph_metrics(&self, font: FontSelector) -> GlyphMetrics {
        let px = Self::pixel_size(font);
        let advance = self.font.metrics('0', px).advance_width;
        let line = self
            .font
            .horizontal_line_metrics(px)
            .map_or(px, |line| line.new_line_size);

        GlyphMetrics {
            glyph_width: (advance.ceil() as i32).max(1),
            glyph_height: (line.ceil() as i32).max(1),
        }
    }

    fn has_glyph(&self, _font: FontSelector, ch: char) -> bool {
        ch == ' ' || self.font.lookup_glyph_index(ch) != 0
    }
}

impl fmt::Debug for FontdueFontMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontdueFontMetrics")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}
