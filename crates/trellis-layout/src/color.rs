//! Palette colors.
//!
//! Colors are indices into the display's palette. Index 0 means "unset":
//! shapes and borders with color 0 are not painted.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A palette index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Color(pub u8);

impl Color {
    /// The unset color. Nothing is painted with it.
    pub const NONE: Self = Self(0);
    /// Palette entry 1, the default border and text color.
    pub const FOREGROUND: Self = Self(1);

    /// True for every color except [`Color::NONE`].
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Color {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
