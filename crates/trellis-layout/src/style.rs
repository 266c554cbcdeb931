//! Style attributes and their values.
//!
//! A [`Style`] is one attribute together with its value. Styles are applied
//! once to an element and discarded; applying a list of styles applies each
//! in order, so the last write to an attribute wins.
//!
//! Styles can be built with the constructors on [`Style`] or parsed from
//! `name=value` text:
//!
//! ```text
//! width=inherit   padding=2   border-bottom=1   content-align=right   font=small
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::color::Color;
use crate::content_box::ContentAlign;
use crate::font::FontSelector;
use crate::geometry::Axis;

/// Declared width or height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Size {
    /// Derived bottom-up from children (or text/bitmap content) plus
    /// padding and border.
    #[default]
    Intrinsic,
    /// Equal to the parent's content size on the same axis, regardless of
    /// siblings. A root element inherits the viewport.
    Inherit,
    /// The space left along the parent's flow axis after every non-fill
    /// sibling is sized, split evenly between fill siblings. On the parent's
    /// cross axis this behaves exactly like [`Size::Inherit`].
    Fill,
    /// A concrete size in pixels.
    Fixed(u16),
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intrinsic => f.write_str("intrinsic"),
            Self::Inherit => f.write_str("inherit"),
            Self::Fill => f.write_str("fill"),
            Self::Fixed(px) => write!(f, "{px}"),
        }
    }
}

impl FromStr for Size {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intrinsic" | "auto" => Ok(Self::Intrinsic),
            "inherit" => Ok(Self::Inherit),
            "fill" => Ok(Self::Fill),
            other => other.parse().map(Self::Fixed),
        }
    }
}

impl From<u16> for Size {
    fn from(px: u16) -> Self {
        Self::Fixed(px)
    }
}

/// Clamps into `0..=u16::MAX`, so negative sizes become zero.
impl From<i32> for Size {
    fn from(px: i32) -> Self {
        Self::Fixed(u16::try_from(px.max(0)).unwrap_or(u16::MAX))
    }
}

/// The axis along which a container stacks its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Flow {
    /// Children stack top to bottom.
    #[default]
    Vertical,
    /// Children stack left to right.
    Horizontal,
}

impl Flow {
    /// The axis children advance along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Vertical => Axis::Vertical,
            Self::Horizontal => Axis::Horizontal,
        }
    }
}

/// The closed set of style attribute names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StyleName {
    /// Declared width.
    Width,
    /// Declared height.
    Height,
    /// Left padding.
    PaddingLeft,
    /// Top padding.
    PaddingTop,
    /// Right padding.
    PaddingRight,
    /// Bottom padding.
    PaddingBottom,
    /// All four paddings.
    Padding,
    /// Left border thickness.
    BorderLeft,
    /// Top border thickness.
    BorderTop,
    /// Right border thickness.
    BorderRight,
    /// Bottom border thickness.
    BorderBottom,
    /// All four border thicknesses.
    Border,
    /// Border ring color.
    BorderColor,
    /// Cross-axis alignment of children.
    ContentAlign,
    /// Flow orientation.
    Flow,
    /// Shape fill/stroke color, or text foreground color.
    Color,
    /// Text font.
    Font,
}

/// Errors raised when parsing a style from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The text is not of the form `name=value`.
    #[error("expected 'name=value', got '{0}'")]
    Malformed(String),
    /// The attribute name is not one of [`StyleName`].
    #[error("unknown style attribute '{0}'")]
    UnknownName(String),
    /// The value does not fit the attribute.
    #[error("invalid value '{value}' for '{name}'")]
    InvalidValue {
        /// Attribute being parsed.
        name: StyleName,
        /// The offending value text.
        value: String,
    },
}

/// One style attribute with its value.
///
/// Box magnitudes (padding and border) accept any integer and are truncated
/// to 8 bits when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Declared width.
    Width(Size),
    /// Declared height.
    Height(Size),
    /// Left padding.
    PaddingLeft(i32),
    /// Top padding.
    PaddingTop(i32),
    /// Right padding.
    PaddingRight(i32),
    /// Bottom padding.
    PaddingBottom(i32),
    /// All four paddings.
    Padding(i32),
    /// Left border thickness.
    BorderLeft(i32),
    /// Top border thickness.
    BorderTop(i32),
    /// Right border thickness.
    BorderRight(i32),
    /// Bottom border thickness.
    BorderBottom(i32),
    /// All four border thicknesses.
    Border(i32),
    /// Border ring color.
    BorderColor(Color),
    /// Cross-axis alignment of children.
    ContentAlign(ContentAlign),
    /// Flow orientation.
    Flow(Flow),
    /// Shape or text color.
    Color(Color),
    /// Text font.
    Font(FontSelector),
}

impl Style {
    /// The attribute this style sets.
    #[must_use]
    pub const fn name(&self) -> StyleName {
        match self {
            Self::Width(_) => StyleName::Width,
            Self::Height(_) => StyleName::Height,
            Self::PaddingLeft(_) => StyleName::PaddingLeft,
            Self::PaddingTop(_) => StyleName::PaddingTop,
            Self::PaddingRight(_) => StyleName::PaddingRight,
            Self::PaddingBottom(_) => StyleName::PaddingBottom,
            Self::Padding(_) => StyleName::Padding,
            Self::BorderLeft(_) => StyleName::BorderLeft,
            Self::BorderTop(_) => StyleName::BorderTop,
            Self::BorderRight(_) => StyleName::BorderRight,
            Self::BorderBottom(_) => StyleName::BorderBottom,
            Self::Border(_) => StyleName::Border,
            Self::BorderColor(_) => StyleName::BorderColor,
            Self::ContentAlign(_) => StyleName::ContentAlign,
            Self::Flow(_) => StyleName::Flow,
            Self::Color(_) => StyleName::Color,
            Self::Font(_) => StyleName::Font,
        }
    }

    /// Parse the value half of a `name=value` pair for a known attribute.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] if `value` does not fit `name`.
    pub fn from_parts(name: StyleName, value: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidValue {
            name,
            value: value.to_string(),
        };
        let int = || value.trim().parse::<i32>().map_err(|_| invalid());
        let color = || value.parse::<Color>().map_err(|_| invalid());

        Ok(match name {
            StyleName::Width => Self::Width(value.parse().map_err(|_| invalid())?),
            StyleName::Height => Self::Height(value.parse().map_err(|_| invalid())?),
            StyleName::PaddingLeft => Self::PaddingLeft(int()?),
            StyleName::PaddingTop => Self::PaddingTop(int()?),
            StyleName::PaddingRight => Self::PaddingRight(int()?),
            StyleName::PaddingBottom => Self::PaddingBottom(int()?),
            StyleName::Padding => Self::Padding(int()?),
            StyleName::BorderLeft => Self::BorderLeft(int()?),
            StyleName::BorderTop => Self::BorderTop(int()?),
            StyleName::BorderRight => Self::BorderRight(int()?),
            StyleName::BorderBottom => Self::BorderBottom(int()?),
            StyleName::Border => Self::Border(int()?),
            StyleName::BorderColor => Self::BorderColor(color()?),
            StyleName::ContentAlign => {
                Self::ContentAlign(value.trim().parse().map_err(|_| invalid())?)
            }
            StyleName::Flow => Self::Flow(value.trim().parse().map_err(|_| invalid())?),
            StyleName::Color => Self::Color(color()?),
            StyleName::Font => Self::Font(value.trim().parse().map_err(|_| invalid())?),
        })
    }

    /// Declared width.
    #[must_use]
    pub fn width(size: impl Into<Size>) -> Self {
        Self::Width(size.into())
    }

    /// Declared height.
    #[must_use]
    pub fn height(size: impl Into<Size>) -> Self {
        Self::Height(size.into())
    }

    /// All four paddings.
    #[must_use]
    pub const fn padding(px: i32) -> Self {
        Self::Padding(px)
    }

    /// All four border thicknesses.
    #[must_use]
    pub const fn border(px: i32) -> Self {
        Self::Border(px)
    }

    /// Shape or text color.
    #[must_use]
    pub const fn color(index: u8) -> Self {
        Self::Color(Color(index))
    }

    /// Border ring color.
    #[must_use]
    pub const fn border_color(index: u8) -> Self {
        Self::BorderColor(Color(index))
    }

    /// Left-align children.
    #[must_use]
    pub const fn align_left() -> Self {
        Self::ContentAlign(ContentAlign::Left)
    }

    /// Center children.
    #[must_use]
    pub const fn align_center() -> Self {
        Self::ContentAlign(ContentAlign::Center)
    }

    /// Right-align children.
    #[must_use]
    pub const fn align_right() -> Self {
        Self::ContentAlign(ContentAlign::Right)
    }

    /// Use the compact font.
    #[must_use]
    pub const fn small_font() -> Self {
        Self::Font(FontSelector::Small)
    }

    /// The raw value as it would appear after `=`.
    fn value_string(&self) -> String {
        match self {
            Self::Width(size) | Self::Height(size) => size.to_string(),
            Self::PaddingLeft(v)
            | Self::PaddingTop(v)
            | Self::PaddingRight(v)
            | Self::PaddingBottom(v)
            | Self::Padding(v)
            | Self::BorderLeft(v)
            | Self::BorderTop(v)
            | Self::BorderRight(v)
            | Self::BorderBottom(v)
            | Self::Border(v) => v.to_string(),
            Self::BorderColor(c) | Self::Color(c) => c.to_string(),
            Self::ContentAlign(align) => align.to_string(),
            Self::Flow(flow) => flow.to_string(),
            Self::Font(font) => font.to_string(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value_string())
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| StyleError::Malformed(s.to_string()))?;
        let name: StyleName = name
            .trim()
            .parse()
            .map_err(|_| StyleError::UnknownName(name.trim().to_string()))?;
        Self::from_parts(name, value)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_sizes() {
        assert_eq!("width=inherit".parse(), Ok(Style::Width(Size::Inherit)));
        assert_eq!("height=fill".parse(), Ok(Style::Height(Size::Fill)));
        assert_eq!("width=70".parse(), Ok(Style::Width(Size::Fixed(70))));
        assert_eq!("width=auto".parse(), Ok(Style::Width(Size::Intrinsic)));
    }

    #[test]
    fn test_parse_rejects_negative_size() {
        assert_eq!(
            "width=-3".parse::<Style>(),
            Err(StyleError::InvalidValue {
                name: StyleName::Width,
                value: "-3".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_and_malformed() {
        assert_eq!(
            "margin=3".parse::<Style>(),
            Err(StyleError::UnknownName("margin".to_string()))
        );
        assert_eq!(
            "padding".parse::<Style>(),
            Err(StyleError::Malformed("padding".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_every_name() {
        let samples = [
            "width=fill",
            "padding-left=3",
            "border=2",
            "border-color=4",
            "content-align=right",
            "flow=horizontal",
            "color=3",
            "font=small",
        ];
        for text in samples {
            let style: Style = text.parse().unwrap();
            assert_eq!(style.to_string(), text);
        }
        // Every attribute name prints in kebab-case and parses back.
        for name in StyleName::iter() {
            let printed: &'static str = name.into();
            assert_eq!(printed.parse::<StyleName>(), Ok(name));
        }
    }
}
