//! Common utilities for the trellis layout engine.
//!
//! This crate provides shared infrastructure used by all trellis components:
//! - **Warning System** - colored terminal output for styles and glyphs with no effect
//! - **Bitmaps** - palette-indexed image data shared by the engine and its backends

pub mod image;
pub mod warning;
