//! The display's 16-entry color palette.
//!
//! Index 0 is transparent: drawing with it leaves the canvas untouched.

use image::Rgba;
use trellis_layout::Color;

/// RGB values for palette indices 0 through 15.
pub const PALETTE: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // transparent
    [0xff, 0xff, 0xff],
    [0xff, 0x21, 0x21],
    [0xff, 0x93, 0xc4],
    [0xff, 0x81, 0x35],
    [0xff, 0xf6, 0x09],
    [0x24, 0x9c, 0xa3],
    [0x78, 0xdc, 0x52],
    [0x00, 0x3f, 0xad],
    [0x87, 0xf2, 0xff],
    [0x8e, 0x2e, 0xc4],
    [0xa4, 0x83, 0x9f],
    [0x5c, 0x40, 0x6c],
    [0xe5, 0xcd, 0xc4],
    [0x91, 0x46, 0x3d],
    [0x00, 0x00, 0x00],
];

/// Opaque RGBA for `color`, or `None` for transparent.
///
/// Indices past the palette wrap around, matching the display's 4-bit
/// color registers.
#[must_use]
pub fn rgba(color: Color) -> Option<Rgba<u8>> {
    let index = usize::from(color.0 & 0x0f);
    if index == 0 {
        return None;
    }
    let [r, g, b] = PALETTE[index];
    Some(Rgba([r, g, b, 0xff]))
}

/// Palette index closest to `pixel` (squared RGB distance).
///
/// Pixels that are mostly transparent map to index 0.
#[must_use]
pub fn nearest(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, a] = pixel.0;
    if a < 0x80 {
        return 0;
    }

    let distance = |[pr, pg, pb]: [u8; 3]| {
        let dr = i32::from(r) - i32::from(pr);
        let dg = i32::from(g) - i32::from(pg);
        let db = i32::from(b) - i32::from(pb);
        dr * dr + dg * dg + db * db
    };

    (1u8..16)
        .min_by_key(|&index| distance(PALETTE[usize::from(index)]))
        .unwrap_or(15)
}
