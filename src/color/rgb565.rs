//! # RGB565 Packing
//!
//! Packs a 24-bit RGB pixel into a 16-bit word with 5 bits of red, 6 bits of
//! green and 5 bits of blue.
//!
//! ## Bit Layout
//!
//! ```text
//!  15  14  13  12  11  10   9   8   7   6   5   4   3   2   1   0
//! ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
//! │ R7│ R6│ R5│ R4│ R3│ G7│ G6│ G5│ G4│ G3│ G2│ B7│ B6│ B5│ B4│ B3│
//! └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
//! ```
//!
//! The low bits of each channel are masked off, never rounded:
//!
//! | Channel | Kept bits | Dropped bits |
//! |---------|-----------|--------------|
//! | Red     | 5         | 3            |
//! | Green   | 6         | 2            |
//! | Blue    | 5         | 3            |

use image::RgbImage;

// ============================================================================
// PACKING
// ============================================================================

/// # Pack an RGB888 triple into RGB565
///
/// Computes `((r & 0xF8) << 8) | ((g & 0xFC) << 3) | (b >> 3)`.
///
/// ## Example
///
/// ```
/// use rgb565gen::color::rgb565::pack;
///
/// assert_eq!(pack(0, 0, 0), 0x0000);
/// assert_eq!(pack(255, 0, 0), 0xF800);
/// assert_eq!(pack(0, 255, 0), 0x07E0);
/// assert_eq!(pack(0, 0, 255), 0x001F);
/// assert_eq!(pack(255, 255, 255), 0xFFFF);
/// ```
#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u16 {
    (((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3)
}

/// Expand an RGB565 word back to 8-bit channels.
///
/// The dropped low bits come back as zero, so `unpack(pack(r, g, b))`
/// equals `[r & 0xF8, g & 0xFC, b & 0xF8]`.
#[inline]
pub const fn unpack(color: u16) -> [u8; 3] {
    [
        ((color >> 8) & 0xF8) as u8,
        ((color >> 3) & 0xFC) as u8,
        ((color << 3) & 0xF8) as u8,
    ]
}

/// Pack every pixel of an image in raster order (left to right, top to bottom).
pub fn pack_pixels(image: &RgbImage) -> Vec<u16> {
    image
        .pixels()
        .map(|p| pack(p.0[0], p.0[1], p.0[2]))
        .collect()
}

// ============================================================================
// REFERENCE SWATCHES
// ============================================================================

/// A named color used to sanity-check the packing against a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

impl Swatch {
    #[inline]
    pub const fn packed(&self) -> u16 {
        pack(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Primary colors plus magenta and white. Their packed values are easy to
/// recognise on a scope or in a framebuffer dump.
pub const SWATCHES: &[Swatch] = &[
    Swatch { name: "black", rgb: [0, 0, 0] },
    Swatch { name: "red", rgb: [255, 0, 0] },
    Swatch { name: "green", rgb: [0, 255, 0] },
    Swatch { name: "blue", rgb: [0, 0, 255] },
    Swatch { name: "magenta", rgb: [255, 0, 255] },
    Swatch { name: "white", rgb: [255, 255, 255] },
];

// ============================================================================
// TESTS
// ============================================================================
