//! # Color Encoding
//!
//! This module converts 8-bit RGB pixels into packed 16-bit colors used by
//! SPI display controllers (ST7789, ILI9341 and friends).
//!
//! ## Module Structure
//!
//! - [`rgb565`]: 5-6-5 packing, unpacking and reference swatches
//!
//! ## Usage Example
//!
//! ```
//! use rgb565gen::color::rgb565;
//!
//! assert_eq!(rgb565::pack(255, 0, 255), 0xF81F);
//! ```

pub mod rgb565;

pub use rgb565::{pack, pack_pixels, unpack};
