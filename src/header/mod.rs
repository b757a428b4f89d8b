//! # C Header Generation
//!
//! This module renders converted images and their symbol names as C headers
//! for Arduino-style firmware builds.
//!
//! ## Module Structure
//!
//! - [`emit`]: Per-image header with dimensions and RGB565 `PROGMEM` array
//! - [`describe`]: Comment text lookup table
//! - [`aggregate`]: Configuration header forwarding every image's symbols
//! - [`parse`]: Reads a generated pixel array back for verification

pub mod aggregate;
pub mod describe;
pub mod emit;
pub mod parse;

pub use aggregate::{AggregateConfig, AggregateOptions, aggregate};
pub use emit::{CommentContext, HeaderDocument, VALUES_PER_LINE, emit};
pub use parse::{ParsedArray, parse_array};
