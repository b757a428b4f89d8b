//! # rgb565gen - Image to RGB565 Header Converter
//!
//! rgb565gen turns raster images into C headers for microcontroller
//! firmware driving 16-bit color displays. It provides:
//!
//! - **Color packing**: RGB888 to RGB565, bit-exact masking
//! - **Symbol naming**: deterministic C identifiers from file names
//! - **Header generation**: `PROGMEM` pixel arrays with include guards
//! - **Batch pipeline**: parallel conversion plus an aggregate config header
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use rgb565gen::{PipelineConfig, batch};
//!
//! let config = PipelineConfig::default();
//! let outcome = batch::run_directory(Path::new("assets"), Path::new("include"), &config)?;
//! println!(
//!     "{} converted, {} failed",
//!     outcome.report.succeeded.len(),
//!     outcome.report.failed.len()
//! );
//! # Ok::<(), rgb565gen::ConvertError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | RGB565 packing |
//! | [`naming`] | Symbol family derivation |
//! | [`header`] | Header emission, aggregation, parsing |
//! | [`convert`] | Single image conversion |
//! | [`batch`] | Batch pipeline |
//! | [`discover`] | Input discovery and output naming |
//! | [`config`] | Pipeline configuration |
//! | [`error`] | Error types |

pub mod batch;
pub mod color;
pub mod config;
pub mod convert;
pub mod discover;
pub mod error;
pub mod header;
pub mod naming;

// Re-exports for convenience
pub use config::{PipelineConfig, TextEncoding};
pub use error::ConvertError;
pub use naming::SymbolFamily;
