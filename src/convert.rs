//! # Image Conversion
//!
//! Converts a single image file into a header file:
//!
//! ```text
//! input.png ──► decode ──► RGB8 ──► emit header ──► encode text ──► temp file ──► rename
//! ```
//!
//! Non-RGB images (grayscale, RGBA, palette) are flattened to RGB8 first.
//! Alpha and palette information is dropped. Width and height are emitted as
//! `uint16_t` constants, so either one above 65535 is rejected before anything
//! is written.
//!
//! The header is written to a temporary file next to the destination and
//! renamed over it once complete, so a failed run never leaves a truncated
//! header behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageReader, RgbImage};
use tempfile::NamedTempFile;

use crate::config::TextEncoding;
use crate::error::{ConvertError, Result};
use crate::header::{CommentContext, emit};
use crate::naming::{self, SymbolFamily};

/// Per-image conversion settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions<'a> {
    /// Prefix removed from the input stem before deriving BASE
    pub strip_prefix: Option<&'a str>,
    /// Description tag for the comment block
    pub tag: Option<&'a str>,
    pub encoding: TextEncoding,
}

/// Result of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedImage {
    pub input: PathBuf,
    pub output: PathBuf,
    pub family: SymbolFamily,
    pub width: u32,
    pub height: u32,
}

/// Decode an image file and normalize it to RGB8.
///
/// The format is guessed from the file contents, not the extension.
pub fn decode(path: &Path) -> Result<RgbImage> {
    let to_decode_error = |source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| to_decode_error(image::ImageError::IoError(e)))?;
    let img = reader.decode().map_err(to_decode_error)?;

    log::debug!(
        "Decoded {} ({:?}, {}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );
    Ok(img.into_rgb8())
}

/// Convert `input` into a header at `output`, overwriting any existing file.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions<'_>,
) -> Result<ConvertedImage> {
    let family = naming::derive(input, options.strip_prefix)?;
    let image = decode(input)?;
    let (width, height) = image.dimensions();
    check_dimensions(input, width, height)?;

    log::debug!(
        "{}: {} / {} / {} / {}",
        family.source,
        family.width(),
        family.height(),
        family.pic(),
        family.guard()
    );

    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let context = CommentContext {
        file_name: &file_name,
        tag: options.tag,
    };
    let document = emit(&image, &family, &context);

    if log::log_enabled!(log::Level::Trace) {
        for (i, color) in document.pixels().iter().take(10).enumerate() {
            log::trace!("{} pixel {}: 0x{:04X}", family.source, i, color);
        }
    }

    let bytes = options
        .encoding
        .encode(&document.to_string())
        .ok_or_else(|| ConvertError::Encoding {
            path: output.to_path_buf(),
            encoding: options.encoding.as_str(),
        })?;
    write_atomic(output, &bytes)?;

    log::info!(
        "Converted {} -> {} ({}x{})",
        input.display(),
        output.display(),
        width,
        height
    );

    Ok(ConvertedImage {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        family,
        width,
        height,
    })
}

/// Reject images whose width or height does not fit a `uint16_t` constant.
fn check_dimensions(path: &Path, width: u32, height: u32) -> Result<()> {
    if u16::try_from(width).is_err() || u16::try_from(height).is_err() {
        return Err(ConvertError::InvalidDimensions {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    Ok(())
}

/// Write `bytes` to `path` via a temporary file in the same directory.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let to_write_error = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(to_write_error)?;
    tmp.write_all(bytes).map_err(to_write_error)?;
    tmp.as_file().sync_all().map_err(to_write_error)?;
    tmp.persist(path).map_err(|e| to_write_error(e.error))?;
    Ok(())
}
