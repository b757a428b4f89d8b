//! # Symbol Naming
//!
//! Derives the C identifiers for one image from its file name.
//!
//! ## Derivation
//!
//! ```text
//! Menu_sm.png ──► strip extension ──► Menu_sm
//!             ──► strip "Menu_"   ──► sm
//!             ──► upper-case      ──► SM   (BASE)
//! ```
//!
//! | Symbol | Example |
//! |--------|---------|
//! | Width constant | `SM_WIDTH` |
//! | Height constant | `SM_HEIGHT` |
//! | Pixel array | `SM_PIC` |
//! | Include guard | `_SM_H_` |
//!
//! The aggregate configuration header forwards these through
//! `SM_IMAGE_DATA`, `SM_IMAGE_SIZE`, `SM_IMAGE_WIDTH` and `SM_IMAGE_HEIGHT`.
//! Firmware code depends on these spellings.

use std::path::Path;

use crate::error::{ConvertError, Result};

/// The identifiers generated for one image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolFamily {
    /// Source file name, e.g. `Menu_sm.png`
    pub source: String,
    /// Stem after prefix stripping, original case, e.g. `sm`
    pub stem: String,
    /// Upper-cased stem, e.g. `SM`
    pub base: String,
}

impl SymbolFamily {
    pub fn width(&self) -> String {
        format!("{}_WIDTH", self.base)
    }

    pub fn height(&self) -> String {
        format!("{}_HEIGHT", self.base)
    }

    pub fn pic(&self) -> String {
        format!("{}_PIC", self.base)
    }

    pub fn guard(&self) -> String {
        format!("_{}_H_", self.base)
    }

    // ===== Aggregate forwarding macros =====

    pub fn image_data_macro(&self) -> String {
        format!("{}_IMAGE_DATA", self.base)
    }

    pub fn image_size_macro(&self) -> String {
        format!("{}_IMAGE_SIZE", self.base)
    }

    pub fn image_width_macro(&self) -> String {
        format!("{}_IMAGE_WIDTH", self.base)
    }

    pub fn image_height_macro(&self) -> String {
        format!("{}_IMAGE_HEIGHT", self.base)
    }
}

/// Derive the symbol family for `filename`.
///
/// Only the final extension is removed. `strip_prefix` is matched
/// case-sensitively and removed at most once.
///
/// ## Example
///
/// ```
/// use rgb565gen::naming::derive;
///
/// let family = derive("Menu_sm.png", Some("Menu_")).unwrap();
/// assert_eq!(family.base, "SM");
/// assert_eq!(family.pic(), "SM_PIC");
/// assert_eq!(family.guard(), "_SM_H_");
/// ```
pub fn derive(filename: impl AsRef<Path>, strip_prefix: Option<&str>) -> Result<SymbolFamily> {
    let path = filename.as_ref();
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = path
        .file_stem()
        .ok_or_else(|| invalid(&source, "no file name"))?
        .to_str()
        .ok_or_else(|| invalid(&source, "file name is not valid UTF-8"))?;

    let stem = match strip_prefix {
        Some(prefix) if !prefix.is_empty() => stem.strip_prefix(prefix).unwrap_or(stem),
        _ => stem,
    };

    validate(stem).map_err(|reason| invalid(&source, reason))?;

    Ok(SymbolFamily {
        source,
        stem: stem.to_string(),
        base: stem.to_ascii_uppercase(),
    })
}

/// Check that a stem can become a C identifier.
fn validate(stem: &str) -> std::result::Result<(), &'static str> {
    let Some(first) = stem.chars().next() else {
        return Err("name is empty after prefix stripping");
    };
    if first.is_ascii_digit() {
        return Err("identifier cannot start with a digit");
    }
    if !stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("identifier may only contain ASCII letters, digits and '_'");
    }
    Ok(())
}

fn invalid(name: &str, reason: &'static str) -> ConvertError {
    ConvertError::InvalidName {
        name: name.to_string(),
        reason,
    }
}
