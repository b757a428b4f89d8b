//! # Aggregate Configuration Header
//!
//! Builds the single header that forwards every image's symbols to stable
//! firmware-facing macros:
//!
//! ```text
//! // SM image configuration (Menu_sm.png)
//! #define SM_IMAGE_DATA SM_PIC
//! #define SM_IMAGE_SIZE sizeof(SM_PIC)
//! #define SM_IMAGE_WIDTH SM_WIDTH
//! #define SM_IMAGE_HEIGHT SM_HEIGHT
//! ```
//!
//! Blocks appear in the order the families are given.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::{ConvertError, Result};
use crate::naming::SymbolFamily;

/// File name and include guard of the aggregate header.
#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions<'a> {
    pub file_name: &'a str,
    pub guard: &'a str,
}

/// The aggregate configuration header. Use `to_string()` for the file
/// contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateConfig {
    file_name: String,
    guard: String,
    families: Vec<SymbolFamily>,
}

impl AggregateConfig {
    pub fn families(&self) -> &[SymbolFamily] {
        &self.families
    }
}

/// Build the aggregate header for `families`.
///
/// Fails with [`ConvertError::DuplicateIdentifier`] if two families share a
/// BASE, since their macros would collide.
pub fn aggregate(
    families: &[SymbolFamily],
    options: &AggregateOptions<'_>,
) -> Result<AggregateConfig> {
    let mut seen: HashMap<&str, &SymbolFamily> = HashMap::with_capacity(families.len());
    for family in families {
        if let Some(first) = seen.insert(family.base.as_str(), family) {
            return Err(ConvertError::DuplicateIdentifier {
                base: family.base.clone(),
                first: PathBuf::from(&first.source),
                second: PathBuf::from(&family.source),
            });
        }
    }

    Ok(AggregateConfig {
        file_name: options.file_name.to_string(),
        guard: options.guard.to_string(),
        families: families.to_vec(),
    })
}

impl fmt::Display for AggregateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/*")?;
        writeln!(f, " * {} - image configuration header", self.file_name)?;
        writeln!(
            f,
            " * Maps every generated image symbol to firmware-facing macros"
        )?;
        writeln!(f, " */")?;
        writeln!(f)?;
        writeln!(f, "#ifndef {}", self.guard)?;
        writeln!(f, "#define {}", self.guard)?;
        writeln!(f)?;

        for family in &self.families {
            let pic = family.pic();
            writeln!(
                f,
                "// {} image configuration ({})",
                family.base, family.source
            )?;
            writeln!(f, "#define {} {}", family.image_data_macro(), pic)?;
            writeln!(f, "#define {} sizeof({})", family.image_size_macro(), pic)?;
            writeln!(
                f,
                "#define {} {}",
                family.image_width_macro(),
                family.width()
            )?;
            writeln!(
                f,
                "#define {} {}",
                family.image_height_macro(),
                family.height()
            )?;
            writeln!(f)?;
        }

        writeln!(f, "#endif // {}", self.guard)
    }
}
