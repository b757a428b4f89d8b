//! # Input Discovery
//!
//! Finds the images to convert and names the headers they turn into.
//!
//! Output names re-add the output prefix to the original stem, while the
//! symbol BASE strips it:
//!
//! | Input | Header file | BASE |
//! |-------|-------------|------|
//! | `sm.png` | `Menu_sm.h` | `SM` |
//! | `Menu_sm.png` | `Menu_Menu_sm.h` | `SM` |

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// List files in `dir` whose extension matches `extension`
/// (case-insensitive), sorted by file name.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches {
            found.push(path);
        }
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("Discovered {} .{} files in {}", found.len(), extension, dir.display());
    Ok(found)
}

/// Header file name for `input`: `{output_prefix}{stem}.h`.
pub fn output_file_name(input: &Path, output_prefix: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{}{}.h", output_prefix, stem)
}

/// Full header path for `input` inside `out_dir`.
pub fn output_path(input: &Path, out_dir: &Path, output_prefix: &str) -> PathBuf {
    out_dir.join(output_file_name(input, output_prefix))
}
