//! # Pipeline Configuration
//!
//! Naming conventions and output settings shared by the converter and the
//! batch pipeline.
//!
//! ## Defaults
//!
//! | Setting | Default | Used for |
//! |---------|---------|----------|
//! | `strip_prefix` | `Menu_` | removed from input stems before deriving BASE |
//! | `output_prefix` | `Menu_` | prepended to per-image header file names |
//! | `extension` | `png` | discovery filter |
//! | `aggregate_file` | `Camera_ImageConfig.h` | aggregate header file name |
//! | `aggregate_guard` | `_IMAGE_CONFIG_H_` | aggregate include guard |
//! | `encoding` | `utf8` | text encoding of every written header |
//! | `jobs` | rayon default | worker threads for batch conversion |
//!
//! ## Loading
//!
//! Any subset of the settings can be given in a JSON file; missing keys keep
//! their defaults.
//!
//! ```
//! use rgb565gen::config::{PipelineConfig, TextEncoding};
//!
//! let config: PipelineConfig =
//!     serde_json::from_str(r#"{ "output_prefix": "Img_", "encoding": "ascii" }"#).unwrap();
//! assert_eq!(config.output_prefix, "Img_");
//! assert_eq!(config.encoding, TextEncoding::Ascii);
//! assert_eq!(config.extension, "png");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::header::AggregateOptions;

/// Text encoding used when writing headers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8 without byte order mark
    #[default]
    Utf8,
    /// UTF-8 with a leading byte order mark (some Windows toolchains want it)
    Utf8Bom,
    /// 7-bit ASCII; fails on any non-ASCII character
    Ascii,
}

impl TextEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf8Bom => "utf8-bom",
            Self::Ascii => "ascii",
        }
    }

    /// Encode `text`, or `None` if it cannot be represented.
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            Self::Utf8 => Some(text.as_bytes().to_vec()),
            Self::Utf8Bom => {
                let mut out = Vec::with_capacity(3 + text.len());
                out.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
                out.extend_from_slice(text.as_bytes());
                Some(out)
            }
            Self::Ascii => text.is_ascii().then(|| text.as_bytes().to_vec()),
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Prefix removed from input stems before deriving BASE
    pub strip_prefix: Option<String>,
    /// Prefix added to per-image header file names
    pub output_prefix: String,
    /// Input file extension picked up by discovery (without the dot)
    pub extension: String,
    /// File name of the aggregate configuration header
    pub aggregate_file: String,
    /// Include guard of the aggregate configuration header
    pub aggregate_guard: String,
    /// Text encoding for every written header
    pub encoding: TextEncoding,
    /// Worker threads for batch conversion (`None` = one per core)
    pub jobs: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strip_prefix: Some("Menu_".to_string()),
            output_prefix: "Menu_".to_string(),
            extension: "png".to_string(),
            aggregate_file: "Camera_ImageConfig.h".to_string(),
            aggregate_guard: "_IMAGE_CONFIG_H_".to_string(),
            encoding: TextEncoding::Utf8,
            jobs: None,
        }
    }
}

impl PipelineConfig {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn strip_prefix(&self) -> Option<&str> {
        self.strip_prefix.as_deref()
    }

    pub fn aggregate_options(&self) -> AggregateOptions<'_> {
        AggregateOptions {
            file_name: &self.aggregate_file,
            guard: &self.aggregate_guard,
        }
    }
}
