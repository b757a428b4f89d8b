//! # Error Types
//!
//! This module defines error types used throughout the rgb565gen library.
//!
//! Per-image failures (`Decode`, `InvalidName`, `InvalidDimensions`, `Write`,
//! `Encoding`, `DuplicateIdentifier`) are collected by the batch pipeline and
//! never abort sibling conversions. `NoInput` and `NothingConverted` stop a run
//! before the aggregate header is written; `NothingConverted` still carries the
//! per-image failures.

use std::path::PathBuf;

use thiserror::Error;

use crate::batch::BatchReport;

/// Main error type for rgb565gen operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Image could not be opened or decoded
    #[error("Decode error: {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Derived identifier is unusable as a C symbol
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Image is larger than a `uint16_t` dimension constant can hold
    #[error(
        "Invalid dimensions: {} is {width}x{height}, limit is {}x{}",
        path.display(),
        u16::MAX,
        u16::MAX
    )]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Header could not be written to storage
    #[error("Write error: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header text is not representable in the configured encoding
    #[error("Encoding error: {} cannot be written as {encoding}", path.display())]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Two inputs derive the same BASE identifier
    #[error(
        "Duplicate identifier {base}: {} collides with {}",
        second.display(),
        first.display()
    )]
    DuplicateIdentifier {
        base: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Nothing was discovered to convert
    #[error("No input: {0}")]
    NoInput(String),

    /// Every discovered image failed; the report lists each cause
    #[error("Nothing converted: all {} conversions failed", report.attempted())]
    NothingConverted { report: Box<BatchReport> },

    /// Configuration file could not be parsed
    #[error("Config error: {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Emitted header could not be parsed back
    #[error("Parse error: {0}")]
    Parse(String),

    /// Worker pool could not be started
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
