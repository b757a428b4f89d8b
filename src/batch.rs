//! # Batch Pipeline
//!
//! Converts many images and writes the aggregate configuration header.
//!
//! ## Flow
//!
//! ```text
//! inputs ──► derive names (sequential, rejects duplicate BASE)
//!        ──► convert (parallel, rayon)
//!        ──► results in input order
//!        ──► aggregate header over the successes
//! ```
//!
//! A failing image is recorded and never stops the others. Result order
//! always matches input order, whatever order the workers finish in, so the
//! aggregate header is deterministic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::PipelineConfig;
use crate::convert::{ConvertOptions, ConvertedImage, convert, write_atomic};
use crate::discover;
use crate::error::{ConvertError, Result};
use crate::header::aggregate;
use crate::naming::{self, SymbolFamily};

/// Outcome of a batch conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful conversions, in input order
    pub succeeded: Vec<ConvertedImage>,
    /// Failed inputs with their cause, in input order
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn families(&self) -> Vec<SymbolFamily> {
        self.succeeded.iter().map(|c| c.family.clone()).collect()
    }
}

/// Outcome of a full pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub report: BatchReport,
    /// Path of the aggregate configuration header
    pub aggregate: PathBuf,
}

/// Convert every input into a header in `out_dir`.
///
/// Inputs whose BASE repeats an earlier input's BASE fail with
/// [`ConvertError::DuplicateIdentifier`] and are not converted.
pub fn run_batch(
    inputs: &[PathBuf],
    out_dir: &Path,
    config: &PipelineConfig,
) -> Result<BatchReport> {
    let mut seen: HashMap<String, &Path> = HashMap::with_capacity(inputs.len());
    let planned: Vec<Result<PathBuf>> = inputs
        .iter()
        .map(|input| {
            let family = naming::derive(input, config.strip_prefix())?;
            if let Some(first) = seen.get(&family.base) {
                return Err(ConvertError::DuplicateIdentifier {
                    base: family.base,
                    first: first.to_path_buf(),
                    second: input.clone(),
                });
            }
            seen.insert(family.base, input.as_path());
            Ok(discover::output_path(input, out_dir, &config.output_prefix))
        })
        .collect();

    let options = ConvertOptions {
        strip_prefix: config.strip_prefix(),
        tag: None,
        encoding: config.encoding,
    };

    // num_threads(0) lets rayon pick one thread per core
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs.unwrap_or(0))
        .build()?;

    let results: Vec<Result<ConvertedImage>> = pool.install(|| {
        inputs
            .par_iter()
            .zip(planned.into_par_iter())
            .map(|(input, output)| convert(input, &output?, &options))
            .collect()
    });

    let mut report = BatchReport::default();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(converted) => report.succeeded.push(converted),
            Err(e) => {
                log::warn!("Failed to convert {}: {}", input.display(), e);
                report.failed.push((input.clone(), e));
            }
        }
    }
    Ok(report)
}

/// Convert `inputs` and write the aggregate configuration header.
///
/// Fails with [`ConvertError::NoInput`] when there is nothing to convert and
/// with [`ConvertError::NothingConverted`] (carrying the full report) when
/// every conversion failed. The aggregate header is not written in either
/// case.
pub fn run_pipeline(
    inputs: &[PathBuf],
    out_dir: &Path,
    config: &PipelineConfig,
) -> Result<PipelineOutcome> {
    if inputs.is_empty() {
        return Err(ConvertError::NoInput(format!(
            "no .{} images to convert",
            config.extension
        )));
    }

    let report = run_batch(inputs, out_dir, config)?;
    if report.succeeded.is_empty() {
        return Err(ConvertError::NothingConverted {
            report: Box::new(report),
        });
    }

    let config_header = aggregate(&report.families(), &config.aggregate_options())?;
    let aggregate_path = out_dir.join(&config.aggregate_file);
    let bytes = config
        .encoding
        .encode(&config_header.to_string())
        .ok_or_else(|| ConvertError::Encoding {
            path: aggregate_path.clone(),
            encoding: config.encoding.as_str(),
        })?;
    write_atomic(&aggregate_path, &bytes)?;

    log::info!(
        "Wrote {} with {} image blocks",
        aggregate_path.display(),
        config_header.families().len()
    );

    Ok(PipelineOutcome {
        report,
        aggregate: aggregate_path,
    })
}

/// Discover inputs in `dir` and run the full pipeline.
pub fn run_directory(
    dir: &Path,
    out_dir: &Path,
    config: &PipelineConfig,
) -> Result<PipelineOutcome> {
    let inputs = discover::discover(dir, &config.extension)?;
    log::info!(
        "Found {} .{} images in {}",
        inputs.len(),
        config.extension,
        dir.display()
    );
    run_pipeline(&inputs, out_dir, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    fn solid_png(dir: &Path, name: &str, color: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(2, 2, Rgb(color)).save(&path).unwrap();
        path
    }

    #[test]
    fn test_batch_partial_failure_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = solid_png(dir.path(), "a.png", [255, 0, 0]);
        let broken = dir.path().join("broken.png");
        fs::write(&broken, b"garbage").unwrap();
        let c = solid_png(dir.path(), "c.png", [0, 0, 255]);

        let inputs = vec![a.clone(), broken.clone(), c.clone()];
        let report = run_batch(&inputs, dir.path(), &PipelineConfig::default()).unwrap();

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(report.succeeded[0].input, a);
        assert_eq!(report.succeeded[1].input, c);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, broken);
        assert!(matches!(report.failed[0].1, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_batch_rejects_duplicate_base() {
        let dir = tempfile::tempdir().unwrap();
        let first = solid_png(dir.path(), "sm.png", [0, 0, 0]);
        let second = solid_png(dir.path(), "Menu_SM.png", [0, 0, 0]);

        let inputs = vec![first.clone(), second.clone()];
        let report = run_batch(&inputs, dir.path(), &PipelineConfig::default()).unwrap();

        assert_eq!(report.succeeded.len(), 1);
        assert_eq!(report.succeeded[0].input, first);
        assert_eq!(report.failed[0].0, second);
        assert!(matches!(
            report.failed[0].1,
            ConvertError::DuplicateIdentifier { .. }
        ));
        assert!(!dir.path().join("Menu_Menu_SM.h").exists());
    }

    #[test]
    fn test_pipeline_no_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_pipeline(&[], dir.path(), &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NoInput(_)));
    }

    #[test]
    fn test_pipeline_all_failed_keeps_report() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.png");
        fs::write(&broken, b"garbage").unwrap();
        let truncated = dir.path().join("truncated.png");
        fs::write(&truncated, b"\x89PNG\r\n\x1a\n").unwrap();

        let config = PipelineConfig::default();
        let inputs = vec![broken.clone(), truncated.clone()];
        let err = run_pipeline(&inputs, dir.path(), &config).unwrap_err();

        let report = match err {
            ConvertError::NothingConverted { report } => report,
            other => panic!("expected NothingConverted, got {other:?}"),
        };
        assert_eq!(report.attempted(), 2);
        assert!(report.succeeded.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].0, broken);
        assert_eq!(report.failed[1].0, truncated);
        assert!(
            report
                .failed
                .iter()
                .all(|(_, e)| matches!(e, ConvertError::Decode { .. }))
        );
        assert!(!dir.path().join(&config.aggregate_file).exists());
    }

    #[test]
    fn test_nothing_converted_message_counts_attempts() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.png");
        fs::write(&broken, b"garbage").unwrap();

        let err = run_pipeline(&[broken], dir.path(), &PipelineConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Nothing converted: all 1 conversions failed");
    }

    #[test]
    fn test_batch_write_failure_keeps_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let a = solid_png(dir.path(), "a.png", [255, 0, 0]);
        let b = solid_png(dir.path(), "b.png", [0, 255, 0]);
        let c = solid_png(dir.path(), "c.png", [0, 0, 255]);
        // A directory occupying b's header path makes the final rename fail
        let blocked = dir.path().join("Menu_b.h");
        fs::create_dir(&blocked).unwrap();

        let inputs = vec![a.clone(), b.clone(), c.clone()];
        let report = run_batch(&inputs, dir.path(), &PipelineConfig::default()).unwrap();

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(report.succeeded[0].input, a);
        assert_eq!(report.succeeded[1].input, c);
        assert!(dir.path().join("Menu_a.h").is_file());
        assert!(dir.path().join("Menu_c.h").is_file());

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, b);
        match &report.failed[0].1 {
            ConvertError::Write { path, .. } => assert_eq!(path, &blocked),
            other => panic!("expected Write, got {other:?}"),
        }
        assert!(blocked.is_dir());
    }

    #[test]
    fn test_batch_oversized_image_keeps_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let a = solid_png(dir.path(), "a.png", [255, 0, 0]);
        let wide = dir.path().join("wide.png");
        RgbImage::new(70_000, 1).save(&wide).unwrap();

        let inputs = vec![a.clone(), wide.clone()];
        let report = run_batch(&inputs, dir.path(), &PipelineConfig::default()).unwrap();

        assert_eq!(report.succeeded.len(), 1);
        assert_eq!(report.succeeded[0].input, a);
        assert_eq!(report.failed[0].0, wide);
        assert!(matches!(
            report.failed[0].1,
            ConvertError::InvalidDimensions {
                width: 70_000,
                height: 1,
                ..
            }
        ));
        assert!(!dir.path().join("Menu_wide.h").exists());
    }

    #[test]
    fn test_pipeline_single_thread() {
        let dir = tempfile::tempdir().unwrap();
        let input = solid_png(dir.path(), "mm.png", [255, 255, 255]);
        let config = PipelineConfig {
            jobs: Some(1),
            ..Default::default()
        };

        let outcome = run_pipeline(&[input], dir.path(), &config).unwrap();
        assert_eq!(outcome.report.succeeded.len(), 1);
        assert_eq!(outcome.report.succeeded[0].output, dir.path().join("Menu_mm.h"));
        let text = fs::read_to_string(&outcome.aggregate).unwrap();
        assert!(text.contains("#define MM_IMAGE_DATA MM_PIC\n"));
    }
}
