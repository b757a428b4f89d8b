//! # rgb565gen CLI
//!
//! Command-line interface for converting images into firmware headers.
//!
//! ## Usage
//!
//! ```bash
//! # Convert every .png in the current directory and write Camera_ImageConfig.h
//! rgb565gen batch
//!
//! # Convert a directory into a separate include directory
//! rgb565gen batch assets --out-dir include
//!
//! # Convert one image
//! rgb565gen convert Menu_sm.png Menu_sm.h
//!
//! # Check generated headers
//! rgb565gen verify include/*.h
//!
//! # Print the reference color table
//! rgb565gen swatches
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use rgb565gen::{
    ConvertError, PipelineConfig, TextEncoding,
    batch::{self, BatchReport},
    color::rgb565::SWATCHES,
    convert::{ConvertOptions, convert},
    header::{describe, parse_array},
};

/// rgb565gen - Image to RGB565 C header converter
#[derive(Parser, Debug)]
#[command(name = "rgb565gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug details (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a single image into a header
    Convert {
        /// Input image
        input: PathBuf,

        /// Output header file
        output: PathBuf,

        /// Prefix stripped from the input name before deriving symbols
        #[arg(long, default_value = "Menu_")]
        strip_prefix: String,

        /// Do not strip any prefix
        #[arg(long, conflicts_with = "strip_prefix")]
        no_strip: bool,

        /// Description tag for the comment block (e.g. main-menu, status-map)
        #[arg(long)]
        context: Option<String>,

        /// Text encoding of the header
        #[arg(long, value_enum, default_value_t = TextEncoding::Utf8)]
        encoding: TextEncoding,
    },

    /// Convert every image in a directory and write the aggregate config header
    Batch {
        /// Directory to scan for images
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Directory for generated headers (defaults to the scanned directory)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// JSON configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Worker threads (defaults to one per core)
        #[arg(long, short)]
        jobs: Option<usize>,

        /// File name of the aggregate config header
        #[arg(long, value_name = "NAME")]
        aggregate: Option<String>,

        /// Prefix stripped from input names before deriving symbols
        #[arg(long)]
        strip_prefix: Option<String>,

        /// Do not strip any prefix
        #[arg(long, conflicts_with = "strip_prefix")]
        no_strip: bool,

        /// Prefix added to generated header file names
        #[arg(long)]
        output_prefix: Option<String>,

        /// Input file extension to scan for
        #[arg(long)]
        extension: Option<String>,

        /// Text encoding of every header
        #[arg(long, value_enum)]
        encoding: Option<TextEncoding>,
    },

    /// Check that generated headers declare as many values as they contain
    Verify {
        /// Header files to check
        #[arg(required = true)]
        headers: Vec<PathBuf>,
    },

    /// Print reference colors and their RGB565 values
    Swatches,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), ConvertError> {
    match command {
        Commands::Convert {
            input,
            output,
            strip_prefix,
            no_strip,
            context,
            encoding,
        } => {
            let options = ConvertOptions {
                strip_prefix: (!no_strip).then_some(strip_prefix.as_str()),
                tag: context.as_deref(),
                encoding,
            };
            let converted = convert(&input, &output, &options)?;
            let family = &converted.family;

            println!("Image size: {}x{}", converted.width, converted.height);
            println!("Generated symbols:");
            println!("  Width:  {}", family.width());
            println!("  Height: {}", family.height());
            println!("  Pixels: {}", family.pic());
            println!("  Guard:  {}", family.guard());
            println!("Wrote {}", converted.output.display());
        }

        Commands::Batch {
            dir,
            out_dir,
            config,
            jobs,
            aggregate,
            strip_prefix,
            no_strip,
            output_prefix,
            extension,
            encoding,
        } => {
            let mut settings = match config {
                Some(path) => PipelineConfig::load(&path)?,
                None => PipelineConfig::default(),
            };
            if let Some(jobs) = jobs {
                settings.jobs = Some(jobs);
            }
            if let Some(name) = aggregate {
                settings.aggregate_file = name;
            }
            if no_strip {
                settings.strip_prefix = None;
            } else if let Some(prefix) = strip_prefix {
                settings.strip_prefix = Some(prefix);
            }
            if let Some(prefix) = output_prefix {
                settings.output_prefix = prefix;
            }
            if let Some(ext) = extension {
                settings.extension = ext;
            }
            if let Some(encoding) = encoding {
                settings.encoding = encoding;
            }

            let out_dir = out_dir.unwrap_or_else(|| dir.clone());
            run_batch(&dir, &out_dir, &settings)?;
        }

        Commands::Verify { headers } => {
            let bad = verify_headers(&headers);
            if bad > 0 {
                return Err(ConvertError::Parse(format!(
                    "{} of {} headers failed verification",
                    bad,
                    headers.len()
                )));
            }
            println!("All {} headers OK", headers.len());
        }

        Commands::Swatches => {
            println!("RGB565 reference colors:");
            for swatch in SWATCHES {
                let [r, g, b] = swatch.rgb;
                println!(
                    "  RGB({:3},{:3},{:3}) -> 0x{:04X}  {}",
                    r,
                    g,
                    b,
                    swatch.packed(),
                    swatch.name
                );
            }
            println!("\nDescription tags:");
            for tag in describe::list_tags() {
                println!("  {}", tag);
            }
        }
    }

    Ok(())
}

/// Run the batch pipeline and print a summary.
fn run_batch(dir: &Path, out_dir: &Path, settings: &PipelineConfig) -> Result<(), ConvertError> {
    let outcome = match batch::run_directory(dir, out_dir, settings) {
        Ok(outcome) => outcome,
        Err(ConvertError::NoInput(reason)) => {
            eprintln!(
                "Nothing to aggregate: put .{} images in {} and run again",
                settings.extension,
                dir.display()
            );
            return Err(ConvertError::NoInput(reason));
        }
        Err(ConvertError::NothingConverted { report }) => {
            print_report(&report);
            eprintln!(
                "Nothing to aggregate: none of the {} images converted, {} not written",
                report.attempted(),
                settings.aggregate_file
            );
            return Err(ConvertError::NothingConverted { report });
        }
        Err(e) => return Err(e),
    };
    let report = &outcome.report;
    print_report(report);

    println!("\nGenerated files:");
    for converted in &report.succeeded {
        println!("  {}", converted.output.display());
    }
    println!("  {}", outcome.aggregate.display());

    println!("\nMacros:");
    for converted in &report.succeeded {
        let family = &converted.family;
        println!("  {} -> {}", family.image_data_macro(), family.pic());
        println!("  {} -> sizeof({})", family.image_size_macro(), family.pic());
        println!("  {} -> {}", family.image_width_macro(), family.width());
        println!("  {} -> {}", family.image_height_macro(), family.height());
    }

    Ok(())
}

/// Print every failure followed by the attempted/succeeded/failed counts.
fn print_report(report: &BatchReport) {
    for (path, error) in &report.failed {
        println!("  FAILED {}: {}", path.display(), error);
    }

    println!("\nSummary:");
    println!("  Attempted: {}", report.attempted());
    println!("  Succeeded: {}", report.succeeded.len());
    println!("  Failed:    {}", report.failed.len());
}

/// Check every header, returning how many failed.
///
/// Unreadable or unparsable files count as failures and do not stop the
/// remaining checks.
fn verify_headers(headers: &[PathBuf]) -> usize {
    let mut bad = 0;
    for path in headers {
        match verify_header(path) {
            Ok(true) => {}
            Ok(false) => bad += 1,
            Err(e) => {
                println!("  ERROR    {}: {}", path.display(), e);
                bad += 1;
            }
        }
    }
    bad
}

/// Parse one header and report whether its array is consistent.
fn verify_header(path: &Path) -> Result<bool, ConvertError> {
    let text = fs::read_to_string(path)?;
    let parsed = parse_array(&text)?;
    if parsed.is_consistent() {
        println!(
            "  OK       {} {}[{}]",
            path.display(),
            parsed.name,
            parsed.declared_len
        );
        Ok(true)
    } else {
        println!(
            "  MISMATCH {} {}[{}] has {} values",
            path.display(),
            parsed.name,
            parsed.declared_len,
            parsed.values.len()
        );
        Ok(false)
    }
}
