use indicatif::{ParallelProgressIterator, ProgressFinish, ProgressIterator};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::encode::ImageEntry;
use crate::error::{AppError, Result};
use crate::mime::supported_extensions;
use crate::progress_bar::progress_bar_style;
use crate::render::{DEFAULT_VAR_NAME, render_js_array, validate_var_name};
use crate::source::{ImageFile, collect_images_from_dir};

pub const DEFAULT_OUTPUT: &str = "images.js";

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertArgs {
    /// Directory containing the images to convert
    pub directory: PathBuf,

    /// Destination file, overwritten if it exists
    pub output: PathBuf,

    /// Order images by filename instead of directory-listing order
    pub sort: bool,

    /// Name of the generated JavaScript array
    pub var_name: String,

    /// Encode files on the rayon thread pool
    pub parallel: bool,

    /// Log per-file progress at debug level
    pub verbose: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sort: true,
            var_name: DEFAULT_VAR_NAME.to_string(),
            parallel: false,
            verbose: false,
        }
    }
}

/// A file that was found but could not be encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub filename: String,
    pub path: PathBuf,
    pub reason: String,
}

/// Encoded entries in output order, plus the files that were skipped
#[derive(Debug, Default)]
pub struct ConversionResult {
    pub entries: Vec<ImageEntry>,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of image files found in the directory
    pub found: usize,
    /// Number of images written to the output
    pub converted: usize,
    pub failures: Vec<FileFailure>,
    pub output: PathBuf,
}

/// Encode `files` in order. A file that cannot be read is logged and left out.
///
/// With `parallel`, the work is spread over the rayon pool; entries still come
/// back in the order of `files`.
pub fn convert_images(files: &[ImageFile], parallel: bool) -> ConversionResult {
    let total = files.len();
    let encode = |(idx, file): (usize, &ImageFile)| {
        tracing::debug!("Processing {}/{}: {}...", idx + 1, total, file.filename);
        (idx, ImageEntry::from_file(idx + 1, file))
    };

    let outcomes: Vec<(usize, Result<ImageEntry>)> = if parallel {
        files
            .par_iter()
            .enumerate()
            .progress_with_style(progress_bar_style())
            .with_message("Encoding images")
            .with_finish(ProgressFinish::WithMessage("Finished".into()))
            .map(&encode)
            .collect()
    } else {
        files
            .iter()
            .enumerate()
            .progress_with_style(progress_bar_style())
            .with_message("Encoding images")
            .with_finish(ProgressFinish::WithMessage("Finished".into()))
            .map(&encode)
            .collect()
    };

    let mut result = ConversionResult::default();
    for (idx, outcome) in outcomes {
        let file = &files[idx];
        match outcome {
            Ok(entry) => result.entries.push(entry),
            Err(e) => {
                tracing::error!("Error processing {}: {}", file.filename, e);
                result.failures.push(FileFailure {
                    filename: file.filename.clone(),
                    path: file.path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    result
}

/// Convert every image in `dir` and write the JavaScript array to `output`.
pub fn convert_directory(dir: &Path, output: &Path, sorted: bool) -> Result<ConversionSummary> {
    let args = ConvertArgs {
        directory: dir.to_path_buf(),
        output: output.to_path_buf(),
        sort: sorted,
        ..Default::default()
    };
    run_conversion(&args)
}

/// Core conversion API
///
/// Fails if the directory is invalid, the variable name is not a JavaScript
/// identifier, or the output cannot be written. Unreadable images are only
/// reported in the returned summary.
pub fn run_conversion(args: &ConvertArgs) -> Result<ConversionSummary> {
    let start_time = Instant::now();

    validate_var_name(&args.var_name)?;
    let files = collect_images_from_dir(&args.directory, args.sort)?;

    if files.is_empty() {
        tracing::warn!(
            "No images found in directory: {:?} (looked for {})",
            args.directory,
            supported_extensions()
        );
    } else {
        tracing::info!("Found {} images:", files.len());
        for file in &files {
            tracing::info!("  - {}", file.filename);
        }
    }

    let result = convert_images(&files, args.parallel);
    let rendered = render_js_array(&result.entries, &args.var_name);

    std::fs::write(&args.output, rendered).map_err(|source| AppError::Write {
        path: args.output.clone(),
        source,
    })?;

    tracing::info!("JavaScript code written to: {:?}", args.output);
    tracing::info!(
        "Total images converted: {}/{}",
        result.entries.len(),
        files.len()
    );
    if !result.failures.is_empty() {
        tracing::warn!("Skipped {} unreadable file(s)", result.failures.len());
    }
    tracing::debug!("Total conversion time: {:.3?}", start_time.elapsed());

    Ok(ConversionSummary {
        found: files.len(),
        converted: result.entries.len(),
        failures: result.failures,
        output: args.output.clone(),
    })
}
