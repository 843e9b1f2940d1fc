use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::convert::{ConversionSummary, ConvertArgs, run_conversion};
use crate::toml_utils::parse_toml;

const AFTER_HELP: &str = "Examples:
  imguri ./images
  imguri ./photos -o carousel_images.js
  imguri ./pics --no-sort
  imguri --config imguri.toml";

/// Convert images in a directory to data URIs for JavaScript
#[derive(Debug, Parser)]
#[command(name = "imguri", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory containing images to convert
    #[arg(required_unless_present = "config")]
    pub directory: Option<PathBuf>,

    /// Output JavaScript file [default: images.js]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not sort images alphabetically
    #[arg(long)]
    pub no_sort: bool,

    /// Name of the generated array [default: images]
    #[arg(long)]
    pub var_name: Option<String>,

    /// Encode images on all cores
    #[arg(long)]
    pub parallel: bool,

    /// TOML config file with a [convert] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge command-line flags over the config file (if any) and the defaults.
    pub fn to_convert_args(&self) -> Result<ConvertArgs> {
        let mut args: ConvertArgs = match &self.config {
            Some(path) => {
                let project_root = path.parent().unwrap_or(Path::new(""));
                parse_toml(path, project_root)
                    .with_context(|| format!("Failed to load config {:?}", path))?
                    .into()
            }
            None => ConvertArgs::default(),
        };

        if let Some(directory) = &self.directory {
            args.directory = directory.clone();
        }
        if args.directory.as_os_str().is_empty() {
            bail!("No image directory given on the command line or in the config file");
        }
        if let Some(output) = &self.output {
            args.output = output.clone();
        }
        if let Some(var_name) = &self.var_name {
            args.var_name = var_name.clone();
        }
        args.sort &= !self.no_sort;
        args.parallel |= self.parallel;
        args.verbose |= self.verbose;

        Ok(args)
    }
}

pub fn log_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Run one conversion on behalf of the command line.
pub fn run(args: &ConvertArgs) -> Result<ConversionSummary> {
    let summary = run_conversion(args)
        .with_context(|| format!("Failed to convert images in {:?}", args.directory))?;

    tracing::info!(
        "You can now copy the contents of {:?} and replace the 'const {} = [...]' section in your HTML file.",
        summary.output,
        args.var_name
    );
    Ok(summary)
}
