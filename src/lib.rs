mod cli;
mod convert;
mod encode;
mod error;
mod logging;
mod mime;
mod progress_bar;
mod render;
mod source;
mod toml_utils;

pub use cli::{Cli, log_level, run};
pub use encode::{ImageEntry, encode_to_data_uri};
pub use error::{AppError, Result};
pub use logging::init_logger;
pub use mime::{ImageExtension, detect_mime_type, supported_extensions};
pub use progress_bar::progress_bar_style;
pub use render::render_js_array;
pub use source::{ImageFile, collect_images_from_dir, is_image_file};
pub use toml_utils::{ConvertConfig, parse_toml};

// Core conversion functions
pub use convert::{
    ConversionResult, ConversionSummary, ConvertArgs, FileFailure, convert_directory,
    convert_images, run_conversion,
};
