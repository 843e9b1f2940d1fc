// -- submodules
mod source_utils;

pub use source_utils::{collect_images_from_dir, is_image_file};

// -- external imports
use std::path::PathBuf;

/// An image file found in the source directory, not yet read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// File name without its directory, as shown in the generated comments.
    pub filename: String,
    /// Full path used for reading.
    pub path: PathBuf,
}

impl ImageFile {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        Self { filename, path }
    }
}

impl From<PathBuf> for ImageFile {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
