use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::mime::detect_mime_type;
use crate::source::ImageFile;

/// A successfully encoded image, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// 1-based position in the list of found images
    pub index: usize,
    pub filename: String,
    pub path: PathBuf,
    pub mime_type: &'static str,
    /// `data:{mime_type};base64,{payload}`
    pub data_uri: String,
}

impl ImageEntry {
    pub fn from_file(index: usize, file: &ImageFile) -> Result<Self> {
        let mime_type = detect_mime_type(&file.path);
        let bytes = read_bytes(&file.path)?;
        Ok(Self {
            index,
            filename: file.filename.clone(),
            path: file.path.clone(),
            mime_type,
            data_uri: to_data_uri(mime_type, &bytes),
        })
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, BASE64.encode(bytes))
}

/// Read the whole file at `path` and encode it as a base64 data URI.
pub fn encode_to_data_uri(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    Ok(to_data_uri(detect_mime_type(path), &bytes))
}
