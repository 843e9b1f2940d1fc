use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::mime::ImageExtension;

use super::ImageFile;

pub fn is_image_file(path: &Path) -> bool {
    ImageExtension::from_path(path).is_some()
}

/// Collect the image files directly inside `dir` (no recursion).
///
/// Entries that cannot be read are logged and skipped. With `sort`, files are
/// ordered by filename; otherwise the platform's enumeration order is kept.
pub fn collect_images_from_dir(dir: &Path, sort: bool) -> Result<Vec<ImageFile>> {
    if !dir.is_dir() {
        return Err(AppError::InvalidDirectory(dir.to_path_buf()));
    }

    let mut images = vec![];
    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        let path: PathBuf = entry.path();
        if path.is_file() && is_image_file(&path) {
            images.push(ImageFile::new(path));
        }
    }

    if sort {
        images.sort_by(|a, b| a.filename.cmp(&b.filename));
    }
    Ok(images)
}
