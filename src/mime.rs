// -- external imports
use image::ImageFormat;
use std::path::Path;
use std::str::FromStr;
use strum::{EnumString, VariantNames};

pub const OCTET_STREAM: &str = "application/octet-stream";

// -- enums

/// Image file extensions picked up from a source directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
    Gif,
    Svg,
    Webp,
    Bmp,
    Ico,
}

impl ImageExtension {
    /// Extension of `path`, if it is one of the supported image extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_str(ext).ok()
    }

    /// MIME type used when the format registry has no answer for this extension.
    pub const fn fallback_mime(self) -> &'static str {
        match self {
            ImageExtension::Jpg | ImageExtension::Jpeg => "image/jpeg",
            ImageExtension::Png => "image/png",
            ImageExtension::Gif => "image/gif",
            ImageExtension::Svg => "image/svg+xml",
            ImageExtension::Webp => "image/webp",
            ImageExtension::Bmp => "image/bmp",
            ImageExtension::Ico => "image/x-icon",
        }
    }
}

// -- public API

/// Supported extensions as a comma-separated list, for messages.
pub fn supported_extensions() -> String {
    ImageExtension::VARIANTS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Detect the MIME type of `path` from its extension.
///
/// Looks the extension up in the `image` format registry first, then in the
/// fixed table of [`ImageExtension`], and finally gives up with
/// `application/octet-stream`.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let Some(ext) = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    else {
        return OCTET_STREAM;
    };

    let registered = ImageFormat::from_extension(&ext)
        .map(|format| format.to_mime_type())
        .filter(|mime| *mime != OCTET_STREAM);

    registered
        .or_else(|| ImageExtension::from_str(&ext).ok().map(ImageExtension::fallback_mime))
        .unwrap_or(OCTET_STREAM)
}

// -- tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions_map_to_documented_mime() {
        let cases = [
            ("photo.jpg", "image/jpeg"),
            ("photo.jpeg", "image/jpeg"),
            ("icon.png", "image/png"),
            ("anim.gif", "image/gif"),
            ("logo.svg", "image/svg+xml"),
            ("pic.webp", "image/webp"),
            ("old.bmp", "image/bmp"),
            ("favicon.ico", "image/x-icon"),
        ];
        for (name, mime) in cases {
            assert_eq!(detect_mime_type(Path::new(name)), mime, "{name}");
            let upper = name.to_uppercase();
            assert_eq!(detect_mime_type(Path::new(&upper)), mime, "{upper}");
        }
    }

    #[test]
    fn test_mixed_case_extension() {
        assert_eq!(detect_mime_type(Path::new("a.JpEg")), "image/jpeg");
        assert_eq!(detect_mime_type(Path::new("a.Svg")), "image/svg+xml");
    }

    #[test]
    fn test_registry_covers_unsupported_image_formats() {
        assert_eq!(detect_mime_type(Path::new("scan.tiff")), "image/tiff");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        assert_eq!(detect_mime_type(Path::new("notes.txt")), OCTET_STREAM);
        assert_eq!(detect_mime_type(Path::new("README")), OCTET_STREAM);
        assert_eq!(detect_mime_type(Path::new(".png")), OCTET_STREAM);
    }

    #[test]
    fn test_image_extension_from_path() {
        assert_eq!(
            ImageExtension::from_path(Path::new("dir/a.PNG")),
            Some(ImageExtension::Png)
        );
        assert_eq!(ImageExtension::from_path(Path::new("a.tiff")), None);
        assert_eq!(ImageExtension::from_path(Path::new("a")), None);
    }

    #[test]
    fn test_supported_extensions_list() {
        assert_eq!(
            supported_extensions(),
            ".jpg, .jpeg, .png, .gif, .svg, .webp, .bmp, .ico"
        );
    }
}
