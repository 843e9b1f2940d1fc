use crate::encode::ImageEntry;
use crate::error::{AppError, Result};

const DECL_INDENT: &str = "        ";
const ENTRY_INDENT: &str = "            ";

pub const DEFAULT_VAR_NAME: &str = "images";

/// Check that `name` can be used as a JavaScript variable name.
pub fn validate_var_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "'{}' is not a valid JavaScript variable name",
            name
        )))
    }
}

/// Render entries as a `const {var_name} = [...];` block.
///
/// Each entry gets a `// Image {index}: {filename}` comment and a quoted
/// data URI; entries are separated by a blank line and the last one carries
/// no trailing comma. The text has no trailing newline.
pub fn render_js_array(entries: &[ImageEntry], var_name: &str) -> String {
    let mut lines = Vec::with_capacity(entries.len() * 3 + 2);
    lines.push(format!("{DECL_INDENT}const {var_name} = ["));

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        let comma = if i + 1 < entries.len() { "," } else { "" };
        lines.push(format!(
            "{ENTRY_INDENT}// Image {}: {}",
            entry.index, entry.filename
        ));
        lines.push(format!("{ENTRY_INDENT}'{}'{comma}", entry.data_uri));
    }

    lines.push(format!("{DECL_INDENT}];"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(index: usize, filename: &str, data_uri: &str) -> ImageEntry {
        ImageEntry {
            index,
            filename: filename.to_string(),
            path: PathBuf::from(filename),
            mime_type: "image/png",
            data_uri: data_uri.to_string(),
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render_js_array(&[], DEFAULT_VAR_NAME),
            "        const images = [\n        ];"
        );
    }

    #[test]
    fn test_render_single_entry_has_no_comma() {
        let out = render_js_array(&[entry(1, "a.png", "data:image/png;base64,AA==")], "images");
        let expected = "        const images = [\n\
                        \x20           // Image 1: a.png\n\
                        \x20           'data:image/png;base64,AA=='\n\
                        \x20       ];";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_multiple_entries() {
        let entries = [
            entry(1, "a.jpg", "data:image/jpeg;base64,AQ=="),
            entry(3, "c.png", "data:image/png;base64,Ag=="),
        ];
        let out = render_js_array(&entries, "carousel");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "        const carousel = [",
                "            // Image 1: a.jpg",
                "            'data:image/jpeg;base64,AQ==',",
                "",
                "            // Image 3: c.png",
                "            'data:image/png;base64,Ag=='",
                "        ];",
            ]
        );
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_validate_var_name() {
        assert!(validate_var_name("images").is_ok());
        assert!(validate_var_name("_slides$2").is_ok());
        assert!(validate_var_name("").is_err());
        assert!(validate_var_name("2fast").is_err());
        assert!(validate_var_name("my-images").is_err());
    }
}
