//! Filename helpers shared by the catalog loader and the renderer.
//!
//! ## Captions
//!
//! Dashes and underscores become spaces and the final extension is dropped:
//! - `sunset_landscape.jpg` → "sunset landscape"
//! - `john-portrait.final.png` → "john portrait.final"
//! - `README` → "README"

/// Extensions (lowercase, no dot) the gallery will display.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// The text after the last `.`, if any.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// True when the filename ends in one of [`IMAGE_EXTENSIONS`], ignoring case.
pub fn is_image_file(filename: &str) -> bool {
    extension(filename)
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Display caption for a filename.
pub fn caption(filename: &str) -> String {
    let cleaned = filename.replace(['-', '_'], " ");
    match cleaned.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem.to_string(),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        for name in [
            "a.jpg", "a.jpeg", "a.png", "a.webp", "a.gif", "A.JPG", "b.WebP",
        ] {
            assert!(is_image_file(name), "{name} should be an image");
        }
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["randomfile.bmp", "notes.txt", "jpg", "photo.jpg.zip", "x."] {
            assert!(!is_image_file(name), "{name} should not be an image");
        }
    }

    #[test]
    fn extension_is_last_segment() {
        assert_eq!(extension("a.tar.gz"), Some("gz"));
        assert_eq!(extension("noext"), None);
    }

    #[test]
    fn caption_replaces_separators() {
        assert_eq!(caption("sunset_landscape.jpg"), "sunset landscape");
        assert_eq!(caption("ai-generated_cat.webp"), "ai generated cat");
    }

    #[test]
    fn caption_strips_only_last_extension() {
        assert_eq!(caption("john-portrait.final.png"), "john portrait.final");
    }

    #[test]
    fn caption_without_extension() {
        assert_eq!(caption("README"), "README");
        assert_eq!(caption("trailing."), "trailing.");
    }
}
