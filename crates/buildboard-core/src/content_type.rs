//! Static file-extension to MIME-type lookup.

use std::path::Path;

/// Content type served when the extension is absent or unrecognized.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Look up the content type for a file extension (case-insensitive).
pub fn content_type_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "txt" => "text/plain",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// Content type for a path, from its extension.
pub fn content_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(content_type_for)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type_for("jpg"), "image/jpeg");
        assert_eq!(content_type_for("jpeg"), "image/jpeg");
        assert_eq!(content_type_for("png"), "image/png");
        assert_eq!(content_type_for("gif"), "image/gif");
        assert_eq!(content_type_for("html"), "text/html");
        assert_eq!(content_type_for("css"), "text/css");
        assert_eq!(content_type_for("js"), "text/javascript");
        assert_eq!(content_type_for("txt"), "text/plain");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(content_type_for("JPG"), "image/jpeg");
        assert_eq!(content_type_for("Html"), "text/html");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_plain_text() {
        assert_eq!(content_type_for("asdf"), "text/plain");
        assert_eq!(content_type_for(""), "text/plain");
    }

    #[test]
    fn test_path_lookup() {
        assert_eq!(content_type_for_path(Path::new("a/b/foo.png")), "image/png");
        assert_eq!(content_type_for_path(Path::new("foo")), "text/plain");
        assert_eq!(content_type_for_path(Path::new("foo.ASDF")), "text/plain");
    }
}
