//! File naming helpers.

use std::path::Path;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Extension (lowercase, without the dot) to MIME type.
const MIME_TYPES: &[(&str, &str)] = &[
    ("avif", "image/avif"),
    ("css", "text/css; charset=utf-8"),
    ("csv", "text/csv; charset=utf-8"),
    ("gif", "image/gif"),
    ("gz", "application/gzip"),
    ("htm", "text/html; charset=utf-8"),
    ("html", "text/html; charset=utf-8"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript; charset=utf-8"),
    ("json", "application/json"),
    ("log", TEXT_PLAIN),
    ("md", "text/markdown; charset=utf-8"),
    ("mjs", "text/javascript; charset=utf-8"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tar", "application/x-tar"),
    ("txt", TEXT_PLAIN),
    ("wasm", "application/wasm"),
    ("webp", "image/webp"),
    ("xml", "text/xml; charset=utf-8"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
    ("zip", "application/zip"),
];

/// Replace `.` and `/` with `_` so `name` can be used as a single path
/// component.
///
/// ```
/// use leafkit_fs::safe_name;
///
/// assert_eq!(safe_name("github.com/org/repo"), "github_com_org_repo");
/// ```
pub fn safe_name(name: &str) -> String {
    name.replace(['.', '/'], "_")
}

/// MIME type for the extension of `name`, or `""` when it is unknown.
///
/// The lookup ignores case.
pub fn content_type(name: impl AsRef<Path>) -> &'static str {
    let Some(ext) = name.as_ref().extension().and_then(|ext| ext.to_str()) else {
        return "";
    };
    let ext = ext.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map_or("", |(_, mime)| *mime)
}
