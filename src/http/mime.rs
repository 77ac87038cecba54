//! Content-type derivation from the filename.

/// Ordered content-type table; the first matching entry wins.
const FILETYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".gif", "image/gif"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".mpg", "video/mpeg"),
    (".mp4", "video/mp4"),
];

pub const DEFAULT_FILETYPE: &str = "text/plain";

/// Derives the Content-type for a filename.
///
/// Matching is substring containment, not a strict suffix check, so a name
/// containing `.html` anywhere maps to text/html.
pub fn filetype(filename: &str) -> &'static str {
    FILETYPES
        .iter()
        .find(|(ext, _)| filename.contains(ext))
        .map(|(_, filetype)| *filetype)
        .unwrap_or(DEFAULT_FILETYPE)
}
