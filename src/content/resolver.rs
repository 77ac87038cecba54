//! Maps a request target to a filesystem path and a static/dynamic
//! classification. Pure, no I/O.

/// Prefix rooting every resolved filename in the document root, which is
/// the process working directory.
const ROOT_MARKER: &str = ".";

/// Document served when a static target ends with `/`.
const DEFAULT_DOCUMENT: &str = "home.html";

/// Targets containing this substring anywhere are dynamic content.
const CGI_SEGMENT: &str = "cgi-bin";

/// The outcome of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Filesystem path, always `"."` + the target path
    pub filename: String,
    /// Raw query string (after the first `?`), empty for static content
    pub query_args: String,
    pub is_dynamic: bool,
}

/// Resolves a request target.
///
/// Dynamic targets (containing `cgi-bin`) split at the first `?`: the
/// remainder becomes the query string and never reaches the filename.
/// Static targets carry no query string, and a trailing `/` selects the
/// default document.
///
/// `..` and `.` segments are not normalized; the filename is taken as-is
/// relative to the document root.
pub fn resolve(uri: &str) -> ResolvedResource {
    if uri.contains(CGI_SEGMENT) {
        let (path, args) = match uri.split_once('?') {
            Some((path, args)) => (path, args),
            None => (uri, ""),
        };

        ResolvedResource {
            filename: format!("{}{}", ROOT_MARKER, path),
            query_args: args.to_string(),
            is_dynamic: true,
        }
    } else {
        let mut filename = format!("{}{}", ROOT_MARKER, uri);
        if uri.ends_with('/') {
            filename.push_str(DEFAULT_DOCUMENT);
        }

        ResolvedResource {
            filename,
            query_args: String::new(),
            is_dynamic: false,
        }
    }
}
