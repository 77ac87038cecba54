//! Content serving: target resolution, static files, CGI programs, and
//! error responses.

pub mod cgi;
pub mod error;
pub mod resolver;
pub mod static_files;

pub use resolver::{ResolvedResource, resolve};

use std::os::unix::fs::PermissionsExt;

/// Filesystem facts about a resolved path, queried fresh for every
/// transaction (never cached across connections).
#[derive(Debug, Clone, Copy)]
pub struct ResourceMeta {
    pub is_regular: bool,
    pub size: u64,
    /// Owner read bit (0o400)
    pub readable: bool,
    /// Owner execute bit (0o100)
    pub executable: bool,
}

impl ResourceMeta {
    /// Stats `filename`. `None` means the path does not exist or cannot be
    /// statted, which the handler reports as 404.
    pub async fn stat(filename: &str) -> Option<Self> {
        let meta = tokio::fs::metadata(filename).await.ok()?;
        let mode = meta.permissions().mode();

        Some(Self {
            is_regular: meta.is_file(),
            size: meta.len(),
            readable: mode & 0o400 != 0,
            executable: mode & 0o100 != 0,
        })
    }
}
