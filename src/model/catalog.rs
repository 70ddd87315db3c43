//! Filesystem catalog models.

use std::path::PathBuf;

/// Supported image file extensions, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// One image file in the art directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Filename including extension.
    pub file_name: String,
    /// Display name derived from the filename.
    pub name: String,
    /// Full path of the file.
    pub path: PathBuf,
}

/// Result of scanning the art directory, used by the admin commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogScan {
    /// Whether the art directory exists.
    pub exists: bool,
    /// Image files with a supported extension, sorted by filename.
    pub valid_files: Vec<String>,
    /// Any other files, sorted by filename.
    pub invalid_files: Vec<String>,
    /// Combined size in bytes of every file in the directory.
    pub total_bytes: u64,
}

impl CatalogScan {
    /// Total directory size in megabytes.
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}
