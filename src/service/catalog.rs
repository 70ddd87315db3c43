//! Art directory scanning and card name derivation.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::AppError,
    model::catalog::{CatalogEntry, CatalogScan, SUPPORTED_EXTENSIONS},
};

/// Read-only view of the art directory cards are drawn from.
///
/// The directory is read on every call so files added or removed at runtime are picked
/// up by the next spawn.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    directory: Arc<PathBuf>,
}

impl CardCatalog {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Arc::new(directory.into()),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Lists the image files a spawn can draw from, sorted by filename.
    ///
    /// # Returns
    /// - `Ok(Vec<CatalogEntry>)` - Supported image files, empty if the directory is
    ///   missing or holds no images
    /// - `Err(AppError::IoErr)` - The directory exists but could not be read
    pub async fn entries(&self) -> Result<Vec<CatalogEntry>, AppError> {
        let scan = self.read_directory().await?;

        Ok(scan
            .valid_files
            .into_iter()
            .map(|file_name| CatalogEntry {
                name: derive_card_name(&file_name),
                path: self.directory.join(&file_name),
                file_name,
            })
            .collect())
    }

    /// Scans the directory for the admin listing.
    ///
    /// # Returns
    /// - `Ok(CatalogScan)` - Valid and invalid files plus total size; `exists` is false
    ///   and the lists empty when the directory is missing
    /// - `Err(AppError::IoErr)` - The directory exists but could not be read
    pub async fn scan(&self) -> Result<CatalogScan, AppError> {
        self.read_directory().await
    }

    /// Whether a file of that name is present in the directory.
    pub async fn contains(&self, file_name: &str) -> Result<bool, AppError> {
        Ok(tokio::fs::try_exists(self.directory.join(file_name)).await?)
    }

    async fn read_directory(&self) -> Result<CatalogScan, AppError> {
        let mut read_dir = match tokio::fs::read_dir(self.directory.as_path()).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CatalogScan::default()),
            Err(e) => return Err(e.into()),
        };

        let mut scan = CatalogScan {
            exists: true,
            ..Default::default()
        };

        while let Some(entry) = read_dir.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            scan.total_bytes += metadata.len();

            if is_supported_image(&file_name) {
                scan.valid_files.push(file_name);
            } else {
                scan.invalid_files.push(file_name);
            }
        }

        scan.valid_files.sort();
        scan.invalid_files.sort();

        Ok(scan)
    }
}

/// Whether the filename has one of the supported image extensions.
pub fn is_supported_image(file_name: &str) -> bool {
    extension_of(file_name)
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Extension of a filename without the dot, if any.
pub fn extension_of(file_name: &str) -> Option<&str> {
    Path::new(file_name).extension().and_then(|ext| ext.to_str())
}

/// Derives a display name from an image filename.
///
/// Strips the extension, turns underscores and hyphens into spaces and capitalises each
/// word: `mystic_warrior_v2.png` becomes "Mystic Warrior V2".
pub fn derive_card_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
