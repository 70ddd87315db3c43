//! Catalog administration: uploading, deleting and inspecting card art.
//!
//! Files are only ever added or removed in the art directory. Deleting a file keeps its
//! card row so existing collections and spawn history stay intact.

use std::{fmt, io::ErrorKind, path::Path};

use sea_orm::DatabaseConnection;
use tokio::io::AsyncWriteExt;

use crate::{
    data::card::CardRepository,
    error::AppError,
    model::{
        card::{Card, UpsertCardParam},
        catalog::SUPPORTED_EXTENSIONS,
    },
    service::catalog::{derive_card_name, extension_of, is_supported_image, CardCatalog},
};

/// Largest accepted upload in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Reasons an upload is refused before or while writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    UnsupportedExtension,
    TooLarge { size: u64 },
    InvalidName,
    AlreadyExists { file_name: String },
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedExtension => write!(
                f,
                "❌ Unsupported file type. Supported formats: {}",
                SUPPORTED_EXTENSIONS.join(", ")
            ),
            Self::TooLarge { size } => write!(
                f,
                "❌ File too large ({:.1} MB). Maximum size is 10 MB.",
                *size as f64 / (1024.0 * 1024.0)
            ),
            Self::InvalidName => write!(f, "❌ Card names cannot contain path separators."),
            Self::AlreadyExists { file_name } => write!(
                f,
                "❌ A card named `{}` already exists. Pick another name or delete it first.",
                file_name
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Stored { file_name: String, card: Card },
    Rejected(UploadRejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    InvalidName,
}

pub struct CatalogAdminService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CardCatalog,
}

impl<'a> CatalogAdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CardCatalog) -> Self {
        Self { db, catalog }
    }

    /// Validates an upload before its attachment is downloaded.
    ///
    /// # Arguments
    /// - `original_name` - Filename of the Discord attachment
    /// - `custom_name` - Optional card name chosen by the admin
    /// - `size` - Attachment size in bytes
    ///
    /// # Returns
    /// - `Ok(Ok(String))` - Target filename inside the art directory
    /// - `Ok(Err(UploadRejection))` - The upload must be refused
    /// - `Err(AppError::IoErr)` - The art directory could not be checked
    pub async fn check_upload(
        &self,
        original_name: &str,
        custom_name: Option<&str>,
        size: u64,
    ) -> Result<Result<String, UploadRejection>, AppError> {
        let file_name = match plan_upload(original_name, custom_name, size) {
            Ok(file_name) => file_name,
            Err(rejection) => return Ok(Err(rejection)),
        };

        if self.catalog.contains(&file_name).await? {
            return Ok(Err(UploadRejection::AlreadyExists { file_name }));
        }

        Ok(Ok(file_name))
    }

    /// Writes an uploaded image and registers its card.
    ///
    /// The file is created exclusively, so a concurrent upload of the same name is
    /// rejected rather than overwritten.
    ///
    /// # Arguments
    /// - `file_name` - Target filename from `check_upload`
    /// - `bytes` - Downloaded attachment contents
    ///
    /// # Returns
    /// - `Ok(UploadOutcome::Stored)` - File written and card row present
    /// - `Ok(UploadOutcome::Rejected)` - The file appeared in the meantime
    /// - `Err(AppError)` - Filesystem or database error
    pub async fn store_upload(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<UploadOutcome, AppError> {
        tokio::fs::create_dir_all(self.catalog.directory()).await?;
        let path = self.catalog.directory().join(file_name);

        let file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(UploadOutcome::Rejected(UploadRejection::AlreadyExists {
                    file_name: file_name.to_string(),
                }))
            }
            Err(e) => return Err(e.into()),
        };

        let card = match self.write_and_register(file, &path, file_name, bytes).await {
            Ok(card) => card,
            Err(e) => {
                // A half-written file would otherwise show up in the next spawn
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(
                        "Failed to remove incomplete upload {}: {}",
                        path.display(),
                        remove_err
                    );
                }
                return Err(e);
            }
        };

        tracing::info!("Stored card art {} as card {}", file_name, card.id);

        Ok(UploadOutcome::Stored {
            file_name: file_name.to_string(),
            card,
        })
    }

    async fn write_and_register(
        &self,
        mut file: tokio::fs::File,
        path: &Path,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Card, AppError> {
        file.write_all(bytes).await?;
        file.flush().await?;

        let card = CardRepository::new(self.db)
            .upsert_by_image_path(UpsertCardParam {
                name: derive_card_name(file_name),
                image_path: path.to_string_lossy().into_owned(),
            })
            .await?;

        Ok(card)
    }

    /// Removes an image from the art directory.
    ///
    /// # Returns
    /// - `Ok(DeleteOutcome::Deleted)` - File removed
    /// - `Ok(DeleteOutcome::NotFound)` - No such file
    /// - `Ok(DeleteOutcome::InvalidName)` - The name contains a path separator
    /// - `Err(AppError::IoErr)` - The file exists but could not be removed
    pub async fn delete(&self, file_name: &str) -> Result<DeleteOutcome, AppError> {
        if !is_plain_file_name(file_name) {
            return Ok(DeleteOutcome::InvalidName);
        }

        match tokio::fs::remove_file(self.catalog.directory().join(file_name)).await {
            Ok(()) => {
                tracing::info!("Deleted card art {}", file_name);
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DeleteOutcome::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// Computes the target filename of an upload and applies the static checks.
///
/// With a custom name, spaces become underscores and the attachment's extension is
/// kept: "Fire Dragon" for `img.PNG` becomes `Fire_Dragon.PNG`.
pub fn plan_upload(
    original_name: &str,
    custom_name: Option<&str>,
    size: u64,
) -> Result<String, UploadRejection> {
    if !is_supported_image(original_name) {
        return Err(UploadRejection::UnsupportedExtension);
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge { size });
    }

    let file_name = match custom_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => {
            let extension = extension_of(original_name).unwrap_or_default();
            format!("{}.{}", name.replace(' ', "_"), extension)
        }
        None => original_name.to_string(),
    };

    if !is_plain_file_name(&file_name) {
        return Err(UploadRejection::InvalidName);
    }

    Ok(file_name)
}

fn is_plain_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && !file_name.contains(['/', '\\'])
        && file_name != "."
        && file_name != ".."
}
