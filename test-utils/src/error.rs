use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create the schema.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create a fixture on the filesystem.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
