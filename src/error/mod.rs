//! Error types and Discord reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is the
//! top-level error type that wraps domain-specific errors. Interaction handlers never
//! show error details to users: they log the full error and reply with the generic
//! message from `AppError::user_message`.

pub mod config;
pub mod internal;
pub mod render;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, render::RenderError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal at startup; the bot does not connect to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Transactions roll back on drop, so a failed claim leaves the slot unclaimed.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error while reading or writing the art directory.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Failed to compose the spawn image.
    #[error(transparent)]
    RenderErr(#[from] RenderError),

    /// Stored data that cannot be converted into a domain model.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Failed to create the rolling log file appender.
    #[error(transparent)]
    LogInitErr(#[from] tracing_appender::rolling::InitError),

    /// Background task panicked or was cancelled.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Generic message shown to the Discord user for this error.
    ///
    /// Details are never exposed; callers log the error itself.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::IoErr(_) => "❌ The card art folder could not be read. Please try again later.",
            Self::DiscordErr(_) => "❌ Discord rejected the request. Please try again.",
            _ => "❌ An unexpected error occurred. Please try again later.",
        }
    }
}
