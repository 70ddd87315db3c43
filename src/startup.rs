use std::sync::Arc;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config,
    error::AppError,
    service::{catalog::CardCatalog, registry::SpawnRegistry},
    state::BotState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the bot connects to
/// Discord.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs the global tracing subscriber.
///
/// Events go to the console and to a daily rolling `cardcaptor.log` in the configured
/// log directory. `RUST_LOG` takes precedence over `LOG_LEVEL` when set.
///
/// # Returns
/// - `Ok(WorkerGuard)` - Guard that flushes the file writer; keep it alive until exit
/// - `Err(AppError)` - The log directory or file could not be created
pub fn init_tracing(config: &Config) -> Result<WorkerGuard, AppError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("cardcaptor")
        .filename_suffix("log")
        .build(&config.log_directory)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}

/// Builds the shared bot state.
///
/// # Arguments
/// - `db` - Connected database with migrations applied
/// - `config` - Application configuration
///
/// # Returns
/// - `BotState` - State with an empty spawn registry
pub fn build_state(db: sea_orm::DatabaseConnection, config: Config) -> BotState {
    let catalog = CardCatalog::new(&config.art_directory);

    if !config.art_directory.exists() {
        tracing::warn!(
            "Art directory {} does not exist; /spawn will decline until cards are uploaded",
            config.art_directory.display()
        );
    }

    BotState {
        db,
        config: Arc::new(config),
        catalog,
        registry: SpawnRegistry::new(),
    }
}
