mod bot;
mod config;
mod data;
mod error;
mod model;
mod render;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let _log_guard = startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let state = startup::build_state(db, config);

    if let Err(e) = bot::start::start_bot(state).await {
        tracing::error!("Discord bot error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
