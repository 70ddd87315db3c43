use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::Config, service::catalog::CardCatalog, service::registry::SpawnRegistry};

/// State shared by every Discord event handler.
///
/// Cloning is cheap: the connection pool, config and registry are reference counted.
#[derive(Clone)]
pub struct BotState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub catalog: CardCatalog,
    pub registry: SpawnRegistry,
}
