use crate::application::history::History;
use crate::application::offline::OfflineCache;
use crate::application::orchestrator::Orchestrator;
use crate::domain::error::TranslateError;
use crate::domain::traits::{KeyValueStore, LanguageModel};
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::ChatModel;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::storage::db::SqliteStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_rusqlite::Connection;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn LanguageModel>,
    pub orchestrator: Arc<Orchestrator>,
    pub history: History,
    pub offline: OfflineCache,
    pub config: Arc<RwLock<Config>>,
}

impl AppState {
    pub fn new(db: Connection, config: Config) -> Result<Self, TranslateError> {
        let http_client = create_client(&config)?;
        let model = Arc::new(ChatModel::new(http_client, &config.model));
        let store = Arc::new(SqliteStore::new(db));
        Ok(Self::from_parts(model, store, config))
    }

    /// Wire the state from already-built collaborators.
    pub fn from_parts(
        model: Arc<dyn LanguageModel>,
        store: Arc<dyn KeyValueStore>,
        config: Config,
    ) -> Self {
        let orchestrator =
            Orchestrator::new(model.clone()).with_threshold(config.gate.confidence_threshold);

        Self {
            model,
            orchestrator: Arc::new(orchestrator),
            history: History::new(store.clone(), config.history.capacity),
            offline: OfflineCache::new(store, config.cache.normalize_keys),
            config: Arc::new(RwLock::new(config)),
        }
    }
}
