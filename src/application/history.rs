use crate::domain::error::TranslateError;
use crate::domain::model::HistoryEntry;
use crate::domain::traits::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

pub const HISTORY_KEY: &str = "translationHistory";
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded translation history, newest first.
#[derive(Clone)]
pub struct History {
    store: Arc<dyn KeyValueStore>,
    capacity: usize,
}

impl History {
    pub fn new(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self {
            store,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored entries; an unreadable record is treated as an empty history.
    pub async fn entries(&self) -> Result<Vec<HistoryEntry>, TranslateError> {
        let Some(raw) = self.store.get(HISTORY_KEY).await? else {
            return Ok(Vec::new());
        };

        Ok(decode_entries(&raw))
    }

    /// Put `entry` at the front and drop whatever falls past capacity.
    ///
    /// The read and the write happen in one store update, so concurrent
    /// recorders never drop each other's entries.
    pub async fn record(&self, entry: HistoryEntry) -> Result<(), TranslateError> {
        let capacity = self.capacity;
        self.store
            .update(
                HISTORY_KEY,
                Box::new(move |raw| {
                    let mut entries = raw.map(|raw| decode_entries(&raw)).unwrap_or_default();
                    entries.insert(0, entry);
                    entries.truncate(capacity);
                    Ok(serde_json::to_vec(&entries)?)
                }),
            )
            .await
    }

    pub async fn clear(&self) -> Result<(), TranslateError> {
        self.store.remove(HISTORY_KEY).await
    }
}

fn decode_entries(raw: &[u8]) -> Vec<HistoryEntry> {
    match serde_json::from_slice::<Vec<HistoryEntry>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Error reading history record: {}", e);
            Vec::new()
        }
    }
}
