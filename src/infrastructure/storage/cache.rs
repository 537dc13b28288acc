// In-memory key-value store using DashMap
use crate::domain::error::TranslateError;
use crate::domain::traits::KeyValueStore;
use async_trait::async_trait;
use crate::domain::traits::UpdateFn;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Thread-safe in-memory store; contents vanish with the process.
#[derive(Default)]
pub struct MemoryStore {
    map: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, TranslateError> {
        Ok(self.map.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), TranslateError> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), TranslateError> {
        self.map.remove(key);
        Ok(())
    }

    async fn update(&self, key: &str, f: UpdateFn) -> Result<(), TranslateError> {
        // entry 持有分片锁，读改写期间其他写入者被阻塞
        match self.map.entry(key.to_string()) {
            Entry::Occupied(mut slot) => {
                let value = f(Some(slot.get().clone()))?;
                slot.insert(value);
            }
            Entry::Vacant(slot) => {
                slot.insert(f(None)?);
            }
        }
        Ok(())
    }

    async fn count_prefix(&self, prefix: &str) -> Result<usize, TranslateError> {
        Ok(self
            .map
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .count())
    }
}
