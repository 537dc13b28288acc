use crate::domain::error::TranslateError;
use crate::domain::traits::KeyValueStore;
use sha2::{Digest, Sha256};
use std::sync::Arc;

pub const OFFLINE_PREFIX: &str = "offline:";

/// Logical cache key: `{source}-{target}:{text}`.
///
/// With `normalize` the language codes are lowercased and the text is trimmed
/// with inner whitespace runs collapsed to one space; case inside the text is
/// always kept.
pub fn cache_key(source_lang: &str, target_lang: &str, text: &str, normalize: bool) -> String {
    if normalize {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        format!(
            "{}-{}:{}",
            source_lang.trim().to_lowercase(),
            target_lang.trim().to_lowercase(),
            text
        )
    } else {
        format!("{}-{}:{}", source_lang, target_lang, text)
    }
}

// 存储键使用 sha256，避免长文本作为主键
fn storage_key(logical: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(logical.as_bytes());
    format!("{}{}", OFFLINE_PREFIX, hex::encode(hasher.finalize()))
}

/// Offline translation cache, consulted only when the client is offline.
#[derive(Clone)]
pub struct OfflineCache {
    store: Arc<dyn KeyValueStore>,
    normalize: bool,
}

impl OfflineCache {
    pub fn new(store: Arc<dyn KeyValueStore>, normalize: bool) -> Self {
        Self { store, normalize }
    }

    pub async fn lookup(
        &self,
        source_lang: &str,
        target_lang: &str,
        text: &str,
    ) -> Result<Option<String>, TranslateError> {
        let key = storage_key(&cache_key(source_lang, target_lang, text, self.normalize));
        // 空串视为未命中
        Ok(self
            .store
            .get(&key)
            .await?
            .filter(|raw| !raw.is_empty())
            .map(|raw| String::from_utf8_lossy(&raw).into_owned()))
    }

    pub async fn remember(
        &self,
        source_lang: &str,
        target_lang: &str,
        text: &str,
        translation: &str,
    ) -> Result<(), TranslateError> {
        let key = storage_key(&cache_key(source_lang, target_lang, text, self.normalize));
        self.store.put(&key, translation.as_bytes().to_vec()).await
    }

    pub async fn count(&self) -> Result<usize, TranslateError> {
        self.store.count_prefix(OFFLINE_PREFIX).await
    }
}
