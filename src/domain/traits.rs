use crate::domain::error::TranslateError;
use crate::domain::model::DetectionResult;
use async_trait::async_trait;

/// Read-modify-write step applied by [`KeyValueStore::update`]: receives the
/// current value (if any) and returns the value to store.
pub type UpdateFn =
    Box<dyn FnOnce(Option<Vec<u8>>) -> Result<Vec<u8>, TranslateError> + Send + 'static>;

/// Remote language model capability
///
/// One method per structured prompt. `Ok(None)` means the model answered but
/// gave nothing usable (empty or not matching the requested shape); `Err` is
/// reserved for transport and API failures. Implementations must be safe to
/// share between concurrent requests.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Ask the model which language `text` is written in.
    async fn detect_language(&self, text: &str) -> Result<Option<DetectionResult>, TranslateError>;

    /// Ask the model to translate the text nodes of `text` into `target_language`,
    /// leaving tags and attributes untouched.
    async fn translate_markup(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<Option<String>, TranslateError>;

    /// Short label for status output and logs.
    fn name(&self) -> String {
        "language-model".to_string()
    }
}

/// Key-value storage for client-local state (history, offline cache)
///
/// Keeps persistence out of the orchestration core; the SQLite and in-memory
/// stores both implement it.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, TranslateError>;

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), TranslateError>;

    async fn remove(&self, key: &str) -> Result<(), TranslateError>;

    /// Atomically replace the value under `key` with `f(current)`.
    ///
    /// No other writer may touch `key` between the read and the write; an
    /// error from `f` leaves the stored value unchanged.
    async fn update(&self, key: &str, f: UpdateFn) -> Result<(), TranslateError>;

    /// Number of keys starting with `prefix`.
    async fn count_prefix(&self, prefix: &str) -> Result<usize, TranslateError>;
}
