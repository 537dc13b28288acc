use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(String),

    // 语言检测失败，不会继续翻译
    #[error("Could not detect language: {0}")]
    Detection(String),

    #[error("Could not translate text: {0}")]
    Translation(String),

    #[error("Invalid request: {0}")]
    Validation(String),
}
