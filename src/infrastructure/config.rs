use crate::application::history::DEFAULT_HISTORY_CAPACITY;
use crate::application::orchestrator::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::domain::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "smart-translate";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    #[serde(default)]
    pub clear_screen: bool,
    pub http_proxy: Option<String>,
    #[serde(default = "default_target")]
    pub default_target: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GateConfig {
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
    /// History and offline cache database; defaults to the config directory.
    pub db_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CacheConfig {
    #[serde(default)]
    pub normalize_keys: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            temperature: 0.0,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
            db_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_emoji: true,
            clear_screen: false,
            http_proxy: None,
            default_target: default_target(),
            server: ServerConfig::default(),
            model: ModelConfig::default(),
            gate: GateConfig::default(),
            history: HistoryConfig::default(),
            cache: CacheConfig::default(),
            logging: Logging::default(),
        }
    }
}

impl Config {
    /// Reject values that would make the gate or the client meaningless.
    pub fn validate(&self) -> Result<(), TranslateError> {
        let t = self.gate.confidence_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(TranslateError::Config(format!(
                "gate.confidence_threshold must be within [0, 1], got {}",
                t
            )));
        }
        if self.model.base_url.trim().is_empty() {
            return Err(TranslateError::Config("model.base_url is empty".to_string()));
        }
        if self.model.model.trim().is_empty() {
            return Err(TranslateError::Config("model.model is empty".to_string()));
        }
        if self.history.capacity == 0 {
            return Err(TranslateError::Config(
                "history.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// Defaults
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_target() -> String {
    "es".to_string()
}
fn default_bind() -> String {
    "127.0.0.1:9002".to_string()
}
fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}
fn default_model() -> String {
    "llama3.1:8b".to_string()
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}
fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"))
}

/// Database path for history and the offline cache.
///
/// `[history] db_path` wins; otherwise ~/.config/smart-translate/history.db (Linux).
pub fn get_database_path(config: &Config) -> PathBuf {
    if let Some(path) = config.history.db_path.as_deref().filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("history.db")
}

/// Parse a config document; missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<Config, TranslateError> {
    let config = toml::from_str::<Config>(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config() -> Result<Config, TranslateError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), TranslateError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| TranslateError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(TranslateError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
