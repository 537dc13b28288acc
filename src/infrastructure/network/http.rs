// HTTP client utilities
use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use reqwest::Client;
use std::time::Duration;

pub const USER_AGENT: &str = concat!("smart-translate/", env!("CARGO_PKG_VERSION"));

/// Outbound client for the language model. The timeout here is the only
/// deadline a request gets; the orchestration itself sets none.
pub fn create_client(config: &Config) -> Result<Client, TranslateError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(config.model.timeout_secs.max(1)))
        .user_agent(USER_AGENT);

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| TranslateError::Config(format!("Invalid http_proxy: {}", e)))?;
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}
