use crate::domain::error::TranslateError;
use crate::domain::model::DetectionResult;
use crate::domain::traits::LanguageModel;
use crate::infrastructure::config::ModelConfig;
use crate::infrastructure::network::prompts;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

// Chat API request/response structures
#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    format: Value,
    options: ChatOptions,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize, Debug)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize, Debug)]
struct TranslationPayload {
    translation: String,
}

/// Language model reached through an Ollama-compatible `/api/chat` endpoint,
/// using JSON-schema structured output.
#[derive(Clone)]
pub struct ChatModel {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
}

impl ChatModel {
    pub fn new(client: Client, config: &ModelConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            temperature: config.temperature,
        }
    }

    /// Send one structured prompt and decode the answer into `T`.
    ///
    /// `Ok(None)` when the model's content is empty or does not match `T`.
    async fn structured<T: DeserializeOwned>(
        &self,
        prompt: String,
        schema: Value,
    ) -> Result<Option<T>, TranslateError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
            format: schema,
            options: ChatOptions {
                temperature: self.temperature,
            },
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api(format!("{} - {}", status, text)));
        }

        let chat = response.json::<ChatResponse>().await?;
        let content = chat.message.map(|m| m.content).unwrap_or_default();
        debug!(model = %self.model, bytes = content.len(), "model answered");

        Ok(decode_content(&content))
    }
}

/// Decode the model's structured content; unusable content is `None`.
fn decode_content<T: DeserializeOwned>(content: &str) -> Option<T> {
    let content = content.trim();
    if content.is_empty() {
        warn!("model returned empty content");
        return None;
    }
    match serde_json::from_str::<T>(content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("model content does not match the requested shape: {}", e);
            None
        }
    }
}

#[async_trait]
impl LanguageModel for ChatModel {
    async fn detect_language(&self, text: &str) -> Result<Option<DetectionResult>, TranslateError> {
        self.structured(prompts::detection_prompt(text), prompts::detection_schema())
            .await
    }

    async fn translate_markup(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<Option<String>, TranslateError> {
        let payload: Option<TranslationPayload> = self
            .structured(
                prompts::translation_prompt(text, target_language),
                prompts::translation_schema(),
            )
            .await?;
        Ok(payload.map(|p| p.translation))
    }

    fn name(&self) -> String {
        format!("{} @ {}", self.model, self.base_url)
    }
}
