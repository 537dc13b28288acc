use serde::{Deserialize, Serialize};

/// Fixed message returned when the confidence gate blocks translation.
pub const LOW_CONFIDENCE_MESSAGE: &str = "Language detection confidence is too low to translate.";

/// Source language code meaning "let the model figure it out".
pub const AUTO_DETECT: &str = "auto";

// 语言检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub language: String,
    pub confidence: f64,
}

// 翻译请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translation: String,
    pub detected_language: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fallback {
    pub message: String,
    pub detected_language: String,
    pub confidence: f64,
}

impl Fallback {
    pub fn low_confidence(detection: DetectionResult) -> Self {
        Self {
            message: LOW_CONFIDENCE_MESSAGE.to_string(),
            detected_language: detection.language,
            confidence: detection.confidence,
        }
    }
}

/// Result of one orchestration call: exactly one of the two, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Translated(TranslationResult),
    Fallback(Fallback),
}

// 翻译历史条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub source_lang: String,
    pub target_lang: String,
    pub source_text: String,
    pub translated_text: String,
    #[serde(default)]
    pub created_at: i64,
}

impl HistoryEntry {
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
