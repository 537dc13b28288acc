use crate::domain::error::TranslateError;
use crate::domain::model::DetectionResult;
use crate::domain::traits::LanguageModel;
use std::sync::Arc;

/// Language detection over the remote model.
#[derive(Clone)]
pub struct Detector {
    model: Arc<dyn LanguageModel>,
}

impl Detector {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Detect the language of `text`.
    ///
    /// Any missing or malformed answer becomes `TranslateError::Detection`;
    /// no partial detection is ever returned.
    pub async fn detect(&self, text: &str) -> Result<DetectionResult, TranslateError> {
        let answer = self
            .model
            .detect_language(text)
            .await
            .map_err(|e| match e {
                TranslateError::Detection(_) => e,
                other => TranslateError::Detection(other.to_string()),
            })?;

        let detection = answer.ok_or_else(|| {
            TranslateError::Detection("model returned no detection result".to_string())
        })?;

        validate(detection)
    }
}

fn validate(detection: DetectionResult) -> Result<DetectionResult, TranslateError> {
    if detection.language.trim().is_empty() {
        return Err(TranslateError::Detection(
            "model returned an empty language label".to_string(),
        ));
    }

    let confidence = detection.confidence;
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(TranslateError::Detection(format!(
            "confidence {} is outside [0, 1]",
            confidence
        )));
    }

    Ok(detection)
}
