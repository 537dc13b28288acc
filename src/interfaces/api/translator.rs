use crate::application::orchestrator::Orchestrator;
use crate::domain::model::Outcome;
use crate::interfaces::api::request::{FieldErrors, TranslateBody, INVALID_BODY};
use serde::Serialize;
use tracing::error;

/// In-process answer to a translation request.
///
/// Mirrors the HTTP endpoint's outcomes as typed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslateReply {
    #[serde(rename_all = "camelCase")]
    Success {
        translation: String,
        detected_language: String,
        confidence: f64,
    },
    /// The confidence gate held translation back; not an error.
    #[serde(rename_all = "camelCase")]
    LowConfidence {
        message: String,
        detected_language: String,
        confidence: f64,
    },
    Invalid {
        error: String,
        details: FieldErrors,
    },
    Error {
        error: String,
    },
}

impl From<Outcome> for TranslateReply {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Translated(r) => TranslateReply::Success {
                translation: r.translation,
                detected_language: r.detected_language,
                confidence: r.confidence,
            },
            Outcome::Fallback(f) => TranslateReply::LowConfidence {
                message: f.message,
                detected_language: f.detected_language,
                confidence: f.confidence,
            },
        }
    }
}

/// Validate and run one translation.
pub async fn get_translation(
    orchestrator: &Orchestrator,
    text: &str,
    target_language: &str,
) -> TranslateReply {
    handle_body(orchestrator, TranslateBody::new(text, target_language)).await
}

/// Validate a raw request body, then run the orchestration.
pub async fn handle_body(orchestrator: &Orchestrator, body: TranslateBody) -> TranslateReply {
    let request = match body.validate() {
        Ok(request) => request,
        Err(details) => {
            return TranslateReply::Invalid {
                error: INVALID_BODY.to_string(),
                details,
            }
        }
    };

    match orchestrator
        .run(&request.text, &request.target_language)
        .await
    {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("Translation API Error: {}", e);
            TranslateReply::Error {
                error: format!("Failed to get translation: {}", e),
            }
        }
    }
}
