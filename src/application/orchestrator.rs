use crate::application::detector::Detector;
use crate::application::translator::Translator;
use crate::domain::error::TranslateError;
use crate::domain::model::{Fallback, Outcome, TranslationResult};
use crate::domain::traits::LanguageModel;
use std::sync::Arc;
use tracing::{debug, info};

/// Detection confidence at or above which translation proceeds.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Confidence-gated translation
///
/// Detect, gate, then translate. Holds no mutable state, so one instance is
/// shared by every request behind an `Arc`.
#[derive(Clone)]
pub struct Orchestrator {
    detector: Detector,
    translator: Translator,
    threshold: f64,
}

impl Orchestrator {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            detector: Detector::new(model.clone()),
            translator: Translator::new(model),
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Gate policy: `true` when translation may be attempted.
    pub fn passes_gate(&self, confidence: f64) -> bool {
        confidence >= self.threshold
    }

    pub async fn run(&self, text: &str, target_language: &str) -> Result<Outcome, TranslateError> {
        // 1. 检测语言，失败则直接返回
        let detection = self.detector.detect(text).await?;
        debug!(
            language = %detection.language,
            confidence = detection.confidence,
            "language detected"
        );

        // 2. 置信度不足，不调用翻译
        if !self.passes_gate(detection.confidence) {
            info!(
                language = %detection.language,
                confidence = detection.confidence,
                threshold = self.threshold,
                "confidence below threshold, skipping translation"
            );
            return Ok(Outcome::Fallback(Fallback::low_confidence(detection)));
        }

        // 3. 翻译
        let translation = self.translator.translate(text, target_language).await?;

        Ok(Outcome::Translated(TranslationResult {
            translation,
            detected_language: detection.language,
            confidence: detection.confidence,
        }))
    }
}
