//! 共享的测试替身

#![allow(dead_code)]

use async_trait::async_trait;
use smart_translate::domain::error::TranslateError;
use smart_translate::domain::model::DetectionResult;
use smart_translate::domain::traits::LanguageModel;
use std::sync::atomic::{AtomicUsize, Ordering};

type DetectFn = Box<dyn Fn(&str) -> Result<Option<DetectionResult>, TranslateError> + Send + Sync>;
type TranslateFn =
    Box<dyn Fn(&str, &str) -> Result<Option<String>, TranslateError> + Send + Sync>;

/// Scripted language model that counts every call.
pub struct FakeModel {
    detection: DetectFn,
    translation: TranslateFn,
    detect_calls: AtomicUsize,
    translate_calls: AtomicUsize,
}

impl FakeModel {
    pub fn detecting(language: &str, confidence: f64) -> Self {
        let language = language.to_string();
        Self::with_detection(move |_| {
            Ok(Some(DetectionResult {
                language: language.clone(),
                confidence,
            }))
        })
    }

    /// Model that answers detection with nothing usable.
    pub fn detecting_nothing() -> Self {
        Self::with_detection(|_| Ok(None))
    }

    pub fn detection_error(message: &str) -> Self {
        let message = message.to_string();
        Self::with_detection(move |_| Err(TranslateError::Api(message.clone())))
    }

    /// 按输入文本决定检测结果
    pub fn detecting_by_text<F>(detect: F) -> Self
    where
        F: Fn(&str) -> (String, f64) + Send + Sync + 'static,
    {
        Self::with_detection(move |text| {
            let (language, confidence) = detect(text);
            Ok(Some(DetectionResult {
                language,
                confidence,
            }))
        })
    }

    fn with_detection<F>(detection: F) -> Self
    where
        F: Fn(&str) -> Result<Option<DetectionResult>, TranslateError> + Send + Sync + 'static,
    {
        Self {
            detection: Box::new(detection),
            translation: Box::new(|_, _| Ok(Some("translated".to_string()))),
            detect_calls: AtomicUsize::new(0),
            translate_calls: AtomicUsize::new(0),
        }
    }

    pub fn translating_to(mut self, translation: &str) -> Self {
        let translation = translation.to_string();
        self.translation = Box::new(move |_, _| Ok(Some(translation.clone())));
        self
    }

    pub fn translating_nothing(mut self) -> Self {
        self.translation = Box::new(|_, _| Ok(None));
        self
    }

    pub fn translating_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> Result<Option<String>, TranslateError> + Send + Sync + 'static,
    {
        self.translation = Box::new(f);
        self
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for FakeModel {
    async fn detect_language(&self, text: &str) -> Result<Option<DetectionResult>, TranslateError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        (self.detection)(text)
    }

    async fn translate_markup(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<Option<String>, TranslateError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        (self.translation)(text, target_language)
    }

    fn name(&self) -> String {
        "fake".to_string()
    }
}

/// Replace each text node with `[target] node`, leaving tags untouched.
pub fn tag_preserving_translation(text: &str, target: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        let node = &rest[..open];
        if node.trim().is_empty() {
            out.push_str(node);
        } else {
            out.push_str(&format!("[{}] {}", target, node));
        }
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[open..open + close + 1]);
                rest = &rest[open + close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    if rest.trim().is_empty() {
        out.push_str(rest);
    } else {
        out.push_str(&format!("[{}] {}", target, rest));
    }
    out
}
