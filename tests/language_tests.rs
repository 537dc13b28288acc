//! 语言表与检测结果校验测试

mod common;

use common::FakeModel;
use smart_translate::application::detector::Detector;
use smart_translate::domain::error::TranslateError;
use smart_translate::domain::language::{display_name, find};
use std::sync::Arc;

fn detector(language: &str, confidence: f64) -> Detector {
    Detector::new(Arc::new(FakeModel::detecting(language, confidence)))
}

#[test]
fn test_language_lookup_is_case_insensitive() {
    assert_eq!(display_name("FR"), "French");
    assert_eq!(display_name("auto"), "Auto-detect");
}

#[test]
fn test_unknown_code_passes_through() {
    assert_eq!(display_name("unknown"), "unknown");
    assert!(find("xx").is_none());
}

#[tokio::test]
async fn test_confidence_bounds_are_accepted() {
    // 0 和 1 都是合法置信度
    assert!(detector("fr", 0.0).detect("x").await.is_ok());
    assert!(detector("fr", 1.0).detect("x").await.is_ok());
}

#[tokio::test]
async fn test_out_of_range_confidence_is_a_detection_failure() {
    for confidence in [1.5, -0.1, f64::NAN, f64::INFINITY] {
        let err = detector("fr", confidence).detect("x").await.unwrap_err();
        assert!(matches!(err, TranslateError::Detection(_)));
    }
}

#[tokio::test]
async fn test_blank_language_is_a_detection_failure() {
    let err = detector("  ", 0.9).detect("x").await.unwrap_err();
    assert!(matches!(err, TranslateError::Detection(_)));
}

#[tokio::test]
async fn test_language_label_is_kept_verbatim() {
    // 标签原样返回，不做 trim 或大小写处理
    let detection = detector(" Français", 0.9).detect("x").await.unwrap();
    assert_eq!(detection.language, " Français");
}
