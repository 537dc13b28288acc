//! 置信度门控测试

mod common;

use common::{tag_preserving_translation, FakeModel};
use smart_translate::application::markup::{tag_skeleton, text_nodes};
use smart_translate::domain::error::TranslateError;
use smart_translate::domain::model::{Fallback, Outcome, TranslationResult, LOW_CONFIDENCE_MESSAGE};
use smart_translate::{Orchestrator, DEFAULT_CONFIDENCE_THRESHOLD};
use std::sync::Arc;

fn orchestrator(model: &Arc<FakeModel>) -> Orchestrator {
    Orchestrator::new(model.clone())
}

#[tokio::test]
async fn test_confident_detection_translates() {
    let model = Arc::new(FakeModel::detecting("fr", 0.95).translating_to("Hello world"));
    let outcome = orchestrator(&model)
        .run("Bonjour le monde", "en")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Translated(TranslationResult {
            translation: "Hello world".to_string(),
            detected_language: "fr".to_string(),
            confidence: 0.95,
        })
    );
    assert_eq!(model.detect_calls(), 1);
    assert_eq!(model.translate_calls(), 1);
}

#[tokio::test]
async fn test_low_confidence_falls_back_without_translating() {
    let model = Arc::new(FakeModel::detecting("unknown", 0.3));
    let outcome = orchestrator(&model).run("xyz", "en").await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Fallback(Fallback {
            message: LOW_CONFIDENCE_MESSAGE.to_string(),
            detected_language: "unknown".to_string(),
            confidence: 0.3,
        })
    );
    assert_eq!(model.translate_calls(), 0);
}

#[tokio::test]
async fn test_every_confidence_below_threshold_skips_translator() {
    for confidence in [0.0, 0.1, 0.25, 0.5, 0.69, 0.699_999] {
        let model = Arc::new(FakeModel::detecting("de", confidence));
        let outcome = orchestrator(&model).run("Hallo", "en").await.unwrap();

        match outcome {
            Outcome::Fallback(f) => {
                assert_eq!(f.message, LOW_CONFIDENCE_MESSAGE);
                assert_eq!(f.detected_language, "de");
                assert_eq!(f.confidence, confidence);
            }
            other => panic!("expected fallback for {}, got {:?}", confidence, other),
        }
        assert_eq!(model.translate_calls(), 0, "confidence {}", confidence);
    }
}

#[tokio::test]
async fn test_threshold_is_inclusive() {
    let model = Arc::new(FakeModel::detecting("es", DEFAULT_CONFIDENCE_THRESHOLD));
    let outcome = orchestrator(&model).run("Hola", "en").await.unwrap();

    assert!(matches!(outcome, Outcome::Translated(_)));
    assert_eq!(model.translate_calls(), 1);
}

#[tokio::test]
async fn test_translator_called_iff_confident() {
    for (confidence, expected_calls) in [(0.0, 0), (0.69, 0), (0.7, 1), (0.71, 1), (1.0, 1)] {
        let model = Arc::new(FakeModel::detecting("it", confidence));
        orchestrator(&model).run("Ciao", "en").await.unwrap();
        assert_eq!(model.translate_calls(), expected_calls, "confidence {}", confidence);
    }
}

#[tokio::test]
async fn test_custom_threshold() {
    let model = Arc::new(FakeModel::detecting("pt", 0.8));
    let strict = Orchestrator::new(model.clone()).with_threshold(0.9);

    let outcome = strict.run("Olá", "en").await.unwrap();
    assert!(matches!(outcome, Outcome::Fallback(_)));
    assert_eq!(model.translate_calls(), 0);
    assert!(strict.passes_gate(0.9));
    assert!(!strict.passes_gate(0.899));
}

#[tokio::test]
async fn test_missing_detection_is_a_failure_not_a_fallback() {
    let model = Arc::new(FakeModel::detecting_nothing());
    let err = orchestrator(&model).run("???", "en").await.unwrap_err();

    assert!(matches!(err, TranslateError::Detection(_)));
    assert_eq!(model.translate_calls(), 0);
}

#[tokio::test]
async fn test_detection_transport_error_keeps_message() {
    let model = Arc::new(FakeModel::detection_error("503 Service Unavailable"));
    let err = orchestrator(&model).run("Hola", "en").await.unwrap_err();

    match err {
        TranslateError::Detection(msg) => assert!(msg.contains("503 Service Unavailable")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(model.translate_calls(), 0);
}

#[tokio::test]
async fn test_malformed_confidence_is_a_detection_failure() {
    let model = Arc::new(FakeModel::detecting("fr", 7.0));
    let err = orchestrator(&model).run("Salut", "en").await.unwrap_err();

    assert!(matches!(err, TranslateError::Detection(_)));
    assert_eq!(model.translate_calls(), 0);
}

#[tokio::test]
async fn test_missing_translation_is_a_translation_failure() {
    let model = Arc::new(FakeModel::detecting("fr", 0.9).translating_nothing());
    let err = orchestrator(&model).run("Salut", "en").await.unwrap_err();

    assert!(matches!(err, TranslateError::Translation(_)));
    assert_eq!(model.translate_calls(), 1);
}

#[tokio::test]
async fn test_translation_error_propagates_message() {
    let model = Arc::new(
        FakeModel::detecting("fr", 0.9)
            .translating_with(|_, _| Err(TranslateError::Api("quota exceeded".to_string()))),
    );
    let err = orchestrator(&model).run("Salut", "en").await.unwrap_err();

    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn test_target_language_reaches_translator() {
    let model = Arc::new(
        FakeModel::detecting("en", 0.99).translating_with(|text, target| {
            Ok(Some(format!("{}:{}", target, text)))
        }),
    );
    let outcome = orchestrator(&model).run("Hello", "ja").await.unwrap();

    match outcome {
        Outcome::Translated(r) => assert_eq!(r.translation, "ja:Hello"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_markup_round_trip_keeps_tags() {
    let model = Arc::new(
        FakeModel::detecting("en", 0.98)
            .translating_with(|text, target| Ok(Some(tag_preserving_translation(text, target)))),
    );
    let source = r#"<h1>Hello</h1><p class="lead">This is a <a href="/x">paragraph</a>.</p>"#;
    let outcome = orchestrator(&model).run(source, "es").await.unwrap();

    let Outcome::Translated(result) = outcome else {
        panic!("expected a translation");
    };
    assert_eq!(tag_skeleton(source), tag_skeleton(&result.translation));
    assert_eq!(tag_skeleton(&result.translation)[0], "<h1>");
    assert!(text_nodes(&result.translation)
        .iter()
        .all(|node| node.starts_with("[es]")));
}

#[tokio::test]
async fn test_simple_heading_round_trip() {
    let model = Arc::new(FakeModel::detecting("en", 0.9).translating_to("<h1>Hola</h1>"));
    let outcome = orchestrator(&model).run("<h1>Hello</h1>", "es").await.unwrap();

    let Outcome::Translated(result) = outcome else {
        panic!("expected a translation");
    };
    assert_eq!(tag_skeleton(&result.translation), vec!["<h1>", "</h1>"]);
    assert_eq!(text_nodes(&result.translation), vec!["Hola"]);
}

#[tokio::test]
async fn test_shared_orchestrator_serves_concurrent_requests() {
    // 同一个 Arc<Orchestrator> 并发处理不同输入，结果互不影响
    let model = Arc::new(
        FakeModel::detecting_by_text(|text| {
            if text.starts_with("Bonjour") {
                ("fr".to_string(), 0.95)
            } else {
                ("xx".to_string(), 0.2)
            }
        })
        .translating_with(|text, target| Ok(Some(format!("[{}] {}", target, text)))),
    );
    let shared = Arc::new(orchestrator(&model));

    let mut handles = Vec::new();
    for i in 0..16 {
        let o = shared.clone();
        let text = if i % 2 == 0 {
            format!("Bonjour {}", i)
        } else {
            format!("zzz {}", i)
        };
        handles.push(tokio::spawn(async move { o.run(&text, "en").await }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let outcome = handle.await.unwrap().unwrap();
        if i % 2 == 0 {
            assert_eq!(
                outcome,
                Outcome::Translated(TranslationResult {
                    translation: format!("[en] Bonjour {}", i),
                    detected_language: "fr".to_string(),
                    confidence: 0.95,
                })
            );
        } else {
            assert_eq!(
                outcome,
                Outcome::Fallback(Fallback {
                    message: LOW_CONFIDENCE_MESSAGE.to_string(),
                    detected_language: "xx".to_string(),
                    confidence: 0.2,
                })
            );
        }
    }
    assert_eq!(model.detect_calls(), 16);
    assert_eq!(model.translate_calls(), 8);
}
