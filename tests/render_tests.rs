//! 输出渲染测试

use smart_translate::application::session::SessionOutcome;
use smart_translate::interfaces::api::TranslateReply;
use smart_translate::presentation::render::{detected_label, outcome_json};

#[test]
fn test_detected_label_rounds_percent() {
    assert_eq!(
        detected_label("fr", 0.954),
        "Detected: French (Confidence: 95%)"
    );
    // 表外代码原样显示
    assert_eq!(
        detected_label("unknown", 0.3),
        "Detected: unknown (Confidence: 30%)"
    );
}

#[test]
fn test_cached_json_has_status() {
    let v = outcome_json(&SessionOutcome::Cached("Hola".to_string()));
    assert_eq!(v["status"], "cached");
    assert_eq!(v["translation"], "Hola");
}

#[test]
fn test_reply_json_is_tagged() {
    let v = outcome_json(&SessionOutcome::Reply(TranslateReply::Success {
        translation: "Hello world".to_string(),
        detected_language: "fr".to_string(),
        confidence: 0.95,
    }));
    assert_eq!(v["status"], "success");
    assert_eq!(v["detectedLanguage"], "fr");
}
