use crate::application::session::SessionOutcome;
use crate::domain::language;
use crate::domain::model::{HistoryEntry, AUTO_DETECT};
use crate::interfaces::api::TranslateReply;
use crate::presentation::theme::Theme;
use serde_json::{json, Value};
use std::fmt::Write;

/// "Detected: French (Confidence: 95%)"
pub fn detected_label(detected_language: &str, confidence: f64) -> String {
    format!(
        "Detected: {} (Confidence: {}%)",
        language::display_name(detected_language),
        (confidence * 100.0).round() as i64
    )
}

/// Format one session outcome as terminal text.
pub fn format_outcome(
    outcome: &SessionOutcome,
    source_lang: &str,
    target_lang: &str,
    theme: &Theme,
    enable_emoji: bool,
) -> String {
    let mut output = String::new();

    let header = format!(
        "{} → {}",
        language::display_name(source_lang),
        language::display_name(target_lang)
    );

    match outcome {
        SessionOutcome::Reply(TranslateReply::Success {
            translation,
            detected_language,
            confidence,
        }) => {
            let indicator = if enable_emoji { "🌐 [online]" } else { "[online]" };
            writeln!(output, "{} {}", (theme.lang)(&header), indicator).ok();
            writeln!(output).ok();
            writeln!(output, "  {}", (theme.para)(translation)).ok();
            // 只有自动检测时才显示检测结果
            if source_lang == AUTO_DETECT {
                writeln!(output).ok();
                writeln!(
                    output,
                    "  {}",
                    (theme.detected)(&detected_label(detected_language, *confidence))
                )
                .ok();
            }
        }
        SessionOutcome::Reply(TranslateReply::LowConfidence {
            message,
            detected_language,
            confidence,
        }) => {
            let prefix = if enable_emoji { "⚠️  " } else { "" };
            writeln!(output, "{}", (theme.lang)(&header)).ok();
            writeln!(output, "  {}{}", prefix, (theme.warn)(message)).ok();
            writeln!(
                output,
                "  {}",
                (theme.detected)(&detected_label(detected_language, *confidence))
            )
            .ok();
        }
        SessionOutcome::Reply(TranslateReply::Invalid { error, details }) => {
            writeln!(output, "{}", (theme.error)(error)).ok();
            for (field, messages) in details {
                for message in messages {
                    writeln!(output, "  {}: {}", field, message).ok();
                }
            }
        }
        SessionOutcome::Reply(TranslateReply::Error { error }) => {
            writeln!(output, "{}", (theme.error)(error)).ok();
        }
        SessionOutcome::Cached(translation) => {
            let indicator = if enable_emoji { "💾 [cache]" } else { "[cache]" };
            writeln!(output, "{} {}", (theme.lang)(&header), indicator).ok();
            writeln!(output).ok();
            writeln!(output, "  {}", (theme.para)(translation)).ok();
        }
        SessionOutcome::NotCached => {
            writeln!(
                output,
                "{}",
                (theme.warn)("Offline: this translation is not available in your offline cache.")
            )
            .ok();
        }
    }

    output
}

/// JSON form of a session outcome for `--json`.
pub fn outcome_json(outcome: &SessionOutcome) -> Value {
    match outcome {
        SessionOutcome::Reply(reply) => json!(reply),
        SessionOutcome::Cached(translation) => json!({
            "status": "cached",
            "translation": translation,
        }),
        SessionOutcome::NotCached => json!({
            "status": "not_cached",
            "error": "This translation is not available in your offline cache.",
        }),
    }
}

/// Format the history list, newest first.
pub fn format_history(entries: &[HistoryEntry], theme: &Theme) -> String {
    let mut output = String::new();

    writeln!(output, "{}", (theme.title)("Translation History")).ok();

    if entries.is_empty() {
        writeln!(output).ok();
        writeln!(output, "  Your translation history is empty.").ok();
        writeln!(output, "  Start translating to see your history here.").ok();
        return output;
    }

    let cutoff = "⸺".repeat(40);
    for (i, entry) in entries.iter().enumerate() {
        writeln!(output, "  {}", (theme.line)(&cutoff)).ok();
        let langs = format!(
            "{} → {}",
            language::display_name(&entry.source_lang),
            language::display_name(&entry.target_lang)
        );
        writeln!(
            output,
            "  {}. {}",
            (theme.idx)(&(i + 1).to_string()),
            (theme.lang)(&langs)
        )
        .ok();
        writeln!(output, "     {}", entry.source_text).ok();
        writeln!(output, "     {}", (theme.para)(&entry.translated_text)).ok();
    }

    output
}
