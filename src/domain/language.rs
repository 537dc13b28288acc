use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

pub static LANGUAGES: &[Language] = &[
    lang("auto", "Auto-detect"),
    lang("ar", "Arabic"),
    lang("bn", "Bengali"),
    lang("cs", "Czech"),
    lang("da", "Danish"),
    lang("de", "German"),
    lang("el", "Greek"),
    lang("en", "English"),
    lang("es", "Spanish"),
    lang("fa", "Persian"),
    lang("fi", "Finnish"),
    lang("fr", "French"),
    lang("he", "Hebrew"),
    lang("hi", "Hindi"),
    lang("hu", "Hungarian"),
    lang("id", "Indonesian"),
    lang("it", "Italian"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
    lang("nl", "Dutch"),
    lang("no", "Norwegian"),
    lang("pl", "Polish"),
    lang("pt", "Portuguese"),
    lang("ro", "Romanian"),
    lang("ru", "Russian"),
    lang("sv", "Swedish"),
    lang("th", "Thai"),
    lang("tr", "Turkish"),
    lang("uk", "Ukrainian"),
    lang("vi", "Vietnamese"),
    lang("zh", "Chinese"),
];

// 按小写代码索引
static BY_CODE: Lazy<HashMap<String, &'static Language>> = Lazy::new(|| {
    LANGUAGES
        .iter()
        .map(|l| (l.code.to_ascii_lowercase(), l))
        .collect()
});

/// Look up a language by code, ignoring case.
pub fn find(code: &str) -> Option<&'static Language> {
    BY_CODE.get(&code.trim().to_ascii_lowercase()).copied()
}

/// Display name for a code; unknown codes and free-form labels pass through.
pub fn display_name(code: &str) -> String {
    find(code)
        .map(|l| l.name.to_string())
        .unwrap_or_else(|| code.to_string())
}
