// Structured prompts and their output schemas
use serde_json::{json, Value};

pub fn detection_prompt(text: &str) -> String {
    format!(
        "You are an expert in language detection. Analyze the following text and determine \
         its language and your confidence level.\n\n\
         Text: {}\n\n\
         Respond with a JSON object that includes the detected language and a confidence \
         score between 0 and 1.",
        text
    )
}

pub fn translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        "You are an expert translator. Translate the text content within the following HTML \
         to {}. It is crucial that you preserve all HTML tags, attributes, and the overall \
         structure of the document. Only translate the human-readable text content found \
         between the tags.\n\nHTML: {}",
        target_language, text
    )
}

pub fn detection_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "language": { "type": "string" },
            "confidence": { "type": "number" }
        },
        "required": ["language", "confidence"]
    })
}

pub fn translation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "translation": { "type": "string" }
        },
        "required": ["translation"]
    })
}
