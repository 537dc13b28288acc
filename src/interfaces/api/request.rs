use crate::domain::model::TranslationRequest;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const INVALID_BODY: &str = "Invalid request body.";
pub const TEXT_EMPTY: &str = "Text to translate cannot be empty.";
pub const TARGET_MISSING: &str = "Target language code must be provided.";
pub const REQUIRED: &str = "Required";

/// Minimum length of a target language code.
pub const MIN_TARGET_LEN: usize = 2;

/// Field name -> messages, serialized as `details`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Request body as it arrives; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

impl TranslateBody {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            target_language: Some(target_language.into()),
        }
    }

    /// Read the body out of a parsed JSON document.
    ///
    /// A field holding the wrong JSON type is reported under its own name;
    /// `null` counts as a wrong type, an absent field is left to `validate`.
    pub fn from_json(value: &Value) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let Some(object) = value.as_object() else {
            add(&mut errors, "body", &expected_string_message("object", value));
            return Err(errors);
        };

        let text = string_field(object, "text", &mut errors);
        let target_language = string_field(object, "targetLanguage", &mut errors);

        if errors.is_empty() {
            Ok(Self {
                text,
                target_language,
            })
        } else {
            Err(errors)
        }
    }

    /// Check the shape before anything remote is touched.
    pub fn validate(self) -> Result<TranslationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        match &self.text {
            None => add(&mut errors, "text", REQUIRED),
            Some(t) if t.is_empty() => add(&mut errors, "text", TEXT_EMPTY),
            Some(_) => {}
        }

        match &self.target_language {
            None => add(&mut errors, "targetLanguage", REQUIRED),
            Some(t) if t.chars().count() < MIN_TARGET_LEN => {
                add(&mut errors, "targetLanguage", TARGET_MISSING)
            }
            Some(_) => {}
        }

        match (self.text, self.target_language) {
            (Some(text), Some(target)) if errors.is_empty() => {
                Ok(TranslationRequest::new(text, target))
            }
            _ => Err(errors),
        }
    }
}

fn add(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

fn string_field(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field)? {
        Value::String(s) => Some(s.clone()),
        other => {
            add(errors, field, &expected_string_message("string", other));
            None
        }
    }
}

// 与前端校验一致的类型错误文案
fn expected_string_message(expected: &str, actual: &Value) -> String {
    let received = match actual {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("Expected {}, received {}", expected, received)
}
