use crate::application::markup;
use crate::domain::error::TranslateError;
use crate::domain::traits::LanguageModel;
use std::sync::Arc;
use tracing::warn;

/// Markup-preserving translation over the remote model.
#[derive(Clone)]
pub struct Translator {
    model: Arc<dyn LanguageModel>,
}

impl Translator {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let answer = self
            .model
            .translate_markup(text, target_language)
            .await
            .map_err(|e| match e {
                TranslateError::Translation(_) => e,
                other => TranslateError::Translation(other.to_string()),
            })?;

        let translation = answer.ok_or_else(|| {
            TranslateError::Translation("model returned no translation".to_string())
        })?;

        // 只记录，不拒绝：结构偏差交给调用方判断
        if !markup::same_structure(text, &translation) {
            warn!(
                target_language,
                "translated markup does not keep the source tag structure"
            );
        }

        Ok(translation)
    }
}
