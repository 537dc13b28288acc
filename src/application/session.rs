use crate::domain::error::TranslateError;
use crate::domain::model::HistoryEntry;
use crate::interfaces::api::{get_translation, TranslateReply};
use crate::state::AppState;
use tracing::{debug, warn};

/// One client-side translation request.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub text: String,
    /// Answer from the offline cache only, never touching the model.
    pub offline: bool,
    /// Record successful translations into history and the offline cache.
    pub record: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Reply(TranslateReply),
    Cached(String),
    NotCached,
}

pub async fn translate(
    state: &AppState,
    req: &SessionRequest,
) -> Result<SessionOutcome, TranslateError> {
    if req.text.trim().is_empty() {
        return Err(TranslateError::Validation(
            "Text to translate cannot be empty.".to_string(),
        ));
    }

    // 1. Offline: cache only
    if req.offline {
        return match state
            .offline
            .lookup(&req.source_lang, &req.target_lang, &req.text)
            .await?
        {
            Some(translation) => Ok(SessionOutcome::Cached(translation)),
            None => Ok(SessionOutcome::NotCached),
        };
    }

    // 2. Online
    let reply = get_translation(&state.orchestrator, &req.text, &req.target_lang).await;

    // 3. Write back, only real translations
    if req.record {
        if let TranslateReply::Success { translation, .. } = &reply {
            remember(state, req, translation).await;
        }
    }

    Ok(SessionOutcome::Reply(reply))
}

// Storage failures never hide a translation the user already paid for.
async fn remember(state: &AppState, req: &SessionRequest, translation: &str) {
    let entry = HistoryEntry::new(
        req.source_lang.as_str(),
        req.target_lang.as_str(),
        req.text.as_str(),
        translation,
    );
    match state.history.record(entry).await {
        Ok(()) => debug!("history updated"),
        Err(e) => warn!("Error writing history: {}", e),
    }

    if let Err(e) = state
        .offline
        .remember(&req.source_lang, &req.target_lang, &req.text, translation)
        .await
    {
        warn!("Error writing offline cache: {}", e);
    }
}
