// HTTP boundary: POST /api/translate
use crate::application::orchestrator::Orchestrator;
use crate::domain::error::TranslateError;
use crate::interfaces::api::request::{FieldErrors, TranslateBody, INVALID_BODY};
use crate::interfaces::api::translator::{handle_body, TranslateReply};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct ServerState {
    pub orchestrator: Arc<Orchestrator>,
    pub model_name: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model: String,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/translate", post(translate_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(state: ServerState, addr: &str, shutdown: F) -> Result<(), TranslateError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn health_check(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model_name,
    })
}

async fn translate_handler(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    // 语法错误归到 body，字段类型错误归到各自字段
    let value = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            let mut details = FieldErrors::new();
            details.insert("body".to_string(), vec![rejection.body_text()]);
            return invalid(details);
        }
    };
    let body = match TranslateBody::from_json(&value) {
        Ok(body) => body,
        Err(details) => return invalid(details),
    };

    reply_response(handle_body(&state.orchestrator, body).await)
}

/// Map a typed reply to its status code and JSON payload.
pub fn reply_response(reply: TranslateReply) -> Response {
    match reply {
        TranslateReply::Success {
            translation,
            detected_language,
            confidence,
        } => (
            StatusCode::OK,
            Json(json!({
                "translation": translation,
                "detectedLanguage": detected_language,
                "confidence": confidence,
            })),
        )
            .into_response(),
        TranslateReply::LowConfidence {
            message,
            detected_language,
            confidence,
        } => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": message,
                "detectedLanguage": detected_language,
                "confidence": confidence,
            })),
        )
            .into_response(),
        TranslateReply::Invalid { details, .. } => invalid(details),
        TranslateReply::Error { error } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": error })),
        )
            .into_response(),
    }
}

fn invalid(details: FieldErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": INVALID_BODY,
            "details": details,
        })),
    )
        .into_response()
}
