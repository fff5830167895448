//! HTTP handlers for the webhook API.
//!
//! The webhook always answers HTTP 200: voice platforms expect fallback
//! text, not error statuses, so every core outcome maps to a reply
//! envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::services::{self, SkillReply};

use super::dto::{suggestion_buttons, HealthResponse, WebhookRequest, WebhookResponse};
use super::state::AppState;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: super::dto::PROTOCOL_VERSION.to_string(),
        timetable_days: state.engine.timetable().days_with_lessons(),
    })
}

/// POST /
///
/// Main webhook endpoint for the voice platform. A malformed body yields a
/// terminal error reply rather than an HTTP error.
pub async fn webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Json<WebhookResponse> {
    let Ok(Json(request)) = payload else {
        return Json(WebhookResponse::fatal("Произошла ошибка"));
    };

    let reply = services::handle_utterance(
        &state.engine,
        state.clock.today(),
        &request.request.command,
        request.session.new,
    );

    // Edit confirmations are read back without suggestions; everything else
    // offers the standard day shortcuts.
    let buttons = match reply {
        SkillReply::Edited { .. } | SkillReply::LessonNotFound { .. } => None,
        _ => Some(suggestion_buttons()),
    };

    Json(WebhookResponse::reply(reply.text(), request.session, buttons))
}
