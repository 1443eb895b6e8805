//! Generation Routes
//!
//! `POST /penman/:kind` treats the HTTP body as the gateway payload and
//! answers with the trigger response's status and body. `POST
//! /penman/:kind/events` takes a full trigger event and returns the trigger
//! response object itself.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use penman::{ContentKind, TriggerEvent, TriggerResponse};

use crate::models::{ErrorResponse, GenerationPayload, GenerationResponse};
use crate::AppState;

fn parse_kind(raw: &str) -> Result<ContentKind, (StatusCode, String)> {
    raw.parse::<ContentKind>()
        .map_err(|e| (StatusCode::NOT_FOUND, e))
}

/// Generate content from an HTTP payload
#[utoipa::path(
    post,
    path = "/penman/{kind}",
    params(
        ("kind" = ContentKind, Path, description = "quote, blog or summarized-blog")
    ),
    request_body = GenerationPayload,
    responses(
        (status = 200, description = "Generation finished (or produced no text)", body = GenerationResponse),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 404, description = "Unknown content kind"),
        (status = 500, description = "Model or storage failure", body = ErrorResponse)
    ),
    tag = "Generation"
)]
pub async fn generate(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: String,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(rejection) => return rejection.into_response(),
    };

    let response = state
        .pipeline
        .handle(kind, &TriggerEvent::from_http_body(&body))
        .await;

    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}

/// Run a raw trigger event
#[utoipa::path(
    post,
    path = "/penman/{kind}/events",
    params(
        ("kind" = ContentKind, Path, description = "quote, blog or summarized-blog")
    ),
    request_body = TriggerEvent,
    responses(
        (status = 200, description = "Trigger response, including failures", body = TriggerResponse),
        (status = 404, description = "Unknown content kind")
    ),
    tag = "Generation"
)]
pub async fn handle_event(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(event): Json<TriggerEvent>,
) -> Result<Json<TriggerResponse>, (StatusCode, String)> {
    let kind = parse_kind(&kind)?;
    Ok(Json(state.pipeline.handle(kind, &event).await))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/penman/:kind", post(generate))
        .route("/penman/:kind/events", post(handle_event))
}
