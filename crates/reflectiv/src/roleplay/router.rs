use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{SessionId, SessionView};
use super::repository::{ScoreStore, SessionStore, SessionStoreError};
use super::service::{RoleplayServiceError, RoleplaySessionService};
use crate::cues::ExtractedSignal;
use crate::scoring::{score_conversation, MetricResultView};
use crate::transcript::{read_transcript, Speaker, Turn};

/// Router builder exposing the roleplay session and scoring endpoints.
pub fn roleplay_router<S, P>(service: Arc<RoleplaySessionService<S, P>>) -> Router
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    Router::new()
        .route("/api/v1/roleplay/sessions", post(start_handler::<S, P>))
        .route(
            "/api/v1/roleplay/sessions/:session_id",
            get(session_handler::<S, P>),
        )
        .route(
            "/api/v1/roleplay/sessions/:session_id/turns",
            post(turn_handler::<S, P>),
        )
        .route(
            "/api/v1/roleplay/sessions/:session_id/end",
            post(end_handler::<S, P>),
        )
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/scores/latest", get(latest_scores_handler::<S, P>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartSessionRequest {
    pub(crate) persona: String,
    pub(crate) specialty: String,
    #[serde(default)]
    pub(crate) opening_line: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordTurnRequest {
    pub(crate) speaker: Speaker,
    pub(crate) text: String,
}

/// Stateless scoring request: inline turns, or a `Speaker,Text` CSV
/// export. Turns win when both are present.
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(default)]
    pub(crate) turns: Option<Vec<Turn>>,
    #[serde(default)]
    pub(crate) transcript_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionResponse {
    pub(crate) session: SessionView,
    pub(crate) signals: Vec<ExtractedSignal>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DebriefResponse {
    pub(crate) session: SessionView,
    pub(crate) results: Vec<MetricResultView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) results: Vec<MetricResultView>,
}

pub(crate) async fn start_handler<S, P>(
    State(service): State<Arc<RoleplaySessionService<S, P>>>,
    axum::Json(request): axum::Json<StartSessionRequest>,
) -> Response
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    let StartSessionRequest {
        persona,
        specialty,
        opening_line,
    } = request;

    match service.start(persona, specialty, opening_line, Utc::now()) {
        Ok(outcome) => {
            let body = SessionResponse {
                session: outcome.session.summary_view(),
                signals: outcome.signals,
            };
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<S, P>(
    State(service): State<Arc<RoleplaySessionService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(session) => (StatusCode::OK, axum::Json(session.summary_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn turn_handler<S, P>(
    State(service): State<Arc<RoleplaySessionService<S, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<RecordTurnRequest>,
) -> Response
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    let id = SessionId(session_id);
    match service.record_turn(&id, request.speaker, request.text, Utc::now()) {
        Ok(outcome) => {
            let body = SessionResponse {
                session: outcome.session.summary_view(),
                signals: outcome.signals,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn end_handler<S, P>(
    State(service): State<Arc<RoleplaySessionService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    let id = SessionId(session_id);
    match service.end(&id, Utc::now()) {
        Ok(debrief) => {
            let body = DebriefResponse {
                session: debrief.session.summary_view(),
                results: debrief
                    .results
                    .iter()
                    .map(MetricResultView::from)
                    .collect(),
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler(axum::Json(request): axum::Json<ScoreRequest>) -> Response {
    let turns = match request {
        ScoreRequest {
            turns: Some(turns), ..
        } => turns,
        ScoreRequest {
            transcript_csv: Some(csv),
            ..
        } => match read_transcript(Cursor::new(csv.into_bytes())) {
            Ok(turns) => turns,
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        },
        ScoreRequest { .. } => {
            let payload = json!({ "error": "provide either turns or transcript_csv" });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let results = score_conversation(&turns);
    let body = ScoreResponse {
        results: results.iter().map(MetricResultView::from).collect(),
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn latest_scores_handler<S, P>(
    State(service): State<Arc<RoleplaySessionService<S, P>>>,
) -> Response
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    match service.latest_scores() {
        Ok(Some(snapshot)) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Ok(None) => {
            let payload = json!({ "error": "no scores recorded yet" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: RoleplayServiceError) -> Response {
    let status = match &error {
        RoleplayServiceError::Session(SessionStoreError::NotFound) => StatusCode::NOT_FOUND,
        RoleplayServiceError::Session(SessionStoreError::Conflict)
        | RoleplayServiceError::SessionClosed(_) => StatusCode::CONFLICT,
        RoleplayServiceError::Session(SessionStoreError::Unavailable(_))
        | RoleplayServiceError::Scores(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
