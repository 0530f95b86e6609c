use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, warn};

use crate::interface_adapters::protocol::{
    AddParticipantParams, DeleteParticipantParams, GetParticipantParams, GetParticipantsParams,
    UpdateParticipantParams,
};
use crate::interface_adapters::state::AppState;

// Handler for adding a participant to an existing session. The path
// session id overrides whatever the body carries.
pub async fn add_participant(
    State(state): State<AppState>,
    Path((_version, session_id)): Path<(String, String)>,
    Json(mut params): Json<AddParticipantParams>,
) -> Response {
    params.session_id = session_id.clone();
    let result = state.registry.lock().await.add_participant(params);

    if !result.errors.is_empty() {
        warn!(%session_id, errors = ?result.errors, "add participant rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    (StatusCode::CREATED, Json(result)).into_response()
}

// Handler for listing every participant of an existing session.
pub async fn get_participants(
    State(state): State<AppState>,
    Path((_version, session_id)): Path<(String, String)>,
) -> Response {
    let result = state
        .registry
        .lock()
        .await
        .get_participants(GetParticipantsParams {
            session_id: session_id.clone(),
        });

    if !result.errors.is_empty() {
        warn!(%session_id, errors = ?result.errors, "get participants rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    (StatusCode::OK, Json(result)).into_response()
}

// Handler for retrieving a single participant of an existing session.
pub async fn get_participant(
    State(state): State<AppState>,
    Path((_version, session_id, participant_id)): Path<(String, String, String)>,
) -> Response {
    let result = state
        .registry
        .lock()
        .await
        .get_participant(GetParticipantParams {
            session_id: session_id.clone(),
            participant_id: participant_id.clone(),
        });

    if !result.errors.is_empty() {
        warn!(%session_id, %participant_id, errors = ?result.errors, "get participant rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    if result.participant.is_none() {
        debug!(%session_id, %participant_id, "no such participant");
        return StatusCode::NOT_FOUND.into_response();
    }
    (StatusCode::OK, Json(result)).into_response()
}

// Handler for renaming a participant. Path ids override the body.
pub async fn update_participant(
    State(state): State<AppState>,
    Path((_version, session_id, participant_id)): Path<(String, String, String)>,
    Json(mut params): Json<UpdateParticipantParams>,
) -> Response {
    params.session_id = session_id.clone();
    params.participant_id = participant_id.clone();
    let result = state.registry.lock().await.update_participant(params);

    if !result.errors.is_empty() {
        warn!(%session_id, %participant_id, errors = ?result.errors, "update participant rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    if result.participant.is_none() {
        debug!(%session_id, %participant_id, "no such participant");
        return StatusCode::NOT_FOUND.into_response();
    }
    (StatusCode::OK, Json(result)).into_response()
}

// Handler for removing a participant from an existing session.
pub async fn delete_participant(
    State(state): State<AppState>,
    Path((_version, session_id, participant_id)): Path<(String, String, String)>,
) -> Response {
    let result = state
        .registry
        .lock()
        .await
        .delete_participant(DeleteParticipantParams {
            session_id: session_id.clone(),
            participant_id: participant_id.clone(),
        });

    if !result.errors.is_empty() {
        warn!(%session_id, %participant_id, errors = ?result.errors, "delete participant rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    if result.participant.is_none() {
        debug!(%session_id, %participant_id, "no such participant");
        return StatusCode::NOT_FOUND.into_response();
    }
    (StatusCode::OK, Json(result)).into_response()
}
