use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, warn};

use crate::interface_adapters::protocol::{
    CreateSessionParams, DeleteSessionParams, GetSessionParams,
};
use crate::interface_adapters::state::AppState;

// Handler for creating a new live view session.
pub async fn create_session(
    State(state): State<AppState>,
    Path(_version): Path<String>,
    Json(params): Json<CreateSessionParams>,
) -> Response {
    let result = state.registry.lock().await.create_session(params);

    if !result.errors.is_empty() {
        warn!(errors = ?result.errors, "create session rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    (StatusCode::CREATED, Json(result)).into_response()
}

// Handler for retrieving an existing live view session.
pub async fn get_session(
    State(state): State<AppState>,
    Path((_version, session_id)): Path<(String, String)>,
) -> Response {
    let result = state.registry.lock().await.get_session(GetSessionParams {
        id: session_id.clone(),
    });

    if !result.errors.is_empty() {
        warn!(%session_id, errors = ?result.errors, "get session rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    if result.session.is_none() {
        debug!(%session_id, "no such session");
        return StatusCode::NOT_FOUND.into_response();
    }
    (StatusCode::OK, Json(result)).into_response()
}

// Handler for deleting an existing live view session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path((_version, session_id)): Path<(String, String)>,
) -> Response {
    let result = state
        .registry
        .lock()
        .await
        .delete_session(DeleteSessionParams {
            id: session_id.clone(),
        });

    if !result.errors.is_empty() {
        warn!(%session_id, errors = ?result.errors, "delete session rejected");
        return (StatusCode::BAD_REQUEST, Json(result)).into_response();
    }
    if result.session.is_none() {
        debug!(%session_id, "no such session");
        return StatusCode::NOT_FOUND.into_response();
    }
    (StatusCode::OK, Json(result)).into_response()
}
