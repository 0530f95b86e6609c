use crate::interface_adapters::handlers::participants::{
    add_participant, delete_participant, get_participant, get_participants, update_participant,
};
use crate::interface_adapters::handlers::sessions::{create_session, delete_session, get_session};
use crate::interface_adapters::state::AppState;
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;

// Build the HTTP router for the session registry API. The leading
// version segment is captured and ignored.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/{version}/sessions",
            post(create_session)
                .put(create_session)
                .fallback(method_not_supported),
        )
        .route(
            "/{version}/sessions/{session_id}",
            get(get_session)
                .delete(delete_session)
                .fallback(method_not_supported),
        )
        .route(
            "/{version}/sessions/{session_id}/participants",
            get(get_participants)
                .post(add_participant)
                .put(add_participant)
                .fallback(method_not_supported),
        )
        .route(
            "/{version}/sessions/{session_id}/participants/{participant_id}",
            get(get_participant)
                .post(update_participant)
                .put(update_participant)
                .delete(delete_participant)
                .fallback(method_not_supported),
        )
        .layer(middleware::from_fn(json_content_type))
        .with_state(state)
}

// Fallback for HTTP methods the API does not implement.
async fn method_not_supported() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

// Every response advertises a JSON body, the empty 404s included.
async fn json_content_type(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    response
}
