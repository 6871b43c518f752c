use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::http::SessionHttpHandler;
use crate::sessions::handlers::responses::{NextImageResponse, SubmitGuessResponse};
use crate::sessions::requests::GuessRequest;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn next_image(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<NextImageResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .next_image()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit_guess(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(guess): Json<GuessRequest>,
) -> Json<SubmitGuessResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .submit_guess(guess)
        .await;
    Json(response)
}
